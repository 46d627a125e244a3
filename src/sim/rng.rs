//! Random number source for drift and wiggle
//!
//! The simulation only needs uniform reals in `[0, 1)`. Sessions normally
//! run on a seeded `Pcg32`; tests and replays can plug in a fixed sequence.

use rand::Rng;
use rand_pcg::Pcg32;

/// Produces uniform reals in `[0, 1)`
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;

    /// Uniform value in `[lo, hi)`
    #[inline]
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }

    /// Uniform value in `[-magnitude, magnitude)`
    #[inline]
    fn symmetric(&mut self, magnitude: f32) -> f32 {
        self.range(-magnitude, magnitude)
    }
}

impl UniformSource for Pcg32 {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Replays a fixed list of values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Values are clamped into `[0, 1)` and non-finite values become 0.5.
    /// An empty list behaves like `[0.5]`, which maps every symmetric draw
    /// to zero.
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let mut values: Vec<f32> = values
            .into_iter()
            .map(|v| {
                if v.is_finite() {
                    v.clamp(0.0, 1.0 - f32::EPSILON)
                } else {
                    0.5
                }
            })
            .collect();
        if values.is_empty() {
            values.push(0.5);
        }
        Self { values, cursor: 0 }
    }

    /// Always returns `value`
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }

    /// How many values have been drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pcg_in_unit_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_sequence_wraps() {
        let mut seq = SequenceSource::new([0.0, 0.25]);
        assert_eq!(seq.next_unit(), 0.0);
        assert_eq!(seq.next_unit(), 0.25);
        assert_eq!(seq.next_unit(), 0.0);
        assert_eq!(seq.draws(), 3);
    }

    #[test]
    fn test_range_and_symmetric() {
        let mut half = SequenceSource::constant(0.5);
        assert_eq!(half.symmetric(10.0), 0.0);
        assert_eq!(half.range(2.0, 4.0), 3.0);

        let mut low = SequenceSource::constant(0.0);
        assert_eq!(low.symmetric(10.0), -10.0);
    }

    #[test]
    fn test_sequence_replaces_non_finite() {
        let mut seq = SequenceSource::new([f32::NAN, f32::INFINITY, 2.0]);
        assert_eq!(seq.next_unit(), 0.5);
        assert_eq!(seq.next_unit(), 0.5);
        assert_eq!(seq.next_unit(), 1.0 - f32::EPSILON);
        assert_eq!(seq.symmetric(4.0), 0.0);
    }
}
