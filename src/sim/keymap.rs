//! Keyboard layout as spatial geometry
//!
//! Each key pushes the blob toward where it sits on the keyboard: `q` is
//! up-left, `m` is down and right of center, and so on. x is normalised by
//! the widest row so shorter rows stay left-aligned rather than centered.

use std::collections::HashMap;

use glam::Vec2;

use super::input::HeldKeys;
use crate::error::TuningError;

/// Immutable key -> direction lookup
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    directions: HashMap<char, Vec2>,
}

impl KeyMap {
    /// Build the map from keyboard rows, top to bottom.
    ///
    /// For row `r` of `R` and column `c`, with `W` the widest row's length:
    /// `x = c / (W - 1) * 2 - 1`, `y = r / (R - 1) * 2 - 1`.
    /// A single row or a single column collapses to -1 on that axis.
    /// Keys are stored lower-cased, so a key appearing twice (including
    /// `a` and `A`) is rejected.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> Result<Self, TuningError> {
        if rows.is_empty() {
            return Err(TuningError::EmptyLayout);
        }
        let widest = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        if widest == 0 {
            return Err(TuningError::EmptyRows);
        }

        let x_span = (widest - 1).max(1) as f32;
        let y_span = (rows.len() - 1).max(1) as f32;

        let mut directions = HashMap::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, key) in row.as_ref().chars().enumerate() {
                let x = (c as f32 / x_span) * 2.0 - 1.0;
                let y = (r as f32 / y_span) * 2.0 - 1.0;
                let key = key.to_ascii_lowercase();
                if directions.insert(key, Vec2::new(x, y)).is_some() {
                    return Err(TuningError::DuplicateKey(key));
                }
            }
        }

        Ok(Self { directions })
    }

    /// Direction for a single key, zero if unmapped
    pub fn direction(&self, key: char) -> Vec2 {
        self.directions
            .get(&key.to_ascii_lowercase())
            .copied()
            .unwrap_or(Vec2::ZERO)
    }

    /// Direction of the first held key (in key-down order) that is mapped
    /// and is not `exclude`. Zero if there is none.
    pub fn resolve(&self, held: &HeldKeys, exclude: char) -> Vec2 {
        let exclude = exclude.to_ascii_lowercase();
        held.iter()
            .filter(|&key| key != exclude)
            .find_map(|key| self.directions.get(&key).copied())
            .unwrap_or(Vec2::ZERO)
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn contains(&self, key: char) -> bool {
        self.directions.contains_key(&key.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_LAYOUT;

    #[test]
    fn test_two_by_two() {
        let map = KeyMap::build(&["ab", "cd"]).unwrap();
        assert_eq!(map.direction('a'), Vec2::new(-1.0, -1.0));
        assert_eq!(map.direction('b'), Vec2::new(1.0, -1.0));
        assert_eq!(map.direction('c'), Vec2::new(-1.0, 1.0));
        assert_eq!(map.direction('d'), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_short_rows_left_aligned() {
        let map = KeyMap::build(&DEFAULT_LAYOUT).unwrap();
        assert_eq!(map.len(), 26);
        assert!(!map.is_empty());
        assert!(KeyMap::default().is_empty());

        // Widest row has 10 keys, so columns step by 2/9
        assert_eq!(map.direction('q'), Vec2::new(-1.0, -1.0));
        assert_eq!(map.direction('p'), Vec2::new(1.0, -1.0));
        assert_eq!(map.direction('a'), Vec2::new(-1.0, 0.0));
        assert_eq!(map.direction('z'), Vec2::new(-1.0, 1.0));

        let m = map.direction('m');
        assert!((m.x - (6.0 / 9.0 * 2.0 - 1.0)).abs() < 1e-6);
        assert_eq!(m.y, 1.0);
    }

    #[test]
    fn test_unmapped_is_zero() {
        let map = KeyMap::build(&DEFAULT_LAYOUT).unwrap();
        assert_eq!(map.direction('1'), Vec2::ZERO);
        assert_eq!(map.direction(' '), Vec2::ZERO);
        assert!(!map.contains(';'));
    }

    #[test]
    fn test_components_in_unit_range() {
        let map = KeyMap::build(&DEFAULT_LAYOUT).unwrap();
        for key in DEFAULT_LAYOUT.iter().flat_map(|row| row.chars()) {
            let dir = map.direction(key);
            assert!((-1.0..=1.0).contains(&dir.x));
            assert!((-1.0..=1.0).contains(&dir.y));
        }
    }

    #[test]
    fn test_degenerate_layouts() {
        assert!(matches!(
            KeyMap::build::<&str>(&[]),
            Err(TuningError::EmptyLayout)
        ));
        assert!(matches!(KeyMap::build(&["", ""]), Err(TuningError::EmptyRows)));

        assert!(matches!(
            KeyMap::build(&["aA"]),
            Err(TuningError::DuplicateKey('a'))
        ));
        assert!(matches!(
            KeyMap::build(&["ab", "ba"]),
            Err(TuningError::DuplicateKey('b'))
        ));

        let single = KeyMap::build(&["x"]).unwrap();
        assert_eq!(single.direction('x'), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_resolve_first_held_wins() {
        let map = KeyMap::build(&DEFAULT_LAYOUT).unwrap();
        let mut held = HeldKeys::new();
        held.press('1', false);
        held.press('p', false);
        held.press('q', false);
        assert_eq!(map.resolve(&held, ' '), Vec2::new(1.0, -1.0));

        held.release('p');
        assert_eq!(map.resolve(&held, ' '), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_resolve_skips_excluded_key() {
        let map = KeyMap::build(&["ab", "cd"]).unwrap();
        let mut held = HeldKeys::new();
        held.press('a', false);
        held.press('d', false);
        assert_eq!(map.resolve(&held, 'a'), Vec2::new(1.0, 1.0));

        // Excluded key matches whatever case it was configured in
        assert_eq!(map.resolve(&held, 'A'), Vec2::new(1.0, 1.0));

        let mut only_excluded = HeldKeys::new();
        only_excluded.press('a', false);
        assert_eq!(map.resolve(&only_excluded, 'a'), Vec2::ZERO);
        assert_eq!(map.resolve(&HeldKeys::new(), 'a'), Vec2::ZERO);
    }
}
