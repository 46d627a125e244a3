//! Held-key set fed by the platform's keyboard events
//!
//! Platform code calls `press` on key-down and `release` on key-up; the
//! simulation only reads. Keys are kept in key-down order so "first held
//! key" is well defined.

/// Currently held keys, lower-cased, in the order they went down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: Vec<char>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. OS auto-repeat events and keys already held are
    /// ignored. Returns true if the key was newly added.
    pub fn press(&mut self, key: char, repeat: bool) -> bool {
        if repeat {
            return false;
        }
        let key = key.to_ascii_lowercase();
        if self.keys.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Record a key-up. Returns true if the key was held.
    pub fn release(&mut self, key: char) -> bool {
        let key = key.to_ascii_lowercase();
        match self.keys.iter().position(|&k| k == key) {
            Some(i) => {
                self.keys.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: char) -> bool {
        self.keys.contains(&key.to_ascii_lowercase())
    }

    /// Keys in key-down order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.keys.iter().copied()
    }

    /// Drop everything (window blur: key-ups will never arrive)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<char> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut held = HeldKeys::new();
        for key in iter {
            held.press(key, false);
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut held = HeldKeys::new();
        assert!(held.press('W', false));
        assert!(held.contains('w'));
        assert!(held.contains('W'));
        assert!(held.release('w'));
        assert!(held.is_empty());
        assert!(!held.release('w'));
    }

    #[test]
    fn test_repeat_ignored() {
        let mut held = HeldKeys::new();
        assert!(!held.press('a', true));
        assert!(held.is_empty());

        held.press('a', false);
        assert!(!held.press('a', false));
        assert_eq!(held.len(), 1);
    }

    #[test]
    fn test_keydown_order() {
        let held: HeldKeys = "dab".chars().collect();
        assert_eq!(held.iter().collect::<String>(), "dab");

        let mut held = held;
        held.release('d');
        held.press('d', false);
        assert_eq!(held.iter().collect::<String>(), "abd");

        held.clear();
        assert_eq!(held.len(), 0);
    }
}
