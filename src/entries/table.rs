use std::collections::{hash_map, HashMap};

/// Occurrence counts keyed by the raw bytes found in the designated column.
///
/// Keys are never decoded, so values that are not valid UTF-8 are counted
/// like any other token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<Vec<u8>, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for `value`, starting at 1 for a new key.
    pub fn record(&mut self, value: &[u8]) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_vec(), 1);
            }
        }
    }

    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<usize> {
        self.counts.get(key.as_ref()).copied()
    }

    /// Occurrences of `key`, 0 when it was never seen.
    pub fn count<K: AsRef<[u8]>>(&self, key: K) -> usize {
        self.get(key).unwrap_or(0)
    }

    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.counts.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Vec<u8>, usize> {
        self.counts.iter()
    }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_initialises_then_increments() {
        let mut table = FrequencyTable::new();
        assert!(table.is_empty());

        table.record(b"08034283");
        assert_eq!(table.count("08034283"), 1);

        table.record(b"08034283");
        table.record(b"30433784");
        assert_eq!(table.count("08034283"), 2);
        assert_eq!(table.count("30433784"), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unknown_key() {
        let table: FrequencyTable = [("a", 3)].into_iter().collect();
        assert_eq!(table.get("a"), Some(3));
        assert_eq!(table.get("b"), None);
        assert_eq!(table.count("b"), 0);
        assert!(!table.contains("b"));
        assert!(table.contains("a"));
    }

    #[test]
    fn test_non_utf8_keys_stay_distinct() {
        let mut table = FrequencyTable::new();
        table.record(b"Caf\xe9");
        table.record(b"Caf\xe8");
        table.record(b"Caf\xe9");
        assert_eq!(table.len(), 2);
        assert_eq!(table.count(b"Caf\xe9"), 2);
        assert_eq!(table.count(b"Caf\xe8"), 1);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut left = FrequencyTable::new();
        left.record(b"x");
        left.record(b"y");
        left.record(b"x");

        let right: FrequencyTable = [("y", 1), ("x", 2)].into_iter().collect();
        assert_eq!(left, right);
    }
}
