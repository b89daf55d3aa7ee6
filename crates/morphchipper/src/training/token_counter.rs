//! # Token Counter

use crate::types::{MCHashMap, hash_map_with_capacity};

/// A token frequency counter that remembers first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCounter {
    /// Map of ``{ token -> index into entries }``.
    index: MCHashMap<String, usize>,

    /// ``(token, count)`` in first-seen order.
    entries: Vec<(String, usize)>,

    /// Sum of all counts.
    total: usize,
}

impl TokenCounter {
    /// Create an empty counter, pre-sized for `capacity` unique tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: hash_map_with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            total: 0,
        }
    }

    /// Count one occurrence of a token.
    pub fn add<S: AsRef<str>>(
        &mut self,
        token: S,
    ) {
        let token = token.as_ref();
        match self.index.get(token) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
        self.total += 1;
    }

    /// Count every token of an iterator.
    pub fn update<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    /// The count of a token; zero if never seen.
    pub fn get(
        &self,
        token: &str,
    ) -> usize {
        self.index
            .get(token)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    /// The number of unique tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// ``(token, count)`` by descending count; ties keep first-seen order.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut counter = TokenCounter::default();
        assert!(counter.is_empty());

        counter.update(["b", "a", "b", "c", "a", "b"]);
        counter.add("d".to_string());

        assert_eq!(counter.len(), 4);
        assert_eq!(counter.total(), 7);
        assert_eq!(counter.get("b"), 3);
        assert_eq!(counter.get("a"), 2);
        assert_eq!(counter.get("zzz"), 0);
    }

    #[test]
    fn test_most_common_is_stable() {
        let mut counter = TokenCounter::with_capacity(8);
        counter.update(["x", "y", "z", "y", "w", "z", "q"]);

        assert_eq!(
            counter.most_common(),
            vec![("y", 2), ("z", 2), ("x", 1), ("w", 1), ("q", 1)]
        );
    }
}
