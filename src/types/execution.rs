//! Execution books: per-author records of matched lots.
//!
//! One book is built for each side on every matching round. Entries for an
//! author appear in match order; authors are kept in name order so that two
//! books with the same content compare and hash identically.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

/// One matched lot, tagged with the counterparty order id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedAmount {
    /// Amount traded in this pairing
    pub amount: u64,
    /// Id of the opposing order this lot matched against
    pub offer_id: String,
}

impl MatchedAmount {
    pub fn new(amount: u64, offer_id: impl Into<String>) -> Self {
        Self {
            amount,
            offer_id: offer_id.into(),
        }
    }
}

/// Author name → matched lots, in match order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionBook {
    entries: BTreeMap<String, Vec<MatchedAmount>>,
}

impl ExecutionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a matched lot for `author`, creating the entry if absent.
    pub fn record(&mut self, author: &str, matched: MatchedAmount) {
        self.entries
            .entry(author.to_string())
            .or_default()
            .push(matched);
    }

    /// Matched lots for one author.
    pub fn get(&self, author: &str) -> Option<&[MatchedAmount]> {
        self.entries.get(author).map(Vec::as_slice)
    }

    /// Iterate authors (name order) with their matched lots.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchedAmount])> {
        self.entries
            .iter()
            .map(|(name, lots)| (name.as_str(), lots.as_slice()))
    }

    /// Number of authors with at least one match.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of matched lots across all authors.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Total matched amount per author.
    pub fn totals(&self) -> BTreeMap<String, u64> {
        self.entries
            .iter()
            .map(|(name, lots)| (name.clone(), lots.iter().map(|m| m.amount).sum()))
            .collect()
    }

    /// Total matched amount on this side.
    pub fn total_amount(&self) -> u64 {
        self.entries
            .values()
            .flat_map(|lots| lots.iter())
            .map(|m| m.amount)
            .sum()
    }

    /// Feed a length-prefixed encoding of the book into `hasher`.
    fn hash_into(&self, hasher: &mut Sha256) {
        hasher.update((self.entries.len() as u64).to_le_bytes());
        for (name, lots) in &self.entries {
            hasher.update((name.len() as u64).to_le_bytes());
            hasher.update(name.as_bytes());
            hasher.update((lots.len() as u64).to_le_bytes());
            for m in lots {
                hasher.update(m.amount.to_le_bytes());
                hasher.update((m.offer_id.len() as u64).to_le_bytes());
                hasher.update(m.offer_id.as_bytes());
            }
        }
    }
}

/// The pair of books produced by one matching round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionBooks {
    pub bid_execution_book: ExecutionBook,
    pub ask_execution_book: ExecutionBook,
}

impl ExecutionBooks {
    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.bid_execution_book.is_empty() && self.ask_execution_book.is_empty()
    }

    /// SHA-256 over the bid book followed by the ask book.
    ///
    /// Identical books always produce the same digest.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        self.bid_execution_book.hash_into(&mut hasher);
        self.ask_execution_book.hash_into(&mut hasher);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_match_order() {
        let mut book = ExecutionBook::new();
        book.record("Alice", MatchedAmount::new(5, "a-1"));
        book.record("Alice", MatchedAmount::new(2, "a-2"));
        book.record("Bob", MatchedAmount::new(5, "a-1"));

        let alice = book.get("Alice").unwrap();
        assert_eq!(alice.len(), 2);
        assert_eq!(alice[0], MatchedAmount::new(5, "a-1"));
        assert_eq!(alice[1], MatchedAmount::new(2, "a-2"));
        assert_eq!(book.len(), 2);
        assert_eq!(book.entry_count(), 3);
        assert!(book.get("Carol").is_none());
    }

    #[test]
    fn test_totals() {
        let mut book = ExecutionBook::new();
        book.record("Alice", MatchedAmount::new(5, "x"));
        book.record("Alice", MatchedAmount::new(2, "y"));
        book.record("Bob", MatchedAmount::new(4, "x"));

        let totals = book.totals();
        assert_eq!(totals.get("Alice"), Some(&7));
        assert_eq!(totals.get("Bob"), Some(&4));
        assert_eq!(book.total_amount(), 11);
    }

    #[test]
    fn test_empty_books() {
        let books = ExecutionBooks::default();
        assert!(books.is_empty());
        assert_eq!(books.bid_execution_book.total_amount(), 0);
    }

    #[test]
    fn test_digest_deterministic() {
        let mut books = ExecutionBooks::default();
        books
            .bid_execution_book
            .record("Alice", MatchedAmount::new(5, "ask-1"));
        books
            .ask_execution_book
            .record("Bob", MatchedAmount::new(5, "bid-1"));

        assert_eq!(books.digest(), books.clone().digest());
        assert_ne!(books.digest(), ExecutionBooks::default().digest());
    }

    #[test]
    fn test_digest_distinguishes_sides() {
        let mut left = ExecutionBooks::default();
        left.bid_execution_book
            .record("Alice", MatchedAmount::new(5, "x"));

        let mut right = ExecutionBooks::default();
        right
            .ask_execution_book
            .record("Alice", MatchedAmount::new(5, "x"));

        assert_ne!(left.digest(), right.digest());
    }
}
