//! # Word ``{ String <-> T }`` Vocabulary

use crate::{
    errors::{MCResult, MorphchipperError},
    types::{MCHashMap, TokenType, token_to_usize, try_token_from_usize},
    vocab::SpecialTokens,
};

/// A bijective word/ID store with reserved special-token IDs.
///
/// Words are admitted once, during training, via [`Vocabulary::add_word`];
/// afterward the vocabulary is treated as read-only and may be shared
/// across threads behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: TokenType> {
    /// Map of ``{ word -> T }``.
    word_to_id: MCHashMap<String, T>,

    /// Map of ``{ T -> word }``.
    id_to_word: MCHashMap<T, String>,

    /// The reserved special tokens.
    specials: SpecialTokens<T>,

    /// The next candidate ID for an ordinary word.
    next_free_id: usize,
}

impl<T: TokenType> Default for Vocabulary<T> {
    fn default() -> Self {
        Self::new(SpecialTokens::default())
    }
}

impl<T: TokenType> Vocabulary<T> {
    /// Create a vocabulary holding only the given special tokens.
    ///
    /// ## Arguments
    /// * `specials` - The reserved special tokens.
    ///
    /// ## Returns
    /// A new `Vocabulary` instance.
    pub fn new(specials: SpecialTokens<T>) -> Self {
        let mut word_to_id = MCHashMap::default();
        let mut id_to_word = MCHashMap::default();
        for (text, id) in specials.iter() {
            word_to_id.insert(text.to_string(), id);
            id_to_word.insert(id, text.to_string());
        }

        Self {
            word_to_id,
            id_to_word,
            specials,
            next_free_id: 0,
        }
    }

    /// Rebuild a vocabulary from persisted ordinary words.
    ///
    /// ## Arguments
    /// * `specials` - The reserved special tokens.
    /// * `words` - The ordinary ``(word, id)`` entries.
    ///
    /// ## Returns
    /// A `Vocabulary`, or a `Parse` error if the entries break the
    /// bijection or collide with a reserved ID.
    pub fn from_parts<I>(
        specials: SpecialTokens<T>,
        words: I,
    ) -> MCResult<Self>
    where
        I: IntoIterator<Item = (String, T)>,
    {
        let mut vocab = Self::new(specials);
        for (word, id) in words {
            if vocab.specials.is_reserved(id) {
                return Err(MorphchipperError::Parse(format!(
                    "word {word:?} uses reserved id {id}"
                )));
            }
            if vocab.word_to_id.contains_key(&word) {
                return Err(MorphchipperError::Parse(format!("duplicate word {word:?}")));
            }
            if vocab.id_to_word.contains_key(&id) {
                return Err(MorphchipperError::Parse(format!("duplicate id {id}")));
            }
            vocab.word_to_id.insert(word.clone(), id);
            vocab.id_to_word.insert(id, word);
            vocab.next_free_id = vocab.next_free_id.max(token_to_usize(id) + 1);
        }
        Ok(vocab)
    }

    /// Admit a word, assigning it the next free non-reserved ID.
    ///
    /// Already present words are a no-op.
    ///
    /// ## Arguments
    /// * `word` - The word to add.
    ///
    /// ## Returns
    /// The ID of the word; or `VocabSizeOverflow` if the ID space of `T`
    /// is exhausted.
    pub fn add_word(
        &mut self,
        word: &str,
    ) -> MCResult<T> {
        if let Some(&id) = self.word_to_id.get(word) {
            return Ok(id);
        }

        let mut id: T = try_token_from_usize(self.next_free_id)?;
        while self.specials.is_reserved(id) {
            self.next_free_id += 1;
            id = try_token_from_usize(self.next_free_id)?;
        }

        self.word_to_id.insert(word.to_string(), id);
        self.id_to_word.insert(id, word.to_string());
        self.next_free_id += 1;

        Ok(id)
    }

    /// Look up the ID of a word.
    ///
    /// ## Returns
    /// The word's ID, or the unknown-token ID for unseen words.
    pub fn lookup(
        &self,
        word: &str,
    ) -> T {
        self.word_to_id
            .get(word)
            .copied()
            .unwrap_or_else(|| self.unk_id())
    }

    /// Look up the ID of a word, if present.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_to_id.get(word).copied()
    }

    /// Does the vocabulary contain this word?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Get the word for an ID, if the ID was assigned by this vocabulary.
    pub fn try_reverse(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_to_word.get(&id).map(String::as_str)
    }

    /// Get the word for an ID.
    ///
    /// ## Panics
    /// If `id` was never assigned by this vocabulary; callers must only
    /// pass IDs produced by the same instance.
    pub fn reverse(
        &self,
        id: T,
    ) -> &str {
        match self.try_reverse(id) {
            Some(word) => word,
            None => panic!("id {id} was not assigned by this vocabulary"),
        }
    }

    /// The number of words, including special tokens.
    pub fn size(&self) -> usize {
        self.word_to_id.len()
    }

    /// Alias of [`Vocabulary::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns true if the vocabulary holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.word_to_id.is_empty()
    }

    /// One past the largest assigned ID.
    ///
    /// Equal to [`Vocabulary::size`] unless reserved IDs leave gaps.
    pub fn id_bound(&self) -> usize {
        self.id_to_word
            .keys()
            .map(|&id| token_to_usize(id) + 1)
            .max()
            .unwrap_or(0)
    }

    /// The number of ordinary (non-special) words.
    pub fn ordinary_len(&self) -> usize {
        self.size() - self.specials.len()
    }

    /// The reserved special tokens.
    pub fn special_tokens(&self) -> &SpecialTokens<T> {
        &self.specials
    }

    /// Is this ID a reserved special token?
    pub fn is_special(
        &self,
        id: T,
    ) -> bool {
        self.specials.is_reserved(id)
    }

    /// The unknown-word ID.
    pub fn unk_id(&self) -> T {
        self.specials.unknown().1
    }

    /// The padding ID.
    pub fn pad_id(&self) -> T {
        self.specials.pad().1
    }

    /// The start-of-sequence ID.
    pub fn start_id(&self) -> T {
        self.specials.start().1
    }

    /// The end-of-sequence ID.
    pub fn end_id(&self) -> T {
        self.specials.end().1
    }

    /// Iterate over all ``(id, word)`` entries, sorted by ID.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        let mut items: Vec<(T, &str)> = self
            .id_to_word
            .iter()
            .map(|(&id, word)| (id, word.as_str()))
            .collect();
        items.sort_by_key(|&(id, _)| id);
        items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compat::traits::static_is_send_sync_check,
        vocab::{SpecialTokensConfig, special_tokens::SpecialTokenEntry},
    };

    type T = u32;

    fn sparse_specials() -> SpecialTokens<T> {
        SpecialTokensConfig {
            pad: SpecialTokenEntry::new("<pad>", 0),
            unknown: SpecialTokenEntry::new("<unk>", 1),
            start: SpecialTokenEntry::new("<sos>", 5),
            end: SpecialTokenEntry::new("<eos>", 6),
            extra: vec![],
        }
        .build()
        .unwrap()
    }

    #[test]
    fn test_new_has_specials() {
        let vocab: Vocabulary<T> = Vocabulary::default();
        static_is_send_sync_check(&vocab);

        assert_eq!(vocab.size(), 4);
        assert_eq!(vocab.ordinary_len(), 0);
        assert_eq!(vocab.lookup("[PAD]"), 0);
        assert_eq!(vocab.lookup("[UNK]"), 1);
        assert_eq!(vocab.reverse(3), "[EOS]");
        assert_eq!(vocab.unk_id(), 1);
    }

    #[test]
    fn test_add_word_skips_reserved_ids() {
        let mut vocab = Vocabulary::new(sparse_specials());

        let ids = ["a", "b", "c", "d"]
            .iter()
            .map(|w| vocab.add_word(w).unwrap())
            .collect::<Vec<T>>();

        assert_eq!(ids, vec![2, 3, 4, 7]);
        assert_eq!(vocab.size(), 8);
        assert_eq!(vocab.id_bound(), 8);

        let mut gappy = Vocabulary::new(sparse_specials());
        gappy.add_word("a").unwrap();
        assert_eq!(gappy.size(), 5);
        assert_eq!(gappy.id_bound(), 7);
        assert_eq!(vocab.lookup("<sos>"), 5);
        assert_eq!(vocab.lookup("<eos>"), 6);
    }

    #[test]
    fn test_add_word_is_idempotent() {
        let mut vocab: Vocabulary<T> = Vocabulary::default();
        let first = vocab.add_word("ev").unwrap();
        let again = vocab.add_word("ev").unwrap();

        assert_eq!(first, 4);
        assert_eq!(first, again);
        assert_eq!(vocab.lookup("ev"), first);
        assert_eq!(vocab.size(), 5);
    }

    #[test]
    fn test_lookup_unknown() {
        let vocab: Vocabulary<T> = Vocabulary::default();
        assert_eq!(vocab.lookup("never-seen"), vocab.unk_id());
        assert_eq!(vocab.get("never-seen"), None);
        assert!(!vocab.contains("never-seen"));
    }

    #[test]
    fn test_bijection_round_trip() {
        let mut vocab = Vocabulary::new(sparse_specials());
        for w in ["kitap", "#lar", "#ım", "ev", "#de", "git"] {
            vocab.add_word(w).unwrap();
        }

        for (id, word) in vocab.iter() {
            assert_eq!(vocab.lookup(word), id);
            assert_eq!(vocab.lookup(vocab.reverse(id)), id);
        }
        assert_eq!(vocab.iter().count(), vocab.size());
    }

    #[test]
    fn test_try_reverse_invalid() {
        let vocab: Vocabulary<T> = Vocabulary::default();
        assert_eq!(vocab.try_reverse(99), None);
    }

    #[test]
    #[should_panic(expected = "was not assigned")]
    fn test_reverse_invalid_panics() {
        let vocab: Vocabulary<T> = Vocabulary::default();
        let _ = vocab.reverse(99);
    }

    #[test]
    fn test_add_word_overflow() {
        let specials: SpecialTokens<u8> = SpecialTokens::default();
        let mut vocab = Vocabulary::new(specials);
        for i in 0..252 {
            vocab.add_word(&format!("w{i}")).unwrap();
        }
        assert_eq!(vocab.size(), 256);
        assert!(matches!(
            vocab.add_word("overflow"),
            Err(MorphchipperError::VocabSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_from_parts() {
        let vocab = Vocabulary::from_parts(
            sparse_specials(),
            vec![("a".to_string(), 2), ("b".to_string(), 7)],
        )
        .unwrap();
        assert_eq!(vocab.size(), 6);
        assert_eq!(vocab.lookup("b"), 7);

        let err = Vocabulary::from_parts(sparse_specials(), vec![("a".to_string(), 5)]);
        assert!(matches!(err, Err(MorphchipperError::Parse(_))));

        let err = Vocabulary::from_parts(
            sparse_specials(),
            vec![("a".to_string(), 2), ("a".to_string(), 3)],
        );
        assert!(matches!(err, Err(MorphchipperError::Parse(_))));
    }
}
