//! # Extended Vocabulary Codec
//!
//! Pointer-generator models copy out-of-vocabulary words from a source
//! document. Each document gets its own OOV list; the `k`-th unique OOV
//! token of the document is addressed by the extended ID ``base + k``,
//! where `base` is one past the largest vocabulary ID (the vocabulary size
//! for densely numbered vocabularies).
//!
//! OOV lists are never shared across documents.

use serde::{Deserialize, Serialize};

use crate::{
    codec::{TokenCodec, token_codec::append_token},
    errors::{MCResult, MorphchipperError},
    tokenizer::TextTokenizer,
    types::{MCHashMap, TokenType, token_to_usize, try_token_from_usize},
};

/// The ordered, duplicate-free OOV list of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DocumentOovs {
    words: Vec<String>,
    index: MCHashMap<String, usize>,
}

impl From<Vec<String>> for DocumentOovs {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<DocumentOovs> for Vec<String> {
    fn from(oovs: DocumentOovs) -> Self {
        oovs.words
    }
}

impl DocumentOovs {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from words in order; repeats are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut oovs = Self::new();
        for word in words {
            oovs.insert(word.as_ref());
        }
        oovs
    }

    /// Get the index of a word, appending it if new.
    pub fn insert(
        &mut self,
        word: &str,
    ) -> usize {
        if let Some(&idx) = self.index.get(word) {
            return idx;
        }
        let idx = self.words.len();
        self.words.push(word.to_string());
        self.index.insert(word.to_string(), idx);
        idx
    }

    /// The index of a word, if present.
    pub fn index_of(
        &self,
        word: &str,
    ) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// The word at an index.
    pub fn get(
        &self,
        idx: usize,
    ) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    /// The words, in first-occurrence order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The number of OOV words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the document had no OOV words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The encoding of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEncoding<T: TokenType> {
    /// Vocabulary IDs; OOV tokens map to the unknown-token ID.
    pub plain_ids: Vec<T>,

    /// Vocabulary IDs; OOV tokens map to their pointer ID.
    pub extended_ids: Vec<T>,

    /// The document's OOV list.
    pub oovs: DocumentOovs,
}

/// The encoding of a target sequence against its source's OOV list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEncoding<T: TokenType> {
    /// Vocabulary IDs; OOV tokens map to the unknown-token ID.
    pub plain_ids: Vec<T>,

    /// Vocabulary IDs; source OOV tokens map to their pointer ID, other OOV
    /// tokens to the unknown-token ID.
    pub extended_ids: Vec<T>,
}

/// A [`TokenCodec`] with per-document pointer IDs.
#[derive(Debug, Clone)]
pub struct ExtendedCodec<T: TokenType, E: TextTokenizer> {
    codec: TokenCodec<T, E>,
    base: usize,
}

impl<T: TokenType, E: TextTokenizer> From<TokenCodec<T, E>> for ExtendedCodec<T, E> {
    fn from(codec: TokenCodec<T, E>) -> Self {
        Self::new(codec)
    }
}

impl<T: TokenType, E: TextTokenizer> ExtendedCodec<T, E> {
    /// Wrap a codec.
    pub fn new(codec: TokenCodec<T, E>) -> Self {
        let base = codec.vocab().id_bound();
        Self { codec, base }
    }

    /// The wrapped codec.
    pub fn codec(&self) -> &TokenCodec<T, E> {
        &self.codec
    }

    /// The first pointer ID.
    pub fn pointer_base(&self) -> usize {
        self.base
    }

    /// The size of the extended vocabulary for a document.
    pub fn extended_size(
        &self,
        oovs: &DocumentOovs,
    ) -> usize {
        self.base + oovs.len()
    }

    fn pointer_id(
        &self,
        idx: usize,
    ) -> MCResult<T> {
        try_token_from_usize(self.base + idx)
    }

    /// Encode a source document, collecting its OOV list.
    ///
    /// Pointer IDs start at [`ExtendedCodec::pointer_base`], one past the
    /// largest assigned ID; this is the vocabulary size unless reserved IDs
    /// leave gaps, where the size would collide with an assigned ID.
    ///
    /// ## Returns
    /// Parallel plain / extended IDs and the OOV list; or
    /// `VocabSizeOverflow` if a pointer ID does not fit in `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode_source(
        &self,
        text: &str,
    ) -> MCResult<SourceEncoding<T>> {
        let vocab = self.codec.vocab();
        let unk = vocab.unk_id();
        let tokens = self.codec.tokenize(text);

        let mut plain_ids = Vec::with_capacity(tokens.len());
        let mut extended_ids = Vec::with_capacity(tokens.len());
        let mut oovs = DocumentOovs::new();
        for token in &tokens {
            let id = vocab.lookup(token);
            plain_ids.push(id);
            if id == unk {
                let idx = oovs.insert(token);
                extended_ids.push(self.pointer_id(idx)?);
            } else {
                extended_ids.push(id);
            }
        }

        Ok(SourceEncoding {
            plain_ids,
            extended_ids,
            oovs,
        })
    }

    /// Encode a target sequence against the OOV list of its source.
    ///
    /// ## Arguments
    /// * `text` - The target text.
    /// * `oovs` - The list returned by [`ExtendedCodec::encode_source`]
    ///   for the paired document.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, oovs)))]
    pub fn encode_target(
        &self,
        text: &str,
        oovs: &DocumentOovs,
    ) -> MCResult<TargetEncoding<T>> {
        let vocab = self.codec.vocab();
        let unk = vocab.unk_id();
        let tokens = self.codec.tokenize(text);

        let mut plain_ids = Vec::with_capacity(tokens.len());
        let mut extended_ids = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let id = vocab.lookup(token);
            plain_ids.push(id);
            if id == unk
                && let Some(idx) = oovs.index_of(token)
            {
                extended_ids.push(self.pointer_id(idx)?);
            } else {
                extended_ids.push(id);
            }
        }

        Ok(TargetEncoding {
            plain_ids,
            extended_ids,
        })
    }

    /// Decode extended IDs, resolving pointer IDs through `oovs`.
    ///
    /// ## Returns
    /// The text; or `TokenOutOfRange` for an ID that is neither a
    /// vocabulary ID nor a pointer into `oovs`.
    pub fn decode_extended(
        &self,
        ids: &[T],
        oovs: &DocumentOovs,
    ) -> MCResult<String> {
        let vocab = self.codec.vocab();
        let marker = self.codec.tokenizer().affix_marker();

        let mut text = String::new();
        for &id in ids {
            let idx = token_to_usize(id);
            let token = if idx >= self.base {
                oovs.get(idx - self.base)
            } else {
                vocab.try_reverse(id)
            }
            .ok_or(MorphchipperError::TokenOutOfRange)?;
            append_token(&mut text, token, marker);
        }
        Ok(text)
    }
}
