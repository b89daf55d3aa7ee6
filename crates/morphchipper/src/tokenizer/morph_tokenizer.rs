//! # Morphological Tokenizer
//!
//! ``text -> sentences -> words -> morphemes -> tokens``

use std::sync::Arc;

use crate::{
    segmentation::{MorphemeSegmenter, TextSplitter, WordContext},
    tokenizer::{AffixMergePolicy, TextTokenizer, tokenizer_config::DEFAULT_AFFIX_MARKER},
};

/// Enforce the segmenter contract on a morpheme list.
///
/// Empty morphemes are dropped; if nothing remains, the surface word is
/// returned as the sole (root) morpheme.
pub fn normalize_morphemes(
    morphemes: Vec<String>,
    word: &str,
) -> Vec<String> {
    let mut morphemes = morphemes;
    morphemes.retain(|m| !m.is_empty());
    if morphemes.is_empty() {
        morphemes.push(word.to_string());
    }
    morphemes
}

/// Truncate a root to at most `max_len` characters.
pub fn truncate_root(
    root: &mut String,
    max_len: usize,
) {
    if let Some((idx, _)) = root.char_indices().nth(max_len) {
        root.truncate(idx);
    }
}

/// A tokenizer driven by an injected [`MorphemeSegmenter`].
#[derive(Clone)]
pub struct MorphTokenizer {
    splitter: TextSplitter,
    segmenter: Arc<dyn MorphemeSegmenter>,
    policy: AffixMergePolicy,
    marker: String,
    root_max_len: Option<usize>,
}

impl core::fmt::Debug for MorphTokenizer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("MorphTokenizer")
            .field("splitter", &self.splitter)
            .field("policy", &self.policy)
            .field("marker", &self.marker)
            .field("root_max_len", &self.root_max_len)
            .finish_non_exhaustive()
    }
}

impl MorphTokenizer {
    /// Create a tokenizer with the default splitter, the `All` policy, and
    /// the default affix marker.
    ///
    /// ## Arguments
    /// * `segmenter` - The word to morpheme segmenter.
    pub fn new(segmenter: Arc<dyn MorphemeSegmenter>) -> Self {
        Self {
            splitter: TextSplitter::default(),
            segmenter,
            policy: AffixMergePolicy::default(),
            marker: DEFAULT_AFFIX_MARKER.to_string(),
            root_max_len: None,
        }
    }

    /// Replace the text splitter.
    pub fn with_splitter(
        self,
        splitter: TextSplitter,
    ) -> Self {
        Self { splitter, ..self }
    }

    /// Set the affix merge policy.
    pub fn with_policy(
        self,
        policy: AffixMergePolicy,
    ) -> Self {
        Self { policy, ..self }
    }

    /// Set the affix marker.
    pub fn with_marker<S: Into<String>>(
        self,
        marker: S,
    ) -> Self {
        Self {
            marker: marker.into(),
            ..self
        }
    }

    /// Set the root truncation length; `None` or zero disables truncation.
    pub fn with_root_max_len(
        self,
        root_max_len: Option<usize>,
    ) -> Self {
        Self {
            root_max_len: root_max_len.filter(|&n| n > 0),
            ..self
        }
    }

    /// The affix merge policy.
    pub fn policy(&self) -> AffixMergePolicy {
        self.policy
    }

    /// The text splitter.
    pub fn splitter(&self) -> &TextSplitter {
        &self.splitter
    }

    /// Tokenize one word in its sentence context.
    pub fn tokenize_word(
        &self,
        word: &str,
        ctx: WordContext<'_>,
    ) -> Vec<String> {
        let mut morphemes = normalize_morphemes(self.segmenter.segment(word, ctx), word);
        if let Some(max_len) = self.root_max_len {
            truncate_root(&mut morphemes[0], max_len);
        }
        self.policy.apply(&morphemes, &self.marker)
    }
}

impl TextTokenizer for MorphTokenizer {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let text = self.splitter.normalize(text);

        let mut tokens = Vec::new();
        for sent in self.splitter.sentences(&text) {
            let words = self.splitter.words(sent);
            for (position, word) in words.iter().enumerate() {
                let ctx = WordContext::new(&words, position);
                tokens.extend(self.tokenize_word(word, ctx));
            }
        }
        tokens
    }

    fn affix_marker(&self) -> Option<&str> {
        Some(self.marker.as_str())
    }
}
