//! # Text Tokenizer Trait

use std::sync::Arc;

use crate::segmentation::TextSplitter;

/// Text to token-sequence capability.
///
/// Implementations never emit empty tokens, and preserve input order across
/// words and sentences.
pub trait TextTokenizer: Send + Sync {
    /// Tokenize a text.
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String>;

    /// The affix marker prefixed to affix tokens, if the tokenizer emits any.
    ///
    /// Decoders fuse tokens carrying this marker onto the preceding text.
    fn affix_marker(&self) -> Option<&str> {
        None
    }
}

/// A bare [`TextSplitter`] tokenizes to its words.
impl TextTokenizer for TextSplitter {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.split(text).into_iter().flatten().collect()
    }
}

impl<E: TextTokenizer + ?Sized> TextTokenizer for Arc<E> {
    fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        (**self).tokenize(text)
    }

    fn affix_marker(&self) -> Option<&str> {
        (**self).affix_marker()
    }
}
