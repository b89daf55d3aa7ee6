//! # Morpheme Segmenter Trait

use std::sync::Arc;

/// The sentence context a word was found in.
///
/// Analyzers that disambiguate by context (or by part-of-speech) read the
/// neighbouring words; context-free segmenters ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordContext<'a> {
    /// The words of the enclosing sentence.
    pub sentence: &'a [&'a str],

    /// The index of the word within `sentence`.
    pub position: usize,
}

impl<'a> WordContext<'a> {
    /// Create a new context.
    pub fn new(
        sentence: &'a [&'a str],
        position: usize,
    ) -> Self {
        Self { sentence, position }
    }
}

/// A word to morpheme-list segmenter.
///
/// Returns the morphemes of `word` in surface order, root first.
/// When no analysis is available the segmenter should return the surface
/// word as the sole morpheme; the tokenizer enforces that fallback for an
/// empty result, and drops empty morpheme strings.
pub trait MorphemeSegmenter: Send + Sync {
    /// Segment a single word.
    ///
    /// ## Arguments
    /// * `word` - The surface word.
    /// * `ctx` - The sentence context of the word.
    ///
    /// ## Returns
    /// The `[root, affix, ...]` morpheme list.
    fn segment(
        &self,
        word: &str,
        ctx: WordContext<'_>,
    ) -> Vec<String>;
}

impl<S: MorphemeSegmenter + ?Sized> MorphemeSegmenter for Arc<S> {
    fn segment(
        &self,
        word: &str,
        ctx: WordContext<'_>,
    ) -> Vec<String> {
        (**self).segment(word, ctx)
    }
}

impl<S: MorphemeSegmenter + ?Sized> MorphemeSegmenter for Box<S> {
    fn segment(
        &self,
        word: &str,
        ctx: WordContext<'_>,
    ) -> Vec<String> {
        (**self).segment(word, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CharSegmenter;

    impl MorphemeSegmenter for CharSegmenter {
        fn segment(
            &self,
            word: &str,
            _ctx: WordContext<'_>,
        ) -> Vec<String> {
            word.chars().map(|c| c.to_string()).collect()
        }
    }

    #[test]
    fn test_dyn_dispatch() {
        let seg: Arc<dyn MorphemeSegmenter> = Arc::new(CharSegmenter);
        let boxed: Box<dyn MorphemeSegmenter> = Box::new(CharSegmenter);

        let sentence = ["ab", "c"];
        let ctx = WordContext::new(&sentence, 0);

        assert_eq!(seg.segment("ab", ctx), vec!["a", "b"]);
        assert_eq!(boxed.segment("c", WordContext::default()), vec!["c"]);
    }
}
