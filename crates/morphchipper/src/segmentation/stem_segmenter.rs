//! # Stem Segmenter
//!
//! Adapts a [`Stemmer`] into a [`MorphemeSegmenter`]: a word that is
//! exactly ``stem + suffix`` segments to ``[stem, suffix]``, anything else
//! segments to ``[stem]``.

use crate::segmentation::{MorphemeSegmenter, WordContext};

/// An external word stemmer.
pub trait Stemmer: Send + Sync {
    /// Stem a single word.
    fn stem(
        &self,
        word: &str,
    ) -> String;
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(
        &self,
        word: &str,
    ) -> String {
        self(word)
    }
}

/// A segmenter splitting words around their stem.
#[derive(Debug, Clone, Default)]
pub struct StemSegmenter<S: Stemmer> {
    stemmer: S,
}

impl<S: Stemmer> StemSegmenter<S> {
    /// Wrap a stemmer.
    pub fn new(stemmer: S) -> Self {
        Self { stemmer }
    }

    /// The wrapped stemmer.
    pub fn stemmer(&self) -> &S {
        &self.stemmer
    }
}

/// Extract the suffix of `word` following `stem`.
///
/// ## Returns
/// The suffix when `word` splits on `stem` into exactly an empty head and
/// a non-empty tail; otherwise `None`.
pub fn stem_suffix<'a>(
    word: &'a str,
    stem: &str,
) -> Option<&'a str> {
    if stem.is_empty() {
        return None;
    }
    let suffix = word.strip_prefix(stem)?;
    if suffix.is_empty() || suffix.contains(stem) {
        None
    } else {
        Some(suffix)
    }
}

impl<S: Stemmer> MorphemeSegmenter for StemSegmenter<S> {
    fn segment(
        &self,
        word: &str,
        _ctx: WordContext<'_>,
    ) -> Vec<String> {
        let stem = self.stemmer.stem(word);
        match stem_suffix(word, &stem) {
            Some(suffix) => {
                let suffix = suffix.to_string();
                vec![stem, suffix]
            }
            None => vec![stem],
        }
    }
}
