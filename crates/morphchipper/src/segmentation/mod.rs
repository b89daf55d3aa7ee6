//! # Word Segmentation
//!
//! This module factors out everything between raw text and morphemes:
//! * [`TextSplitter`] splits text into sentences and words.
//! * [`MorphemeSegmenter`] is the injected capability mapping one word to
//!   its `[root, affix, ...]` morpheme list.
//!
//! Real morphological analyzers live outside this crate; two small
//! segmenters are provided here:
//! * [`LexiconSegmenter`] - a table driven segmenter.
//! * [`StemSegmenter`] - splits a word around the output of a [`Stemmer`].

pub mod lexicon_segmenter;
pub mod morpheme_segmenter;
pub mod stem_segmenter;
pub mod text_splitter;

#[doc(inline)]
pub use lexicon_segmenter::LexiconSegmenter;
#[doc(inline)]
pub use morpheme_segmenter::{MorphemeSegmenter, WordContext};
#[doc(inline)]
pub use stem_segmenter::{StemSegmenter, Stemmer};
#[doc(inline)]
pub use text_splitter::TextSplitter;
