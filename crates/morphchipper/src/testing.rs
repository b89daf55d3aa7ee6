//! # Test Utilities
//!
//! Shared fixtures for unit tests and downstream crates.

use std::sync::Arc;

#[doc(inline)]
pub use crate::compat::traits::static_is_send_sync_check;
use crate::{
    segmentation::{LexiconSegmenter, MorphemeSegmenter},
    tokenizer::{TextTokenizer, TokenizerConfig, TokenizerEngine},
    training::VocabTrainerOptions,
    types::TokenType,
    vocab::Vocabulary,
};

/// A small Turkish-flavoured lexicon.
pub const TEST_LEXICON: &str = "\
# word\troot+affix...
kitaplarım\tkitap+lar+ım
kitaplar\tkitap+lar
kitabı\tkitab+ı
evlerde\tev+ler+de
evde\tev+de
evler\tev+ler
okudum\toku+du+m
gittim\tgit+ti+m
";

/// A short corpus segmentable with [`TEST_LEXICON`].
pub const TEST_CORPUS: &[&str] = &[
    "kitaplarım evde.",
    "evlerde kitaplar okudum.",
    "kitabı okudum ve gittim.",
    "evde kitaplarım var.",
];

/// Build the [`TEST_LEXICON`] segmenter.
pub fn build_test_segmenter() -> Arc<dyn MorphemeSegmenter> {
    let lexicon = LexiconSegmenter::from_reader(TEST_LEXICON.as_bytes())
        .unwrap_or_else(|err| panic!("invalid test lexicon: {err}"));
    Arc::new(lexicon)
}

/// Build a morphological engine over [`build_test_segmenter`].
///
/// ## Panics
/// If `config` does not describe a valid morphological engine.
pub fn build_test_engine(config: &TokenizerConfig) -> TokenizerEngine {
    TokenizerEngine::from_config(config, Some(build_test_segmenter()))
        .unwrap_or_else(|err| panic!("invalid test engine config: {err}"))
}

/// Train a vocabulary on [`TEST_CORPUS`].
///
/// ## Panics
/// If `config` is invalid for `T`.
pub fn build_test_vocab<T: TokenType, E: TextTokenizer>(
    config: &TokenizerConfig,
    tokenizer: E,
) -> Vocabulary<T> {
    let specials = config
        .special_tokens
        .build()
        .unwrap_or_else(|err| panic!("invalid test specials: {err}"));

    let mut trainer = VocabTrainerOptions::from_config(config).init(tokenizer);
    trainer.update_from_samples(TEST_CORPUS);
    trainer
        .train(specials)
        .unwrap_or_else(|err| panic!("test training failed: {err}"))
}
