//! # Tokenizers
//!
//! * [`TokenizerConfig`] - the resolved configuration.
//! * [`AffixMergePolicy`] - morpheme list to token list.
//! * [`TextTokenizer`] - the ``text -> tokens`` capability.
//! * [`TokenizerEngine`] - the configured variant; see
//!   [`TokenizerEngine::from_config`].

pub mod affix_policy;
pub mod morph_tokenizer;
pub mod text_tokenizer;
pub mod tokenizer_config;
pub mod tokenizer_engine;

#[doc(inline)]
pub use affix_policy::AffixMergePolicy;
#[doc(inline)]
pub use morph_tokenizer::{MorphTokenizer, normalize_morphemes};
#[doc(inline)]
pub use text_tokenizer::TextTokenizer;
#[doc(inline)]
pub use tokenizer_config::{EngineKind, ModelPathConfig, SuffixConfig, TokenizerConfig};
#[doc(inline)]
pub use tokenizer_engine::TokenizerEngine;
