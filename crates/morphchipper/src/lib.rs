//! # `morphchipper` Morphological Tokenizer
//!
//! Root + affix tokenization for morphologically rich languages.
//!
//! Words are segmented into ``[root, affix, ...]`` morphemes by an injected
//! [`segmentation::MorphemeSegmenter`]; affixes become marker-prefixed
//! tokens (``"#lar"``) per an [`tokenizer::AffixMergePolicy`], and tokens
//! map to IDs through a trained [`vocab::Vocabulary`].
//!
//! See:
//! * [`tokenizer`] to configure and build tokenizers.
//! * [`training`] to train a [`vocab::Vocabulary`] from a corpus.
//! * [`codec`] to encode text into IDs and decode them back, including
//!   per-document pointer IDs for out-of-vocabulary words.
//! * [`vocab`] to manage vocabularies, special tokens, and vocab io.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Encoding
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use morphchipper::{
//!     codec::{ExtendedCodec, TokenCodec},
//!     segmentation::{LexiconSegmenter, MorphemeSegmenter},
//!     tokenizer::{TokenizerConfig, TokenizerEngine},
//!     training::VocabTrainerOptions,
//!     vocab::Vocabulary,
//! };
//!
//! type T = u32;
//!
//! let segmenter: Arc<dyn MorphemeSegmenter> = Arc::new(
//!     LexiconSegmenter::new()
//!         .with_entry("kitaplarım", ["kitap", "lar", "ım"])
//!         .with_entry("evde", ["ev", "de"]),
//! );
//!
//! let config = TokenizerConfig::default().with_min_freq(1);
//! config.validate::<T>().unwrap();
//! let engine = TokenizerEngine::from_config(&config, Some(segmenter)).unwrap();
//!
//! let mut trainer = VocabTrainerOptions::from_config(&config).init(engine.clone());
//! trainer.update_from_samples(["kitaplarım evde"]);
//! let vocab: Vocabulary<T> = trainer
//!     .train(config.special_tokens.build().unwrap())
//!     .unwrap();
//!
//! let codec = TokenCodec::new(vocab, engine);
//! let ids = codec.encode("evde kitaplarım");
//! assert_eq!(codec.decode(&ids), " evde kitaplarım");
//!
//! let pointer = ExtendedCodec::new(codec);
//! let source = pointer.encode_source("kitaplarım kalem").unwrap();
//! assert_eq!(source.oovs.words(), &["kalem".to_string()]);
//! ```
#![warn(missing_docs, unused)]

pub mod codec;
pub mod compat;
pub mod errors;
pub mod segmentation;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use codec::{DocumentOovs, ExtendedCodec, TokenCodec};
#[doc(inline)]
pub use errors::{MCResult, MorphchipperError};
#[doc(inline)]
pub use segmentation::{MorphemeSegmenter, WordContext};
#[doc(inline)]
pub use tokenizer::{AffixMergePolicy, TextTokenizer, TokenizerConfig, TokenizerEngine};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialTokens, SpecialTokensConfig, Vocabulary};
