//! # Vocabulary Training
//!
//! Training streams a corpus through a [`crate::tokenizer::TextTokenizer`],
//! counts every token, and admits the most frequent tokens into a
//! [`crate::vocab::Vocabulary`]:
//! * ties are broken by first occurrence in the corpus;
//! * tokens below `min_freq` are skipped;
//! * admission stops at ``vocab_size - specials`` ordinary words.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use morphchipper::{
//!     segmentation::{LexiconSegmenter, MorphemeSegmenter},
//!     tokenizer::{TokenizerConfig, TokenizerEngine},
//!     training::VocabTrainerOptions,
//!     vocab::{Vocabulary, io::save_vocab_path},
//! };
//!
//! fn example(files: &[&str]) -> morphchipper::MCResult<()> {
//!     type T = u32;
//!
//!     let config = TokenizerConfig::default().with_vocab_size(30_000);
//!     config.validate::<T>()?;
//!
//!     let segmenter: Arc<dyn MorphemeSegmenter> =
//!         Arc::new(LexiconSegmenter::load_path("lexicon.tsv")?);
//!     let engine = TokenizerEngine::from_config(&config, Some(segmenter))?;
//!
//!     let mut trainer = VocabTrainerOptions::from_config(&config).init(engine);
//!     for path in files {
//!         trainer.update_from_path(path)?;
//!     }
//!
//!     let vocab: Vocabulary<T> = trainer.train(config.special_tokens.build()?)?;
//!     save_vocab_path(&vocab, "model/vocab.txt", false)?;
//!     Ok(())
//! }
//! ```

pub mod token_counter;
pub mod vocab_trainer;

#[doc(inline)]
pub use token_counter::TokenCounter;
#[doc(inline)]
pub use vocab_trainer::{VocabTrainer, VocabTrainerOptions};
