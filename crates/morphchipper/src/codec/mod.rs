//! # Encode / Decode
//!
//! * [`TokenCodec`] maps text to IDs and back through a shared
//!   [`crate::vocab::Vocabulary`].
//! * [`ExtendedCodec`] adds per-document pointer IDs for out-of-vocabulary
//!   tokens, for copy based (pointer-generator) models.
//!
//! ## Decoding
//!
//! Tokens carrying the tokenizer's affix marker are fused onto the text
//! decoded so far, with the marker stripped; every other token is appended
//! after a single space. The decoded text of a sequence starting with a
//! root token therefore begins with a space; use
//! [`TokenCodec::decode_trimmed`] to drop it.

pub mod extended_codec;
pub mod token_codec;

#[doc(inline)]
pub use extended_codec::{DocumentOovs, ExtendedCodec, SourceEncoding, TargetEncoding};
#[doc(inline)]
pub use token_codec::TokenCodec;
