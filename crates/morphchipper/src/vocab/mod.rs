//! # Vocabulary
//!
//! The [`Vocabulary`] is a bijective ``{ word <-> id }`` store; the
//! reserved [`SpecialTokens`] are registered first, and ordinary words
//! are assigned the next free non-reserved ID in admission order.
//!
//! Persistence lives in [`io`].

pub mod io;
pub mod special_tokens;
pub mod validators;
mod vocabulary;

#[doc(inline)]
pub use special_tokens::{SpecialTokenEntry, SpecialTokens, SpecialTokensConfig};
#[doc(inline)]
pub use vocabulary::Vocabulary;
