//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token ID.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max ID in a vocabulary (including any per-document
/// pointer slots) is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type MCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type MCHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type MCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type MCHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Create a new hash map with the given capacity.
pub fn hash_map_with_capacity<K, V>(capacity: usize) -> MCHashMap<K, V> {
    MCHashMap::with_capacity(capacity)
}

/// Convert a `usize` index into a token ID.
///
/// ## Returns
/// `VocabSizeOverflow` if the index does not fit in `T`.
pub fn try_token_from_usize<T: TokenType>(idx: usize) -> crate::errors::MCResult<T> {
    T::from_usize(idx).ok_or(crate::errors::MorphchipperError::VocabSizeOverflow { size: idx })
}

/// Convert a token ID into a `usize` index.
pub fn token_to_usize<T: TokenType>(token: T) -> usize {
    // Every `TokenType` is an unsigned primitive no wider than u64.
    token.to_usize().unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_token_conversion() {
        assert_eq!(try_token_from_usize::<u8>(255).unwrap(), 255);
        assert!(try_token_from_usize::<u8>(256).is_err());
        assert_eq!(token_to_usize(17_u16), 17);
    }
}
