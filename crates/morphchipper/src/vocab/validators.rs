//! Validators for vocabulary sizing options.
use crate::{
    errors::{MCResult, MorphchipperError},
    types::TokenType,
};

/// Validates and returns the target vocabulary size.
///
/// ## Arguments
/// * `vocab_size` - The target size, including special tokens.
/// * `specials` - The number of reserved special tokens.
///
/// ## Returns
/// `VocabSizeTooSmall` if the size cannot hold the specials;
/// `VocabSizeOverflow` if the largest ID would not fit in `T`.
pub fn try_vocab_size<T: TokenType>(
    vocab_size: usize,
    specials: usize,
) -> MCResult<usize> {
    if vocab_size < specials || vocab_size == 0 {
        Err(MorphchipperError::VocabSizeTooSmall {
            size: vocab_size,
            specials,
        })
    } else if T::from_usize(vocab_size - 1).is_none() {
        Err(MorphchipperError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// Validates and returns the minimum admission frequency.
pub fn try_min_freq(min_freq: usize) -> MCResult<usize> {
    if min_freq == 0 {
        Err(MorphchipperError::InvalidMinFreq)
    } else {
        Ok(min_freq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_size() {
        assert_eq!(try_vocab_size::<u16>(4, 4).unwrap(), 4);
        assert_eq!(try_vocab_size::<u16>(50_000, 4).unwrap(), 50_000);

        assert!(matches!(
            try_vocab_size::<u16>(3, 4),
            Err(MorphchipperError::VocabSizeTooSmall {
                size: 3,
                specials: 4
            })
        ));

        assert_eq!(
            try_vocab_size::<u16>(u16::MAX as usize + 1, 4).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(matches!(
            try_vocab_size::<u16>(u16::MAX as usize + 2, 4),
            Err(MorphchipperError::VocabSizeOverflow { .. })
        ));

        assert_eq!(try_vocab_size::<u8>(256, 4).unwrap(), 256);
        assert!(try_vocab_size::<u8>(257, 4).is_err());
    }

    #[test]
    fn test_min_freq() {
        assert_eq!(try_min_freq(1).unwrap(), 1);
        assert!(matches!(
            try_min_freq(0),
            Err(MorphchipperError::InvalidMinFreq)
        ));
    }
}
