//! # Token Codec

use std::sync::Arc;

use crate::{
    errors::{MCResult, MorphchipperError},
    tokenizer::TextTokenizer,
    types::TokenType,
    vocab::Vocabulary,
};

/// Append one decoded token to `text`.
///
/// Marker-prefixed tokens are fused without a space; others get a leading
/// space.
pub fn append_token(
    text: &mut String,
    token: &str,
    marker: Option<&str>,
) {
    if let Some(marker) = marker
        && let Some(affix) = token.strip_prefix(marker)
    {
        text.push_str(affix);
    } else {
        text.push(' ');
        text.push_str(token);
    }
}

/// Vocabulary backed encoder / decoder.
///
/// # Parameters
/// * `T` - the token ID type.
/// * `E` - the tokenizer.
#[derive(Debug, Clone)]
pub struct TokenCodec<T: TokenType, E: TextTokenizer> {
    vocab: Arc<Vocabulary<T>>,
    tokenizer: E,
}

impl<T: TokenType, E: TextTokenizer> TokenCodec<T, E> {
    /// Create a new codec.
    ///
    /// ## Arguments
    /// * `vocab` - The shared, trained vocabulary.
    /// * `tokenizer` - The tokenizer the vocabulary was trained with.
    ///
    /// ## Returns
    /// A new `TokenCodec` instance.
    pub fn new<V: Into<Arc<Vocabulary<T>>>>(
        vocab: V,
        tokenizer: E,
    ) -> Self {
        Self {
            vocab: vocab.into(),
            tokenizer,
        }
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// The tokenizer.
    pub fn tokenizer(&self) -> &E {
        &self.tokenizer
    }

    /// The vocabulary size.
    pub fn size(&self) -> usize {
        self.vocab.size()
    }

    /// Tokenize text.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Encode text to IDs; unknown tokens map to the unknown-token ID.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.tokens_to_ids(&self.tokenize(text))
    }

    /// Encode a batch of texts.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Vec<Vec<T>> {
        texts.iter().map(|t| self.encode(t.as_ref())).collect()
    }

    /// Map tokens to IDs.
    pub fn tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        tokens
            .iter()
            .map(|t| self.vocab.lookup(t.as_ref()))
            .collect()
    }

    /// Map IDs to their tokens.
    ///
    /// ## Returns
    /// The tokens; or `TokenOutOfRange` for an ID the vocabulary never
    /// assigned.
    pub fn ids_to_tokens(
        &self,
        ids: &[T],
    ) -> MCResult<Vec<&str>> {
        ids.iter()
            .map(|&id| {
                self.vocab
                    .try_reverse(id)
                    .ok_or(MorphchipperError::TokenOutOfRange)
            })
            .collect()
    }

    /// Decode IDs to text.
    ///
    /// ## Returns
    /// The text; or `TokenOutOfRange` for an ID the vocabulary never
    /// assigned.
    pub fn try_decode(
        &self,
        ids: &[T],
    ) -> MCResult<String> {
        let marker = self.tokenizer.affix_marker();
        let mut text = String::new();
        for token in self.ids_to_tokens(ids)? {
            append_token(&mut text, token, marker);
        }
        Ok(text)
    }

    /// Decode IDs to text.
    ///
    /// ## Panics
    /// If an ID was never assigned by the vocabulary.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> String {
        match self.try_decode(ids) {
            Ok(text) => text,
            Err(err) => panic!("decode failed: {err}"),
        }
    }

    /// Decode IDs to text, without the leading space of a first root token.
    pub fn decode_trimmed(
        &self,
        ids: &[T],
    ) -> MCResult<String> {
        let text = self.try_decode(ids)?;
        Ok(match text.strip_prefix(' ') {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }
}
