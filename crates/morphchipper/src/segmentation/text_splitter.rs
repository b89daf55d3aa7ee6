//! # Text Splitter
//!
//! Sentence and word splitting, plus optional escape normalization.

use std::borrow::Cow;

use regex::Regex;

use crate::errors::MCResult;

/// The default word split pattern.
pub const DEFAULT_WORD_PATTERN: &str = r"\S+";

/// Sentence boundaries: a run of terminal punctuation followed by whitespace.
pub const SENTENCE_BOUNDARY_PATTERN: &str = r"[.!?…]+\s+";

/// The replacement written over `escape_pattern` matches.
pub const ESCAPE_REPLACEMENT: &str = " '";

/// Regex driven sentence and word splitter.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    sentence: Regex,
    word: Regex,
    escape: Option<Regex>,
}

impl Default for TextSplitter {
    fn default() -> Self {
        // Both patterns are constant and known to compile.
        Self::new(DEFAULT_WORD_PATTERN, None)
            .unwrap_or_else(|_| unreachable!("default split patterns are valid"))
    }
}

impl TextSplitter {
    /// Build a splitter.
    ///
    /// ## Arguments
    /// * `word_pattern` - Regex whose matches are the words of a sentence.
    /// * `escape_pattern` - Optional regex whose matches are replaced by
    ///   ``" '"`` before splitting.
    ///
    /// ## Returns
    /// The splitter; or `Regex` if a pattern does not compile.
    pub fn new(
        word_pattern: &str,
        escape_pattern: Option<&str>,
    ) -> MCResult<Self> {
        Ok(Self {
            sentence: Regex::new(SENTENCE_BOUNDARY_PATTERN)?,
            word: Regex::new(word_pattern)?,
            escape: escape_pattern.map(Regex::new).transpose()?,
        })
    }

    /// The word split pattern.
    pub fn word_pattern(&self) -> &str {
        self.word.as_str()
    }

    /// Apply escape normalization and trim the text.
    pub fn normalize<'a>(
        &self,
        text: &'a str,
    ) -> Cow<'a, str> {
        match &self.escape {
            Some(escape) => match escape.replace_all(text, ESCAPE_REPLACEMENT) {
                Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
                Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
            },
            None => Cow::Borrowed(text.trim()),
        }
    }

    /// Split text into sentences; terminal punctuation stays with its sentence.
    pub fn sentences<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for m in self.sentence.find_iter(text) {
            let sent = text[start..m.end()].trim();
            if !sent.is_empty() {
                sentences.push(sent);
            }
            start = m.end();
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
        sentences
    }

    /// Split a sentence into words; empty matches are dropped.
    pub fn words<'a>(
        &self,
        sentence: &'a str,
    ) -> Vec<&'a str> {
        self.word
            .find_iter(sentence)
            .map(|m| m.as_str())
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Normalize, then split into sentences of words.
    pub fn split(
        &self,
        text: &str,
    ) -> Vec<Vec<String>> {
        let text = self.normalize(text);
        self.sentences(&text)
            .into_iter()
            .map(|sent| self.words(sent).into_iter().map(str::to_string).collect())
            .collect()
    }
}
