//! # Lexicon Segmenter
//!
//! A table driven [`MorphemeSegmenter`].
//!
//! Lexicon files are tab separated, one word per line:
//! ```terminaloutput
//! # comment
//! kitaplarım	kitap+lar+ım
//! evde	ev+de
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{MCResult, MorphchipperError},
    segmentation::{MorphemeSegmenter, WordContext},
    types::MCHashMap,
};

/// The separator between morphemes in a lexicon entry.
pub const MORPHEME_SEPARATOR: char = '+';

/// A segmenter backed by an in-memory ``{ word -> morphemes }`` table.
///
/// Words missing from the table segment to themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexiconSegmenter {
    table: MCHashMap<String, Vec<String>>,
}

impl LexiconSegmenter {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an entry; returns the updated lexicon.
    pub fn with_entry<W, I, M>(
        mut self,
        word: W,
        morphemes: I,
    ) -> Self
    where
        W: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.insert(word, morphemes);
        self
    }

    /// Add (or replace) an entry.
    pub fn insert<W, I, M>(
        &mut self,
        word: W,
        morphemes: I,
    ) where
        W: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.table.insert(
            word.into(),
            morphemes.into_iter().map(Into::into).collect(),
        );
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Read a lexicon from a TSV line reader.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// ## Returns
    /// The lexicon; or `Parse` if a line lacks the tab separated analysis.
    pub fn from_reader<R: BufRead>(reader: R) -> MCResult<Self> {
        let mut lexicon = Self::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, analysis) = line.split_once('\t').ok_or_else(|| {
                MorphchipperError::Parse(format!(
                    "lexicon line {}: expected `word<TAB>root+affix...`",
                    lineno + 1
                ))
            })?;
            if word.is_empty() {
                return Err(MorphchipperError::Parse(format!(
                    "lexicon line {}: empty word",
                    lineno + 1
                )));
            }

            lexicon.insert(
                word,
                analysis
                    .split(MORPHEME_SEPARATOR)
                    .map(str::trim)
                    .filter(|m| !m.is_empty()),
            );
        }
        Ok(lexicon)
    }

    /// Load a lexicon from a TSV file.
    pub fn load_path<P: AsRef<Path>>(path: P) -> MCResult<Self> {
        let path = path.as_ref();
        let lexicon = Self::from_reader(BufReader::new(File::open(path)?))?;
        log::debug!("loaded {} lexicon entries from {:?}", lexicon.len(), path);
        Ok(lexicon)
    }
}

impl MorphemeSegmenter for LexiconSegmenter {
    fn segment(
        &self,
        word: &str,
        _ctx: WordContext<'_>,
    ) -> Vec<String> {
        match self.table.get(word) {
            Some(morphemes) => morphemes.clone(),
            None => vec![word.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::compat::traits::static_is_send_sync_check;

    #[test]
    fn test_segment() {
        let lexicon = LexiconSegmenter::new()
            .with_entry("kitaplarım", ["kitap", "lar", "ım"])
            .with_entry("evde", ["ev", "de"]);
        static_is_send_sync_check(&lexicon);

        let ctx = WordContext::default();
        assert_eq!(lexicon.segment("kitaplarım", ctx), vec!["kitap", "lar", "ım"]);
        assert_eq!(lexicon.segment("evde", ctx), vec!["ev", "de"]);
        assert_eq!(lexicon.segment("ve", ctx), vec!["ve"]);
    }

    #[test]
    fn test_from_reader() {
        let data = "# turkish sample\n\nkitaplarım\tkitap+lar+ım\nevde\tev+de\ngit\tgit\n";
        let lexicon = LexiconSegmenter::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(lexicon.len(), 3);
        assert_eq!(
            lexicon.segment("kitaplarım", WordContext::default()),
            vec!["kitap", "lar", "ım"]
        );
        assert_eq!(lexicon.segment("git", WordContext::default()), vec!["git"]);
    }

    #[test]
    fn test_from_reader_drops_empty_morphemes() {
        let lexicon = LexiconSegmenter::from_reader(Cursor::new("evde\tev++de+\n")).unwrap();
        assert_eq!(
            lexicon.segment("evde", WordContext::default()),
            vec!["ev", "de"]
        );
    }

    #[test]
    fn test_from_reader_malformed() {
        let err = LexiconSegmenter::from_reader(Cursor::new("evde ev+de\n"));
        assert!(matches!(err, Err(MorphchipperError::Parse(_))));

        let err = LexiconSegmenter::from_reader(Cursor::new("\tev+de\n"));
        assert!(matches!(err, Err(MorphchipperError::Parse(_))));
    }
}
