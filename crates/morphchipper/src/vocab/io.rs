//! # Base64 Vocabulary IO
//!
//! Lines are sorted by ID:
//! ```terminaloutput
//! {BASE64 WORD} {ID}
//! {BASE64 WORD} {ID} special
//! ```
//!
//! Words are base64 encoded so that whitespace and affix markers survive
//! the line format unchanged.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{MCResult, MorphchipperError},
    types::{TokenType, token_to_usize},
    vocab::{SpecialTokens, SpecialTokensConfig, Vocabulary},
};

/// The trailing marker column for reserved special token lines.
pub const SPECIAL_MARKER: &str = "special";

/// Write a [`Vocabulary`] to a [`Write`] writer.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> MCResult<()>
where
    T: TokenType,
    W: Write,
{
    for (id, word) in vocab.iter() {
        let encoded = BASE64_STANDARD.encode(word.as_bytes());
        if vocab.is_special(id) {
            writeln!(writer, "{encoded} {} {SPECIAL_MARKER}", token_to_usize(id))?;
        } else {
            writeln!(writer, "{encoded} {}", token_to_usize(id))?;
        }
    }
    Ok(())
}

/// Read a [`Vocabulary`] from a base64 vocab line reader.
///
/// The four role tokens are identified by matching the texts configured in
/// `specials`; their IDs are taken from the file. Any other `special` lines
/// become extra reserved tokens.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `specials` - the special token configuration naming the role texts.
///
/// ## Returns
/// The loaded vocabulary; `Parse` on malformed lines or a broken bijection,
/// `SpecialTokenConflict` if a role token is missing from the file.
pub fn read_vocab<T, R>(
    reader: R,
    specials: &SpecialTokensConfig,
) -> MCResult<Vocabulary<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut special_entries: Vec<(String, T)> = Vec::new();
    let mut words: Vec<(String, T)> = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let parts = line.split(' ').collect::<Vec<&str>>();
        let is_special = match parts.as_slice() {
            [_, _] => false,
            [_, _, marker] if *marker == SPECIAL_MARKER => true,
            _ => {
                return Err(MorphchipperError::Parse(format!(
                    "line {}: expected `{{BASE64}} {{ID}}[ special]`",
                    lineno + 1
                )));
            }
        };

        let bytes = BASE64_STANDARD
            .decode(parts[0])
            .map_err(|e| MorphchipperError::Parse(format!("line {}: {e}", lineno + 1)))?;
        let word = String::from_utf8(bytes)
            .map_err(|e| MorphchipperError::Parse(format!("line {}: {e}", lineno + 1)))?;

        let id: u64 = parts[1].parse().map_err(|e: core::num::ParseIntError| {
            MorphchipperError::Parse(format!("line {}: {e}", lineno + 1))
        })?;
        let token = T::from_u64(id).ok_or(MorphchipperError::TokenOutOfRange)?;

        if is_special {
            special_entries.push((word, token));
        } else {
            words.push((word, token));
        }
    }

    let mut roles: Vec<(String, T)> = Vec::with_capacity(special_entries.len());
    for role in [
        &specials.pad,
        &specials.unknown,
        &specials.start,
        &specials.end,
    ] {
        let pos = special_entries
            .iter()
            .position(|(text, _)| *text == role.text)
            .ok_or_else(|| {
                MorphchipperError::SpecialTokenConflict(format!(
                    "special token {:?} not found in vocabulary file",
                    role.text
                ))
            })?;
        roles.push(special_entries.remove(pos));
    }
    roles.extend(special_entries);

    Vocabulary::from_parts(SpecialTokens::from_entries(roles)?, words)
}

/// Save a [`Vocabulary`] to a base64 vocab file.
///
/// Parent directories are created as needed.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
/// * `overwrite` - replace an existing file instead of failing.
///
/// ## Returns
/// `ModelExists` if the file exists and `overwrite` is false.
pub fn save_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &Vocabulary<T>,
    path: P,
    overwrite: bool,
) -> MCResult<()> {
    let path = path.as_ref();
    if path.exists() && !overwrite {
        return Err(MorphchipperError::ModelExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    log::debug!("saving vocabulary ({} words) to {:?}", vocab.size(), path);
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Load a [`Vocabulary`] from a base64 vocab file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
/// * `specials` - the special token configuration naming the role texts.
pub fn load_vocab_path<T, P>(
    path: P,
    specials: &SpecialTokensConfig,
) -> MCResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading vocabulary from {:?}", path);
    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader, specials)
}
