//! # Affix Merge Policy
//!
//! Decides how a ``[root, a1, ..., an]`` morpheme list becomes tokens:
//!
//! | policy      | tokens                                 |
//! |-------------|----------------------------------------|
//! | `RootOnly`  | ``[root]``                             |
//! | `Combined`  | ``[root, marker + a1 + ... + an]``     |
//! | `LastOnly`  | ``[root, marker + an]``                |
//! | `All`       | ``[root, marker + a1, ..., marker + an]`` |
//!
//! With no affixes, every policy yields ``[root]``.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{MCResult, MorphchipperError},
    tokenizer::SuffixConfig,
};

/// The affix merge mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixMergePolicy {
    /// Discard all affixes.
    RootOnly,

    /// Concatenate all affixes into a single affix token.
    Combined,

    /// Keep only the last affix.
    LastOnly,

    /// Emit every affix as its own token.
    #[default]
    All,
}

impl AffixMergePolicy {
    /// Select the policy from suffix flags.
    ///
    /// `root_only` wins over the other flags; with no flag set the policy
    /// is [`AffixMergePolicy::All`].
    ///
    /// ## Returns
    /// The policy; or `MergePolicyConflict` if both `combined` and
    /// `last_only` are set.
    pub fn from_suffix_config(config: &SuffixConfig) -> MCResult<Self> {
        if config.root_only {
            return Ok(Self::RootOnly);
        }
        match (config.combined, config.last_only) {
            (true, true) => Err(MorphchipperError::MergePolicyConflict(
                "`combined` and `last_only` are mutually exclusive".to_string(),
            )),
            (true, false) => Ok(Self::Combined),
            (false, true) => Ok(Self::LastOnly),
            (false, false) => Ok(Self::All),
        }
    }

    /// Merge a morpheme list into tokens.
    ///
    /// ## Arguments
    /// * `morphemes` - ``[root, affix, ...]``; an empty list yields no tokens.
    /// * `marker` - The affix marker prefixed to affix tokens.
    pub fn apply<S: AsRef<str>>(
        &self,
        morphemes: &[S],
        marker: &str,
    ) -> Vec<String> {
        let Some((root, affixes)) = morphemes.split_first() else {
            return Vec::new();
        };

        let mut tokens = Vec::with_capacity(1 + affixes.len());
        tokens.push(root.as_ref().to_string());
        if affixes.is_empty() {
            return tokens;
        }

        match self {
            Self::RootOnly => {}
            Self::Combined => {
                let mut merged = String::from(marker);
                for affix in affixes {
                    merged.push_str(affix.as_ref());
                }
                tokens.push(merged);
            }
            Self::LastOnly => {
                if let Some(last) = affixes.last() {
                    tokens.push(format!("{marker}{}", last.as_ref()));
                }
            }
            Self::All => {
                tokens.extend(affixes.iter().map(|a| format!("{marker}{}", a.as_ref())));
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MORPHS: [&str; 3] = ["kitap", "lar", "ım"];

    #[test]
    fn test_apply() {
        assert_eq!(AffixMergePolicy::RootOnly.apply(&MORPHS, "#"), vec!["kitap"]);
        assert_eq!(
            AffixMergePolicy::Combined.apply(&MORPHS, "#"),
            vec!["kitap", "#larım"]
        );
        assert_eq!(
            AffixMergePolicy::LastOnly.apply(&MORPHS, "#"),
            vec!["kitap", "#ım"]
        );
        assert_eq!(
            AffixMergePolicy::All.apply(&MORPHS, "##"),
            vec!["kitap", "##lar", "##ım"]
        );
    }

    #[test]
    fn test_apply_root_only_input() {
        for policy in [
            AffixMergePolicy::RootOnly,
            AffixMergePolicy::Combined,
            AffixMergePolicy::LastOnly,
            AffixMergePolicy::All,
        ] {
            assert_eq!(policy.apply(&["ev"], "#"), vec!["ev"]);
            assert!(policy.apply::<&str>(&[], "#").is_empty());
        }
    }

    #[test]
    fn test_from_suffix_config() {
        let flags = |root_only, combined, last_only| SuffixConfig {
            root_only,
            combined,
            last_only,
        };

        assert_eq!(
            AffixMergePolicy::from_suffix_config(&flags(false, false, false)).unwrap(),
            AffixMergePolicy::All
        );
        assert_eq!(
            AffixMergePolicy::from_suffix_config(&flags(true, true, true)).unwrap(),
            AffixMergePolicy::RootOnly
        );
        assert_eq!(
            AffixMergePolicy::from_suffix_config(&flags(false, true, false)).unwrap(),
            AffixMergePolicy::Combined
        );
        assert_eq!(
            AffixMergePolicy::from_suffix_config(&flags(false, false, true)).unwrap(),
            AffixMergePolicy::LastOnly
        );
        assert!(matches!(
            AffixMergePolicy::from_suffix_config(&flags(false, true, true)),
            Err(MorphchipperError::MergePolicyConflict(_))
        ));
    }
}
