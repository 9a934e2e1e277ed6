//! Locale-aware string ordering for name sorting and category lists.
//!
//! Comparison is multi-level in the manner of the Unicode collation
//! algorithm, reduced to what the gallery needs:
//!
//! 1. primary: base letters (accents folded or placed per rule)
//! 2. secondary: accents
//! 3. tertiary: case (lower before upper)
//!
//! and finally raw code point order so the ordering is total. Weights are
//! taken from the NFC form, so decomposed input sorts like its composed twin.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A collation rule, chosen in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collation {
    /// Diacritics sort with their base letter: `å`/`ä` near `a`, `ö` near `o`.
    #[default]
    Swedish,
    /// Swedish alphabet order: `å`, `ä`, `ö` come after `z`.
    SwedishAlphabet,
    /// Plain byte order.
    Binary,
}

/// One character's weights at each level.
#[derive(Debug, Clone, Copy)]
struct Weights {
    primary: u32,
    secondary: u8,
    tertiary: u8,
}

/// Letters placed after `z` by [`Collation::SwedishAlphabet`].
const AFTER_Z: u32 = 'z' as u32;

/// Fold a lower-case Latin letter to its base letter plus an accent rank.
fn fold_latin(c: char) -> (char, u8) {
    match c {
        'á' => ('a', 1),
        'à' => ('a', 2),
        'â' => ('a', 3),
        'ä' => ('a', 4),
        'å' => ('a', 5),
        'ã' => ('a', 6),
        'æ' => ('a', 7),
        'ç' => ('c', 1),
        'é' => ('e', 1),
        'è' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 4),
        'í' => ('i', 1),
        'ì' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 4),
        'ñ' => ('n', 1),
        'ó' => ('o', 1),
        'ò' => ('o', 2),
        'ô' => ('o', 3),
        'ö' => ('o', 4),
        'ø' => ('o', 5),
        'õ' => ('o', 6),
        'ú' => ('u', 1),
        'ù' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('u', 4),
        'ý' => ('y', 1),
        'ÿ' => ('y', 2),
        other => (other, 0),
    }
}

impl Collation {
    /// Every rule, in the order they are listed in help output.
    pub fn all() -> &'static [Collation] {
        &[Self::Swedish, Self::SwedishAlphabet, Self::Binary]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Swedish => "swedish",
            Self::SwedishAlphabet => "swedish-alphabet",
            Self::Binary => "binary",
        }
    }

    /// Compare two strings under this rule.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if *self == Self::Binary {
            return a.cmp(b);
        }

        let ka = self.weights(a);
        let kb = self.weights(b);

        cmp_level(&ka, &kb, |w| w.primary)
            .then_with(|| cmp_level(&ka, &kb, |w| w.secondary as u32))
            .then_with(|| cmp_level(&ka, &kb, |w| w.tertiary as u32))
            .then_with(|| a.cmp(b))
    }

    fn weights(&self, s: &str) -> Vec<Weights> {
        let mut out = Vec::with_capacity(s.len());
        for c in s.nfc() {
            let tertiary = u8::from(c.is_uppercase());
            for lower in c.to_lowercase() {
                out.push(self.char_weights(lower, tertiary));
            }
        }
        out
    }

    fn char_weights(&self, lower: char, tertiary: u8) -> Weights {
        if *self == Self::SwedishAlphabet {
            let after_z = match lower {
                'å' => Some(1),
                'ä' | 'æ' => Some(2),
                'ö' | 'ø' => Some(3),
                _ => None,
            };
            if let Some(offset) = after_z {
                return Weights {
                    primary: AFTER_Z + offset,
                    secondary: u8::from(matches!(lower, 'æ' | 'ø')),
                    tertiary,
                };
            }
        }

        let (base, accent) = fold_latin(lower);
        Weights {
            primary: base as u32,
            secondary: accent,
            tertiary,
        }
    }
}

fn cmp_level(a: &[Weights], b: &[Weights], level: impl Fn(&Weights) -> u32) -> Ordering {
    a.iter().map(&level).cmp(b.iter().map(&level))
}

impl std::fmt::Display for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown collation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationParseError(pub String);

impl std::fmt::Display for CollationParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown collation: '{}' (expected swedish, swedish-alphabet or binary)",
            self.0
        )
    }
}

impl std::error::Error for CollationParseError {}

impl std::str::FromStr for Collation {
    type Err = CollationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "swedish" | "sv" => Ok(Self::Swedish),
            "swedish-alphabet" | "sv-alphabet" => Ok(Self::SwedishAlphabet),
            "binary" | "bytes" => Ok(Self::Binary),
            _ => Err(CollationParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/collation_tests.rs"]
mod tests;
