//! Miss-pattern classification of free-text shot results.
//!
//! Shot results are typed by the golfer ("pull", "slight fade", "flushed it"),
//! so the bucket is derived on every read and never stored. Changing the
//! keyword table below reclassifies old shots without a migration.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Lateral miss category of a single shot.
///
/// Variants are declared left to right so the derived `Ord` matches the
/// order of lanes on the dispersion chart, with `Other` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissBucket {
    Left,
    CenterLeft,
    Center,
    CenterRight,
    Right,
    Other,
}

impl MissBucket {
    /// All buckets in display order.
    pub const ALL: [MissBucket; 6] = [
        MissBucket::Left,
        MissBucket::CenterLeft,
        MissBucket::Center,
        MissBucket::CenterRight,
        MissBucket::Right,
        MissBucket::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MissBucket::Left => "left",
            MissBucket::CenterLeft => "center-left",
            MissBucket::Center => "center",
            MissBucket::CenterRight => "center-right",
            MissBucket::Right => "right",
            MissBucket::Other => "other",
        }
    }

    /// Human readable column heading.
    pub fn title(self) -> &'static str {
        match self {
            MissBucket::Left => "Left",
            MissBucket::CenterLeft => "Center-left",
            MissBucket::Center => "Center",
            MissBucket::CenterRight => "Center-right",
            MissBucket::Right => "Right",
            MissBucket::Other => "Other",
        }
    }

    fn softened(self) -> Self {
        match self {
            MissBucket::Left => MissBucket::CenterLeft,
            MissBucket::Right => MissBucket::CenterRight,
            other => other,
        }
    }
}

impl fmt::Display for MissBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table evaluated top-down; the first match wins.
///
/// Keywords must start a word ("pulled", "slightly") but never match inside
/// one, so "alright" is not a right miss. Hard directional words come before
/// their softer shape words so that "push fade" is a right miss rather than
/// a fade.
static MISS_RULES: LazyLock<Vec<(Regex, MissBucket)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\b(hook|pull|left)").unwrap(), MissBucket::Left),
        (Regex::new(r"\bdraw").unwrap(), MissBucket::CenterLeft),
        (
            Regex::new(r"\b(slice|push|block|right)").unwrap(),
            MissBucket::Right,
        ),
        (Regex::new(r"\b(fade|cut)").unwrap(), MissBucket::CenterRight),
        (
            Regex::new(r"\b(straight|center|centre|flush|pure|on line|online|dead)").unwrap(),
            MissBucket::Center,
        ),
    ]
});

/// Words that turn a hard left/right miss into its center-leaning variant.
static QUALIFIERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(slight|little\b|bit\b|touch\b|center|centre)").unwrap()
});

/// Classifies a free-text shot result into a [`MissBucket`].
///
/// Matching is case-insensitive on the trimmed text. Empty or unrecognized
/// text is [`MissBucket::Other`]; the function never fails.
///
/// # Examples
///
/// ```
/// use golf_practice::domain::analysis::{classify, MissBucket};
///
/// assert_eq!(classify("Pull left"), MissBucket::Left);
/// assert_eq!(classify("slight push"), MissBucket::CenterRight);
/// assert_eq!(classify("   "), MissBucket::Other);
/// ```
pub fn classify(result: &str) -> MissBucket {
    let text = result.trim().to_lowercase();
    if text.is_empty() {
        return MissBucket::Other;
    }

    let Some(&(_, bucket)) = MISS_RULES.iter().find(|(pattern, _)| pattern.is_match(&text))
    else {
        return MissBucket::Other;
    };

    if QUALIFIERS.is_match(&text) {
        bucket.softened()
    } else {
        bucket
    }
}
