// ── Event sorting ──
//
// One active key and a direction. The sort is stable and has no secondary
// key: ties keep the order they arrived in.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::SecurityEvent;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    Date,
    Priority,
    Location,
    Type,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// The active sort. Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Ascending comparison of two events under `key`.
pub fn compare(key: SortKey, a: &SecurityEvent, b: &SecurityEvent) -> Ordering {
    match key {
        SortKey::Date => a.event_date.cmp(&b.event_date),
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::Location => locale_cmp(&a.location, &b.location),
        SortKey::Type => locale_cmp(&a.event_type, &b.event_type),
    }
}

/// Collator-style string comparison.
///
/// Strings compare first on their base letters, ignoring case and
/// diacritics (`É` sorts with `e`). Ties break on accents, unaccented
/// first, then on case, lowercase first, then on code points.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .flat_map(char::to_lowercase)
        .cmp(base_letters(b).flat_map(char::to_lowercase))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            base_letters(a)
                .zip(base_letters(b))
                .map(|(x, y)| case_rank(x).cmp(&case_rank(y)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition with combining marks dropped.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn case_rank(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Stable sort of `events` by `spec`. `Desc` reverses the comparator, so
/// equal elements keep their input order in both directions.
pub fn sort(events: &[Arc<SecurityEvent>], spec: SortSpec) -> Vec<Arc<SecurityEvent>> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare(spec.key, a, b);
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}
