//! Escort requirement rule for visitor check-in.
//!
//! Purely advisory: the rule reports whether a zone selection is valid and
//! the caller decides whether to block submission.

use serde::{Deserialize, Serialize};

use crate::model::AccessZone;

/// Result of evaluating a zone selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscortCheck {
    pub valid: bool,
    pub any_zone_requires_escort: bool,
}

/// Which banner the check-in form should show for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscortBanner {
    /// No selected zone needs an escort.
    None,
    /// An escort is needed and one is assigned.
    Info,
    /// An escort is needed and none is assigned; submission must be blocked.
    Error,
}

impl EscortCheck {
    pub const fn banner(self) -> EscortBanner {
        match (self.any_zone_requires_escort, self.valid) {
            (false, _) => EscortBanner::None,
            (true, true) => EscortBanner::Info,
            (true, false) => EscortBanner::Error,
        }
    }
}

/// Decide whether `selected` zone ids need an escort and whether the
/// selection is acceptable given `escort`.
///
/// Ids missing from `catalog` are ignored. A blank escort name counts as
/// no escort.
pub fn requires_escort<S: AsRef<str>>(
    selected: &[S],
    catalog: &[AccessZone],
    escort: Option<&str>,
) -> EscortCheck {
    let any_zone_requires_escort = escort_zones(selected, catalog).next().is_some();
    let has_escort = escort.is_some_and(|e| !e.trim().is_empty());

    EscortCheck {
        valid: !any_zone_requires_escort || has_escort,
        any_zone_requires_escort,
    }
}

/// The selected zones that require an escort, in catalog order.
pub fn escort_zones<'a, S: AsRef<str>>(
    selected: &'a [S],
    catalog: &'a [AccessZone],
) -> impl Iterator<Item = &'a AccessZone> + 'a {
    catalog
        .iter()
        .filter(|zone| zone.requires_escort)
        .filter(move |zone| selected.iter().any(|id| id.as_ref() == zone.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::zones;

    #[test]
    fn empty_selection_is_valid() {
        let check = requires_escort::<&str>(&[], &zones(), None);
        assert_eq!(
            check,
            EscortCheck {
                valid: true,
                any_zone_requires_escort: false
            }
        );
        assert_eq!(check.banner(), EscortBanner::None);
    }

    #[test]
    fn escort_zone_without_escort_is_invalid() {
        let check = requires_escort(&["z-lobby", "z-server"], &zones(), None);
        assert_eq!(
            check,
            EscortCheck {
                valid: false,
                any_zone_requires_escort: true
            }
        );
        assert_eq!(check.banner(), EscortBanner::Error);
    }

    #[test]
    fn escort_zone_with_escort_is_valid() {
        let check = requires_escort(&["z-server"], &zones(), Some("D. Chen"));
        assert_eq!(
            check,
            EscortCheck {
                valid: true,
                any_zone_requires_escort: true
            }
        );
        assert_eq!(check.banner(), EscortBanner::Info);
    }

    #[test]
    fn empty_escort_name_counts_as_missing() {
        let check = requires_escort(&["z-lab"], &zones(), Some(""));
        assert!(!check.valid);
    }

    #[test]
    fn whitespace_escort_name_counts_as_missing() {
        let check = requires_escort(&["z-server"], &zones(), Some("   "));
        assert_eq!(
            check,
            EscortCheck {
                valid: false,
                any_zone_requires_escort: true
            }
        );
        assert_eq!(check.banner(), EscortBanner::Error);
    }

    #[test]
    fn unknown_zone_ids_are_ignored() {
        let check = requires_escort(&["z-nowhere"], &zones(), None);
        assert!(check.valid);
        assert!(!check.any_zone_requires_escort);
    }

    #[test]
    fn lists_escort_zones_in_catalog_order() {
        let catalog = zones();
        let names: Vec<_> = escort_zones(&["z-lab", "z-lobby", "z-server"], &catalog)
            .map(|z| z.name.as_str())
            .collect();
        assert_eq!(names, ["Server Room", "Research Lab"]);
    }
}
