//! Deep-link fragments of the form `#phase-<id>-<tab>`.

use std::str::FromStr;

use super::stage::StageTab;

/// A parsed deep link pointing at one phase's stage card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentTarget {
    pub phase_id: i64,
    /// `None` when the tab segment is missing or unknown; the stage then
    /// keeps its default tab.
    pub tab: Option<StageTab>,
}

/// Parses a `#phase-<id>-<tab>` fragment. The leading `#` is optional.
/// Anything that is not a phase fragment with a positive id yields `None`.
pub fn parse_fragment(fragment: &str) -> Option<FragmentTarget> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut parts = fragment.splitn(3, '-');
    if parts.next() != Some("phase") {
        return None;
    }
    let phase_id: i64 = parts.next()?.parse().ok()?;
    if phase_id <= 0 {
        return None;
    }
    let tab = parts.next().and_then(|tab| StageTab::from_str(tab).ok());
    Some(FragmentTarget { phase_id, tab })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_phase_and_tab() {
        assert_eq!(
            parse_fragment("#phase-42-posts"),
            Some(FragmentTarget {
                phase_id: 42,
                tab: Some(StageTab::Posts),
            })
        );
        assert_eq!(
            parse_fragment("phase-7-specification"),
            Some(FragmentTarget {
                phase_id: 7,
                tab: Some(StageTab::Specification),
            })
        );
    }

    #[test]
    fn missing_or_unknown_tab_is_kept_open() {
        assert_eq!(
            parse_fragment("#phase-42"),
            Some(FragmentTarget {
                phase_id: 42,
                tab: None,
            })
        );
        assert_eq!(
            parse_fragment("#phase-42-nonsense"),
            Some(FragmentTarget {
                phase_id: 42,
                tab: None,
            })
        );
    }

    #[test]
    fn rejects_non_phase_fragments() {
        assert_eq!(parse_fragment("#project-42-posts"), None);
        assert_eq!(parse_fragment("#phase-abc-posts"), None);
        assert_eq!(parse_fragment("#phase-0-posts"), None);
        assert_eq!(parse_fragment(""), None);
    }
}
