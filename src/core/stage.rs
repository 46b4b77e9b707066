//! Headless state of a stage card: tab selection, expansion, deep links, and
//! per-tab unseen markers.

use std::str::FromStr;

use super::fragment::parse_fragment;
use super::model::{Feed, Phase};
use super::notifications::{
    Notification, filter_by_criteria, filter_by_posts, filter_unread, phase_specification_criteria,
    phase_timeline_criteria,
};
use super::timeline::Timeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTab {
    Timeline,
    Posts,
    Specification,
}

impl StageTab {
    pub fn as_str(self) -> &'static str {
        match self {
            StageTab::Timeline => "timeline",
            StageTab::Posts => "posts",
            StageTab::Specification => "specification",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StageTab::Timeline => "Timeline",
            StageTab::Posts => "Posts",
            StageTab::Specification => "Specification",
        }
    }
}

impl FromStr for StageTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeline" => Ok(StageTab::Timeline),
            "posts" => Ok(StageTab::Posts),
            "specification" => Ok(StageTab::Specification),
            _ => Err(()),
        }
    }
}

/// Per-tab "has unseen notifications" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabFlags {
    pub timeline: bool,
    pub posts: bool,
    pub specification: bool,
}

impl TabFlags {
    pub fn any(self) -> bool {
        self.timeline || self.posts || self.specification
    }

    pub fn for_tab(self, tab: StageTab) -> bool {
        match tab {
            StageTab::Timeline => self.timeline,
            StageTab::Posts => self.posts,
            StageTab::Specification => self.specification,
        }
    }
}

/// Tab selection and expansion for one stage card.
///
/// The tab is "controlled when set": `tab == None` falls back to the default
/// derived from whether a timeline exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageState {
    pub tab: Option<StageTab>,
    pub is_expanded: bool,
}

impl StageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tab currently shown. Defaults to the timeline tab when a timeline
    /// exists, otherwise to posts.
    pub fn active_tab(&self, has_timeline: bool) -> StageTab {
        self.tab.unwrap_or(if has_timeline {
            StageTab::Timeline
        } else {
            StageTab::Posts
        })
    }

    pub fn select_tab(&mut self, tab: StageTab) {
        self.tab = Some(tab);
    }

    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    /// Applies a `#phase-<id>-<tab>` deep link, scoped to this stage's phase:
    /// fragments naming another phase are ignored. Returns whether the
    /// fragment applied.
    pub fn apply_fragment(&mut self, phase_id: i64, fragment: &str) -> bool {
        match parse_fragment(fragment) {
            Some(target) if target.phase_id == phase_id => {
                self.is_expanded = true;
                if let Some(tab) = target.tab {
                    self.tab = Some(tab);
                }
                true
            }
            _ => false,
        }
    }
}

/// Computes the unseen markers shown on the tab bar by filtering the global
/// unread set per tab.
pub fn unseen_tab_flags(
    notifications: &[Notification],
    feed: Option<&Feed>,
    timeline: Option<&Timeline>,
    phase: &Phase,
) -> TabFlags {
    let unread = filter_unread(notifications);
    let posts = feed.map(|feed| feed.posts.as_slice()).unwrap_or_default();
    let timeline_flag = timeline.is_some_and(|timeline| {
        !filter_by_criteria(&unread, &phase_timeline_criteria(timeline)).is_empty()
    });
    TabFlags {
        timeline: timeline_flag,
        posts: !filter_by_posts(&unread, posts).is_empty(),
        specification: !filter_by_criteria(&unread, &phase_specification_criteria(phase)).is_empty(),
    }
}
