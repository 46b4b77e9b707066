use serde::{Deserialize, Serialize};
use time::Date;

use super::model::{Phase, iso_date};

/// Planned milestones for a phase, owned by the timeline service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub id: i64,
    #[serde(default, with = "iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: i64,
    pub name: String,
    /// Planned length in days.
    pub duration: u32,
    #[serde(default)]
    pub completed: bool,
}

/// Display-ready schedule data for a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseActualData {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub duration: u32,
    /// Whole percent, 0..=100.
    pub progress: u8,
}

/// Derives the schedule shown on a phase card.
///
/// When a timeline with milestones exists it wins over the phase's own
/// fields: the duration is the sum of milestone durations, the end date is
/// derived from the start, and progress counts completed milestones.
/// Without a timeline the phase's stored dates are used and progress is
/// approximated from the spent budget.
pub fn phase_actual_data(phase: &Phase, timeline: Option<&Timeline>) -> PhaseActualData {
    match timeline {
        Some(timeline) if !timeline.milestones.is_empty() => {
            let duration: u32 = timeline.milestones.iter().map(|m| m.duration).sum();
            let start_date = timeline.start_date.or(phase.start_date);
            let end_date = match start_date {
                Some(start) if duration > 0 => {
                    start.checked_add(time::Duration::days(i64::from(duration) - 1))
                }
                _ => None,
            };
            let completed = timeline.milestones.iter().filter(|m| m.completed).count();
            let progress = (completed * 100 / timeline.milestones.len()) as u8;
            PhaseActualData {
                start_date,
                end_date,
                duration,
                progress,
            }
        }
        _ => {
            let progress = if phase.budget > 0.0 {
                ((phase.spent_budget / phase.budget).clamp(0.0, 1.0) * 100.0).round() as u8
            } else {
                0
            };
            PhaseActualData {
                start_date: phase.start_date,
                end_date: phase.end_date,
                duration: phase.duration,
                progress,
            }
        }
    }
}
