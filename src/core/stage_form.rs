//! Headless state for the stage update form.
//!
//! The form holds its fields as raw strings, mirrors the submit gate of the
//! portal, and turns them into a typed [`PhaseUpdate`] on submit. The GUI
//! screen wraps this state and drives the actual request.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::Date;

use super::model::{ISO_DATE, Phase, iso_date};

/// Partial update sent to the phase API and merged into the phase on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseUpdate {
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
    pub budget: f64,
    pub spent_budget: f64,
    pub duration: u32,
}

impl PhaseUpdate {
    /// Merges the delta into the shared phase record, the in-place
    /// counterpart of a successful update request.
    pub fn apply_to(&self, phase: &mut Phase) {
        phase.start_date = Some(self.start_date);
        phase.end_date = Some(self.end_date);
        phase.budget = self.budget;
        phase.spent_budget = self.spent_budget;
        phase.duration = self.duration;
    }
}

/// Explicit outcome of an update request, handed to the parent so it can
/// decide whether to show an error affordance. Both outcomes are followed by
/// a refresh of the phase list.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Success(PhaseUpdate),
    Failure(String),
}

/// Editable form state. Two states: editing (fields visible) and updating
/// (busy indicator shown, submit ignored).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageForm {
    pub start_date: String,
    pub duration: String,
    pub spent_budget: String,
    pub budget: String,
    pub is_updating: bool,
}

impl StageForm {
    /// A fresh form: start date defaults to the given day, numeric fields
    /// to `"0"`.
    pub fn new(today: Date) -> Self {
        Self {
            start_date: today.format(ISO_DATE).unwrap_or_default(),
            duration: "0".to_owned(),
            spent_budget: "0".to_owned(),
            budget: "0".to_owned(),
            is_updating: false,
        }
    }

    /// The submit gate: no partial submission allowed. Duration, spent, and
    /// budget must be filled and non-zero, the start date non-empty, and no
    /// request may already be in flight.
    pub fn can_submit(&self) -> bool {
        fn filled_nonzero(field: &str) -> bool {
            !field.is_empty() && field != "0"
        }
        !self.is_updating
            && !self.start_date.is_empty()
            && filled_nonzero(&self.duration)
            && filled_nonzero(&self.spent_budget)
            && filled_nonzero(&self.budget)
    }

    /// Parses the fields into an update delta, computing
    /// `end_date = start_date + duration` days.
    pub fn build_update(&self) -> anyhow::Result<PhaseUpdate> {
        let start_date = Date::parse(&self.start_date, ISO_DATE)
            .with_context(|| format!("invalid start date {:?}", self.start_date))?;
        let duration: u32 = self
            .duration
            .parse()
            .with_context(|| format!("invalid duration {:?}", self.duration))?;
        let budget: f64 = self
            .budget
            .parse()
            .with_context(|| format!("invalid budget {:?}", self.budget))?;
        let spent_budget: f64 = self
            .spent_budget
            .parse()
            .with_context(|| format!("invalid spent budget {:?}", self.spent_budget))?;
        let end_date = start_date
            .checked_add(time::Duration::days(i64::from(duration)))
            .context("end date out of range")?;
        Ok(PhaseUpdate {
            start_date,
            end_date,
            budget,
            spent_budget,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::core::model::PhaseStatus;

    fn filled_form() -> StageForm {
        StageForm {
            start_date: "2024-01-01".into(),
            duration: "5".into(),
            spent_budget: "40".into(),
            budget: "100".into(),
            is_updating: false,
        }
    }

    #[test]
    fn end_date_is_start_plus_duration() {
        let update = filled_form().build_update().unwrap();
        assert_eq!(update.start_date, date!(2024 - 01 - 01));
        assert_eq!(update.end_date, date!(2024 - 01 - 06));
        assert_eq!(update.duration, 5);
        assert_eq!(update.budget, 100.0);
        assert_eq!(update.spent_budget, 40.0);
    }

    #[test]
    fn submit_gate_blocks_partial_input() {
        assert!(filled_form().can_submit());

        let fresh = StageForm::new(date!(2024 - 01 - 01));
        assert!(!fresh.can_submit());

        for field in ["duration", "spent_budget", "budget"] {
            let mut form = filled_form();
            match field {
                "duration" => form.duration = "0".into(),
                "spent_budget" => form.spent_budget = "0".into(),
                _ => form.budget = "0".into(),
            }
            assert!(!form.can_submit(), "{field} = 0 must block submit");
        }

        let mut form = filled_form();
        form.start_date.clear();
        assert!(!form.can_submit());

        let mut form = filled_form();
        form.duration.clear();
        assert!(!form.can_submit());
    }

    #[test]
    fn in_flight_request_blocks_resubmit() {
        let mut form = filled_form();
        form.is_updating = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn bad_fields_fail_to_build() {
        let mut form = filled_form();
        form.duration = "five".into();
        assert!(form.build_update().is_err());

        let mut form = filled_form();
        form.start_date = "01/01/2024".into();
        assert!(form.build_update().is_err());
    }

    #[test]
    fn successful_update_merges_into_the_phase() {
        let mut phase = Phase {
            id: 1,
            project_id: 1,
            name: "Build".into(),
            status: PhaseStatus::Active,
            budget: 0.0,
            spent_budget: 0.0,
            start_date: None,
            end_date: None,
            duration: 0,
            products: vec![],
        };
        let update = filled_form().build_update().unwrap();
        update.apply_to(&mut phase);
        assert_eq!(phase.start_date, Some(date!(2024 - 01 - 01)));
        assert_eq!(phase.end_date, Some(date!(2024 - 01 - 06)));
        assert_eq!(phase.budget, 100.0);
        assert_eq!(phase.spent_budget, 40.0);
        assert_eq!(phase.duration, 5);
    }

    #[test]
    fn update_serializes_iso_dates() {
        let update = filled_form().build_update().unwrap();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["endDate"], "2024-01-06");
        assert_eq!(json["spentBudget"], 40.0);
    }
}
