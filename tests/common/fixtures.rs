use phasedeck::{
    Feed, Milestone, Notification, Phase, PhaseStatus, Post, Product, ProductTemplate, Timeline,
};
use serde_json::Value;
use time::{Date, macros::date};

pub const TEST_PROJECT_ID: i64 = 7;
pub const TEST_TEMPLATE_ID: i64 = 21;

/// A phase with one product, the invariant the portal relies on.
pub fn make_phase(id: i64, budget: f64, spent_budget: f64) -> Phase {
    Phase {
        id,
        project_id: TEST_PROJECT_ID,
        name: format!("Stage {id}"),
        status: PhaseStatus::Active,
        budget,
        spent_budget,
        start_date: Some(date!(2024 - 03 - 01)),
        end_date: Some(date!(2024 - 03 - 03)),
        duration: 3,
        products: vec![Product {
            id: id * 100,
            template_id: TEST_TEMPLATE_ID,
            attachments: vec![],
        }],
    }
}

pub fn make_phase_with_dates(
    id: i64,
    start_date: Option<Date>,
    end_date: Option<Date>,
) -> Phase {
    let mut phase = make_phase(id, 100.0, 0.0);
    phase.start_date = start_date;
    phase.end_date = end_date;
    phase
}

pub fn make_templates() -> Vec<ProductTemplate> {
    vec![ProductTemplate {
        id: TEST_TEMPLATE_ID,
        name: "Visual Design".into(),
        icon: "product-design-app-visual".into(),
        template: Some("design.v1".into()),
    }]
}

pub fn make_feed(post_ids: &[i64]) -> Feed {
    Feed {
        posts: post_ids
            .iter()
            .map(|&id| Post {
                id,
                body: format!("post {id}"),
            })
            .collect(),
    }
}

pub fn make_timeline(id: i64, start_date: Date, durations: &[(u32, bool)]) -> Timeline {
    Timeline {
        id,
        start_date: Some(start_date),
        milestones: durations
            .iter()
            .enumerate()
            .map(|(i, &(duration, completed))| Milestone {
                id: i as i64 + 1,
                name: format!("milestone {}", i + 1),
                duration,
                completed,
            })
            .collect(),
    }
}

pub fn make_notification(id: i64, event_type: &str, read: bool, contents: Value) -> Notification {
    Notification {
        id,
        event_type: event_type.to_owned(),
        read,
        contents,
    }
}
