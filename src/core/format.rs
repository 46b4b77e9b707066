//! Display formatting for phase cards.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use super::model::{Feed, Phase, PhaseStatus, ProductTemplate};
use super::timeline::{Timeline, phase_actual_data};

const MONTH_DAY: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none]");

/// Flat, display-ready attributes for a phase card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseCardAttr {
    pub icon: Option<String>,
    pub title: String,
    pub duration: String,
    pub start_end_dates: String,
    pub price: String,
    pub paid_status: String,
    pub status: PhaseStatus,
    pub posts: Option<String>,
    pub phase_index: usize,
    pub progress_in_percent: u8,
}

/// Groups the integer digits of a number with commas: `12345.5` -> `"12,345.5"`.
pub fn format_number_with_commas(value: f64) -> String {
    let raw = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    };
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Renders the compact date range shown on a card, e.g. `"Mar 1-3"` or
/// `"Mar 30-Apr 2"`.
///
/// The end date is appended only when strictly later than the start. The
/// repeated month is stripped by comparing the first four characters of the
/// rendered string, not by calendar logic; display snapshots depend on this
/// exact behavior, so keep it string-level.
pub fn format_start_end_dates(start: Option<Date>, end: Option<Date>) -> String {
    let mut out = start
        .and_then(|date| date.format(MONTH_DAY).ok())
        .unwrap_or_default();
    if let (Some(start), Some(end)) = (start, end) {
        if end > start {
            if let Ok(rendered) = end.format(MONTH_DAY) {
                out.push('-');
                out.push_str(&rendered);
            }
        }
    }
    if out.len() > 4 {
        let month_prefix = out[..4].to_owned();
        if out.rfind(&month_prefix) != Some(0) {
            out = out.replacen(&format!("-{month_prefix}"), "-", 1);
        }
    }
    out
}

/// Derives every display attribute of a phase card. Never mutates its inputs.
pub fn format_phase_card_attr(
    phase: &Phase,
    phase_index: usize,
    product_templates: &[ProductTemplate],
    feed: Option<&Feed>,
    timeline: Option<&Timeline>,
) -> PhaseCardAttr {
    let product_template = phase.product().and_then(|product| {
        product_templates
            .iter()
            .find(|template| template.id == product.template_id)
    });
    let icon = product_template.map(|template| template.icon.clone());

    let budget = phase.budget;
    let price = format!("${}", format_number_with_commas(budget));

    let actual = phase_actual_data(phase, timeline);
    let duration = format!(
        "{} day{}",
        actual.duration,
        if actual.duration == 1 { "" } else { "s" }
    );
    let start_end_dates = format_start_end_dates(actual.start_date, actual.end_date);

    let spent = phase.spent_budget;
    let paid_status = if spent != 0.0 && spent == budget {
        "Paid in full".to_owned()
    } else if spent != 0.0 && spent < budget {
        format!("${} remaining", format_number_with_commas(budget - spent))
    } else {
        "Quoted".to_owned()
    };

    let posts = feed.map(|feed| {
        let count = feed.posts.len();
        format!("{count} post{}", if count == 1 { "" } else { "s" })
    });

    PhaseCardAttr {
        icon,
        title: phase.name.clone(),
        duration,
        start_end_dates,
        price,
        paid_status,
        status: phase.status,
        posts,
        phase_index,
        progress_in_percent: actual.progress,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::core::model::{Post, Product};

    fn phase(budget: f64, spent: f64) -> Phase {
        Phase {
            id: 4,
            project_id: 2,
            name: "Design".into(),
            status: PhaseStatus::Active,
            budget,
            spent_budget: spent,
            start_date: Some(date!(2024 - 03 - 01)),
            end_date: Some(date!(2024 - 03 - 03)),
            duration: 3,
            products: vec![Product {
                id: 11,
                template_id: 21,
                attachments: vec![],
            }],
        }
    }

    fn templates() -> Vec<ProductTemplate> {
        vec![ProductTemplate {
            id: 21,
            name: "Visual Design".into(),
            icon: "product-design-app-visual".into(),
            template: Some("design.v1".into()),
        }]
    }

    #[test]
    fn paid_status_buckets() {
        let attr = format_phase_card_attr(&phase(100.0, 100.0), 0, &templates(), None, None);
        assert_eq!(attr.paid_status, "Paid in full");
        let attr = format_phase_card_attr(&phase(100.0, 40.0), 0, &templates(), None, None);
        assert_eq!(attr.paid_status, "$60 remaining");
        let attr = format_phase_card_attr(&phase(100.0, 0.0), 0, &templates(), None, None);
        assert_eq!(attr.paid_status, "Quoted");
    }

    #[test]
    fn same_month_range_strips_the_repeated_month() {
        assert_eq!(
            format_start_end_dates(Some(date!(2024 - 03 - 01)), Some(date!(2024 - 03 - 03))),
            "Mar 1-3"
        );
    }

    #[test]
    fn cross_month_range_keeps_both_months() {
        assert_eq!(
            format_start_end_dates(Some(date!(2024 - 03 - 30)), Some(date!(2024 - 04 - 02))),
            "Mar 30-Apr 2"
        );
    }

    #[test]
    fn open_ended_range_is_just_the_start() {
        assert_eq!(
            format_start_end_dates(Some(date!(2024 - 03 - 01)), None),
            "Mar 1"
        );
        assert_eq!(
            format_start_end_dates(Some(date!(2024 - 03 - 03)), Some(date!(2024 - 03 - 03))),
            "Mar 3"
        );
        assert_eq!(format_start_end_dates(None, None), "");
    }

    #[test]
    fn number_grouping() {
        assert_eq!(format_number_with_commas(0.0), "0");
        assert_eq!(format_number_with_commas(999.0), "999");
        assert_eq!(format_number_with_commas(1000.0), "1,000");
        assert_eq!(format_number_with_commas(1234567.0), "1,234,567");
        assert_eq!(format_number_with_commas(1234.5), "1,234.5");
        assert_eq!(format_number_with_commas(-12000.0), "-12,000");
    }

    #[test]
    fn posts_label_pluralizes_and_requires_a_feed() {
        let feed = Feed {
            posts: vec![Post {
                id: 1,
                body: "hi".into(),
            }],
        };
        let attr = format_phase_card_attr(&phase(1.0, 0.0), 0, &templates(), Some(&feed), None);
        assert_eq!(attr.posts.as_deref(), Some("1 post"));

        let empty = Feed::default();
        let attr = format_phase_card_attr(&phase(1.0, 0.0), 0, &templates(), Some(&empty), None);
        assert_eq!(attr.posts.as_deref(), Some("0 posts"));

        let attr = format_phase_card_attr(&phase(1.0, 0.0), 0, &templates(), None, None);
        assert_eq!(attr.posts, None);
    }

    #[test]
    fn duration_pluralizes() {
        let mut one_day = phase(10.0, 0.0);
        one_day.duration = 1;
        let attr = format_phase_card_attr(&one_day, 0, &templates(), None, None);
        assert_eq!(attr.duration, "1 day");
        let attr = format_phase_card_attr(&phase(10.0, 0.0), 0, &templates(), None, None);
        assert_eq!(attr.duration, "3 days");
    }

    #[test]
    fn icon_comes_from_the_matching_template() {
        let attr = format_phase_card_attr(&phase(10.0, 0.0), 2, &templates(), None, None);
        assert_eq!(attr.icon.as_deref(), Some("product-design-app-visual"));
        assert_eq!(attr.phase_index, 2);

        let attr = format_phase_card_attr(&phase(10.0, 0.0), 0, &[], None, None);
        assert_eq!(attr.icon, None);
    }
}
