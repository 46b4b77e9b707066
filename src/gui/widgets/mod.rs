use iced::{
    Element,
    widget::{button, column, row, text},
};

use crate::core::stage::{StageTab, TabFlags};

/// The stage card's tab bar. The timeline tab only exists when a timeline
/// does; tabs with unseen notifications carry a marker.
pub fn stage_tabs<'a, Message: Clone + 'a>(
    active: StageTab,
    has_timeline: bool,
    flags: TabFlags,
    on_select: impl Fn(StageTab) -> Message + 'a,
) -> Element<'a, Message> {
    let mut tabs = row![].spacing(10);
    let mut shown = Vec::with_capacity(3);
    if has_timeline {
        shown.push(StageTab::Timeline);
    }
    shown.push(StageTab::Posts);
    shown.push(StageTab::Specification);
    for tab in shown {
        let marker = if flags.for_tab(tab) { " *" } else { "" };
        let label = format!("{}{marker}", tab.label());
        tabs = tabs.push(
            button(text(label)).on_press_maybe((tab != active).then(|| on_select(tab))),
        );
    }
    tabs.into()
}

/// A small caption above a form control.
pub fn labeled<'a, Message: 'a>(
    label: &'a str,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![text(label).size(12), control.into()].spacing(4).into()
}
