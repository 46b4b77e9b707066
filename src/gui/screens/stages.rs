use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{button, column, container, row, scrollable, text, text_input},
};
use time::OffsetDateTime;

use crate::catalog;
use crate::core::api::{AttachmentApi, PhaseApi, PortalClient};
use crate::core::error_report::ErrorReport;
use crate::core::format::format_phase_card_attr;
use crate::core::model::{Feed, Phase, ProductTemplate};
use crate::core::notifications::Notification;
use crate::core::stage::{StageState, StageTab, unseen_tab_flags};
use crate::core::stage_form::{StageForm, UpdateOutcome};
use crate::core::timeline::Timeline;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage, report_from_error},
    widgets::{labeled, stage_tabs},
};

/// One phase with everything its stage card needs.
#[derive(Debug, Clone)]
pub struct StageEntry {
    pub phase: Phase,
    pub feed: Option<Feed>,
    pub timeline: Option<Timeline>,
    pub stage: StageState,
    pub form: StageForm,
}

/// The portal's main page: the list of expandable stage cards.
#[derive(Debug, Clone)]
pub struct StagesScreen {
    entries: Vec<StageEntry>,
    templates: Vec<ProductTemplate>,
    notifications: Vec<Notification>,
    error: Option<ErrorReport>,
}

#[derive(Debug, Clone)]
pub enum StagesMessage {
    ToggleExpand(i64),
    TabSelected(i64, StageTab),
    StartDateChanged(i64, String),
    DurationChanged(i64, String),
    SpentChanged(i64, String),
    BudgetChanged(i64, String),
    CancelEdit(i64),
    SubmitStage(i64),
    StageUpdated(i64, UpdateOutcome),
    Refreshed(Result<Vec<Phase>, String>),
    RemoveAttachment(i64, i64),
    AttachmentRemoved(i64, i64, Result<(), String>),
    CopyErrorDetails,
    DismissError,
}

impl StagesScreen {
    /// Fetches everything the page needs and applies the startup deep link.
    pub async fn load(
        client: PortalClient,
        project_id: i64,
        fragment: Option<String>,
    ) -> Result<Self, ErrorReport> {
        Self::fetch(client, project_id, fragment)
            .await
            .map_err(|error| report_from_error(&error))
    }

    async fn fetch(
        client: PortalClient,
        project_id: i64,
        fragment: Option<String>,
    ) -> anyhow::Result<Self> {
        let phases = client.get_phases(project_id).await?;
        let templates = client.get_product_templates().await?;
        // Notifications are decoration; a failed fetch must not block the page.
        let notifications = client.get_notifications(project_id).await.unwrap_or_default();
        let today = OffsetDateTime::now_utc().date();
        let mut entries = Vec::with_capacity(phases.len());
        for phase in phases {
            let feed = client.get_phase_feed(project_id, phase.id).await.ok();
            let timeline = client.get_timeline(project_id, phase.id).await.unwrap_or(None);
            let mut stage = StageState::new();
            if let Some(fragment) = &fragment {
                stage.apply_fragment(phase.id, fragment);
            }
            entries.push(StageEntry {
                phase,
                feed,
                timeline,
                stage,
                form: StageForm::new(today),
            });
        }
        Ok(Self {
            entries,
            templates,
            notifications,
            error: None,
        })
    }

    fn entry_mut(&mut self, phase_id: i64) -> Option<&mut StageEntry> {
        self.entries.iter_mut().find(|e| e.phase.id == phase_id)
    }

    fn entry(&self, phase_id: i64) -> Option<&StageEntry> {
        self.entries.iter().find(|e| e.phase.id == phase_id)
    }
}

impl Screen for StagesScreen {
    type Message = StagesMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut list = column![].spacing(16).padding(20).max_width(900);
        if let Some(report) = &self.error {
            list = list.push(error_banner(report));
        }
        if self.entries.is_empty() {
            list = list.push(text("This project has no stages yet."));
        }
        for (index, entry) in self.entries.iter().enumerate() {
            list = list.push(self.stage_card(index, entry));
        }
        scrollable(container(list).center_x(iced::Length::Fill)).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            StagesMessage::ToggleExpand(phase_id) => {
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.stage.toggle_expanded();
                }
                Task::none()
            }
            StagesMessage::TabSelected(phase_id, tab) => {
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.stage.select_tab(tab);
                }
                Task::none()
            }
            StagesMessage::StartDateChanged(phase_id, value) => {
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.form.start_date = value;
                }
                Task::none()
            }
            StagesMessage::DurationChanged(phase_id, value) => {
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.form.duration = value;
                }
                Task::none()
            }
            StagesMessage::SpentChanged(phase_id, value) => {
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.form.spent_budget = value;
                }
                Task::none()
            }
            StagesMessage::BudgetChanged(phase_id, value) => {
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.form.budget = value;
                }
                Task::none()
            }
            StagesMessage::CancelEdit(phase_id) => {
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.form = StageForm::new(OffsetDateTime::now_utc().date());
                }
                Task::none()
            }
            StagesMessage::SubmitStage(phase_id) => {
                let project_id = state.project_id;
                let Some(index) = self.entries.iter().position(|e| e.phase.id == phase_id) else {
                    return Task::none();
                };
                let entry = &mut self.entries[index];
                if !entry.form.can_submit() {
                    return Task::none();
                }
                match entry.form.build_update() {
                    Ok(delta) => {
                        entry.form.is_updating = true;
                        let client = state.client.clone();
                        Task::perform(
                            async move {
                                match client.update_phase(project_id, phase_id, &delta, index).await
                                {
                                    Ok(()) => UpdateOutcome::Success(delta),
                                    Err(error) => UpdateOutcome::Failure(error.to_string()),
                                }
                            },
                            move |outcome| {
                                ScreenMessage::ScreenMessage(StagesMessage::StageUpdated(
                                    phase_id, outcome,
                                ))
                            },
                        )
                    }
                    Err(error) => {
                        self.error = Some(ErrorReport::with_message(400, error.to_string()));
                        Task::none()
                    }
                }
            }
            StagesMessage::StageUpdated(phase_id, outcome) => {
                let mut failure = None;
                if let Some(entry) = self.entry_mut(phase_id) {
                    entry.form.is_updating = false;
                    match outcome {
                        UpdateOutcome::Success(delta) => delta.apply_to(&mut entry.phase),
                        UpdateOutcome::Failure(reason) => failure = Some(reason),
                    }
                }
                if let Some(reason) = failure {
                    self.error = Some(ErrorReport::with_message(500, reason));
                }
                // Success or failure, the parent list is refreshed.
                let client = state.client.clone();
                let project_id = state.project_id;
                Task::perform(
                    async move {
                        client
                            .get_phases(project_id)
                            .await
                            .map_err(|error| error.to_string())
                    },
                    |result| ScreenMessage::ScreenMessage(StagesMessage::Refreshed(result)),
                )
            }
            StagesMessage::Refreshed(Ok(phases)) => {
                for phase in phases {
                    if let Some(entry) = self.entry_mut(phase.id) {
                        entry.phase = phase;
                    }
                }
                Task::none()
            }
            StagesMessage::Refreshed(Err(reason)) => {
                tracing::warn!(%reason, "phase refresh failed");
                Task::none()
            }
            StagesMessage::RemoveAttachment(phase_id, attachment_id) => {
                let Some(product_id) = self
                    .entry(phase_id)
                    .and_then(|entry| entry.phase.product())
                    .map(|product| product.id)
                else {
                    return Task::none();
                };
                let client = state.client.clone();
                let project_id = state.project_id;
                Task::perform(
                    async move {
                        client
                            .remove_product_attachment(
                                project_id,
                                phase_id,
                                product_id,
                                attachment_id,
                            )
                            .await
                            .map_err(|error| error.to_string())
                    },
                    move |result| {
                        ScreenMessage::ScreenMessage(StagesMessage::AttachmentRemoved(
                            phase_id,
                            attachment_id,
                            result,
                        ))
                    },
                )
            }
            StagesMessage::AttachmentRemoved(phase_id, attachment_id, Ok(())) => {
                if let Some(product) = self
                    .entry_mut(phase_id)
                    .and_then(|entry| entry.phase.product_mut())
                {
                    product.attachments.retain(|a| a.id != attachment_id);
                }
                Task::none()
            }
            StagesMessage::AttachmentRemoved(_, _, Err(reason)) => {
                self.error = Some(ErrorReport::with_message(500, reason));
                Task::none()
            }
            StagesMessage::CopyErrorDetails => match &self.error {
                Some(report) => iced::clipboard::write(report.clipboard_text()),
                None => Task::none(),
            },
            StagesMessage::DismissError => {
                self.error = None;
                Task::none()
            }
        }
    }
}

impl StagesScreen {
    fn stage_card<'a>(&'a self, index: usize, entry: &'a StageEntry) -> Element<'a, ScreenMessage<Self>> {
        let attr = format_phase_card_attr(
            &entry.phase,
            index,
            &self.templates,
            entry.feed.as_ref(),
            entry.timeline.as_ref(),
        );
        let flags = unseen_tab_flags(
            &self.notifications,
            entry.feed.as_ref(),
            entry.timeline.as_ref(),
            &entry.phase,
        );
        let phase_id = entry.phase.id;

        let marker = if flags.any() { " *" } else { "" };
        let mut summary = vec![
            format!("{}{marker}", attr.title),
            attr.price.clone(),
            attr.paid_status.clone(),
            attr.duration.clone(),
        ];
        if !attr.start_end_dates.is_empty() {
            summary.push(attr.start_end_dates.clone());
        }
        if let Some(posts) = &attr.posts {
            summary.push(posts.clone());
        }
        summary.push(format!("{}%", attr.progress_in_percent));

        let header = button(text(summary.join("  |  ")))
            .on_press(ScreenMessage::ScreenMessage(StagesMessage::ToggleExpand(
                phase_id,
            )))
            .width(iced::Length::Fill);

        let mut card = column![header].spacing(8);
        if entry.stage.is_expanded {
            let has_timeline = entry.timeline.is_some();
            let active = entry.stage.active_tab(has_timeline);
            card = card.push(stage_tabs(active, has_timeline, flags, move |tab| {
                ScreenMessage::ScreenMessage(StagesMessage::TabSelected(phase_id, tab))
            }));
            card = card.push(match active {
                StageTab::Timeline => timeline_body(entry),
                StageTab::Posts => posts_body(entry),
                StageTab::Specification => self.specification_body(entry),
            });
        }
        container(card).padding(10).into()
    }

    fn specification_body<'a>(&'a self, entry: &'a StageEntry) -> Element<'a, ScreenMessage<Self>> {
        let phase_id = entry.phase.id;
        let mut body = column![].spacing(10);
        if let Some(template) = entry.phase.product().and_then(|product| {
            self.templates
                .iter()
                .find(|template| template.id == product.template_id)
        }) {
            body = body.push(text(format!("Product: {}", template.name)));
            if let Some(spec) = template
                .template
                .as_deref()
                .and_then(catalog::find_specification)
            {
                for section in spec.basic_sections {
                    for sub_section in section.sub_sections {
                        for question in sub_section.questions {
                            body = body.push(text(format!("- {}", question.title)).size(13));
                        }
                    }
                }
            }
        }
        if let Some(product) = entry.phase.product() {
            for attachment in &product.attachments {
                body = body.push(
                    row![
                        text(attachment.title.as_str()),
                        button("Remove").on_press(ScreenMessage::ScreenMessage(
                            StagesMessage::RemoveAttachment(phase_id, attachment.id),
                        )),
                    ]
                    .spacing(10),
                );
            }
        }
        body = body.push(edit_form(entry));
        body.into()
    }
}

fn timeline_body(entry: &StageEntry) -> Element<'_, ScreenMessage<StagesScreen>> {
    let mut body = column![].spacing(6);
    match &entry.timeline {
        Some(timeline) if !timeline.milestones.is_empty() => {
            for milestone in &timeline.milestones {
                let marker = if milestone.completed { "[x]" } else { "[ ]" };
                body = body.push(text(format!(
                    "{marker} {} ({} day{})",
                    milestone.name,
                    milestone.duration,
                    if milestone.duration == 1 { "" } else { "s" }
                )));
            }
        }
        _ => {
            body = body.push(text("No milestones planned."));
        }
    }
    body.into()
}

fn posts_body(entry: &StageEntry) -> Element<'_, ScreenMessage<StagesScreen>> {
    let mut body = column![].spacing(6);
    match &entry.feed {
        Some(feed) if !feed.posts.is_empty() => {
            for post in &feed.posts {
                body = body.push(text(post.body.as_str()));
            }
        }
        _ => {
            body = body.push(text("No posts yet."));
        }
    }
    body.into()
}

fn edit_form(entry: &StageEntry) -> Element<'_, ScreenMessage<StagesScreen>> {
    if entry.form.is_updating {
        return column![text("Updating stage...")].into();
    }
    let phase_id = entry.phase.id;
    let msg = ScreenMessage::ScreenMessage;
    column![
        text("Edit Stage").size(18),
        row![
            labeled(
                "Start Date",
                text_input("YYYY-MM-DD", &entry.form.start_date)
                    .on_input(move |v| msg(StagesMessage::StartDateChanged(phase_id, v))),
            ),
            labeled(
                "Duration",
                text_input("Duration", &entry.form.duration)
                    .on_input(move |v| msg(StagesMessage::DurationChanged(phase_id, v))),
            ),
        ]
        .spacing(10),
        row![
            labeled(
                "Spent",
                text_input("Spent", &entry.form.spent_budget)
                    .on_input(move |v| msg(StagesMessage::SpentChanged(phase_id, v))),
            ),
            labeled(
                "Budget",
                text_input("Budget", &entry.form.budget)
                    .on_input(move |v| msg(StagesMessage::BudgetChanged(phase_id, v))),
            ),
        ]
        .spacing(10),
        row![
            button("Cancel").on_press(msg(StagesMessage::CancelEdit(phase_id))),
            button("Update Stage")
                .on_press_maybe(entry.form.can_submit().then(|| msg(
                    StagesMessage::SubmitStage(phase_id)
                ))),
        ]
        .spacing(10),
    ]
    .spacing(10)
    .into()
}

fn error_banner(report: &ErrorReport) -> Element<'_, ScreenMessage<StagesScreen>> {
    container(
        column![
            text(report.heading()).size(20),
            text(report.message()),
            row![
                button("Copy error details")
                    .on_press(ScreenMessage::ScreenMessage(StagesMessage::CopyErrorDetails)),
                button("Dismiss")
                    .on_press(ScreenMessage::ScreenMessage(StagesMessage::DismissError)),
            ]
            .spacing(10),
        ]
        .spacing(8),
    )
    .padding(10)
    .into()
}
