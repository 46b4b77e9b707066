use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, text},
};

use crate::core::error_report::ErrorReport;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// Full-page error display, the catch-all surface for failed loads.
#[derive(Debug, Clone)]
pub struct ErrorPageScreen {
    report: ErrorReport,
}

#[derive(Debug, Clone)]
pub enum ErrorPageMessage {
    CopyDetails,
}

impl ErrorPageScreen {
    pub fn new(report: ErrorReport) -> Self {
        Self { report }
    }
}

impl Screen for ErrorPageScreen {
    type Message = ErrorPageMessage;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        // Text stand-ins for the broken/happy coder illustrations.
        let glyph = if self.report.is_success() {
            "(^_^)"
        } else {
            "(x_x)"
        };
        let mut content = column![
            text(self.report.heading()).size(28),
            text(self.report.message()),
            button("Copy error details")
                .on_press(ScreenMessage::ScreenMessage(ErrorPageMessage::CopyDetails)),
            text(glyph).size(40),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        if !self.report.is_success() {
            content = content.push(text(format!("{}", self.report.code)));
        }

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ErrorPageMessage::CopyDetails => iced::clipboard::write(self.report.clipboard_text()),
        }
    }
}
