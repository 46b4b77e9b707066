pub mod error_page;
pub mod loading_page;
pub mod stages;

use iced::{Element, Task};

use crate::core::error_report::ErrorReport;
use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Loading(loading_page::LoadingPageScreen),
    Stages(stages::StagesScreen),
    ErrorPage(error_page::ErrorPageScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Loading(screen) => screen.view().map(Message::Loading),
            ScreenData::Stages(screen) => screen.view().map(Message::Stages),
            ScreenData::ErrorPage(screen) => screen.view().map(Message::ErrorPage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (screen, Message::ChangeScreen(next)) => {
                *screen = next;
                Task::none()
            }
            (ScreenData::Stages(screen), Message::Stages(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => screen
                    .update(msg, state)
                    .map(Message::Stages)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {},
            },
            (ScreenData::ErrorPage(screen), Message::ErrorPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => screen
                    .update(msg, state)
                    .map(Message::ErrorPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {},
            },
            _ => Task::none(),
        }
    }
}

/// Maps a failed API call onto the error page contract, preferring the HTTP
/// status carried by the transport error.
pub fn report_from_error(error: &anyhow::Error) -> ErrorReport {
    let code = error
        .downcast_ref::<reqwest::Error>()
        .and_then(reqwest::Error::status)
        .map(|status| status.as_u16())
        .unwrap_or(500);
    ErrorReport::from_code(code)
}
