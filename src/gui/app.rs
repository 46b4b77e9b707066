use iced::{Element, Task, Theme};

use crate::core::api::PortalClient;
use crate::gui::{
    message::Message,
    screens::{
        Screen, ScreenData, ScreenMessage, error_page::ErrorPageScreen,
        loading_page::LoadingPageScreen, stages::StagesScreen,
    },
    state::AppState,
};

/// Startup parameters from the command line.
#[derive(Debug, Clone)]
pub struct Flags {
    pub api_url: String,
    pub project_id: i64,
    pub fragment: Option<String>,
}

#[derive(Debug)]
pub struct Portal {
    state: AppState,
    screen: ScreenData,
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(
        move || Portal::new(flags.clone()),
        Portal::update,
        Portal::view,
    )
    .title(Portal::title)
    .theme(|_: &Portal| Theme::Dark)
    .run()
}

impl Portal {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let state = AppState {
            client: PortalClient::new(flags.api_url),
            project_id: flags.project_id,
        };
        let client = state.client.clone();
        let project_id = flags.project_id;
        let fragment = flags.fragment;
        let load = Task::perform(
            async move { StagesScreen::load(client, project_id, fragment).await },
            |result| match result {
                Ok(screen) => Message::ChangeScreen(ScreenData::Stages(screen)),
                Err(report) => {
                    Message::ChangeScreen(ScreenData::ErrorPage(ErrorPageScreen::new(report)))
                }
            },
        );
        (
            Self {
                state,
                screen: ScreenData::Loading(LoadingPageScreen),
            },
            load,
        )
    }

    fn title(&self) -> String {
        "Phasedeck - Project Stages".to_owned()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_screen_message)
    }
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
