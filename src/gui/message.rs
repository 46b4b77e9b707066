use crate::gui::screens::{
    ScreenData, ScreenMessage, error_page::ErrorPageScreen, loading_page::LoadingPageScreen,
    stages::StagesScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Loading(ScreenMessage<LoadingPageScreen>),
    Stages(ScreenMessage<StagesScreen>),
    ErrorPage(ScreenMessage<ErrorPageScreen>),
    ChangeScreen(ScreenData),
}
