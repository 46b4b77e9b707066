use crate::core::api::PortalClient;

/// Shared application state handed to every screen.
#[derive(Debug)]
pub struct AppState {
    pub client: PortalClient,
    pub project_id: i64,
}
