//! Navigation events: the schemes view, the sidebar and side panels.

use super::{SessionState, render_view};
use rmcp::schemars;
use serde::Deserialize;

/// A navigation click on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavigateAction {
    /// "Browse all schemes": open the schemes view with an empty query
    BrowseSchemes,
    /// Back button of the schemes view
    CloseSchemes,
    /// Site logo: closes the schemes view, else closes overlays, else opens the sidebar
    LogoClick,
    OpenSidebar,
    /// Open the side panel named by `panel_id`
    OpenPanel,
    /// Close the side panel named by `panel_id`
    ClosePanel,
    CloseAll,
    /// Click on the dimmed backdrop behind an overlay
    BackdropClick,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NavigateRequest {
    pub action: NavigateAction,
    /// Side panel id, required for open_panel and close_panel
    #[serde(default)]
    pub panel_id: Option<String>,
}

/// Apply a navigation event.
pub async fn handle_navigate(
    state: &SessionState,
    request: NavigateRequest,
) -> Result<String, String> {
    let panel_id = || {
        request
            .panel_id
            .as_deref()
            .ok_or_else(|| format!("Action {:?} requires panel_id", request.action))
    };

    let mut controller = state.lock().await;
    match request.action {
        NavigateAction::BrowseSchemes => controller.browse_all(),
        NavigateAction::CloseSchemes => controller.close_schemes_view(),
        NavigateAction::LogoClick => controller.logo_click(),
        NavigateAction::OpenSidebar => controller.open_sidebar(),
        NavigateAction::OpenPanel => controller
            .open_panel(panel_id()?)
            .map_err(|e| e.to_string())?,
        NavigateAction::ClosePanel => controller.close_panel(panel_id()?),
        NavigateAction::CloseAll => controller.close_all(),
        NavigateAction::BackdropClick => controller.backdrop_click(),
    }
    render_view(&controller.view())
}
