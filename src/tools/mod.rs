pub mod navigate;
pub mod search;

pub use navigate::*;
pub use search::*;

use crate::controller::{DirectoryController, PageView};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Controller shared by every tool call of a session.
///
/// Calls take the lock for the whole event, so passes never overlap.
pub type SessionState = Arc<Mutex<DirectoryController>>;

/// Render a page view as the tool response body.
pub fn render_view(view: &PageView) -> Result<String, String> {
    serde_json::to_string_pretty(view).map_err(|e| format!("Failed to render page state: {}", e))
}

/// Current presentation state, without any event.
pub async fn handle_page_state(state: &SessionState) -> Result<String, String> {
    let controller = state.lock().await;
    render_view(&controller.view())
}
