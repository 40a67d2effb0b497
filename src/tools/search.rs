//! Search field events: typing, submitting, picking and dismissing suggestions.

use super::{SessionState, render_view};
use crate::controller::SearchField;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchInputRequest {
    /// Search box the text was typed into
    pub field: SearchField,
    /// Full current text of the search box
    pub text: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SubmitSearchRequest {}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectSuggestionRequest {
    /// Search box whose suggestion list was clicked
    pub field: SearchField,
    /// Exact suggested title
    pub title: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DismissSuggestionsRequest {
    /// Search box whose suggestion list should hide
    pub field: SearchField,
}

/// Text changed in a search box.
pub async fn handle_search_input(
    state: &SessionState,
    request: SearchInputRequest,
) -> Result<String, String> {
    let mut controller = state.lock().await;
    controller.input(request.field, &request.text);
    render_view(&controller.view())
}

/// The hero search button was pressed.
pub async fn handle_submit_search(
    state: &SessionState,
    _request: SubmitSearchRequest,
) -> Result<String, String> {
    let mut controller = state.lock().await;
    controller.submit_hero();
    render_view(&controller.view())
}

pub async fn handle_select_suggestion(
    state: &SessionState,
    request: SelectSuggestionRequest,
) -> Result<String, String> {
    let mut controller = state.lock().await;
    controller
        .select_suggestion(request.field, &request.title)
        .map_err(|e| e.to_string())?;
    render_view(&controller.view())
}

pub async fn handle_dismiss_suggestions(
    state: &SessionState,
    request: DismissSuggestionsRequest,
) -> Result<String, String> {
    let mut controller = state.lock().await;
    controller.dismiss_suggestions(request.field);
    render_view(&controller.view())
}
