//! MCP server exposing the directory page controller as tools.

use crate::catalog::Catalog;
use crate::controller::DirectoryController;
use crate::tools::{
    DismissSuggestionsRequest, NavigateRequest, SearchInputRequest, SelectSuggestionRequest,
    SessionState, SubmitSearchRequest, handle_dismiss_suggestions, handle_navigate,
    handle_page_state, handle_search_input, handle_select_suggestion, handle_submit_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// MCP server driving one directory page session.
#[derive(Clone)]
pub struct DirectoryServer {
    /// Page controller shared across tool calls
    state: SessionState,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DirectoryServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl DirectoryServer {
    /// Create a server over an already validated catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            state: Arc::new(Mutex::new(DirectoryController::new(catalog))),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Report that the text of a search box changed. Recomputes that box's suggestions (up to 5 catalog titles). Typing in the 'schemes' box also re-filters the scheme list; the 'hero' box only suggests.",
        input_schema = inline_schema_for_type::<SearchInputRequest>()
    )]
    async fn search_input(
        &self,
        Parameters(request): Parameters<SearchInputRequest>,
    ) -> std::result::Result<String, String> {
        handle_search_input(&self.state, request).await
    }

    #[tool(
        description = "Press the hero search button: opens the schemes view, copies the hero text into the schemes box and filters with it."
    )]
    async fn submit_search(
        &self,
        Parameters(request): Parameters<SubmitSearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_submit_search(&self.state, request).await
    }

    #[tool(
        description = "Click a suggested title. The box takes the exact title, its suggestions hide, and a filter pass runs with that title. In the hero box this also opens the schemes view.",
        input_schema = inline_schema_for_type::<SelectSuggestionRequest>()
    )]
    async fn select_suggestion(
        &self,
        Parameters(request): Parameters<SelectSuggestionRequest>,
    ) -> std::result::Result<String, String> {
        handle_select_suggestion(&self.state, request).await
    }

    #[tool(
        description = "Report a click outside a search box, hiding its suggestion list.",
        input_schema = inline_schema_for_type::<DismissSuggestionsRequest>()
    )]
    async fn dismiss_suggestions(
        &self,
        Parameters(request): Parameters<DismissSuggestionsRequest>,
    ) -> std::result::Result<String, String> {
        handle_dismiss_suggestions(&self.state, request).await
    }

    #[tool(
        description = "Navigate the page: open or close the schemes view, the sidebar, or a side panel. At most one overlay is open at a time.",
        input_schema = inline_schema_for_type::<NavigateRequest>()
    )]
    async fn navigate(
        &self,
        Parameters(request): Parameters<NavigateRequest>,
    ) -> std::result::Result<String, String> {
        handle_navigate(&self.state, request).await
    }

    #[tool(description = "Return the current page state without changing it.")]
    async fn page_state(&self) -> std::result::Result<String, String> {
        handle_page_state(&self.state).await
    }
}

#[tool_handler]
impl ServerHandler for DirectoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "scheme-finder: a directory of government schemes with typo-tolerant search. \
                 Every tool call is one page event and returns the full page state as JSON. \
                 Start with search_input or navigate(browse_schemes).",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays enums as dropdown widgets rather than raw JSON input fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
