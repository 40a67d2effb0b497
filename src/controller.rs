//! Page controller: routes input events to the search core and panel state.
//!
//! The page has two search fields. The hero field on the landing view only
//! suggests; submitting it opens the schemes view and filters. The schemes
//! field inside that view suggests and filters on every keystroke. Every event
//! runs a complete pass against the current text; nothing is debounced.

use crate::catalog::Catalog;
use crate::error::ControllerError;
use crate::panel::{ActivePanel, PanelState};
use crate::search::{FilterOutcome, SuggestionList, filter, suggest};
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which search box an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// The landing-page search box.
    Hero,
    /// The search box inside the schemes view.
    Schemes,
}

/// Text and suggestions of one search box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub text: String,
    pub suggestions: SuggestionList,
}

/// Presentation state after an event, consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub schemes_view_open: bool,
    pub active_panel: ActivePanel,
    pub backdrop_visible: bool,
    pub scroll_locked: bool,
    pub hero: FieldState,
    pub schemes: FieldState,
    pub results: ResultsView,
}

/// Filter outcome laid out by category, one entry per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub query: String,
    pub categories: Vec<CategoryView>,
    pub visible_count: usize,
    pub show_no_results: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub visible: bool,
    /// Every item of the category, in catalog order.
    pub schemes: Vec<SchemeView>,
}

/// One scheme card and whether the last filter pass shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeView {
    pub title: String,
    pub visible: bool,
}

/// All mutable page state for one session.
#[derive(Debug)]
pub struct DirectoryController {
    catalog: Arc<Catalog>,
    panels: PanelState,
    schemes_view_open: bool,
    hero: FieldState,
    schemes: FieldState,
    last_filter: FilterOutcome,
}

impl DirectoryController {
    /// Create a controller with everything closed and every scheme visible.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let panels = PanelState::new(catalog.panels().to_vec());
        let last_filter = filter(&catalog, "");
        Self {
            catalog,
            panels,
            schemes_view_open: false,
            hero: FieldState::default(),
            schemes: FieldState::default(),
            last_filter,
        }
    }

    pub fn last_filter(&self) -> &FilterOutcome {
        &self.last_filter
    }

    pub fn field(&self, field: SearchField) -> &FieldState {
        match field {
            SearchField::Hero => &self.hero,
            SearchField::Schemes => &self.schemes,
        }
    }

    fn field_mut(&mut self, field: SearchField) -> &mut FieldState {
        match field {
            SearchField::Hero => &mut self.hero,
            SearchField::Schemes => &mut self.schemes,
        }
    }

    fn run_filter(&mut self, text: &str) {
        self.last_filter = filter(&self.catalog, &text.to_lowercase());
    }

    /// Open the schemes view showing `text` and filter with it.
    fn show_results(&mut self, text: &str) {
        self.schemes_view_open = true;
        self.schemes.text = text.to_string();
        self.run_filter(text);
    }

    /// The user typed into `field`.
    pub fn input(&mut self, field: SearchField, text: &str) {
        let suggestions = suggest(&self.catalog, text);
        let state = self.field_mut(field);
        state.text = text.to_string();
        state.suggestions = suggestions;

        if field == SearchField::Schemes {
            self.run_filter(text);
        }
    }

    /// The hero search button: open the schemes view with the hero text.
    pub fn submit_hero(&mut self) {
        let text = self.hero.text.clone();
        self.show_results(&text);
        self.hero.suggestions.dismiss();
        tracing::debug!("Submitted hero search {:?}", text);
    }

    /// A suggestion in `field`'s list was clicked. Either way the schemes
    /// view opens and filters with the exact title.
    pub fn select_suggestion(
        &mut self,
        field: SearchField,
        title: &str,
    ) -> Result<(), ControllerError> {
        let state = self.field_mut(field);
        if !state.suggestions.is_visible() || !state.suggestions.contains(title) {
            tracing::warn!("Rejected selection of {:?} in {:?} field", title, field);
            return Err(ControllerError::NotSuggested {
                title: title.to_string(),
            });
        }

        state.text = title.to_string();
        state.suggestions.dismiss();

        match field {
            SearchField::Hero => self.submit_hero(),
            SearchField::Schemes => self.show_results(title),
        }
        Ok(())
    }

    /// "Browse all schemes": open the view with an empty query.
    pub fn browse_all(&mut self) {
        self.show_results("");
    }

    pub fn close_schemes_view(&mut self) {
        self.schemes_view_open = false;
    }

    /// A click landed outside `field`; hide its suggestions.
    pub fn dismiss_suggestions(&mut self, field: SearchField) {
        self.field_mut(field).suggestions.dismiss();
    }

    /// The logo toggles, innermost first: schemes view, then overlays, then
    /// opens the sidebar.
    pub fn logo_click(&mut self) {
        if self.schemes_view_open {
            self.close_schemes_view();
        } else if self.panels.is_any_active() {
            self.panels.close_all();
        } else {
            self.panels.open_sidebar();
        }
    }

    pub fn open_sidebar(&mut self) {
        self.panels.open_sidebar();
    }

    pub fn open_panel(&mut self, id: &str) -> Result<(), ControllerError> {
        Ok(self.panels.open_panel(id)?)
    }

    pub fn close_panel(&mut self, id: &str) {
        self.panels.close_panel(id);
    }

    pub fn close_all(&mut self) {
        self.panels.close_all();
    }

    pub fn backdrop_click(&mut self) {
        self.panels.backdrop_click();
    }

    /// Snapshot the presentation state.
    pub fn view(&self) -> PageView {
        let mut visible = self.last_filter.item_visible.iter().copied();
        let categories = self
            .catalog
            .categories()
            .iter()
            .zip(&self.last_filter.categories)
            .map(|(category, outcome)| CategoryView {
                name: outcome.name.clone(),
                visible: outcome.visible,
                schemes: category
                    .items()
                    .iter()
                    .map(|item| SchemeView {
                        title: item.title().to_string(),
                        visible: visible.next().unwrap_or(false),
                    })
                    .collect(),
            })
            .collect();

        PageView {
            schemes_view_open: self.schemes_view_open,
            active_panel: self.panels.active().clone(),
            backdrop_visible: self.panels.is_any_active(),
            scroll_locked: self.schemes_view_open || self.panels.is_any_active(),
            hero: self.hero.clone(),
            schemes: self.schemes.clone(),
            results: ResultsView {
                query: self.last_filter.query.clone(),
                categories,
                visible_count: self.last_filter.visible_count,
                show_no_results: self.last_filter.show_no_results(),
            },
        }
    }
}
