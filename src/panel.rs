//! Overlay panel state: the sidebar and the side panels opened from it.
//!
//! At most one overlay is active at a time. Every operation that opens
//! something clears the slot first, so exclusivity holds by construction.

use crate::catalog::SIDEBAR_ID;
use crate::error::PanelError;
use rapidfuzz::distance::jaro_winkler;
use serde::{Serialize, Serializer};

/// Minimum Jaro-Winkler similarity for an unknown panel id suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of ids suggested for an unknown panel.
const MAX_PANEL_SUGGESTIONS: usize = 3;

/// Which overlay currently owns the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivePanel {
    #[default]
    None,
    Sidebar,
    Panel(String),
}

impl Serialize for ActivePanel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Sidebar => serializer.serialize_some(SIDEBAR_ID),
            Self::Panel(id) => serializer.serialize_some(id),
        }
    }
}

/// The active-panel slot plus the set of panels that can be opened.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    active: ActivePanel,
    known: Vec<String>,
}

impl PanelState {
    /// Create panel state for the given side panel ids, with nothing open.
    pub fn new(known: Vec<String>) -> Self {
        Self {
            active: ActivePanel::None,
            known,
        }
    }

    pub fn active(&self) -> &ActivePanel {
        &self.active
    }

    /// True when any overlay is open. The backdrop and scroll lock follow this.
    pub fn is_any_active(&self) -> bool {
        self.active != ActivePanel::None
    }

    pub fn open_sidebar(&mut self) {
        self.close_all();
        self.active = ActivePanel::Sidebar;
        tracing::debug!("Opened sidebar");
    }

    /// Open a side panel, replacing whatever was active.
    ///
    /// Unknown ids leave the state untouched.
    pub fn open_panel(&mut self, id: &str) -> Result<(), PanelError> {
        if !self.known.iter().any(|k| k == id) {
            let suggestions = self.suggest(id);
            tracing::warn!("Rejected unknown panel '{}'", id);
            return Err(PanelError::UnknownPanel {
                id: id.to_string(),
                suggestions,
            });
        }

        self.active = ActivePanel::Panel(id.to_string());
        tracing::debug!("Opened panel '{}'", id);
        Ok(())
    }

    pub fn close_all(&mut self) {
        self.active = ActivePanel::None;
    }

    /// Close a side panel. If it was the active one, fall back to the sidebar.
    pub fn close_panel(&mut self, id: &str) {
        if matches!(&self.active, ActivePanel::Panel(active) if active == id) {
            self.active = ActivePanel::Sidebar;
        }
    }

    /// A click on the backdrop steps back from a side panel to the sidebar,
    /// or closes the sidebar.
    pub fn backdrop_click(&mut self) {
        match self.active {
            ActivePanel::Panel(_) => self.active = ActivePanel::Sidebar,
            ActivePanel::Sidebar | ActivePanel::None => self.close_all(),
        }
    }

    fn suggest(&self, id: &str) -> Vec<String> {
        let mut scored: Vec<(f64, &String)> = self
            .known
            .iter()
            .map(|known| (jaro_winkler::similarity(id.chars(), known.chars()), known))
            .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        scored
            .into_iter()
            .take(MAX_PANEL_SUGGESTIONS)
            .map(|(_, id)| id.clone())
            .collect()
    }
}
