pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod panel;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, CatalogSource, Category, Item};
pub use config::Config;
pub use controller::{DirectoryController, PageView, SearchField};
pub use error::{CatalogError, ControllerError, PanelError};
pub use panel::{ActivePanel, PanelState};
pub use server::DirectoryServer;
