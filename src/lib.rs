//! Hotel Explorer Library
//!
//! Search hotels by city code, pick up to four for comparison, and chart
//! them in the terminal.

pub mod app;
pub mod catalog;
pub mod chart;
pub mod cli;
pub mod compare;
pub mod components;
pub mod config_file;
pub mod error;
pub mod provider;
pub mod search;
pub mod session;
pub mod shutdown;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, Focus};
pub use catalog::{Catalog, HotelSource};
pub use chart::{ChartRecord, project, project_random};
pub use compare::{COMPARISON_CAPACITY, ComparisonSet, ToggleOutcome};
pub use config_file::ExplorerConfig;
pub use error::{ExplorerError, Result};
pub use provider::HotelResultProvider;
pub use search::SearchInput;
pub use session::{AuthClient, LocalSession, Navigator, SessionController};
pub use types::{CityCode, Hotel, Route};
