//! Roster Controller - incremental search state machine
//!
//! Translates a high-frequency keystroke stream into an ordered stream of
//! committed queries:
//! - the input's display value never lags the user
//! - the committed query lives in the URL and is written with replace semantics
//! - each commit issues one fetch tagged with a monotonic epoch
//! - results from superseded epochs are dropped, so the view never regresses
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_controller::{MemoryHistory, SearchController};
//! use roster_core::ControllerConfig;
//!
//! # async fn example(backend: std::sync::Arc<roster_service::MockSearchService>) {
//! let history = MemoryHistory::parse("http://localhost/people?search=jane").unwrap();
//! let mut controller = SearchController::mount(backend, history, ControllerConfig::default());
//!
//! controller.on_input("jan");
//! controller.settle_all().await;
//!
//! let view = controller.current_view();
//! println!("{} results", view.result.map_or(0, |r| r.match_count));
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod controller;
mod debounce;
pub mod error;
pub mod navigation;
pub mod view;

pub use controller::{ControllerEvent, ControllerState, SearchController, SettleOutcome};
pub use error::NavigationError;
pub use navigation::{query_from_url, url_with_query, MemoryHistory, Navigator};
pub use view::SearchView;
