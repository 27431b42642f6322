//! Roster Service - mock people search
//!
//! Provides the query side of incremental search:
//! - A read-only `Directory` of people, generated or hand-written
//! - `MockSearchService`, which filters, sorts and caps results and then
//!   deliberately waits before answering
//!
//! # Example
//!
//! ```rust,ignore
//! use roster_core::{Epoch, Latency};
//! use roster_service::{Directory, MockSearchService};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let service = MockSearchService::new(Arc::new(Directory::classic()), 10)
//!     .with_latency(Latency::None);
//! let (_, result) = service.search("jane", Epoch(1)).await;
//! assert_eq!(result.match_count, 1);
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod collation;
pub mod directory;
mod names;
pub mod service;

pub use collation::NameCollator;
pub use directory::Directory;
pub use service::MockSearchService;
