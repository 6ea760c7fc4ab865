//! Bible Text Module
//!
//! Book catalog, chapter proxying and keyword search over verse text
//! supplied by the external provider.
//!
//! # Usage
//!
//! ```rust,ignore
//! use scripture::bible;
//!
//! let app = Router::new()
//!     .nest("/api/bible", bible::routes())
//!     .with_state(app_state);
//! ```

pub mod catalog;
mod handler;
mod routes;
pub mod search;

pub use handler::SearchResponse;
pub use routes::routes;
