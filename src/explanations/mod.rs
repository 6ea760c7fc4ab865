//! Verse Explanations
//!
//! Static commentary keyed by book, chapter and verse, with key themes and
//! cross-references. The store is seeded with a handful of entries at startup
//! and new ones can be added through the API.

mod handler;
mod routes;

pub use routes::routes;
