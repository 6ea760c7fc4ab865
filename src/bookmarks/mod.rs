//! Bookmarks
//!
//! Saved verses, optionally tied to a user id. There is no authentication:
//! the caller names the user it is acting for.

mod handler;
mod routes;

pub use handler::BookmarkSaved;
pub use routes::routes;
