//! User Settings
//!
//! Reader preferences (font size, highlighted verses, last read position)
//! stored per user id. Updates are partial: omitted fields keep their
//! current value, and a first update creates the record from defaults.

mod handler;
mod routes;

pub use routes::routes;
