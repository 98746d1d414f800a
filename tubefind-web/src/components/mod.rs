//! Reusable HTML components
//!
//! Components are plain functions returning HTML strings. Callers pass raw
//! text; components escape it before insertion.

pub mod layout;
pub mod video;

pub use layout::escape_html;
