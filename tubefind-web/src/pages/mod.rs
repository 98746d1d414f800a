//! Full page handlers using the component system
//!
//! Every page shares the base layout from `templates::base`.

pub mod search;

// Re-export page handlers
pub use search::{SearchForm, SearchView, health, render_search_page, search_form_page, search_submit};
