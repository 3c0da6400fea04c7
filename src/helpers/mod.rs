//! Helper functions used while rendering
//!
//! Date formatting, HTML escaping and URL joining. Everything here is a
//! plain function of its arguments.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
