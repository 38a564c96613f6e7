//! Render trees of virtual nodes to HTML strings.
//!
//! ```
//! use cappa::model::Component;
//! use cappa::{node, props, render_to_string};
//!
//! let greeting = Component::named("Greeting", |properties| {
//!   node!("p", None, format!("Hi {}", properties.text("name"))).into()
//! });
//!
//! assert_eq!(render_to_string(node!(greeting, props!(name = "Bo"))), "<p>Hi Bo</p>");
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod factory;
pub mod json;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use factory::{create_node, fragment};
pub use render::{render, render_to_string, render_with_diagnostics, Diagnostic, Rendered};
