pub mod attributes;
pub mod diagnostic;
pub mod escape;
pub mod html;

pub use attributes::render_attributes;
pub use diagnostic::{Diagnostic, Level};
pub use escape::escape_html;
pub use html::{is_void_element, render, render_to_string, render_with_diagnostics, Rendered};
