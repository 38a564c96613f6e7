use indexmap::IndexMap;
use std::borrow::Cow;

pub mod node;
pub mod render;
pub mod value;

pub use node::{Component, Node, Properties, Tag};
pub use render::Renderable;
pub use value::Value;

/// Attribute mapping of a node. Iteration follows insertion order.
pub type Props<'a> = IndexMap<Cow<'a, str>, Value<'a>>;
