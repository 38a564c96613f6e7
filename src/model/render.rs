use super::node::Node;
use super::value::Value;
use std::borrow::Cow;

/// Anything the renderer accepts.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Renderable<'a> {
  Node(Box<Node<'a>>),
  Array(Vec<Renderable<'a>>),
  String(Cow<'a, str>),
  Number(f64),
  Boolean(bool),
  #[default]
  Null,
}

impl<'a> From<Node<'a>> for Renderable<'a> {
  fn from(node: Node<'a>) -> Renderable<'a> {
    Renderable::Node(Box::new(node))
  }
}

impl<'a> From<&'a str> for Renderable<'a> {
  fn from(value: &'a str) -> Renderable<'a> {
    Renderable::String(value.into())
  }
}

impl<'a> From<String> for Renderable<'a> {
  fn from(value: String) -> Renderable<'a> {
    Renderable::String(value.into())
  }
}

impl<'a> From<Cow<'a, str>> for Renderable<'a> {
  fn from(value: Cow<'a, str>) -> Renderable<'a> {
    Renderable::String(value)
  }
}

impl<'a> From<f64> for Renderable<'a> {
  fn from(value: f64) -> Renderable<'a> {
    Renderable::Number(value)
  }
}

impl<'a> From<i32> for Renderable<'a> {
  fn from(value: i32) -> Renderable<'a> {
    Renderable::Number(value.into())
  }
}

impl<'a> From<bool> for Renderable<'a> {
  fn from(value: bool) -> Renderable<'a> {
    Renderable::Boolean(value)
  }
}

impl<'a> From<Value<'a>> for Renderable<'a> {
  fn from(value: Value<'a>) -> Renderable<'a> {
    match value {
      Value::String(value) => Renderable::String(value),
      Value::Number(value) => Renderable::Number(value),
      Value::Boolean(value) => Renderable::Boolean(value),
      Value::Null => Renderable::Null,
    }
  }
}

impl<'a> From<Vec<Renderable<'a>>> for Renderable<'a> {
  fn from(items: Vec<Renderable<'a>>) -> Renderable<'a> {
    Renderable::Array(items)
  }
}

impl<'a, T: Into<Renderable<'a>>> From<Option<T>> for Renderable<'a> {
  fn from(value: Option<T>) -> Renderable<'a> {
    value.map_or(Renderable::Null, Into::into)
  }
}

impl<'a, T: Into<Renderable<'a>>> FromIterator<T> for Renderable<'a> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Renderable::Array(iter.into_iter().map(Into::into).collect())
  }
}
