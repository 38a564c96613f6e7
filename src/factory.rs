use crate::model::{Node, Props, Renderable, Tag};

/// Node factory. Children are always collected into a sequence, even when
/// there is only one.
pub fn create_node<'a>(
  tag: impl Into<Tag<'a>>,
  props: impl Into<Option<Props<'a>>>,
  children: Vec<Renderable<'a>>,
) -> Node<'a> {
  Node {
    tag: tag.into(),
    props: props.into(),
    children: Renderable::Array(children),
  }
}

/// Wraps `children` in a node that renders no element of its own.
pub fn fragment<'a>(children: impl Into<Renderable<'a>>) -> Node<'a> {
  Node {
    tag: Tag::Fragment,
    props: Some(Props::new()),
    children: children.into(),
  }
}
