/// Builds [`Props`](crate::model::Props) in insertion order.
///
/// Keys are identifiers or string literals, so attributes that are not valid
/// identifiers can still be written:
///
/// ```
/// let props = cappa::props!(className = "card", "data-id" = 7, hidden = false);
/// assert_eq!(props.len(), 3);
/// ```
#[macro_export]
macro_rules! props {
  (@key $key:ident) => {
    ::std::borrow::Cow::Borrowed(stringify!($key))
  };

  (@key $key:literal) => {
    ::std::borrow::Cow::Borrowed($key)
  };

  () => {
    $crate::model::Props::new()
  };

  ($($key:tt = $value:expr),+ $(,)?) => {
    $crate::model::Props::from([
      $(($crate::props!(@key $key), $crate::model::Value::from($value)),)+
    ])
  };
}

/// Builds a [`Node`](crate::model::Node) through [`create_node`](crate::create_node).
///
/// ```
/// use cappa::{node, props, render_to_string};
///
/// let tree = node!("ul", props!(className = "list"),
///   node!("li", None, "one"),
///   node!("li", None, "two"),
/// );
///
/// assert_eq!(
///   render_to_string(tree),
///   r#"<ul class="list"><li>one</li><li>two</li></ul>"#
/// );
/// ```
#[macro_export]
macro_rules! node {
  ($tag:expr) => {
    $crate::create_node($tag, None, ::std::vec::Vec::new())
  };

  ($tag:expr, $props:expr $(, $child:expr)* $(,)?) => {
    $crate::create_node(
      $tag,
      $props,
      ::std::vec![$($crate::model::Renderable::from($child)),*],
    )
  };
}
