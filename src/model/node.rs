use super::render::Renderable;
use super::value::Value;
use super::Props;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// What a component receives: the node's props with its children merged in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties<'a> {
  pub props: Props<'a>,
  pub children: Renderable<'a>,
}

impl<'a> Properties<'a> {
  pub fn get(&self, key: &str) -> Option<&Value<'a>> {
    self.props.get(key)
  }

  /// String form of a prop, or the empty string when it is missing.
  pub fn text(&self, key: &str) -> String {
    self.get(key).map(ToString::to_string).unwrap_or_default()
  }
}

pub type ComponentFn<'a> = dyn Fn(Properties<'a>) -> Renderable<'a> + 'a;

/// A callable tag: invoked with [`Properties`] to produce more tree.
#[derive(Clone)]
pub struct Component<'a> {
  name: Option<Cow<'a, str>>,
  render: Rc<ComponentFn<'a>>,
}

impl<'a> Component<'a> {
  pub fn new<F>(render: F) -> Self
  where
    F: Fn(Properties<'a>) -> Renderable<'a> + 'a,
  {
    Component {
      name: None,
      render: Rc::new(render),
    }
  }

  /// Like [`Component::new`], with a name that shows up in diagnostic paths.
  pub fn named<F>(name: impl Into<Cow<'a, str>>, render: F) -> Self
  where
    F: Fn(Properties<'a>) -> Renderable<'a> + 'a,
  {
    Component {
      name: Some(name.into()),
      render: Rc::new(render),
    }
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn call(&self, properties: Properties<'a>) -> Renderable<'a> {
    (self.render)(properties)
  }
}

impl<'a> fmt::Debug for Component<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "Component({})", name),
      None => f.write_str("Component(<anonymous>)"),
    }
  }
}

impl<'a> PartialEq for Component<'a> {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.render, &other.render)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tag<'a> {
  /// No wrapping element; only the children are rendered.
  Fragment,
  Element(Cow<'a, str>),
  Component(Component<'a>),
  /// A tag that is none of the above, e.g. a number in a JSON tree.
  /// Holds a description of the offending value.
  Invalid(Cow<'a, str>),
}

impl<'a> From<&'a str> for Tag<'a> {
  fn from(name: &'a str) -> Tag<'a> {
    Tag::Element(name.into())
  }
}

impl<'a> From<String> for Tag<'a> {
  fn from(name: String) -> Tag<'a> {
    Tag::Element(name.into())
  }
}

impl<'a> From<Component<'a>> for Tag<'a> {
  fn from(component: Component<'a>) -> Tag<'a> {
    Tag::Component(component)
  }
}

impl<'a, T: Into<Tag<'a>>> From<Option<T>> for Tag<'a> {
  fn from(tag: Option<T>) -> Tag<'a> {
    tag.map_or(Tag::Fragment, Into::into)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node<'a> {
  pub tag: Tag<'a>,
  pub props: Option<Props<'a>>,
  pub children: Renderable<'a>,
}

impl<'a> Node<'a> {
  pub fn attribute(&self, key: &str) -> Option<&Value<'a>> {
    self.props.as_ref().and_then(|x| x.get(key))
  }

  pub fn set_attribute(&mut self, key: Cow<'a, str>, value: Value<'a>) -> Option<Value<'a>> {
    match &mut self.props {
      Some(props) => props.insert(key, value),
      None => {
        self.props = Some(Props::from([(key, value)]));
        None
      }
    }
  }

  pub fn is_fragment(&self) -> bool {
    matches!(self.tag, Tag::Fragment)
  }
}
