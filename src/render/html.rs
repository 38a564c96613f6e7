use super::attributes::write_attributes;
use super::diagnostic::{Diagnostic, Level};
use super::escape::escape_html_into;
use crate::model::{Node, Properties, Renderable, Tag, Value};
use std::io::{Error, Write};

static VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

pub fn is_void_element(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

/// Markup produced by a render, plus the subtrees that had to be dropped.
#[derive(Debug, Default, PartialEq)]
pub struct Rendered {
  pub html: String,
  pub diagnostics: Vec<Diagnostic>,
}

impl Rendered {
  pub fn is_clean(&self) -> bool {
    self.diagnostics.is_empty()
  }
}

/// Renders a tree to markup. Never fails: malformed subtrees are logged and
/// rendered as the empty string.
pub fn render_to_string<'a>(node: impl Into<Renderable<'a>>) -> String {
  render_with_diagnostics(node).html
}

pub fn render_with_diagnostics<'a>(node: impl Into<Renderable<'a>>) -> Rendered {
  let mut renderer = Renderer::default();
  renderer.render(node.into());

  Rendered {
    html: renderer.out,
    diagnostics: renderer.diagnostics,
  }
}

/// Renders a tree and writes the finished markup to `writer`.
pub fn render<'a, W: Write>(node: impl Into<Renderable<'a>>, writer: &mut W) -> Result<(), Error> {
  writer.write_all(render_to_string(node).as_bytes())
}

#[derive(Default)]
struct Renderer {
  out: String,
  diagnostics: Vec<Diagnostic>,
  path: Vec<String>,
}

impl Renderer {
  fn render(&mut self, node: Renderable) {
    match node {
      Renderable::Null => self.report("null-node", Level::Warning, "node is null".into()),

      Renderable::Array(items) => {
        for item in items {
          self.render(item);
        }
      }

      Renderable::Node(node) => self.render_node(*node),

      Renderable::String(value) => escape_html_into(&value, &mut self.out),

      Renderable::Number(value) => {
        escape_html_into(&Value::Number(value).to_string(), &mut self.out)
      }

      Renderable::Boolean(value) => self.out.push_str(if value { "true" } else { "false" }),
    }
  }

  fn render_node(&mut self, node: Node) {
    let Node {
      tag,
      props,
      children,
    } = node;

    match tag {
      Tag::Fragment => self.render(children),

      Tag::Component(component) => {
        // the node's own children replace any `children` prop
        let mut props = props.unwrap_or_default();
        props.shift_remove("children");

        let output = component.call(Properties { props, children });

        let name = component.name().unwrap_or("<component>").to_owned();
        self.nested(name, |renderer| renderer.render(output));
      }

      Tag::Element(name) => {
        self.out.push('<');
        self.out.push_str(&name);
        write_attributes(props.as_ref(), &mut self.out);

        if is_void_element(&name) {
          self.out.push_str("/>");
          return;
        }

        self.out.push('>');
        self.nested(name.to_string(), |renderer| renderer.render(children));
        self.out.push_str("</");
        self.out.push_str(&name);
        self.out.push('>');
      }

      Tag::Invalid(description) => self.report(
        "invalid-tag",
        Level::Error,
        format!("tag must be null, a component or an element name, got {}", description),
      ),
    }
  }

  fn nested(&mut self, name: String, render: impl FnOnce(&mut Self)) {
    self.path.push(name);
    render(self);
    self.path.pop();
  }

  fn report(&mut self, id: &'static str, level: Level, message: String) {
    let path = self.path.join(" > ");
    match level {
      Level::Warning => tracing::warn!(id, path = %path, "{}", message),
      Level::Error => tracing::error!(id, path = %path, "{}", message),
    }

    self.diagnostics.push(Diagnostic {
      id,
      level,
      message,
      path: self.path.clone(),
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{Component, Props};
  use crate::{create_node, fragment};
  use pretty_assertions::assert_eq;

  fn greeting<'a>() -> Component<'a> {
    Component::named("Greeting", |properties| {
      node!("p", None, format!("Hi {}", properties.text("name"))).into()
    })
  }

  #[test]
  fn element_with_attributes_and_text() {
    let tree = node!("div", props!(className = "a", id = "x"), "hello");
    assert_eq!(render_to_string(tree), r#"<div class="a" id="x">hello</div>"#);
  }

  #[test]
  fn void_element() {
    let tree = node!("img", props!(src = "a.png"));
    assert_eq!(render_to_string(tree), r#"<img src="a.png"/>"#);
  }

  #[test]
  fn boolean_attribute() {
    let tree = node!("input", props!(disabled = true));
    assert_eq!(render_to_string(tree), "<input disabled/>");
  }

  #[test]
  fn raw_text_is_escaped() {
    assert_eq!(render_to_string("<script>"), "&lt;script&gt;");
  }

  #[test]
  fn fragment_renders_children_without_wrapper() {
    let tree = fragment(vec![
      Renderable::from(node!("h1", None, "Title")),
      Renderable::from(node!("p", None, "Body")),
    ]);

    assert_eq!(render_to_string(tree), "<h1>Title</h1><p>Body</p>");
  }

  #[test]
  fn component_receives_props() {
    let tree = node!(greeting(), props!(name = "Bo"));
    assert_eq!(render_to_string(tree), "<p>Hi Bo</p>");
  }

  #[test]
  fn component_receives_children() {
    let card = Component::new(|properties| {
      node!("section", props!(className = "card"), properties.children).into()
    });

    let tree = node!(card, None, node!("b", None, "inside"), " text");
    assert_eq!(
      render_to_string(tree),
      r#"<section class="card"><b>inside</b> text</section>"#
    );
  }

  #[test]
  fn component_children_supersede_children_prop() {
    let echo = Component::new(|properties| properties.children);
    let tree = node!(echo, props!(children = "from props"), "from node");
    assert_eq!(render_to_string(tree), "from node");
  }

  #[test]
  fn children_prop_is_not_visible_to_components() {
    let seen = Component::new(|properties| {
      assert_eq!(properties.get("children"), None);
      properties.children
    });

    let tree = node!(seen, props!(children = "from props"), "from node");
    assert_eq!(render_to_string(tree), "from node");
  }

  #[test]
  fn forwarded_props_drop_children_prop() {
    let forward = Component::new(|properties| {
      create_node("div", properties.props, vec![properties.children]).into()
    });

    let tree = node!(forward, props!(children = "stale", id = "y"), "kid");
    assert_eq!(render_to_string(tree), r#"<div id="y">kid</div>"#);
  }

  #[test]
  fn component_returning_component_resolves_transitively() {
    let inner = greeting();
    let outer = Component::named("Outer", move |properties| {
      create_node(inner.clone(), properties.props, vec![]).into()
    });

    let tree = node!(outer, props!(name = "Al"));
    assert_eq!(render_to_string(tree), "<p>Hi Al</p>");
  }

  #[test]
  fn component_without_props_gets_empty_props() {
    let count = Component::new(|properties| {
      Renderable::from(properties.props.len() as f64)
    });

    assert_eq!(render_to_string(node!(count)), "0");
  }

  #[test]
  fn void_elements_ignore_children() {
    for name in VOID_ELEMENTS {
      let tree = node!(*name, None, node!("span", None, "ignored"), Renderable::Null);
      let rendered = render_with_diagnostics(tree);

      assert_eq!(rendered.html, format!("<{}/>", name));
      assert!(rendered.is_clean());
    }
  }

  #[test]
  fn void_lookup_is_case_sensitive() {
    assert!(is_void_element("br"));
    assert!(!is_void_element("BR"));
    assert_eq!(render_to_string(node!("BR")), "<BR></BR>");
  }

  #[test]
  fn nested_fragments_never_wrap() {
    let tree = fragment(fragment(fragment(node!("hr"))));
    assert_eq!(render_to_string(tree), "<hr/>");
  }

  #[test]
  fn nested_arrays_flatten() {
    let nested = Renderable::Array(vec![
      "a".into(),
      Renderable::Array(vec!["b".into(), Renderable::Array(vec!["c".into()])]),
      node!("i", None, "d").into(),
    ]);

    let flat = Renderable::Array(vec!["a".into(), "b".into(), "c".into(), node!("i", None, "d").into()]);

    assert_eq!(render_to_string(nested), render_to_string(flat));
    assert_eq!(render_to_string(flat_again()), "abc<i>d</i>");
  }

  fn flat_again<'a>() -> Renderable<'a> {
    vec!["a", "b", "c"]
      .into_iter()
      .map(Renderable::from)
      .chain([node!("i", None, "d").into()])
      .collect()
  }

  #[test]
  fn primitives_render_as_text() {
    assert_eq!(render_to_string(42), "42");
    assert_eq!(render_to_string(1.5), "1.5");
    assert_eq!(render_to_string(true), "true");
    assert_eq!(render_to_string(false), "false");
    assert_eq!(render_to_string(String::from("a & b")), "a &amp; b");
  }

  #[test]
  fn null_degrades_to_empty_string() {
    let rendered = render_with_diagnostics(Renderable::Null);

    assert_eq!(rendered.html, "");
    assert_eq!(
      rendered.diagnostics,
      vec![Diagnostic {
        id: "null-node",
        level: Level::Warning,
        message: "node is null".into(),
        path: vec![],
      }]
    );
  }

  #[test]
  fn malformed_subtrees_are_isolated() {
    let broken = Node {
      tag: Tag::Invalid("number 42".into()),
      props: None,
      children: "lost".into(),
    };

    let tree = node!("ul", None,
      node!("li", None, "one"),
      node!("li", None, Renderable::Null),
      node!("li", None, broken),
      node!("li", None, "four"),
    );

    let rendered = render_with_diagnostics(tree);

    assert_eq!(
      rendered.html,
      "<ul><li>one</li><li></li><li></li><li>four</li></ul>"
    );

    let summary: Vec<_> = rendered
      .diagnostics
      .iter()
      .map(|d| (d.id, d.level, d.path.join(" > ")))
      .collect();

    assert_eq!(
      summary,
      vec![
        ("null-node", Level::Warning, "ul > li".to_owned()),
        ("invalid-tag", Level::Error, "ul > li".to_owned()),
      ]
    );
  }

  #[test]
  fn diagnostic_path_names_components() {
    let empty = Component::named("Empty", |_| Renderable::Null);
    let rendered = render_with_diagnostics(node!("main", None, node!(empty)));

    assert_eq!(rendered.html, "<main></main>");
    assert_eq!(rendered.diagnostics[0].path, vec!["main", "Empty"]);
  }

  #[test]
  fn fragment_ignores_props() {
    let tree = Node {
      tag: Tag::Fragment,
      props: Some(props!(id = "x")),
      children: "text".into(),
    };

    assert_eq!(render_to_string(tree), "text");
  }

  #[test]
  fn empty_props_render_no_attribute_space() {
    let tree = create_node("div", Props::new(), vec![]);
    assert_eq!(render_to_string(tree), "<div></div>");
  }

  #[test]
  fn render_writes_to_writer() {
    let mut buffer = Vec::new();
    render(node!("em", None, "x"), &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "<em>x</em>");
  }
}
