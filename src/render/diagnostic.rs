use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
  Warning,
  Error,
}

/// A malformed subtree that was replaced by the empty string.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Diagnostic {
  pub id: &'static str,
  pub level: Level,
  pub message: String,
  /// Names of the enclosing elements and components, outermost first.
  pub path: Vec<String>,
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.path.is_empty() {
      write!(f, "{}: {}", self.id, self.message)
    } else {
      write!(f, "{}: {} (in {})", self.id, self.message, self.path.join(" > "))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn display_includes_path() {
    let diagnostic = Diagnostic {
      id: "null-node",
      level: Level::Warning,
      message: "node is null".into(),
      path: vec!["ul".into(), "li".into()],
    };

    assert_eq!(diagnostic.to_string(), "null-node: node is null (in ul > li)");
  }

  #[test]
  fn serializes_level_in_lowercase() {
    let diagnostic = Diagnostic {
      id: "invalid-tag",
      level: Level::Error,
      message: "tag is a number".into(),
      path: vec![],
    };

    assert_eq!(
      serde_json::to_string(&diagnostic).unwrap(),
      r#"{"id":"invalid-tag","level":"error","message":"tag is a number","path":[]}"#
    );
  }
}
