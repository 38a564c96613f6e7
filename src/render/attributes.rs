use crate::model::{Props, Value};

/// Serializes props into an attribute string with a leading space, or the
/// empty string when nothing is emitted.
///
/// `null` and `false` entries are dropped, `true` becomes a bare attribute and
/// `className` is written as `class`. Values are written as-is: unlike text
/// content they are not escaped.
pub fn render_attributes(props: Option<&Props>) -> String {
  let mut out = String::new();
  write_attributes(props, &mut out);
  out
}

pub fn write_attributes(props: Option<&Props>, out: &mut String) {
  let Some(props) = props else {
    return;
  };

  for (key, value) in props {
    if value.is_null() || matches!(value, Value::Boolean(false)) {
      continue;
    }

    out.push(' ');

    // className wins over the boolean rule: `className: true` is `class="true"`
    let class_name = key == "className";
    let name = if class_name { "class" } else { key.as_ref() };
    out.push_str(name);

    if !class_name && matches!(value, Value::Boolean(true)) {
      continue;
    }

    out.push_str("=\"");
    out.push_str(&value.to_string());
    out.push('"');
  }
}
