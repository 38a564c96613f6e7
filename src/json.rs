//! Trees described as JSON.
//!
//! A node is any object carrying all three of `tag`, `props` and `children`.
//! Everything else maps onto the matching primitive, and objects that are not
//! nodes render the way a JavaScript host stringifies them.

use crate::error::Result;
use crate::model::{Node, Props, Renderable, Tag, Value};
use crate::model::value::number_to_string;
use serde_json::{Map, Value as JsonValue};

const OBJECT_TEXT: &str = "[object Object]";

pub fn from_str(input: &str) -> Result<Renderable<'static>> {
  let value: JsonValue = serde_json::from_str(input)?;
  Ok(from_value(value))
}

pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Renderable<'static>> {
  let value: JsonValue = serde_json::from_reader(reader)?;
  Ok(from_value(value))
}

pub fn from_value(value: JsonValue) -> Renderable<'static> {
  match value {
    JsonValue::Null => Renderable::Null,
    JsonValue::Bool(value) => Renderable::Boolean(value),
    JsonValue::Number(value) => Renderable::Number(value.as_f64().unwrap_or(f64::NAN)),
    JsonValue::String(value) => Renderable::String(value.into()),
    JsonValue::Array(items) => Renderable::Array(items.into_iter().map(from_value).collect()),
    JsonValue::Object(map) if is_node(&map) => convert_node(map).into(),
    JsonValue::Object(_) => Renderable::String(OBJECT_TEXT.into()),
  }
}

fn is_node(map: &Map<String, JsonValue>) -> bool {
  ["tag", "props", "children"].iter().all(|key| map.contains_key(*key))
}

fn convert_node(mut map: Map<String, JsonValue>) -> Node<'static> {
  let tag = match map.remove("tag") {
    None | Some(JsonValue::Null) => Tag::Fragment,
    Some(JsonValue::String(name)) => Tag::Element(name.into()),
    Some(other) => Tag::Invalid(describe(&other).into()),
  };

  let props = match map.remove("props") {
    Some(JsonValue::Object(props)) => Some(convert_props(props)),
    _ => None,
  };

  Node {
    tag,
    props,
    children: map.remove("children").map_or(Renderable::Null, from_value),
  }
}

fn convert_props(props: Map<String, JsonValue>) -> Props<'static> {
  props
    .into_iter()
    .map(|(key, value)| (key.into(), convert_value(value)))
    .collect()
}

fn convert_value(value: JsonValue) -> Value<'static> {
  match value {
    JsonValue::Null => Value::Null,
    JsonValue::Bool(value) => Value::Boolean(value),
    JsonValue::Number(value) => Value::Number(value.as_f64().unwrap_or(f64::NAN)),
    JsonValue::String(value) => Value::String(value.into()),
    other => Value::String(stringify(&other).into()),
  }
}

/// Host stringification: arrays join their items with commas, with null
/// items left empty.
fn stringify(value: &JsonValue) -> String {
  match value {
    JsonValue::Null => String::new(),
    JsonValue::Bool(value) => value.to_string(),
    JsonValue::Number(value) => number_to_string(value.as_f64().unwrap_or(f64::NAN)),
    JsonValue::String(value) => value.clone(),
    JsonValue::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
    JsonValue::Object(_) => OBJECT_TEXT.to_owned(),
  }
}

fn describe(value: &JsonValue) -> String {
  let kind = match value {
    JsonValue::Null => "null",
    JsonValue::Bool(_) => "boolean",
    JsonValue::Number(_) => "number",
    JsonValue::String(_) => "string",
    JsonValue::Array(_) => "array",
    JsonValue::Object(_) => "object",
  };

  format!("{} {}", kind, value)
}
