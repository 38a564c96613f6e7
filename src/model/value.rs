use std::borrow::Cow;
use std::fmt;

/// A primitive attribute value.
///
/// `Null` marks an attribute that should be omitted from the output.
#[derive(PartialEq, Clone, Debug)]
pub enum Value<'a> {
  String(Cow<'a, str>),
  Number(f64),
  Boolean(bool),
  Null,
}

impl<'a> Value<'a> {
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }
}

impl<'a> From<&'a str> for Value<'a> {
  fn from(value: &'a str) -> Value<'a> {
    Value::String(value.into())
  }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
  fn from(value: Cow<'a, str>) -> Value<'a> {
    Value::String(value)
  }
}

impl<'a> From<String> for Value<'a> {
  fn from(value: String) -> Value<'a> {
    Value::String(value.into())
  }
}

impl<'a> From<bool> for Value<'a> {
  fn from(value: bool) -> Value<'a> {
    Value::Boolean(value)
  }
}

impl<'a> From<i32> for Value<'a> {
  fn from(value: i32) -> Value<'a> {
    Value::Number(value.into())
  }
}

impl<'a> From<u32> for Value<'a> {
  fn from(value: u32) -> Value<'a> {
    Value::Number(value.into())
  }
}

impl<'a> From<f64> for Value<'a> {
  fn from(value: f64) -> Value<'a> {
    Value::Number(value)
  }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
  fn from(value: Option<T>) -> Value<'a> {
    value.map_or(Value::Null, Into::into)
  }
}

impl<'a> fmt::Display for Value<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::String(value) => f.write_str(value),
      Value::Number(value) => fmt_number(*value, f),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::Null => f.write_str("null"),
    }
  }
}

/// Formats a number the way a JavaScript host stringifies it.
///
/// Magnitudes outside `[1e-6, 1e21)` switch to exponent notation with an
/// explicit sign on the exponent.
pub fn fmt_number(value: f64, f: &mut fmt::Formatter) -> fmt::Result {
  if value.is_nan() {
    return f.write_str("NaN");
  }

  if value.is_infinite() {
    return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
  }

  if value == 0.0 {
    return f.write_str("0");
  }

  let magnitude = value.abs();
  if (1e-6..1e21).contains(&magnitude) {
    return write!(f, "{}", value);
  }

  let formatted = format!("{:e}", value);
  match formatted.split_once('e') {
    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
      write!(f, "{}e+{}", mantissa, exponent)
    }
    _ => f.write_str(&formatted),
  }
}

/// Owned display form of a number, see [`fmt_number`].
pub fn number_to_string(value: f64) -> String {
  Value::Number(value).to_string()
}
