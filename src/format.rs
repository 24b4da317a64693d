//! This module provides template formatting for loosely-typed debug
//! arguments.
//!
//! [`format_message`] substitutes printf-style placeholders with values
//! from a small closed set of semantic kinds. It is kept separate from
//! the entry model so it can be tested on its own.
use serde_json::Value;

/// A value that can travel through [`format_message`].
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    /// A plain string.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// Structured data, rendered through the structural inspector.
    Json(Value),
}

impl LogValue {
    /// Display form used for `%s` and for leftover arguments.
    fn stringify(&self) -> String {
        match self {
            LogValue::Str(text) => text.clone(),
            LogValue::Int(number) => number.to_string(),
            LogValue::Float(number) => number.to_string(),
            LogValue::Bool(flag) => flag.to_string(),
            LogValue::Json(value) => inspect(value),
        }
    }

    /// Numeric form used for `%d` and `%f`. `None` for non-numeric kinds.
    fn render_numeric(&self) -> Option<String> {
        match self {
            LogValue::Int(number) => Some(number.to_string()),
            LogValue::Float(number) => Some(number.to_string()),
            _ => None,
        }
    }

    /// Integer form used for `%i`. Floats truncate toward zero.
    fn render_integer(&self) -> Option<String> {
        match self {
            LogValue::Int(number) => Some(number.to_string()),
            LogValue::Float(number) => Some((number.trunc() as i64).to_string()),
            _ => None,
        }
    }

    /// Compact JSON form used for `%j`.
    fn render_json(&self) -> String {
        match self {
            LogValue::Str(text) => Value::String(text.clone()).to_string(),
            LogValue::Int(number) => number.to_string(),
            // Non-finite floats have no JSON representation and encode
            // as null.
            LogValue::Float(number) => Value::from(*number).to_string(),
            LogValue::Bool(flag) => flag.to_string(),
            LogValue::Json(value) => value.to_string(),
        }
    }

    /// Structural form used for `%o` and `%O`.
    fn render_inspected(&self) -> String {
        match self {
            LogValue::Str(text) => format!("{:?}", text),
            LogValue::Json(value) => inspect(value),
            _ => self.stringify(),
        }
    }
}

impl From<&str> for LogValue {
    fn from(value: &str) -> Self {
        LogValue::Str(value.to_string())
    }
}

impl From<String> for LogValue {
    fn from(value: String) -> Self {
        LogValue::Str(value)
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        LogValue::Int(i64::from(value))
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Int(value)
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Bool(value)
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        LogValue::Json(value)
    }
}

/// Formats `template` against `args`, consuming placeholders in order.
///
/// Supported placeholders: `%s` (stringify), `%d` (number, `NaN` for
/// non-numeric kinds), `%i` (integer, floats truncate), `%f` (float,
/// `NaN` for non-numeric kinds), `%j` (compact JSON), `%o`/`%O`
/// (structural inspection) and `%%` (literal percent, consumes no
/// argument). A placeholder with no remaining argument is left verbatim.
/// Arguments left over once every placeholder is consumed are appended,
/// each preceded by a single space.
///
/// Formatting is total: it never fails or panics, for any input.
pub fn format_message(template: &str, args: &[LogValue]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let Some(kind) = chars.peek().copied() else {
            out.push('%');
            continue;
        };

        if kind == '%' {
            chars.next();
            out.push('%');
            continue;
        }

        // Leave the placeholder in place when the arguments run out.
        let Some(arg) = args.get(next_arg) else {
            out.push('%');
            continue;
        };

        let rendered = match kind {
            's' => Some(arg.stringify()),
            'd' | 'f' => Some(arg.render_numeric().unwrap_or_else(|| "NaN".to_string())),
            'i' => Some(arg.render_integer().unwrap_or_else(|| "NaN".to_string())),
            'j' => Some(arg.render_json()),
            'o' | 'O' => Some(arg.render_inspected()),
            _ => None,
        };

        match rendered {
            Some(text) => {
                chars.next();
                next_arg += 1;
                out.push_str(&text);
            }
            None => out.push('%'),
        }
    }

    for arg in &args[next_arg..] {
        out.push(' ');
        out.push_str(&arg.stringify());
    }

    out
}

/// Best-effort structural rendering. Never fails.
fn inspect(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_message, LogValue};
    use serde_json::json;

    #[test]
    fn test_substitutes_placeholders_in_order() {
        let result = format_message(
            "sender %s sent %d bytes",
            &[LogValue::from("alice"), LogValue::from(512)],
        );
        assert_eq!(result, "sender alice sent 512 bytes");
    }

    #[test]
    fn test_stringify_accepts_every_kind() {
        let result = format_message(
            "%s %s %s %s",
            &[
                LogValue::from(21000),
                LogValue::from(1.5),
                LogValue::from(true),
                LogValue::from(json!({"to": null})),
            ],
        );
        assert_eq!(result, "21000 1.5 true {\"to\":null}");
    }

    #[test]
    fn test_numeric_placeholders() {
        assert_eq!(
            format_message("%d", &[LogValue::from(2.5)]),
            "2.5".to_string()
        );
        assert_eq!(format_message("%i", &[LogValue::from(2.9)]), "2");
        assert_eq!(format_message("%i", &[LogValue::from(-2.9)]), "-2");
        assert_eq!(format_message("%d", &[LogValue::from("five")]), "NaN");
        assert_eq!(format_message("%f", &[LogValue::from(false)]), "NaN");
    }

    #[test]
    fn test_json_placeholder_quotes_strings() {
        assert_eq!(format_message("%j", &[LogValue::from("hi")]), "\"hi\"");
        assert_eq!(
            format_message("%j", &[LogValue::from(json!(["a", 1]))]),
            "[\"a\",1]"
        );
    }

    #[test]
    fn test_inspect_placeholder() {
        assert_eq!(format_message("%o", &[LogValue::from("hi")]), "\"hi\"");
        assert_eq!(
            format_message("%O", &[LogValue::from(json!({"gas": 21000}))]),
            "{\"gas\":21000}"
        );
    }

    #[test]
    fn test_literal_percent_consumes_no_argument() {
        let result = format_message("100%% of %s", &[LogValue::from("blocks")]);
        assert_eq!(result, "100% of blocks");
    }

    #[test]
    fn test_missing_argument_leaves_placeholder() {
        assert_eq!(format_message("a %s b %s", &[LogValue::from("x")]), "a x b %s");
        assert_eq!(format_message("%d", &[]), "%d");
    }

    #[test]
    fn test_leftover_arguments_are_appended() {
        let result = format_message(
            "done",
            &[LogValue::from("fast"), LogValue::from(json!({"ok": true}))],
        );
        assert_eq!(result, "done fast {\"ok\":true}");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        assert_eq!(format_message("%x", &[LogValue::from(7)]), "%x 7");
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!(format_message("50%", &[]), "50%");
    }
}
