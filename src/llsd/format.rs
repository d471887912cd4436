//! Pretty LLSD XML formatter

use quick_xml::escape::escape;

use super::Value;

/// Indenting writer for LLSD values.
///
/// The opening tag of a value is written at the current position; nested
/// lines are indented by `indent_atom` per level starting at `base_level`.
#[derive(Debug, Clone)]
pub struct PrettyFormatter {
    indent_atom: &'static str,
    base_level: usize,
}

impl Default for PrettyFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PrettyFormatter {
    pub fn new() -> Self {
        Self {
            indent_atom: "  ",
            base_level: 0,
        }
    }

    /// Treat the written value as nested `level` deep
    #[must_use]
    pub fn with_base_level(mut self, level: usize) -> Self {
        self.base_level = level;
        self
    }

    pub fn write_value(&self, out: &mut String, value: &Value) {
        self.write_at(out, value, self.base_level);
    }

    fn write_at(&self, out: &mut String, value: &Value, level: usize) {
        match value {
            Value::Undef => out.push_str("<undef />"),
            Value::Boolean(b) => write_scalar(out, "boolean", if *b { "true" } else { "false" }),
            Value::Integer(i) => write_scalar(out, "integer", &i.to_string()),
            Value::Real(r) => write_scalar(out, "real", &format_real(*r)),
            Value::String(s) => write_scalar(out, "string", s),
            Value::Uuid(s) => write_scalar(out, "uuid", s),
            Value::Date(s) => write_scalar(out, "date", s),
            Value::Uri(s) => write_scalar(out, "uri", s),
            Value::Binary {
                encoding: Some(encoding),
                data,
            } => {
                let attrs = format!(" encoding=\"{}\"", escape(encoding));
                write_element(out, "binary", &attrs, data);
            }
            Value::Binary {
                encoding: None,
                data,
            } => write_scalar(out, "binary", data),
            Value::Array(items) if items.is_empty() => out.push_str("<array />"),
            Value::Array(items) => {
                out.push_str("<array>");
                for item in items {
                    self.newline(out, level + 1);
                    self.write_at(out, item, level + 1);
                }
                self.newline(out, level);
                out.push_str("</array>");
            }
            Value::Map(map) if map.is_empty() => out.push_str("<map />"),
            Value::Map(map) => {
                out.push_str("<map>");
                for (key, item) in map {
                    self.newline(out, level + 1);
                    write_scalar(out, "key", key);
                    self.newline(out, level + 1);
                    self.write_at(out, item, level + 1);
                }
                self.newline(out, level);
                out.push_str("</map>");
            }
        }
    }

    fn newline(&self, out: &mut String, level: usize) {
        out.push('\n');
        for _ in 0..level {
            out.push_str(self.indent_atom);
        }
    }
}

fn write_scalar(out: &mut String, tag: &str, text: &str) {
    write_element(out, tag, "", text);
}

fn write_element(out: &mut String, tag: &str, attrs: &str, text: &str) {
    out.push('<');
    out.push_str(tag);
    out.push_str(attrs);
    if text.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');
    out.push_str(&escape(text));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Reals always carry a fractional part so they read back as reals
fn format_real(r: f64) -> String {
    if r.is_nan() {
        "nan".to_string()
    } else if r.is_infinite() {
        String::from(if r > 0.0 { "inf" } else { "-inf" })
    } else if r.fract() == 0.0 && r.abs() < 1e16 {
        format!("{r:.1}")
    } else {
        r.to_string()
    }
}
