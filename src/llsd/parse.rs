//! LLSD XML parser built on the `quick-xml` pull reader

use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};

use super::{LlsdError, Map, Value};

type XmlReader<'a> = Reader<&'a [u8]>;

/// Structural position in the document, with insignificant events skipped
enum Node<'a> {
    Open(BytesStart<'a>),
    Leaf(BytesStart<'a>),
    Close,
}

/// Parse an LLSD XML document into its root value.
///
/// An empty `<llsd/>` or `<llsd></llsd>` yields [`Value::Undef`].
pub fn parse_xml(input: &str) -> Result<Value, LlsdError> {
    let mut reader = Reader::from_str(input);

    let value = match next_node(&mut reader)? {
        Node::Open(start) => {
            expect_llsd(&start)?;
            match next_node(&mut reader)? {
                Node::Close => Value::Undef,
                Node::Open(inner) => {
                    let value = parse_value(&mut reader, &inner, false)?;
                    expect_close(&mut reader, "llsd")?;
                    value
                }
                Node::Leaf(inner) => {
                    let value = parse_value(&mut reader, &inner, true)?;
                    expect_close(&mut reader, "llsd")?;
                    value
                }
            }
        }
        Node::Leaf(start) => {
            expect_llsd(&start)?;
            Value::Undef
        }
        Node::Close => return Err(LlsdError::UnexpectedEof),
    };

    expect_eof(&mut reader)?;
    Ok(value)
}

fn parse_value(
    reader: &mut XmlReader<'_>,
    start: &BytesStart<'_>,
    empty: bool,
) -> Result<Value, LlsdError> {
    let name = element_name(start);
    match name.as_str() {
        "map" if empty => Ok(Value::Map(Map::new())),
        "map" => parse_map(reader),
        "array" if empty => Ok(Value::Array(Vec::new())),
        "array" => parse_array(reader),
        "undef" => {
            if !empty {
                read_text(reader, "undef")?;
            }
            Ok(Value::Undef)
        }
        "boolean" => {
            let text = element_text(reader, "boolean", empty)?;
            match text.trim() {
                "" | "0" | "false" => Ok(Value::Boolean(false)),
                "1" | "true" => Ok(Value::Boolean(true)),
                _ => Err(invalid_scalar("boolean", &text)),
            }
        }
        "integer" => {
            let text = element_text(reader, "integer", empty)?;
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(Value::Integer(0));
            }
            trimmed
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| invalid_scalar("integer", &text))
        }
        "real" => {
            let text = element_text(reader, "real", empty)?;
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(Value::Real(0.0));
            }
            trimmed
                .parse::<f64>()
                .map(Value::Real)
                .map_err(|_| invalid_scalar("real", &text))
        }
        "string" => Ok(Value::String(element_text(reader, "string", empty)?)),
        "uuid" => Ok(Value::Uuid(trimmed_text(reader, "uuid", empty)?)),
        "date" => Ok(Value::Date(trimmed_text(reader, "date", empty)?)),
        "uri" => Ok(Value::Uri(element_text(reader, "uri", empty)?)),
        "binary" => Ok(Value::Binary {
            encoding: attribute(start, "encoding")?,
            data: trimmed_text(reader, "binary", empty)?,
        }),
        _ => Err(LlsdError::UnknownElement { name }),
    }
}

fn parse_map(reader: &mut XmlReader<'_>) -> Result<Value, LlsdError> {
    let mut map = Map::new();
    loop {
        let key = match next_node(reader)? {
            Node::Close => return Ok(Value::Map(map)),
            Node::Open(start) if element_name(&start) == "key" => read_text(reader, "key")?,
            Node::Leaf(start) if element_name(&start) == "key" => String::new(),
            Node::Open(start) | Node::Leaf(start) => {
                return Err(LlsdError::UnexpectedElement {
                    name: element_name(&start),
                    parent: "map".to_string(),
                });
            }
        };

        let value = match next_node(reader)? {
            Node::Open(start) if element_name(&start) != "key" => {
                parse_value(reader, &start, false)?
            }
            Node::Leaf(start) if element_name(&start) != "key" => {
                parse_value(reader, &start, true)?
            }
            _ => return Err(LlsdError::MissingValue { key }),
        };

        map.insert(key, value);
    }
}

fn parse_array(reader: &mut XmlReader<'_>) -> Result<Value, LlsdError> {
    let mut items = Vec::new();
    loop {
        match next_node(reader)? {
            Node::Close => return Ok(Value::Array(items)),
            Node::Open(start) => items.push(parse_value(reader, &start, false)?),
            Node::Leaf(start) => items.push(parse_value(reader, &start, true)?),
        }
    }
}

/// Next structural event; whitespace, comments, declarations and
/// processing instructions are skipped.
fn next_node<'a>(reader: &mut XmlReader<'a>) -> Result<Node<'a>, LlsdError> {
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(start) => return Ok(Node::Open(start)),
            Event::Empty(start) => return Ok(Node::Leaf(start)),
            Event::End(_) => return Ok(Node::Close),
            Event::Text(text) => {
                if !is_blank(&text) {
                    return Err(unexpected_text(&text));
                }
            }
            Event::CData(data) => {
                return Err(LlsdError::UnexpectedText {
                    text: String::from_utf8_lossy(&data).trim().to_string(),
                });
            }
            Event::Eof => return Err(LlsdError::UnexpectedEof),
            _ => {}
        }
    }
}

fn element_text(
    reader: &mut XmlReader<'_>,
    tag: &str,
    empty: bool,
) -> Result<String, LlsdError> {
    if empty {
        Ok(String::new())
    } else {
        read_text(reader, tag)
    }
}

fn trimmed_text(
    reader: &mut XmlReader<'_>,
    tag: &str,
    empty: bool,
) -> Result<String, LlsdError> {
    element_text(reader, tag, empty).map(|text| text.trim().to_string())
}

/// Collect character data up to the closing tag of `tag`
fn read_text(reader: &mut XmlReader<'_>, tag: &str) -> Result<String, LlsdError> {
    let mut out = String::new();
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Text(text) => out.push_str(&text.unescape().map_err(xml_error)?),
            Event::CData(data) => out.push_str(&String::from_utf8_lossy(&data)),
            Event::End(_) => return Ok(out),
            Event::Start(start) | Event::Empty(start) => {
                return Err(LlsdError::UnexpectedElement {
                    name: element_name(&start),
                    parent: tag.to_string(),
                });
            }
            Event::Eof => return Err(LlsdError::UnexpectedEof),
            _ => {}
        }
    }
}

fn expect_llsd(start: &BytesStart<'_>) -> Result<(), LlsdError> {
    let name = element_name(start);
    if name == "llsd" {
        Ok(())
    } else {
        Err(LlsdError::NotLlsd { found: name })
    }
}

fn expect_close(reader: &mut XmlReader<'_>, parent: &str) -> Result<(), LlsdError> {
    match next_node(reader)? {
        Node::Close => Ok(()),
        Node::Open(start) | Node::Leaf(start) => Err(LlsdError::UnexpectedElement {
            name: element_name(&start),
            parent: parent.to_string(),
        }),
    }
}

fn expect_eof(reader: &mut XmlReader<'_>) -> Result<(), LlsdError> {
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Eof => return Ok(()),
            Event::Text(text) if is_blank(&text) => {}
            Event::Comment(_) | Event::PI(_) => {}
            _ => return Err(LlsdError::TrailingContent),
        }
    }
}

fn attribute(
    start: &BytesStart<'_>,
    name: &str,
) -> Result<Option<String>, LlsdError> {
    match start.try_get_attribute(name).map_err(xml_error)? {
        Some(attr) => Ok(Some(attr.unescape_value().map_err(xml_error)?.into_owned())),
        None => Ok(None),
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn is_blank(text: &BytesText<'_>) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

fn unexpected_text(text: &BytesText<'_>) -> LlsdError {
    LlsdError::UnexpectedText {
        text: String::from_utf8_lossy(text).trim().to_string(),
    }
}

fn invalid_scalar(kind: &'static str, text: &str) -> LlsdError {
    LlsdError::InvalidScalar {
        kind,
        text: text.trim().to_string(),
    }
}

fn xml_error(err: impl std::fmt::Display) -> LlsdError {
    LlsdError::Xml {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> String {
        format!("<?xml version=\"1.0\" ?>\n<llsd>\n{body}\n</llsd>\n")
    }

    #[test]
    fn test_parse_settings_map() {
        let input = doc(
            "<map>
  <key>AFKTimeout</key>
  <map>
    <key>Comment</key>
    <string>Time before automatically setting AFK</string>
    <key>Persist</key>
    <integer>1</integer>
    <key>Type</key>
    <string>F32</string>
    <key>Value</key>
    <real>300.0</real>
  </map>
</map>",
        );
        let value = parse_xml(&input).unwrap();
        let root = value.as_map().unwrap();
        let entry = root.get("AFKTimeout").unwrap().as_map().unwrap();
        assert_eq!(
            entry.get("Comment"),
            Some(&Value::String("Time before automatically setting AFK".into()))
        );
        assert_eq!(entry.get("Persist"), Some(&Value::Integer(1)));
        assert_eq!(entry.get("Value"), Some(&Value::Real(300.0)));
    }

    #[test]
    fn test_parse_all_scalar_kinds() {
        let input = doc(
            "<array>
  <undef />
  <boolean>true</boolean>
  <boolean>0</boolean>
  <integer>-42</integer>
  <real>1.5</real>
  <string>hello</string>
  <uuid>67153d5b-3659-afb4-8510-adda2c034649</uuid>
  <date>2006-02-01T14:29:53Z</date>
  <uri>http://example.com/</uri>
  <binary encoding=\"base64\">aGVsbG8=</binary>
</array>",
        );
        let value = parse_xml(&input).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Undef,
                Value::Boolean(true),
                Value::Boolean(false),
                Value::Integer(-42),
                Value::Real(1.5),
                Value::String("hello".into()),
                Value::Uuid("67153d5b-3659-afb4-8510-adda2c034649".into()),
                Value::Date("2006-02-01T14:29:53Z".into()),
                Value::Uri("http://example.com/".into()),
                Value::Binary {
                    encoding: Some("base64".into()),
                    data: "aGVsbG8=".into(),
                },
            ])
        );
    }

    #[test]
    fn test_empty_elements_are_empty_values() {
        let input = doc(
            "<map>
  <key>a</key><string />
  <key>b</key><integer />
  <key>c</key><map />
  <key>d</key><array/>
  <key>e</key><real></real>
</map>",
        );
        let root = parse_xml(&input).unwrap().into_map().unwrap();
        assert_eq!(root["a"], Value::String(String::new()));
        assert_eq!(root["b"], Value::Integer(0));
        assert_eq!(root["c"], Value::Map(Map::new()));
        assert_eq!(root["d"], Value::Array(Vec::new()));
        assert_eq!(root["e"], Value::Real(0.0));
    }

    #[test]
    fn test_comments_and_entities() {
        let input = doc(
            "<map>
  <!-- generated header -->
  <key>Quote</key>
  <string>a &lt;b&gt; &amp; &quot;c&quot;</string>
  <key>Raw</key>
  <string><![CDATA[<not a tag>]]></string>
</map>",
        );
        let root = parse_xml(&input).unwrap().into_map().unwrap();
        assert_eq!(root["Quote"], Value::String("a <b> & \"c\"".into()));
        assert_eq!(root["Raw"], Value::String("<not a tag>".into()));
    }

    #[test]
    fn test_string_whitespace_is_preserved() {
        let input = doc("<string>  padded  </string>");
        assert_eq!(parse_xml(&input).unwrap(), Value::String("  padded  ".into()));
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let input =
            doc("<map><key>k</key><integer>1</integer><key>k</key><integer>2</integer></map>");
        let root = parse_xml(&input).unwrap().into_map().unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root["k"], Value::Integer(2));
    }

    #[test]
    fn test_empty_llsd_is_undef() {
        assert_eq!(parse_xml("<llsd/>").unwrap(), Value::Undef);
        assert_eq!(parse_xml("<llsd>\n</llsd>").unwrap(), Value::Undef);
    }

    #[test]
    fn test_wrong_root_element() {
        let err = parse_xml("<settings><map /></settings>").unwrap_err();
        assert_eq!(
            err,
            LlsdError::NotLlsd {
                found: "settings".into()
            }
        );
    }

    #[test]
    fn test_unknown_element() {
        let err = parse_xml(&doc("<map><key>a</key><float>1</float></map>")).unwrap_err();
        assert_eq!(err, LlsdError::UnknownElement { name: "float".into() });
    }

    #[test]
    fn test_key_without_value() {
        let err = parse_xml(&doc("<map><key>a</key></map>")).unwrap_err();
        assert_eq!(err, LlsdError::MissingValue { key: "a".into() });

        let err = parse_xml(&doc("<map><key>a</key><key>b</key><integer>1</integer></map>"))
            .unwrap_err();
        assert_eq!(err, LlsdError::MissingValue { key: "a".into() });
    }

    #[test]
    fn test_value_without_key() {
        let err = parse_xml(&doc("<map><integer>1</integer></map>")).unwrap_err();
        assert!(matches!(err, LlsdError::UnexpectedElement { ref parent, .. } if parent == "map"));
    }

    #[test]
    fn test_invalid_integer() {
        let err = parse_xml(&doc("<integer>twelve</integer>")).unwrap_err();
        assert_eq!(
            err,
            LlsdError::InvalidScalar {
                kind: "integer",
                text: "twelve".into()
            }
        );
    }

    #[test]
    fn test_integers_beyond_32_bits() {
        let input =
            doc("<array><integer>4294967295</integer><integer>-2147483649</integer></array>");
        assert_eq!(
            parse_xml(&input).unwrap(),
            Value::Array(vec![Value::Integer(4_294_967_295), Value::Integer(-2_147_483_649)])
        );
    }

    #[test]
    fn test_binary_encoding_attribute() {
        let input =
            doc("<array><binary encoding=\"base16\">68656C6C6F</binary><binary /></array>");
        assert_eq!(
            parse_xml(&input).unwrap(),
            Value::Array(vec![
                Value::Binary {
                    encoding: Some("base16".into()),
                    data: "68656C6C6F".into(),
                },
                Value::Binary {
                    encoding: None,
                    data: String::new(),
                },
            ])
        );
    }

    #[test]
    fn test_stray_text_between_elements() {
        let err = parse_xml(&doc("<map>oops<key>a</key><integer>1</integer></map>")).unwrap_err();
        assert_eq!(err, LlsdError::UnexpectedText { text: "oops".into() });
    }

    #[test]
    fn test_truncated_document() {
        let err = parse_xml("<llsd><map><key>a</key>").unwrap_err();
        assert_eq!(err, LlsdError::UnexpectedEof);
    }

    #[test]
    fn test_mismatched_end_tag() {
        let err = parse_xml(&doc("<map><key>a</key><integer>1</string></map>")).unwrap_err();
        assert!(matches!(err, LlsdError::Xml { .. }));
    }

    #[test]
    fn test_trailing_content() {
        let err = parse_xml("<llsd><undef /></llsd><llsd />").unwrap_err();
        assert_eq!(err, LlsdError::TrailingContent);
    }
}
