//! Feed renderer
//!
//! Serializes an `RssDocument` to XML text: an XML declaration, then the
//! `<rss>` tree indented with tabs.

use std::io::{Cursor, Write};

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::{Map, Value};

use crate::domain::entities::{scalar_text, RssDocument};
use crate::error::RenderError;

const ATTR_KEY: &str = "_attr";
const CDATA_KEY: &str = "_cdata";

/// Render a document to an XML string
pub fn render_document(doc: &RssDocument) -> Result<String, RenderError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b'\t', 1);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut rss = BytesStart::new("rss");
    for (name, value) in &doc.attributes {
        rss.push_attribute((name.as_str(), value.as_str()));
    }
    emit(&mut writer, Event::Start(rss))?;
    emit(&mut writer, Event::Start(BytesStart::new("channel")))?;

    for record in &doc.channel {
        write_element(&mut writer, record.name(), record.value())?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("channel")))?;
    emit(&mut writer, Event::End(BytesEnd::new("rss")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| RenderError::Xml(e.to_string()))
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
) -> Result<(), RenderError> {
    match value {
        Value::Null => emit(writer, Event::Empty(BytesStart::new(name))),
        Value::Array(entries) => write_sequence(writer, name, entries),
        Value::Object(map) => write_object(writer, name, map),
        scalar => {
            let text = scalar_text(scalar).unwrap_or_default();
            write_text(writer, BytesStart::new(name), name, &text)
        }
    }
}

/// Children of a sequence; `{_attr: {...}}` entries decorate the parent.
fn write_sequence<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    entries: &[Value],
) -> Result<(), RenderError> {
    let mut start = BytesStart::new(name);
    let mut children = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry.as_object().and_then(|map| map.iter().next()) {
            Some((key, attrs)) if key == ATTR_KEY => push_attributes(&mut start, attrs),
            _ => children.push(entry),
        }
    }

    if children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in children {
        match child {
            Value::Object(map) => {
                if let Some((child_name, child_value)) = map.iter().next() {
                    write_element(writer, child_name, child_value)?;
                }
            }
            Value::Array(_) => {
                return Err(RenderError::UpstreamData(format!(
                    "nested sequence inside `{}` has no tag name",
                    name
                )))
            }
            Value::Null => {}
            scalar => {
                let text = scalar_text(scalar).unwrap_or_default();
                emit(writer, Event::Text(BytesText::new(&text)))?;
            }
        }
    }
    emit(writer, Event::End(BytesEnd::new(name)))
}

/// `{_attr: {...}, _cdata: "..."}`
fn write_object<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    map: &Map<String, Value>,
) -> Result<(), RenderError> {
    let mut start = BytesStart::new(name);
    if let Some(attrs) = map.get(ATTR_KEY) {
        push_attributes(&mut start, attrs);
    }

    match map.get(CDATA_KEY).and_then(scalar_text) {
        Some(text) => {
            emit(writer, Event::Start(start))?;
            write_cdata(writer, &text)?;
            emit(writer, Event::End(BytesEnd::new(name)))
        }
        None => emit(writer, Event::Empty(start)),
    }
}

fn write_text<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    name: &str,
    text: &str,
) -> Result<(), RenderError> {
    if text.is_empty() {
        return emit(writer, Event::Empty(start));
    }
    emit(writer, Event::Start(start))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

/// `]]>` cannot appear inside a CDATA section, so it is split across two.
fn write_cdata<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<(), RenderError> {
    let segments: Vec<&str> = text.split("]]>").collect();
    let last = segments.len() - 1;

    for (index, segment) in segments.iter().enumerate() {
        let mut section = String::with_capacity(segment.len() + 3);
        if index > 0 {
            section.push('>');
        }
        section.push_str(segment);
        if index < last {
            section.push_str("]]");
        }
        emit(writer, Event::CData(BytesCData::new(section)))?;
    }
    Ok(())
}

fn push_attributes(start: &mut BytesStart<'_>, attrs: &Value) {
    let Some(attrs) = attrs.as_object() else {
        return;
    };
    for (key, value) in attrs {
        if value.is_null() {
            continue;
        }
        let text = scalar_text(value).unwrap_or_else(|| value.to_string());
        start.push_attribute((key.as_str(), text.as_str()));
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), RenderError> {
    writer
        .write_event(event)
        .map_err(|e| RenderError::Xml(e.to_string()))
}
