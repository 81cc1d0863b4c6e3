use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser, types::Entries};

const INDENT_SIZE: usize = 4;

/// An Android `strings.xml` document: `<resources>` holding `<string name="...">` children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    pub strings: Vec<StringResource>,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut resources = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"string" => {
                    let sr = parse_string_resource(e, &mut xml_reader)?;
                    resources.push(sr);
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"string" => {
                    resources.push(StringResource {
                        name: parse_name(e)?,
                        value: String::new(),
                    });
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        Ok(Format { strings: resources })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for sr in &self.strings {
            check_xml_chars(&sr.name)?;
            check_xml_chars(&sr.value)?;
        }

        let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', INDENT_SIZE);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        if self.strings.is_empty() {
            xml_writer.write_event(Event::Empty(BytesStart::new("resources")))?;
        } else {
            xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;
            for sr in &self.strings {
                let mut elem = BytesStart::new("string");
                elem.push_attribute(("name", sr.name.as_str()));

                xml_writer.write_event(Event::Start(elem))?;
                xml_writer.write_event(Event::Text(BytesText::new(&sr.value)))?;
                xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
            }
            xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        }

        xml_writer.get_mut().write_all(b"\n")?;
        Ok(())
    }
}

impl From<&Entries> for Format {
    fn from(entries: &Entries) -> Self {
        Format {
            strings: entries
                .iter()
                .map(|(name, value)| StringResource {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

impl TryFrom<Format> for Entries {
    type Error = Error;

    /// Rebuilds the ordered mapping, refusing documents that repeat a name.
    fn try_from(format: Format) -> Result<Self, Self::Error> {
        let mut entries = Entries::new();
        for sr in format.strings {
            entries.insert_new(sr.name, sr.value).map_err(|name| {
                Error::InvalidResource(format!("string name '{}' appears more than once", name))
            })?;
        }
        Ok(entries)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringResource {
    pub name: String,
    pub value: String,
}

fn is_xml_char(c: char) -> bool {
    !matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}')
}

/// Rejects characters that XML 1.0 cannot carry, escaped or not.
fn check_xml_chars(text: &str) -> Result<(), Error> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(Error::InvalidResource(format!(
            "character U+{:04X} is not allowed in XML: {:?}",
            c as u32, text
        ))),
        None => Ok(()),
    }
}

fn parse_name(e: &BytesStart) -> Result<String, Error> {
    let mut name = None;
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"name" {
            name = Some(attr.unescape_value()?.to_string());
        }
    }
    name.ok_or_else(|| Error::InvalidResource("string tag missing 'name'".to_string()))
}

fn parse_string_resource<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<StringResource, Error> {
    let name = parse_name(e)?;

    let mut buf = Vec::new();
    // Read until text or end
    let value = loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => break e.unescape().map_err(Error::XmlParse)?.to_string(),
            Ok(Event::End(_)) => break String::new(),
            Ok(Event::Eof) => return Err(Error::InvalidResource("Unexpected EOF".to_string())),
            Ok(_) => (),
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    };
    Ok(StringResource { name, value })
}
