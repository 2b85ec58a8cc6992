//! Minimal element tree built from `quick-xml` events.
//!
//! Theme files are small, so the loader works on an in-memory tree instead of
//! a streaming reader. Parsing is tolerant: when the reader hits malformed
//! input the elements read so far are kept (open elements are closed and
//! attached to their parents) and the error is reported alongside the tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Character data directly inside this element, trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of the named child, if that child exists.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlElement::text)
    }

    fn from_start(start: &BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let attributes = start
            .attributes()
            .filter_map(Result::ok)
            .map(|attr| {
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = match attr.unescape_value() {
                    Ok(value) => value.into_owned(),
                    Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
                };
                (key, value)
            })
            .collect();

        Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        }
    }
}

/// Top-level elements of a parsed document.
#[derive(Debug, Clone, Default)]
pub struct XmlDocument {
    roots: Vec<XmlElement>,
}

impl XmlDocument {
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.roots.iter().find(|r| r.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Outcome of a tolerant parse: whatever tree could be built plus the first
/// error the reader ran into, if any.
#[derive(Debug, Clone, Default)]
pub struct ParsedXml {
    pub document: XmlDocument,
    pub error: Option<String>,
}

pub fn parse(input: &str) -> ParsedXml {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut roots = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut error = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(XmlElement::from_start(&start)),
            Ok(Event::Empty(start)) => {
                attach(&mut stack, &mut roots, XmlElement::from_start(&start));
            }
            Ok(Event::End(_)) => match stack.pop() {
                Some(element) => attach(&mut stack, &mut roots, element),
                None => {
                    error = Some(format!(
                        "unexpected closing tag at position {}",
                        reader.buffer_position()
                    ));
                    break;
                }
            },
            Ok(Event::Text(text)) => {
                if let Some(current) = stack.last_mut() {
                    match text.unescape() {
                        Ok(value) => current.text.push_str(&value),
                        Err(_) => current.text.push_str(&String::from_utf8_lossy(&text)),
                    }
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::Eof) => {
                if let Some(open) = stack.last() {
                    error = Some(format!("unexpected end of file inside <{}>", open.name));
                }
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error = Some(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                ));
                break;
            }
        }
    }

    // keep partially read elements
    while let Some(element) = stack.pop() {
        attach(&mut stack, &mut roots, element);
    }

    ParsedXml {
        document: XmlDocument { roots },
        error,
    }
}

fn attach(stack: &mut [XmlElement], roots: &mut Vec<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => roots.push(element),
    }
}
