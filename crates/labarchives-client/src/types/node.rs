/*
[INPUT]:  Raw XML response bytes from the LabArchives API
[OUTPUT]: Generic ordered tree (text / map / list) mirroring the XML elements
[POS]:    Data layer - response decoding shared by every endpoint
[UPDATE]: When changing how attributes, text or repeated elements are folded
*/

use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use thiserror::Error;

/// Key holding an element's attributes
pub const ATTRIBUTES_KEY: &str = "$";
/// Key holding an element's text when it also has attributes or children
pub const TEXT_KEY: &str = "_";

/// Failure to turn a response body into a [`Node`]
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("document has no root element")]
    NoRoot,

    #[error("document has more than one root element")]
    MultipleRoots,

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("unexpected text outside the root element")]
    StrayText,
}

/// Decoded XML value
///
/// Elements holding only text become [`Node::Text`]; elements with children or
/// attributes become [`Node::Map`]; repeated sibling elements collapse into a
/// [`Node::List`] stored under their shared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Map(Vec<(String, Node)>),
    List(Vec<Node>),
}

impl Node {
    /// Decode an XML document; the result is a map from the root name to its node.
    pub fn from_xml(xml: &str) -> Result<Self, DecodeError> {
        decode(xml.as_bytes())
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    /// Follow a chain of field names
    pub fn path(&self, keys: &[&str]) -> Option<&Node> {
        keys.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text content, whether stored as a scalar or under `"_"` next to attributes
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Map(_) => self.get(TEXT_KEY).and_then(Node::as_text),
            Node::List(_) => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.get(ATTRIBUTES_KEY)?.get(name)?.as_text()
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// One-or-many view: a list yields its elements, anything else yields itself.
    pub fn items(&self) -> &[Node] {
        match self {
            Node::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// The service encodes booleans as the literal text `"true"`.
    pub fn is_true(&self) -> bool {
        self.text() == Some("true")
    }

    /// `error/message` (or `error/error-message`) text of an error document
    pub fn error_message(&self) -> Option<&str> {
        let error = self.get("error")?;
        error
            .get("message")
            .or_else(|| error.get("error-message"))
            .and_then(Node::text)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Text(text) => serializer.serialize_str(text),
            Node::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

#[derive(Debug, Default)]
struct Frame {
    name: String,
    attributes: Vec<(String, Node)>,
    children: Vec<(String, Node)>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, DecodeError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, Node::Text(value)));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes,
            ..Self::default()
        })
    }

    fn push_child(&mut self, name: String, node: Node) {
        match self.children.iter_mut().find(|(key, _)| *key == name) {
            Some((_, Node::List(items))) => items.push(node),
            Some((_, existing)) => {
                let first = std::mem::replace(existing, Node::List(Vec::new()));
                *existing = Node::List(vec![first, node]);
            }
            None => self.children.push((name, node)),
        }
    }

    fn close(self) -> (String, Node) {
        let text = self.text.trim();
        if self.attributes.is_empty() && self.children.is_empty() {
            return (self.name, Node::Text(text.to_string()));
        }

        let mut entries = Vec::with_capacity(self.children.len() + 2);
        if !self.attributes.is_empty() {
            entries.push((ATTRIBUTES_KEY.to_string(), Node::Map(self.attributes)));
        }
        if !text.is_empty() {
            entries.push((TEXT_KEY.to_string(), Node::Text(text.to_string())));
        }
        entries.extend(self.children);
        (self.name, Node::Map(entries))
    }
}

/// Decode raw response bytes into a [`Node`] tree.
pub fn decode(bytes: &[u8]) -> Result<Node, DecodeError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Node)> = None;

    loop {
        let event = reader.read_event_into(&mut buf)?;
        match event {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(DecodeError::MultipleRoots);
                }
                stack.push(Frame::open(&start)?);
            }
            Event::Empty(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(DecodeError::MultipleRoots);
                }
                let (name, node) = Frame::open(&start)?.close();
                attach(&mut stack, &mut root, name, node);
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end tags
                if let Some(frame) = stack.pop() {
                    let (name, node) = frame.close();
                    attach(&mut stack, &mut root, name, node);
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None if !text.trim().is_empty() => return Err(DecodeError::StrayText),
                    None => {}
                }
            }
            Event::CData(cdata) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(frame) = stack.pop() {
        return Err(DecodeError::Unclosed(frame.name));
    }

    let (name, node) = root.ok_or(DecodeError::NoRoot)?;
    Ok(Node::Map(vec![(name, node)]))
}

fn attach(stack: &mut [Frame], root: &mut Option<(String, Node)>, name: String, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(name, node),
        None => *root = Some((name, node)),
    }
}
