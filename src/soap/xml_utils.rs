use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fmt::Display;
use std::io::Cursor;

use crate::core::PaketError;

/// Deepest element nesting accepted by [`XmlNode::parse`]. Carrier replies
/// stay well under a dozen levels.
pub const MAX_XML_DEPTH: usize = 256;

fn xml_io(e: std::io::Error) -> PaketError {
    PaketError::Xml(format!("XML write error: {e}"))
}

pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub fn new() -> Result<Self, PaketError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self { writer })
    }

    pub fn into_string(self) -> Result<String, PaketError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| PaketError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, PaketError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, PaketError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, PaketError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element(&mut self, name: &str, text: &str) -> Result<&mut Self, PaketError> {
        self.start_element(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_io)?;
        self.end_element(name)
    }

    /// Write `<name>value</name>` using the value's `Display` form.
    ///
    /// Code lists display as their wire code, booleans as `true`/`false`.
    pub fn value_element<T: Display>(&mut self, name: &str, value: T) -> Result<&mut Self, PaketError> {
        self.text_element(name, &value.to_string())
    }

    /// Like [`value_element`](Self::value_element), skipping unset fields.
    pub fn optional_element<T: Display>(
        &mut self,
        name: &str,
        value: Option<T>,
    ) -> Result<&mut Self, PaketError> {
        match value {
            Some(v) => self.value_element(name, v),
            None => Ok(self),
        }
    }
}

/// Element tree of a parsed reply, with namespace prefixes stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<XmlNode, PaketError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    if stack.len() >= MAX_XML_DEPTH {
                        return Err(PaketError::Xml("document nested too deeply".into()));
                    }
                    stack.push(XmlNode::named(local_name(e)?));
                }
                Ok(Event::Empty(ref e)) => {
                    let node = XmlNode::named(local_name(e)?);
                    attach(&mut stack, &mut root, node);
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| PaketError::Xml(format!("XML text error: {e}")))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    let raw = e.clone().into_inner();
                    let text = std::str::from_utf8(&raw)
                        .map_err(|e| PaketError::Xml(format!("XML UTF-8 error: {e}")))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(text);
                    }
                }
                Ok(Event::End(_)) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| PaketError::Xml("unbalanced end tag".into()))?;
                    attach(&mut stack, &mut root, node);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(PaketError::Xml(format!("XML parse error: {e}")));
                }
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(PaketError::Xml("unexpected end of document".into()));
        }
        root.ok_or_else(|| PaketError::Xml("empty document".into()))
    }

    fn named(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Every child element called `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the child element `name`, if present.
    pub fn text_of(&self, name: &str) -> Option<String> {
        self.child(name).map(|c| c.text.clone())
    }

    /// `xsd:boolean` value of the child element `name`; absent reads as false.
    pub fn bool_of(&self, name: &str) -> bool {
        matches!(
            self.child(name).map(|c| c.text.as_str()),
            Some("true") | Some("1")
        )
    }
}

fn local_name(e: &BytesStart<'_>) -> Result<String, PaketError> {
    let name = e.local_name();
    std::str::from_utf8(name.as_ref())
        .map(str::to_string)
        .map_err(|e| PaketError::Xml(format!("XML UTF-8 error: {e}")))
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => *root = Some(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_escapes_text() {
        let mut w = XmlWriter::new().unwrap();
        w.start_element("address").unwrap();
        w.text_element("name1", "Müller & Söhne <GmbH>").unwrap();
        w.optional_element("name2", None::<&str>).unwrap();
        w.optional_element("gln", Some(4_012_345_000_009u64)).unwrap();
        w.end_element("address").unwrap();
        let xml = w.into_string().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<name1>Müller &amp; Söhne &lt;GmbH&gt;</name1>"));
        assert!(!xml.contains("name2"));
        assert!(xml.contains("<gln>4012345000009</gln>"));
    }

    #[test]
    fn parse_strips_prefixes_and_keeps_order() {
        let xml = r#"<?xml version="1.0"?>
            <soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
              <soap:Body>
                <ns2:list xmlns:ns2="urn:x">
                  <item>a</item>
                  <other/>
                  <item>b &amp; c</item>
                  <data><![CDATA[<raw>]]></data>
                </ns2:list>
              </soap:Body>
            </soap:Envelope>"#;
        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.name, "Envelope");
        let list = root.child("Body").and_then(|b| b.child("list")).unwrap();
        let items: Vec<_> = list.children_named("item").map(|n| n.text.as_str()).collect();
        assert_eq!(items, vec!["a", "b & c"]);
        assert!(list.child("other").is_some());
        assert_eq!(list.text_of("data").as_deref(), Some("<raw>"));
        assert_eq!(list.text_of("missing"), None);
    }

    #[test]
    fn booleans() {
        let root = XmlNode::parse("<r><a>true</a><b>false</b><c>1</c></r>").unwrap();
        assert!(root.bool_of("a"));
        assert!(!root.bool_of("b"));
        assert!(root.bool_of("c"));
        assert!(!root.bool_of("d"));
    }

    #[test]
    fn malformed_documents_are_errors() {
        assert!(matches!(XmlNode::parse(""), Err(PaketError::Xml(_))));
        assert!(matches!(XmlNode::parse("<a><b></a>"), Err(PaketError::Xml(_))));
        assert!(matches!(XmlNode::parse("<a><b>"), Err(PaketError::Xml(_))));
    }

    fn nested(depth: usize) -> String {
        format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth))
    }

    #[test]
    fn depth_limit() {
        assert!(XmlNode::parse(&nested(MAX_XML_DEPTH)).is_ok());
        match XmlNode::parse(&nested(MAX_XML_DEPTH + 1)) {
            Err(PaketError::Xml(msg)) => assert!(msg.contains("nested too deeply")),
            other => panic!("expected XML error, got {other:?}"),
        }
    }

    #[test]
    fn very_deep_document_is_rejected_without_overflow() {
        let xml = format!("<r>{}<a/>{}</r>", "<a>".repeat(200_000), "</a>".repeat(200_000));
        assert!(matches!(XmlNode::parse(&xml), Err(PaketError::Xml(_))));
    }

    #[test]
    fn wide_document_parses() {
        let items = "<item>x</item>".repeat(50_000);
        let root = XmlNode::parse(&format!("<list>{items}</list>")).unwrap();
        assert_eq!(root.children_named("item").count(), 50_000);
    }
}
