//! SpreadsheetML fragment rendering for style descriptors

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io::Cursor;

/// Attribute list of a single element, in output order
pub(crate) type Attributes = Vec<(&'static str, String)>;

/// Writes one XML fragment into memory
pub(crate) struct FragmentWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl FragmentWriter {
    pub(crate) fn new() -> Self {
        Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        }
    }

    pub(crate) fn start(&mut self, name: &str, attributes: &Attributes) -> Result<()> {
        self.writer
            .write_event(Event::Start(element(name, attributes)))?;
        Ok(())
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub(crate) fn empty(&mut self, name: &str, attributes: &Attributes) -> Result<()> {
        self.writer
            .write_event(Event::Empty(element(name, attributes)))?;
        Ok(())
    }

    /// `<name val="..."/>`, the common shape for font children
    pub(crate) fn val(&mut self, name: &str, value: impl ToString) -> Result<()> {
        self.empty(name, &vec![("val", value.to_string())])
    }

    pub(crate) fn finish(self) -> Result<String> {
        let result = self.writer.into_inner().into_inner();
        Ok(String::from_utf8(result)?)
    }
}

fn element<'a>(name: &'a str, attributes: &'a Attributes) -> BytesStart<'a> {
    let mut element = BytesStart::new(name);
    for (key, value) in attributes {
        // Values are escaped by quick-xml
        element.push_attribute((*key, value.as_str()));
    }
    element
}

/// Turn an in-memory rendering into a dedup signature.
///
/// The sink is a `Vec<u8>` and every value comes from a `&str`, so neither the
/// write nor the UTF-8 conversion has a failure path.
pub(crate) fn signature_from(rendered: Result<String>) -> String {
    rendered.expect("in-memory XML rendering cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_nesting_and_escaping() -> Result<()> {
        let mut writer = FragmentWriter::new();
        writer.start("font", &Attributes::new())?;
        writer.empty("b", &Attributes::new())?;
        writer.val("name", "A & \"B\"")?;
        writer.end("font")?;

        assert_eq!(
            writer.finish()?,
            r#"<font><b/><name val="A &amp; &quot;B&quot;"/></font>"#
        );
        Ok(())
    }

    #[test]
    fn test_attributes_keep_order() -> Result<()> {
        let mut writer = FragmentWriter::new();
        writer.empty(
            "color",
            &vec![("theme", "4".to_string()), ("tint", "-0.25".to_string())],
        )?;

        assert_eq!(writer.finish()?, r#"<color theme="4" tint="-0.25"/>"#);
        Ok(())
    }
}
