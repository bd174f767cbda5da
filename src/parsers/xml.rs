use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::FormatError;
use crate::models::Record;

const ROOT_ELEMENT: &[u8] = b"Datas";
const RECORD_ELEMENT: &[u8] = b"Data";
const KEY_ELEMENT: &[u8] = b"Key";
const VALUE_ELEMENT: &[u8] = b"Value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Key,
    Value,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Key => "Key",
            Field::Value => "Value",
        }
    }
}

/// One open element on the reader stack.
#[derive(Debug)]
enum Frame {
    Root,
    Record(Record),
    /// `Key`/`Value` with the text collected so far
    Field(Field, String),
    /// Element the record shape does not know about; its subtree is skipped
    Ignored,
}

/// Parse a `<Datas><Data><Key/><Value/></Data>...</Datas>` document.
///
/// Element names are case-sensitive. A missing `Key`/`Value` element gives an
/// absent field; a present one whose text is empty or whitespace only gives `""`.
/// Unknown elements inside `Datas` or `Data` are skipped along with their
/// children, and attribute values, comments, processing instructions and the
/// prolog are ignored. An element that declares a default namespace is not part
/// of the record vocabulary and is skipped the same way. If a field element
/// appears twice in one `Data` the last one wins.
///
/// # Errors
///
/// Returns [`FormatError::Xml`] if the markup or an attribute is malformed, the
/// root element is not `Datas` or declares a namespace, there is text or a second
/// element outside the root, or a `Key`/`Value` element contains child elements.
pub fn parse_xml(content: &str) -> Result<Vec<Record>, FormatError> {
    let content = content.trim_start_matches('\u{feff}');
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    RecordReader::new(content).read()
}

struct RecordReader<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<Frame>,
    records: Vec<Record>,
    seen_root: bool,
}

impl<'a> RecordReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            stack: Vec::new(),
            records: Vec::new(),
            seen_root: false,
        }
    }

    fn read(mut self) -> Result<Vec<Record>, FormatError> {
        loop {
            let event = self.reader.read_event().map_err(|e| {
                FormatError::xml(self.reader.error_position(), e.to_string())
            })?;

            match event {
                Event::Start(ref e) => self.open(e)?,
                Event::Empty(ref e) => {
                    self.open(e)?;
                    self.close()?;
                }
                Event::End(_) => self.close()?,
                Event::Text(ref e) => {
                    let text = e.unescape().map_err(|err| self.error(err.to_string()))?;
                    self.text(&text)?;
                }
                Event::CData(ref e) => {
                    let text = std::str::from_utf8(e)
                        .map_err(|err| self.error(format!("invalid UTF-8 in CDATA: {err}")))?;
                    self.text(text)?;
                }
                Event::Eof => break,
                // Prolog, comments, processing instructions and DOCTYPE carry no records
                _ => {}
            }
        }

        if let Some(frame) = self.stack.last() {
            let message = format!("unexpected end of document inside {}", describe(frame));
            return Err(self.error(message));
        }
        if !self.seen_root {
            return Err(self.error("missing root element <Datas>"));
        }

        Ok(self.records)
    }

    fn open(&mut self, element: &BytesStart<'_>) -> Result<(), FormatError> {
        let name = element.name();
        let name = name.as_ref();
        let namespaced = self.declares_namespace(element)?;

        let frame = match self.stack.last() {
            None => {
                if self.seen_root {
                    return Err(self.error(format!(
                        "unexpected element <{}> after the root element",
                        String::from_utf8_lossy(name)
                    )));
                }
                if name != ROOT_ELEMENT {
                    return Err(self.error(format!(
                        "root element must be <Datas>, found <{}>",
                        String::from_utf8_lossy(name)
                    )));
                }
                if namespaced {
                    return Err(self.error("root element <Datas> must not declare a namespace"));
                }
                self.seen_root = true;
                Frame::Root
            }
            Some(Frame::Root) if name == RECORD_ELEMENT && !namespaced => {
                Frame::Record(Record::default())
            }
            Some(Frame::Record(_)) if name == KEY_ELEMENT && !namespaced => {
                Frame::Field(Field::Key, String::new())
            }
            Some(Frame::Record(_)) if name == VALUE_ELEMENT && !namespaced => {
                Frame::Field(Field::Value, String::new())
            }
            Some(Frame::Field(field, _)) => {
                return Err(self.error(format!(
                    "unexpected element <{}> inside <{}>",
                    String::from_utf8_lossy(name),
                    field.name()
                )));
            }
            Some(_) => Frame::Ignored,
        };

        self.stack.push(frame);
        Ok(())
    }

    /// Tokenize the attributes of `element`, failing on malformed ones. Values are
    /// discarded; the only one that matters is a non-empty default namespace,
    /// which moves the element out of the record vocabulary.
    fn declares_namespace(&self, element: &BytesStart<'_>) -> Result<bool, FormatError> {
        let mut namespaced = false;
        for attribute in element.attributes() {
            let attribute =
                attribute.map_err(|e| self.error(format!("malformed attribute: {}", e)))?;
            if attribute.key.as_ref() == b"xmlns" && !attribute.value.is_empty() {
                namespaced = true;
            }
        }
        Ok(namespaced)
    }

    fn close(&mut self) -> Result<(), FormatError> {
        match self.stack.pop() {
            Some(Frame::Record(record)) => self.records.push(record),
            Some(Frame::Field(field, text)) => {
                let text = if text.trim().is_empty() { String::new() } else { text };
                if let Some(Frame::Record(record)) = self.stack.last_mut() {
                    match field {
                        Field::Key => record.key = Some(text),
                        Field::Value => record.value = Some(text),
                    }
                }
            }
            Some(Frame::Root | Frame::Ignored) => {}
            None => return Err(self.error("closing tag without a matching opening tag")),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), FormatError> {
        match self.stack.last_mut() {
            Some(Frame::Field(_, collected)) => collected.push_str(text),
            None if !text.trim().is_empty() => {
                return Err(self.error("text content outside of the root element"));
            }
            _ => {}
        }
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> FormatError {
        FormatError::xml(self.reader.buffer_position(), message)
    }
}

fn describe(frame: &Frame) -> &'static str {
    match frame {
        Frame::Root => "<Datas>",
        Frame::Record(_) => "<Data>",
        Frame::Field(Field::Key, _) => "<Key>",
        Frame::Field(Field::Value, _) => "<Value>",
        Frame::Ignored => "an unclosed element",
    }
}
