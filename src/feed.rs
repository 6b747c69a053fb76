//! Feed decoding: pull the `json` and `html` payloads out of an envelope.
//!
//! The service wraps each feed in loosely structured XML. The only parts
//! that matter are the character data inside elements literally named
//! `json` and `html`. Every occurrence is appended to its buffer in
//! document order. Opening any element named `json` or `html` starts
//! accumulation; closing *any* element stops it.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use tracing::{debug, trace};

use crate::attr_map::AttrMap;
use crate::error::{Error, Result, ScanError};
use crate::model::Folder;
use crate::session::Voice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Json,
    Html,
}

impl Target {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"json" => Some(Target::Json),
            b"html" => Some(Target::Html),
            _ => None,
        }
    }
}

/// Decodes one named feed into a [`Folder`].
///
/// The buffers are reset and refilled on every [`call`](Self::call), so one
/// decoder must not be driven from two places at once.
pub struct FeedDecoder<'v, F> {
    voice: &'v dyn Voice,
    name: String,
    fetch: F,
    json: String,
    html: String,
}

impl<'v, F, E> FeedDecoder<'v, F>
where
    F: FnMut() -> std::result::Result<String, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    /// `fetch` returns the raw envelope text, typically from an HTTP GET.
    pub fn new(voice: &'v dyn Voice, name: impl Into<String>, fetch: F) -> Self {
        Self {
            voice,
            name: name.into(),
            fetch,
            json: String::new(),
            html: String::new(),
        }
    }

    /// Fetch, scan and deserialize the feed.
    ///
    /// Retrieval and markup failures surface as [`Error::Parsing`]; a json
    /// buffer that is not a JSON object surfaces as [`Error::Json`].
    pub fn call(&mut self) -> Result<Folder<'v>> {
        self.json.clear();
        self.html.clear();
        let raw = (self.fetch)().map_err(|e| ScanError::Retrieve(e.into()))?;
        debug!(feed = %self.name, bytes = raw.len(), "scanning envelope");
        self.scan(&raw)?;
        trace!(json = %self.json, html_bytes = self.html.len(), "scanned envelope");
        self.folder()
    }
}

impl<'v, F> FeedDecoder<'v, F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// JSON text gathered by the last call.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// HTML text gathered by the last call. Not interpreted further.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Deserialize the current json buffer.
    pub fn data(&self) -> Result<AttrMap> {
        serde_json::from_str(&self.json).map_err(Error::Json)
    }

    /// Build a folder from the current json buffer without refetching.
    pub fn folder(&self) -> Result<Folder<'v>> {
        Ok(Folder::new(self.voice, self.name.clone(), self.data()?))
    }

    fn scan(&mut self, raw: &str) -> std::result::Result<(), ScanError> {
        let (json, html) = scan_envelope(raw)?;
        self.json = json;
        self.html = html;
        Ok(())
    }
}

/// Scan `raw` and return the concatenated `(json, html)` character data.
pub fn scan_envelope(raw: &str) -> std::result::Result<(String, String), ScanError> {
    let mut reader = Reader::from_str(raw);
    let mut json = String::new();
    let mut html = String::new();
    let mut target: Option<Target> = None;
    let mut open: Vec<String> = Vec::new();

    loop {
        let text: String = match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                if let Some(t) = Target::from_name(name.as_ref()) {
                    target = Some(t);
                }
                open.push(String::from_utf8_lossy(name.as_ref()).into_owned());
                continue;
            }
            // <json/> opens and closes in one event.
            Event::Empty(_) => {
                target = None;
                continue;
            }
            Event::End(_) => {
                open.pop();
                target = None;
                continue;
            }
            Event::Text(e) => decode(&reader, &e)?,
            Event::CData(e) => decode(&reader, &e)?,
            Event::GeneralRef(e) => match e.resolve_char_ref().map_err(|err| ScanError::Xml(err.into()))? {
                Some(ch) => ch.to_string(),
                None => {
                    let name = decode(&reader, &e)?;
                    resolve_predefined_entity(&name)
                        .map(str::to_string)
                        .ok_or(ScanError::UnknownEntity(name))?
                }
            },
            Event::Eof => break,
            _ => continue,
        };
        match target {
            Some(Target::Json) => json.push_str(&text),
            Some(Target::Html) => html.push_str(&text),
            None => {}
        }
    }

    if let Some(name) = open.pop() {
        return Err(ScanError::Unclosed(name));
    }
    Ok((json, html))
}

fn decode(reader: &Reader<&[u8]>, bytes: &[u8]) -> std::result::Result<String, ScanError> {
    reader
        .decoder()
        .decode(bytes)
        .map(|text| text.into_owned())
        .map_err(|err| ScanError::Xml(err.into()))
}
