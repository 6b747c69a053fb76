//! One feed view (voicemail, sms, missed, all, ...).

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::message::Message;
use crate::attr_map::AttrMap;
use crate::error::Result;
use crate::session::Voice;

pub struct Folder<'v> {
    voice: &'v dyn Voice,
    name: String,
    data: AttrMap,
}

impl<'v> Folder<'v> {
    pub fn new(voice: &'v dyn Voice, name: impl Into<String>, data: AttrMap) -> Self {
        Self {
            voice,
            name: name.into(),
            data,
        }
    }

    pub fn voice(&self) -> &'v dyn Voice {
        self.voice
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &AttrMap {
        &self.data
    }

    pub fn attr(&self, key: &str) -> &Value {
        self.data.attr(key)
    }

    /// Server-reported total, which may span several pages.
    pub fn total_size(&self) -> i64 {
        self.data.int_attr("totalSize").unwrap_or_default()
    }

    pub fn results_per_page(&self) -> Option<i64> {
        self.data.int_attr("resultsPerPage")
    }

    pub fn unread_counts(&self) -> BTreeMap<String, i64> {
        self.data
            .attr("unreadCounts")
            .as_object()
            .map(|counts| {
                counts
                    .iter()
                    .filter_map(|(label, n)| n.as_i64().map(|n| (label.clone(), n)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Raw entries keyed by message id, in feed order.
    pub fn raw_messages(&self) -> Option<&Map<String, Value>> {
        self.data.attr("messages").as_object()
    }

    /// Build a [`Message`] for every raw entry, in feed order.
    ///
    /// Each call builds fresh values. An entry with unparseable timestamps
    /// yields an error in its place.
    pub fn messages(&self) -> impl Iterator<Item = Result<Message<'_>>> + '_ {
        self.raw_messages()
            .into_iter()
            .flatten()
            .map(move |(id, entry)| {
                let data = match entry {
                    Value::Object(fields) => AttrMap::from(fields.clone()),
                    _ => AttrMap::new(),
                };
                Message::new(self, id.clone(), data)
            })
    }

    /// Reported length: `totalSize`, not the number of entries on this page.
    pub fn len(&self) -> usize {
        usize::try_from(self.total_size()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Folder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Folder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Folder {} ({})>", self.name, self.total_size())
    }
}
