//! One voicemail, SMS or call-log record inside a folder.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use super::folder::Folder;
use crate::attr_map::AttrMap;
use crate::error::{Error, Result};
use crate::session::MessageAction;

/// Wire format of `displayStartDateTime`, e.g. `11/14/23 12:00 AM`.
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%y %I:%M %p";

/// A message bound to the folder it was listed in.
///
/// The timestamps are derived once, at construction. The action methods
/// post commands through the folder's session and leave this value as is;
/// their effect shows up on the next feed fetch.
pub struct Message<'a> {
    folder: &'a Folder<'a>,
    id: String,
    data: AttrMap,
    start_time: DateTime<Utc>,
    display_start_date_time: NaiveDateTime,
}

impl<'a> Message<'a> {
    /// Build a message from its feed entry.
    ///
    /// Fails when `startTime` is not an integer count of milliseconds or
    /// `displayStartDateTime` does not match [`DISPLAY_DATE_FORMAT`].
    pub fn new(folder: &'a Folder<'a>, id: impl Into<String>, data: AttrMap) -> Result<Self> {
        let start_time = parse_start_time(data.attr("startTime"))?;
        let display_start_date_time = NaiveDateTime::parse_from_str(
            data.str_attr("displayStartDateTime").unwrap_or_default(),
            DISPLAY_DATE_FORMAT,
        )?;
        Ok(Self {
            folder,
            id: id.into(),
            data,
            start_time,
            display_start_date_time,
        })
    }

    pub fn folder(&self) -> &'a Folder<'a> {
        self.folder
    }

    /// Content hash identifying the message.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw wire fields, timestamps in their original form.
    pub fn data(&self) -> &AttrMap {
        &self.data
    }

    pub fn attr(&self, key: &str) -> &Value {
        self.data.attr(key)
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn display_start_date_time(&self) -> NaiveDateTime {
        self.display_start_date_time
    }

    pub fn display_start_time(&self) -> NaiveTime {
        self.display_start_date_time.time()
    }

    pub fn is_trash(&self) -> bool {
        self.data.flag("isTrash")
    }

    pub fn is_starred(&self) -> bool {
        self.data.flag("star")
    }

    pub fn is_spam(&self) -> bool {
        self.data.flag("isSpam")
    }

    pub fn is_read(&self) -> bool {
        self.data.flag("isRead")
    }

    pub fn labels(&self) -> BTreeSet<String> {
        self.data
            .attr("labels")
            .as_array()
            .map(|labels| {
                labels
                    .iter()
                    .filter_map(|l| l.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.data.str_attr("phoneNumber")
    }

    pub fn display_number(&self) -> Option<&str> {
        self.data.str_attr("displayNumber")
    }

    pub fn relative_start_time(&self) -> Option<&str> {
        self.data.str_attr("relativeStartTime")
    }

    /// Numeric record type (voicemail, sms, missed, ...).
    pub fn message_type(&self) -> Option<i64> {
        self.data.int_attr("type")
    }

    pub fn note(&self) -> Option<&str> {
        self.data.str_attr("note")
    }

    pub fn children(&self) -> &Value {
        self.data.attr("children")
    }

    /// Move to the trash, or back out of it with `trash = false`.
    pub fn delete(&self, trash: bool) -> Result<()> {
        self.post(MessageAction::Delete, trash)
    }

    /// Star, or unstar with `star = false`.
    pub fn star(&self, star: bool) -> Result<()> {
        self.post(MessageAction::Star, star)
    }

    /// Mark read, or unread with `read = false`.
    pub fn mark(&self, read: bool) -> Result<()> {
        self.post(MessageAction::Mark, read)
    }

    /// Save the recording into `dir` and return where it landed.
    pub fn download(&self, dir: Option<&Path>) -> Result<PathBuf> {
        self.folder.voice().download(self, dir)
    }

    fn post(&self, action: MessageAction, flag: bool) -> Result<()> {
        self.folder.voice().post_message(action, &self.id, flag)
    }
}

/// `startTime` is epoch milliseconds, sent as a string or a number.
fn parse_start_time(raw: &Value) -> Result<DateTime<Utc>> {
    let millis: i64 = match raw {
        Value::String(s) => s.parse()?,
        other => other.to_string().parse()?,
    };
    DateTime::from_timestamp(millis.div_euclid(1000), 0).ok_or(Error::OutOfRange(millis))
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Message #{} ({})>",
            self.id,
            self.phone_number().unwrap_or_default()
        )
    }
}
