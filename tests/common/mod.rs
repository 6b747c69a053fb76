//! Shared test fixtures and helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use gvoice::{AttrMap, Download, Error, ForwardingControl, Message, MessageAction, MessageActions};
use serde_json::Value;

/// A command a session received from an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Forward { enabled: String, phone_id: String },
    Post { action: MessageAction, message_id: String, flag: bool },
    Download { message_id: String, dir: Option<PathBuf> },
}

/// Session fake that records every command it is asked to run.
#[derive(Default)]
pub struct RecordingSession {
    pub calls: RefCell<Vec<Call>>,
    /// Message ids that have a recording to download.
    pub recordings: Vec<String>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recordings(ids: &[&str]) -> Self {
        Self {
            recordings: ids.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl ForwardingControl for RecordingSession {
    fn default_forward(&self, enabled: &str, phone_id: &str) -> gvoice::Result<()> {
        self.calls.borrow_mut().push(Call::Forward {
            enabled: enabled.to_string(),
            phone_id: phone_id.to_string(),
        });
        Ok(())
    }
}

impl MessageActions for RecordingSession {
    fn post_message(&self, action: MessageAction, message_id: &str, flag: bool) -> gvoice::Result<()> {
        self.calls.borrow_mut().push(Call::Post {
            action,
            message_id: message_id.to_string(),
            flag,
        });
        Ok(())
    }
}

impl Download for RecordingSession {
    fn download(&self, message: &Message<'_>, dir: Option<&Path>) -> gvoice::Result<PathBuf> {
        self.calls.borrow_mut().push(Call::Download {
            message_id: message.id().to_string(),
            dir: dir.map(Path::to_path_buf),
        });
        if !self.recordings.iter().any(|id| id == message.id()) {
            return Err(Error::Download(message.id().to_string()));
        }
        let dir = dir.map(Path::to_path_buf).unwrap_or_default();
        Ok(dir.join(format!("{}.mp3", message.id())))
    }
}

/// Wrap `json` in a response envelope the way the service does.
pub fn envelope(json: &str, html: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<response>\n  <json><![CDATA[{}]]></json>\n  <html><![CDATA[{}]]></html>\n</response>",
        json, html
    )
}

/// One raw message entry with sensible defaults.
pub fn message_json(id: &str, start_ms: &str, display: &str) -> Value {
    serde_json::json!({
        "id": id,
        "phoneNumber": "+15555550100",
        "displayNumber": "(555) 555-0100",
        "startTime": start_ms,
        "displayStartDateTime": display,
        "displayStartTime": "ignored",
        "relativeStartTime": "2 hours ago",
        "note": "",
        "isRead": true,
        "isSpam": false,
        "isTrash": false,
        "star": false,
        "labels": ["voicemail", "inbox"],
        "type": 2,
        "children": ""
    })
}

/// Folder payload holding `entries` and reporting `total`.
pub fn folder_json(total: i64, entries: &[Value]) -> Value {
    let mut messages = serde_json::Map::new();
    for entry in entries {
        let id = entry["id"].as_str().unwrap_or_default().to_string();
        messages.insert(id, entry.clone());
    }
    serde_json::json!({
        "totalSize": total,
        "unreadCounts": {"all": 1, "voicemail": 1, "sms": 0},
        "resultsPerPage": 10,
        "messages": messages
    })
}

pub fn attr_map(value: Value) -> AttrMap {
    serde_json::from_value(value).expect("fixture must be an object")
}
