//! Capabilities a session exposes to the entities it hands out.
//!
//! Phones and messages never see the whole session. They call back through
//! these narrow traits only.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::model::Message;

/// Toggle the default forwarding of one phone.
pub trait ForwardingControl {
    /// `enabled` is `"1"` or `"0"` on the wire.
    fn default_forward(&self, enabled: &str, phone_id: &str) -> Result<()>;
}

/// Flip a flag on one message: trash, star or read.
pub trait MessageActions {
    fn post_message(&self, action: MessageAction, message_id: &str, flag: bool) -> Result<()>;
}

/// Fetch the recording behind a message.
pub trait Download {
    /// Save the recording into `dir` (current directory when `None`) and
    /// return the saved file location.
    fn download(&self, message: &Message<'_>, dir: Option<&Path>) -> Result<PathBuf>;
}

/// Everything a [`Folder`](crate::model::Folder) needs from its session.
pub trait Voice: ForwardingControl + MessageActions + Download {}

impl<T: ForwardingControl + MessageActions + Download + ?Sized> Voice for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Delete,
    Star,
    Mark,
}

impl MessageAction {
    /// Path segment of the action endpoint.
    pub fn name(self) -> &'static str {
        match self {
            MessageAction::Delete => "delete",
            MessageAction::Star => "star",
            MessageAction::Mark => "mark",
        }
    }

    /// Form key carrying the 0/1 flag.
    pub fn flag_name(self) -> &'static str {
        match self {
            MessageAction::Delete => "trash",
            MessageAction::Star => "star",
            MessageAction::Mark => "read",
        }
    }

    /// Form parameters for posting this action.
    pub fn params(self, message_id: &str, flag: bool) -> [(&'static str, String); 2] {
        [
            ("messages", message_id.to_string()),
            (self.flag_name(), if flag { "1" } else { "0" }.to_string()),
        ]
    }
}

impl fmt::Display for MessageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Offline session: logs every command and performs none of them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRun;

impl ForwardingControl for DryRun {
    fn default_forward(&self, enabled: &str, phone_id: &str) -> Result<()> {
        info!(enabled, phone_id, "dry run: default_forward");
        Ok(())
    }
}

impl MessageActions for DryRun {
    fn post_message(&self, action: MessageAction, message_id: &str, flag: bool) -> Result<()> {
        info!(%action, message_id, flag, "dry run: message action");
        Ok(())
    }
}

impl Download for DryRun {
    fn download(&self, message: &Message<'_>, _dir: Option<&Path>) -> Result<PathBuf> {
        Err(Error::Download(format!("{} (dry run)", message.id())))
    }
}
