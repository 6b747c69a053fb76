//! Data model and feed decoding for a Google Voice client.
//!
//! The session (login, cookies, HTTP) lives outside this crate. It hands
//! raw envelopes to a [`FeedDecoder`] and implements the narrow capability
//! traits in [`session`] that phones and messages call back into.

pub mod attr_map;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod session;
pub mod validate;

pub use attr_map::AttrMap;
pub use error::{Error, Result, ScanError};
pub use feed::FeedDecoder;
pub use model::{Folder, Message, Phone, PhoneType};
pub use session::{Download, DryRun, ForwardingControl, MessageAction, MessageActions, Voice};
pub use validate::{load_and_validate, validate_response};
