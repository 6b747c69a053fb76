//! Typed views over raw feed data: phones, messages and folders.

pub mod folder;
pub mod message;
pub mod phone;

pub use folder::Folder;
pub use message::Message;
pub use phone::{Phone, PhoneType};
