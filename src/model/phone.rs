//! One forwarding line registered on the account.

use serde_json::Value;
use std::fmt;

use crate::attr_map::AttrMap;
use crate::error::Result;
use crate::session::ForwardingControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneType {
    Home = 1,
    Mobile = 2,
    Work = 3,
    Gizmo = 4,
}

impl TryFrom<i64> for PhoneType {
    type Error = i64;

    fn try_from(code: i64) -> std::result::Result<Self, i64> {
        match code {
            1 => Ok(PhoneType::Home),
            2 => Ok(PhoneType::Mobile),
            3 => Ok(PhoneType::Work),
            4 => Ok(PhoneType::Gizmo),
            other => Err(other),
        }
    }
}

/// Snapshot of a phone as listed by the session.
///
/// [`enable`](Phone::enable) and [`disable`](Phone::disable) send a command
/// through the session; the snapshot itself never changes.
pub struct Phone<'v> {
    voice: &'v dyn ForwardingControl,
    data: AttrMap,
}

impl<'v> Phone<'v> {
    pub fn new(voice: &'v dyn ForwardingControl, data: AttrMap) -> Self {
        Self { voice, data }
    }

    /// Raw wire fields.
    pub fn data(&self) -> &AttrMap {
        &self.data
    }

    /// Attribute-style read of any raw field.
    pub fn attr(&self, key: &str) -> &Value {
        self.data.attr(key)
    }

    /// Opaque identifier, numeric ids rendered as text.
    pub fn id(&self) -> String {
        match self.data.attr("id") {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.data.str_attr("phoneNumber")
    }

    pub fn formatted_number(&self) -> Option<&str> {
        self.data.str_attr("formattedNumber")
    }

    pub fn name(&self) -> Option<&str> {
        self.data.str_attr("name")
    }

    pub fn verified(&self) -> bool {
        self.data.flag("verified")
    }

    pub fn telephony_verified(&self) -> bool {
        self.data.flag("telephonyVerified")
    }

    pub fn sms_enabled(&self) -> bool {
        self.data.flag("smsEnabled")
    }

    pub fn schedule_set(&self) -> bool {
        self.data.flag("scheduleSet")
    }

    pub fn active(&self) -> bool {
        self.data.flag("active")
    }

    pub fn enabled_for_others(&self) -> bool {
        self.data.flag("enabledForOthers")
    }

    pub fn weekday_all_day(&self) -> bool {
        self.data.flag("weekdayAllDay")
    }

    pub fn weekend_all_day(&self) -> bool {
        self.data.flag("weekendAllDay")
    }

    pub fn policy_bitmask(&self) -> Option<i64> {
        self.data.int_attr("policyBitmask")
    }

    pub fn weekday_times(&self) -> &[Value] {
        self.data.attr("weekdayTimes").as_array().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn weekend_times(&self) -> &[Value] {
        self.data.attr("weekendTimes").as_array().map(Vec::as_slice).unwrap_or_default()
    }

    /// `None` when the code is missing or not one of the known types.
    pub fn phone_type(&self) -> Option<PhoneType> {
        self.data.int_attr("type").and_then(|code| PhoneType::try_from(code).ok())
    }

    /// Make this phone a default forwarding target.
    pub fn enable(&self) -> Result<()> {
        self.call_forwarding("1")
    }

    /// Stop forwarding to this phone.
    pub fn disable(&self) -> Result<()> {
        self.call_forwarding("0")
    }

    fn call_forwarding(&self, enabled: &str) -> Result<()> {
        self.voice.default_forward(enabled, &self.id())
    }
}

impl fmt::Display for Phone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phone_number().unwrap_or_default())
    }
}

impl fmt::Debug for Phone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Phone {}>", self.phone_number().unwrap_or_default())
    }
}
