use chrono::{DateTime, Local};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Local>,
}

impl Message {
    fn new(text: impl Into<String>, is_user: bool, timestamp: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_user,
            timestamp,
        }
    }

    pub fn from_user(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self::new(text, true, timestamp)
    }

    pub fn from_assistant(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self::new(text, false, timestamp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReply {
    pub label: &'static str,
    pub icon: &'static str,
}

pub const QUICK_REPLIES: [QuickReply; 4] = [
    QuickReply { label: "Water Level Status", icon: "weather-showers-symbolic" },
    QuickReply { label: "Weather Forecast", icon: "x-office-calendar-symbolic" },
    QuickReply { label: "Crop Advisory", icon: "emblem-favorite-symbolic" },
    QuickReply { label: "Conservation Tips", icon: "dialog-information-symbolic" },
];

pub const GREETING: &str =
    "नमस्ते! I'm your HydroSpatial AI assistant. How can I help you with water management today?";
