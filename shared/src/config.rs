use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::Locale;

pub const DEFAULT_STORAGE_KEY: &str = "calendar-date";

/// Settings the hosting page may embed next to the calendar data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Language of the title and labels; never affects date math
    pub locale: Locale,
    /// Session storage key holding the displayed month
    pub storage_key: String,
    pub entries_element_id: String,
    pub slots_element_id: String,
    /// Element the calendar is mounted into
    pub mount_element_id: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            entries_element_id: "entries".to_string(),
            slots_element_id: "slots".to_string(),
            mount_element_id: "calendar".to_string(),
        }
    }
}

impl CalendarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
