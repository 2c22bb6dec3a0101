//! Data the hosting page embeds as JSON script elements.

use anyhow::{anyhow, Context, Result};
use shared::{parse_entries, parse_slots, CalendarConfig, Entry, Slot};

pub const CONFIG_ELEMENT_ID: &str = "calendar-config";

fn element_text(id: &str) -> Result<Option<String>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document available"))?;

    Ok(document
        .get_element_by_id(id)
        .and_then(|element| element.text_content()))
}

/// Embedded calendar settings, or the defaults when absent or invalid
pub fn load_config() -> CalendarConfig {
    let result = element_text(CONFIG_ELEMENT_ID).and_then(|text| match text {
        Some(json) => CalendarConfig::from_json(&json)
            .map(Some)
            .with_context(|| format!("#{} holds invalid settings", CONFIG_ELEMENT_ID)),
        None => Ok(None),
    });

    match result {
        Ok(Some(config)) => config,
        Ok(None) => CalendarConfig::default(),
        Err(e) => {
            log::warn!("using default calendar settings: {:#}", e);
            CalendarConfig::default()
        }
    }
}

pub fn load_entries(config: &CalendarConfig) -> Vec<Entry> {
    load_collection(&config.entries_element_id, parse_entries)
}

pub fn load_slots(config: &CalendarConfig) -> Vec<Slot> {
    load_collection(&config.slots_element_id, parse_slots)
}

/// A missing or malformed blob renders as an empty collection
fn load_collection<T>(id: &str, parse: fn(&str) -> shared::Result<Vec<T>>) -> Vec<T> {
    let result = element_text(id).and_then(|text| {
        let json = text.ok_or_else(|| anyhow!("element #{} not found", id))?;
        parse(&json).with_context(|| format!("element #{} holds malformed JSON", id))
    });

    match result {
        Ok(items) => {
            log::debug!("loaded {} records from #{}", items.len(), id);
            items
        }
        Err(e) => {
            log::warn!("{:#}", e);
            Vec::new()
        }
    }
}
