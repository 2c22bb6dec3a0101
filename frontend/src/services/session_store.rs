use gloo::storage::{SessionStorage, Storage};
use shared::MonthStore;

/// [`MonthStore`] backed by the browser's session storage.
///
/// Values are stored as raw strings so that months saved by older page
/// versions remain readable.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionMonthStore {
    key: String,
}

impl SessionMonthStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl MonthStore for SessionMonthStore {
    fn load(&self) -> Option<String> {
        match SessionStorage::raw().get_item(&self.key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("session storage read failed: {:?}", e);
                None
            }
        }
    }

    fn save(&self, value: &str) {
        if let Err(e) = SessionStorage::raw().set_item(&self.key, value) {
            log::warn!("session storage write failed: {:?}", e);
        }
    }

    fn clear(&self) {
        SessionStorage::delete(&self.key);
    }
}
