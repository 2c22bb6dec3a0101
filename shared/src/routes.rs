//! Registration routes handed off to the server.

use crate::dates::format_route_date;
use crate::locale::Locale;
use crate::models::{ActionKind, RegistrationAction};

impl ActionKind {
    pub fn route(&self) -> &'static str {
        match self {
            ActionKind::Register => "register",
            ActionKind::Deregister => "deregister",
        }
    }
}

impl RegistrationAction {
    /// `/<register|deregister>/future/<date>/<name>/<pod>`, each segment escaped
    pub fn url(&self) -> String {
        let date = format_route_date(self.date);
        format!(
            "/{}/future/{}/{}/{}",
            self.kind.route(),
            urlencoding::encode(&date),
            urlencoding::encode(&self.schedule_name),
            urlencoding::encode(&self.pod),
        )
    }

    pub fn aria_label(&self, locale: Locale) -> String {
        let verb = match self.kind {
            ActionKind::Register => locale.register_label(),
            ActionKind::Deregister => locale.deregister_label(),
        };
        format!("{} {}", verb, format_route_date(self.date))
    }
}
