use std::rc::Rc;

use log::LevelFilter;

mod components;
mod hooks;
mod services;

use components::calendar::{Calendar, CalendarProps};
use services::logging::Logger;
use services::page_data;

fn main() {
    console_error_panic_hook::set_once();
    Logger::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let config = page_data::load_config();
    let entries = Rc::new(page_data::load_entries(&config));
    let slots = Rc::new(page_data::load_slots(&config));

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&config.mount_element_id));

    let Some(root) = root else {
        log::error!("calendar mount point #{} not found", config.mount_element_id);
        return;
    };

    log::info!(
        "mounting calendar ({}, {} entries, {} slots)",
        config.locale,
        entries.len(),
        slots.len()
    );
    yew::Renderer::<Calendar>::with_root_and_props(root, CalendarProps { config, entries, slots })
        .render();
}
