pub mod date_utils;
pub mod logging;
pub mod page_data;
pub mod session_store;
