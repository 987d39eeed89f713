pub mod api_utils;
pub mod clipboard;
pub mod page_context;
pub mod toast;
