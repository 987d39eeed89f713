pub mod format;
pub mod page_context;
pub mod validation;
