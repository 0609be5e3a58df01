pub mod locator;
pub mod page_model;
