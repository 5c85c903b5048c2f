#[path = "config.rs"]
pub mod config;

#[path = "error.rs"]
pub mod error;

#[path = "url_builder.rs"]
pub mod url_builder;
