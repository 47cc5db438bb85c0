#[path = "config.rs"]
pub mod config;

#[path = "error.rs"]
pub mod error;

#[path = "launcher.rs"]
pub mod launcher;

#[path = "types.rs"]
pub mod types;

#[path = "uri_builder.rs"]
pub mod uri_builder;
