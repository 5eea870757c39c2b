//! DTO modules that bridge the console API with screens and views.

pub mod api;
pub mod details;
pub mod stats;
