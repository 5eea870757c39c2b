//! Admin console for the YatriSetu bus booking backend.
//!
//! The `data` feature carries the reusable list layer: records, filters,
//! pagination and the generic [`controller::ListController`]. The `console`
//! feature adds the HTTP source, views, screens and the command line client.

#[cfg(feature = "data")]
pub mod controller;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod filters;
#[cfg(feature = "data")]
pub mod format;
#[cfg(feature = "console")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "console")]
pub mod services;
#[cfg(feature = "data")]
pub mod source;
#[cfg(feature = "data")]
pub mod views;

/// Rows per page when the configuration does not say otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
