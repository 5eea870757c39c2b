//! Screen workflows built on the list controller and the HTTP client.

use thiserror::Error;

use crate::filters::FilterError;
use crate::source::errors::SourceError;
use crate::views::html::ViewError;

pub mod listing;
pub mod screen;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("{0} not found")]
    NotFound(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
