//! Where list screens get their records from.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::source::errors::SourceResult;

pub mod endpoints;
pub mod errors;
#[cfg(feature = "console")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Asynchronous supplier of the full record set for one screen.
///
/// Every call returns the complete list; there is no partial or paged fetch.
#[async_trait]
pub trait RecordSource<T>: Send + Sync {
    async fn fetch_records(&self) -> SourceResult<Vec<T>>;
}

/// Source backed by an in-memory list, used for fixtures and offline screens.
#[derive(Debug)]
pub struct StaticSource<T> {
    records: Mutex<Vec<T>>,
}

impl<T> Default for StaticSource<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> StaticSource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl<T> RecordSource<T> for StaticSource<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch_records(&self) -> SourceResult<Vec<T>> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
