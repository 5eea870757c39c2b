//! One admin list screen: records, stats cards and the details panel.

use serde::Serialize;

use crate::controller::ListController;
use crate::dto::details::{DetailField, RecordDetails};
use crate::dto::stats::{StatCard, StatCards};
use crate::source::RecordSource;
use crate::source::endpoints::Listing;
use crate::source::errors::SourceResult;
use crate::source::http::{ConsoleClient, HttpSource};
use crate::views::ListView;

/// Contents of the details panel for one record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DetailsPanel {
    pub title: &'static str,
    pub fields: Vec<DetailField>,
}

pub struct ListScreen<T: Listing, V, S = HttpSource<T>> {
    client: ConsoleClient,
    controller: ListController<T, S, V>,
    stats: Option<T::Stats>,
}

impl<T, V> ListScreen<T, V>
where
    T: Listing,
    V: ListView<T>,
{
    /// Screen listing `T` through `client`.
    pub fn open(client: &ConsoleClient, view: V, page_size: usize) -> Self {
        Self::with_source(client, client.source::<T>(), view, page_size)
    }
}

impl<T, V, S> ListScreen<T, V, S>
where
    T: Listing,
    V: ListView<T>,
    S: RecordSource<T>,
{
    /// Screen reading records from `source` and stats from `client`.
    pub fn with_source(client: &ConsoleClient, source: S, view: V, page_size: usize) -> Self {
        Self {
            client: client.clone(),
            controller: ListController::with_page_size(source, view, page_size),
            stats: None,
        }
    }

    /// Reloads records and stats together.
    ///
    /// Only the record load decides the result; stale stats are kept when the
    /// stats request fails.
    pub async fn refresh(&mut self) -> SourceResult<usize> {
        let (loaded, stats) = tokio::join!(
            self.controller.load(),
            self.client.fetch_stats::<T>()
        );

        match stats {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => log::error!("Failed to load {} stats: {err}", T::NOUN),
        }

        loaded
    }

    pub fn stats(&self) -> Option<&T::Stats> {
        self.stats.as_ref()
    }

    /// Cards for the stats row, empty until stats have loaded once.
    pub fn stat_cards(&self) -> Vec<StatCard> {
        self.stats
            .as_ref()
            .map(|stats| stats.cards())
            .unwrap_or_default()
    }

    pub fn controller(&self) -> &ListController<T, S, V> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ListController<T, S, V> {
        &mut self.controller
    }
}

impl<T, V, S> ListScreen<T, V, S>
where
    T: Listing + RecordDetails,
    V: ListView<T>,
    S: RecordSource<T>,
{
    /// Details of a loaded record, `None` when no record has that id.
    pub fn details(&self, id: &T::Id) -> Option<DetailsPanel> {
        self.controller.find(id).map(|record| DetailsPanel {
            title: record.title(),
            fields: record.details(),
        })
    }
}
