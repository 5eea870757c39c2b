//! Rendering side of the list screens.
//!
//! The controller only talks to [`ListView`]; the HTML and text views in
//! this module are two implementations of it built on [`row::TableRow`].

use crate::pagination::PageInfo;

#[cfg(feature = "console")]
pub mod html;
pub mod row;
#[cfg(feature = "console")]
pub mod text;

/// Why a list has no rows to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// The data loaded but nothing passes the current filter.
    NoMatches,
    /// The last load failed.
    Unavailable,
}

impl EmptyState {
    pub fn message(self, noun: &str) -> String {
        match self {
            EmptyState::NoMatches => format!("No {noun} found"),
            EmptyState::Unavailable => "No database connection".to_string(),
        }
    }
}

/// Hooks the list controller renders through.
///
/// A full redraw is `clear`, then either `render_empty` or one `render_row`
/// per record of the page, then `render_pagination`.
pub trait ListView<T> {
    fn clear(&mut self) {}

    fn render_row(&mut self, record: &T);

    /// Called after the rows of every redraw; views draw no bar when
    /// `page.total_pages <= 1`.
    fn render_pagination(&mut self, page: &PageInfo);

    fn render_error(&mut self, message: &str);

    /// Nothing to list: rows and pagination controls must both disappear.
    fn render_empty(&mut self, state: EmptyState);

    fn render_notice(&mut self, _message: &str) {}
}
