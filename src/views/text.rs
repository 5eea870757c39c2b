//! Plain-text rendering for the terminal.

use std::fmt::Write as _;

use crate::domain::Record;
use crate::pagination::{PageInfo, PaginationBar};
use crate::views::row::TableRow;
use crate::views::{EmptyState, ListView};

pub struct TextTableView {
    noun: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
    bar: Option<PaginationBar>,
    empty: Option<String>,
    messages: Vec<String>,
}

impl TextTableView {
    pub fn new<T: TableRow + Record>() -> Self {
        Self {
            noun: T::NOUN,
            headers: T::headers(),
            rows: Vec::new(),
            bar: None,
            empty: None,
            messages: Vec::new(),
        }
    }

    /// Errors and notices, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Aligned table followed by the pagination line, if any.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if let Some(empty) = &self.empty {
            let _ = writeln!(out, "{empty}");
            return out;
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        write_line(&mut out, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(&mut out, &rule, &widths);
        for row in &self.rows {
            write_line(&mut out, row, &widths);
        }

        if let Some(bar) = &self.bar {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", pagination_line(bar));
            let _ = writeln!(
                out,
                "Showing {} to {} of {} entries",
                bar.first_item, bar.last_item, bar.total_items
            );
        }

        out
    }
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// `« 1 … 3 4 [5] 6 7 … 12 »`; a disabled arrow is drawn as `(«)` or `(»)`.
pub fn pagination_line(bar: &PaginationBar) -> String {
    let mut parts = Vec::with_capacity(bar.pages.len() + 2);
    parts.push(arrow("«", bar.previous.is_some()));
    for page in &bar.pages {
        parts.push(match page {
            Some(page) if *page == bar.page => format!("[{page}]"),
            Some(page) => page.to_string(),
            None => "…".to_string(),
        });
    }
    parts.push(arrow("»", bar.next.is_some()));
    parts.join(" ")
}

fn arrow(symbol: &str, enabled: bool) -> String {
    if enabled {
        symbol.to_string()
    } else {
        format!("({symbol})")
    }
}

impl<T: TableRow> ListView<T> for TextTableView {
    fn clear(&mut self) {
        self.rows.clear();
        self.bar = None;
        self.empty = None;
    }

    fn render_row(&mut self, record: &T) {
        self.rows
            .push(record.cells().into_iter().map(|cell| cell.text).collect());
    }

    fn render_pagination(&mut self, page: &PageInfo) {
        self.bar = PaginationBar::new(page);
    }

    fn render_error(&mut self, message: &str) {
        self.messages.push(format!("error: {message}"));
    }

    fn render_empty(&mut self, state: EmptyState) {
        self.rows.clear();
        self.bar = None;
        self.empty = Some(state.message(self.noun));
    }

    fn render_notice(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
