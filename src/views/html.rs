//! HTML rendering of a list screen with `tera`.

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::Record;
use crate::pagination::{PageInfo, PaginationBar};
use crate::views::row::{Cell, TableRow};
use crate::views::{EmptyState, ListView};

const TABLE_TEMPLATE_NAME: &str = "list/table.html";
const ALERTS_TEMPLATE_NAME: &str = "list/alerts.html";

const TABLE_TEMPLATE: &str = r#"<table class="table table-hover">
  <thead>
    <tr>{% for header in headers %}<th>{{ header }}</th>{% endfor %}</tr>
  </thead>
  <tbody>
{%- if empty %}
    <tr><td colspan="{{ headers | length }}" class="text-center text-muted">{{ empty }}</td></tr>
{%- else %}
{%- for row in rows %}
    <tr>{% for cell in row %}<td>{% if cell.badge %}<span class="badge badge-{{ cell.badge }}">{{ cell.text }}</span>{% else %}{{ cell.text }}{% endif %}</td>{% endfor %}</tr>
{%- endfor %}
{%- endif %}
  </tbody>
</table>
{%- if bar %}
<nav aria-label="Pagination">
  <ul class="pagination">
    <li class="page-item{% if not bar.previous %} disabled{% endif %}"><a class="page-link"{% if bar.previous %} data-page="{{ bar.previous }}"{% endif %}>Previous</a></li>
{%- for page in bar.pages %}
{%- if page %}
    <li class="page-item{% if page == bar.page %} active{% endif %}"><a class="page-link" data-page="{{ page }}">{{ page }}</a></li>
{%- else %}
    <li class="page-item disabled"><span class="page-link">&hellip;</span></li>
{%- endif %}
{%- endfor %}
    <li class="page-item{% if not bar.next %} disabled{% endif %}"><a class="page-link"{% if bar.next %} data-page="{{ bar.next }}"{% endif %}>Next</a></li>
  </ul>
  <div class="pagination-info">Showing {{ bar.first_item }} to {{ bar.last_item }} of {{ bar.total_items }} entries</div>
</nav>
{%- endif %}
"#;

const ALERTS_TEMPLATE: &str = r#"{% for alert in alerts -%}
<div class="alert alert-{{ alert.level }}" role="alert">{{ alert.message }}</div>
{% endfor %}"#;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Danger,
    Info,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

/// Collects what the controller renders and turns it into HTML on demand.
pub struct HtmlTableView {
    tera: Tera,
    noun: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<Cell>>,
    bar: Option<PaginationBar>,
    empty: Option<String>,
    alerts: Vec<Alert>,
}

impl HtmlTableView {
    /// View for the table of `T` records.
    pub fn new<T: TableRow + Record>() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (TABLE_TEMPLATE_NAME, TABLE_TEMPLATE),
            (ALERTS_TEMPLATE_NAME, ALERTS_TEMPLATE),
        ])?;

        Ok(Self {
            tera,
            noun: T::NOUN,
            headers: T::headers(),
            rows: Vec::new(),
            bar: None,
            empty: None,
            alerts: Vec::new(),
        })
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn pagination(&self) -> Option<&PaginationBar> {
        self.bar.as_ref()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Removes and returns the pending alerts.
    pub fn dismiss_alerts(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }

    /// Table body plus pagination controls.
    pub fn render_table(&self) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("headers", self.headers);
        context.insert("rows", &self.rows);
        context.insert("empty", &self.empty);
        context.insert("bar", &self.bar);

        Ok(self.tera.render(TABLE_TEMPLATE_NAME, &context)?)
    }

    pub fn render_alerts(&self) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("alerts", &self.alerts);

        Ok(self.tera.render(ALERTS_TEMPLATE_NAME, &context)?)
    }

    fn push_alert(&mut self, level: AlertLevel, message: &str) {
        self.alerts.push(Alert {
            level,
            message: message.to_string(),
        });
    }
}

impl<T: TableRow> ListView<T> for HtmlTableView {
    fn clear(&mut self) {
        self.rows.clear();
        self.bar = None;
        self.empty = None;
    }

    fn render_row(&mut self, record: &T) {
        self.rows.push(record.cells());
    }

    fn render_pagination(&mut self, page: &PageInfo) {
        self.bar = PaginationBar::new(page);
    }

    fn render_error(&mut self, message: &str) {
        self.push_alert(AlertLevel::Danger, message);
    }

    fn render_empty(&mut self, state: EmptyState) {
        self.rows.clear();
        self.bar = None;
        self.empty = Some(state.message(self.noun));
    }

    fn render_notice(&mut self, message: &str) {
        self.push_alert(AlertLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bus::Bus;
    use crate::domain::types::BusId;

    fn bus(id: i32, number: &str) -> Bus {
        Bus {
            id: BusId::new(id).expect("valid id"),
            bus_number: number.to_string(),
            registration_number: format!("DL1PC{id:04}"),
            capacity: 40,
            bus_type: "AC".to_string(),
            is_active: true,
        }
    }

    fn view() -> HtmlTableView {
        HtmlTableView::new::<Bus>().expect("templates compile")
    }

    #[test]
    fn record_text_is_escaped() {
        let mut view = view();
        ListView::<Bus>::render_row(&mut view, &bus(1, "<b>B-01</b>"));

        let html = view.render_table().expect("rendered");

        assert!(html.contains("&lt;b&gt;B-01&lt;&#x2F;b&gt;"));
        assert!(html.contains(r#"<span class="badge badge-success">Active</span>"#));
    }

    #[test]
    fn pagination_marks_current_page_and_gaps() {
        let mut view = view();
        ListView::<Bus>::render_pagination(&mut view, &PageInfo::new(5, 120, 10));

        let html = view.render_table().expect("rendered");

        assert!(html.contains(r#"<li class="page-item active"><a class="page-link" data-page="5">5</a></li>"#));
        assert_eq!(html.matches("&hellip;").count(), 2);
        assert!(html.contains("Showing 41 to 50 of 120 entries"));
    }

    #[test]
    fn single_page_has_no_pagination() {
        let mut view = view();
        ListView::<Bus>::render_pagination(&mut view, &PageInfo::new(1, 4, 10));

        assert!(view.pagination().is_none());
        assert!(!view.render_table().expect("rendered").contains("<nav"));
    }

    #[test]
    fn empty_state_replaces_rows_and_bar() {
        let mut view = view();
        ListView::<Bus>::render_row(&mut view, &bus(1, "B-01"));
        ListView::<Bus>::render_pagination(&mut view, &PageInfo::new(1, 30, 10));
        ListView::<Bus>::render_empty(&mut view, EmptyState::Unavailable);

        let html = view.render_table().expect("rendered");

        assert!(view.rows().is_empty());
        assert!(html.contains("No database connection"));
        assert!(!html.contains("<nav"));
    }

    #[test]
    fn errors_become_danger_alerts() {
        let mut view = view();
        ListView::<Bus>::render_error(&mut view, "Database connection error.");

        let html = view.render_alerts().expect("rendered");

        assert!(html.contains(r#"<div class="alert alert-danger" role="alert">Database connection error.</div>"#));
        assert_eq!(view.dismiss_alerts().len(), 1);
        assert!(view.alerts().is_empty());
    }
}
