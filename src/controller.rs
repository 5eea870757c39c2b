//! Paginated list controller shared by every console screen.
//!
//! The controller owns three stages: every record from the last successful
//! load, the subsequence passing the active predicate, and the page cursor
//! into that subsequence. Each mutation recomputes what it invalidates and
//! redraws through the injected [`ListView`].

use std::ops::Range;

use crate::DEFAULT_ITEMS_PER_PAGE;
use crate::domain::Record;
use crate::filters::RecordFilter;
use crate::pagination::PageInfo;
use crate::source::RecordSource;
use crate::source::errors::SourceResult;
use crate::views::{EmptyState, ListView};

type Predicate<T> = Box<dyn Fn(&T) -> bool>;

pub struct ListController<T, S, V> {
    source: S,
    view: V,
    all_records: Vec<T>,
    /// Indices into `all_records`, ascending.
    filtered: Vec<usize>,
    predicate: Predicate<T>,
    /// 1-based.
    current_page: usize,
    page_size: usize,
}

impl<T, S, V> ListController<T, S, V>
where
    T: Record,
    S: RecordSource<T>,
    V: ListView<T>,
{
    pub fn new(source: S, view: V) -> Self {
        Self::with_page_size(source, view, DEFAULT_ITEMS_PER_PAGE)
    }

    /// A zero page size is treated as one.
    pub fn with_page_size(source: S, view: V, page_size: usize) -> Self {
        Self {
            source,
            view,
            all_records: Vec::new(),
            filtered: Vec::new(),
            predicate: Box::new(|_| true),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Fetches every record from the source and redraws.
    ///
    /// On failure nothing changes except the view, which shows the error and
    /// drops its rows and pagination.
    pub async fn load(&mut self) -> SourceResult<usize> {
        log::debug!("Loading {}", T::NOUN);
        let result = self.source.fetch_records().await;
        self.apply_load(result)
    }

    /// Applies a fetch result obtained outside the controller.
    ///
    /// Results are applied in call order, so the last one applied wins.
    pub fn apply_load(&mut self, result: SourceResult<Vec<T>>) -> SourceResult<usize> {
        match result {
            Ok(records) => {
                let count = records.len();
                log::info!("Loaded {count} {}", T::NOUN);

                self.all_records = records;
                self.refilter();
                self.current_page = 1;

                if count == 0 {
                    self.view.render_notice(&format!(
                        "No {} found. Please import database.",
                        T::NOUN
                    ));
                }
                self.render();
                Ok(count)
            }
            Err(err) => {
                log::error!("Failed to load {}: {err}", T::NOUN);
                self.view.render_error(&err.user_message(T::NOUN));
                self.view.render_empty(EmptyState::Unavailable);
                Err(err)
            }
        }
    }

    /// Replaces the active predicate, back to page one.
    pub fn set_filter<P>(&mut self, predicate: P)
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.predicate = Box::new(predicate);
        self.refilter();
        self.current_page = 1;
        self.render();
    }

    pub fn apply_filter<F>(&mut self, filter: F)
    where
        F: RecordFilter<T> + 'static,
    {
        self.set_filter(move |record| filter.matches(record));
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(|_| true);
    }

    /// Moves to `page`; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        let total_pages = self.page_info().total_pages;
        if page < 1 || page > total_pages {
            log::debug!("Ignoring page {page} of {total_pages} for {}", T::NOUN);
            return;
        }
        self.current_page = page;
        self.render();
    }

    /// Looks a record up among everything loaded, filtered out or not.
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.all_records.iter().find(|record| &record.id() == id)
    }

    pub fn all_records(&self) -> &[T] {
        &self.all_records
    }

    pub fn filtered_records(&self) -> Vec<&T> {
        self.filtered
            .iter()
            .map(|&index| &self.all_records[index])
            .collect()
    }

    pub fn page_records(&self) -> Vec<&T> {
        self.filtered[self.page_range()]
            .iter()
            .map(|&index| &self.all_records[index])
            .collect()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.current_page, self.filtered.len(), self.page_size)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn refilter(&mut self) {
        let predicate = &self.predicate;
        self.filtered = self
            .all_records
            .iter()
            .enumerate()
            .filter(|(_, record)| predicate(record))
            .map(|(index, _)| index)
            .collect();
    }

    fn page_range(&self) -> Range<usize> {
        let len = self.filtered.len();
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    fn render(&mut self) {
        let info = self.page_info();
        let range = self.page_range();

        self.view.clear();
        if self.filtered.is_empty() {
            self.view.render_empty(EmptyState::NoMatches);
        } else {
            for &index in &self.filtered[range] {
                self.view.render_row(&self.all_records[index]);
            }
        }
        self.view.render_pagination(&info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bus::Bus;
    use crate::domain::types::BusId;
    use crate::source::StaticSource;
    use crate::source::errors::SourceError;

    #[derive(Default)]
    struct CountingView {
        rows: Vec<i32>,
        bars: Vec<PageInfo>,
        errors: Vec<String>,
        empty: Vec<EmptyState>,
        notices: usize,
    }

    impl ListView<Bus> for CountingView {
        fn clear(&mut self) {
            self.rows.clear();
        }

        fn render_row(&mut self, record: &Bus) {
            self.rows.push(record.id.get());
        }

        fn render_pagination(&mut self, page: &PageInfo) {
            self.bars.push(*page);
        }

        fn render_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn render_empty(&mut self, state: EmptyState) {
            self.empty.push(state);
        }

        fn render_notice(&mut self, _message: &str) {
            self.notices += 1;
        }
    }

    fn buses(count: i32) -> Vec<Bus> {
        (1..=count)
            .map(|id| Bus {
                id: BusId::new(id).expect("valid id"),
                bus_number: format!("B-{id:02}"),
                registration_number: format!("DL1PC{id:04}"),
                capacity: 40,
                bus_type: if id % 2 == 0 { "AC" } else { "Standard" }.to_string(),
                is_active: id % 3 != 0,
            })
            .collect()
    }

    fn controller() -> ListController<Bus, StaticSource<Bus>, CountingView> {
        ListController::new(StaticSource::default(), CountingView::default())
    }

    #[test]
    fn load_keeps_the_active_filter_and_resets_the_page() {
        let mut ctrl = controller();
        ctrl.apply_load(Ok(buses(30))).expect("loaded");
        ctrl.set_filter(|bus| bus.is_active);
        ctrl.go_to_page(2);
        assert_eq!(ctrl.current_page(), 2);

        ctrl.apply_load(Ok(buses(9))).expect("reloaded");

        assert_eq!(ctrl.current_page(), 1);
        assert_eq!(ctrl.filtered_records().len(), 6);
        assert!(ctrl.filtered_records().iter().all(|bus| bus.is_active));
    }

    #[test]
    fn empty_filtered_set_renders_the_empty_state_without_pages() {
        let mut ctrl = controller();
        ctrl.apply_load(Ok(buses(5))).expect("loaded");
        ctrl.set_filter(|_| false);

        assert_eq!(ctrl.view().empty.last(), Some(&EmptyState::NoMatches));
        let bar = ctrl.view().bars.last().copied().expect("bar rendered");
        assert_eq!((bar.page, bar.total_pages, bar.total_items), (1, 0, 0));
        assert!(ctrl.page_records().is_empty());
    }

    #[test]
    fn loading_nothing_emits_a_notice() {
        let mut ctrl = controller();
        assert_eq!(ctrl.apply_load(Ok(Vec::new())), Ok(0));
        assert_eq!(ctrl.view().notices, 1);
    }

    #[test]
    fn failed_load_clears_the_view_but_not_the_state() {
        let mut ctrl = controller();
        ctrl.apply_load(Ok(buses(12))).expect("loaded");
        ctrl.go_to_page(2);

        let result = ctrl.apply_load(Err(SourceError::Transport("refused".to_string())));

        assert!(result.is_err());
        assert_eq!(ctrl.all_records().len(), 12);
        assert_eq!(ctrl.current_page(), 2);
        assert_eq!(ctrl.view().errors, vec!["Database connection error."]);
        assert_eq!(ctrl.view().empty.last(), Some(&EmptyState::Unavailable));
    }

    #[test]
    fn find_searches_records_hidden_by_the_filter() {
        let mut ctrl = controller();
        ctrl.apply_load(Ok(buses(6))).expect("loaded");
        ctrl.set_filter(|bus| bus.bus_type == "AC");

        let id = BusId::new(3).expect("valid id");
        assert_eq!(ctrl.find(&id).map(|bus| bus.bus_number.as_str()), Some("B-03"));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let ctrl = ListController::with_page_size(
            StaticSource::<Bus>::default(),
            CountingView::default(),
            0,
        );
        assert_eq!(ctrl.page_size(), 1);
    }
}
