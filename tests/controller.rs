use yatrisetu_admin::controller::ListController;
use yatrisetu_admin::domain::booking::{Booking, BookingStatus};
use yatrisetu_admin::filters::booking::BookingFilter;
use yatrisetu_admin::pagination::{PageInfo, PaginationBar};
use yatrisetu_admin::source::StaticSource;
use yatrisetu_admin::source::errors::SourceError;
use yatrisetu_admin::views::EmptyState;

mod common;

use common::{Event, RecordingView, ScriptedSource, booking, bookings, ids};

fn static_controller(
    records: Vec<Booking>,
) -> ListController<Booking, StaticSource<Booking>, RecordingView> {
    ListController::new(StaticSource::new(records), RecordingView::default())
}

#[tokio::test]
async fn pages_through_twenty_five_records() {
    let mut ctrl = static_controller(bookings(25));
    assert_eq!(ctrl.load().await, Ok(25));

    assert_eq!(ids(&ctrl.page_records()), (1..=10).collect::<Vec<_>>());
    assert_eq!(ctrl.page_info().total_pages, 3);

    ctrl.go_to_page(3);
    assert_eq!(ids(&ctrl.page_records()), (21..=25).collect::<Vec<_>>());

    ctrl.go_to_page(4);
    ctrl.go_to_page(0);
    assert_eq!(ctrl.current_page(), 3);
    assert_eq!(ids(&ctrl.page_records()), (21..=25).collect::<Vec<_>>());
}

#[tokio::test]
async fn filtering_pending_bookings_fits_one_page() {
    let records: Vec<Booking> = (1..=12)
        .map(|id| booking(id, if id % 2 == 0 && id <= 10 { "pending" } else { "confirmed" }))
        .collect();
    let mut ctrl = static_controller(records);
    ctrl.load().await.expect("loaded");
    ctrl.go_to_page(2);

    ctrl.set_filter(|b| b.status == BookingStatus::Pending);

    assert_eq!(ids(&ctrl.filtered_records()), vec![2, 4, 6, 8, 10]);
    assert_eq!(ctrl.current_page(), 1);
    let info = ctrl.page_info();
    assert_eq!(info.total_pages, 1);
    assert!(PaginationBar::new(&info).is_none());
}

#[tokio::test]
async fn failed_reload_keeps_records_and_reports_once() {
    let source = ScriptedSource::new(vec![
        Ok(bookings(8)),
        Err(SourceError::Transport("connection refused".to_string())),
    ]);
    let mut ctrl = ListController::new(source, RecordingView::default());
    ctrl.load().await.expect("first load");
    ctrl.view_mut().take();

    let result = ctrl.load().await;

    assert_eq!(
        result,
        Err(SourceError::Transport("connection refused".to_string()))
    );
    assert_eq!(ctrl.all_records().len(), 8);
    assert_eq!(ctrl.view().errors(), vec!["Database connection error."]);
    assert_eq!(
        ctrl.view().events.last(),
        Some(&Event::Empty(EmptyState::Unavailable))
    );
}

#[tokio::test]
async fn rejected_load_names_the_backend_reason() {
    let source = ScriptedSource::new(vec![Err(SourceError::Rejected(
        "relation \"bookings\" does not exist".to_string(),
    ))]);
    let mut ctrl = ListController::new(source, RecordingView::default());

    assert!(ctrl.load().await.is_err());

    assert_eq!(
        ctrl.view().errors(),
        vec!["Failed to load bookings: relation \"bookings\" does not exist"]
    );
    assert!(ctrl.all_records().is_empty());
}

#[tokio::test]
async fn middle_page_window_has_both_ellipses() {
    let mut ctrl = static_controller(bookings(120));
    ctrl.load().await.expect("loaded");

    ctrl.go_to_page(5);

    let bar = PaginationBar::new(&ctrl.page_info()).expect("twelve pages");
    assert_eq!(
        bar.pages,
        vec![
            Some(1),
            None,
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            Some(7),
            None,
            Some(12)
        ]
    );
}

#[tokio::test]
async fn clearing_the_filter_restores_every_record_in_order() {
    let mut ctrl = static_controller(bookings(15));
    ctrl.load().await.expect("loaded");

    ctrl.apply_filter(BookingFilter::default().search("asha"));
    assert_eq!(ctrl.filtered_records().len(), 7);
    ctrl.set_filter(|b| b.fare_amount > 30.0);
    ctrl.clear_filter();

    assert_eq!(ids(&ctrl.filtered_records()), (1..=15).collect::<Vec<_>>());
}

#[tokio::test]
async fn redraw_is_clear_rows_then_pagination() {
    let mut ctrl = static_controller(bookings(12));
    ctrl.load().await.expect("loaded");
    ctrl.view_mut().take();

    ctrl.go_to_page(2);

    assert_eq!(
        ctrl.view_mut().take(),
        vec![
            Event::Clear,
            Event::Row(11),
            Event::Row(12),
            Event::Pagination(PageInfo::new(2, 12, 10)),
        ]
    );
}

#[tokio::test]
async fn empty_database_gets_an_import_notice() {
    let mut ctrl = static_controller(Vec::new());

    assert_eq!(ctrl.load().await, Ok(0));

    let events = ctrl.view_mut().take();
    assert_eq!(
        events[0],
        Event::Notice("No bookings found. Please import database.".to_string())
    );
    assert!(events.contains(&Event::Empty(EmptyState::NoMatches)));
}

#[test]
fn last_applied_result_wins() {
    let mut ctrl = static_controller(Vec::new());

    let slow = Ok(bookings(30));
    let fast = Ok(bookings(4));
    ctrl.apply_load(fast).expect("applied");
    ctrl.apply_load(slow).expect("applied");

    assert_eq!(ctrl.all_records().len(), 30);
    assert_eq!(ctrl.current_page(), 1);
}

#[cfg(feature = "test-mocks")]
#[tokio::test]
async fn mock_source_is_fetched_once_per_load() {
    use yatrisetu_admin::source::mock::MockBookingSource;

    let mut source = MockBookingSource::new();
    source
        .expect_fetch_records()
        .times(1)
        .returning(|| Err(SourceError::Decode("unexpected token".to_string())));
    let mut ctrl = ListController::new(source, RecordingView::default());

    assert!(matches!(ctrl.load().await, Err(SourceError::Decode(_))));
    assert_eq!(ctrl.view().errors(), vec!["Database connection error."]);
}
