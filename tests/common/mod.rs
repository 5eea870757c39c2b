//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use yatrisetu_admin::domain::booking::Booking;
use yatrisetu_admin::domain::types::BookingId;
use yatrisetu_admin::pagination::PageInfo;
use yatrisetu_admin::source::RecordSource;
use yatrisetu_admin::source::errors::{SourceError, SourceResult};
use yatrisetu_admin::views::{EmptyState, ListView};

pub fn booking(id: i32, status: &str) -> Booking {
    Booking {
        id: BookingId::new(id).expect("valid id"),
        booking_reference: format!("BK{id:03}"),
        passenger_name: if id % 2 == 0 { "Asha Rao" } else { "Vikram Singh" }.to_string(),
        passenger_category: "General".to_string(),
        journey_date: NaiveDate::from_ymd_opt(2024, 3, 1 + (id % 28) as u32)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid date"),
        fare_amount: 25.0 + f64::from(id),
        status: status.into(),
        route_number: "42A".to_string(),
    }
}

/// `count` confirmed bookings with ids `1..=count`.
pub fn bookings(count: i32) -> Vec<Booking> {
    (1..=count).map(|id| booking(id, "confirmed")).collect()
}

pub fn ids(records: &[&Booking]) -> Vec<i32> {
    records.iter().map(|b| b.id.get()).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Clear,
    Row(i32),
    Pagination(PageInfo),
    Error(String),
    Empty(EmptyState),
    Notice(String),
}

/// View remembering every hook call in order.
#[derive(Default)]
pub struct RecordingView {
    pub events: Vec<Event>,
}

impl RecordingView {
    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl ListView<Booking> for RecordingView {
    fn clear(&mut self) {
        self.events.push(Event::Clear);
    }

    fn render_row(&mut self, record: &Booking) {
        self.events.push(Event::Row(record.id.get()));
    }

    fn render_pagination(&mut self, page: &PageInfo) {
        self.events.push(Event::Pagination(*page));
    }

    fn render_error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }

    fn render_empty(&mut self, state: EmptyState) {
        self.events.push(Event::Empty(state));
    }

    fn render_notice(&mut self, message: &str) {
        self.events.push(Event::Notice(message.to_string()));
    }
}

/// Source answering each fetch with the next scripted result.
#[derive(Default)]
pub struct ScriptedSource {
    results: Mutex<VecDeque<SourceResult<Vec<Booking>>>>,
}

impl ScriptedSource {
    pub fn new(results: Vec<SourceResult<Vec<Booking>>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
        }
    }
}

#[async_trait]
impl RecordSource<Booking> for ScriptedSource {
    async fn fetch_records(&self) -> SourceResult<Vec<Booking>> {
        self.results
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::Transport("no scripted result".to_string())))
    }
}

/// Serves canned JSON bodies by request path until the test ends.
///
/// Unknown paths get a 404 failure envelope. Returns the base url.
pub async fn spawn_backend(routes: Vec<(&'static str, &'static str, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap_or(0);
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let head = String::from_utf8_lossy(&request);
            let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (status, body) = routes
                .iter()
                .find(|(route, _, _)| *route == path)
                .map(|(_, status, body)| (*status, body.clone()))
                .unwrap_or((
                    "404 Not Found",
                    r#"{"success":false,"error":"not found"}"#.to_string(),
                ));

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}
