//! Record sources backed by the console HTTP API.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::models::config::ConsoleConfig;
use crate::source::RecordSource;
use crate::source::endpoints::Listing;
use crate::source::errors::{SourceError, SourceResult};

/// Thin client for the admin API of one backend.
#[derive(Clone, Debug)]
pub struct ConsoleClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ConsoleClient {
    pub fn new(base_url: &str, timeout: Duration) -> SourceResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| SourceError::InvalidUrl(format!("{base_url}: {err}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &ConsoleConfig) -> SourceResult<Self> {
        Self::new(&config.base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> SourceResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| SourceError::InvalidUrl(format!("{path}: {err}")))
    }

    /// GETs `path` and decodes the body as JSON whatever the status code,
    /// since the backend reports failures inside the envelope.
    async fn get_json(&self, path: &str) -> SourceResult<Value> {
        let url = self.endpoint(path)?;
        log::debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        response.json::<Value>().await.map_err(|err| {
            log::error!("Undecodable response from {path} ({status}): {err}");
            SourceError::Decode(format!("HTTP {status}: {err}"))
        })
    }

    pub async fn fetch_list<T: Listing>(&self) -> SourceResult<Vec<T>> {
        let body = self.get_json(T::LIST_PATH).await?;
        T::decode_list(body)
    }

    pub async fn fetch_stats<T: Listing>(&self) -> SourceResult<T::Stats> {
        let body = self.get_json(T::STATS_PATH).await?;
        T::decode_stats(body)
    }

    /// Record source for the `T` list endpoint sharing this client.
    pub fn source<T: Listing>(&self) -> HttpSource<T> {
        HttpSource {
            client: self.clone(),
            _marker: PhantomData,
        }
    }
}

pub struct HttpSource<T> {
    client: ConsoleClient,
    _marker: PhantomData<fn() -> T>,
}

#[async_trait]
impl<T: Listing> RecordSource<T> for HttpSource<T> {
    async fn fetch_records(&self) -> SourceResult<Vec<T>> {
        self.client.fetch_list::<T>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::Booking;
    use crate::domain::bus::Bus;
    use crate::domain::staff::{StaffKind, StaffMember};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned response and returns the base url.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.expect("read");
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write");
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    fn client(base_url: &str) -> ConsoleClient {
        ConsoleClient::new(base_url, Duration::from_secs(5)).expect("valid client")
    }

    #[tokio::test]
    async fn fetches_and_decodes_a_list() {
        let base = serve_once(
            "200 OK",
            r#"{"success":true,"data":[{"id":3,"bus_number":"B-03","registration_number":"DL1PC0003","capacity":40,"is_active":true}]}"#,
        )
        .await;

        let buses = client(&base).source::<Bus>().fetch_records().await.expect("buses");

        assert_eq!(buses.len(), 1);
        assert_eq!(buses[0].bus_type, "Standard");
    }

    #[tokio::test]
    async fn server_error_envelope_is_rejected() {
        let base = serve_once(
            "500 Internal Server Error",
            r#"{"success":false,"error":"relation \"bookings\" does not exist"}"#,
        )
        .await;

        let result = client(&base).fetch_list::<Booking>().await;

        assert_eq!(
            result,
            Err(SourceError::Rejected(
                "relation \"bookings\" does not exist".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn staff_roster_lists_drivers_then_conductors() {
        let base = serve_once(
            "200 OK",
            r#"{"success":true,"drivers":[{"id":1,"driver_id":"DRV001","full_name":"Ravi Kumar"}],"conductors":[{"id":1,"conductor_id":"CON001","full_name":"Meena Devi"}]}"#,
        )
        .await;

        let staff = client(&base)
            .fetch_list::<StaffMember>()
            .await
            .expect("staff");

        let kinds: Vec<StaffKind> = staff.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![StaffKind::Driver, StaffKind::Conductor]);
    }

    #[tokio::test]
    async fn html_body_is_a_decode_error() {
        let base = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;

        let result = client(&base).fetch_list::<Bus>().await;

        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let result = client(&format!("http://{addr}")).fetch_list::<Bus>().await;

        assert!(matches!(result, Err(SourceError::Transport(_))));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = ConsoleClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(SourceError::InvalidUrl(_))));
    }
}
