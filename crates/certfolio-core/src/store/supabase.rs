//! Supabase (PostgREST) implementation of [`CertificationSource`].

use reqwest::Client;

use super::CertificationSource;
use crate::config::SupabaseEndpoint;
use crate::error::{Error, Result};
use crate::models::Certification;
use crate::util::compact_text;

/// Remote table holding certification rows.
pub const CERTIFICATIONS_TABLE: &str = "certifications";

/// HTTP client for the `certifications` table.
#[derive(Debug, Clone)]
pub struct SupabaseCertificationStore {
    query_url: String,
    anon_key: String,
    client: Client,
}

impl SupabaseCertificationStore {
    pub fn new(endpoint: &SupabaseEndpoint) -> Result<Self> {
        Ok(Self {
            query_url: active_certifications_url(&endpoint.url),
            anon_key: endpoint.anon_key.clone(),
            client: Client::builder().build()?,
        })
    }

    /// The full query URL this store reads from.
    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

impl CertificationSource for SupabaseCertificationStore {
    async fn fetch_active_certifications(&self) -> Result<Vec<Certification>> {
        tracing::debug!("Fetching active certifications from {}", self.query_url);

        let response = self
            .client
            .get(&self.query_url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body: compact_text(&body),
            });
        }

        let payload = response.text().await?;
        parse_certifications(&payload)
    }
}

/// PostgREST query: every column of active rows, `sort_order` ascending.
pub fn active_certifications_url(project_url: &str) -> String {
    format!(
        "{}/rest/v1/{CERTIFICATIONS_TABLE}?select=*&is_active=eq.true&order=sort_order.asc",
        project_url.trim_end_matches('/')
    )
}

/// Decode a PostgREST response body. A `null` body is an empty result.
pub fn parse_certifications(payload: &str) -> Result<Vec<Certification>> {
    let rows: Option<Vec<Certification>> = serde_json::from_str(payload)?;
    Ok(rows.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::sync::oneshot;

    use super::*;
    use pretty_assertions::assert_eq;

    const ANON_KEY: &str = "anon-test-key";

    /// Serve one canned response and hand back the raw request text.
    async fn spawn_one_shot_server(
        status_line: &str,
        body: &str,
    ) -> (SupabaseEndpoint, oneshot::Receiver<String>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request_buffer = [0_u8; 4096];
                let read = socket.read(&mut request_buffer).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&request_buffer[..read]).into_owned();
                let _ = request_tx.send(request);
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        let endpoint = SupabaseEndpoint {
            url: format!("http://{address}"),
            anon_key: ANON_KEY.to_string(),
        };
        (endpoint, request_rx)
    }

    fn names(rows: Vec<Certification>) -> Vec<String> {
        rows.into_iter().map(|cert| cert.certificate_name).collect()
    }

    #[test]
    fn query_url_filters_and_orders() {
        assert_eq!(
            active_certifications_url("https://demo.supabase.co/"),
            "https://demo.supabase.co/rest/v1/certifications?select=*&is_active=eq.true&order=sort_order.asc"
        );
    }

    #[test]
    fn store_uses_endpoint_url() {
        let store = SupabaseCertificationStore::new(&SupabaseEndpoint {
            url: "http://localhost:54321".to_string(),
            anon_key: "anon".to_string(),
        })
        .unwrap();
        assert!(store
            .query_url()
            .starts_with("http://localhost:54321/rest/v1/certifications?"));
    }

    #[test]
    fn parse_keeps_response_order() {
        let payload = r#"[
            {"id": "0190f3c2-6a4e-7c1d-9a63-6f1f2b7f2a11", "certificate_name": "Second", "image_url": "https://img/2.png", "sort_order": 2},
            {"id": "0190f3c2-6a4e-7c1d-9a63-6f1f2b7f2a10", "certificate_name": "First", "image_url": "https://img/1.png", "sort_order": 1}
        ]"#;
        let names: Vec<String> = parse_certifications(payload)
            .unwrap()
            .into_iter()
            .map(|cert| cert.certificate_name)
            .collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn parse_accepts_integer_ids() {
        let payload = r#"[
            {"id": 1, "certificate_name": "AWS", "image_url": "https://img/1.png", "sort_order": 1},
            {"id": 2, "certificate_name": "CKA", "image_url": "https://img/2.png", "sort_order": 2}
        ]"#;
        let rows = parse_certifications(payload).unwrap();
        let ids: Vec<&str> = rows.iter().map(|cert| cert.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn parse_null_is_empty() {
        assert!(parse_certifications("null").unwrap().is_empty());
        assert!(parse_certifications("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_malformed_rows() {
        assert!(matches!(
            parse_certifications(r#"[{"certificate_name": "no id"}]"#),
            Err(Error::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn fetch_sends_anon_key_and_active_query() {
        let (endpoint, request_rx) = spawn_one_shot_server("200 OK", "[]").await;
        let store = SupabaseCertificationStore::new(&endpoint).unwrap();

        store.fetch_active_certifications().await.unwrap();

        let request = request_rx.await.unwrap();
        let request_line = request.lines().next().unwrap_or_default();
        assert_eq!(
            request_line,
            "GET /rest/v1/certifications?select=*&is_active=eq.true&order=sort_order.asc HTTP/1.1"
        );
        let headers = request.to_ascii_lowercase();
        assert!(headers.contains(&format!("apikey: {ANON_KEY}")));
        assert!(headers.contains(&format!("authorization: bearer {ANON_KEY}")));
    }

    #[tokio::test]
    async fn fetch_keeps_server_row_order() {
        let body = r#"[
            {"id": 2, "certificate_name": "First", "image_url": "https://img/2.png", "sort_order": 1},
            {"id": 1, "certificate_name": "Second", "image_url": "https://img/1.png", "sort_order": 2}
        ]"#;
        let (endpoint, _request_rx) = spawn_one_shot_server("200 OK", body).await;
        let store = SupabaseCertificationStore::new(&endpoint).unwrap();

        let rows = store.fetch_active_certifications().await.unwrap();
        assert_eq!(names(rows), vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn fetch_null_body_is_empty() {
        let (endpoint, _request_rx) = spawn_one_shot_server("200 OK", "null").await;
        let store = SupabaseCertificationStore::new(&endpoint).unwrap();

        assert!(store.fetch_active_certifications().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_maps_error_status_to_api_error() {
        let body = format!("  {}  ", "service unavailable ".repeat(20));
        let (endpoint, _request_rx) =
            spawn_one_shot_server("503 Service Unavailable", &body).await;
        let store = SupabaseCertificationStore::new(&endpoint).unwrap();

        match store.fetch_active_certifications().await {
            Err(Error::Api { status, body: message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, compact_text(&body));
                assert!(message.starts_with("service unavailable"));
                assert_eq!(
                    message.chars().count(),
                    crate::util::ERROR_BODY_EXCERPT_CHARS
                );
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_maps_connection_failure_to_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        drop(listener);

        let store = SupabaseCertificationStore::new(&SupabaseEndpoint {
            url: format!("http://{address}"),
            anon_key: ANON_KEY.to_string(),
        })
        .unwrap();

        assert!(matches!(
            store.fetch_active_certifications().await,
            Err(Error::Http(_))
        ));
    }
}
