use std::{future::Future, time::Duration};

use serde::Deserialize;
use thiserror::Error;

use super::{ContactConfig, ContactFormData, SubmissionResult};

const FAILED_TO_SEND: &str = "Failed to send message";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error occurred: {0}")]
    Network(String),
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

/// Delivers a contact form to whatever processes it.
pub trait ContactTransport {
    fn submit(
        &self,
        form: &ContactFormData,
    ) -> impl Future<Output = Result<SubmissionResult, TransportError>>;
}

/// Posts the form as JSON to `{api_base_url}/contact`.
///
/// Every outcome, including network failures, comes back as a [`SubmissionResult`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout: Duration,
}

#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    status: Option<u16>,
    message: Option<String>,
    errors: Option<Vec<String>>,
}

impl HttpTransport {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.contact_url(),
            timeout: config.request_timeout,
        }
    }

    pub async fn send(&self, form: &ContactFormData) -> SubmissionResult {
        match self.exchange(form).await {
            Ok(res) => res,
            Err(err) => {
                log::error!("Contact API error: {err}");
                SubmissionResult::failure(500, err.to_string())
            }
        }
    }

    async fn exchange(&self, form: &ContactFormData) -> Result<SubmissionResult, TransportError> {
        let request = self.client.post(&self.url).json(form);
        // the browser fetch backend has no per-request timeout
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str::<SubmissionResult>(&body)
                .map_err(|e| TransportError::InvalidResponse(e.to_string()))
        } else {
            let res = rejected(status.as_u16(), &body);
            log::error!("Contact API rejected message ({}): {}", res.status, res.message);
            Ok(res)
        }
    }
}

fn rejected(http_status: u16, body: &str) -> SubmissionResult {
    let parsed = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed,
        Err(_) => return SubmissionResult::failure(http_status, FAILED_TO_SEND),
    };
    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| FAILED_TO_SEND.to_string());
    SubmissionResult {
        success: false,
        status: parsed.status.unwrap_or(http_status),
        errors: parsed.errors.or_else(|| Some(vec![message.clone()])),
        message,
    }
}

impl ContactTransport for HttpTransport {
    async fn submit(&self, form: &ContactFormData) -> Result<SubmissionResult, TransportError> {
        Ok(self.send(form).await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    type Received = Arc<Mutex<Vec<ContactFormData>>>;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    fn transport(base_url: &str) -> HttpTransport {
        HttpTransport::new(&ContactConfig::new(base_url).unwrap())
    }

    fn form() -> ContactFormData {
        ContactFormData {
            name: "  Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Analytical engine".to_string(),
            description: "Let's build something together.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_form_as_json() {
        let received = Received::default();
        let router = Router::new()
            .route(
                "/api/contact",
                post(
                    |State(received): State<Received>, Json(form): Json<ContactFormData>| async move {
                        received.lock().unwrap().push(form);
                        Json(json!({"success": true, "status": 200, "message": "Message received"}))
                    },
                ),
            )
            .with_state(received.clone());
        let base = serve(router).await;

        let res = transport(&base).send(&form()).await;

        assert_eq!(
            res,
            SubmissionResult {
                success: true,
                status: 200,
                message: "Message received".to_string(),
                errors: None,
            }
        );
        // one request, payload not trimmed
        assert_eq!(*received.lock().unwrap(), vec![form()]);
    }

    #[tokio::test]
    async fn test_error_status_uses_body() {
        let router = Router::new().route(
            "/api/contact",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({
                        "success": false,
                        "status": 429,
                        "message": "Too many requests, slow down",
                        "errors": ["rate limited"],
                    })),
                )
            }),
        );
        let base = serve(router).await;

        let res = transport(&base).send(&form()).await;

        assert!(!res.success);
        assert_eq!(res.status, 429);
        assert_eq!(res.message, "Too many requests, slow down");
        assert_eq!(res.errors, Some(vec!["rate limited".to_string()]));
    }

    #[tokio::test]
    async fn test_error_status_without_json_body() {
        let router = Router::new().route(
            "/api/contact",
            post(|| async { (StatusCode::BAD_GATEWAY, "upstream down").into_response() }),
        );
        let base = serve(router).await;

        let res = transport(&base).send(&form()).await;

        assert_eq!(res, SubmissionResult::failure(502, FAILED_TO_SEND));
    }

    #[tokio::test]
    async fn test_success_status_with_garbage_body() {
        let router = Router::new().route(
            "/api/contact",
            post(|| async { "<html>thanks</html>" }),
        );
        let base = serve(router).await;

        let res = transport(&base).send(&form()).await;

        assert!(!res.success);
        assert_eq!(res.status, 500);
        assert!(res.message.starts_with("Invalid response from server"));
        assert_eq!(res.errors, Some(vec![res.message.clone()]));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        let router = Router::new().route(
            "/api/contact",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({"success": true, "status": 200, "message": "too late"}))
            }),
        );
        let base = serve(router).await;
        let config = ContactConfig::new(base)
            .unwrap()
            .with_request_timeout(Duration::from_millis(200));

        let res = HttpTransport::new(&config).send(&form()).await;

        assert!(!res.success);
        assert_eq!(res.status, 500);
        assert!(res.message.starts_with("Network error occurred"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = transport(&format!("http://{addr}/api"));
        let res = transport.submit(&form()).await;

        let res = res.expect("http transport never returns Err");
        assert!(!res.success);
        assert_eq!(res.status, 500);
        assert!(res.message.starts_with("Network error occurred"));
    }

    #[test]
    fn test_rejected_body_without_message() {
        let res = rejected(400, r#"{"success":false}"#);
        assert_eq!(res.status, 400);
        assert_eq!(res.message, FAILED_TO_SEND);
        assert_eq!(res.errors, Some(vec![FAILED_TO_SEND.to_string()]));
    }
}
