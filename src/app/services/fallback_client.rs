//! Client for the external fallback extraction service
//!
//! Used only when structural parsing finds no session at all. The service
//! receives the raw text blob and answers with a success flag and, on
//! success, a complete schedule document. There is no retry and no timeout
//! configuration: any failure fails the run.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::app::models::ScheduleDocument;
use crate::config::FallbackConfig;
use crate::{Error, Result};

/// An extraction service able to produce a schedule from raw text alone
#[async_trait]
pub trait FallbackService: Send + Sync {
    async fn extract(&self, raw_text: &str) -> Result<ScheduleDocument>;
}

/// Request body sent to the service
#[derive(Debug, Clone, Serialize)]
pub struct FallbackRequest<'a> {
    pub text: &'a str,
}

/// Response body returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ScheduleDocument>,
    #[serde(default)]
    pub error: Option<String>,
}

impl FallbackResponse {
    /// The schedule carried by a successful response
    pub fn into_document(self) -> Result<ScheduleDocument> {
        if !self.success {
            return Err(Error::fallback_failure(
                self.error
                    .unwrap_or_else(|| "service reported failure".to_string()),
            ));
        }

        let mut document = self
            .data
            .ok_or_else(|| Error::fallback_failure("successful response carried no schedule"))?;
        document.weekly_schedule.ensure_all_days();
        Ok(document)
    }
}

/// HTTP implementation of [`FallbackService`]
#[derive(Debug, Clone)]
pub struct HttpFallbackClient {
    client: reqwest::Client,
    url: String,
}

impl HttpFallbackClient {
    pub fn new(config: &FallbackConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.extract_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FallbackService for HttpFallbackClient {
    async fn extract(&self, raw_text: &str) -> Result<ScheduleDocument> {
        info!("Requesting fallback extraction from {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&FallbackRequest { text: raw_text })
            .send()
            .await
            .map_err(|e| {
                Error::fallback_failure(format!("request to {} failed: {}", self.url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fallback service answered {}", status);
            return Err(Error::fallback_failure(format!(
                "service answered HTTP {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::fallback_failure(format!("failed to read response: {}", e)))?;

        parse_response(&body)
    }
}

/// Decode a response body into a schedule document
pub fn parse_response(body: &str) -> Result<ScheduleDocument> {
    let response: FallbackResponse = serde_json::from_str(body)
        .map_err(|e| Error::fallback_failure(format!("invalid response body: {}", e)))?;
    response.into_document()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_response() {
        let body = r#"{
            "success": true,
            "data": {
                "university": "Example University",
                "weekly_schedule": {
                    "Sunday": [
                        {"time": "08:00-09:30", "sessions": [
                            {"group": null, "room": "12", "course": "Algorithms", "type": "Course", "professor": "Smith"}
                        ]}
                    ]
                }
            }
        }"#;

        let document = parse_response(body).unwrap();

        assert_eq!(document.header.university, "Example University");
        assert_eq!(document.time_slots.len(), 6);
        assert_eq!(document.session_count(), 1);
        assert_eq!(document.weekly_schedule.iter().count(), 7);
    }

    #[test]
    fn test_failure_flag() {
        let result = parse_response(r#"{"success": false, "error": "quota exceeded"}"#);
        match result {
            Err(Error::FallbackFailure { message }) => assert_eq!(message, "quota exceeded"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_success_without_data() {
        let result = parse_response(r#"{"success": true}"#);
        assert!(matches!(result, Err(Error::FallbackFailure { .. })));
    }

    #[test]
    fn test_invalid_body() {
        let result = parse_response("<html>Bad gateway</html>");
        assert!(matches!(result, Err(Error::FallbackFailure { .. })));
    }

    #[test]
    fn test_client_url() {
        let client = HttpFallbackClient::new(&FallbackConfig::new("http://localhost:5000/"));
        assert_eq!(
            client.url(),
            "http://localhost:5000/api/schedule/extract-with-gemini"
        );
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let client = HttpFallbackClient::new(&FallbackConfig::new("http://127.0.0.1:9"));
        let result = client.extract("text").await;
        assert!(matches!(result, Err(Error::FallbackFailure { .. })));
    }
}
