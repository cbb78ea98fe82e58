use std::env;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::lang::Lang;

const API_BASE: &str = "https://translate.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translation rate limit exceeded")]
    RateLimited,

    #[error("translation API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("malformed translation response: {0}")]
    MalformedResponse(String),

    #[error("invalid translation endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Machine translation between supported languages.
/// Implemented by `GoogleTranslateClient` for production; mock implementations used in tests.
pub trait Translator {
    async fn translate(
        &self,
        text: &str,
        source: Lang,
        target: Lang,
    ) -> Result<String, TranslateError>;
}

/// Client for the public Google Translate `translate_a/single` endpoint.
#[derive(Clone)]
pub struct GoogleTranslateClient {
    http: Client,
    base_url: String,
}

impl GoogleTranslateClient {
    /// Uses `TRANSLATE_BASE_URL` when set, otherwise the public endpoint.
    pub fn from_env(http: Client) -> Self {
        let base_url = env::var("TRANSLATE_BASE_URL")
            .ok()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| API_BASE.to_string());
        Self { http, base_url }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    async fn request(
        &self,
        text: &str,
        source: Lang,
        target: Lang,
    ) -> Result<String, TranslateError> {
        let url = Url::parse_with_params(
            &format!("{}/translate_a/single", self.base_url),
            &[
                ("client", "gtx"),
                ("sl", source.code()),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ],
        )?;

        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("translation API rate limited");
            return Err(TranslateError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let end = body.floor_char_boundary(200);
            return Err(TranslateError::Api {
                code: status.as_u16(),
                message: format!("HTTP {status}: {}", &body[..end]),
            });
        }

        let body: Value = response.json().await?;
        let translated = extract_translation(&body)?;
        debug!(%source, %target, chars = translated.chars().count(), "translation complete");
        Ok(translated)
    }
}

const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 250;

impl Translator for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source: Lang,
        target: Lang,
    ) -> Result<String, TranslateError> {
        let mut last_err = None;
        for attempt in 0..MAX_RETRIES {
            match self.request(text, source, target).await {
                Ok(translated) => return Ok(translated),
                Err(e) if is_retriable(&e) => {
                    last_err = Some(e);
                    if attempt + 1 < MAX_RETRIES {
                        let delay_ms = jittered_backoff(attempt);
                        debug!(attempt = attempt + 1, delay_ms, "retrying translation");
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_err.unwrap_or(TranslateError::RateLimited))
    }
}

fn is_retriable(e: &TranslateError) -> bool {
    matches!(
        e,
        TranslateError::RateLimited
            | TranslateError::Api {
                code: 500..=599,
                ..
            }
    )
}

/// Equal jitter backoff: base/2 + rand(0, base/2).
fn jittered_backoff(attempt: u32) -> u64 {
    let base = INITIAL_BACKOFF_MS * 2u64.pow(attempt);
    let half = base / 2;
    half + fastrand::u64(..half.max(1))
}

/// The response is a nested array; element 0 holds `[translated, original, ...]`
/// segments whose translated parts concatenate to the full text.
fn extract_translation(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::MalformedResponse("missing segment list".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(TranslateError::MalformedResponse("empty translation".into()));
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn concatenates_segments() {
        let body = json!([
            [["Doctor exams. ", "डॉक्टर परीक्षा। ", null, null, 10], ["NEET", "NEET", null]],
            null,
            "hi"
        ]);
        assert_eq!(extract_translation(&body).unwrap(), "Doctor exams. NEET");
    }

    #[test]
    fn rejects_unexpected_shape() {
        assert!(matches!(
            extract_translation(&json!({"error": "x"})),
            Err(TranslateError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_translation(&json!([[]])),
            Err(TranslateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn retriable_errors() {
        assert!(is_retriable(&TranslateError::RateLimited));
        assert!(is_retriable(&TranslateError::Api {
            code: 503,
            message: String::new()
        }));
        assert!(!is_retriable(&TranslateError::Api {
            code: 400,
            message: String::new()
        }));
        assert!(!is_retriable(&TranslateError::MalformedResponse(String::new())));
    }

    #[test]
    fn backoff_stays_within_window() {
        for attempt in 0..3 {
            let base = INITIAL_BACKOFF_MS * 2u64.pow(attempt);
            let delay = jittered_backoff(attempt);
            assert!(delay >= base / 2 && delay < base, "attempt {attempt}: {delay}");
        }
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn translate_success_sends_language_pair() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("sl", "mr"))
            .and(query_param("tl", "en"))
            .and(query_param("q", "डॉक्टर परीक्षा"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                [["doctor exams", "डॉक्टर परीक्षा", null, null, 10]],
                null,
                "mr"
            ])))
            .mount(&server)
            .await;

        let client = GoogleTranslateClient::with_base_url(Client::new(), &server.uri());
        let result = client.translate("डॉक्टर परीक्षा", Lang::Mr, Lang::En).await.unwrap();

        assert_eq!(result, "doctor exams");
    }

    #[tokio::test]
    async fn translate_429_returns_rate_limited_after_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(429))
            .expect(u64::from(MAX_RETRIES))
            .mount(&server)
            .await;

        let client = GoogleTranslateClient::with_base_url(Client::new(), &server.uri());
        let result = client.translate("hello", Lang::En, Lang::Hi).await;
        assert!(matches!(result, Err(TranslateError::RateLimited)));
    }

    #[tokio::test]
    async fn translate_400_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .expect(1)
            .mount(&server)
            .await;

        let client = GoogleTranslateClient::with_base_url(Client::new(), &server.uri());
        match client.translate("hello", Lang::En, Lang::Hi).await {
            Err(TranslateError::Api { code: 400, message }) => {
                assert!(message.contains("bad request"), "got: {message}");
            }
            other => panic!("expected Api(400), got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn translate_invalid_json_shape_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let client = GoogleTranslateClient::with_base_url(Client::new(), &server.uri());
        let result = client.translate("hello", Lang::En, Lang::Mr).await;
        assert!(matches!(result, Err(TranslateError::MalformedResponse(_))));
    }
}
