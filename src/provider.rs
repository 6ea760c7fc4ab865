//! Client for the external scripture text provider.
//!
//! The provider serves one chapter per request as JSON:
//!
//! ```text
//! GET {base_url}/{book}+{chapter}?translation={translation}
//! { "reference": "John 3", "verses": [{ "verse": 1, "text": "..." }, ...] }
//! ```

use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::ProviderError;
use crate::model::{Chapter, Verse};

pub trait ScriptureProvider: Send + Sync {
    fn fetch_chapter<'a>(
        &'a self,
        book: &'a str,
        chapter: u32,
    ) -> BoxFuture<'a, Result<Chapter, ProviderError>>;
}

#[derive(Debug, Deserialize)]
struct ProviderChapter {
    reference: String,
    #[serde(default)]
    verses: Vec<ProviderVerse>,
}

#[derive(Debug, Deserialize)]
struct ProviderVerse {
    verse: u32,
    text: String,
}

impl ProviderChapter {
    fn into_chapter(self, chapter: u32) -> Chapter {
        Chapter {
            book: book_name_from_reference(&self.reference).to_string(),
            chapter,
            verses: self
                .verses
                .into_iter()
                .map(|v| Verse {
                    number: v.verse,
                    text: v.text,
                })
                .collect(),
        }
    }
}

/// Strips a trailing chapter number from a provider reference,
/// `"1 John 3"` becomes `"1 John"`.
pub fn book_name_from_reference(reference: &str) -> &str {
    let without_digits = reference.trim_end_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() == reference.len() {
        return reference;
    }
    match without_digits.strip_suffix(|c: char| c.is_whitespace()) {
        Some(name) => name,
        None => reference,
    }
}

pub struct BibleApiProvider {
    client: reqwest::Client,
    base_url: String,
    translation: String,
}

impl BibleApiProvider {
    pub fn new(cfg: &Config) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if cfg.provider.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(cfg.provider.timeout_seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: cfg.provider.base_url.trim_end_matches('/').to_string(),
            translation: cfg.provider.translation.clone(),
        })
    }

    fn chapter_url(&self, book: &str, chapter: u32) -> String {
        format!(
            "{}/{}+{}?translation={}",
            self.base_url,
            urlencoding::encode(book),
            chapter,
            urlencoding::encode(&self.translation)
        )
    }

    async fn get_chapter(&self, book: &str, chapter: u32) -> Result<Chapter, ProviderError> {
        let url = self.chapter_url(book, chapter);
        tracing::debug!(url = %url, "fetching chapter from provider");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                book: book.to_string(),
                chapter,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let data: ProviderChapter =
            serde_json::from_slice(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(data.into_chapter(chapter))
    }
}

impl ScriptureProvider for BibleApiProvider {
    fn fetch_chapter<'a>(
        &'a self,
        book: &'a str,
        chapter: u32,
    ) -> BoxFuture<'a, Result<Chapter, ProviderError>> {
        Box::pin(self.get_chapter(book, chapter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_chapter_number() {
        assert_eq!(book_name_from_reference("John 3"), "John");
        assert_eq!(book_name_from_reference("1 Samuel 12"), "1 Samuel");
        assert_eq!(book_name_from_reference("Song of Solomon 2"), "Song of Solomon");
    }

    #[test]
    fn leaves_reference_without_trailing_number() {
        assert_eq!(book_name_from_reference("Jude"), "Jude");
        assert_eq!(book_name_from_reference("Psalm119"), "Psalm119");
    }

    #[test]
    fn builds_chapter_url() {
        let mut cfg = Config::default();
        cfg.provider.base_url = "https://bible-api.com/".to_string();
        let provider = BibleApiProvider::new(&cfg).unwrap();
        assert_eq!(
            provider.chapter_url("1 john", 2),
            "https://bible-api.com/1%20john+2?translation=kjv"
        );
    }

    #[test]
    fn maps_provider_payload() {
        let payload: ProviderChapter = serde_json::from_str(
            r#"{"reference":"John 3","verses":[
                {"book_id":"JHN","book_name":"John","chapter":3,"verse":16,"text":"For God so loved the world"}
            ],"text":"...","translation_id":"kjv"}"#,
        )
        .unwrap();
        let chapter = payload.into_chapter(3);
        assert_eq!(chapter.book, "John");
        assert_eq!(chapter.chapter, 3);
        assert_eq!(chapter.verses[0].number, 16);
    }

    async fn stub_passage(
        axum::extract::Path(passage): axum::extract::Path<String>,
    ) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        match passage.as_str() {
            "john+3" => (
                StatusCode::OK,
                r#"{"reference":"John 3","verses":[{"verse":16,"text":"For God so loved the world"}]}"#,
            )
                .into_response(),
            "garbage+1" => (StatusCode::OK, "not json").into_response(),
            "slow+1" => {
                tokio::time::sleep(Duration::from_secs(3)).await;
                (StatusCode::OK, r#"{"reference":"Slow 1","verses":[]}"#).into_response()
            }
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn stub_provider() -> BibleApiProvider {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = axum::Router::new().route("/:passage", axum::routing::get(stub_passage));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut cfg = Config::default();
        cfg.provider.base_url = format!("http://{}", addr);
        cfg.provider.timeout_seconds = 1;
        BibleApiProvider::new(&cfg).unwrap()
    }

    #[tokio::test]
    async fn fetches_chapter_over_http() {
        let provider = stub_provider().await;
        let chapter = provider.fetch_chapter("john", 3).await.unwrap();
        assert_eq!(chapter.book, "John");
        assert_eq!(chapter.chapter, 3);
        assert_eq!(chapter.verses[0].number, 16);
        assert_eq!(chapter.verses[0].text, "For God so loved the world");
    }

    #[tokio::test]
    async fn non_success_status_is_status_error() {
        let provider = stub_provider().await;
        let err = provider.fetch_chapter("missing", 1).await.unwrap_err();
        match err {
            ProviderError::Status {
                book,
                chapter,
                status,
            } => {
                assert_eq!(book, "missing");
                assert_eq!(chapter, 1);
                assert_eq!(status, 404);
            }
            other => panic!("expected status error, got {}", other),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let provider = stub_provider().await;
        let err = provider.fetch_chapter("garbage", 1).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)), "got {}", err);
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_request_error() {
        let provider = stub_provider().await;
        let err = provider.fetch_chapter("slow", 1).await.unwrap_err();
        match err {
            ProviderError::Request(e) => assert!(e.is_timeout()),
            other => panic!("expected request error, got {}", other),
        }
    }
}
