//! Memory store abstraction and the hosted Mem0 implementation.

use crate::error::MemoryError;
use crate::model::MemoryHit;
use async_trait::async_trait;
use log::debug;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;

#[async_trait]
/// Memory store abstraction used by the session pipeline.
pub trait MemoryStore: Send + Sync {
    /// Persist one user utterance keyed by user id.
    async fn add(&self, user_id: &str, text: &str) -> Result<(), MemoryError>;

    /// Search stored memories related to a query, keyed by user id.
    async fn search(&self, user_id: &str, query: &str) -> Result<Vec<MemoryHit>, MemoryError>;
}

/// Client for the hosted Mem0 memory API.
#[derive(Debug, Clone)]
pub struct Mem0Client {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Write request payload for the memories endpoint.
#[derive(Debug, Serialize)]
struct AddMemoryRequest<'a> {
    messages: Vec<MemoryMessage<'a>>,
    user_id: &'a str,
}

/// One role-tagged message inside a write request.
#[derive(Debug, Serialize)]
struct MemoryMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Search request payload for the memories search endpoint.
#[derive(Debug, Serialize)]
struct SearchMemoryRequest<'a> {
    query: &'a str,
    user_id: &'a str,
}

impl Mem0Client {
    /// Create a client against a Mem0 deployment.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Authorization header value for the hosted API.
    fn auth_value(&self) -> String {
        format!("Token {}", self.api_key)
    }
}

#[async_trait]
impl MemoryStore for Mem0Client {
    async fn add(&self, user_id: &str, text: &str) -> Result<(), MemoryError> {
        let request = AddMemoryRequest {
            messages: vec![MemoryMessage {
                role: "user",
                content: text,
            }],
            user_id,
        };
        let url = format!("{}/v1/memories/", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_value())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MemoryError::Status(status.as_u16()));
        }
        debug!(
            "stored memory (user_id={}, content_len={})",
            user_id,
            text.len()
        );
        Ok(())
    }

    async fn search(&self, user_id: &str, query: &str) -> Result<Vec<MemoryHit>, MemoryError> {
        let request = SearchMemoryRequest { query, user_id };
        let url = format!("{}/v1/memories/search/", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_value())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MemoryError::Status(status.as_u16()));
        }
        let hits: Vec<MemoryHit> = response.json().await?;
        debug!(
            "searched memory (user_id={}, query_len={}, hits={})",
            user_id,
            query.len(),
            hits.len()
        );
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::{Mem0Client, MemoryStore};
    use crate::error::MemoryError;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn add_posts_user_message_with_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/memories/"))
            .and(header("authorization", "Token mem0-key"))
            .and(body_partial_json(json!({
                "messages": [{ "role": "user", "content": "I fed the cat" }],
                "user_id": "u1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Mem0Client::new(server.uri(), "mem0-key");
        client.add("u1", "I fed the cat").await.expect("add");
    }

    #[tokio::test]
    async fn search_decodes_hits_in_returned_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/memories/search/"))
            .and(body_partial_json(json!({ "query": "cat", "user_id": "u1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "m-2", "memory": "The cat is named Mio", "score": 0.91 },
                { "id": "m-1", "memory": "Feeds the cat at noon" },
            ])))
            .mount(&server)
            .await;

        let client = Mem0Client::new(server.uri(), "mem0-key");
        let hits = client.search("u1", "cat").await.expect("search");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].memory, "The cat is named Mio".to_string());
        assert_eq!(hits[0].score, Some(0.91));
        assert_eq!(hits[1].id, "m-1".to_string());
        assert_eq!(hits[1].score, None);
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/memories/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = Mem0Client::new(server.uri(), "mem0-key");
        let err = client.add("u1", "note").await.expect_err("status");
        match err {
            MemoryError::Status(status) => assert_eq!(status, 503),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = Mem0Client::new("https://api.mem0.ai/", "k");
        assert_eq!(client.base_url, "https://api.mem0.ai".to_string());
    }
}
