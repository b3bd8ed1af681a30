// file: src/database/embeddings.rs
// description: embedding provider abstraction and OpenAI-compatible HTTP client
// reference: https://platform.openai.com/docs/api-reference/embeddings

use crate::config::EmbeddingConfig;
use crate::error::{PipelineError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::debug;

/// Produces one vector per input string, in the same space as the corpus vectors.
pub trait EmbeddingProvider {
    fn embed(&self, texts: &[String]) -> impl Future<Output = Result<Vec<Vec<f32>>>> + Send;
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a [String],
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

pub struct HttpEmbeddingClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpEmbeddingClient {
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl EmbeddingProvider for HttpEmbeddingClient {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let request = EmbeddingRequest {
            input: texts,
            model: &self.model,
        };

        debug!(
            "Requesting {} embedding(s) from {} ({} chars)",
            texts.len(),
            self.endpoint,
            texts.iter().map(|t| t.len()).sum::<usize>()
        );

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request);

        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = builder.send().await.map_err(|e| {
            PipelineError::Embedding(format!("Failed to send embedding request: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PipelineError::Embedding(format!(
                "Embedding request failed with status {}: {}",
                status, error_text
            )));
        }

        let parsed: EmbeddingResponse = response.json().await.map_err(|e| {
            PipelineError::Embedding(format!("Failed to parse embedding response: {}", e))
        })?;

        let vectors = order_by_index(parsed.data);
        if vectors.len() != texts.len() {
            return Err(PipelineError::Embedding(format!(
                "Expected {} embeddings, received {}",
                texts.len(),
                vectors.len()
            )));
        }

        debug!(
            "Received {} embedding(s) of dimension {}",
            vectors.len(),
            vectors.first().map(|v| v.len()).unwrap_or(0)
        );
        Ok(vectors)
    }
}

fn order_by_index(mut data: Vec<EmbeddingData>) -> Vec<Vec<f32>> {
    data.sort_by_key(|d| d.index);
    data.into_iter().map(|d| d.embedding).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let input = vec!["What does the NDA require?".to_string()];
        let request = EmbeddingRequest {
            input: &input,
            model: "all-MiniLM-L6-v2",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "all-MiniLM-L6-v2");
        assert_eq!(json["input"][0], "What does the NDA require?");
    }

    #[test]
    fn test_response_ordered_by_index() {
        let parsed: EmbeddingResponse = serde_json::from_str(
            r#"{"data":[{"index":1,"embedding":[0.0,1.0]},{"index":0,"embedding":[1.0,0.0]}]}"#,
        )
        .unwrap();
        let vectors = order_by_index(parsed.data);
        assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let client = HttpEmbeddingClient::new(&EmbeddingConfig {
            endpoint: "http://127.0.0.1:9/v1/embeddings".to_string(),
            model: "all-MiniLM-L6-v2".to_string(),
            api_key: None,
        });

        let result = client.embed(&["query".to_string()]).await;
        assert!(matches!(result, Err(PipelineError::Embedding(_))));
    }
}
