// file: src/pipeline/engine.rs
// description: query context owning the corpus, embedder, ranker and synthesizer
// reference: application bootstrap and orchestration

use crate::classifier::DomainClassifier;
use crate::config::Config;
use crate::database::EmbeddingProvider;
use crate::error::Result;
use crate::models::{Answer, Corpus, EvidenceItem, QueryDomain};
use crate::retrieval::{EvidenceRanker, RankingPolicy};
use crate::synthesis::AnswerSynthesizer;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Answer plus the evidence it was built from, for independent display.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub question: String,
    pub domain: QueryDomain,
    pub answer: Answer,
    pub evidence: Vec<EvidenceItem>,
}

/// Loaded once by the caller and reused across questions.
pub struct QueryEngine<E> {
    corpus: Corpus,
    embedder: E,
    ranker: EvidenceRanker,
    synthesizer: AnswerSynthesizer,
    policy: RankingPolicy,
}

impl<E: EmbeddingProvider> QueryEngine<E> {
    pub fn new(corpus: Corpus, embedder: E, config: &Config) -> Self {
        Self {
            corpus,
            embedder,
            ranker: EvidenceRanker::new(DomainClassifier::from_config(&config.classification)),
            synthesizer: AnswerSynthesizer::new(&config.synthesis),
            policy: RankingPolicy::from(&config.retrieval),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn policy(&self) -> RankingPolicy {
        self.policy
    }

    pub fn classify_query(&self, query: &str) -> QueryDomain {
        self.ranker.classifier().classify_query(query)
    }

    pub fn classify_source(&self, source_name: &str) -> QueryDomain {
        self.ranker.classifier().classify_source(source_name)
    }

    /// Ranked evidence for `query` under the engine's default policy.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<EvidenceItem>> {
        self.retrieve_with(query, self.policy).await
    }

    pub async fn retrieve_with(
        &self,
        query: &str,
        policy: RankingPolicy,
    ) -> Result<Vec<EvidenceItem>> {
        self.ranker
            .retrieve(&self.embedder, &self.corpus, query, policy)
            .await
    }

    pub fn synthesize(&self, question: &str, evidence: &[EvidenceItem]) -> Answer {
        self.synthesizer.synthesize(question, evidence)
    }

    pub async fn ask(&self, question: &str) -> Result<QueryOutcome> {
        self.ask_with(question, self.policy).await
    }

    /// Retrieve evidence for `question` and synthesize an answer from it.
    pub async fn ask_with(&self, question: &str, policy: RankingPolicy) -> Result<QueryOutcome> {
        let start = Instant::now();

        let evidence = self.retrieve_with(question, policy).await?;
        let answer = self.synthesize(question, &evidence);

        info!(
            "Answered in {} ms with {} evidence item(s)",
            start.elapsed().as_millis(),
            evidence.len()
        );

        Ok(QueryOutcome {
            question: question.to_string(),
            domain: self.classify_query(question),
            answer,
            evidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::models::{CorpusEntry, SectionMetadata};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedEmbedder {
        vector: Vec<f32>,
        calls: AtomicUsize,
    }

    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts.iter().map(|_| self.vector.clone()).collect())
        }
    }

    struct FailingEmbedder;

    impl EmbeddingProvider for FailingEmbedder {
        async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Err(PipelineError::Embedding("model offline".to_string()))
        }
    }

    fn nda_corpus() -> Corpus {
        Corpus::new(vec![CorpusEntry::new(
            vec![1.0, 0.0],
            SectionMetadata {
                source_file: "agreement.pdf".to_string(),
                text: "The receiving party shall keep confidential information secret at all times."
                    .to_string(),
                title: None,
            },
        )])
    }

    #[tokio::test]
    async fn test_ask_returns_answer_and_evidence() {
        let embedder = FixedEmbedder {
            vector: vec![1.0, 0.0],
            calls: AtomicUsize::new(0),
        };
        let engine = QueryEngine::new(nda_corpus(), embedder, &Config::default_config());

        let outcome = engine.ask("What does the NDA require?").await.unwrap();
        assert_eq!(outcome.domain, QueryDomain::Legal);
        assert_eq!(outcome.evidence.len(), 1);
        assert!(outcome.answer.is_summary());
        assert_eq!(engine.embedder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_corpus_skips_embedding() {
        let embedder = FixedEmbedder {
            vector: vec![1.0, 0.0],
            calls: AtomicUsize::new(0),
        };
        let engine = QueryEngine::new(Corpus::default(), embedder, &Config::default_config());

        let outcome = engine.ask("anything").await.unwrap();
        assert!(outcome.evidence.is_empty());
        assert_eq!(outcome.answer, Answer::NoEvidence);
        assert_eq!(engine.embedder.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let engine = QueryEngine::new(nda_corpus(), FailingEmbedder, &Config::default_config());

        let err = engine.ask("What does the NDA require?").await.unwrap_err();
        assert!(matches!(err, PipelineError::Embedding(msg) if msg == "model offline"));
    }
}
