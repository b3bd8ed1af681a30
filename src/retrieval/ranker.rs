// file: src/retrieval/ranker.rs
// description: similarity ranking with threshold, domain gating and per-source caps
// reference: cosine scan over an in-memory vector index

use crate::classifier::DomainClassifier;
use crate::config::RetrievalConfig;
use crate::database::EmbeddingProvider;
use crate::error::{PipelineError, Result};
use crate::models::{Corpus, EvidenceItem, QueryDomain, round_score};
use crate::retrieval::similarity::{cosine_similarity, l2_norm};
use std::collections::HashMap;
use tracing::{debug, info};

/// Per-call limits applied while walking the ranked candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingPolicy {
    pub top_k: usize,
    pub min_score: f32,
    pub max_per_source: usize,
}

impl RankingPolicy {
    /// Candidates are score-sorted, so the first one under the threshold ends the scan.
    fn below_threshold(&self, score: f32) -> bool {
        score < self.min_score
    }

    /// Topical queries veto candidates from other domains; general queries accept all.
    fn domain_vetoes(query_domain: QueryDomain, candidate_domain: QueryDomain) -> bool {
        query_domain.is_topical() && candidate_domain != query_domain
    }

    fn source_exhausted(&self, accepted_from_source: usize) -> bool {
        accepted_from_source >= self.max_per_source
    }
}

impl Default for RankingPolicy {
    fn default() -> Self {
        RankingPolicy::from(&RetrievalConfig::default())
    }
}

impl From<&RetrievalConfig> for RankingPolicy {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            top_k: config.top_k,
            min_score: config.min_score,
            max_per_source: config.max_per_source,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvidenceRanker {
    classifier: DomainClassifier,
}

impl EvidenceRanker {
    pub fn new(classifier: DomainClassifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &DomainClassifier {
        &self.classifier
    }

    /// Embed `query` with a single provider call, then rank the corpus against it.
    ///
    /// An empty corpus yields an empty result without contacting the provider.
    /// Provider failures are returned as-is.
    pub async fn retrieve<E: EmbeddingProvider>(
        &self,
        embedder: &E,
        corpus: &Corpus,
        query: &str,
        policy: RankingPolicy,
    ) -> Result<Vec<EvidenceItem>> {
        if corpus.is_empty() {
            info!("Corpus is empty, no evidence to rank");
            return Ok(Vec::new());
        }

        let query_vector = embedder
            .embed(&[query.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                PipelineError::Embedding("Provider returned no vector for the query".to_string())
            })?;

        Ok(self.rank(query, &query_vector, corpus, policy))
    }

    /// Rank `corpus` against an already embedded query.
    pub fn rank(
        &self,
        query: &str,
        query_vector: &[f32],
        corpus: &Corpus,
        policy: RankingPolicy,
    ) -> Vec<EvidenceItem> {
        let query_domain = self.classifier.classify_query(query);
        let query_norm = l2_norm(query_vector);

        let mut scored: Vec<(usize, f32)> = corpus
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let score =
                    cosine_similarity(query_vector, &entry.vector, query_norm, corpus.norm(idx));
                (idx, score)
            })
            .collect();

        // Stable: equal scores keep corpus order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut results = Vec::new();
        let mut per_source: HashMap<&str, usize> = HashMap::new();
        let mut domain_skips = 0usize;
        let mut cap_skips = 0usize;

        for (idx, score) in scored {
            if results.len() >= policy.top_k {
                break;
            }
            // Threshold applies to the reported score, not the raw similarity.
            if policy.below_threshold(round_score(score)) {
                break;
            }

            let entry = &corpus.entries()[idx];
            let source = entry.source_file.as_str();

            let candidate_domain = self.classifier.classify_source(source);
            if RankingPolicy::domain_vetoes(query_domain, candidate_domain) {
                domain_skips += 1;
                continue;
            }

            let accepted = per_source.entry(source).or_insert(0);
            if policy.source_exhausted(*accepted) {
                cap_skips += 1;
                continue;
            }
            *accepted += 1;

            results.push(EvidenceItem::new(
                score,
                entry.source_file.clone(),
                entry.title.clone(),
                entry.text.clone(),
            ));
        }

        debug!(
            "Ranked query (domain: {}): {} accepted, {} domain skips, {} source-cap skips",
            query_domain,
            results.len(),
            domain_skips,
            cap_skips
        );

        results
    }
}
