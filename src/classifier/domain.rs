// file: src/classifier/domain.rs
// description: query and source domain classification
// reference: configurable keyword-based classification

use crate::config::{ClassificationConfig, DomainRule};
use crate::models::QueryDomain;

/// Maps text to a [`QueryDomain`] using ordered keyword tables.
///
/// Rules are evaluated in order and the first rule with any keyword
/// contained in the lower-cased input wins. Inputs matching no rule are
/// [`QueryDomain::General`].
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    query_rules: Vec<DomainRule>,
    source_rules: Vec<DomainRule>,
}

impl DomainClassifier {
    pub fn new(query_rules: Vec<DomainRule>, source_rules: Vec<DomainRule>) -> Self {
        Self {
            query_rules: lowercase_rules(query_rules),
            source_rules: lowercase_rules(source_rules),
        }
    }

    /// Build from configuration, keeping the built-in table for any side left empty.
    pub fn from_config(config: &ClassificationConfig) -> Self {
        let query_rules = if config.query_rules.is_empty() {
            default_query_rules()
        } else {
            config.query_rules.clone()
        };
        let source_rules = if config.source_rules.is_empty() {
            default_source_rules()
        } else {
            config.source_rules.clone()
        };

        Self::new(query_rules, source_rules)
    }

    pub fn classify_query(&self, query: &str) -> QueryDomain {
        first_match(&self.query_rules, query)
    }

    pub fn classify_source(&self, source_name: &str) -> QueryDomain {
        first_match(&self.source_rules, source_name)
    }
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new(default_query_rules(), default_source_rules())
    }
}

pub fn default_query_rules() -> Vec<DomainRule> {
    vec![
        DomainRule::new(
            QueryDomain::Legal,
            &["agreement", "nda", "contract", "clause", "party", "confidential"],
        ),
        DomainRule::new(
            QueryDomain::Medical,
            &["diabetes", "disease", "patient", "treatment", "health"],
        ),
        DomainRule::new(
            QueryDomain::Data,
            &["employee", "salary", "dataset", "record"],
        ),
    ]
}

pub fn default_source_rules() -> Vec<DomainRule> {
    vec![
        DomainRule::new(QueryDomain::Legal, &["agreement", "nda", "contract"]),
        DomainRule::new(QueryDomain::Medical, &["diabetes", "research"]),
        DomainRule::new(QueryDomain::Data, &["employee", "data"]),
    ]
}

fn lowercase_rules(rules: Vec<DomainRule>) -> Vec<DomainRule> {
    rules
        .into_iter()
        .map(|rule| DomainRule {
            domain: rule.domain,
            keywords: rule.keywords.iter().map(|k| k.to_lowercase()).collect(),
        })
        .collect()
}

fn first_match(rules: &[DomainRule], text: &str) -> QueryDomain {
    let lowered = text.to_lowercase();

    for rule in rules {
        if rule.keywords.iter().any(|k| lowered.contains(k.as_str())) {
            return rule.domain;
        }
    }

    QueryDomain::General
}
