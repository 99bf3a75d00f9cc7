//! Fallback keyword tier: a priority cascade over symptom clusters.
//!
//! The first cluster with any keyword present decides the label. Later
//! clusters are never consulted, even if they would match more keywords.

use crate::normalize::NormalizedSymptoms;
use crate::tables::KeywordCluster;

/// A cluster hit: which cluster fired and the label it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterMatch {
    pub cluster: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct KeywordTier {
    clusters: &'static [KeywordCluster],
}

impl KeywordTier {
    pub fn new(clusters: &'static [KeywordCluster]) -> Self {
        Self { clusters }
    }

    /// First matching cluster, with its escalation applied.
    pub fn find(&self, symptoms: &NormalizedSymptoms) -> Option<ClusterMatch> {
        let cluster = self
            .clusters
            .iter()
            .find(|c| symptoms.contains_any(c.keywords))?;

        let label = match cluster.escalation {
            Some(esc) if symptoms.contains(esc.keyword) => esc.label,
            _ => cluster.label,
        };

        Some(ClusterMatch {
            cluster: cluster.name,
            label,
        })
    }
}
