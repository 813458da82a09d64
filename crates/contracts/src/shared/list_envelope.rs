use serde::Deserialize;

/// Response body of a list endpoint.
///
/// Some endpoints return a bare JSON array, paginated ones wrap it as
/// `{ "count": .., "next": .., "results": [..] }`. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paged {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Paged { results, .. } => results,
        }
    }

    /// Records carried in this response
    pub fn record_count(&self) -> usize {
        match self {
            ListEnvelope::Bare(items) => items.len(),
            ListEnvelope::Paged { results, .. } => results.len(),
        }
    }

    /// Server-side total, when the envelope carries one
    pub fn total(&self) -> Option<u64> {
        match self {
            ListEnvelope::Bare(items) => Some(items.len() as u64),
            ListEnvelope::Paged { count, .. } => *count,
        }
    }
}
