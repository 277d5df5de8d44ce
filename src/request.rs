//! Search requests handed to the card-search API client.
//!
//! A [`SearchRequest`] is the contract between query extraction and the
//! component that issues the HTTP request: the filter text plus the merged
//! settings. Issuing the request is the caller's job.

use serde::{Deserialize, Serialize};

use crate::engine::{Domain, Query, QueryDocument};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<String>,
}

impl SearchRequest {
    /// Combine a query with the document's domain. Query settings override
    /// domain settings key by key.
    pub fn from_query(query: &Query, domain: Option<&Domain>) -> Self {
        let local = query.body.merged_text_no_setting.trim();
        let (q, settings) = match domain {
            Some(domain) => {
                let shared = domain.merged_text_no_setting.trim();
                let q = match (shared.is_empty(), local.is_empty()) {
                    (true, _) => local.to_string(),
                    (false, true) => shared.to_string(),
                    (false, false) => format!("({shared}) ({local})"),
                };
                (q, query.body.settings.inherit_from(&domain.settings))
            }
            None => (local.to_string(), query.body.settings.clone()),
        };
        Self {
            q,
            order: settings.order,
            dir: settings.dir,
            unique: settings.unique,
        }
    }

    /// URL parameters, `q` first, unset settings omitted.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];
        for (key, value) in [
            ("order", &self.order),
            ("dir", &self.dir),
            ("unique", &self.unique),
        ] {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }
}

impl QueryDocument {
    /// One request per query, in document order.
    pub fn search_requests(&self) -> Vec<SearchRequest> {
        self.queries
            .iter()
            .map(|query| SearchRequest::from_query(query, self.domain.as_ref()))
            .collect()
    }
}
