//! Grouping of structurally identical requests
//!
//! Requests in one folder that share method, URL and headers but send
//! different JSON bodies are emitted as a single table-driven test.

use indexmap::IndexMap;
use serde_json::Value;

use crate::models::collection::Item;

/// Requests sharing (method, URL, headers), with their distinct bodies as rows
#[derive(Debug, Clone, PartialEq)]
pub struct TestGroup {
    /// Uppercased HTTP method
    pub method: String,
    /// Raw URL, placeholders untouched
    pub url: String,
    pub headers: IndexMap<String, String>,
    /// Positions of the member requests in the folder's item list
    pub members: Vec<usize>,
    /// Distinct parsed bodies, in member order
    pub rows: Vec<Value>,
}

impl TestGroup {
    pub fn covers(&self, position: usize) -> bool {
        self.members.contains(&position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    method: String,
    url: String,
    headers: String,
}

/// Partition the request children of a folder by (method, URL, headers).
///
/// Only requests with a JSON body take part; a body that fails to parse is
/// reported and the request is left for individual emission. Groups with a
/// single member are dropped.
pub fn group_by_body(items: &[Item]) -> Vec<TestGroup> {
    let mut groups: IndexMap<GroupKey, TestGroup> = IndexMap::new();

    for (position, item) in items.iter().enumerate() {
        let Item::Request(request_item) = item else {
            continue;
        };
        let Some((method, url)) = request_item.endpoint() else {
            continue;
        };
        let Some(request) = request_item.request.as_ref() else {
            continue;
        };
        let Some(raw) = request.raw_body() else {
            continue;
        };

        let body: Value = match serde_json::from_str(raw) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    request = %request_item.name,
                    error = %e,
                    "Request body is not valid JSON; excluded from grouping"
                );
                continue;
            }
        };

        let headers = request.headers();
        let key = GroupKey {
            method: method.to_uppercase(),
            url: url.to_string(),
            headers: serde_json::to_string(&headers).unwrap_or_default(),
        };

        let group = groups.entry(key).or_insert_with(|| TestGroup {
            method: method.to_uppercase(),
            url: url.to_string(),
            headers,
            members: Vec::new(),
            rows: Vec::new(),
        });
        group.members.push(position);
        if !group.rows.contains(&body) {
            group.rows.push(body);
        }
    }

    groups
        .into_values()
        .filter(|group| group.members.len() >= 2)
        .collect()
}
