use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;

use super::FetchOptions;
use crate::record::PageRecord;

const PAGE_SIZE: u32 = 100;

const SEARCH_QUERY: &str = r#"
query Search($after: String, $first: Int, $query: String) {
    search(after: $after, first: $first, query: $query) {
        ... on SearchError {
            errorCodes
        }
        ... on SearchSuccess {
            edges {
                cursor
                node {
                    url
                    id
                }
            }
            pageInfo {
                hasNextPage
            }
        }
    }
}
"#;

#[derive(Deserialize)]
struct GraphqlResponse {
    data: SearchData,
}

#[derive(Deserialize)]
struct SearchData {
    search: SearchResult,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResult {
    Success {
        edges: Vec<SearchEdge>,
        #[serde(rename = "pageInfo")]
        page_info: PageInfo,
    },
    Error {
        #[serde(rename = "errorCodes")]
        error_codes: Vec<String>,
    },
}

#[derive(Deserialize)]
struct SearchEdge {
    cursor: String,
    node: PageRecord,
}

#[derive(Deserialize)]
struct PageInfo {
    #[serde(rename = "hasNextPage")]
    has_next_page: bool,
}

/// One page of search results.
pub struct SearchPage {
    pub records: Vec<PageRecord>,
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
}

/// Request a single page of results, starting after the given cursor.
pub fn search_page(
    client: &Client,
    opts: &FetchOptions,
    after: Option<&str>,
) -> Result<SearchPage> {
    let body = json!({
        "query": SEARCH_QUERY,
        "variables": {
            "after": after,
            "first": PAGE_SIZE,
            "query": opts.query,
        },
    });

    let res = client
        .post(&opts.endpoint)
        .header(AUTHORIZATION, opts.api_key.as_str())
        .json(&body)
        .send()
        .context("search request failed")?
        .error_for_status()
        .context("search request rejected")?;

    let response: GraphqlResponse = res.json().context("can't parse search response")?;

    match response.data.search {
        SearchResult::Error { error_codes } => {
            bail!("search returned errors: {}", error_codes.join(", "))
        }
        SearchResult::Success { edges, page_info } => {
            let next_cursor = edges.last().map(|edge| edge.cursor.clone());
            let records = edges.into_iter().map(|edge| edge.node).collect();

            Ok(SearchPage {
                records,
                next_cursor,
                has_next_page: page_info.has_next_page,
            })
        }
    }
}
