use serde::{Deserialize, Serialize};

/// One saved page as returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: String,
    pub url: String,
}
