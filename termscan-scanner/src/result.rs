use serde::{Deserialize, Serialize};

/// A fetched page: requested URL, HTTP status, raw response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageCapture {
    pub url: String,
    pub status_code: u16,
    pub body: String,
}

impl PageCapture {
    pub fn new(url: String, status_code: u16, body: String) -> Self {
        Self {
            url,
            status_code,
            body,
        }
    }
}

/// Same-site links collected from one seed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkHarvest {
    pub seed: String,
    pub links: Vec<String>,
}

impl LinkHarvest {
    pub fn new(seed: String) -> Self {
        Self {
            seed,
            links: Vec::new(),
        }
    }
}
