use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One JSON object of the document. Key order is kept as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct ProjectionResult {
    pub records: Vec<Record>,
    pub source_count: usize,
}
