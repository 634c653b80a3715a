use crate::error::MetadataResult;
use crate::filters::CommonFilter;
use crate::joins::CommonJoin;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Usage metadata shown on a table's detail page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDetail {
    #[serde(default)]
    pub common_filters: Vec<CommonFilter>,
    #[serde(default)]
    pub common_joins: Vec<CommonJoin>,
}

impl TableDetail {
    pub fn load(path: &Path) -> MetadataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let detail: TableDetail = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            filters = detail.common_filters.len(),
            joins = detail.common_joins.len(),
            "Loaded table detail"
        );
        Ok(detail)
    }

    pub fn is_empty(&self) -> bool {
        self.common_filters.is_empty() && self.common_joins.is_empty()
    }
}
