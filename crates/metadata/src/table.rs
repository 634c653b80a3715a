use crate::error::{MetadataError, MetadataResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use url::Url;

/// Path of a table's detail page. Inputs are used as-is, nothing is encoded.
pub fn table_url(cluster: &str, database: &str, schema: &str, table_name: &str) -> String {
    format!("/table_detail/{cluster}/{database}/{schema}/{table_name}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRef {
    pub cluster: String,
    pub database: String,
    pub schema: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_description: Option<String>,
}

impl TableRef {
    pub fn url(&self) -> String {
        table_url(&self.cluster, &self.database, &self.schema, &self.name)
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

/// Catalog resource key of a table: `{database}://{cluster}.{schema}/{table}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableKey {
    pub database: String,
    pub cluster: String,
    pub schema: String,
    pub table: String,
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<database>[^:/]+)://(?P<cluster>[^./]+)\.(?P<schema>[^/]+)/(?P<table>[^/]+)$")
            .expect("table key pattern compiles")
    })
}

impl TableKey {
    pub fn parse(key: &str) -> MetadataResult<Self> {
        let caps = key_pattern()
            .captures(key.trim())
            .ok_or_else(|| MetadataError::InvalidKey(key.to_string()))?;
        Ok(Self {
            database: caps["database"].to_string(),
            cluster: caps["cluster"].to_string(),
            schema: caps["schema"].to_string(),
            table: caps["table"].to_string(),
        })
    }

    pub fn url(&self) -> String {
        table_url(&self.cluster, &self.database, &self.schema, &self.table)
    }

    pub fn absolute_url(&self, host: &str) -> MetadataResult<Url> {
        Ok(Url::parse(host)?.join(&self.url())?)
    }

    pub fn to_table_ref(&self) -> TableRef {
        TableRef {
            cluster: self.cluster.clone(),
            database: self.database.clone(),
            schema: self.schema.clone(),
            name: self.table.clone(),
            description: None,
            schema_description: None,
        }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}.{}/{}",
            self.database, self.cluster, self.schema, self.table
        )
    }
}
