use crate::table::TableRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasMapping {
    pub alias: String,
    pub table: TableRef,
}

/// A WHERE clause frequently applied to a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonFilter {
    pub where_clause: String,
    #[serde(default)]
    pub alias_mapping: Vec<AliasMapping>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterSegment {
    Text(String),
    /// Column of another table, linked to that table's page.
    Link {
        table: String,
        column: String,
        url: String,
    },
}

impl FilterSegment {
    pub fn text(&self) -> String {
        match self {
            FilterSegment::Text(text) => text.clone(),
            FilterSegment::Link { table, column, .. } => format!("{table}.{column}"),
        }
    }
}

impl CommonFilter {
    /// Splits the clause on single spaces and resolves `alias.column` tokens
    /// through the alias mapping. The first matching alias wins.
    pub fn segments(&self, this_table: &str) -> Vec<FilterSegment> {
        self.where_clause
            .split(' ')
            .map(|token| {
                self.alias_mapping
                    .iter()
                    .find(|mapping| token.contains(&format!("{}.", mapping.alias)))
                    .map(|mapping| column_segment(token, &mapping.table, this_table))
                    .unwrap_or_else(|| FilterSegment::Text(token.to_string()))
            })
            .collect()
    }

    pub fn render_line(&self, this_table: &str) -> String {
        self.segments(this_table)
            .iter()
            .map(|segment| format!("{} ", segment.text()))
            .collect()
    }
}

fn column_segment(token: &str, table: &TableRef, this_table: &str) -> FilterSegment {
    let column = token.split('.').nth(1).unwrap_or_default().to_string();
    if table.name == this_table {
        FilterSegment::Text(format!("{}.{}", table.name, column))
    } else {
        FilterSegment::Link {
            table: table.name.clone(),
            column,
            url: table.url(),
        }
    }
}
