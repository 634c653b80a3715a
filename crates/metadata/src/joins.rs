use crate::table::TableRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonJoin {
    pub column: String,
    pub join_sql: String,
    pub join_type: String,
    pub joined_on_table: TableRef,
    pub joined_on_column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinRow {
    pub label: &'static str,
    pub value: String,
    pub url: Option<String>,
}

impl CommonJoin {
    pub fn rows(&self) -> Vec<JoinRow> {
        let table = &self.joined_on_table;
        vec![
            JoinRow {
                label: "Column",
                value: self.column.clone(),
                url: None,
            },
            JoinRow {
                label: "Joined on",
                value: format!("{}.{}", table.qualified_name(), self.joined_on_column),
                url: Some(table.url()),
            },
            JoinRow {
                label: "How",
                value: self.join_type.clone(),
                url: None,
            },
            JoinRow {
                label: "SQL",
                value: self.join_sql.clone(),
                url: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join() -> CommonJoin {
        serde_json::from_value(serde_json::json!({
            "column": "date",
            "join_sql": "ca_covid.open_data.statewide_testing a join ca_covid.open_data.statewide_cases b on a.date = b.date",
            "join_type": "inner join",
            "joined_on_table": {
                "database": "database",
                "cluster": "cluster",
                "schema": "schema",
                "name": "table",
                "description": "desc",
                "schema_description": "desc2"
            },
            "joined_on_column": "dt"
        }))
        .unwrap()
    }

    #[test]
    fn rows_follow_display_order() {
        let labels: Vec<_> = join().rows().iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["Column", "Joined on", "How", "SQL"]);
    }

    #[test]
    fn joined_on_links_to_table() {
        let rows = join().rows();

        assert_eq!(rows[0].value, "date");
        assert_eq!(rows[1].value, "schema.table.dt");
        assert_eq!(
            rows[1].url.as_deref(),
            Some("/table_detail/cluster/database/schema/table")
        );
        assert_eq!(rows[2].value, "inner join");
        assert!(rows[3].value.starts_with("ca_covid.open_data"));
    }
}
