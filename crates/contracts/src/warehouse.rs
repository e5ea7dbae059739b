use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of warehouse tables the dashboard may browse.
///
/// Only members of this enumeration are ever interpolated into a query;
/// `table_name` is the allow-list lookup that yields the pre-validated
/// SQL identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseTable {
    FactSales,
    DimCustomer,
    DimProduct,
    DimInflation,
}

impl WarehouseTable {
    /// Every table, in the order the UI selector offers them.
    pub const ALL: [WarehouseTable; 4] = [
        WarehouseTable::FactSales,
        WarehouseTable::DimCustomer,
        WarehouseTable::DimProduct,
        WarehouseTable::DimInflation,
    ];

    /// SQL identifier of the table. The only value that ever reaches a
    /// query string.
    pub fn table_name(&self) -> &'static str {
        match self {
            WarehouseTable::FactSales => "fact_sales",
            WarehouseTable::DimCustomer => "dim_customer",
            WarehouseTable::DimProduct => "dim_product",
            WarehouseTable::DimInflation => "dim_inflation",
        }
    }

    /// Display name for selectors and metric tiles.
    pub fn label(&self) -> &'static str {
        match self {
            WarehouseTable::FactSales => "Sales facts",
            WarehouseTable::DimCustomer => "Customer dimension",
            WarehouseTable::DimProduct => "Product dimension",
            WarehouseTable::DimInflation => "Inflation dimension",
        }
    }
}

impl fmt::Display for WarehouseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Error returned when a string is not a member of the closed table set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTableError(pub String);

impl fmt::Display for UnknownTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown warehouse table: '{}'", self.0)
    }
}

impl std::error::Error for UnknownTableError {}

impl FromStr for WarehouseTable {
    type Err = UnknownTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.table_name() == s)
            .ok_or_else(|| UnknownTableError(s.to_string()))
    }
}

/// A single cell of a materialized table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Numeric value
    Number(f64),
    /// Null value
    Null,
}

impl CellValue {
    /// Textual representation used both for CSV fields and table cells.
    /// `Null` renders as the empty string.
    pub fn as_display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Null => String::new(),
        }
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Integer(*b as i64),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else {
                    CellValue::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            // Arrays/objects do not occur in warehouse rows; keep them readable
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Full contents of one warehouse table at read time.
///
/// Immutable once produced; counts are stored at construction so callers
/// never re-scan the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub table: WarehouseTable,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub row_count: usize,
    pub column_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl TableSnapshot {
    pub fn new(table: WarehouseTable, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let row_count = rows.len();
        let column_count = columns.len();
        Self {
            table,
            columns,
            rows,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_round_trip_through_from_str() {
        for table in WarehouseTable::ALL {
            let parsed: WarehouseTable = table.table_name().parse().unwrap();
            assert_eq!(parsed, table);
        }
    }

    #[test]
    fn from_str_rejects_non_members() {
        assert!("fact_sales; DROP TABLE fact_sales".parse::<WarehouseTable>().is_err());
        assert!("orders".parse::<WarehouseTable>().is_err());
        assert!("".parse::<WarehouseTable>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_table_keys() {
        let json = serde_json::to_string(&WarehouseTable::DimProduct).unwrap();
        assert_eq!(json, "\"dim_product\"");
        let back: WarehouseTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WarehouseTable::DimProduct);
    }

    #[test]
    fn cell_value_from_json_preserves_integers() {
        assert_eq!(
            CellValue::from(&serde_json::json!(42)),
            CellValue::Integer(42)
        );
        assert_eq!(
            CellValue::from(&serde_json::json!(2.5)),
            CellValue::Number(2.5)
        );
        assert_eq!(
            CellValue::from(&serde_json::json!("sp")),
            CellValue::Text("sp".to_string())
        );
        assert_eq!(CellValue::from(&serde_json::Value::Null), CellValue::Null);
    }

    #[test]
    fn snapshot_counts_match_shape() {
        let snapshot = TableSnapshot::new(
            WarehouseTable::DimProduct,
            vec!["id".into(), "category".into(), "weight_g".into()],
            vec![
                vec![
                    CellValue::Integer(1),
                    CellValue::Text("toys".into()),
                    CellValue::Number(120.0),
                ],
                vec![
                    CellValue::Integer(2),
                    CellValue::Text("auto".into()),
                    CellValue::Null,
                ],
            ],
        );
        assert_eq!(snapshot.row_count, 2);
        assert_eq!(snapshot.column_count, 3);
    }
}
