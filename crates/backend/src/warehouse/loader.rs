use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use contracts::warehouse::{CellValue, TableSnapshot, WarehouseTable};
use once_cell::sync::OnceCell;
use sea_orm::{
    Database, DatabaseBackend, DatabaseConnection, FromQueryResult, JsonValue, Statement,
};

use super::error::DataAccessError;

static LOADER: OnceCell<TableLoader> = OnceCell::new();

/// Install the process-wide loader. Called once at startup with the
/// configured warehouse path.
pub fn initialize_loader(db_path: impl Into<PathBuf>) -> anyhow::Result<()> {
    LOADER
        .set(TableLoader::new(db_path))
        .map_err(|_| anyhow::anyhow!("Failed to set LOADER"))
}

pub fn loader() -> &'static TableLoader {
    LOADER
        .get()
        .expect("Table loader has not been initialized")
}

/// Read-only access to the warehouse file with per-table memoization.
///
/// The cache is an explicit map from table to its materialized snapshot.
/// Entries live until `clear_cache` or process exit; the warehouse file
/// is treated as externally immutable during a session.
pub struct TableLoader {
    db_path: PathBuf,
    cache: RwLock<HashMap<WarehouseTable, Arc<TableSnapshot>>>,
}

#[derive(Debug, FromQueryResult)]
struct ColumnInfo {
    name: String,
}

impl TableLoader {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Load the full contents of `table`, serving repeats from the cache.
    ///
    /// Only successful reads are cached; a failure is reported once per
    /// invocation and the caller may simply re-invoke.
    pub async fn load(
        &self,
        table: WarehouseTable,
    ) -> Result<Arc<TableSnapshot>, DataAccessError> {
        {
            let cache = self.cache.read().expect("warehouse cache lock poisoned");
            if let Some(snapshot) = cache.get(&table) {
                tracing::debug!("cache hit for {}", table);
                return Ok(Arc::clone(snapshot));
            }
        }

        let snapshot = Arc::new(self.read_table(table).await?);

        // Two concurrent first reads of one table may race to this point;
        // both snapshots are identical and the last insert wins.
        let mut cache = self.cache.write().expect("warehouse cache lock poisoned");
        cache.insert(table, Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop every cached snapshot. Returns how many entries were evicted.
    pub fn clear_cache(&self) -> usize {
        let mut cache = self.cache.write().expect("warehouse cache lock poisoned");
        let evicted = cache.len();
        cache.clear();
        evicted
    }

    /// One scoped read: open, scan, close. The connection is closed on
    /// the failure path as well, before the error is returned.
    async fn read_table(&self, table: WarehouseTable) -> Result<TableSnapshot, DataAccessError> {
        if !self.db_path.exists() {
            return Err(DataAccessError::new(
                "database file not found",
                &self.db_path,
            ));
        }

        let url = sqlite_read_url(&self.db_path);
        let db = Database::connect(&url)
            .await
            .map_err(|e| DataAccessError::new(e, &self.db_path))?;

        let scanned = scan_table(&db, table).await;
        if let Err(e) = db.close().await {
            tracing::warn!("failed to close warehouse connection: {}", e);
        }

        let snapshot = scanned.map_err(|e| DataAccessError::new(e, &self.db_path))?;
        tracing::info!(
            "loaded {}: {} rows, {} columns",
            table,
            snapshot.row_count,
            snapshot.column_count
        );
        Ok(snapshot)
    }
}

/// Full unfiltered projection of one table, materialized into a snapshot.
/// The identifier comes from the closed enumeration, never from a caller.
async fn scan_table(
    db: &DatabaseConnection,
    table: WarehouseTable,
) -> anyhow::Result<TableSnapshot> {
    // Schema-ordered column list; an empty result means the table is
    // absent from the file.
    let pragma = format!("PRAGMA table_info('{}');", table.table_name());
    let columns =
        ColumnInfo::find_by_statement(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .all(db)
            .await?;

    if columns.is_empty() {
        anyhow::bail!("no such table: {}", table.table_name());
    }

    let columns: Vec<String> = columns.into_iter().map(|c| c.name).collect();

    let select = format!("SELECT * FROM {}", table.table_name());
    let raw_rows =
        JsonValue::find_by_statement(Statement::from_string(DatabaseBackend::Sqlite, select))
            .all(db)
            .await?;

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    row.get(column.as_str())
                        .map(CellValue::from)
                        .unwrap_or(CellValue::Null)
                })
                .collect()
        })
        .collect();

    Ok(TableSnapshot::new(table, columns, rows))
}

/// sqlite URL in read-only mode; the warehouse file is never written.
fn sqlite_read_url(path: &Path) -> String {
    // Normalize separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=ro", prefix, normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ConnectionTrait;
    use tempfile::TempDir;

    async fn exec(db: &DatabaseConnection, sql: &str) {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await
        .unwrap();
    }

    async fn open_rw(path: &Path) -> DatabaseConnection {
        let normalized = path.to_string_lossy().replace('\\', "/");
        let url = format!("sqlite://{}?mode=rwc", normalized);
        Database::connect(&url).await.unwrap()
    }

    /// Builds a small but complete warehouse file with all four tables.
    async fn seed_warehouse(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("olist_dw.db");
        let db = open_rw(&path).await;

        exec(
            &db,
            "CREATE TABLE fact_sales (order_id TEXT, customer_id TEXT, price REAL, freight_value REAL)",
        )
        .await;
        exec(
            &db,
            "INSERT INTO fact_sales VALUES ('o1', 'c1', 59.9, 8.72), ('o2', 'c2', 129.5, 19.22)",
        )
        .await;

        exec(
            &db,
            "CREATE TABLE dim_customer (customer_id TEXT, city TEXT, state TEXT)",
        )
        .await;
        exec(
            &db,
            "INSERT INTO dim_customer VALUES \
             ('c1', 'sao paulo', 'SP'), ('c2', 'campinas', 'SP'), ('c3', 'rio de janeiro', 'RJ')",
        )
        .await;

        exec(
            &db,
            "CREATE TABLE dim_product (product_id TEXT, category TEXT, weight_g INTEGER)",
        )
        .await;
        exec(
            &db,
            "INSERT INTO dim_product VALUES \
             ('p1', 'toys', 700), ('p2', 'auto', 3100), ('p3', 'housewares', NULL), \
             ('p4', 'toys', 450), ('p5', 'garden', 9800)",
        )
        .await;

        exec(
            &db,
            "CREATE TABLE dim_inflation (month TEXT, ipca_index REAL)",
        )
        .await;
        exec(
            &db,
            "INSERT INTO dim_inflation VALUES ('2017-01', 0.38), ('2017-02', 0.33)",
        )
        .await;

        db.close().await.unwrap();
        path
    }

    #[tokio::test]
    async fn loads_every_table_with_true_counts() {
        let dir = TempDir::new().unwrap();
        let path = seed_warehouse(&dir).await;
        let loader = TableLoader::new(&path);

        let expected = [
            (WarehouseTable::FactSales, 2, 4),
            (WarehouseTable::DimCustomer, 3, 3),
            (WarehouseTable::DimProduct, 5, 3),
            (WarehouseTable::DimInflation, 2, 2),
        ];
        for (table, rows, cols) in expected {
            let snapshot = loader.load(table).await.unwrap();
            assert_eq!(snapshot.row_count, rows, "row count of {}", table);
            assert_eq!(snapshot.column_count, cols, "column count of {}", table);
        }
    }

    #[tokio::test]
    async fn column_order_and_cell_types_follow_schema() {
        let dir = TempDir::new().unwrap();
        let path = seed_warehouse(&dir).await;
        let loader = TableLoader::new(&path);

        let snapshot = loader.load(WarehouseTable::DimProduct).await.unwrap();
        assert_eq!(snapshot.columns, vec!["product_id", "category", "weight_g"]);
        assert_eq!(snapshot.rows[0][0], CellValue::Text("p1".to_string()));
        assert_eq!(snapshot.rows[0][2], CellValue::Integer(700));
        assert_eq!(snapshot.rows[2][2], CellValue::Null);
    }

    #[tokio::test]
    async fn repeated_loads_are_served_from_cache() {
        let dir = TempDir::new().unwrap();
        let path = seed_warehouse(&dir).await;
        let loader = TableLoader::new(&path);

        let first = loader.load(WarehouseTable::DimCustomer).await.unwrap();
        let second = loader.load(WarehouseTable::DimCustomer).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.row_count, second.row_count);
        assert_eq!(first.column_count, second.column_count);
        assert_eq!(*first, *second);
    }

    #[tokio::test]
    async fn clear_cache_forces_a_fresh_read() {
        let dir = TempDir::new().unwrap();
        let path = seed_warehouse(&dir).await;
        let loader = TableLoader::new(&path);

        let before = loader.load(WarehouseTable::DimInflation).await.unwrap();
        assert_eq!(before.row_count, 2);

        let db = open_rw(&path).await;
        exec(&db, "INSERT INTO dim_inflation VALUES ('2017-03', 0.25)").await;
        db.close().await.unwrap();

        // Still the memoized snapshot
        let cached = loader.load(WarehouseTable::DimInflation).await.unwrap();
        assert_eq!(cached.row_count, 2);

        assert_eq!(loader.clear_cache(), 1);

        let after = loader.load(WarehouseTable::DimInflation).await.unwrap();
        assert_eq!(after.row_count, 3);
    }

    #[tokio::test]
    async fn missing_file_reports_expected_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("olist_dw.db");
        let loader = TableLoader::new(&path);

        let err = loader.load(WarehouseTable::FactSales).await.unwrap_err();
        assert!(err.to_string().contains("olist_dw.db"));
        assert!(err.to_string().contains("database file not found"));
    }

    #[tokio::test]
    async fn absent_table_reports_cause() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("olist_dw.db");
        let db = open_rw(&path).await;
        exec(&db, "CREATE TABLE fact_sales (order_id TEXT)").await;
        db.close().await.unwrap();

        let loader = TableLoader::new(&path);
        let err = loader.load(WarehouseTable::DimProduct).await.unwrap_err();
        assert!(err.to_string().contains("no such table: dim_product"));
    }
}
