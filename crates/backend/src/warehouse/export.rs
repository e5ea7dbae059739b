use contracts::warehouse::TableSnapshot;

/// Serialize a snapshot to UTF-8 CSV bytes: header row of column names,
/// one record per data row, RFC 4180 quoting for embedded delimiters.
pub fn to_csv_bytes(snapshot: &TableSnapshot) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&snapshot.columns)?;
    for row in &snapshot.rows {
        writer.write_record(row.iter().map(|cell| cell.as_display()))?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to finish csv buffer: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::warehouse::{CellValue, WarehouseTable};

    fn product_snapshot() -> TableSnapshot {
        TableSnapshot::new(
            WarehouseTable::DimProduct,
            vec![
                "product_id".to_string(),
                "category".to_string(),
                "weight_g".to_string(),
            ],
            vec![
                vec![
                    CellValue::Text("p1".into()),
                    CellValue::Text("toys".into()),
                    CellValue::Integer(700),
                ],
                vec![
                    CellValue::Text("p2".into()),
                    CellValue::Text("auto".into()),
                    CellValue::Integer(3100),
                ],
                vec![
                    CellValue::Text("p3".into()),
                    CellValue::Text("housewares".into()),
                    CellValue::Null,
                ],
                vec![
                    CellValue::Text("p4".into()),
                    CellValue::Text("toys".into()),
                    CellValue::Integer(450),
                ],
                vec![
                    CellValue::Text("p5".into()),
                    CellValue::Text("garden".into()),
                    CellValue::Number(9800.5),
                ],
            ],
        )
    }

    #[test]
    fn export_has_header_plus_one_line_per_row() {
        let bytes = to_csv_bytes(&product_snapshot()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("product_id,category,weight_g\n"));
    }

    #[test]
    fn export_round_trips_through_a_csv_reader() {
        let snapshot = product_snapshot();
        let bytes = to_csv_bytes(&snapshot).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(headers, snapshot.columns);

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), snapshot.row_count);
        for (record, row) in records.iter().zip(&snapshot.rows) {
            assert_eq!(record.len(), snapshot.column_count);
            for (field, cell) in record.iter().zip(row) {
                assert_eq!(field, cell.as_display());
            }
        }
    }

    #[test]
    fn embedded_delimiters_survive_quoting() {
        let snapshot = TableSnapshot::new(
            WarehouseTable::DimCustomer,
            vec!["customer_id".to_string(), "city".to_string()],
            vec![vec![
                CellValue::Text("c1".into()),
                CellValue::Text("sao paulo, \"centro\"\nzona sul".into()),
            ]],
        );

        let bytes = to_csv_bytes(&snapshot).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[1], "sao paulo, \"centro\"\nzona sul");
    }

    #[test]
    fn empty_table_exports_header_only() {
        let snapshot = TableSnapshot::new(
            WarehouseTable::FactSales,
            vec!["order_id".to_string(), "price".to_string()],
            vec![],
        );
        let bytes = to_csv_bytes(&snapshot).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "order_id,price\n");
    }
}
