use crate::model::{ConsolidatedResult, ExtractedTable};

/// Concatenate all detected tables of one document into a single result.
///
/// Purely positional: rows are appended in table order then row order,
/// columns are aligned by index. No deduplication, reordering, or
/// schema-aware merging. Zero input tables yield an empty result.
pub fn consolidate(tables: Vec<ExtractedTable>) -> ConsolidatedResult {
    let mut rows = Vec::new();
    for table in tables {
        rows.extend(table.rows);
    }
    ConsolidatedResult::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> ExtractedTable {
        ExtractedTable {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn preserves_table_then_row_order() {
        let result = consolidate(vec![
            table(&[&["a1", "a2"], &["b1", "b2"]]),
            table(&[&["c1", "c2"]]),
        ]);
        assert_eq!(result.row_count(), 3);
        assert_eq!(result.rows()[0], vec!["a1", "a2"]);
        assert_eq!(result.rows()[1], vec!["b1", "b2"]);
        assert_eq!(result.rows()[2], vec!["c1", "c2"]);
    }

    #[test]
    fn pads_narrow_tables_with_empty_cells() {
        let result = consolidate(vec![
            table(&[&["x", "y", "z"]]),
            table(&[&["only"]]),
        ]);
        assert_eq!(result.column_count(), 3);
        assert_eq!(result.rows()[1], vec!["only", "", ""]);
    }

    #[test]
    fn zero_tables_yield_empty_result() {
        let result = consolidate(vec![]);
        assert!(result.is_empty());
    }
}
