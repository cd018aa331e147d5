use planilha_core::model::{BatchSummary, ExtractedTable};

pub fn print_summary(summary: &BatchSummary) {
    println!(
        "Converted {} document(s) into {}",
        summary.total_documents,
        summary.output_path.display()
    );

    if !summary.sheets_written.is_empty() {
        println!("  Sheets written:");
        for name in &summary.sheets_written {
            println!("    {name}");
        }
    }

    if !summary.skipped.is_empty() {
        println!("  Skipped (no tables detected or extraction failed):");
        for name in &summary.skipped {
            println!("    {name}");
        }
    }
}

pub fn print_tables(tables: &[ExtractedTable]) {
    if tables.is_empty() {
        println!("No tables detected.");
        return;
    }

    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== Table {} ({} rows) ===", i + 1, table.rows.len());

        let widths = column_widths(table);
        for row in &table.rows {
            let line = row
                .iter()
                .enumerate()
                .map(|(c, cell)| format!("{:<width$}", cell, width = widths[c]))
                .collect::<Vec<_>>()
                .join("  ");
            println!("  {}", line.trim_end());
        }
    }
}

fn column_widths(table: &ExtractedTable) -> Vec<usize> {
    let cols = table.rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; cols];
    for row in &table.rows {
        for (c, cell) in row.iter().enumerate() {
            widths[c] = widths[c].max(cell.chars().count());
        }
    }
    widths
}
