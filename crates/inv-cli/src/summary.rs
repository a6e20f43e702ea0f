use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inv_cli::types::{CleanResult, IssueCount};

/// Issue rows shown before the list is cut off.
const MAX_ISSUE_ROWS: usize = 15;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!("Extractor: {}", result.extractor);
    print_output_line("Clean table", result.outputs.clean.as_ref());
    print_output_line("Enriched table", result.outputs.enriched.as_ref());
    print_output_line("Anomalies", result.outputs.anomalies.as_ref());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Valid %"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for summary in &result.fields {
        table.add_row(vec![
            Cell::new(summary.field.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.valid),
            count_cell(summary.invalid, Color::Red),
            dim_cell(percent(summary.valid, summary.valid + summary.invalid)),
        ]);
    }
    table.add_row(vec![
        Cell::new("RECORDS")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.records).add_attribute(Attribute::Bold),
        count_cell(result.rows_with_issues, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell(percent(
            result.records - result.rows_with_issues,
            result.records,
        )),
    ]);
    println!("{table}");
    print_issue_table(&result.issues);
}

fn print_issue_table(issues: &[IssueCount]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Issue"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in issues.iter().take(MAX_ISSUE_ROWS) {
        table.add_row(vec![
            Cell::new(issue.field.as_str()),
            Cell::new(&issue.code),
            count_cell(issue.count, Color::Red),
        ]);
    }
    if issues.len() > MAX_ISSUE_ROWS {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(format!("{} more", issues.len() - MAX_ISSUE_ROWS)),
            dim_cell("-"),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn print_output_line(label: &str, path: Option<&PathBuf>) {
    match path {
        Some(path) => println!("{label}: {}", path.display()),
        None => println!("{label}: -"),
    }
}

fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format!("{:.1}", part as f64 * 100.0 / total as f64)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
