use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use baac_output::{PassReport, PassStatus, RunReport};

/// Diagnostics shown per pass; the JSON report keeps the rest.
const SHOWN_DIAGNOSTICS: usize = 10;

pub fn print_summary(report: &RunReport) {
    println!(
        "BAAC {} | {} pass(es) | {} row(s) written | {} skipped",
        report.year,
        report.passes.len(),
        report.total_rows_written(),
        report.total_rows_skipped()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Status"),
        header_cell("Read"),
        header_cell("Written"),
        header_cell("Skipped"),
        header_cell("Time"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for pass in &report.passes {
        table.add_row(vec![
            Cell::new(pass.kind).add_attribute(Attribute::Bold),
            status_cell(pass.status),
            count_cell(pass.stats.rows_read, Color::Reset),
            count_cell(pass.stats.rows_written, Color::Green),
            count_cell(pass.stats.rows_skipped, Color::Yellow),
            dim_cell(format!("{} ms", pass.elapsed_ms)),
            output_cell(pass),
        ]);
    }
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    println!("{table}");

    print_problems(report);
}

fn print_problems(report: &RunReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    let mut has_rows = false;
    for pass in &report.passes {
        if let Some(error) = &pass.error {
            has_rows = true;
            table.add_row(vec![
                Cell::new(pass.kind),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(error).fg(Color::Red),
            ]);
        }
        for diagnostic in pass.stats.diagnostics.iter().take(SHOWN_DIAGNOSTICS) {
            has_rows = true;
            table.add_row(vec![
                Cell::new(pass.kind),
                Cell::new(diagnostic.row),
                Cell::new(&diagnostic.column),
                Cell::new(&diagnostic.message).fg(Color::Yellow),
            ]);
        }
        let hidden = pass.stats.rows_skipped.saturating_sub(SHOWN_DIAGNOSTICS as u64);
        if hidden > 0 {
            has_rows = true;
            table.add_row(vec![
                Cell::new(pass.kind),
                dim_cell("..."),
                dim_cell("..."),
                dim_cell(format!("{hidden} more skipped row(s)")),
            ]);
        }
    }
    if has_rows {
        align_column(&mut table, 1, CellAlignment::Right);
        println!("{table}");
    }
}

/// Failed passes that already wrote rows point at their partial output.
fn output_cell(pass: &PassReport) -> Cell {
    match pass.status {
        PassStatus::Completed => Cell::new(pass.output.display()),
        PassStatus::Failed if pass.stats.rows_written > 0 => {
            Cell::new(format!("{} (partial)", pass.output.display())).fg(Color::Yellow)
        }
        PassStatus::Failed => dim_cell("-"),
    }
}

fn status_cell(status: PassStatus) -> Cell {
    match status {
        PassStatus::Completed => Cell::new("ok")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        PassStatus::Failed => Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
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
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
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
