use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cts_transform::{Diagnostic, DiagnosticCategory};

use crate::types::{ConvertResult, SubmitResult};

pub fn print_convert_summary(result: &ConvertResult) {
    println!("Export: {}", result.source.display());
    println!("Extract: {}", result.output.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Lines read"), Cell::new(result.stats.lines)]);
    table.add_row(vec![
        Cell::new("Records"),
        Cell::new(result.stats.records),
    ]);
    table.add_row(vec![
        Cell::new("Malformed lines skipped"),
        count_cell(result.stats.malformed, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Agents resolved"),
        Cell::new(result.stats.agents),
    ]);
    table.add_row(vec![
        Cell::new("Review findings"),
        count_cell(result.stats.diagnostics.len(), Color::Yellow),
    ]);
    println!("{table}");

    print_findings(&result.stats.diagnostics);
}

pub fn print_submit_summary(result: &SubmitResult) {
    if let Some(dir) = &result.dry_run_dir {
        println!("Dry run: documents written to {}", dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Records in extract"), Cell::new(result.total)]);
    table.add_row(vec![
        Cell::new("Already imported"),
        Cell::new(result.already_imported),
    ]);
    table.add_row(vec![
        Cell::new("Submitted"),
        Cell::new(result.submitted),
    ]);
    table.add_row(vec![
        Cell::new("Rejected"),
        count_cell(result.failures.len(), Color::Red),
    ]);
    println!("{table}");

    if !result.failures.is_empty() {
        eprintln!("Rejected records:");
        for failure in &result.failures {
            eprintln!("- {}: {}", failure.object, failure.reason);
        }
    }
}

fn print_findings(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Object"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for diagnostic in diagnostics {
        table.add_row(vec![
            category_cell(diagnostic.category),
            Cell::new(diagnostic.object_id.clone()),
            Cell::new(diagnostic.message.clone()),
        ]);
    }
    println!();
    println!("Findings for review:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn category_cell(category: DiagnosticCategory) -> Cell {
    let color = match category {
        DiagnosticCategory::Alignment => Color::Red,
        _ => Color::Yellow,
    };
    Cell::new(category.to_string()).fg(color)
}
