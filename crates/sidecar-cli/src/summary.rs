use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sidecar_model::RecordShape;
use sidecar_terms::LoadOutcome;

use crate::commands::{MetadataRun, TermsRun, display_path};

pub fn print_metadata_summary(run: &MetadataRun) {
    if !run.generated.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("File"),
            header_cell("Format"),
            header_cell("Rows"),
            header_cell("Columns"),
            header_cell("Sidecar"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);

        for item in &run.generated {
            let record = &item.output.record;
            let rows = match record.shape {
                RecordShape::Table { number_of_rows, .. } => number_of_rows,
                RecordShape::Records { number_of_records } => number_of_records,
            };
            table.add_row(vec![
                Cell::new(&record.file_name),
                dim_cell(item.format),
                Cell::new(rows),
                Cell::new(record.columns.len()),
                Cell::new(item.output.path.display()),
            ]);
        }
        println!("{table}");
    }

    if run.has_failures() {
        eprintln!("Errors:");
        for (path, error) in &run.failures {
            eprintln!("- {}: {error}", path.display());
        }
    }
}

pub fn print_terms_summary(run: &TermsRun) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Dependency"), header_cell("Terms")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for outcome in &run.report.outcomes {
        match outcome {
            LoadOutcome::Loaded { name, terms } => {
                table.add_row(vec![Cell::new(name), Cell::new(terms)]);
            }
            LoadOutcome::Skipped { name, .. } => {
                table.add_row(vec![dim_cell(name), dim_cell("skipped")]);
            }
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(run.report.terms.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "Terms extracted and saved to {}",
        display_path(&run.output).display()
    );
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
