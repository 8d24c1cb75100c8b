use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listing_model::ValidationError;

use listing_cli::batch::{BatchMode, BatchResult};

pub fn print_summary(result: &BatchResult, mode: BatchMode) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell(match mode {
            BatchMode::Convert => "Converted",
            BatchMode::Check => "Valid",
        }),
        header_cell("Failed"),
        header_cell("Unresolved categories"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.total()).add_attribute(Attribute::Bold),
        count_cell(result.succeeded(), Color::Green),
        count_cell(result.failed(), Color::Red),
        count_cell(result.resolution_misses(), Color::Yellow),
    ]);
    eprintln!("{table}");
    print_error_table(result);
}

fn print_error_table(result: &BatchResult) {
    let errors: Vec<&ValidationError> = result.errors().collect();
    if errors.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for err in errors {
        let field = if err.is_resolution_miss() {
            Cell::new(err.field()).fg(Color::Yellow)
        } else {
            Cell::new(err.field()).fg(Color::Red)
        };
        table.add_row(vec![Cell::new(err.row()), field, Cell::new(err.to_string())]);
    }
    eprintln!();
    eprintln!("Failures:");
    eprintln!("{table}");
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
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
