//! Tables printed by `--summary`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use orders_stats::ColumnProfile;

/// Builds the `--summary` table for a column profile.
pub fn profile_table(profile: &ColumnProfile, styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table, styled);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Column"),
        Cell::new(&profile.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(profile.rows)]);
    table.add_row(vec![Cell::new("Empty"), count_cell(profile.nulls, Color::Yellow)]);
    table.add_row(vec![
        Cell::new("Distinct").add_attribute(Attribute::Bold),
        Cell::new(profile.distinct).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Repeated rows"),
        count_cell(profile.duplicated_rows, Color::Yellow),
    ]);
    table
}

/// Builds the table of most repeated values, or `None` when nothing repeats.
pub fn repeated_table(profile: &ColumnProfile, styled: bool) -> Option<Table> {
    if profile.repeated.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(&profile.column), header_cell("Rows")]);
    apply_summary_table_style(&mut table, styled);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &profile.repeated {
        table.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
    }
    Some(table)
}

pub fn print_profile(profile: &ColumnProfile, styled: bool) {
    println!("{}", profile_table(profile, styled));
    if let Some(table) = repeated_table(profile, styled) {
        println!();
        println!("Most repeated:");
        println!("{table}");
    }
}

fn apply_summary_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
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
