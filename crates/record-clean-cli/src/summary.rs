use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use record_clean::CleanSummary;

pub fn print_summary(summary: &CleanSummary) {
    println!("{}", summary_table(summary));
}

/// Render the run outcome as a two-column table.
pub fn summary_table(summary: &CleanSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        label_cell("Source"),
        Cell::new(summary.source.display()),
    ]);
    table.add_row(vec![
        label_cell("Destination"),
        Cell::new(summary.destination.display()),
    ]);
    table.add_row(vec![
        label_cell("Field"),
        Cell::new(&summary.target_field),
    ]);
    table.add_row(vec![
        label_cell("Records"),
        Cell::new(summary.records).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![label_cell("Removed"), removed_cell(summary.removed)]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn removed_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn summary(removed: usize) -> CleanSummary {
        CleanSummary {
            source: PathBuf::from("enriched_cities.json"),
            destination: PathBuf::from("enriched_cities_clean.json"),
            target_field: "alternatenames".to_string(),
            records: 3,
            removed,
        }
    }

    #[test]
    fn test_summary_table_rows() {
        let table = summary_table(&summary(2));
        assert_eq!(table.row_iter().count(), 5);
        let rendered = table.to_string();
        assert!(rendered.contains("enriched_cities.json"));
        assert!(rendered.contains("enriched_cities_clean.json"));
        assert!(rendered.contains("alternatenames"));
        assert!(rendered.contains("Removed"));
    }
}
