use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use snb_cli::types::{BatchResult, PrefixOutcome};

pub fn print_summary(result: &BatchResult) {
    println!("Input: {}", result.input_dir.display());
    println!("Output: {}", result.output_dir.display());
    println!("Workers: {}", result.workers);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Prefix"),
        header_cell("Rule"),
        header_cell("Shards"),
        header_cell("Records"),
        header_cell("Outputs"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    let mut total_shards = 0usize;
    for outcome in &result.outcomes {
        if let Ok(summary) = &outcome.result {
            total_shards += summary.shards.len();
        }
        table.add_row(outcome_row(outcome));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_shards).add_attribute(Attribute::Bold),
        Cell::new(result.total_records()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        status_cell(!result.has_errors()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if result.has_errors() {
        eprintln!("Errors:");
        for (prefix, error) in result.failures() {
            eprintln!("- {prefix}: {error}");
        }
    }
}

fn outcome_row(outcome: &PrefixOutcome) -> Vec<Cell> {
    let prefix = Cell::new(outcome.prefix)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold);
    let rule = if outcome.rule == "plain" {
        dim_cell(outcome.rule)
    } else {
        Cell::new(outcome.rule)
    };
    match &outcome.result {
        Ok(summary) => {
            let outputs = std::iter::once(&summary.primary)
                .chain(summary.derived.iter())
                .map(|output| format!("{} ({})", output.file_name(), output.rows))
                .collect::<Vec<_>>()
                .join("\n");
            vec![
                prefix,
                rule,
                count_cell(summary.shards.len()),
                count_cell(summary.records),
                Cell::new(outputs),
                status_cell(true),
            ]
        }
        Err(_) => vec![
            prefix,
            rule,
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            status_cell(false),
        ],
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("✓").fg(Color::Green)
    } else {
        Cell::new("FAILED").fg(Color::Red)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
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
