use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use flow_common::format_numeric;
use flow_inspect::{
    CategoricalSummary, ColumnTypeInfo, InspectionReport, MissingColumn, NumericSummary,
};
use flow_model::Table as DataTable;

use flow_cli::pipeline::PipelineOutcome;

pub fn print_run_summary(outcome: &PipelineOutcome) {
    println!("Policy: {}", outcome.policy);
    println!(
        "Timings: ingest {} ms, remediate {} ms",
        outcome.timings.ingest.as_millis(),
        outcome.timings.remediate.as_millis()
    );
    println!("{}", shape_table(&outcome.before, &outcome.after));
    if let Some(table) = column_change_table(&outcome.before, &outcome.after) {
        println!("{table}");
    }
}

pub fn print_inspection(report: &InspectionReport) {
    match report {
        InspectionReport::Types { columns } => println!("{}", types_table(columns)),
        InspectionReport::Summary {
            numeric,
            categorical,
        } => {
            println!("Summary Statistics (Numerical Features):");
            println!("{}", numeric_table(numeric));
            println!("Summary Statistics (Categorical Features):");
            println!("{}", categorical_table(categorical));
        }
        InspectionReport::Missing { rows, columns } => {
            if columns.is_empty() {
                println!("No missing values in {rows} rows.");
            } else {
                println!("{}", missing_table(columns));
            }
        }
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn shape_table(before: &DataTable, after: &DataTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Missing cells"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("Before").add_attribute(Attribute::Bold),
        Cell::new(before.row_count()),
        Cell::new(before.column_count()),
        count_cell(before.total_missing(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("After").add_attribute(Attribute::Bold),
        Cell::new(after.row_count()),
        Cell::new(after.column_count()),
        count_cell(after.total_missing(), Color::Yellow),
    ]);
    table
}

/// Per-column view of the columns that had missing cells before
/// remediation. `None` when the input was complete.
fn column_change_table(before: &DataTable, after: &DataTable) -> Option<Table> {
    let incomplete: Vec<_> = before
        .missing_counts()
        .into_iter()
        .filter(|column| column.missing > 0)
        .collect();
    if incomplete.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Missing before"),
        header_cell("Missing after"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for column in incomplete {
        let kind = after.column_kind(&column.name);
        let missing = after.missing_count(&column.name);
        let (kind, missing_after) = match (kind, missing) {
            (Ok(kind), Ok(missing)) => (Cell::new(kind), count_cell(missing, Color::Yellow)),
            _ => (dim_cell("-"), dim_cell("dropped")),
        };
        table.add_row(vec![
            Cell::new(&column.name),
            kind,
            Cell::new(column.missing),
            missing_after,
        ]);
    }
    Some(table)
}

fn types_table(columns: &[ColumnTypeInfo]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Dtype"),
        header_cell("Kind"),
        header_cell("Non-null"),
        header_cell("Null"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for column in columns {
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(&column.dtype),
            Cell::new(column.kind),
            Cell::new(column.non_null),
            count_cell(column.null, Color::Yellow),
        ]);
    }
    table
}

fn numeric_table(summaries: &[NumericSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(
        ["Column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"]
            .into_iter()
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for index in 1..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.name),
            Cell::new(summary.count),
            stat_cell(summary.mean),
            stat_cell(summary.std),
            stat_cell(summary.min),
            stat_cell(summary.q25),
            stat_cell(summary.median),
            stat_cell(summary.q75),
            stat_cell(summary.max),
        ]);
    }
    table
}

fn categorical_table(summaries: &[CategoricalSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("count"),
        header_cell("unique"),
        header_cell("top"),
        header_cell("freq"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.name),
            Cell::new(summary.count),
            Cell::new(summary.unique),
            summary.top.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(summary.freq),
        ]);
    }
    table
}

fn missing_table(columns: &[MissingColumn]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Percent"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in columns {
        table.add_row(vec![
            Cell::new(&column.name),
            count_cell(column.missing, Color::Yellow),
            Cell::new(format!("{:.2}%", column.percent)),
        ]);
    }
    table
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
        dim_cell(count)
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_numeric((v * 1000.0).round() / 1000.0)),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
