//! Table rendering for command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ticket_normalize::{ClassView, ResolutionKind};

use crate::review::ReviewTally;
use crate::types::{IngestResult, NormalizeResult, PendingRow, ValueResolution};

pub fn print_normalize_summary(result: &NormalizeResult) {
    println!("Class: {}", result.class);
    println!("{}", resolution_table(&result.values));
    print_pending(&result.pending);
    print_review(result.review);
    print_saved(result.saved);
}

pub fn print_ingest_summary(result: &IngestResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: - (dry run)"),
    }
    println!("Records normalized: {}", result.records);
    print_pending(&result.pending);
    print_review(result.review);
    print_saved(result.saved);
}

pub fn print_views(views: &[ClassView]) {
    for view in views {
        println!(
            "{}: {} mappings, {} standardized entities",
            view.class,
            view.mappings.len(),
            view.standardized_entities.len()
        );
        println!("{}", view_table(view));
    }
}

pub fn resolution_table(values: &[ValueResolution]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Canonical"),
        header_cell("Rule"),
        header_cell("Score"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for value in values {
        let kind = value.resolution.kind;
        table.add_row(vec![
            Cell::new(&value.raw),
            Cell::new(&value.resolution.canonical).add_attribute(Attribute::Bold),
            kind_cell(kind),
            score_cell(kind.score()),
        ]);
    }
    table
}

pub fn pending_table(rows: &[PendingRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Class"),
        header_cell("Variant"),
        header_cell("Suggested"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.class).fg(Color::Blue),
            Cell::new(&row.variant),
            Cell::new(&row.suggested),
            score_cell(Some(row.score)),
        ]);
    }
    table
}

pub fn view_table(view: &ClassView) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Standardized entity"), header_cell("Variants")]);
    apply_table_style(&mut table);
    for entity in &view.standardized_entities {
        let variants: Vec<&str> = view
            .mappings
            .iter()
            .filter(|(_, canonical)| *canonical == entity)
            .map(|(variant, _)| variant.as_str())
            .collect();
        let variants_cell = if variants.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(variants.join("\n"))
        };
        table.add_row(vec![Cell::new(entity), variants_cell]);
    }
    table
}

fn print_pending(rows: &[PendingRow]) {
    if rows.is_empty() {
        return;
    }
    println!();
    println!("Pending review (not saved, rerun with --review to decide):");
    println!("{}", pending_table(rows));
}

fn print_review(review: Option<ReviewTally>) {
    if let Some(tally) = review {
        println!(
            "Review: {} approved, {} rejected, {} skipped",
            tally.approved, tally.rejected, tally.skipped
        );
    }
}

fn print_saved(saved: Option<bool>) {
    match saved {
        Some(true) => println!("Mappings saved."),
        Some(false) => eprintln!("warning: some mapping files could not be saved, see log"),
        None => println!("Dry run: mappings not saved."),
    }
}

fn apply_table_style(table: &mut Table) {
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
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: ResolutionKind) -> Cell {
    let color = match kind {
        ResolutionKind::Default => Color::DarkGrey,
        ResolutionKind::Mapped | ResolutionKind::Standardized => Color::Green,
        ResolutionKind::Auto { .. } => Color::Cyan,
        ResolutionKind::Suggested { .. } => Color::Yellow,
        ResolutionKind::New { .. } => Color::Magenta,
    };
    Cell::new(kind.label()).fg(color)
}

fn score_cell(score: Option<f64>) -> Cell {
    match score {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
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
