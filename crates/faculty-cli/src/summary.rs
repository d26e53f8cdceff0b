use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use faculty_model::{MatchResult, MatchStrategy};

use crate::types::ResolveRun;

pub fn print_summary(run: &ResolveRun) {
    eprintln!(
        "Roster: {} faculty, {} mentions",
        run.roster_size, run.mention_count
    );
    match &run.output {
        Some(path) => eprintln!("Results: {}", path.display()),
        None => eprintln!("Results: stdout"),
    }
    if let Some(path) = &run.report_path {
        eprintln!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Strategy"),
        header_cell("Mentions"),
        header_cell("Share"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let total = run.report.total;
    for strategy in MatchStrategy::ALL {
        let count = run.report.count(strategy);
        table.add_row(vec![
            strategy_cell(strategy),
            count_cell(count, strategy_color(strategy)),
            share_cell(count, total),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        share_cell(run.report.matched, total).add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");

    print_unresolved_table(&run.results);
    if !run.report.ambiguous.is_empty() {
        eprintln!();
        eprintln!("Ambiguous (tie broken by faculty id):");
        for entry in &run.report.ambiguous {
            eprintln!("- {}: {}", entry.query, entry.faculty_ids.join(", "));
        }
    }
    if !run.skipped_placeholders.is_empty() {
        eprintln!();
        eprintln!("Skipped placeholders: {}", run.skipped_placeholders.join(", "));
    }
    if !run.dangling_overrides.is_empty() {
        eprintln!();
        eprintln!("Overrides with unknown faculty ids:");
        for entry in &run.dangling_overrides {
            eprintln!("- {} -> {}", entry.normalized_key, entry.faculty_id);
        }
    }
}

fn print_unresolved_table(results: &[MatchResult]) {
    let unresolved: Vec<&MatchResult> = results.iter().filter(|r| !r.is_matched()).collect();
    if unresolved.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mention"),
        header_cell("Outcome"),
        header_cell("Best candidate"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for result in unresolved {
        let best = result.alternatives.first();
        table.add_row(vec![
            Cell::new(&result.query),
            strategy_cell(result.strategy),
            match best {
                Some(alternative) => Cell::new(&alternative.faculty_id),
                None => dim_cell("-"),
            },
            match best {
                Some(alternative) => Cell::new(format!("{:.2}", alternative.confidence)),
                None => dim_cell("-"),
            },
        ]);
    }
    eprintln!();
    eprintln!("Needs curation:");
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn strategy_cell(strategy: MatchStrategy) -> Cell {
    Cell::new(strategy.as_str()).fg(strategy_color(strategy))
}

fn strategy_color(strategy: MatchStrategy) -> Color {
    match strategy {
        MatchStrategy::Override | MatchStrategy::ExactNormalized => Color::Green,
        MatchStrategy::LastnamePrefix | MatchStrategy::LastnameInitial => Color::Blue,
        MatchStrategy::Fuzzy => Color::Yellow,
        MatchStrategy::Unmatched | MatchStrategy::InvalidInput => Color::Red,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn share_cell(count: usize, total: usize) -> Cell {
    if total == 0 {
        return dim_cell("-");
    }
    Cell::new(format!("{:.1}%", count as f64 * 100.0 / total as f64))
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
