use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use launchdash::aggregate::OutcomeView;
use launchdash::dataset::Outcome;
use launchdash::scatter::ScatterView;

const BAR_WIDTH: usize = 30;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Pie chart as a table: one row per segment with its share and a bar.
pub fn outcome(view: &OutcomeView) -> String {
    let title = format!("📊 {}", view.title());
    if view.is_empty() {
        return format!("{}\n   (no launches for this selection)", title);
    }

    let first_header = match view {
        OutcomeView::AllSites { .. } => "Launch Site",
        OutcomeView::SingleSite { .. } => "Outcome",
    };

    let mut table = new_table();
    table.set_header(vec![
        Cell::new(first_header).add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Share"),
        Cell::new(""),
    ]);

    let total = view.total();
    for (label, count) in view.entries() {
        let share = if total > 0 {
            count as f64 / total as f64
        } else {
            0.0
        };
        let colour = match label.as_str() {
            "success" => Color::Green,
            "failure" => Color::Red,
            _ => Color::Reset,
        };
        table.add_row(vec![
            Cell::new(&label).add_attribute(Attribute::Bold).fg(colour),
            Cell::new(count).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", share * 100.0)),
            Cell::new("#".repeat((share * BAR_WIDTH as f64).round() as usize)),
        ]);
    }
    right_align(&mut table, 1..=2);

    format!("{}\n{}\nTotal: {}", title, table, total)
}

/// Scatter chart as a table of marks plus a per-category legend.
pub fn scatter(view: &ScatterView) -> String {
    let title = format!("📈 {}", view.title());
    if view.is_empty() {
        return format!(
            "{}\n   (no launches in this payload range)\nPoints: 0",
            title
        );
    }

    let mut marks = new_table();
    marks.set_header(vec![
        Cell::new("Payload (kg)").add_attribute(Attribute::Bold),
        Cell::new("class"),
        Cell::new("Booster Version Category"),
    ]);
    for p in view.points() {
        let colour = match p.outcome {
            Outcome::Success => Color::Green,
            Outcome::Failure => Color::Red,
        };
        marks.add_row(vec![
            Cell::new(format!("{:.1}", p.payload_mass_kg)),
            Cell::new(p.outcome.class()).fg(colour),
            Cell::new(&p.booster_category),
        ]);
    }
    right_align(&mut marks, 0..=1);

    let mut legend = new_table();
    legend.set_header(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Success").fg(Color::Green),
        Cell::new("Failure").fg(Color::Red),
    ]);
    for s in view.by_category() {
        legend.add_row(vec![
            Cell::new(&s.category).add_attribute(Attribute::Bold),
            Cell::new(s.points.len()),
            Cell::new(s.successes).fg(Color::Green),
            Cell::new(s.failures).fg(Color::Red),
        ]);
    }
    right_align(&mut legend, 1..=3);

    format!("{}\n{}\n{}\nPoints: {}", title, marks, legend, view.len())
}
