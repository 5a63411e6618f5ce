use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Table};
use launchdash::catalog::SiteOption;
use launchdash::filter::RangeControl;

pub fn site_options(options: &[SiteOption]) -> String {
    if options.is_empty() {
        return "   (no matching sites)".to_string();
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    for opt in options {
        table.add_row(vec![Cell::new(&opt.label), Cell::new(&opt.value)]);
    }
    table.to_string()
}

pub fn range_control(control: &RangeControl) -> String {
    let marks = control
        .marks
        .iter()
        .map(|m| format!("{}", m))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Min").add_attribute(Attribute::Bold),
        Cell::new("Max"),
        Cell::new("Step"),
        Cell::new("Marks"),
        Cell::new("Initial"),
    ]);
    table.add_row(vec![
        Cell::new(control.min),
        Cell::new(control.max),
        Cell::new(control.step),
        Cell::new(marks),
        Cell::new(control.initial_value),
    ]);
    table.to_string()
}
