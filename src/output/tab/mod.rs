use clap::ValueEnum;
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Modify, Panel, Style, object::Columns, object::Rows, style::LineText},
};

use crate::report::format_price;
use crate::types::{AgeLevel, DateStyle, ReportData, ReportRow};

use super::HEADERS;

/// Border set for `--output tab`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum TabStyle {
    #[default]
    Rounded,
    Ascii,
    Psql,
    Markdown,
    /// No borders, columns separated by spaces only
    Plain,
}

impl TabStyle {
    fn apply(self, table: &mut Table) {
        match self {
            Self::Rounded => table.with(Style::rounded()),
            Self::Ascii => table.with(Style::ascii()),
            Self::Psql => table.with(Style::psql()),
            Self::Markdown => table.with(Style::markdown()),
            Self::Plain => table.with(Style::blank()),
        };
    }
}

const TITLE: &str = "Assets";

#[must_use]
pub fn format_tab(data: &ReportData, style: TabStyle, date_style: DateStyle) -> String {
    if data.rows.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["(none)"]);
        let mut table = builder.build();
        style.apply(&mut table);
        table.with(Panel::header(format!(" {TITLE} ")));
        return table.to_string();
    }

    let mut builder = Builder::default();
    let mut header: Vec<&str> = HEADERS.to_vec();
    header.push("Status");
    builder.push_record(header);
    for row in &data.rows {
        builder.push_record(row_values(row, date_style));
    }

    let mut table = builder.build();
    style.apply(&mut table);
    // Columns: 5 local price, 7 converted price
    table.with(Modify::new(Columns::new(5..6)).with(Alignment::right()));
    table.with(Modify::new(Columns::new(7..8)).with(Alignment::right()));
    // Title sits on the top border
    table.with(LineText::new(format!(" {TITLE} "), Rows::first()).offset(1));
    table.to_string()
}

fn row_values(row: &ReportRow, date_style: DateStyle) -> Vec<String> {
    vec![
        row.kind.name().to_string(),
        row.brand.clone(),
        row.model.clone(),
        row.office.clone(),
        date_style.format(row.purchase_date),
        format_price(row.purchase_price),
        row.currency.clone(),
        row.converted_price_display.clone(),
        status_label(row.level).to_string(),
    ]
}

fn status_label(level: AgeLevel) -> &'static str {
    match level {
        AgeLevel::Normal => "ok",
        AgeLevel::Warning => "warning",
        AgeLevel::Alarm => "alarm",
    }
}
