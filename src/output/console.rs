use colored::{Color, Colorize};

use crate::report::format_price;
use crate::types::{AgeLevel, DateStyle, ReportData, ReportRow};

use super::HEADERS;

pub const FIELD_WIDTH: usize = 14;

/// Styling state for one rendering pass.
#[derive(Copy, Clone, Debug, Default)]
pub struct RenderContext {
    pub color: bool,
    pub date_style: DateStyle,
}

/// Left-justify to [`FIELD_WIDTH`]; longer values pass through unclipped.
#[must_use]
pub fn pad_field(value: &str) -> String {
    format!("{value:<FIELD_WIDTH$}")
}

fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields.iter().map(|f| pad_field(f.as_ref())).collect()
}

pub(crate) fn level_color(level: AgeLevel) -> Option<Color> {
    match level {
        AgeLevel::Alarm => Some(Color::Red),
        AgeLevel::Warning => Some(Color::Yellow),
        AgeLevel::Normal => None,
    }
}

fn paint(line: String, level: AgeLevel, ctx: RenderContext) -> String {
    if !ctx.color {
        return line;
    }
    match level_color(level) {
        // ColoredString appends the reset sequence, so the style ends with the line.
        Some(color) => line.color(color).to_string(),
        None => line,
    }
}

fn row_fields(row: &ReportRow, date_style: DateStyle) -> [String; 8] {
    [
        row.kind.name().to_string(),
        row.brand.clone(),
        row.model.clone(),
        row.office.clone(),
        date_style.format(row.purchase_date),
        format_price(row.purchase_price),
        row.currency.clone(),
        row.converted_price_display.clone(),
    ]
}

/// Header, dashed separator and one styled line per row.
#[must_use]
pub fn console_lines(data: &ReportData, ctx: RenderContext) -> Vec<String> {
    let separator: Vec<String> = HEADERS.iter().map(|h| "-".repeat(h.len())).collect();
    let mut lines = Vec::with_capacity(data.rows.len() + 2);
    lines.push(join_fields(&HEADERS));
    lines.push(join_fields(&separator));
    for row in &data.rows {
        let line = join_fields(&row_fields(row, ctx.date_style));
        lines.push(paint(line, row.level, ctx));
    }
    lines
}

#[must_use]
pub fn format_console(data: &ReportData, ctx: RenderContext) -> String {
    console_lines(data, ctx).join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::catalog::{build_assets, build_exchange_rates};
    use crate::report::collect_report_data;
    use crate::sort::sort_by_office_and_date;
    use crate::system::FixedClock;
    use crate::types::Options;

    fn sample(as_of: NaiveDate) -> ReportData {
        let assets = sort_by_office_and_date(&build_assets().expect("assets"));
        collect_report_data(
            &assets,
            &build_exchange_rates(),
            &Options::default(),
            &FixedClock(as_of),
        )
    }

    #[test]
    fn pad_field_pads_short_and_keeps_long_values() {
        assert_eq!(pad_field("USD"), "USD           ");
        assert_eq!(pad_field("USD").len(), FIELD_WIDTH);
        assert_eq!(pad_field("Local price today"), "Local price today");
        assert_eq!(pad_field("exactly14chars"), "exactly14chars");
    }

    #[test]
    fn header_and_separator_share_field_shape() {
        let data = sample(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        let lines = console_lines(&data, RenderContext::default());

        assert_eq!(lines.len(), 11);
        assert_eq!(
            lines[0],
            "Type          Brand         Model         Office        Purchase Date Price in USD  Currency      Local price today"
        );
        assert_eq!(
            lines[1],
            "----          -----         -----         ------        ------------- ------------  --------      -----------------"
        );
    }

    #[test]
    fn rows_render_fixed_width_fields() {
        let data = sample(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        let lines = console_lines(&data, RenderContext::default());

        assert_eq!(
            lines[2],
            "Phone         iPhone        8             Spain         2018-12-29    970           EUR           801.65        "
        );
        assert_eq!(
            lines[7],
            "Computer      HP            Elitebook     Sweden        2020-10-02    588           SEK           4900          "
        );
    }

    #[test]
    fn us_date_style_uses_short_form() {
        let data = sample(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        let ctx = RenderContext {
            color: false,
            date_style: DateStyle::Us,
        };
        let out = format_console(&data, ctx);
        assert!(out.contains("12/29/2018    "), "{out}");
        assert!(!out.contains("2018-12-29"));
    }

    #[test]
    fn uncolored_output_has_no_escape_sequences() {
        let data = sample(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        assert!(data.rows.iter().all(|r| r.level == AgeLevel::Alarm));
        let out = format_console(&data, RenderContext::default());
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn levels_map_to_colors() {
        assert_eq!(level_color(AgeLevel::Alarm), Some(Color::Red));
        assert_eq!(level_color(AgeLevel::Warning), Some(Color::Yellow));
        assert_eq!(level_color(AgeLevel::Normal), None);
    }
}
