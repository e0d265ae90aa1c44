#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

use std::io::{self, BufRead, IsTerminal, Write};

use asset_tracker::{
    Clock, DateStyle, DefaultClock, FixedClock, InventoryError, Options, SortOrder, build_assets,
    build_exchange_rates, collect_report_data,
    output::{OutputFormat, RenderContext, TabStyle, console_lines, format_tab, to_json},
    parse_date, sort_assets,
};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice { Auto, Always, Never }

#[derive(Parser, Debug)]
#[command(version, about = "Print the sample asset inventory, colored by age.")]
struct Args {
    /// Output format: console (default), tab or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    output: OutputFormat,

    /// Row order: office then date (default) or type then date
    #[arg(long, value_enum, default_value_t = SortOrder::Office)]
    sort: SortOrder,

    /// Table style to use with --output tab
    #[arg(long, value_enum, default_value_t = TabStyle::Rounded)]
    tab_style: TabStyle,

    /// How purchase dates are printed
    #[arg(long, value_enum, default_value_t = DateStyle::Iso)]
    date_style: DateStyle,

    /// Color rows by age: auto colors only when stdout is a terminal
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Compute ages as of this date (yyyy-mm-dd) instead of today
    #[arg(long, value_parser = parse_as_of)]
    as_of: Option<NaiveDate>,

    /// Exit right away instead of waiting for Enter
    #[arg(long)]
    no_pause: bool,

    /// Print debug info to stderr
    #[arg(long)]
    debug: bool,
}

fn parse_as_of(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), InventoryError> {
    let color = match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
            true
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
            false
        }
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    let opts = Options {
        sort: args.sort,
        date_style: args.date_style,
        color,
        debug: args.debug,
    };
    let clock: Box<dyn Clock> = match args.as_of {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(DefaultClock),
    };

    let assets = build_assets()?;
    let rates = build_exchange_rates();
    if opts.debug {
        eprintln!(
            "[debug] sort={:?} output={:?} color={} date_style={:?}",
            opts.sort, args.output, opts.color, opts.date_style
        );
    }
    let assets = sort_assets(&assets, opts.sort);
    let data = collect_report_data(&assets, &rates, &opts, clock.as_ref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Console => {
            let ctx = RenderContext {
                color: opts.color,
                date_style: opts.date_style,
            };
            for line in console_lines(&data, ctx) {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Tab => {
            let table = format_tab(&data, args.tab_style, opts.date_style);
            writeln!(out, "{table}")?;
        }
        OutputFormat::Json => writeln!(out, "{}", to_json(&data)?)?,
    }
    out.flush()?;
    drop(out);

    if !args.no_pause {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}
