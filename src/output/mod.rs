pub mod console;
pub mod json;
pub mod tab;

pub use console::{FIELD_WIDTH, RenderContext, console_lines, format_console, pad_field};
pub use json::to_json;
pub use tab::{TabStyle, format_tab};

use clap::ValueEnum;

pub(crate) const HEADERS: [&str; 8] = [
    "Type",
    "Brand",
    "Model",
    "Office",
    "Purchase Date",
    "Price in USD",
    "Currency",
    "Local price today",
];

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Console,
    Tab,
    Json,
}
