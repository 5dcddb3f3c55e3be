use crate::cli::opts::Format;
use serde_json::Value;
use snafu::{ResultExt, Snafu};

const FRAME_WIDTH: usize = 50;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Error serializing the response: {}", source))]
    Json { source: serde_json::Error },
}

/// Writes the response body to stdout in the given format.
pub fn write_value(format: Format, value: &Value) -> Result<(), Error> {
    match format {
        Format::Raw => {
            println!("{}", render_raw(value)?);
            Ok(())
        }
        Format::Pretty => {
            println!("Formatted JSON:");
            println!("{}", frame_line());
            println!("{}", render_pretty(value)?);
            println!("{}", frame_line());
            Ok(())
        }
    }
}

/// The compact single-line encoding. Non-ascii characters are kept
/// as they are.
pub fn render_raw(value: &Value) -> Result<String, Error> {
    serde_json::to_string(value).context(JsonSnafu)
}

/// The indented encoding (2 spaces, as serde_json does by default).
pub fn render_pretty(value: &Value) -> Result<String, Error> {
    serde_json::to_string_pretty(value).context(JsonSnafu)
}

fn frame_line() -> String {
    "=".repeat(FRAME_WIDTH)
}
