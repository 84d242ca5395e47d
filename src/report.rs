//! Text output for a computed vector.
//!
//! The line is `Result: ` followed by every value and a space, then a
//! newline, e.g. `Result: 9 9 9 9 9 9 9 9 \n`.

use std::fmt::Write as _;
use std::io::{self, Write};

pub const PREFIX: &str = "Result: ";

/// Renders the report line, newline included.
pub fn render(values: &[f32]) -> String {
    let mut line = String::with_capacity(PREFIX.len() + values.len() * 4 + 1);
    line.push_str(PREFIX);
    for value in values {
        // Writing to a String cannot fail
        let _ = write!(line, "{value} ");
    }
    line.push('\n');
    line
}

/// Writes the report line to `out` and flushes it.
pub fn write_report<W: Write>(out: &mut W, values: &[f32]) -> io::Result<()> {
    out.write_all(render(values).as_bytes())?;
    out.flush()
}
