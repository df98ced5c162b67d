//! Writing a sequence of weeks as plain text or JSON.

use std::io::{self, Write};

use wk_calendar::Week;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One header per week, one line per day.
    #[default]
    Text,
    /// An array of week objects keyed `weeknumber`, `month`, `mon`…`sun`.
    Json,
}

impl Format {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Json => "json",
        }
    }
}

/// Write `weeks` to `out` in `format`.
pub fn render<W: Write>(format: Format, weeks: &[Week], out: W) -> io::Result<()> {
    match format {
        Format::Text => render_text(weeks, out),
        Format::Json => render_json(weeks, out),
    }
}

/// Plain text: a `Week {number}: {month}` header followed by the day
/// summaries, one blank line between weeks.
pub fn render_text<W: Write>(weeks: &[Week], mut out: W) -> io::Result<()> {
    for (i, week) in weeks.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Week {}: {}", week.number(), week.month_label())?;
        for day in week.days() {
            writeln!(out, "  {}", day.summary())?;
        }
    }
    out.flush()
}

/// Pretty-printed JSON array, newline terminated.
pub fn render_json<W: Write>(weeks: &[Week], mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, weeks)?;
    writeln!(out)?;
    out.flush()
}
