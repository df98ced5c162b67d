use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use weekcal::calendar::{CalendarConfig, Week};
use weekcal::render::render;
use weekcal::time::{HolidayCalendar, Netherlands};

use crate::cli::Cli;

/// Read the configuration, build the year and write it out.
///
/// The configuration is fully resolved before the output file is created,
/// so a missing key never leaves an empty file behind.
pub fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.config)
        .with_context(|| format!("failed to read config: {}", cli.config.display()))?;
    let config = CalendarConfig::from_yaml_str(&text)
        .with_context(|| format!("failed to parse config: {}", cli.config.display()))?;
    let input = config.resolve(cli.year)?;
    let locale = cli.language.locale();
    debug!(
        year = input.year,
        calendar = Netherlands.name(),
        locale = locale.tag(),
        special_dates = input.tables.special_dates.len(),
        birthdays = input.tables.birthdays.len(),
        weddings = input.tables.weddings.len(),
        "configuration loaded"
    );

    let weeks: Vec<Week> = input
        .weeks(&Netherlands, locale)
        .with_context(|| format!("cannot build a calendar for {}", input.year))?
        .collect();

    let output = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!("calendar-{}.{}", input.year, cli.format.extension()))
    });

    if output == Path::new("-") {
        render(cli.format, &weeks, io::stdout().lock()).context("failed to write to stdout")?;
    } else {
        write_file(&output, |out| render(cli.format, &weeks, out))?;
    }
    info!(path = %output.display(), weeks = weeks.len(), "calendar written");
    Ok(())
}

/// Write `path` through `write`.
///
/// Output goes to a `.partial` sibling first and is renamed into place only
/// once everything is written; on failure the sibling is removed and an
/// existing `path` is left untouched.
fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let partial = partial_path(path);
    let file = File::create(&partial)
        .with_context(|| format!("failed to create output: {}", partial.display()))?;
    let mut out = BufWriter::new(file);
    let written = write(&mut out).and_then(|()| out.flush());
    drop(out);

    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(&partial) {
            warn!(path = %partial.display(), error = %rm, "failed to remove partial output");
        }
        return Err(e).with_context(|| format!("failed to write output: {}", path.display()));
    }
    fs::rename(&partial, path)
        .with_context(|| format!("failed to move output into place: {}", path.display()))
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
