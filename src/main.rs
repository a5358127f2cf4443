//! nextbday - Shows the next upcoming birthdays from your contacts.
//!
//! This is the main binary. It reads the birthdays from a vCard export or
//! from the cache written by an earlier refresh, lays out the next ones for
//! the requested widget size, and prints the panel to the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Read a contacts export and remember its birthdays
//! nextbday --refresh --contacts ~/contacts.vcf
//!
//! # Show the next birthdays from the cache
//! nextbday --size medium
//!
//! # Try it out without any contacts
//! nextbday --demo --today 2024-12-09
//!
//! # Pick a background color
//! nextbday --palettes
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use nextbday_config::{Settings, SizeClass};
use nextbday_contacts::{BirthdayCache, ContactSource, VcardFile};
use nextbday_layout::{WidgetLayout, compose, plan::nominal_canvas};
use nextbday_protocol::metrics::next_refresh;
use nextbday_protocol::{BirthdayError, SortedBirthdays, dummy::dummy_birthdays};
use nextbday_tui::{CellMeasurer, Theme, terminal, widgets};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line interface.
#[derive(Debug, Parser)]
#[command(author, version, about = "Shows the next upcoming birthdays from your contacts")]
struct Cli {
    /// Widget size: small, medium, large, extraLarge or accessoryRectangular
    #[arg(short, long, default_value = "large", value_parser = parse_size)]
    size: SizeClass,

    /// Date to count from instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// Re-read the contacts file and update the cache
    #[arg(long, requires = "contacts")]
    refresh: bool,

    /// vCard file to read contacts from
    #[arg(long, value_name = "FILE")]
    contacts: Option<PathBuf>,

    /// Settings file (JSON5) instead of the default locations
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Cache file instead of the default location
    #[arg(long, value_name = "FILE")]
    cache: Option<PathBuf>,

    /// Show built-in sample birthdays
    #[arg(long, conflicts_with_all = ["refresh", "contacts"])]
    demo: bool,

    /// List the curated background colors and exit
    #[arg(long)]
    palettes: bool,

    /// Verbose mode (-v, -vv, -vvv) for more logging on stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_size(value: &str) -> Result<SizeClass, String> {
    value.parse().map_err(|e: nextbday_config::ConfigError| e.to_string())
}

/// Configures logging to stderr.
///
/// The verbosity levels are:
/// - 0: warn (default)
/// - 1: info
/// - 2: debug
/// - 3+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn load_settings(path: Option<&Path>) -> nextbday_config::Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

/// Gets the birthday list from the source selected on the command line.
async fn load_birthdays(cli: &Cli) -> Result<SortedBirthdays, BirthdayError> {
    if cli.demo {
        debug!("using demo birthdays");
        return Ok(dummy_birthdays());
    }

    if let (Some(contacts), false) = (&cli.contacts, cli.refresh) {
        debug!(path = %contacts.display(), "reading contacts without caching");
        let raw = VcardFile::new(contacts).fetch().await?;
        return Ok(SortedBirthdays::from_raw(raw));
    }

    let cache = match &cli.cache {
        Some(path) => BirthdayCache::with_path(path),
        None => BirthdayCache::new()?,
    };

    match &cli.contacts {
        Some(contacts) => Ok(cache.refresh(&VcardFile::new(contacts)).await?),
        None => Ok(cache.load()?),
    }
}

async fn build_layout(
    cli: &Cli,
    settings: &Settings,
    today: NaiveDate,
    measurer: &CellMeasurer,
) -> Result<WidgetLayout, BirthdayError> {
    let birthdays = load_birthdays(cli).await?;
    info!(birthdays = birthdays.len(), "loaded birthdays");
    Ok(compose(&birthdays, today, cli.size, settings, measurer).await?)
}

/// Narrows `width` to the terminal, when there is one.
fn fit_width(width: u16) -> u16 {
    terminal::terminal_width().map_or(width, |columns| width.min(columns))
}

fn print_error(
    error: &BirthdayError,
    size: SizeClass,
    theme: &Theme,
    measurer: &CellMeasurer,
) -> anyhow::Result<()> {
    let width = fit_width(measurer.cells(nominal_canvas(size).width));
    let height = widgets::error_panel_height(error, width);
    let buf = terminal::render_to_buffer(width, height, |area, buf| {
        widgets::render_error(error, theme, area, buf);
    });
    terminal::print_buffer(&buf, &mut io::stdout())?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if cli.palettes {
        let width = fit_width(40);
        let buf = terminal::render_to_buffer(width, widgets::palettes_height(), |area, buf| {
            widgets::render_palettes(area, buf);
        });
        terminal::print_buffer(&buf, &mut io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    }

    let measurer = CellMeasurer::default();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "failed to load settings");
            let error = BirthdayError::unexpected(e);
            print_error(&error, cli.size, &Theme::default(), &measurer)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let theme = Theme::from_background(&settings.background_color).unwrap_or_else(|e| {
        warn!(error = %e, "falling back to the default background");
        Theme::default()
    });

    let now = Local::now().naive_local();
    let today = cli.today.unwrap_or(now.date());
    info!(%today, size = %cli.size, "rendering birthdays");

    let exit = match build_layout(&cli, &settings, today, &measurer).await {
        Ok(layout) => {
            let (width, height) = widgets::panel_size(&layout, &measurer);
            let buf = terminal::render_to_buffer(fit_width(width), height, |area, buf| {
                widgets::render_birthdays(&layout, &theme, &measurer, area, buf);
            });
            terminal::print_buffer(&buf, &mut io::stdout())?;
            ExitCode::SUCCESS
        }
        Err(error) => {
            if error.is_critical() {
                warn!(kind = ?error.kind(), %error, "could not show birthdays");
            } else {
                info!(kind = ?error.kind(), %error, "nothing to show yet");
            }
            print_error(&error, cli.size, &theme, &measurer)?;
            ExitCode::FAILURE
        }
    };

    debug!(next_refresh = %next_refresh(now), "birthdays stay valid until");
    Ok(exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "nextbday",
            "--size",
            "small",
            "--today",
            "2024-03-10",
            "--refresh",
            "--contacts",
            "contacts.vcf",
            "--cache",
            "cache.json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.size, SizeClass::Small);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 3, 10));
        assert!(cli.refresh);
        assert_eq!(cli.contacts, Some(PathBuf::from("contacts.vcf")));
        assert_eq!(cli.cache, Some(PathBuf::from("cache.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn size_defaults_to_large() {
        let cli = Cli::try_parse_from(["nextbday"]).unwrap();
        assert_eq!(cli.size, SizeClass::Large);
        assert!(!cli.demo);
    }

    #[test]
    fn refresh_requires_contacts() {
        assert!(Cli::try_parse_from(["nextbday", "--refresh"]).is_err());
    }

    #[test]
    fn demo_conflicts_with_contacts() {
        assert!(Cli::try_parse_from(["nextbday", "--demo", "--contacts", "a.vcf"]).is_err());
    }

    #[test]
    fn unknown_size_is_rejected() {
        assert!(Cli::try_parse_from(["nextbday", "--size", "huge"]).is_err());
    }

    #[tokio::test]
    async fn demo_birthdays_need_no_files() {
        let cli = Cli::try_parse_from(["nextbday", "--demo"]).unwrap();
        let birthdays = load_birthdays(&cli).await.unwrap();
        assert_eq!(birthdays, dummy_birthdays());
    }

    #[tokio::test]
    async fn missing_cache_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        let cli = Cli::try_parse_from(["nextbday", "--cache", path.to_str().unwrap()]).unwrap();

        let error = load_birthdays(&cli).await.unwrap_err();
        assert!(matches!(error, BirthdayError::NoCacheFile { .. }));
    }

    #[tokio::test]
    async fn refresh_writes_the_cache() {
        let dir = tempfile::TempDir::new().unwrap();
        let vcf = dir.path().join("contacts.vcf");
        let cache = dir.path().join("cache.json");
        std::fs::write(
            &vcf,
            "BEGIN:VCARD\nN:Hopper;Grace;;;\nBDAY:1906-12-09\nEND:VCARD\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "nextbday",
            "--refresh",
            "--contacts",
            vcf.to_str().unwrap(),
            "--cache",
            cache.to_str().unwrap(),
        ])
        .unwrap();
        let birthdays = load_birthdays(&cli).await.unwrap();
        assert_eq!(birthdays.len(), 1);
        assert!(cache.exists());
    }
}
