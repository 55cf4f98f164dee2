mod app;
mod calendar;
mod canvas;
mod data;
mod help;
mod schedule;
mod theme;
use crate::app::App;
use crate::data::{RoomData, HM_FMT, YMD_FMT};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::{Date, OffsetDateTime, Time};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
const LOG_ENV: &str = "ROOMCAL_LOG";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        path: PathBuf,
        date: Option<Date>,
        time: Option<Time>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut path = None;
        let mut date = None;
        let mut time = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('d') | Arg::Long("date") => {
                    date = Some(parser.value()?.parse_with(|s| Date::parse(s, &YMD_FMT))?);
                }
                Arg::Short('t') | Arg::Long("time") => {
                    time = Some(parser.value()?.parse_with(|s| Time::parse(s, &HM_FMT))?);
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if path.is_none() => path = Some(PathBuf::from(value)),
                _ => return Err(arg.unexpected()),
            }
        }
        let Some(path) = path else {
            return Err(lexopt::Error::from("missing data file argument"));
        };
        Ok(Command::Run {
            path,
            date,
            time,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                path,
                date,
                time,
                log_file,
            } => {
                if let Some(log_file) = log_file {
                    init_logging(&log_file)?;
                }
                let room = RoomData::load(&path)?;
                let now = OffsetDateTime::now_local()
                    .context("failed to determine local date and time")?;
                let date = date.unwrap_or_else(|| now.date());
                let time = time.unwrap_or_else(|| now.time());
                tracing::info!(%date, %time, "Starting");
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(room, date, time).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: roomcal [OPTIONS] <DATAFILE>");
                println!();
                println!("Weekly room schedule and term calendar for a classroom finder");
                println!();
                println!("Options:");
                println!("  -d, --date YYYY-MM-DD   Treat the given date as today");
                println!("  -t, --time HH:MM        Treat the given time as now");
                println!("      --log-file PATH     Write logs to the given file");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                println!();
                println!("Set {LOG_ENV} to adjust which log messages are written.");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
