mod app;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod highscore;
mod menu;
mod render;
mod session;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::highscore::ScoreFile;
use crate::session::Session;
use anyhow::Context;
use lexopt::{Arg, Parser};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: gridsnake [-c|--config <path>] [--log-file <path>]\n",
    "\n",
    "Play snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config <path>   Read configuration from the given file\n",
    "      --log-file <path> Write log messages to the given file\n",
    "  -h, --help            Show this help and exit\n",
    "  -V, --version         Show the program version and exit\n",
);

fn main() -> ExitCode {
    let args = match Invocation::from_parser(Parser::from_env()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage");
            return ExitCode::FAILURE;
        }
    };
    let session = match args.prepare() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    let r = App::new(session).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    /// Configuration file given on the command line
    config: Option<PathBuf>,
    /// Log file given on the command line; overrides the configuration
    log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration, start logging, and set up a session that
    /// reads & writes the configured high score file
    fn prepare(self) -> anyhow::Result<Session<ScoreFile>> {
        let config = match self.config {
            Some(path) => Config::load(&path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => {
                let path = Config::default_path().context("failed to load configuration")?;
                Config::load(&path, true).with_context(|| {
                    format!("failed to load configuration from {}", path.display())
                })?
            }
        };
        if let Some(logfile) = self.log_file.or_else(|| config.files.log_file.clone()) {
            init_logging(&logfile)
                .with_context(|| format!("failed to set up logging to {}", logfile.display()))?;
        }
        log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
        let store = config.score_store();
        log::debug!("High score storage: {store:?}");
        Ok(Session::new(store, config.arena))
    }
}

fn init_logging(logfile: &Path) -> anyhow::Result<()> {
    if let Some(parent) = logfile.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::File::create(logfile)?;
    WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), file)?;
    Ok(())
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
