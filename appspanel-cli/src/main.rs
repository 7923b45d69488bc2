use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use appspanel_cli::{CliError, Fixture, Result, Session, paths, script};
use appspanel_lib::PanelConfig;
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Drive an admin panel table page from the command line
#[derive(Parser, Debug)]
#[command(name = "appspanel")]
#[command(version)]
struct Cli {
    /// Page fixture (JSON)
    fixture: PathBuf,

    /// Interaction script to replay
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Panel config (JSON); defaults to the user config file when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file; defaults to the platform cache directory
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log.or_else(paths::log_file), cli.verbose)?;

    let config = load_config(cli.config.or_else(|| paths::config_file().filter(|p| p.exists())))?;
    let fixture = Fixture::load(&cli.fixture)?;
    let mut session = Session::new(fixture, config)?;

    if let Some(path) = cli.script {
        let text = read(&path)?;
        info!("Replaying {}", path.display());
        script::run(&mut session, &text)?;
    }

    print!("{}", session.report());
    Ok(())
}

fn init_logging(path: Option<PathBuf>, verbose: bool) -> Result<()> {
    // No usable location means no log, not a failure
    let Some(path) = path else { return Ok(()) };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| CliError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let log_file = File::create(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), log_file)
        .map_err(|e| CliError::Logger(e.to_string()))
}

fn load_config(path: Option<PathBuf>) -> Result<PanelConfig> {
    match path {
        Some(path) => Ok(PanelConfig::from_json(&read(&path)?)?),
        None => Ok(PanelConfig::default()),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
