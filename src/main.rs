// tdq - A launcher-style todo list
// Entry point: sub-commands for the settings blob, otherwise the terminal launcher

mod app;
mod event;
mod ui;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tdq::{Plugin, PluginConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let plugin_dir = PluginConfig::default_plugin_dir();

    match args.get(1).map(String::as_str) {
        None => run_launcher(plugin_dir),
        Some("set-folder") => {
            let folder = args.get(2).context("usage: tdq set-folder <path>")?;
            let mut config = PluginConfig::load(&plugin_dir)?;
            config.settings.folder_path = Some(PathBuf::from(folder));
            config.save()?;
            println!("data file: {}", config.data_file_path().display());
            Ok(())
        }
        Some("set-keyword") => {
            let keyword = args.get(2).context("usage: tdq set-keyword <keyword>")?;
            let mut config = PluginConfig::load(&plugin_dir)?;
            config.settings.action_keyword = keyword.clone();
            config.save()?;
            Ok(())
        }
        Some("path") => {
            let config = PluginConfig::load(&plugin_dir)?;
            println!("{}", config.data_file_path().display());
            Ok(())
        }
        Some("help" | "-h" | "--help") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("tdq v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("  tdq                      open the launcher");
    println!("  tdq set-folder <path>    keep the data file in <path>");
    println!("  tdq set-keyword <kw>     change the action keyword");
    println!("  tdq path                 print the data file location");
    println!();
    println!("The plugin directory is ${} or the platform data directory.", tdq::config::HOME_ENV);
}

/// Log to a file in the plugin directory; the terminal belongs to the UI.
fn init_logging(config: &PluginConfig) -> anyhow::Result<()> {
    fs::create_dir_all(config.plugin_dir())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file_path())?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_launcher(plugin_dir: PathBuf) -> anyhow::Result<()> {
    let config = PluginConfig::load(&plugin_dir)?;
    init_logging(&config)?;
    tracing::info!(plugin_dir = %plugin_dir.display(), "starting launcher");

    // A broken data file is fatal before the terminal is taken over
    let plugin = Plugin::new(config)?;

    // Initialize the terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(plugin);
    let result = app.run(&mut terminal);

    // Cleanup and restore terminal on exit
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
