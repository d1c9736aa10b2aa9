//! Lunch Tray - terminal lunch ordering flow
//!
//! A linear screen flow: pick an entree, a side dish, and an
//! accompaniment, then review and place the order at checkout.

mod config;
mod core;
mod data;
mod frontend;
mod menu;
mod theme;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use frontend::Frontend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lunch-tray")]
#[command(about = "Terminal lunch ordering flow", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Menu catalog file path
    #[arg(short, long, value_name = "FILE")]
    menu: Option<PathBuf>,

    /// Custom data directory (default: ~/.lunch-tray)
    /// Can also be set via LUNCH_TRAY_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Color theme override (dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a menu catalog file
    ValidateMenu {
        /// Menu file to validate
        #[arg(value_name = "FILE")]
        menu: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("LUNCH_TRAY_DIR", data_dir);
    }

    init_logging()?;

    if let Some(data_dir) = &cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var("LUNCH_TRAY_DIR") {
        tracing::info!("Using data directory from LUNCH_TRAY_DIR: {}", env_dir);
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        match command {
            Commands::ValidateMenu { menu } => {
                return validate_menu(menu.or(cli.menu));
            }
        }
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => config::Config::load_from_path(config_path)?,
        None => config::Config::load()?,
    };
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    // Load the menu catalog
    let menu_path = match &cli.menu {
        Some(path) => path.clone(),
        None => {
            config::Config::extract_defaults()?;
            config::Config::menu_path()?
        }
    };
    let menu = menu::Menu::load_from_file(&menu_path)?;
    for warning in menu.warnings() {
        tracing::warn!("Menu: {}", warning);
    }

    run_tui(config, menu)
}

/// Initialize logging to a file (use RUST_LOG env var to control level,
/// e.g. RUST_LOG=debug)
/// TUI apps can't log to stdout, so we write to the app directory
fn init_logging() -> Result<()> {
    let log_path = config::Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

/// Validate a menu catalog file and report issues
fn validate_menu(path: Option<PathBuf>) -> Result<()> {
    let menu_result = match &path {
        Some(path) => {
            println!("Validating menu file: {:?}", path);
            menu::Menu::load_from_file(path)
        }
        None => {
            println!("Validating embedded default menu");
            menu::Menu::from_toml(config::DEFAULT_MENU)
        }
    };

    match menu_result {
        Ok(menu) => {
            println!("✓ Menu loaded successfully");
            println!("  {} items defined", menu.len());

            let warnings = menu.warnings();
            for warning in &warnings {
                println!("⚠ Warning: {}", warning);
            }

            if warnings.is_empty() {
                println!("✓ Menu is valid with no issues");
            } else {
                println!("⚠ Found {} warning(s)", warnings.len());
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to load menu: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Run the TUI frontend
fn run_tui(config: config::Config, menu: menu::Menu) -> Result<()> {
    use core::AppCore;
    use crossterm::event::{MouseButton, MouseEventKind};
    use frontend::{FrontendEvent, TuiFrontend};

    let poll_timeout = std::time::Duration::from_millis(config.ui.poll_timeout_ms);

    // Create core application state
    let mut app_core = AppCore::new(config, menu);

    // Create TUI frontend
    let mut tui = TuiFrontend::new()?;
    tui.set_poll_timeout(poll_timeout);

    // Main event loop
    while app_core.running {
        let events = tui.poll_events()?;

        for event in events {
            match event {
                FrontendEvent::Key { code, modifiers } => {
                    app_core.handle_key(code, modifiers);
                }
                FrontendEvent::Mouse { kind, x, y } => {
                    if kind == MouseEventKind::Down(MouseButton::Left) {
                        handle_click(&mut app_core, &tui, x, y);
                    }
                }
                FrontendEvent::Resize { .. } => {
                    app_core.needs_render = true;
                }
                FrontendEvent::Quit => {
                    app_core.running = false;
                }
            }
        }

        if app_core.needs_render {
            tui.render(&app_core)?;
            app_core.needs_render = false;
        }
    }

    tui.cleanup()?;
    Ok(())
}

/// Route a left click to the list row it landed on (menu screens only)
fn handle_click(app_core: &mut core::AppCore, tui: &frontend::TuiFrontend, x: u16, y: u16) {
    use frontend::tui::{chrome, menu_screen};
    use ratatui::layout::Rect;

    if app_core.navigator.current().category().is_none() {
        return;
    }

    let (width, height) = tui.size();
    let chunks = chrome::screen_chunks(Rect::new(0, 0, width, height));
    let count = app_core.current_items().len();
    if let Some(index) = menu_screen::row_at(
        chunks.body,
        x,
        y,
        count,
        app_core.ui_state.cursor,
        app_core.config.ui.show_descriptions,
    ) {
        app_core.select_row(index);
    }
}
