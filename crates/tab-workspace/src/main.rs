//! Tab Workspace - CLI entry point
//!
//! `tabws` drives a file-backed tab workspace from the shell. Each run loads
//! the saved tab list, reconciles it at the home path, performs one command
//! and exits; the store persists the result.

mod commands;

use clap::{Parser, Subcommand};
use commands::CloseScope;
use std::path::PathBuf;
use std::process::ExitCode;

/// Tabbed workspace session manager
#[derive(Parser)]
#[command(name = "tabws")]
#[command(version, about = "Tabbed workspace session manager")]
struct Cli {
    /// Configuration file (defaults to the XDG location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tabws CLI
#[derive(Subcommand)]
enum Commands {
    /// Navigate to a path, opening or activating its tab
    Open {
        /// Navigation path, e.g. /case/list
        path: String,
    },

    /// List open tabs (* marks the active tab)
    List {
        /// Print the persisted snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Close a tab, or tabs relative to it
    Close {
        /// 1-based tab position
        #[arg(required_unless_present = "all")]
        position: Option<usize>,
        /// Close every other closable tab
        #[arg(long, conflicts_with_all = ["right", "left"])]
        others: bool,
        /// Close closable tabs to the right
        #[arg(long, conflicts_with = "left")]
        right: bool,
        /// Close closable tabs to the left
        #[arg(long)]
        left: bool,
        /// Close every closable tab
        #[arg(long, conflicts_with_all = ["position", "others", "right", "left"])]
        all: bool,
    },

    /// Pin or unpin a tab
    Pin {
        /// 1-based tab position
        position: usize,
    },

    /// Rename a tab
    Rename {
        /// 1-based tab position
        position: usize,
        /// New title
        title: String,
    },

    /// Move a tab to another position
    Move {
        /// Current 1-based position
        from: usize,
        /// Target 1-based position
        to: usize,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn close_scope(others: bool, right: bool, left: bool, all: bool) -> CloseScope {
    match (others, right, left, all) {
        (_, _, _, true) => CloseScope::All,
        (true, _, _, _) => CloseScope::Others,
        (_, true, _, _) => CloseScope::Right,
        (_, _, true, _) => CloseScope::Left,
        _ => CloseScope::Single,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config { action } => return run_config_command(cli.config, action),
        command => command,
    };

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tab_workspace::logging::init(config.logging.level);

    let mut session = match commands::open_session(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match command {
        Commands::Open { path } => commands::run_open_command(&mut session, &path),
        Commands::List { json } => commands::run_list_command(&session, json),
        Commands::Close {
            position,
            others,
            right,
            left,
            all,
        } => commands::run_close_command(
            &mut session,
            position,
            close_scope(others, right, left, all),
        ),
        Commands::Pin { position } => commands::run_pin_command(&mut session, position),
        Commands::Rename { position, title } => {
            commands::run_rename_command(&mut session, position, &title)
        }
        Commands::Move { from, to } => commands::run_move_command(&mut session, from, to),
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}

fn run_config_command(config: Option<PathBuf>, action: ConfigAction) -> ExitCode {
    use tab_workspace::config::{default, xdg};
    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            println!("{}", config.unwrap_or_else(xdg::config_path).display());
            Ok(())
        }
        ConfigAction::Validate => match commands::load_config(config.as_deref()) {
            Ok(config) => {
                println!("Configuration is valid");
                println!("{config:#?}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
