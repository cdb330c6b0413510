//! effectsctl - manage compositor effect plugins from the command line.
//!
//! A thin presentation layer over the effects settings backend: list
//! installed effects, enable or disable them, and push the persisted
//! state to the running compositor.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use effectsctl::{
    DirectoryRegistry, EditSession, EffectField, EffectListModel, FieldValue, SocketNotifier,
    StateStore,
};

/// Manage compositor effect plugins
#[derive(Parser)]
#[command(name = "effectsctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Config file holding the [Plugins] group
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing installed effect plugins
    #[arg(long, global = true)]
    plugins_dir: Option<PathBuf>,

    /// Compositor control socket
    #[arg(long, global = true)]
    socket: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed effects and their state
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Enable an effect by display name
    Enable {
        /// Effect display name, e.g. "Show Fps"
        name: String,

        /// Also reload the model so the compositor picks the change up
        #[arg(long)]
        apply: bool,
    },

    /// Disable an effect by display name
    Disable {
        /// Effect display name
        name: String,

        /// Also reload the model so the compositor picks the change up
        #[arg(long)]
        apply: bool,
    },

    /// Push the persisted state of every effect to the compositor
    Apply,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Resolved filesystem locations for one invocation.
struct Paths {
    config: PathBuf,
    plugins_dir: PathBuf,
    socket: PathBuf,
}

impl Paths {
    fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => path.clone(),
            None => dirs::config_dir()
                .context("Could not determine config directory")?
                .join("effectsctl")
                .join("effects.toml"),
        };

        let plugins_dir = match &cli.plugins_dir {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .context("Could not determine data directory")?
                .join("effectsctl")
                .join("effects"),
        };

        let socket = cli.socket.clone().unwrap_or_else(SocketNotifier::default_socket);

        Ok(Self { config, plugins_dir, socket })
    }

    fn model(&self) -> EffectListModel {
        EffectListModel::new(
            Box::new(DirectoryRegistry::new(&self.plugins_dir)),
            StateStore::open(&self.config),
            Box::new(SocketNotifier::new(&self.socket)),
        )
    }

    fn session(&self) -> EditSession {
        EditSession::new(StateStore::open(&self.config))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    let paths = Paths::resolve(&cli)?;

    match cli.command {
        Commands::List { format } => cmd_list(&paths, &format)?,
        Commands::Enable { name, apply } => cmd_set(&paths, &name, true, apply)?,
        Commands::Disable { name, apply } => cmd_set(&paths, &name, false, apply)?,
        Commands::Apply => cmd_apply(&paths),
        Commands::Completions { shell } => cmd_completions(shell),
    }

    Ok(())
}

fn cmd_list(paths: &Paths, format: &str) -> Result<()> {
    let mut model = paths.model();
    model.load();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(model.effects())?);
        }
        _ => {
            if model.row_count() == 0 {
                println!("No effects found in {}", paths.plugins_dir.display());
                return Ok(());
            }

            for row in 0..model.row_count() {
                let Some(FieldValue::Text(name)) = model.get(row, EffectField::Name) else {
                    continue;
                };
                let Some(FieldValue::Text(category)) = model.get(row, EffectField::Category)
                else {
                    continue;
                };
                let enabled = model.get(row, EffectField::Status)
                    == Some(FieldValue::Flag(true));
                let marker = if enabled { "[x]" } else { "[ ]" };
                println!("{marker} {name:<30} {category}");
            }
        }
    }

    Ok(())
}

fn cmd_set(paths: &Paths, name: &str, enabled: bool, apply: bool) -> Result<()> {
    let mut session = paths.session();
    session.set_pending(name, enabled);
    session.flush()?;

    let verb = if enabled { "Enabled" } else { "Disabled" };
    println!("{verb} '{name}' in {}", paths.config.display());

    if apply {
        cmd_apply(paths);
    } else {
        println!("Run 'effectsctl apply' to sync the running compositor.");
    }

    Ok(())
}

fn cmd_apply(paths: &Paths) {
    let mut model = paths.model();
    model.reload();
    println!("Synced {} effect(s) with the compositor.", model.row_count());
}

fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
