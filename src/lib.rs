//! flownotes - short notes in folders, with colors, pins and a live note list

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_colors, handle_edit, handle_folders, handle_highlight, handle_list, handle_new,
        handle_pin, handle_rm, handle_rm_folder, handle_show, handle_watch,
    },
};
use store::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        let mut command = Cli::command();
        clap_complete::generate(args.shell, &mut command, "flownotes", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .max_blocking_threads(config.workers())
        .enable_all()
        .build()
        .context("failed to start runtime")?;

    runtime.block_on(async {
        let store = NoteStore::open(db_path.clone())
            .await
            .with_context(|| format!("failed to open note database {}", db_path.display()))?;

        match &cli.command {
            Command::New(args) => handle_new(args, &store, &config).await,
            Command::List(args) => handle_list(args, &store).await,
            Command::Show(args) => handle_show(args, &store).await,
            Command::Edit(args) => handle_edit(args, &store).await,
            Command::Pin(args) => handle_pin(args, &store, true).await,
            Command::Unpin(args) => handle_pin(args, &store, false).await,
            Command::Highlight(args) => handle_highlight(args, &store).await,
            Command::Rm(args) => handle_rm(args, &store).await,
            Command::RmFolder(args) => handle_rm_folder(args, &store).await,
            Command::Folders(args) => handle_folders(args, &store).await,
            Command::Colors => handle_colors(),
            Command::Watch(args) => handle_watch(args, &store).await,
            Command::Completions(_) => Ok(()),
        }
    })
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,flownotes=info",
        2 => "warn,flownotes=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
