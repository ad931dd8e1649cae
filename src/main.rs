//! calcnote: terminal calculator and JSON-backed note keeper

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use calcnote::config;
use calcnote::notes::NoteStore;
use commands::notes::NoteCommand;

mod commands;

#[derive(Parser)]
#[command(name = "calcnote")]
#[command(about = "Terminal calculator and note keeper", long_about = None)]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Notes file (defaults to $CALCNOTE_NOTES_FILE, then the user data directory)
    #[arg(long, global = true)]
    notes_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the calculator (interactive unless --keys is given)
    Calc {
        /// Key sequence to evaluate once, e.g. "3+4*2="
        #[arg(long, short)]
        keys: Option<String>,

        /// How long an error message stays on screen
        #[arg(long, default_value_t = 2000)]
        error_delay_ms: u64,
    },

    /// Add a new note
    Add {
        /// Note title (must be unique)
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,

        /// Note body
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        body: String,
    },

    /// Remove a note
    Remove {
        /// Title of the note to remove
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,
    },

    /// Remove all notes
    RemoveAll,

    /// List all note titles
    List,

    /// Read a note
    Read {
        /// Title of the note to read
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,
    },

    /// Replace the body of a note
    Edit {
        /// Title of the note to edit
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,

        /// New body
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        body: String,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let note_command = match cli.command {
        Commands::Calc {
            keys,
            error_delay_ms,
        } => {
            commands::calc::execute(keys.as_deref(), Duration::from_millis(error_delay_ms))?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Add { title, body } => NoteCommand::Add { title, body },
        Commands::Remove { title } => NoteCommand::Remove { title },
        Commands::RemoveAll => NoteCommand::RemoveAll,
        Commands::List => NoteCommand::List,
        Commands::Read { title } => NoteCommand::Read { title },
        Commands::Edit { title, body } => NoteCommand::Edit { title, body },
    };

    let path = config::notes_file(cli.notes_file)?;
    tracing::debug!(path = %path.display(), "using notes file");
    let store = NoteStore::open(path);

    if commands::notes::execute(&store, &note_command)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
