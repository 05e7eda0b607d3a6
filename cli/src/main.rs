mod list;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use todotxt_core::model::config::DEFAULT_FILE;
use todotxt_core::repository::write_lines;
use todotxt_core::usecase::pipeline;
use todotxt_core::{
    sort_tasks, time, Command, FileTaskRepository, RunConfig, Task, TaskRepository, DEFAULT_SORT_MODE,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "todotxt-util")]
#[command(about = "Todo.txt utility: sort, archive and recurse tasks", long_about = None)]
struct Cli {
    /// todo.txt filename
    #[arg(short, long, default_value = DEFAULT_FILE)]
    file: PathBuf,
    /// Print result on stdout instead of writing files
    #[arg(long)]
    stdout: bool,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sorting functions
    Sort {
        /// Sorting mode, default: by status, due, t, project, Priority, context
        #[arg(short, long, default_value = DEFAULT_SORT_MODE)]
        mode: String,
        /// Archive done tasks
        #[arg(long)]
        archive: bool,
        /// Create new task according to recurse tags
        #[arg(long)]
        recurse: bool,
    },
    /// Archive done tasks
    Archive {
        /// Create new task according to recurse tags
        #[arg(long)]
        recurse: bool,
    },
    /// Sort, archive and recurse tasks
    Clean {
        #[arg(short, long, default_value = DEFAULT_SORT_MODE)]
        mode: String,
    },
    /// Show parsed tasks without changing anything
    List {
        #[arg(short, long, default_value = DEFAULT_SORT_MODE)]
        mode: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print_tasks(tasks: &[Task], verbose: bool, header: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    let header = format!("----------- {} -----------", header);
    if verbose {
        writeln!(out, "{}", header)?;
    }
    write_lines(&mut out, tasks, "\n")?;
    if verbose {
        writeln!(out, "{}", "-".repeat(header.len()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = RunConfig::new(&cli.file, cli.stdout);
    let repo = FileTaskRepository::from_config(&config);
    tracing::debug!(
        "todo file {}, archive {}",
        repo.file_path().display(),
        repo.archive_path().display()
    );
    // One reference day for the whole run.
    let today = time::today();

    let command = match cli.command {
        Commands::List { mode, json } => {
            let tasks = sort_tasks(repo.load(today)?, &mode)?;
            return list::show_tasks(&tasks, json);
        }
        Commands::Sort {
            mode,
            archive,
            recurse,
        } => Command::Sort {
            mode,
            recurse,
            archive,
        },
        Commands::Archive { recurse } => Command::Archive { recurse },
        Commands::Clean { mode } => Command::Clean { mode },
    };

    if config.stdout {
        let outcome = pipeline::run(&command, repo.load(today)?, today)?;
        print_tasks(&outcome.tasks, cli.verbose, "TASKS")?;
        if let Some(archived) = &outcome.archived {
            print_tasks(archived, cli.verbose, "ARCHIVE")?;
        }
    } else {
        pipeline::run_with_repository(&repo, &command, today)?;
    }

    tracing::debug!("done");
    Ok(())
}
