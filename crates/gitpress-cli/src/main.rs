//! Gitpress CLI - publish Hugo posts to a GitHub repository

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod error;
mod exit_codes;

#[derive(Parser)]
#[command(name = "gitpress")]
#[command(author = "Gitpress Contributors")]
#[command(version)]
#[command(about = "Publish Hugo posts to a GitHub repository", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.config/gitpress/config.yaml, then
    /// GITHUB_TOKEN/GITHUB_REPO)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Commit a post to the repository
    Save {
        /// Post file (.yaml/.yml, or .md with front matter)
        post: PathBuf,

        /// Commit as an update instead of a new post
        #[arg(long)]
        update: bool,

        /// Fill empty tags from title keywords
        #[arg(long)]
        auto_tags: bool,
    },

    /// Delete a post from the repository
    Delete {
        /// Post file the post was published from
        post: Option<PathBuf>,

        /// Delete by title instead of a post file
        #[arg(long, conflicts_with = "post")]
        title: Option<String>,
    },

    /// Render a post locally without publishing
    Render {
        /// Post file (.yaml/.yml, or .md with front matter)
        post: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fill empty tags from title keywords
        #[arg(long)]
        auto_tags: bool,
    },

    /// Check that the configured credentials can reach the repository
    Verify,

    /// Show repository metadata
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for a token and write the config file
    Setup {
        /// Repository as owner/repo
        #[arg(long)]
        repo: String,

        /// Target branch
        #[arg(long, default_value = "main")]
        branch: String,
    },
}

fn main() {
    miette::set_panic_hook();

    let cli = Cli::parse();

    if cli.debug {
        // SAFETY: no other threads yet - the runtime starts below
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gitpress=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to start async runtime: {e}");
            std::process::exit(exit_codes::ERROR);
        }
    };

    if let Err(err) = runtime.block_on(run(cli)) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> error::Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Save {
            post,
            update,
            auto_tags,
        } => commands::save::run(config_path, &post, update, auto_tags).await,

        Commands::Delete { post, title } => {
            commands::delete::run(config_path, post.as_deref(), title.as_deref()).await
        }

        Commands::Render {
            post,
            output,
            auto_tags,
        } => commands::render::run(&post, output.as_deref(), auto_tags),

        Commands::Verify => commands::verify::run(config_path).await,

        Commands::Info { json } => commands::info::run(config_path, json).await,

        Commands::Setup { repo, branch } => commands::setup::run(config_path, &repo, &branch),
    }
}
