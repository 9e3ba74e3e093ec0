use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use svn_scm::areas::repository::Repository;
use svn_scm::artifacts::core::config::{
    Config, DEFAULT_DEBOUNCE_MS, DEFAULT_ICONS_PATH, DEFAULT_LOCALE, DEFAULT_PROGRAM,
};

#[derive(Parser)]
#[command(
    name = "svn-scm",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Source control session over an svn working copy",
    long_about = "This tool tracks the changes of an svn working copy as a working tree \
    and a staging tree, the way an editor's source control view does. \
    It drives the svn command line for everything it knows about the repository.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SessionArgs {
    #[arg(
        id = "working_copy",
        short = 'C',
        long = "path",
        global = true,
        help = "The working copy to operate on (defaults to the current directory)"
    )]
    path: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "SVN_SCM_PROGRAM",
        default_value = DEFAULT_PROGRAM,
        help = "The svn executable"
    )]
    program: String,
    #[arg(
        long,
        global = true,
        env = "SVN_SCM_LOCALE",
        default_value = DEFAULT_LOCALE,
        help = "The locale svn runs with"
    )]
    locale: String,
    #[arg(
        long,
        global = true,
        env = "SVN_SCM_ICONS",
        default_value = DEFAULT_ICONS_PATH,
        help = "The directory holding the status icons"
    )]
    icons: PathBuf,
    #[arg(
        long,
        global = true,
        env = "SVN_SCM_DEBOUNCE_MS",
        default_value_t = DEFAULT_DEBOUNCE_MS,
        help = "Quiet period, in milliseconds, before file changes trigger a refresh"
    )]
    debounce_ms: u64,
}

impl SessionArgs {
    fn config(&self) -> Config {
        Config::default()
            .with_program(self.program.as_str())
            .with_locale(self.locale.as_str())
            .with_icons_path(self.icons.clone())
            .with_debounce(Duration::from_millis(self.debounce_ms))
    }

    fn open(&self) -> Result<Repository> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };

        Repository::new(path, Box::new(std::io::stdout()), self.config())
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show the working tree",
        long_about = "This command runs svn status and prints one line per changed path."
    )]
    Status,
    #[command(
        name = "info",
        about = "Show the repository URL, root and branch",
        long_about = "This command runs svn info and prints where the working copy points to, \
        together with the branch indicator."
    )]
    Info,
    #[command(
        name = "version",
        about = "Show the version of the svn client"
    )]
    Version,
    #[command(
        name = "cat",
        about = "Print a file as of the last synced revision",
        long_about = "This command prints the content svn has for a file at the revision \
        the working copy was last updated to."
    )]
    Cat {
        #[arg(index = 1, help = "The file to print")]
        path: PathBuf,
    },
    #[command(
        name = "revert",
        about = "Revert local changes",
        long_about = "This command discards the local changes of the given paths."
    )]
    Revert {
        #[arg(index = 1, help = "The paths to revert")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "watch",
        about = "Run an interactive session",
        long_about = "This command keeps the working tree up to date while files change \
        and reads commands such as `stage <path>`, `unstage <path>` or `diff <path>` from stdin."
    )]
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let repository = cli.session.open()?;

    match &cli.command {
        Commands::Status => repository.status().await?,
        Commands::Info => repository.info().await?,
        Commands::Version => repository.version().await?,
        Commands::Cat { path } => repository.cat(path).await?,
        Commands::Revert { paths } => repository.revert(paths).await?,
        Commands::Watch => repository.watch().await?,
    }

    Ok(())
}
