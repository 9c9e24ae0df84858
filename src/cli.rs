// Command-line definitions. Only the shape of the arguments lives here;
// validation that needs more than clap can express (mandatory URL,
// `repo:path` format) happens in `config` and `artifacts`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "art", about = "Artifactory CLI", version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload local files to a repository path
    #[command(visible_alias = "u", override_usage = "art upload <local path> <repo name:repo path>")]
    Upload(UploadArgs),
    /// Download the files matching a repository pattern
    #[command(visible_alias = "d", override_usage = "art download <repo path>")]
    Download(DownloadArgs),
}

/// Connection flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Artifactory URL
    #[arg(long, env = "ART_URL")]
    pub url: Option<String>,

    /// Artifactory user
    #[arg(long, env = "ART_USER")]
    pub user: Option<String>,

    /// Artifactory password
    #[arg(long, env = "ART_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Local file or directory. A directory path may carry a regex with
    /// capture groups, e.g. `build/(.*)\.jar`
    #[arg(value_name = "LOCAL_PATH")]
    pub local_path: String,

    /// Target in `repo:path` form; `$1`, `$2`, ... refer to capture groups
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Set to true to disable communication with Artifactory
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Pattern in `repo:path` form
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Set to true if you do not wish to have the Artifactory repository
    /// path structure created locally for your downloaded files
    #[arg(long)]
    pub flat: bool,
}
