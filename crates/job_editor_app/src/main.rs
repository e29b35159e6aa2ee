mod platform;

use std::path::PathBuf;

use clap::Parser;
use job_editor_core::UserRole;

use platform::LogDestination;

/// Terminal editor for job postings.
#[derive(Debug, Parser)]
#[command(name = "job_editor", version)]
pub struct Cli {
    /// Directory jobs are saved in. Overrides the config file.
    #[arg(long)]
    pub store: Option<PathBuf>,
    /// Open an existing job instead of the one from the last session.
    #[arg(long)]
    pub job: Option<u64>,
    /// Role of the editing user (super_admin, hr_manager, moderator, recruiter, employer).
    #[arg(long)]
    pub role: Option<UserRole>,
    /// Edit with admin rights.
    #[arg(long)]
    pub admin: bool,
    /// Terminal width in columns; decides between tabs and accordion.
    #[arg(long)]
    pub width: Option<u16>,
    #[arg(long, default_value = "job_editor.ron")]
    pub config: PathBuf,
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::run_app(cli)
}
