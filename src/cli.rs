use clap::Parser;

/// Audit an organization's repositories for blacklisted or unknown
/// dependency licenses
#[derive(Parser, Debug)]
#[command(name = "org-license-audit")]
#[command(version)]
#[command(
    about = "Audit an organization's repositories for blacklisted or unknown dependency licenses",
    long_about = None
)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = crate::config::CONFIG_FILENAME)]
    pub config: String,

    /// Render the report to stdout without publishing or notifying
    #[arg(long)]
    pub dry_run: bool,

    /// Write the rendered report to a file instead of publishing
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the configured repository concurrency cap
    #[arg(long)]
    pub concurrency: Option<usize>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
