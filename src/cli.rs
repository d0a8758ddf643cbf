use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradecalc")]
#[command(
    about = "Enter grades per subject and see weighted report-card grades",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of searching for .gradecalc.toml
    #[arg(short, long, env = "GRADECALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    /// Logs go to stderr and are silent while the TUI is on screen
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
