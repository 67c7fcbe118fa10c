use crate::domain::models::{CoronaryStatus, RegressionTarget, RiskKey};
use crate::services::render::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kdplan",
    version,
    about = "Kawasaki disease coronary risk level and management plan reference",
    after_help = "Educational use only. Does not replace guidelines or individualized care."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Color risk levels in text output")]
    pub color: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Config file (default: $KDPLAN_CONFIG or ~/.config/kdplan/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct Observations {
    #[arg(
        long,
        value_name = "Z",
        allow_hyphen_values = true,
        help = "Maximum Z score during illness; unparseable text means no score"
    )]
    pub z: Option<String>,
    #[arg(long, value_enum, default_value_t = CoronaryStatus::None)]
    pub status: CoronaryStatus,
    #[arg(
        long = "regressed-to",
        value_enum,
        help = "Size band the aneurysm regressed to (only with --status regressed)"
    )]
    pub regressed_to: Option<RegressionTarget>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest a risk level from Z score and coronary status
    Classify {
        #[command(flatten)]
        obs: Observations,
    },
    /// Suggest a risk level and show the active management plan
    Assess {
        #[command(flatten)]
        obs: Observations,
        #[arg(long, value_name = "KEY", help = "Manually choose the risk level")]
        risk: Option<RiskKey>,
    },
    /// Show the management plan for one risk level
    Plan { key: RiskKey },
    /// Show all eleven plans as a matrix
    Matrix,
    /// List the risk levels
    Levels,
    /// Export a plan as plain text or markdown
    Export {
        key: RiskKey,
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
        #[arg(long, default_value_t = false, help = "Append the full matrix")]
        with_matrix: bool,
        #[arg(long, value_name = "PATH", help = "Write to a file instead of stdout")]
        out: Option<PathBuf>,
    },
    /// Interactive session reading commands from stdin
    Session,
    /// Show the resolved configuration
    Config,
}
