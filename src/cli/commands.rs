use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "plagcheck", version, about = "Bigram overlap plagiarism possibility service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Compare two text files once and print the decision
    Compare(CompareArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Detection settings that override the configuration file.
#[derive(Args, Clone, Default)]
pub struct DetectionOverrides {
    /// Stopword language (e.g. spanish, english)
    #[arg(long)]
    pub language: Option<String>,

    /// Similarity threshold in [0, 1]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Count a coefficient equal to the threshold as a match
    #[arg(long)]
    pub inclusive: bool,

    /// Expose intermediate bigram sets
    #[arg(long)]
    pub diagnostics: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    #[command(flatten)]
    pub detection: DetectionOverrides,
}

#[derive(Args, Clone)]
pub struct CompareArgs {
    /// File holding the original text
    #[arg(short, long)]
    pub original: String,

    /// File holding the suspicious text
    #[arg(short, long)]
    pub suspect: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub detection: DetectionOverrides,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub file: String,
}
