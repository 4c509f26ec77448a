use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unity-merger")]
#[command(version)]
#[command(
    about = "Merge main.c or main.cpp and its local headers into a single file",
    long_about = "Run in a directory holding main.c or main.cpp. Quoted includes are followed \
                  recursively and merged, together with matching sources, into merged.c or merged.cpp."
)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "UNITY_MERGER_CONFIG")]
    pub config: Option<PathBuf>,
}
