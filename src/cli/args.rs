use std::path::PathBuf;

use clap::Parser;

/// Chart a sector: deploy a sensor at the start position and print the
/// ship status, celestial map and gazetteer.
#[derive(Debug, Parser)]
#[command(name = "stardrift", version)]
pub struct Args {
    /// Planet/artifact catalog file
    #[arg(short, long, default_value = "ARTIFACT.TXT")]
    pub catalog: PathBuf,

    /// JSON vessel configuration; defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ship name
    #[arg(short, long, default_value = "G.S.S. Old Spice")]
    pub name: String,

    /// Seed for the random number generator (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Show the full gazetteer (quality engineer access)
    #[arg(long)]
    pub qe: bool,

    /// Append discovered artifacts to the gazetteer
    #[arg(long)]
    pub discoveries: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
