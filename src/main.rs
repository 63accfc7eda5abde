use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use appicon_gen::{icon_gen, DEFAULT_OUTPUT};

#[derive(Debug, Parser)]
#[clap(
    name = "appicon-gen",
    about = "Render the 1024x1024 application icon to a PNG file"
)]
struct Args {
    /// Output PNG path. Its parent directory must exist.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let written = icon_gen::generate(&args.output)
        .with_context(|| format!("Failed to generate icon at {}", args.output.display()))?;
    println!("✓ Wrote {}", written.display());
    Ok(())
}
