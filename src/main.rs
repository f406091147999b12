use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use docgroup::{print_grouping, GroupingDriver};

#[derive(Parser)]
#[command(name = "docgroup", about = "Group HTML documents into similarity clusters")]
struct Cli {
    /// Document collections to group, one directory per collection
    #[arg(required = true)]
    dirs: Vec<PathBuf>,

    /// Number of clusters per collection
    #[arg(short = 'k', long = "clusters", default_value_t = 5)]
    clusters: usize,

    /// File extension (without dot) marking eligible documents
    #[arg(long, default_value = "html")]
    extension: String,

    /// Centroid initialization seed
    #[arg(long, default_value_t = docgroup::DEFAULT_SEED)]
    seed: u64,

    /// Emit the grouping as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let driver = GroupingDriver::new()
        .extension(cli.extension.clone())
        .seed(cli.seed);

    let start = Instant::now();
    let mut failures = 0usize;

    // One collection failing must not stop the rest of the run.
    for dir in &cli.dirs {
        println!("=== {} ===", dir.display());
        match driver.group(dir, cli.clusters) {
            Ok(outcome) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&outcome.grouping)?);
                } else {
                    print_grouping(&outcome);
                }
            }
            Err(e) => {
                failures += 1;
                tracing::error!(collection = %dir.display(), error = %e, "collection failed");
            }
        }
    }

    tracing::info!(
        collections = cli.dirs.len(),
        failures,
        elapsed_s = start.elapsed().as_secs_f64(),
        "run complete"
    );

    if failures == cli.dirs.len() {
        anyhow::bail!("all {} collection(s) failed", failures);
    }
    Ok(())
}
