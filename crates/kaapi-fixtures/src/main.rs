use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use kaapi_fixtures::cli::Args;
use kaapi_fixtures::data::fixtures::generate_fixtures;
use kaapi_fixtures::error::FixtureResult;

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> FixtureResult<()> {
    let args = Args::parse();
    setup_logging(args.log_level());

    let config = args.resolve_config()?;
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let files = generate_fixtures(&config, &mut rng)?;
    let rows: usize = files.iter().map(|f| f.rows).sum();
    println!(
        "fixtures ready at {} ({} files, {rows} transactions)",
        config.output_dir.display(),
        files.len()
    );

    Ok(())
}
