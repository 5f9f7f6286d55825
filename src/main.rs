use anyhow::Context;
use clap::Parser;
use zoo_demo::utils::logger;
use zoo_demo::{AnimalRepository, CliConfig, CommandLoop, InMemoryAnimalRepository, ZooService};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting zoo-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::debug!("Zoo session failed: {:?}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let mut zoo = ZooService::new(InMemoryAnimalRepository::new());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    CommandLoop::new(&mut zoo, stdin.lock(), stdout.lock(), config.input_policy())
        .run()
        .context("zoo menu stopped")?;

    tracing::info!(
        "✅ Session ended with {} animals",
        zoo.repository().get_all().len()
    );
    Ok(())
}
