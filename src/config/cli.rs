use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "work-orders")]
#[command(about = "Generate a batch of work orders and run aggregate queries over them")]
pub struct CliConfig {
    /// Number of work orders to generate
    #[arg(long, default_value = "25")]
    pub orders: usize,

    /// Seed for the sample-data generator; same seed, same dataset
    #[arg(long, default_value = "42")]
    pub seed: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
