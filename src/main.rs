use anyhow::Context;
use clap::Parser;
use work_orders::utils::{generator, logger};
use work_orders::{BusinessHours, CliConfig, IdGenerator, WorkOrderStore};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!(
        "Generating {} work orders with seed {}",
        config.orders,
        config.seed
    );
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let ids = IdGenerator::new(1);
    let orders = generator::sample_orders(&ids, config.seed, config.orders)
        .context("failed to generate sample orders")?;
    let store = WorkOrderStore::new(orders);

    let total = store
        .total_productive_hours()
        .context("total over the generated batch")?;
    tracing::info!("Total productive hours: {}", total);

    let weekend_ids = store.weekend_order_ids();
    tracing::info!("Weekend order ids: {:?}", weekend_ids);

    let window = BusinessHours::default();
    let after_hours = store.outside_business_hours(&window);
    tracing::info!(
        "Productive hours outside {}-{} business hours: {}",
        window.start,
        window.end,
        after_hours
    );

    let distinct = store.distinct_productive_hours();
    tracing::info!("Distinct productive-hours values: {}", distinct.len());

    let index = store.id_index().context("building the id index")?;
    tracing::info!("Id index entries: {}", index.len());

    let sorted = store.orders_by_most_recent();
    println!(
        "{}",
        serde_json::to_string_pretty(&sorted).context("serializing sorted orders")?
    );

    Ok(())
}
