/*!
 * Partition Simulator - Main Entry Point
 *
 * Runs an allocate/free script against a worst-fit partition table and
 * prints the table after every step.
 */

use miette::{IntoDiagnostic, Result};
use partition_sim::{
    init_tracing, report, Collector, Driver, PartitionTable, SimConfig, Snapshot,
};
use std::sync::Arc;
use tracing::info;

fn print_snapshot(snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot).into_diagnostic()?);
    } else {
        print!("{}", report::render_status(snapshot));
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();

    let config = SimConfig::from_env()?;
    let script = config.load_script()?;
    let total = config.resolve_total_memory(&script);

    info!(total, steps = script.len(), "Partition simulator starting");

    let collector = Arc::new(Collector::new());
    let table = PartitionTable::new(total)?.with_collector(collector.clone());
    let mut driver = Driver::new(table);

    print_snapshot(&driver.allocator().snapshot(), config.report_json)?;

    let mut output = Ok(());
    driver.run(&script, |_, _, snapshot| {
        if output.is_err() {
            return;
        }
        println!();
        for event in collector.drain() {
            println!("{}", report::render_event(&event));
        }
        output = print_snapshot(snapshot, config.report_json);
    });
    output?;

    println!();
    println!("{}", report::render_stats(&driver.allocator().stats()));

    info!("Partition simulator finished");
    Ok(())
}
