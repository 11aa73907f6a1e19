use console::{demo, reports};
use exchange_core::Exchange;

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting exchange console");

    let mut exchange = Exchange::new();
    let start = chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0);
    demo::seed_reference_dataset(&mut exchange, start)?;

    print!("{}", reports::portfolios::render(&exchange));
    println!();
    print!("{}", reports::orders::render(&exchange));
    println!();
    print!("{}", reports::trades::render(&exchange));
    println!();
    print!("{}", reports::spread::render(&exchange));

    Ok(())
}
