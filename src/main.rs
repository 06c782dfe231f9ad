//! Contact Book - demonstration entry point
//!
//! Builds a small book, edits it, and pages through it, logging to stderr
//! and printing records to stdout.

use anyhow::Result;
use contact_book::{Clock, Config, ContactBook, ContactRecord, SystemClock};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries just the demo output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(page_size = config.page_size, "Configuration loaded");

    if let Err(e) = run(&config, &SystemClock) {
        error!("Demo failed: {}", e);
        return Err(e);
    }
    Ok(())
}

fn run(config: &Config, clock: &dyn Clock) -> Result<()> {
    let mut book = ContactBook::new();

    let mut john = ContactRecord::new("John", None)?;
    println!("{}", john.add_phone("1234567890"));
    println!("{}", john.add_phone("5555555555"));
    book.add_record(john);

    let mut jane = ContactRecord::new("Jane", None)?;
    println!("{}", jane.add_phone("9876543210"));
    book.add_record(jane);

    for record in &book {
        println!("{}", record);
    }

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333")?;
        println!("{}", john);

        if let Some(phone) = john.find_phone("5555555555") {
            println!("{}: {}", john.name(), phone);
        }
    }

    println!("{}", book.delete("Jane"));

    let john = ContactRecord::new("John", Some("2000-05-20"))?;
    if let Some(days) = john.birthday().days_until_next_birthday_from(clock) {
        println!("Days until {}'s birthday: {}", john.name(), days);
    }

    for (index, batch) in book.iter_batches(config.page_size)?.enumerate() {
        println!("Batch {}:", index + 1);
        for record in batch {
            println!("  {}", record);
        }
    }

    Ok(())
}
