//! Address Book - demonstration entry point
//!
//! Builds a small address book, prints it, edits and looks up a phone, and
//! deletes a record. Records go to stdout; logs go to stderr.

use address_book::{AddressBook, Config, OutputFormat, Record};
use anyhow::Result;
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

    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output = %config.output, "Configuration loaded successfully");

    if let Err(e) = run(&config) {
        error!("Demo failed: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John Johnson")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john)?;

    let mut jane = Record::new("Jane Johnson")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane)?;

    print_book(&book, config.output)?;

    let john = book.find_mut("John Johnson")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    let found = john.find_phone("5555555555")?;
    println!("{}: {}", john.name(), found);

    book.delete("Jane Johnson")?;
    info!(records = book.len(), "Demo complete");
    Ok(())
}

fn print_book(book: &AddressBook, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for record in book.records() {
                println!("{}", record);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book)?),
    }
    Ok(())
}
