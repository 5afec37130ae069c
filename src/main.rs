//! Address Book - demo entry point
//!
//! Builds a small book, edits it through the public API and prints the result.
//! Logs go to stderr; stdout only carries the rendered book.

use address_book::{AddressBook, AddressBookError, Config, OutputFormat, Record};
use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output = %config.output_format, "Configuration loaded");

    if let Err(e) = run(&config) {
        error!("Address book demo failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn run(config: &Config) -> Result<(), AddressBookError> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john)?;

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane)?;

    render(&book, config.output_format);

    // Rejected operations leave the book untouched.
    report(book.add_record(Record::new("John")).map(|_| ()));
    report(book.find_mut("John")?.add_phone("5555555555"));
    report(book.find("Nobody").map(|_| ()));

    let john = book.find_mut("John")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    let found = john.find_phone("5555555555")?;
    println!("{}: {}", john.name(), found);

    book.delete("Jane")?;
    book.find_mut("John")?.remove_phone("1112223333")?;

    render(&book, config.output_format);
    Ok(())
}

fn render(book: &AddressBook, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for (_, record) in book {
                println!("{}", record);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(book) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to render address book as JSON: {}", e),
        },
    }
}

fn report(result: Result<(), AddressBookError>) {
    if let Err(e) = result {
        warn!("{}", e);
    }
}
