//! Contact Book - demonstration entry point
//!
//! Builds a small address book and prints every record batch by batch.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use contact_book::{AddressBook, Config, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Logs go to stderr; stdout carries the listing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut address_book = AddressBook::new();

    let born = NaiveDate::from_ymd_opt(1999, 5, 15).context("invalid sample birthday")?;
    address_book.add_record(Record::new("Oleg Babay", Some("123456789"), Some(born))?);
    address_book.add_record(Record::new("Olya Kozlova", Some("987654321"), None)?);

    let batches = address_book.iterate(config.batch_size)?;
    info!(
        "Listing {} records in {} batches of up to {}",
        address_book.len(),
        batches.len(),
        batches.batch_size()
    );

    for batch in batches {
        for record in batch {
            println!("Name: {}", record.name());
            if let Some(phone) = record.phone() {
                println!("Phone: {}", phone);
            }
            if let Some(days) = record.days_to_birthday() {
                println!("Days to Birthday: {} days", days);
            }
            println!("-----");
        }
    }

    Ok(())
}
