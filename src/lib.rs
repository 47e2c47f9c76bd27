//! Contact Book - validated contact records with birthday countdowns.
//!
//! A small contact-book data model: people's names, phone numbers and
//! birthdays, validated whenever a value is assigned, collected in an
//! address book that can be walked in fixed-size batches.
//!
//! # Architecture
//!
//! - **domain**: Generic validated field plus the phone and birthday fields
//! - **models**: The contact record and its days-to-birthday calculation
//! - **book**: The address book and its batched traversal
//! - **error**: Crate-level error types
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Batches, DEFAULT_BATCH_SIZE};
pub use config::Config;
pub use domain::{Birthday, Field, FieldKind, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError, ConfigResult};
pub use models::Record;
