//! Domain field types.
//!
//! Every field wraps a single value and re-runs its validation rule on each
//! assignment, so an invalid phone number or birthday can never be stored.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::{Birthday, BirthdayRule};
pub use errors::ValidationError;
pub use field::{Field, FieldKind};
pub use phone::{Phone, PhoneRule};
