//! Generic validated field holder.

use super::errors::ValidationError;
use std::fmt;
use std::marker::PhantomData;

/// The validation rule behind a concrete field type.
///
/// A kind turns a raw input into the stored value, or rejects it. The same
/// rule runs on construction and on every later [`Field::set_value`].
pub trait FieldKind {
    /// Input accepted by the field.
    type Raw;

    /// Value stored once the input has been accepted.
    type Value: Clone + fmt::Debug + PartialEq;

    /// Check `raw` and produce the value to store.
    fn validate(raw: Self::Raw) -> Result<Self::Value, ValidationError>;
}

/// A single value that always satisfies the predicate of its kind `K`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::new("123456789").unwrap();
/// assert!(phone.set_value("12345").is_err());
/// assert_eq!(phone.value(), "123456789");
/// ```
pub struct Field<K: FieldKind> {
    value: K::Value,
    kind: PhantomData<fn() -> K>,
}

impl<K: FieldKind> Field<K> {
    /// Create a field from a raw input, running the kind's validation.
    ///
    /// # Errors
    ///
    /// Returns the kind's `ValidationError` if the input is rejected.
    pub fn new(raw: impl Into<K::Raw>) -> Result<Self, ValidationError> {
        Ok(Self {
            value: K::validate(raw.into())?,
            kind: PhantomData,
        })
    }

    /// Get the current value.
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Replace the current value.
    ///
    /// The stored value is left untouched when validation fails.
    pub fn set_value(&mut self, raw: impl Into<K::Raw>) -> Result<(), ValidationError> {
        self.value = K::validate(raw.into())?;
        Ok(())
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> K::Value {
        self.value
    }
}

impl<K: FieldKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: FieldKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.value).finish()
    }
}

impl<K: FieldKind> PartialEq for Field<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> Eq for Field<K> where K::Value: Eq {}
