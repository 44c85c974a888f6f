//! Values accepted as CSV fields

use std::borrow::Cow;

/// A value that can be written as a single CSV field.
///
/// `None` stands for a null field. Null and empty fields are distinguished only
/// by [`QuoteStrategy::Always`](crate::QuoteStrategy::Always), which quotes both,
/// and [`QuoteStrategy::Empty`](crate::QuoteStrategy::Empty), which quotes only
/// the empty string.
pub trait AsField {
    /// The field text, or `None` for a null field
    fn as_field(&self) -> Option<&str>;
}

impl AsField for str {
    fn as_field(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsField for String {
    fn as_field(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsField for Cow<'_, str> {
    fn as_field(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: AsField + ?Sized> AsField for &T {
    fn as_field(&self) -> Option<&str> {
        (**self).as_field()
    }
}

impl<T: AsField> AsField for Option<T> {
    fn as_field(&self) -> Option<&str> {
        self.as_ref().and_then(AsField::as_field)
    }
}
