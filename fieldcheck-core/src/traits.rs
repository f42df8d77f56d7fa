// Self-validating records

use crate::ValidationErrors;

/// A record that knows how to check its own fields.
///
/// Generic handlers such as [`ValidationPipe`](crate::ValidationPipe) use
/// this to validate decoded input without knowing the concrete type.
///
/// ```
/// use fieldcheck_core::{Validate, ValidationErrors, positive_number, str_length};
///
/// struct Order {
///     reference: String,
///     quantity: i32,
/// }
///
/// impl Validate for Order {
///     fn validate(&self) -> Result<(), ValidationErrors> {
///         ValidationErrors::new()
///             .validate("reference", [str_length(&self.reference, 3, 12)])
///             .validate("quantity", [positive_number(self.quantity)])
///             .into_result()
///     }
/// }
///
/// let order = Order { reference: "ORD-1".into(), quantity: 0 };
/// let errors = order.validate().unwrap_err();
/// assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["quantity"]);
/// ```
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), ValidationErrors> {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        (**self).validate()
    }
}

impl<T: Validate> Validate for [T] {
    /// Validates every element; the first failing element's report wins.
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.as_slice().validate()
    }
}
