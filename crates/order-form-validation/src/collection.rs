//! Collection validation functions

use alloc::format;
use alloc::string::String;

/// Returns the first item rejected by `accept`, in iteration order
pub fn first_rejected<'a, T, I, F>(items: I, mut accept: F) -> Option<&'a T>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> bool,
{
    items.into_iter().find(|item| !accept(*item))
}

/// Validates every item in a collection with `accept`
///
/// An empty collection always passes.
pub fn validate_each<'a, T, I, F>(items: I, accept: F) -> Result<(), String>
where
    T: ?Sized + core::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> bool,
{
    match first_rejected(items, accept) {
        Some(item) => Err(format!("Invalid item: {}", item)),
        None => Ok(()),
    }
}
