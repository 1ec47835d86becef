//! Resolve a 1-based operator choice into an item of a freshly computed list.
//!
//! Kept apart from the eligibility queries so the index arithmetic can be
//! tested without any storage or terminal.

use crate::error::LedgerError;

/// Return the item at the 1-based `choice`.
pub fn resolve<T>(items: &[T], choice: usize) -> Result<&T, LedgerError> {
    choice
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .ok_or(LedgerError::InvalidSelection {
            choice,
            available: items.len(),
        })
}

/// Parse operator input such as `" 2 "` into a 1-based choice.
pub fn parse_choice(input: &str) -> Result<usize, LedgerError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| LedgerError::InputError(format!("'{}' is not a number", input.trim())))
}
