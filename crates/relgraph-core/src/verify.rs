//! Input validation.
//!
//! Runs before every layout pass. Validation has no side effects and fails
//! on the first offending record, so a failed `generate` leaves no partial
//! draw state behind.

use crate::error::{Error, Result};
use crate::record;
use serde_json::Value;

/// Checks the shape and value constraints of incoming records:
///
/// - the slice is non-empty;
/// - every record is an object with a string `parent`;
/// - `color` is an integer in `0..=3`;
/// - `parentColor` is an integer in `0..=4`.
pub fn verify(records: &[Value]) -> Result<()> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    for (index, rec) in records.iter().enumerate() {
        if !rec.is_object() || record::parent_of(rec).is_none() {
            return Err(Error::MissingParent { index });
        }
        match record::color_of(rec) {
            Some(color) if (0..=3).contains(&color) => {}
            _ => return Err(Error::InvalidColor { index }),
        }
        match record::parent_color_of(rec) {
            Some(pc) if (0..=4).contains(&pc) => {}
            _ => return Err(Error::InvalidParentColor { index }),
        }
    }
    Ok(())
}
