//! Fixed block palette.
//!
//! The wire format allows `color` in `0..=3` and `parentColor` in `0..=4`, so
//! the palette carries five entries. Out-of-range indexes clamp instead of
//! panicking: `color` falls back to the first slot, `parentColor` to the last.

pub const PALETTE: [&str; 5] = ["#c4f1be", "#a2c3a4", "#869d96", "#525b76", "#201e50"];

/// Fill color for a child block. `color` outside `0..=3` falls back to slot 0.
pub fn block_fill(color: i64) -> &'static str {
    match usize::try_from(color) {
        Ok(i) if i < PALETTE.len() - 1 => PALETTE[i],
        _ => PALETTE[0],
    }
}

/// Fill color for a parent label. `parent_color` outside `0..=4` falls back
/// to the last slot.
pub fn parent_fill(parent_color: i64) -> &'static str {
    match usize::try_from(parent_color) {
        Ok(i) if i < PALETTE.len() => PALETTE[i],
        _ => PALETTE[PALETTE.len() - 1],
    }
}
