//! Arithmetic on the cyclic ring of twelve palace positions.
//!
//! Positions are 1-based: 1 is the life palace, 12 the parents palace.
//! Every position computed anywhere in the workspace goes through
//! [`normalize_position`], so the wrap rule is defined exactly once.

/// Number of positions on the palace ring.
pub const RING_SIZE: i32 = 12;

/// Distance between a palace and its opposite palace.
pub const OPPOSITE_OFFSET: i32 = 6;

/// Wrap an arbitrary integer onto the ring [1, 12].
///
/// Accepts any offset, however far outside the ring: 0 maps to 12,
/// 13 maps to 1, -3 maps to 9.
pub fn normalize_position(raw: i32) -> u8 {
    ((raw - 1).rem_euclid(RING_SIZE) + 1) as u8
}

/// Position reached by stepping `offset` palaces from `base`.
pub fn offset_position(base: u8, offset: i32) -> u8 {
    normalize_position(base as i32 + offset)
}

/// The palace directly across the ring from `position`.
pub fn opposite_position(position: u8) -> u8 {
    offset_position(position, OPPOSITE_OFFSET)
}

/// 0-based array index of a 1-based ring position.
pub(crate) fn slot(position: u8) -> usize {
    normalize_position(position as i32) as usize - 1
}
