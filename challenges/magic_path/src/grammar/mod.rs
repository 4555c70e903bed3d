// Recognizers for the magic path grammar:
//
//   MagicPath := Detour ('D' MagicPath)?
//   Detour    := 'U' | 'L' MagicPath 'R'
//
// All three modules accept exactly the same language, they differ only in
// how much work they do to get there.

pub mod cursor;
pub mod range;
pub mod span;

pub(crate) const LEFT: u8 = b'L';
pub(crate) const UP: u8 = b'U';
pub(crate) const DOWN: u8 = b'D';
pub(crate) const RIGHT: u8 = b'R';
