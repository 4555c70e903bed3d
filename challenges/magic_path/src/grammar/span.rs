// Zero-copy recognizer. Rules take the unconsumed remainder of the input as a
// borrowed slice and hand back what is left after them, so there is no
// position arithmetic and nothing is ever copied.
use super::{DOWN, LEFT, RIGHT, UP};

pub fn is_magic_path(text: &str) -> bool {
    matches!(magic_path(text.as_bytes()), Some([]))
}

fn magic_path(mut rest: &[u8]) -> Option<&[u8]> {
    loop {
        rest = detour(rest)?;
        match rest {
            [DOWN, tail @ ..] => rest = tail,
            _ => return Some(rest),
        }
    }
}

fn detour(rest: &[u8]) -> Option<&[u8]> {
    match rest {
        [UP, tail @ ..] => Some(tail),
        [LEFT, tail @ ..] => match magic_path(tail)? {
            [RIGHT, tail @ ..] => Some(tail),
            _ => None,
        },
        _ => None,
    }
}
