// Deterministic recognizer over a single advancing position. The grammar is
// LL(1) so no choice is ever revisited: a `D` after a detour always continues
// the path, an `L` or `U` always opens a detour.
//
// The text is handed to every rule instead of living in shared state, so calls
// are re-entrant and can run from any number of threads at once.
use super::{DOWN, LEFT, RIGHT, UP};

pub fn is_magic_path(text: &str) -> bool {
    let path = text.as_bytes();
    // a successful parse may stop short of the end, require all of it
    magic_path(path, 0) == Some(path.len())
}

/// Parses a magic path starting at `pos`, returning the position just past it.
///
/// The `D`-chain is walked iteratively, so recursion only happens for nested
/// `L ... R` detours and the stack depth follows the nesting depth.
fn magic_path(path: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        match path.get(pos)? {
            &LEFT | &UP => {
                pos = detour(path, pos)?;
                match consume(path, pos, DOWN) {
                    Some(next) => pos = next,
                    None => return Some(pos),
                }
            }
            _ => return None,
        }
    }
}

fn detour(path: &[u8], pos: usize) -> Option<usize> {
    match path.get(pos)? {
        &LEFT => {
            let pos = consume(path, pos, LEFT)?;
            let pos = magic_path(path, pos)?;
            consume(path, pos, RIGHT)
        }
        &UP => consume(path, pos, UP),
        _ => None,
    }
}

#[inline(always)]
fn consume(path: &[u8], pos: usize, expected: u8) -> Option<usize> {
    (path.get(pos) == Some(&expected)).then_some(pos + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        assert!(is_magic_path("U"));
        assert!(is_magic_path("UDU"));
        assert!(is_magic_path("LUR"));
        assert!(is_magic_path("LUDUR"));
        assert!(is_magic_path("LUDUDUR"));
    }

    #[test]
    fn test_partial_parse_is_not_a_match() {
        // "U" parses, the trailing symbols are left over
        assert_eq!(magic_path(b"UR", 0), Some(1));
        assert!(!is_magic_path("UR"));
        assert!(!is_magic_path("UU"));
        assert!(!is_magic_path("LURLUR"));
    }

    #[test]
    fn test_consume() {
        assert_eq!(consume(b"UD", 1, DOWN), Some(2));
        assert_eq!(consume(b"UD", 0, DOWN), None);
        assert_eq!(consume(b"UD", 2, DOWN), None);
    }

    #[test]
    fn test_runs_off_the_end() {
        assert!(!is_magic_path(""));
        assert!(!is_magic_path("L"));
        assert!(!is_magic_path("LU"));
        assert!(!is_magic_path("UD"));
        assert!(!is_magic_path("LUD"));
        assert!(!is_magic_path("LLLLLL"));
        assert!(!is_magic_path("RRRRRR"));
    }

    #[test]
    fn test_long_chain() {
        let mut path = "UD".repeat(100_000);
        path.push('U');
        assert!(is_magic_path(&path));
        path.push('D');
        assert!(!is_magic_path(&path));
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 1_000;
        let path = format!("{}U{}", "L".repeat(depth), "R".repeat(depth));
        assert!(is_magic_path(&path));
        assert!(!is_magic_path(&path[..path.len() - 1]));
        assert!(!is_magic_path(&path[1..]));
    }
}
