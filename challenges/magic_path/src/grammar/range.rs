// Baseline recognizer. Treats every `D` in a range as a candidate split point
// and tries them all, so the worst case is exponential in the input length.
use super::{DOWN, LEFT, RIGHT, UP};

pub fn is_magic_path(text: &str) -> bool {
    let path = text.as_bytes();
    magic_path(path, 0, path.len())
}

/// Is `path[start..end]` a complete magic path? An empty range never is.
fn magic_path(path: &[u8], start: usize, end: usize) -> bool {
    let Some(span) = path.get(start..end) else {
        return false;
    };
    if span.is_empty() {
        return false;
    }

    if detour(path, start, end) {
        return true;
    }

    span.iter().enumerate().any(|(offset, &c)| {
        let split = start + offset;
        c == DOWN && detour(path, start, split) && magic_path(path, split + 1, end)
    })
}

/// Is `path[start..end]` exactly one detour: a lone `U` or `L <magic path> R`?
fn detour(path: &[u8], start: usize, end: usize) -> bool {
    match path.get(start..end) {
        Some([UP]) => true,
        // the interior has to hold at least one symbol
        Some([LEFT, interior @ .., RIGHT]) if !interior.is_empty() => {
            magic_path(path, start + 1, end - 1)
        }
        _ => false,
    }
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
        assert!(is_magic_path("UDLLURR"));
    }

    #[test]
    fn test_empty() {
        assert!(!is_magic_path(""));
    }

    #[test]
    fn test_rejects() {
        assert!(!is_magic_path("D"));
        assert!(!is_magic_path("LR"));
        assert!(!is_magic_path("UD"));
        assert!(!is_magic_path("DU"));
        assert!(!is_magic_path("UU"));
        assert!(!is_magic_path("LURR"));
        assert!(!is_magic_path("LLUR"));
        assert!(!is_magic_path("LUDR"));
    }

    #[test]
    fn test_detour_bounds() {
        let path = b"LUR";
        assert!(detour(path, 0, 3));
        assert!(detour(path, 1, 2));
        assert!(!detour(path, 0, 2));
        assert!(!detour(path, 2, 2));
        // ranges outside the input are a miss, not a panic
        assert!(!detour(path, 2, 9));
        assert!(!magic_path(path, 3, 1));
    }
}
