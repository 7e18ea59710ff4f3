//! Derive C function identifiers from test paths.
//!
//! `basics/foo-bar.py` becomes `test_basics_foo_bar_py_fn`: path separators, dots and hyphens turn
//! into underscores, and the result is wrapped in a fixed prefix and suffix.

/// Prefix of every generated test function.
pub const TEST_FN_PREFIX: &str = "test_";

/// Suffix of every generated test function.
pub const TEST_FN_SUFFIX: &str = "_fn";

/// Characters of a test path that are rewritten to `_`.
pub const SANITIZED_CHARS: [char; 3] = ['/', '.', '-'];

/// Build the C function identifier for a test path.
///
/// ## Parameters
/// - `path`: relative, forward-slash separated test path (e.g. `basics/foo.py`).
///
/// ## Returns
/// - `String`: the sanitized identifier. It is not guaranteed to be a valid C identifier if the
///   path contains other punctuation; check with [`is_c_identifier`].
///
/// ## Examples
/// ```rust
/// use tinytest_core::test_function_ident;
///
/// assert_eq!(test_function_ident("basics/foo.py"), "test_basics_foo_py_fn");
/// ```
pub fn test_function_ident(path: &str) -> String {
    let mut ident = String::with_capacity(TEST_FN_PREFIX.len() + path.len() + TEST_FN_SUFFIX.len());
    ident.push_str(TEST_FN_PREFIX);
    ident.extend(path.chars().map(|c| if SANITIZED_CHARS.contains(&c) { '_' } else { c }));
    ident.push_str(TEST_FN_SUFFIX);
    ident
}

/// Check whether `name` is a plain ASCII C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_replaces_separators() {
        assert_eq!(test_function_ident("basics/foo.py"), "test_basics_foo_py_fn");
        assert_eq!(test_function_ident("extmod/vfs-fat.py"), "test_extmod_vfs_fat_py_fn");
        assert_eq!(test_function_ident("thread/thread_ident1.py"), "test_thread_thread_ident1_py_fn");
    }

    #[test]
    fn test_ident_is_not_injective() {
        assert_eq!(test_function_ident("a/b.py"), test_function_ident("a-b.py"));
    }

    #[test]
    fn test_is_c_identifier() {
        assert!(is_c_identifier("test_basics_foo_py_fn"));
        assert!(is_c_identifier("_x1"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("1abc"));
        assert!(!is_c_identifier("test_a b_fn"));
        assert!(!is_c_identifier("test_ü_fn"));
    }
}
