//! Inline the `skip_if` helper into scripts that import it.
//!
//! The target runtime has no module search path, so `import skip_if` cannot be resolved there.
//! Instead, the import line is replaced by a class whose body is the helper source, indented by one
//! tab. The splice is purely textual; the helper is expected to be a flat sequence of definitions.

use std::borrow::Cow;

/// The exact line (terminator included) that triggers a splice.
pub const HELPER_IMPORT: &str = "import skip_if\n";

/// Header line inserted in place of [`HELPER_IMPORT`].
pub const HELPER_CLASS_HEADER: &str = "class skip_if:\n";

/// Indentation added in front of each inlined helper line.
pub const INDENT_UNIT: char = '\t';

const DOCSTRING_DELIMITER: &str = "\"\"\"";

/// Check whether a script contains the helper import line.
pub fn contains_helper_import(script: &str) -> bool {
    import_offset(script).is_some()
}

/// Iterate over the helper lines that are kept when splicing.
///
/// Blank lines, comment lines and lines starting with a docstring delimiter are dropped. Kept
/// lines are returned without their `\n` or `\r\n` terminator; leading whitespace is kept.
pub fn helper_body(helper: &str) -> impl Iterator<Item = &str> {
    helper
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| {
            let stripped = line.trim();
            !stripped.is_empty() && !stripped.starts_with('#') && !stripped.starts_with(DOCSTRING_DELIMITER)
        })
}

/// Replace the first helper import line of `script` with the inlined helper class.
///
/// ## Parameters
/// - `script`: the test script text.
/// - `helper`: the helper source text.
///
/// ## Returns
/// - `Cow::Borrowed(script)` when the script has no helper import line.
/// - `Cow::Owned` with the class header and the indented helper body in place of the import.
///
/// ## Notes
/// - Only the first import line is replaced.
/// - Every inlined helper line ends in `\n`, whatever terminator the helper file uses.
pub fn splice_helper<'a>(script: &'a str, helper: &str) -> Cow<'a, str> {
    let Some(start) = import_offset(script) else {
        return Cow::Borrowed(script);
    };
    let end = start + HELPER_IMPORT.len();

    let mut out = String::with_capacity(script.len() + HELPER_CLASS_HEADER.len() + helper.len() + helper.len() / 16);
    out.push_str(&script[..start]);
    out.push_str(HELPER_CLASS_HEADER);
    for line in helper_body(helper) {
        out.push(INDENT_UNIT);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&script[end..]);
    Cow::Owned(out)
}

/// Byte offset of the first line equal to [`HELPER_IMPORT`].
fn import_offset(script: &str) -> Option<usize> {
    let mut offset = 0;
    for line in script.split_inclusive('\n') {
        if line == HELPER_IMPORT {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}
