use crate::constants::{ANGLE_CLOSE, ANGLE_OPEN, INCLUDE_DIRECTIVE, QUOTE, RECOGNIZED_EXTENSIONS};

/// An include directive found on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeDirective {
    /// `#include <path>`, kept verbatim and never followed
    Angle(String),
    /// `#include "path"`, reduced to its base name
    Quoted(String),
}

/// Classify a line of source text.
///
/// Returns `None` for lines that do not start with `#include` (after
/// trimming) and for includes with a missing closing delimiter. Quoted
/// paths lose one recognized extension or `header_extension`.
pub fn classify_line(line: &str, header_extension: &str) -> Option<IncludeDirective> {
    let rest = line.trim().strip_prefix(INCLUDE_DIRECTIVE)?;
    let rest = rest.trim();

    if let Some(inner) = rest.strip_prefix(ANGLE_OPEN) {
        let end = inner.find(ANGLE_CLOSE)?;
        Some(IncludeDirective::Angle(inner[..end].trim().to_string()))
    } else if let Some(inner) = rest.strip_prefix(QUOTE) {
        let end = inner.find(QUOTE)?;
        Some(IncludeDirective::Quoted(base_name(
            inner[..end].trim(),
            header_extension,
        )))
    } else {
        None
    }
}

/// Strip one recognized extension, or the configured header extension,
/// from a file name.
///
/// `util.h` becomes `util`, `sub/io.cpp` becomes `sub/io`. Names without a
/// recognized extension are returned unchanged.
pub fn base_name(path: &str, header_extension: &str) -> String {
    if let Some((stem, ext)) = path.rsplit_once('.') {
        // A dot inside a directory component is not an extension
        let in_file_name = !ext.contains('/') && !ext.contains('\\');
        let recognized = |known: &str| known.eq_ignore_ascii_case(ext);
        if in_file_name
            && !stem.is_empty()
            && (RECOGNIZED_EXTENSIONS.iter().any(|known| recognized(known))
                || recognized(header_extension))
        {
            return stem.to_string();
        }
    }
    path.to_string()
}
