use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use super::source::SourceFile;
use crate::constants::{INCLUDE_DIRECTIVE, PRAGMA_ONCE_DIRECTIVE};

/// Whether a line is dropped from merged output
pub fn is_stripped_line(line: &[u8]) -> bool {
    let trimmed = line.trim_ascii();
    trimmed.starts_with(INCLUDE_DIRECTIVE.as_bytes())
        || trimmed.starts_with(PRAGMA_ONCE_DIRECTIVE.as_bytes())
}

/// Copy a file's lines minus include and `#pragma once` lines.
///
/// Each kept line is terminated with `\n`. If the fragment then ends in an
/// empty line, one newline sequence is removed so fragments do not pile up
/// blank lines between them.
pub fn strip_source(file: &SourceFile) -> Vec<u8> {
    let mut fragment = Vec::with_capacity(file.body().len());
    for line in file.lines().filter(|line| !is_stripped_line(line)) {
        fragment.extend_from_slice(line);
        fragment.push(b'\n');
    }
    trim_trailing_blank_line(&mut fragment);
    fragment
}

fn trim_trailing_blank_line(fragment: &mut Vec<u8>) {
    if fragment.ends_with(b"\r\n\r\n") {
        fragment.truncate(fragment.len() - 2);
    } else if fragment.ends_with(b"\n\n") {
        fragment.pop();
    }
}

/// Strip a file and append it to `out`.
///
/// Returns `Ok(false)` without writing anything when the file cannot be read.
pub fn strip_and_append<W: Write>(path: &Path, out: &mut W) -> io::Result<bool> {
    let Some(file) = SourceFile::open(path) else {
        return Ok(false);
    };
    let fragment = strip_source(&file);
    debug!("Appending {} ({} bytes)", path.display(), fragment.len());
    out.write_all(&fragment)?;
    Ok(true)
}
