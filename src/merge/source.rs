use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::UTF8_BOM;

/// Path of `<base>.<extension>` under `root`
pub fn local_path(root: &Path, base: &str, extension: &str) -> PathBuf {
    root.join(format!("{}.{}", base, extension))
}

/// Raw contents of a C/C++ file, handled as bytes so unusual encodings
/// pass through untouched
#[derive(Debug, Clone)]
pub struct SourceFile {
    bytes: Vec<u8>,
}

impl SourceFile {
    /// Load a file, returning `Ok(None)` when it does not exist
    pub fn load(path: &Path) -> io::Result<Option<Self>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(Self::from_bytes(bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Load a file, treating any failure as absence
    pub fn open(path: &Path) -> Option<Self> {
        match Self::load(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Contents after an optional leading UTF-8 byte order mark
    pub fn body(&self) -> &[u8] {
        self.bytes.strip_prefix(UTF8_BOM).unwrap_or(self.bytes.as_slice())
    }

    /// Lines without their `\n` terminator. A carriage return, if any,
    /// stays on the line.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        let body = self.body();
        let mut lines = body
            .strip_suffix(b"\n".as_slice())
            .unwrap_or(body)
            .split(|&b| b == b'\n');
        if body.is_empty() {
            // split yields one empty piece for empty input
            lines.next();
        }
        lines
    }

    /// Lines decoded for directive matching
    pub fn text_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines()
            .map(|line| String::from_utf8_lossy(line).into_owned())
    }
}
