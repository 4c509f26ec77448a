use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::discover::DiscoveryContext;
use super::language::{EntryFile, Language};
use super::source::local_path;
use super::strip::strip_and_append;
use crate::constants::INCLUDE_DIRECTIVE;
use crate::utils::MergeError;

/// Files that made it into the merged output, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenFragments {
    pub headers: Vec<PathBuf>,
    pub sources: Vec<PathBuf>,
    /// The entry file was also merged as the source of a local header
    pub entry_duplicated: bool,
}

/// Writes the merged translation unit for one discovery result
pub struct MergeWriter<'a> {
    root: &'a Path,
    header_extension: &'a str,
    entry: &'a EntryFile,
    discovery: &'a DiscoveryContext,
}

impl<'a> MergeWriter<'a> {
    pub fn new(
        root: &'a Path,
        header_extension: &'a str,
        entry: &'a EntryFile,
        discovery: &'a DiscoveryContext,
    ) -> Self {
        Self {
            root,
            header_extension,
            entry,
            discovery,
        }
    }

    fn language(&self) -> Language {
        self.entry.language
    }

    /// Create the output file and write everything into it.
    ///
    /// A failure after creation leaves whatever was already written.
    pub fn write_to_file(&self, output: &Path) -> Result<WrittenFragments, MergeError> {
        let file = File::create(output).map_err(|source| MergeError::OutputCreate {
            path: output.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        let written = self.write(&mut out)?;
        out.flush()?;
        Ok(written)
    }

    /// Write, in order: angle includes, local headers, local sources, the entry file
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<WrittenFragments> {
        let mut written = WrittenFragments::default();

        for include in self.discovery.angle_includes() {
            writeln!(out, "{} <{}>", INCLUDE_DIRECTIVE, include)?;
        }

        for base in self.discovery.local_headers() {
            let path = local_path(self.root, base, self.header_extension);
            if strip_and_append(&path, out)? {
                written.headers.push(path);
            }
        }

        let source_extension = self.language().source_extension();
        for base in self.discovery.local_headers() {
            let path = local_path(self.root, base, source_extension);
            if strip_and_append(&path, out)? {
                if path == self.entry.path {
                    warn!(
                        "{} is merged both as a local source and as the entry file",
                        path.display()
                    );
                    written.entry_duplicated = true;
                }
                written.sources.push(path);
            }
        }

        if !strip_and_append(&self.entry.path, out)? {
            debug!("Entry file {} vanished before merge", self.entry.path.display());
        }

        Ok(written)
    }
}
