use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use super::include::{classify_line, IncludeDirective};
use super::source::{local_path, SourceFile};

/// Traversal state of a local header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Header is on the work stack; its own includes are still being walked
    InProgress,
    /// Header and everything it includes have been sequenced
    Done,
}

/// A quoted include that pointed back at a header still being traversed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeCycle {
    /// Base name of the including file, `None` for the entry file
    pub from: Option<String>,
    /// Base name of the header that closes the cycle
    pub to: String,
}

/// One file being scanned on the explicit work stack
struct Frame {
    /// `None` for the entry file, which is never sequenced
    base: Option<String>,
    includes: Vec<IncludeDirective>,
    next: usize,
}

impl Frame {
    fn scan(base: Option<String>, path: &Path, header_extension: &str) -> Self {
        let includes = match SourceFile::open(path) {
            Some(file) => file
                .text_lines()
                .filter_map(|l| classify_line(&l, header_extension))
                .collect(),
            None => {
                debug!("Not found locally: {}", path.display());
                Vec::new()
            }
        };
        Self {
            base,
            includes,
            next: 0,
        }
    }
}

/// Ordered results of walking the local include graph
#[derive(Debug, Default)]
pub struct DiscoveryContext {
    angle_includes: Vec<String>,
    local_headers: Vec<String>,
    cycles: Vec<IncludeCycle>,
    marks: HashMap<String, Mark>,
}

impl DiscoveryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Angle-bracket include paths in first-discovery order
    pub fn angle_includes(&self) -> &[String] {
        &self.angle_includes
    }

    /// Local header base names, dependencies first
    pub fn local_headers(&self) -> &[String] {
        &self.local_headers
    }

    /// Back edges that were skipped to break include cycles
    pub fn cycles(&self) -> &[IncludeCycle] {
        &self.cycles
    }

    /// Walk quoted includes starting at `entry`.
    ///
    /// Headers are looked up as `<base>.<header_extension>` under `root`, and
    /// `header_extension` is stripped from quoted paths like `h`, `c` and `cpp`.
    /// A header's base name is appended only after all of its own quoted
    /// includes have been sequenced, giving a topological order. Files that
    /// cannot be read contribute no includes but are still sequenced.
    pub fn discover(&mut self, root: &Path, entry: &Path, header_extension: &str) {
        let mut stack = vec![Frame::scan(None, entry, header_extension)];

        while let Some(frame) = stack.last_mut() {
            let Some(include) = frame.includes.get(frame.next).cloned() else {
                // All includes handled: sequence the file on the way out
                if let Some(frame) = stack.pop() {
                    if let Some(base) = frame.base {
                        self.marks.insert(base.clone(), Mark::Done);
                        self.local_headers.push(base);
                    }
                }
                continue;
            };
            frame.next += 1;

            match include {
                IncludeDirective::Angle(path) => {
                    if !self.angle_includes.contains(&path) {
                        debug!("Found system include <{}>", path);
                        self.angle_includes.push(path);
                    }
                }
                IncludeDirective::Quoted(base) => match self.marks.get(&base).copied() {
                    Some(Mark::Done) => {}
                    Some(Mark::InProgress) => {
                        let cycle = IncludeCycle {
                            from: frame.base.clone(),
                            to: base,
                        };
                        warn!(
                            "Include cycle: {} includes {} which is still being processed, skipping",
                            cycle.from.as_deref().unwrap_or("entry file"),
                            cycle.to
                        );
                        self.cycles.push(cycle);
                    }
                    None => {
                        debug!("Following local include \"{}\"", base);
                        self.marks.insert(base.clone(), Mark::InProgress);
                        let path = local_path(root, &base, header_extension);
                        stack.push(Frame::scan(Some(base), &path, header_extension));
                    }
                },
            }
        }
    }
}
