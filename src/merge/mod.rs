// Gateway module for merge - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod discover;
mod include;
mod language;
mod source;
mod strip;
mod writer;

// Public re-exports - the ONLY way to access merge functionality
pub use discover::{DiscoveryContext, IncludeCycle};
pub use include::{base_name, classify_line, IncludeDirective};
pub use language::{detect_entry, EntryFile, Language};
pub use source::SourceFile;
pub use strip::{is_stripped_line, strip_and_append, strip_source};
pub use writer::{MergeWriter, WrittenFragments};

use std::path::PathBuf;
use tracing::info;

use crate::app::Config;
use crate::utils::MergeError;

/// Summary of a completed merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub language: Language,
    pub entry: PathBuf,
    pub output: PathBuf,
    pub angle_includes: Vec<String>,
    pub headers: Vec<PathBuf>,
    pub sources: Vec<PathBuf>,
    pub cycles: Vec<IncludeCycle>,
    /// The entry file was written twice, once as a local source
    pub entry_duplicated: bool,
}

/// Result of a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Neither entry file exists; nothing was written
    NoEntry,
    Merged(MergeReport),
}

/// Amalgamates the project found in one directory
pub struct Merger {
    root: PathBuf,
    config: Config,
}

impl Merger {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Result<Self, MergeError> {
        config.validate()?;
        Ok(Self {
            root: root.into(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Output path for a language, e.g. `merged.cpp`
    pub fn output_path(&self, language: Language) -> PathBuf {
        self.root.join(format!(
            "{}.{}",
            self.config.output.base_name,
            language.source_extension()
        ))
    }

    /// Detect the entry file, discover its local dependencies and write the merged file
    pub fn run(&self) -> Result<MergeOutcome, MergeError> {
        let Some(entry) = detect_entry(&self.root, &self.config.entry) else {
            return Ok(MergeOutcome::NoEntry);
        };
        info!("Detected {} entry file {}", entry.language, entry.path.display());

        let header_extension = self.config.output.header_extension.as_str();
        let mut discovery = DiscoveryContext::new();
        discovery.discover(&self.root, &entry.path, header_extension);
        info!(
            "Discovered {} system includes and {} local headers",
            discovery.angle_includes().len(),
            discovery.local_headers().len()
        );

        let output = self.output_path(entry.language);
        let written = MergeWriter::new(&self.root, header_extension, &entry, &discovery)
            .write_to_file(&output)?;
        info!("Wrote {}", output.display());

        Ok(MergeOutcome::Merged(MergeReport {
            language: entry.language,
            entry: entry.path,
            output,
            angle_includes: discovery.angle_includes().to_vec(),
            headers: written.headers,
            sources: written.sources,
            cycles: discovery.cycles().to_vec(),
            entry_duplicated: written.entry_duplicated,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn run(dir: &TempDir) -> MergeOutcome {
        Merger::new(dir.path(), Config::default()).unwrap().run().unwrap()
    }

    fn read(dir: &TempDir, name: &str) -> String {
        fs::read_to_string(dir.path().join(name)).unwrap()
    }

    fn merged_report(outcome: MergeOutcome) -> MergeReport {
        match outcome {
            MergeOutcome::Merged(report) => report,
            MergeOutcome::NoEntry => panic!("expected a merge"),
        }
    }

    #[test]
    fn test_empty_directory_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(run(&temp_dir), MergeOutcome::NoEntry);
        assert!(!temp_dir.path().join("merged.c").exists());
        assert!(!temp_dir.path().join("merged.cpp").exists());
    }

    #[test]
    fn test_flat_c_project() {
        let temp_dir = TempDir::new().unwrap();
        write(
            &temp_dir,
            "main.c",
            "#include \"util.h\"\n#include <stdio.h>\n\nint main(void) {\n    printf(\"%d\\n\", util());\n}\n",
        );
        write(&temp_dir, "util.h", "#pragma once\nint util(void);\n");
        write(&temp_dir, "util.c", "#include \"util.h\"\nint util(void) { return 42; }\n");

        let report = merged_report(run(&temp_dir));
        assert_eq!(report.language, Language::C);
        assert_eq!(report.output, temp_dir.path().join("merged.c"));
        assert_eq!(
            read(&temp_dir, "merged.c"),
            "#include <stdio.h>\n\
             int util(void);\n\
             int util(void) { return 42; }\n\
             \n\
             int main(void) {\n    printf(\"%d\\n\", util());\n}\n"
        );
    }

    #[test]
    fn test_nested_cpp_headers_without_sources() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.cpp", "#include \"a.h\"\nint main() { return A + B; }\n");
        write(&temp_dir, "a.h", "#pragma once\n#include \"b.h\"\nconst int A = B + 1;\n");
        write(&temp_dir, "b.h", "#pragma once\nconst int B = 1;\n");

        let report = merged_report(run(&temp_dir));
        assert_eq!(report.language, Language::Cpp);
        assert!(report.sources.is_empty());
        assert_eq!(
            read(&temp_dir, "merged.cpp"),
            "const int B = 1;\nconst int A = B + 1;\nint main() { return A + B; }\n"
        );
    }

    #[test]
    fn test_angle_include_emitted_once() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.cpp", "#include \"a.h\"\n#include \"b.h\"\nint main() {}\n");
        write(&temp_dir, "a.h", "#include <vector>\nstd::vector<int> a;\n");
        write(&temp_dir, "b.h", "#include <vector>\nstd::vector<int> b;\n");

        run(&temp_dir);
        let merged = read(&temp_dir, "merged.cpp");
        assert_eq!(merged.matches("#include <vector>").count(), 1);
        assert!(merged.starts_with("#include <vector>\n"));
    }

    #[test]
    fn test_no_directive_leakage() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.c", "#include <stdlib.h>\n#include \"x.h\"\nint main(void) {}\n");
        write(&temp_dir, "x.h", "#pragma once\n#include <string.h>\n#include \"y.h\"\nint x;\n");
        write(&temp_dir, "y.h", "  #pragma once\n\t#include <stdio.h>\nint y;\n");
        write(&temp_dir, "x.c", "#include \"x.h\"\nint x_impl;\n");

        run(&temp_dir);
        let merged = read(&temp_dir, "merged.c");
        let lines: Vec<&str> = merged.lines().collect();
        let header_lines = 3;
        assert_eq!(
            &lines[..header_lines],
            ["#include <stdlib.h>", "#include <string.h>", "#include <stdio.h>"]
        );
        assert!(lines[header_lines..]
            .iter()
            .all(|line| !line.trim().starts_with("#include") && !line.trim().starts_with("#pragma once")));
        assert_eq!(&lines[header_lines..], ["int y;", "int x;", "int x_impl;", "int main(void) {}"]);
    }

    #[test]
    fn test_cycle_terminates() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.c", "#include \"a.h\"\nint main(void) {}\n");
        write(&temp_dir, "a.h", "#include \"b.h\"\nint a;\n");
        write(&temp_dir, "b.h", "#include \"a.h\"\nint b;\n");

        let report = merged_report(run(&temp_dir));
        assert_eq!(report.cycles.len(), 1);
        assert_eq!(read(&temp_dir, "merged.c"), "int b;\nint a;\nint main(void) {}\n");
    }

    #[test]
    fn test_custom_header_extension() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.cpp", "#include \"a.hpp\"\nint main() {}\n");
        write(&temp_dir, "a.hpp", "#pragma once\nstruct A { int f(); };\n");
        write(&temp_dir, "a.cpp", "#include \"a.hpp\"\nint A::f() { return 1; }\n");

        let mut config = Config::default();
        config.output.header_extension = "hpp".to_string();
        let report = merged_report(Merger::new(temp_dir.path(), config).unwrap().run().unwrap());

        assert_eq!(report.headers, vec![temp_dir.path().join("a.hpp")]);
        assert_eq!(report.sources, vec![temp_dir.path().join("a.cpp")]);
        assert_eq!(
            read(&temp_dir, "merged.cpp"),
            "struct A { int f(); };\nint A::f() { return 1; }\nint main() {}\n"
        );
    }

    #[test]
    fn test_entry_included_as_header_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.c", "#include \"main.h\"\nint main(void) { return 0; }\n");
        write(&temp_dir, "main.h", "#pragma once\nint helper(void);\n");

        let report = merged_report(run(&temp_dir));
        assert!(report.entry_duplicated);
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.c", "int main(void) {}\n");
        write(&temp_dir, "merged.c", "stale contents\n");

        run(&temp_dir);
        assert_eq!(read(&temp_dir, "merged.c"), "int main(void) {}\n");
    }

    #[test]
    fn test_bom_files_merge_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("main.c"),
            b"\xEF\xBB\xBF#include \"u.h\"\nint main(void) {}\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("u.h"), b"\xEF\xBB\xBF#pragma once\nint u;\n").unwrap();

        run(&temp_dir);
        assert_eq!(read(&temp_dir, "merged.c"), "int u;\nint main(void) {}\n");
    }

    #[test]
    fn test_custom_output_name() {
        let temp_dir = TempDir::new().unwrap();
        write(&temp_dir, "main.c", "int main(void) {}\n");

        let mut config = Config::default();
        config.output.base_name = "amalgamation".to_string();
        let merger = Merger::new(temp_dir.path(), config).unwrap();
        let report = merged_report(merger.run().unwrap());

        assert_eq!(report.output, temp_dir.path().join("amalgamation.c"));
        assert!(report.output.exists());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.entry.c_entry = String::new();
        assert!(matches!(
            Merger::new(".", config),
            Err(MergeError::ConfigError(_))
        ));
    }
}
