use std::fmt;
use std::path::{Path, PathBuf};

use crate::app::EntrySettings;
use crate::constants::{CPP_SOURCE_EXTENSION, C_SOURCE_EXTENSION};

/// Language of the project, fixed by which entry file exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    /// Extension of local sources and of the merged output
    pub fn source_extension(self) -> &'static str {
        match self {
            Language::C => C_SOURCE_EXTENSION,
            Language::Cpp => CPP_SOURCE_EXTENSION,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::C => write!(f, "C"),
            Language::Cpp => write!(f, "C++"),
        }
    }
}

/// The detected entry file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFile {
    pub language: Language,
    pub path: PathBuf,
}

/// Find the entry file in `root`, checking the C entry before the C++ one
pub fn detect_entry(root: &Path, entry: &EntrySettings) -> Option<EntryFile> {
    let candidates = [
        (Language::C, &entry.c_entry),
        (Language::Cpp, &entry.cpp_entry),
    ];

    candidates.into_iter().find_map(|(language, name)| {
        let path = root.join(name);
        path.is_file().then_some(EntryFile { language, path })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_entry() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(detect_entry(temp_dir.path(), &EntrySettings::default()), None);
    }

    #[test]
    fn test_detect_cpp() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("main.cpp"), "int main() {}\n").unwrap();

        let entry = detect_entry(temp_dir.path(), &EntrySettings::default()).unwrap();
        assert_eq!(entry.language, Language::Cpp);
        assert_eq!(entry.path, temp_dir.path().join("main.cpp"));
    }

    #[test]
    fn test_c_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("main.cpp"), "").unwrap();
        fs::write(temp_dir.path().join("main.c"), "").unwrap();

        let entry = detect_entry(temp_dir.path(), &EntrySettings::default()).unwrap();
        assert_eq!(entry.language, Language::C);
    }

    #[test]
    fn test_directory_named_like_entry_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("main.c")).unwrap();
        fs::write(temp_dir.path().join("main.cpp"), "").unwrap();

        let entry = detect_entry(temp_dir.path(), &EntrySettings::default()).unwrap();
        assert_eq!(entry.language, Language::Cpp);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Language::C.source_extension(), "c");
        assert_eq!(Language::Cpp.source_extension(), "cpp");
        assert_eq!(Language::Cpp.to_string(), "C++");
    }
}
