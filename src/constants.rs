/// Constants module to avoid magic strings in the codebase

// Directive keywords
pub const INCLUDE_DIRECTIVE: &str = "#include";
pub const PRAGMA_ONCE_DIRECTIVE: &str = "#pragma once";

// Include delimiters
pub const ANGLE_OPEN: char = '<';
pub const ANGLE_CLOSE: char = '>';
pub const QUOTE: char = '"';

// Entry files, checked in this order
pub const DEFAULT_C_ENTRY: &str = "main.c";
pub const DEFAULT_CPP_ENTRY: &str = "main.cpp";

// Output
pub const DEFAULT_OUTPUT_BASE_NAME: &str = "merged";

// Extensions (without the leading dot)
pub const C_SOURCE_EXTENSION: &str = "c";
pub const CPP_SOURCE_EXTENSION: &str = "cpp";
pub const DEFAULT_HEADER_EXTENSION: &str = "h";

/// Extensions stripped from a quoted include to obtain its base name
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[
    C_SOURCE_EXTENSION,
    CPP_SOURCE_EXTENSION,
    DEFAULT_HEADER_EXTENSION,
];

/// UTF-8 byte order mark
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

// Configuration
pub const CONFIG_DIR_NAME: &str = "unity-merger";
pub const LOCAL_CONFIG_FILE: &str = ".unity-merger.toml";
pub const ENV_PREFIX: &str = "UNITY_MERGER_";
