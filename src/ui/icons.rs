//! Module for mapping result paths to their display icons.
//!
//! Icons are chosen from the file extension or a handful of special names,
//! with directories checked first. Purely decorative: the lookup never fails,
//! unknown files fall back to the plain document icon.

use phf::phf_map;
use std::path::Path;

/// File extension to icon mapping.
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "cpp" => "📜",
    "ts" => "📜",
    "tsx" => "📜",
    "js" => "📜",
    "jsx" => "📜",
    "py" => "📜",
    "rs" => "📜",
    "csv" => "📜",
    "json" => "📜",
    "md" => "📝",
    "h" => "🧩",
    "hpp" => "🧩",
    "out" => "💾",
    "bin" => "💾",
    "exe" => "💾",
    "bat" => "💾",
    "app" => "💾",
};

/// Special file names that override the extension lookup.
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "CMakeLists.txt" => "🧱",
    "Makefile" => "🧱",
    "Cargo.toml" => "🧱",
};

/// Pick the icon for one result row.
///
/// The directory check stats the path; acceptable because only the visible
/// window is rendered per frame.
pub fn icon_for(path: &str) -> &'static str {
    let p = Path::new(path);
    if p.is_dir() {
        return "📁";
    }

    let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
        return "🔒";
    };
    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name) {
        return icon;
    }

    match p.extension().and_then(|e| e.to_str()) {
        Some(ext) => EXT_ICON_MAP.get(ext).copied().unwrap_or("📄"),
        // Extension-less files are usually built artifacts or executables.
        None => "💾",
    }
}
