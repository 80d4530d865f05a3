//! Mapping of entries to emoji icons.
//!
//! [icon_for] picks an icon from the special name maps first, then the extension map,
//! then falls back on the entry kind (hidden, executable, generic file).

use crate::core::FileEntry;

use phf::phf_map;

pub const DIR_ICON: &str = "📁";
pub const HIDDEN_ICON: &str = "🫥";
pub const EXEC_ICON: &str = "⚙️";
pub const FILE_ICON: &str = "📄";
pub const BROKEN_LINK_ICON: &str = "⛓️";

/// File extension (lowercase, without the dot) to icon mapping
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "go" => "🐹",
    "py" => "🐍",
    "js" => "📜",
    "ts" => "📜",
    "log" => "📜",
    "sh" => "🧮",
    "html" => "🌐",
    "htm" => "🌐",
    "css" => "🌐",
    "c" => "🧱",
    "cpp" => "🧱",
    "h" => "🧱",
    "hpp" => "🧱",
    "rs" => "🦀",
    "java" => "☕",
    "json" => "🛠️",
    "yaml" => "🛠️",
    "yml" => "🛠️",
    "toml" => "🛠️",
    "ini" => "🛠️",
    "md" => "📝",
    "txt" => "📝",
    "pdf" => "📕",
    "zip" => "📦",
    "tar" => "📦",
    "gz" => "📦",
    "rar" => "📦",
    "7z" => "📦",
    "jpg" => "🖼️",
    "jpeg" => "🖼️",
    "png" => "🖼️",
    "gif" => "🖼️",
    "svg" => "🖼️",
    "webp" => "🖼️",
    "mp4" => "🎞️",
    "mov" => "🎞️",
    "avi" => "🎞️",
    "mkv" => "🎞️",
    "mp3" => "🎵",
    "wav" => "🎵",
    "flac" => "🎵",
    "exe" => "⚙️",
    "bin" => "⚙️",
    "out" => "⚙️",
    "app" => "⚙️",
};

/// Special file names
pub(crate) static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "Cargo.toml" => "🦀",
    "Cargo.lock" => "🔒",
    "go.mod" => "🐹",
    "go.sum" => "🔒",
    "Makefile" => "🧰",
    "Dockerfile" => "🐳",
    "LICENSE" => "⚖️",
    "README" => "📖",
    "README.md" => "📖",
};

/// Special directory names
pub(crate) static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "node_modules" => "📦",
    "target" => "🎯",
    "src" => "🗂️",
};

/// Get the icon for a given file entry.
pub fn icon_for(entry: &FileEntry) -> &'static str {
    let name_str = entry.name_str();
    let name: &str = name_str.as_ref();

    if entry.is_hidden() {
        return HIDDEN_ICON;
    }

    if entry.is_dir() {
        return SPECIAL_DIR_ICON_MAP.get(name).copied().unwrap_or(DIR_ICON);
    }

    if entry.is_broken_sym() {
        return BROKEN_LINK_ICON;
    }

    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name) {
        return icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
    {
        let ext = name[dot_idx + 1..].to_ascii_lowercase();
        if let Some(icon) = EXT_ICON_MAP.get(ext.as_str()) {
            return icon;
        }
    }

    if entry.is_executable() {
        return EXEC_ICON;
    }

    FILE_ICON
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn file(name: &str, flags: u8) -> FileEntry {
        FileEntry::new(OsString::from(name), flags, None)
    }

    #[test]
    fn directories_and_hidden_entries() {
        assert_eq!(icon_for(&file("docs", FileEntry::IS_DIR)), DIR_ICON);
        assert_eq!(icon_for(&file("target", FileEntry::IS_DIR)), "🎯");
        let hidden_dir = FileEntry::IS_DIR | FileEntry::IS_HIDDEN;
        assert_eq!(icon_for(&file(".git", hidden_dir)), HIDDEN_ICON);
        assert_eq!(icon_for(&file(".env", FileEntry::IS_HIDDEN)), HIDDEN_ICON);
    }

    #[test]
    fn extension_lookup_ignores_case() {
        assert_eq!(icon_for(&file("main.rs", 0)), "🦀");
        assert_eq!(icon_for(&file("PHOTO.JPG", 0)), "🖼️");
        assert_eq!(icon_for(&file("notes.md", 0)), "📝");
        assert_eq!(icon_for(&file("Cargo.toml", 0)), "🦀");
    }

    #[test]
    fn fallbacks() {
        assert_eq!(icon_for(&file("run", FileEntry::IS_EXECUTABLE)), EXEC_ICON);
        assert_eq!(icon_for(&file("data.xyz", 0)), FILE_ICON);
        assert_eq!(icon_for(&file("trailingdot.", 0)), FILE_ICON);
        let broken = FileEntry::IS_SYMLINK | FileEntry::IS_BROKEN_SYM;
        assert_eq!(icon_for(&file("dangling", broken)), BROKEN_LINK_ICON);
    }
}
