/// System font discovery
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// Directories searched for font files
fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs
}

/// Scan the system font directories and map font names (file stems) to
/// their paths. Sorted by name; unreadable directories are skipped.
pub fn list_system_fonts() -> BTreeMap<String, PathBuf> {
    let mut fonts = BTreeMap::new();
    for dir in font_dirs() {
        collect_fonts(&dir, &mut fonts);
    }
    log::debug!("discovered {} font files", fonts.len());
    fonts
}

fn collect_fonts(dir: &Path, fonts: &mut BTreeMap<String, PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_fonts(&path, fonts);
        } else if has_font_extension(&path) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                fonts.insert(stem.to_string(), path);
            }
        }
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
