//! Process-wide text-rendering preferences
//!
//! Mirrors the usual scientific-plotting setup: prefer a serif face for
//! every piece of figure text, at a small base size, decided once per
//! process. The preference is best-effort — when no serif font can be
//! found on the host we fall back to the backend's sans-serif default —
//! and only affects typography, never correctness.

use std::path::Path;
use std::sync::OnceLock;

use plotters::style::{FontDesc, FontFamily, FontStyle};

/// Installed text preferences
#[derive(Clone, Copy)]
pub struct Typography {
    /// Generic family handed to the backend
    pub family: FontFamily<'static>,
    /// Base size in points; panel text scales relative to this
    pub base_size: f64,
}

static TYPOGRAPHY: OnceLock<Typography> = OnceLock::new();

/// Candidate directories scanned for serif font files
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

// `FontFamily` does not implement `Debug`, so derive is unavailable;
// format the resolved family name instead
impl std::fmt::Debug for Typography {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typography")
            .field("family", &self.family.as_str())
            .field("base_size", &self.base_size)
            .finish()
    }
}

impl Typography {
    /// Font descriptor at `scale` times the base size
    pub fn font(&self, scale: f64) -> FontDesc<'static> {
        FontDesc::new(self.family, self.base_size * scale, FontStyle::Normal)
    }
}

/// Install the process-wide typography, once
///
/// Idempotent: the first call decides, later calls return the same
/// value. Safe to call from figure rendering or explicitly at startup.
pub fn install() -> Typography {
    *TYPOGRAPHY.get_or_init(|| {
        if serif_available() {
            Typography {
                family: FontFamily::Serif,
                base_size: 10.0,
            }
        } else {
            log::warn!("no serif font found on host; falling back to sans-serif");
            Typography {
                family: FontFamily::SansSerif,
                base_size: 10.0,
            }
        }
    })
}

/// Best-effort probe for a usable serif face
///
/// Scans the conventional font directories (two levels deep) for a
/// TTF/OTF file whose name suggests a serif family. Any I/O error is
/// treated as "not found".
fn serif_available() -> bool {
    FONT_DIRS
        .iter()
        .any(|dir| dir_has_serif(Path::new(dir), 2))
}

fn dir_has_serif(dir: &Path, depth: u8) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if depth > 0 && dir_has_serif(&path, depth - 1) {
                return true;
            }
            continue;
        }
        if is_serif_font_file(&path) {
            return true;
        }
    }
    false
}

fn is_serif_font_file(path: &Path) -> bool {
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
        .unwrap_or(false);
    if !ext_ok {
        return false;
    }

    let name = match path.file_stem().and_then(|s| s.to_str()) {
        Some(name) => name.to_ascii_lowercase(),
        None => return false,
    };

    // "DejaVuSansSerif" style names do not exist, but guard against the
    // generic "...sans-serif..." pattern anyway
    (name.contains("serif") && !name.contains("sans"))
        || name.contains("times")
        || name.contains("georgia")
        || name.contains("garamond")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_is_idempotent() {
        let first = install();
        let second = install();
        assert_eq!(first.base_size, second.base_size);
        // FontFamily has no PartialEq; compare the resolved names
        assert_eq!(first.family.as_str(), second.family.as_str());
    }

    #[test]
    fn serif_file_names_are_recognized() {
        assert!(is_serif_font_file(Path::new("/x/LiberationSerif-Regular.ttf")));
        assert!(is_serif_font_file(Path::new("/x/times.TTF")));
        assert!(!is_serif_font_file(Path::new("/x/DejaVuSans.ttf")));
        assert!(!is_serif_font_file(Path::new("/x/NotoSansSerifIsNotAThing/readme.txt")));
    }
}
