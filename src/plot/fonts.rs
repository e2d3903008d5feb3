//! Runtime font registration for the `ab_glyph` text backend.
//!
//! Plotters is built without system font discovery, so a TTF file has to be
//! registered before any text can be drawn. We look at `KIE_PLOT_FONT` first
//! (settable in `.env`), then a short list of common system locations.
//! When nothing is found the plots are rendered without text.

use std::path::PathBuf;
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

/// Environment variable pointing at a TTF/OTF file.
pub const FONT_ENV: &str = "KIE_PLOT_FONT";

/// Family name the charts request.
pub const FONT_FAMILY: &str = "sans-serif";

const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Tahoma.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\tahoma.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register a font once per process; returns whether text can be drawn.
pub fn ensure_font() -> bool {
    *REGISTERED.get_or_init(|| match locate_font() {
        Some(path) => register(path),
        None => {
            log::warn!("no usable font found (set {FONT_ENV}); plots will be rendered without text");
            false
        }
    })
}

fn locate_font() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(FONT_ENV) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
        log::warn!("{FONT_ENV}={} is not a file; falling back to system fonts", path.display());
    }
    CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file())
}

fn register(path: PathBuf) -> bool {
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("failed to read font '{}': {e}", path.display());
            return false;
        }
    };

    // The registry keeps the bytes for the rest of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
        Ok(()) => {
            log::debug!("registered plot font '{}'", path.display());
            true
        }
        Err(_) => {
            log::warn!("'{}' is not a usable font", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_font_file_is_rejected() {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert!(!register(manifest));
    }

    #[test]
    fn missing_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("kie_no_such_font_{}.ttf", std::process::id()));
        assert!(!register(path));
    }

    #[test]
    fn system_font_registers_when_present() {
        let Some(path) = CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file()) else {
            return;
        };
        assert!(register(path.clone()), "failed to register {}", path.display());
    }
}
