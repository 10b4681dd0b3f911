//! Ordered-candidate font resolution.
//!
//! Candidates are tried as files under the configured fonts directory, then
//! as literal paths, then by file name under conventional system font
//! directories. The first usable candidate wins; exhaustion yields the
//! built-in glyph set. Resolution never fails and never drives control flow
//! through errors.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, warn};

use crate::fonts::builtin;

#[derive(Clone)]
/// Where a resolved font's bytes came from.
pub enum FontSource {
    /// Raw font-file bytes plus the path they were read from.
    Bytes {
        /// Complete font file contents.
        data: Arc<Vec<u8>>,
        /// Human-readable origin, used for diagnostics only.
        origin: String,
    },
    /// The built-in fixed glyph set.
    Builtin,
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bytes { data, origin } => f
                .debug_struct("Bytes")
                .field("origin", origin)
                .field("len", &data.len())
                .finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

#[derive(Clone, Debug)]
/// A renderable font: resolved source bytes plus a pixel size.
///
/// Immutable after resolution; re-sizing produces a new handle sharing the
/// same bytes.
pub struct FontHandle {
    source: FontSource,
    size: f32,
}

impl FontHandle {
    /// Handle over loaded font bytes.
    pub fn from_bytes(data: Arc<Vec<u8>>, origin: impl Into<String>, size: f32) -> Self {
        Self {
            source: FontSource::Bytes {
                data,
                origin: origin.into(),
            },
            size,
        }
    }

    /// Handle over the built-in glyph set.
    pub fn builtin(size: f32) -> Self {
        Self {
            source: FontSource::Builtin,
            size,
        }
    }

    /// Resolved source.
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Pixel size this handle renders at.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Same source at a different pixel size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            source: self.source.clone(),
            size,
        }
    }

    /// Whether this handle fell back to the built-in glyph set.
    pub fn is_builtin(&self) -> bool {
        matches!(self.source, FontSource::Builtin)
    }

    /// Integer scale used when this handle renders through the built-in set.
    pub(crate) fn builtin_scale(&self) -> u32 {
        builtin::scale_for(self.size)
    }
}

/// Locates usable font files from ordered preference lists.
#[derive(Clone, Debug)]
pub struct FontResolver {
    fonts_dir: PathBuf,
    system_dirs: Vec<PathBuf>,
}

impl FontResolver {
    /// Resolver rooted at `fonts_dir`, with the platform's conventional
    /// system font directories as the secondary source.
    pub fn new(fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: fonts_dir.into(),
            system_dirs: default_system_dirs(),
        }
    }

    /// Replace the system font directories (used by tests).
    pub fn with_system_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.system_dirs = dirs;
        self
    }

    /// Directory checked first for every candidate.
    pub fn fonts_dir(&self) -> &Path {
        &self.fonts_dir
    }

    /// Resolve the first usable candidate at `size`.
    ///
    /// Tries each candidate under the fonts directory, as a literal path, and
    /// by file name under the system directories. Per-candidate failures are
    /// swallowed; only total exhaustion falls back to the built-in glyph set.
    pub fn resolve(&self, candidates: &[String], size: f32) -> FontHandle {
        for candidate in candidates {
            if let Some(handle) = self.try_candidate(candidate, size) {
                return handle;
            }
        }
        warn!(
            ?candidates,
            "no font candidate resolved, using built-in glyph set"
        );
        FontHandle::builtin(size)
    }

    fn try_candidate(&self, candidate: &str, size: f32) -> Option<FontHandle> {
        let local = self.fonts_dir.join(candidate);
        if let Some(handle) = read_font(&local, size) {
            debug!(candidate, origin = %local.display(), "resolved font from fonts directory");
            return Some(handle);
        }

        let direct = Path::new(candidate);
        if let Some(handle) = read_font(direct, size) {
            debug!(candidate, "resolved font from literal path");
            return Some(handle);
        }

        for dir in &self.system_dirs {
            if let Some(found) = find_by_file_name(dir, candidate, 0) {
                if let Some(handle) = read_font(&found, size) {
                    debug!(candidate, origin = %found.display(), "resolved system font");
                    return Some(handle);
                }
            }
        }

        debug!(candidate, "font candidate not found");
        None
    }
}

fn read_font(path: &Path, size: f32) -> Option<FontHandle> {
    let bytes = std::fs::read(path).ok()?;
    if !looks_like_font(&bytes) {
        return None;
    }
    Some(FontHandle::from_bytes(
        Arc::new(bytes),
        path.display().to_string(),
        size,
    ))
}

/// Cheap sniff for sfnt-family containers (ttf/otf/ttc). Real parsing
/// happens at shaping time.
fn looks_like_font(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

/// Search `dir` (bounded depth) for a file whose name matches `name`
/// case-insensitively.
fn find_by_file_name(dir: &Path, name: &str, depth: u8) -> Option<PathBuf> {
    if depth > 3 {
        return None;
    }
    let rd = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();
    for entry in rd.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        if let Some(file_name) = path.file_name().and_then(|s| s.to_str())
            && file_name.eq_ignore_ascii_case(name)
        {
            return Some(path);
        }
    }
    for sub in subdirs {
        if let Some(found) = find_by_file_name(&sub, name, depth + 1) {
            return Some(found);
        }
    }
    None
}

fn default_system_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join(".local/share/fonts"));
    }
    dirs
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/resolver.rs"]
mod tests;
