//! Stylesheet resolution
//!
//! A resolver turns a `StyleSheetReference` into CSS text. Failures are
//! reported as `ExportError::StyleSheet`; the vector exporter logs and skips
//! them rather than aborting the export.

use crate::error::{ExportError, Result};
use crate::models::{StyleSheetReference, StyleSource};

pub trait StyleResolver {
    fn resolve(&self, sheet: &StyleSheetReference) -> Result<String>;
}

impl<T: StyleResolver + ?Sized> StyleResolver for &T {
    fn resolve(&self, sheet: &StyleSheetReference) -> Result<String> {
        (**self).resolve(sheet)
    }
}

/// Resolves inline CSS only; URL references fail
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineResolver;

impl StyleResolver for InlineResolver {
    fn resolve(&self, sheet: &StyleSheetReference) -> Result<String> {
        match &sheet.source {
            StyleSource::Inline(css) => Ok(css.clone()),
            StyleSource::Url(href) => Err(ExportError::StyleSheet {
                name: sheet.name.clone(),
                reason: format!("no loader for '{}'", href),
            }),
        }
    }
}

/// Whether a loaded stylesheet's absolute `href` is the one a reference
/// names. References may be absolute or relative (`css/svg.css`, `./svg.css`);
/// query strings and fragments on the loaded href are ignored.
pub fn href_matches(loaded: &str, wanted: &str) -> bool {
    let loaded = loaded.split(['?', '#']).next().unwrap_or(loaded);
    let wanted = wanted.split(['?', '#']).next().unwrap_or(wanted);
    let wanted = wanted.trim_start_matches("./");
    if wanted.is_empty() {
        return false;
    }
    loaded == wanted
        || loaded
            .strip_suffix(wanted)
            .map(|prefix| prefix.ends_with('/'))
            .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileResolver;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::StyleResolver;
    use crate::error::{ExportError, Result};
    use crate::models::{StyleSheetReference, StyleSource};

    /// Reads URL references from the local file system, relative to a base
    /// directory. `file://` URLs are accepted; remote URLs are not fetched.
    #[derive(Debug, Clone)]
    pub struct FileResolver {
        base: PathBuf,
    }

    impl FileResolver {
        pub fn new(base: impl Into<PathBuf>) -> Self {
            Self { base: base.into() }
        }

        pub fn base(&self) -> &Path {
            &self.base
        }
    }

    impl StyleResolver for FileResolver {
        fn resolve(&self, sheet: &StyleSheetReference) -> Result<String> {
            let href = match &sheet.source {
                StyleSource::Inline(css) => return Ok(css.clone()),
                StyleSource::Url(href) => href,
            };

            let failure = |reason: String| ExportError::StyleSheet {
                name: sheet.name.clone(),
                reason,
            };

            if href.starts_with("http://") || href.starts_with("https://") {
                return Err(failure(format!("remote stylesheet '{}' is not fetched", href)));
            }

            let path = self.base.join(href.strip_prefix("file://").unwrap_or(href));
            fs::read_to_string(&path).map_err(|e| failure(format!("{}: {}", path.display(), e)))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;
        use tempfile::TempDir;

        #[test]
        fn test_reads_relative_file() {
            let dir = TempDir::new().unwrap();
            let mut file = fs::File::create(dir.path().join("svg.css")).unwrap();
            write!(file, ".name {{ fill: #333 }}").unwrap();

            let resolver = FileResolver::new(dir.path());
            let css = resolver.resolve(&StyleSheetReference::url("svg.css")).unwrap();
            assert_eq!(css, ".name { fill: #333 }");
        }

        #[test]
        fn test_missing_file_is_stylesheet_error() {
            let dir = TempDir::new().unwrap();
            let err = FileResolver::new(dir.path())
                .resolve(&StyleSheetReference::url("missing.css"))
                .unwrap_err();
            assert!(matches!(err, ExportError::StyleSheet { ref name, .. } if name == "missing.css"));
        }

        #[test]
        fn test_remote_url_is_not_fetched() {
            let err = FileResolver::new(".")
                .resolve(&StyleSheetReference::url("https://example.org/a.css"))
                .unwrap_err();
            assert!(matches!(err, ExportError::StyleSheet { .. }));
        }

        #[test]
        fn test_inline_passes_through() {
            let css = FileResolver::new(".")
                .resolve(&StyleSheetReference::inline("x", "a{}"))
                .unwrap();
            assert_eq!(css, "a{}");
        }
    }
}
