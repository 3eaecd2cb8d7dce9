use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/// A markdown source file, addressed relative to the content root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContentFile {
    relative_path: RelativePathBuf,
}

impl ContentFile {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    /// Create from an absolute `path` inside `content_root`.
    ///
    /// Returns `None` when `path` is not under `content_root` or has no
    /// portable relative form.
    pub fn from_path(content_root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(content_root).ok()?;
        RelativePathBuf::from_path(relative).ok().map(Self::new)
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Relative path of the generated page: same directories, `.html` extension.
    pub fn output_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension(Self::OUTPUT_EXTENSION)
    }

    pub fn is_markdown(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == Self::SOURCE_EXTENSION)
    }
}

impl From<&str> for ContentFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
