//! # Site Generation
//!
//! Turns a content tree of markdown files into a tree of HTML pages.
//!
//! 1. The output directory is cleared and the static asset directory copied
//!    into it.
//! 2. Every `.md` file under the content directory is converted, placed into
//!    the page template, and written to the same relative path in the output
//!    directory with an `.html` extension.
//!
//! Conversion errors abort the build unless the layout asks to skip invalid
//! pages.

use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::{
    error::ConversionError,
    io::{self, IoError},
    parsing::{convert_document, extract_title},
};

/// Replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Replaced with the serialized document body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to convert {path}: {source}")]
    Page {
        path: PathBuf,
        source: ConversionError,
    },
    #[error("Output directory {output_dir} is inside static directory {static_dir}")]
    OutputInsideStatic {
        output_dir: PathBuf,
        static_dir: PathBuf,
    },
}

/// Where a site's inputs live and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// Log and skip pages that fail to convert instead of aborting.
    pub skip_invalid_pages: bool,
}

/// Outcome of a site build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub assets_copied: usize,
    /// Output paths, relative to the output directory.
    pub pages_written: Vec<RelativePathBuf>,
    /// Source paths, relative to the content directory.
    pub pages_skipped: Vec<RelativePathBuf>,
}

/// Fills `template` with the title and body converted from `markdown`.
pub fn render_page(markdown: &str, template: &str) -> Result<String, ConversionError> {
    let title = extract_title(markdown)?;
    let content = convert_document(markdown)?.to_html()?;
    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Converts one markdown file into one HTML page.
pub fn generate_page(source: &Path, template_path: &Path, dest: &Path) -> Result<(), SiteError> {
    log::info!(
        "Generate page from `{}` using `{}` to `{}`",
        source.display(),
        template_path.display(),
        dest.display()
    );

    let markdown = io::read_path(source)?;
    let template = io::read_path(template_path)?;
    let html = render_page(&markdown, &template).map_err(|source_err| SiteError::Page {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    io::write_path(dest, &html)?;
    Ok(())
}

/// Generates a page for every markdown file under the content directory.
pub fn generate_pages(layout: &SiteLayout, report: &mut BuildReport) -> Result<(), SiteError> {
    let template = io::read_path(&layout.template_path)?;

    for file in io::scan_markdown_files(&layout.content_dir)? {
        let output = file.output_path();
        log::info!("Generate page `{}` -> `{}`", file.relative_path(), output);

        let markdown = io::read_file(file.relative_path(), &layout.content_dir)?;
        match render_page(&markdown, &template) {
            Ok(html) => {
                io::write_file(&output, &layout.output_dir, &html)?;
                report.pages_written.push(output);
            }
            Err(err) if layout.skip_invalid_pages => {
                log::warn!("Skipping `{}`: {err}", file.relative_path());
                report.pages_skipped.push(file.relative_path().to_owned());
            }
            Err(err) => {
                return Err(SiteError::Page {
                    path: file.relative_path().to_path(&layout.content_dir),
                    source: err,
                });
            }
        }
    }

    Ok(())
}

/// Rebuilds the whole site: static assets first, then pages.
///
/// A missing static directory only clears the output directory. An output
/// directory nested inside the static directory is rejected before anything
/// is touched.
pub fn build_site(layout: &SiteLayout) -> Result<BuildReport, SiteError> {
    let mut report = BuildReport::default();

    if layout.output_dir.starts_with(&layout.static_dir) {
        return Err(SiteError::OutputInsideStatic {
            output_dir: layout.output_dir.clone(),
            static_dir: layout.static_dir.clone(),
        });
    }

    if layout.static_dir.is_dir() {
        log::info!(
            "Copying static assets from `{}` to `{}`",
            layout.static_dir.display(),
            layout.output_dir.display()
        );
        report.assets_copied = io::copy_directory(&layout.static_dir, &layout.output_dir)?;
    } else {
        log::warn!(
            "Static directory `{}` not found, skipping asset copy",
            layout.static_dir.display()
        );
        io::clear_directory(&layout.output_dir)?;
    }

    generate_pages(layout, &mut report)?;

    log::info!(
        "Built {} page(s), copied {} asset(s), skipped {} page(s)",
        report.pages_written.len(),
        report.assets_copied,
        report.pages_skipped.len()
    );
    Ok(report)
}
