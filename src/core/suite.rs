//! Layout of the on-disk test suite: where the archive comes from, where it
//! is cached, and where the pruned tree ends up.

use crate::core::exclusions;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Upstream location of the W3C SVG 1.1 test suite archive.
pub const SUITE_URL: &str =
    "https://www.w3.org/Graphics/SVG/Test/20110816/archives/W3C_SVG_11_TestSuite.tar.gz";

/// Local filename the archive is cached under.
pub const ARCHIVE_NAME: &str = "W3C_SVG_11_TestSuite.tar.gz";

/// Directory the pruned suite is extracted into.
pub const SUITE_DIR: &str = "test_suite";

/// Subdirectories of the extracted tree that renderer tests never consume:
/// the interactive harness, raster reference images, and the svgweb embed
/// scripts.
pub const PRUNED_DIRS: &[&str] = &["harness", "png", "svgweb"];

/// Subdirectory holding the actual SVG fixtures.
pub const SVG_SUBDIR: &str = "svg";

/// Resolved paths for one suite instance.
#[derive(Debug, Clone)]
pub struct SuiteLayout {
    pub url: String,
    pub archive: PathBuf,
    pub dir: PathBuf,
}

impl Default for SuiteLayout {
    fn default() -> Self {
        SuiteLayout {
            url: SUITE_URL.to_string(),
            archive: PathBuf::from(ARCHIVE_NAME),
            dir: PathBuf::from(SUITE_DIR),
        }
    }
}

impl SuiteLayout {
    /// Directory holding the SVG fixtures inside the extracted tree.
    pub fn svg_dir(&self) -> PathBuf {
        self.dir.join(SVG_SUBDIR)
    }
}

/// Count the `.svg` fixtures directly under `svg_dir`.
pub fn count_fixtures(svg_dir: &Path) -> Result<usize> {
    let mut count = 0;

    for entry in fs::read_dir(svg_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().map(|ext| ext == "svg").unwrap_or(false) {
            count += 1;
        }
    }

    Ok(count)
}

/// List exclusion-table fixtures still present under `svg_dir`.
///
/// Empty after a successful bootstrap; non-empty means the tree was produced
/// by something else (or an older exclusion table) and should be re-created.
pub fn leftover_exclusions(svg_dir: &Path) -> Vec<String> {
    exclusions::OUT_OF_SCOPE
        .iter()
        .filter(|name| svg_dir.join(name).is_file())
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = SuiteLayout::default();
        assert_eq!(layout.url, SUITE_URL);
        assert_eq!(layout.archive, PathBuf::from("W3C_SVG_11_TestSuite.tar.gz"));
        assert_eq!(layout.dir, PathBuf::from("test_suite"));
        assert_eq!(layout.svg_dir(), PathBuf::from("test_suite/svg"));
    }

    #[test]
    fn test_count_fixtures() {
        let temp = tempfile::tempdir().unwrap();
        let svg_dir = temp.path().join("svg");
        fs::create_dir_all(&svg_dir).unwrap();

        fs::write(svg_dir.join("paths-data-01-t.svg"), b"<svg/>").unwrap();
        fs::write(svg_dir.join("shapes-rect-01-t.svg"), b"<svg/>").unwrap();
        fs::write(svg_dir.join("README.txt"), b"not a fixture").unwrap();
        fs::create_dir(svg_dir.join("nested.svg")).unwrap();

        assert_eq!(count_fixtures(&svg_dir).unwrap(), 2);
    }

    #[test]
    fn test_leftover_exclusions() {
        let temp = tempfile::tempdir().unwrap();
        let svg_dir = temp.path().join("svg");
        fs::create_dir_all(&svg_dir).unwrap();

        assert!(leftover_exclusions(&svg_dir).is_empty());

        fs::write(svg_dir.join("animate-dom-01-f.svg"), b"<svg/>").unwrap();
        fs::write(svg_dir.join("paths-data-01-t.svg"), b"<svg/>").unwrap();

        assert_eq!(leftover_exclusions(&svg_dir), vec!["animate-dom-01-f.svg"]);
    }
}
