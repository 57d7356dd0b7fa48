use crate::core::suite::{self, SuiteLayout};
use crate::error::Result;
use serde::Serialize;

/// On-disk state of the archive and the extracted suite.
#[derive(Debug, Serialize)]
pub struct SuiteStatus {
    pub archive_present: bool,
    pub suite_present: bool,
    pub fixture_count: Option<usize>,
    pub leftover_exclusions: Vec<String>,
}

pub fn gather_status(layout: &SuiteLayout) -> Result<SuiteStatus> {
    let svg_dir = layout.svg_dir();

    let fixture_count = if svg_dir.is_dir() {
        Some(suite::count_fixtures(&svg_dir)?)
    } else {
        None
    };

    let leftover_exclusions = if svg_dir.is_dir() {
        suite::leftover_exclusions(&svg_dir)
    } else {
        Vec::new()
    };

    Ok(SuiteStatus {
        archive_present: layout.archive.is_file(),
        suite_present: layout.dir.is_dir(),
        fixture_count,
        leftover_exclusions,
    })
}

pub fn show_status(layout: &SuiteLayout, format: &str) -> Result<()> {
    let status = gather_status(layout)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("🔍 SVG Test Suite - Status");
    println!();

    println!("  archive: {:?}", layout.archive);
    if status.archive_present {
        println!("    ✅ present");
    } else {
        println!("    ❌ missing (will be downloaded on init)");
    }

    println!("  suite directory: {:?}", layout.dir);
    if status.suite_present {
        println!("    ✅ present");
    } else {
        println!("    ❌ missing (run: svgsuite init)");
    }

    if let Some(count) = status.fixture_count {
        println!("  fixtures: {count}");
    }

    if !status.leftover_exclusions.is_empty() {
        println!(
            "  ⚠️  {} out-of-scope fixtures still present (re-run init with --force)",
            status.leftover_exclusions.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn layout_in(dir: &std::path::Path) -> SuiteLayout {
        SuiteLayout {
            url: "http://invalid.invalid/suite.tar.gz".to_string(),
            archive: dir.join("W3C_SVG_11_TestSuite.tar.gz"),
            dir: dir.join("test_suite"),
        }
    }

    #[test]
    fn test_status_on_empty_workdir() {
        let temp = tempfile::tempdir().unwrap();
        let status = gather_status(&layout_in(temp.path())).unwrap();

        assert!(!status.archive_present);
        assert!(!status.suite_present);
        assert_eq!(status.fixture_count, None);
        assert!(status.leftover_exclusions.is_empty());
    }

    #[test]
    fn test_status_of_pruned_suite() {
        let temp = tempfile::tempdir().unwrap();
        let layout = layout_in(temp.path());
        fs::write(&layout.archive, b"cached").unwrap();
        fs::create_dir_all(layout.svg_dir()).unwrap();
        fs::write(layout.svg_dir().join("foo-01-t.svg"), b"<svg/>").unwrap();

        let status = gather_status(&layout).unwrap();

        assert!(status.archive_present);
        assert!(status.suite_present);
        assert_eq!(status.fixture_count, Some(1));
        assert!(status.leftover_exclusions.is_empty());
    }

    #[test]
    fn test_status_flags_leftover_exclusions() {
        let temp = tempfile::tempdir().unwrap();
        let layout = layout_in(temp.path());
        fs::create_dir_all(layout.svg_dir()).unwrap();
        fs::write(layout.svg_dir().join("animate-dom-01-f.svg"), b"<svg/>").unwrap();

        let status = gather_status(&layout).unwrap();
        assert_eq!(status.leftover_exclusions, vec!["animate-dom-01-f.svg"]);
    }

    #[test]
    fn test_status_serializes_to_json() {
        let temp = tempfile::tempdir().unwrap();
        let status = gather_status(&layout_in(temp.path())).unwrap();

        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"archive_present\":false"));
        assert!(json.contains("\"fixture_count\":null"));
    }
}
