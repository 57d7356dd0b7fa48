use crate::core::{
    download::Downloader,
    exclusions,
    suite::{self, SuiteLayout},
};
use crate::error::{Result, SuiteError};
use crate::utils::fs as fs_utils;
use std::fs;
use std::path::PathBuf;

pub struct InitOptions {
    pub layout: SuiteLayout,
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        InitOptions {
            layout: SuiteLayout::default(),
            force: false,
        }
    }
}

/// Fetch, extract and prune the test suite.
///
/// The target directory doubles as the idempotency marker: when it already
/// exists the whole procedure is a no-op. The archive is cached next to it
/// and reused on later runs, so at most one download ever happens.
pub fn init_suite(opts: &InitOptions) -> Result<()> {
    let layout = &opts.layout;

    if layout.dir.exists() {
        if !opts.force {
            println!("Nothing to do.");
            return Ok(());
        }
        println!("Removing existing {:?}", layout.dir);
        fs_utils::remove_dir_recursive(&layout.dir)?;
    }

    let downloader = Downloader::new();

    if layout.archive.is_file() {
        println!("Using cached archive {:?}", layout.archive);
    } else {
        downloader
            .download_file(&layout.url, &layout.archive)
            .map_err(|_e| SuiteError::DownloadError {
                url: layout.url.clone(),
            })?;
    }

    // Extract and prune in a staging directory next to the target, then
    // promote it with a single rename. A run that dies halfway leaves no
    // partial tree for the idempotency guard to trip over.
    let parent = match layout.dir.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let staging = tempfile::Builder::new()
        .prefix(".svgsuite-stage-")
        .tempdir_in(&parent)?;
    let staged = staging.path().join("suite");

    downloader
        .extract_archive(&layout.archive, &staged)
        .map_err(|_e| SuiteError::ExtractionError {
            path: layout.archive.clone(),
        })?;

    // The interactive harness, raster references and embed scripts are dead
    // weight for renderer tests. A missing one means the archive is not the
    // suite we expect, so the error propagates.
    for name in suite::PRUNED_DIRS {
        fs::remove_dir_all(staged.join(name))?;
    }

    let svg_dir = staged.join(suite::SVG_SUBDIR);
    let mut removed = 0;
    for name in exclusions::OUT_OF_SCOPE {
        if fs_utils::remove_file_if_exists(&svg_dir.join(name))? {
            removed += 1;
        }
    }

    fs::rename(&staged, &layout.dir)?;

    println!("Removed {removed} out-of-scope fixtures");
    println!("Test suite ready at {:?}", layout.dir);
    Ok(())
}
