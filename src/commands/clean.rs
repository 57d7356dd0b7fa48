use crate::core::suite::SuiteLayout;
use crate::error::Result;
use crate::utils::fs as fs_utils;
use dialoguer::Confirm;

/// Remove the extracted suite, and with `remove_archive` the cached tarball.
///
/// This is the recovery path after an aborted run or an exclusion-table
/// update: once the directory is gone, `init` will rebuild from scratch.
pub fn clean_suite(layout: &SuiteLayout, remove_archive: bool, yes: bool) -> Result<()> {
    let suite_present = layout.dir.exists();
    let archive_present = remove_archive && layout.archive.is_file();

    if !suite_present && !archive_present {
        println!("Nothing to clean.");
        return Ok(());
    }

    let mut targets = Vec::new();
    if suite_present {
        targets.push(format!("{:?}", layout.dir));
    }
    if archive_present {
        targets.push(format!("{:?}", layout.archive));
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {}?", targets.join(" and ")))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    if suite_present {
        fs_utils::remove_dir_recursive(&layout.dir)?;
        println!("Removed {:?}", layout.dir);
    }

    if archive_present && fs_utils::remove_file_if_exists(&layout.archive)? {
        println!("Removed {:?}", layout.archive);
    }

    Ok(())
}
