use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Error};
use clap::Parser;
use walkdir::WalkDir;

use autograde_exec::fs::ensure_dir;
use autograde_submissions::latest_submission_dirs;

#[derive(Parser, Debug, Clone)]
pub struct CloneLatestOpt {
    /// Assignment directory with all the submissions, like /comp/11/grading/hw02
    pub source_dir: PathBuf,

    /// Where to create the directory with the copies.
    ///
    /// The copies are placed in a directory named after the last component of the source
    /// directory.
    #[clap(long, short, default_value = ".")]
    pub target: PathBuf,
}

/// Copy the latest submission of every login inside `<target>/<assignment>`. Submissions already
/// copied are left untouched.
pub fn main_clone_latest(opt: CloneLatestOpt) -> Result<(), Error> {
    let assignment = opt
        .source_dir
        .file_name()
        .ok_or_else(|| anyhow!("Invalid assignment directory {}", opt.source_dir.display()))?;
    let dest = opt.target.join(assignment);
    let dirs = latest_submission_dirs(&opt.source_dir).with_context(|| {
        format!(
            "Failed to list the submissions in {}",
            opt.source_dir.display()
        )
    })?;
    ensure_dir(&dest).with_context(|| format!("Failed to create {}", dest.display()))?;

    for dir in dirs {
        let Some(name) = dir.file_name() else {
            continue;
        };
        let target = dest.join(name);
        if target.exists() {
            warn!("{} already exists, skipping", target.display());
            continue;
        }
        eprintln!("Copying {} to {}", dir.display(), dest.display());
        copy_tree(&dir, &target)
            .with_context(|| format!("Failed to copy {}", dir.display()))?;
    }
    Ok(())
}

/// Copy recursively `source` (a file or a directory) to `dest`.
fn copy_tree(source: &Path, dest: &Path) -> Result<(), Error> {
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source)?;
        let target = if relative.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(relative)
        };
        let file_type = entry.file_type();
        if file_type.is_dir() {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else if file_type.is_file() {
            std::fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy to {}", target.display()))?;
        } else {
            warn!("Skipping {}: not a regular file", entry.path().display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, read_to_string, write};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_copy_tree() {
        let tmpdir = TempDir::new().unwrap();
        let source = tmpdir.path().join("alice.2");
        create_dir_all(source.join("src/nested")).unwrap();
        write(source.join("main.cpp"), "main").unwrap();
        write(source.join("src/nested/util.h"), "util").unwrap();

        let dest = tmpdir.path().join("copy");
        copy_tree(&source, &dest).unwrap();
        assert_eq!(read_to_string(dest.join("main.cpp")).unwrap(), "main");
        assert_eq!(
            read_to_string(dest.join("src/nested/util.h")).unwrap(),
            "util"
        );
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let tmpdir = TempDir::new().unwrap();
        let opt = CloneLatestOpt {
            source_dir: tmpdir.path().join("hw02"),
            target: tmpdir.path().join("clones"),
        };

        assert!(main_clone_latest(opt).is_err());
        assert!(!tmpdir.path().join("clones").exists());
    }

    #[test]
    fn test_copy_single_file() {
        let tmpdir = TempDir::new().unwrap();
        let source = tmpdir.path().join("bob.1");
        write(&source, "tarball").unwrap();

        let dest = tmpdir.path().join("copy");
        copy_tree(&source, &dest).unwrap();
        assert_eq!(read_to_string(&dest).unwrap(), "tarball");
    }
}
