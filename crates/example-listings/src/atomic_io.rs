//! Atomic file write support for the dump CLI.
//!
//! Writes go to a hidden temporary file in the target directory followed by a
//! rename, so an interrupted dump never leaves a partially written listing
//! file behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::DumpError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `path` inside `dir` atomically.
///
/// `path` must name a plain file inside `dir`; directory components are
/// rejected.
///
/// # Errors
///
/// Returns [`DumpError::Write`] if the temporary file cannot be created,
/// written, synced, or renamed over the target.
pub(crate) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), DumpError> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(DumpError::Write {
            path: path.to_path_buf(),
            message: "output path must name a file".to_owned(),
        });
    };

    let tmp_name = temp_name(file_name);
    let write_error = |message: String| DumpError::Write {
        path: path.to_path_buf(),
        message,
    };

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(&tmp_name, &options)
        .map_err(|err| write_error(err.to_string()))?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    drop(file);
    if let Err(err) = written {
        // Best-effort cleanup; the write already failed.
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(err.to_string()));
    }

    if let Err(err) = rename_over_target(dir, &tmp_name, file_name) {
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(err.to_string()));
    }

    // Directory sync is best effort; a failure here cannot corrupt the dump.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures.
    }

    Ok(())
}

fn temp_name(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id())
}

#[cfg(windows)]
fn rename_over_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_over_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(test)]
mod tests {
    use cap_std::ambient_authority;

    use super::*;

    fn temp_dir() -> (tempfile::TempDir, Dir) {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let dir =
            Dir::open_ambient_dir(tempdir.path(), ambient_authority()).expect("open temp dir");
        (tempdir, dir)
    }

    #[test]
    fn writes_contents_to_target() {
        let (_tempdir, dir) = temp_dir();

        write_atomic(&dir, Utf8Path::new("listings.json"), "[]").expect("write succeeds");

        let contents = dir.read_to_string("listings.json").expect("read back");
        assert_eq!(contents, "[]");
    }

    #[test]
    fn replaces_existing_target() {
        let (_tempdir, dir) = temp_dir();
        dir.write("listings.json", b"old").expect("write old");

        write_atomic(&dir, Utf8Path::new("listings.json"), "new").expect("write succeeds");

        let contents = dir.read_to_string("listings.json").expect("read back");
        assert_eq!(contents, "new");
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let (_tempdir, dir) = temp_dir();

        write_atomic(&dir, Utf8Path::new("listings.json"), "{}").expect("write succeeds");

        let stray: Vec<_> = dir
            .entries()
            .expect("list entries")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(stray.is_empty(), "unexpected temp files: {stray:?}");
    }

    #[test]
    fn rejects_paths_with_directory_components() {
        let (_tempdir, dir) = temp_dir();

        let result = write_atomic(&dir, Utf8Path::new("nested/listings.json"), "[]");

        assert!(matches!(result, Err(DumpError::Write { .. })));
    }
}
