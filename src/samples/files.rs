//! Breadth-first directory walks.
//!
//! The queue of directories still to visit is the loop argument, so the
//! walk never recurses however deep the tree is.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::trampoline::try_run;

/// Entries of one directory, split into files and subdirectories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub files: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

/// Filesystem enumeration capability
pub trait DirectorySource {
    fn list(&self, dir: &Path) -> io::Result<Listing>;
}

/// Reads real directories via `std::fs`; entries come back sorted by path
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirectories;

impl DirectorySource for OsDirectories {
    fn list(&self, dir: &Path) -> io::Result<Listing> {
        let mut listing = Listing::default();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                listing.dirs.push(entry.path());
            } else {
                listing.files.push(entry.path());
            }
        }
        listing.files.sort();
        listing.dirs.sort();
        Ok(listing)
    }
}

/// Every file below `root`, level by level
pub fn collect_files<S>(source: &S, root: impl Into<PathBuf>) -> io::Result<Vec<PathBuf>>
where
    S: DirectorySource + ?Sized,
{
    let seed = (VecDeque::from([root.into()]), Vec::new());
    let files = try_run(seed, |(mut dirs, mut files): (VecDeque<PathBuf>, Vec<PathBuf>), ctx| {
        match dirs.pop_front() {
            Some(dir) => {
                let listing = source.list(&dir)?;
                debug!(
                    target: "tailcall::samples::files",
                    dir = %dir.display(),
                    files = listing.files.len(),
                    dirs = listing.dirs.len(),
                    "listed directory"
                );
                files.extend(listing.files);
                dirs.extend(listing.dirs);
                ctx.request_continue((dirs, files));
            }
            None => ctx.request_exit(files),
        }
        Ok::<(), io::Error>(())
    })?;
    Ok(files.unwrap_or_default())
}

/// Write every file below `root` to `sink`, one path per line
pub fn print_files<S, W>(source: &S, root: impl Into<PathBuf>, sink: &mut W) -> io::Result<()>
where
    S: DirectorySource + ?Sized,
    W: Write + ?Sized,
{
    try_run(VecDeque::from([root.into()]), |mut dirs: VecDeque<PathBuf>, ctx| {
        if let Some(dir) = dirs.pop_front() {
            let listing = source.list(&dir)?;
            for file in &listing.files {
                writeln!(sink, "{}", file.display())?;
            }
            dirs.extend(listing.dirs);
            ctx.request_continue(dirs);
        }
        Ok::<(), io::Error>(())
    })
    .map(|_: Option<()>| ())
}
