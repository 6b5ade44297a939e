//! The one-shot directory walker that builds the corpus.
//!
//! The walk is best-effort: directories that cannot be read (permissions,
//! races with deletion) are skipped silently, and directory symlinks are
//! listed but never followed. It runs once per invocation on a background
//! thread while the terminal is being set up; the corpus is delivered whole
//! over a channel and no partial list is ever searched.

use crossbeam_channel::{Receiver, bounded};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

/// Recursively collect every entry below `root` into `out`, discovery order.
///
/// Unreadable directories and entries without a usable file type are skipped.
pub fn enumerate(root: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(root) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        out.push(path.to_string_lossy().into_owned());
        if let Ok(file_type) = entry.file_type()
            && file_type.is_dir()
        {
            enumerate(&path, out);
        }
    }
}

/// Run the walk on a background thread.
///
/// The root itself is the first corpus entry, so an empty directory still
/// yields a selectable path. The returned channel delivers exactly one
/// message: the finished corpus. A `recv` error means the walker thread died.
pub fn spawn_walker(root: PathBuf) -> Receiver<Vec<String>> {
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let mut corpus = vec![root.to_string_lossy().into_owned()];
        enumerate(&root, &mut corpus);
        let _ = tx.send(corpus);
    });
    rx
}
