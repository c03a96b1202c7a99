// Logbook - platform/fs.rs
//
// Filesystem helpers: log path resolution and buffered file opening.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Directory containing the running executable.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })
}

/// Resolve a log file argument against `base`. Absolute arguments are
/// returned unchanged.
pub fn resolve_against(base: &Path, arg: &Path) -> PathBuf {
    base.join(arg)
}

/// Resolve a log file argument against the executable's own directory.
///
/// If that directory cannot be determined the argument is used as given,
/// which makes it relative to the current working directory.
pub fn resolve_log_path(arg: &Path) -> PathBuf {
    match executable_dir() {
        Ok(dir) => resolve_against(&dir, arg),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Could not determine executable directory; using path as given"
            );
            arg.to_path_buf()
        }
    }
}

/// Open a file for buffered line reading.
pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}
