use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

// ---------------------------------------------------------------------------
// Working-tree root discovery
// ---------------------------------------------------------------------------

/// The version-control executable used to query the working-tree root.
#[derive(Debug, Clone)]
pub struct GitTool {
    program: OsString,
}

impl Default for GitTool {
    fn default() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }
}

impl GitTool {
    /// Use a specific executable instead of `git` from `PATH`.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `rev-parse --show-toplevel` inside `dir`.
    ///
    /// Returns `None` when the tool cannot be spawned, exits non-zero, or
    /// prints nothing. No retries, no timeout.
    pub fn show_toplevel(&self, dir: &Path) -> Option<PathBuf> {
        let output = match Command::new(&self.program)
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("failed to run {:?}: {e}", self.program);
                return None;
            }
        };

        if !output.status.success() {
            log::debug!(
                "{:?} rev-parse exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        let root = root_from_stdout(&output.stdout)?;
        log::debug!("working-tree root: {}", root.display());
        Some(root)
    }

    /// [`GitTool::show_toplevel`], plus one diagnostic line on `out` when no
    /// root is found.
    pub fn show_toplevel_reporting<W: Write>(&self, dir: &Path, out: &mut W) -> Option<PathBuf> {
        let root = self.show_toplevel(dir);
        if root.is_none() {
            // The diagnostic is best-effort; a failed write is not a fault.
            let _ = writeln!(
                out,
                "Not a git repository (or git unavailable): {}",
                dir.display()
            );
        }
        root
    }
}

/// Turn the tool's stdout into a path, keeping the raw bytes of the name.
fn root_from_stdout(stdout: &[u8]) -> Option<PathBuf> {
    let start = stdout.iter().position(|b| !b.is_ascii_whitespace())?;
    let end = stdout.iter().rposition(|b| !b.is_ascii_whitespace())?;
    path_from_bytes(&stdout[start..=end])
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> Option<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    Some(PathBuf::from(std::ffi::OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> Option<PathBuf> {
    match std::str::from_utf8(bytes) {
        Ok(root) => Some(PathBuf::from(root)),
        Err(e) => {
            log::debug!("working-tree root is not valid UTF-8: {e}");
            None
        }
    }
}

/// Root of the working tree enclosing the current directory.
pub fn locate() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    locate_from(&cwd)
}

/// Root of the working tree enclosing `dir`.
pub fn locate_from(dir: &Path) -> Option<PathBuf> {
    GitTool::default().show_toplevel(dir)
}

/// Like [`locate_from`], but writes one diagnostic line to `out` when no root
/// is found.
pub fn locate_reporting<W: Write>(dir: &Path, out: &mut W) -> Option<PathBuf> {
    GitTool::default().show_toplevel_reporting(dir, out)
}
