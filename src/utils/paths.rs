use std::fs::File;
use std::path::Path;

use crate::error::{Result, ViewerError};

/// Maximum transcript size: 256MB
pub const MAX_FILE_SIZE_BYTES: u64 = 256 * 1024 * 1024;

/// Checks an already-open transcript against [`MAX_FILE_SIZE_BYTES`].
///
/// Takes the open handle so the size checked is the size of the file that is
/// subsequently read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    check_size(file, path, MAX_FILE_SIZE_BYTES)
}

fn check_size(file: &File, path: &Path, limit: u64) -> Result<()> {
    let size = file
        .metadata()
        .map_err(|source| ViewerError::Io { path: path.to_path_buf(), source })?
        .len();

    if size > limit {
        return Err(ViewerError::FileTooLarge { path: path.to_path_buf(), size, limit });
    }
    Ok(())
}

/// Formats a path for display, replacing the home directory prefix with `~`
///
/// ```no_run
/// use std::path::Path;
/// use transcript_viewer::format_path_with_tilde;
///
/// // "~/data/run.jsonl" when the home directory is /home/alice
/// let shown = format_path_with_tilde(Path::new("/home/alice/data/run.jsonl"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
