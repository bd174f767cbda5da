use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use crate::error::ExplorerError;

/// Maximum size of a data file: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Extension of `path` including the leading dot (`".csv"`), or `""` when the
/// file name has none.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use record_explorer::utils::file_extension;
///
/// assert_eq!(file_extension(Path::new("data/file1.CSV")), ".CSV");
/// assert_eq!(file_extension(Path::new("data/README")), "");
/// ```
pub fn file_extension(path: &Path) -> String {
    path.extension().map(|ext| format!(".{}", ext.to_string_lossy())).unwrap_or_default()
}

/// Path of `file` relative to the parent of `base_dir`, so the base directory's
/// own name is the first segment (`data/sub/file2.csv` for a file under `data`).
///
/// `base_dir` is made absolute first so that `.` and relative bases still yield
/// a named first segment. Falls back to `file` unchanged if it is not under
/// `base_dir`.
pub fn relative_to_parent(base_dir: &Path, file: &Path) -> PathBuf {
    let base = normalize(base_dir);
    let file = normalize(file);
    let anchor = base.parent().unwrap_or(&base);

    match file.strip_prefix(anchor) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => file,
    }
}

/// Absolute form of `path` with `.` components removed. `..` is kept, as
/// resolving it lexically would be wrong across symlinks.
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    absolute.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

/// Read a data file into a string, rejecting files larger than
/// [`MAX_FILE_SIZE_BYTES`]. A leading UTF-8 byte order mark is dropped.
///
/// The size is checked on the open handle so the file cannot be swapped between
/// the check and the read.
///
/// # Errors
///
/// Returns [`ExplorerError::Io`] if the file cannot be opened or read or is not
/// valid UTF-8, and [`ExplorerError::FileTooLarge`] above the size limit.
pub fn read_data_file(path: &Path) -> Result<String, ExplorerError> {
    let mut file = File::open(path).map_err(|e| ExplorerError::io(path, e))?;
    let size = file.metadata().map_err(|e| ExplorerError::io(path, e))?.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(ExplorerError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_FILE_SIZE_BYTES,
        });
    }

    let mut content = String::with_capacity(size as usize);
    file.read_to_string(&mut content).map_err(|e| ExplorerError::io(path, e))?;
    if content.starts_with(BYTE_ORDER_MARK) {
        content.drain(..BYTE_ORDER_MARK.len_utf8());
    }
    Ok(content)
}
