use std::fs;
use std::io::Write;
use std::path::Path;

use crate::StoreError;

/// Owner read/write only. Applied before the rename so the target never
/// exists with wider permissions.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads the whole file into memory.
pub(crate) fn read(path: &Path) -> Result<Vec<u8>, StoreError> {
    fs::read(path).map_err(io_err(path))
}

/// Replaces `path` with `data` via a sibling temp file and a rename, so a
/// reader sees either the old contents or the new ones, never a mix.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path).map_err(io_err(&temp_path))?;
    file.write_all(data).map_err(io_err(&temp_path))?;
    file.sync_all().map_err(io_err(&temp_path))?;
    drop(file);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&temp_path, fs::Permissions::from_mode(FILE_MODE))
            .map_err(io_err(&temp_path))?;
    }

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}
