use std::fs;
use std::io;
use std::path::Path;

/// Read a whole UTF-8 text file.
pub fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Write `content` to `path`, replacing an existing file.
///
/// Returns `true` when a previous file was overwritten. The write is not atomic.
pub fn write_replacing(path: &Path, content: &[u8]) -> io::Result<bool> {
    let existed = path.exists();
    fs::write(path, content)?;
    Ok(existed)
}
