//! Tolerant log file reading

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ScanError;

/// Read a whole log file, replacing invalid UTF-8 and normalizing line
/// endings to `\n`.
///
/// Returns `Ok(None)` when the file does not exist. Every other I/O failure is
/// an error.
pub fn read_lossy(path: &Path) -> Result<Option<String>, ScanError> {
    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            Ok(Some(normalize_newlines(&text).into_owned()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ScanError::io(path, e)),
    }
}

/// Rewrite `\r\n` and lone `\r` as `\n`, so patterns never match across
/// carriage-return separated lines.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
