use std::ffi::OsString;

/// Splits a command line on runs of whitespace. No quoting or escaping.
///
/// Valid UTF-8 splits on Unicode whitespace; any other line splits on ASCII
/// whitespace so its bytes reach the command untouched.
pub fn tokenize(line: &[u8]) -> Vec<OsString> {
    match std::str::from_utf8(line) {
        Ok(text) => text.split_whitespace().map(OsString::from).collect(),
        Err(_) => line
            .split(u8::is_ascii_whitespace)
            .filter(|word| !word.is_empty())
            .map(|word| bytes_to_os_string(word.to_vec()))
            .collect(),
    }
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}
