use std::{fs, path::Path};

pub(crate) const HASH_PREFIX: &str = "/// Icon hash (SHA-256):";

pub(crate) fn extract_hash(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix(HASH_PREFIX))
        .map(|rest| rest.trim().to_string())
}

pub(crate) fn hex_upper(bytes: impl AsRef<[u8]>) -> String {
    use std::fmt::Write;

    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut out, "{:02X}", byte).expect("write to string");
    }
    out
}
