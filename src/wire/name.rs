/// Width of every team-name field.
pub const NAME_LEN: usize = 32;

/// UTF-8 bytes of `name`, truncated or NUL-padded to exactly [`NAME_LEN`].
/// Truncation is byte-wise and may split a multi-byte character.
pub fn pack(name: &str) -> [u8; NAME_LEN] {
    let mut field = [0u8; NAME_LEN];
    let bytes = name.as_bytes();
    let n = bytes.len().min(NAME_LEN);
    field[..n].copy_from_slice(&bytes[..n]);
    field
}

/// Strips trailing NUL padding only, then decodes lossily.
pub fn unpack(field: &[u8]) -> String {
    let end = field
        .iter()
        .rposition(|b| *b != 0)
        .map(|i| i + 1)
        .unwrap_or(0);
    String::from_utf8_lossy(&field[..end]).into_owned()
}
