///
/// Cursor token codec.
///
/// Owns the opaque hex token format carried in navigation links.
/// Contains no pagination semantics; record ids are decoded by `RecordId`.
///

// Decode bound for untrusted navigation input. Record id tokens are 16 chars.
const MAX_CURSOR_TOKEN_HEX_LEN: usize = 64;

///
/// CursorDecodeError
///

#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum CursorDecodeError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} hex chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token must have an even number of hex characters")]
    OddLength,

    #[error("invalid hex character at position {position}")]
    InvalidHex { position: usize },

    #[error("cursor token decodes to {found} bytes, expected {expected}")]
    WidthMismatch { expected: usize, found: usize },
}

/// Encode raw cursor bytes as a lowercase hex token.
#[must_use]
pub fn encode_cursor(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        })
}

/// Decode a hex cursor token into raw bytes.
///
/// Surrounding whitespace is trimmed and either hex case is accepted.
pub fn decode_cursor(token: &str) -> Result<Vec<u8>, CursorDecodeError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(CursorDecodeError::Empty);
    }
    if token.len() > MAX_CURSOR_TOKEN_HEX_LEN {
        return Err(CursorDecodeError::TooLong {
            len: token.len(),
            max: MAX_CURSOR_TOKEN_HEX_LEN,
        });
    }
    if !token.len().is_multiple_of(2) {
        return Err(CursorDecodeError::OddLength);
    }

    token
        .as_bytes()
        .chunks_exact(2)
        .enumerate()
        .map(|(pair, digits)| {
            let position = pair * 2 + 1;
            let hi = hex_nibble(digits[0]).ok_or(CursorDecodeError::InvalidHex { position })?;
            let lo = hex_nibble(digits[1]).ok_or(CursorDecodeError::InvalidHex {
                position: position + 1,
            })?;

            Ok((hi << 4) | lo)
        })
        .collect()
}

const fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

///
/// TESTS
///
