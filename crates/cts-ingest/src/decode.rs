//! Legacy text decoding.
//!
//! The source database ships its exports in Mac OS Roman, the OS 9-era
//! single-byte encoding. Everything downstream assumes UTF-8, so decoding
//! happens before any other text processing.

use encoding_rs::MACINTOSH;

/// Decode Mac OS Roman bytes into a UTF-8 string.
///
/// Mac OS Roman assigns a character to every byte value, so this cannot
/// fail; unmapped control bytes pass through unchanged.
pub fn decode_mac_roman(bytes: &[u8]) -> String {
    let (text, _, _) = MACINTOSH.decode(bytes);
    text.into_owned()
}
