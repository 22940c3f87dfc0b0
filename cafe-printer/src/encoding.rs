//! Code page utilities for Turkish thermal printers
//!
//! Receipt printers take single-byte text in the selected code page.
//! This module provides utilities for:
//! - Calculating printed widths
//! - Truncating/padding strings to a printed width
//! - Converting UTF-8 to Windows-1254 while preserving ESC/POS commands

use encoding_rs::WINDOWS_1254;
use tracing::instrument;

/// ESC t n table number of WPC1254 on Epson-compatible printers
const CODE_PAGE_WPC1254: u8 = 48;

/// Select the Turkish code page (ESC t n)
const SELECT_CODE_PAGE: [u8; 3] = [0x1B, 0x74, CODE_PAGE_WPC1254];

/// Encode one character, falling back to '?' when the code page lacks it
fn encode_char(c: char, out: &mut Vec<u8>) {
    let mut tmp = [0u8; 4];
    let (bytes, _, had_errors) = WINDOWS_1254.encode(c.encode_utf8(&mut tmp));
    if had_errors {
        out.push(b'?');
    } else {
        out.extend_from_slice(&bytes);
    }
}

/// Get the printed width of a string
///
/// Windows-1254 is single-byte, so every character takes one column.
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to fit within a printed width
pub fn truncate_text(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad a string to a specific printed width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_text(s: &str, width: usize, align_right: bool) -> String {
    let current_width = text_width(s);
    if current_width >= width {
        return truncate_text(s, width);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Convert mixed UTF-8 content (with ESC/POS commands) to Windows-1254
///
/// ASCII bytes (0x00-0x7F) are kept exactly as is, which protects ESC/POS
/// commands from being corrupted. Only bytes >= 0x80 are treated as UTF-8
/// sequences and re-encoded.
///
/// The code page is selected at the start and again after every INIT
/// command (ESC @), which resets it.
#[instrument(skip(bytes))]
pub fn convert_to_codepage(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + SELECT_CODE_PAGE.len());
    result.extend_from_slice(&SELECT_CODE_PAGE);

    let mut buffer = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        // INIT (ESC @) resets the code page
        if b == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == 0x40 {
            flush_buffer(&mut buffer, &mut result);
            result.extend_from_slice(&[0x1B, 0x40]);
            result.extend_from_slice(&SELECT_CODE_PAGE);
            i += 2;
            continue;
        }

        if b < 128 {
            flush_buffer(&mut buffer, &mut result);
            result.push(b);
        } else {
            buffer.push(b);
        }
        i += 1;
    }

    flush_buffer(&mut buffer, &mut result);
    result
}

/// Flush the non-ASCII buffer, converting UTF-8 to the code page
fn flush_buffer(buffer: &mut Vec<u8>, result: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }
    let s = String::from_utf8_lossy(buffer);
    for c in s.chars() {
        encode_char(c, result);
    }
    buffer.clear();
}
