//! Output file naming and the SVG file sink

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::render::Style;

/// Names longer than this are shortened to head + tail
const MAX_NAME_LEN: usize = 50;
const HEAD_LEN: usize = 30;
const TAIL_LEN: usize = 20;

/// Derive the output file name for `text` rendered in `style`
///
/// A leading `http://` or `https://` is stripped (ASCII case-insensitive),
/// characters that filesystems reject are replaced with `_`, and names over
/// 50 characters keep their first 30 and last 20 characters concatenated.
/// The style picks the suffix.
pub fn file_name_for(text: &str, style: Style) -> String {
    let base = sanitized_base(text);
    match style {
        Style::Classic => format!("{base}_classic_qrcode.svg"),
        Style::Blob => format!("{base}_merged_qrcode.svg"),
    }
}

fn sanitized_base(text: &str) -> String {
    let without_protocol = strip_protocol(text);
    let sanitized: String = without_protocol
        .chars()
        .map(|c| if is_illegal(c) { '_' } else { c })
        .collect();

    let count = sanitized.chars().count();
    if count <= MAX_NAME_LEN {
        return sanitized;
    }
    let head: String = sanitized.chars().take(HEAD_LEN).collect();
    let tail: String = sanitized.chars().skip(count - TAIL_LEN).collect();
    head + &tail
}

fn strip_protocol(text: &str) -> &str {
    for prefix in ["http://", "https://"] {
        // get() avoids slicing through a multi-byte character
        if let Some(head) = text.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return &text[prefix.len()..];
            }
        }
    }
    text
}

/// Characters disallowed in file names on common filesystems
fn is_illegal(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | '\x00'..='\x1f')
}

/// Write the SVG document under `dir` and return the full path
///
/// One scoped write with no partial-write recovery; failures propagate to
/// the caller.
pub fn write_svg(dir: &Path, file_name: &str, svg: &str) -> io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, svg)?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
