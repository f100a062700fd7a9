use std::fs;
use std::path::Path;
use thiserror::Error;

/// Opens the only region of the target file this crate may rewrite.
pub const START_MARKER: &str = "<!-- CONTRIBUTORS START -->";

/// Closes the rewritable region.
pub const END_MARKER: &str = "<!-- CONTRIBUTORS END -->";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("contributor markers not found in target file")]
    MarkersNotFound,
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Replaces the region strictly between the first start marker and the first
/// end marker after it with `fragment`, padded by newlines. Every other byte
/// of `content` is returned unchanged.
pub fn splice_fragment(content: &str, fragment: &str) -> Result<String, DocumentError> {
    let start = content
        .find(START_MARKER)
        .map(|offset| offset + START_MARKER.len())
        .ok_or(DocumentError::MarkersNotFound)?;
    let end = content[start..]
        .find(END_MARKER)
        .map(|offset| start + offset)
        .ok_or(DocumentError::MarkersNotFound)?;

    let mut updated = String::with_capacity(content.len() + fragment.len());
    updated.push_str(&content[..start]);
    updated.push('\n');
    updated.push_str(fragment);
    updated.push('\n');
    updated.push_str(&content[end..]);
    Ok(updated)
}

/// Rewrites the marker region of the file at `path`. Returns `false` when
/// the rendered content is already in place and nothing is written.
pub fn update_file(path: &Path, fragment: &str) -> Result<bool, DocumentError> {
    let content = fs::read_to_string(path)?;
    let updated = splice_fragment(&content, fragment)?;
    if updated == content {
        return Ok(false);
    }
    fs::write(path, updated)?;
    Ok(true)
}
