//! Signature attachment.
//!
//! The schedule stores the signature as an opaque data URL; this is the only
//! place that knows how to build one from an image file.

use crate::errors::AppResult;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fs;
use std::path::Path;

pub fn data_url_from_file(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path)?;

    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    };

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
