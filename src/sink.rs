//! sink
//!
//! File naming for downloaded images: sanitization, extension inference,
//! and destination-path construction.
//!
//! # Design
//!
//! The destination name is derived from the metadata's declared display
//! name when present (sanitized for filesystem safety), falling back to
//! `NFT_<id>`. The extension comes from the resolved image URL's path,
//! defaulting to `.jpg`. Two tokens can share a sanitized display name, so
//! the destination check appends the token id when the path already exists
//! rather than silently overwriting.

use std::path::{Path, PathBuf};

/// Characters stripped from display names before use as a file name.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Extension used when the image URL's path carries none.
const DEFAULT_EXTENSION: &str = ".jpg";

/// Strip filesystem-illegal characters and trim surrounding whitespace.
///
/// Idempotent: sanitizing an already-sanitized name is a no-op.
pub fn sanitize_name(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !ILLEGAL_CHARS.contains(c)).collect();
    stripped.trim().to_string()
}

/// Derive the file stem for a token from its optional display name.
///
/// Falls back to `NFT_<id>` when the name is absent or sanitizes to empty.
pub fn file_stem(name: Option<&str>, token_id: u64) -> String {
    match name {
        Some(raw) => {
            let clean = sanitize_name(raw);
            if clean.is_empty() {
                format!("NFT_{token_id}")
            } else {
                clean
            }
        }
        None => format!("NFT_{token_id}"),
    }
}

/// Infer a file extension (including the dot) from a URL's path component.
///
/// Query string and fragment are ignored. Defaults to `.jpg` when the last
/// path segment has no extension.
pub fn inferred_extension(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => format!(".{ext}"),
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Build the destination path for a token's image.
///
/// When `<stem><ext>` already exists in the output directory the token id
/// is appended (`<stem>_<id><ext>`) so a later token never overwrites an
/// earlier one's file.
pub fn destination(output_dir: &Path, stem: &str, ext: &str, token_id: u64) -> PathBuf {
    let preferred = output_dir.join(format!("{stem}{ext}"));
    if preferred.exists() {
        output_dir.join(format!("{stem}_{token_id}{ext}"))
    } else {
        preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sanitize_strips_every_illegal_character() {
        assert_eq!(sanitize_name(r#"<a>:b"c/d\e|f?g*h"#), "abcdefgh");
    }

    #[test]
    fn sanitize_trims_whitespace() {
        assert_eq!(sanitize_name("  Cool Cat #42  "), "Cool Cat #42");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize_name("  <Weird>/Name?  ");
        assert_eq!(sanitize_name(&once), once);
    }

    #[test]
    fn stem_uses_sanitized_name() {
        assert_eq!(file_stem(Some("Ape #1"), 1), "Ape #1");
        assert_eq!(file_stem(Some("a/b"), 1), "ab");
    }

    #[test]
    fn stem_falls_back_when_name_is_absent_or_empty() {
        assert_eq!(file_stem(None, 7), "NFT_7");
        assert_eq!(file_stem(Some("   "), 7), "NFT_7");
        assert_eq!(file_stem(Some("???"), 7), "NFT_7");
    }

    #[test]
    fn extension_comes_from_url_path() {
        assert_eq!(inferred_extension("https://x.test/img/1.png"), ".png");
        assert_eq!(inferred_extension("https://x.test/a.b/c.webp"), ".webp");
    }

    #[test]
    fn extension_ignores_query_and_fragment() {
        assert_eq!(
            inferred_extension("https://x.test/1.gif?width=500#frame"),
            ".gif"
        );
        assert_eq!(inferred_extension("https://x.test/raw?fmt=png"), ".jpg");
    }

    #[test]
    fn extension_defaults_to_jpg() {
        assert_eq!(inferred_extension("https://x.test/images/42"), ".jpg");
        assert_eq!(inferred_extension("https://x.test/.hidden"), ".jpg");
    }

    #[test]
    fn destination_appends_token_id_on_collision() {
        let dir = tempdir().unwrap();
        let first = destination(dir.path(), "Twin", ".png", 3);
        assert_eq!(first, dir.path().join("Twin.png"));
        std::fs::write(&first, b"x").unwrap();

        let second = destination(dir.path(), "Twin", ".png", 9);
        assert_eq!(second, dir.path().join("Twin_9.png"));
    }
}
