//! resolve
//!
//! URI resolution: normalizes storage-scheme locators into fetchable
//! HTTP(S) URLs.
//!
//! # Design
//!
//! Metadata and image locators come in several addressing schemes
//! (content-addressed IPFS, Arweave archival storage, vendor gateways).
//! Resolution is a table-driven prefix match over a static mapping of
//! scheme prefix to public gateway base, so new schemes are added by
//! extending the table rather than touching control flow.
//!
//! The function is pure and total: absent or empty input resolves to
//! `None`, a recognized prefix is rewritten to its gateway, and anything
//! else is returned unchanged on the assumption it is already an HTTP(S)
//! URL.

/// A scheme prefix and the gateway base it rewrites to.
pub type GatewayMapping = (&'static str, &'static str);

/// Static mapping of locator scheme prefixes to public gateway bases.
pub const GATEWAYS: &[GatewayMapping] = &[
    ("ipfs://", "https://ipfs.io/ipfs/"),
    ("ar://", "https://arweave.net/"),
    ("filebase://", "https://filebase.io/ipfs/"),
    ("pinta://", "https://pinta.cloud/"),
];

/// Resolve a locator against the default gateway table.
///
/// Returns `None` for absent or empty input. A locator beginning with a
/// recognized scheme prefix becomes the gateway base followed by the exact
/// remainder of the input. Any other non-empty input is returned unchanged.
pub fn resolve_uri(uri: Option<&str>) -> Option<String> {
    resolve_with(uri, GATEWAYS)
}

/// Resolve a locator against an explicit gateway table.
///
/// Tests use this to point recognized schemes at local stub servers.
pub fn resolve_with(uri: Option<&str>, table: &[GatewayMapping]) -> Option<String> {
    let uri = uri?;
    if uri.is_empty() {
        return None;
    }
    for (scheme, base) in table {
        if let Some(rest) = uri.strip_prefix(scheme) {
            return Some(format!("{base}{rest}"));
        }
    }
    Some(uri.to_string())
}
