use serde::Deserialize;

/// Upper bound on the page size a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Common pagination query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParam {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Items per page; falls back to the configured default.
    pub per_page: Option<u64>,
}

impl PaginationParam {
    pub fn per_page(&self, default: u64) -> u64 {
        resolve_per_page(self.per_page, default)
    }
}

/// Resolves a requested page size against the configured default, clamped to
/// `1..=MAX_PER_PAGE`.
pub fn resolve_per_page(requested: Option<u64>, default: u64) -> u64 {
    requested.unwrap_or(default).clamp(1, MAX_PER_PAGE)
}
