/// Scheme assumed when a code is given without one (`"4326"`).
pub const DEFAULT_SCHEME: &str = "EPSG";

/// Normalize a CRS identifier to its canonical `SCHEME:CODE` form.
///
/// `"4326"`, `"epsg:4326"` and `" EPSG : 4326 "` all become `"EPSG:4326"`.
/// No existence or shape check is made here; malformed input is rejected
/// upstream.
pub fn normalize_crs_code(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.split_once(':') {
        Some((scheme, code)) => {
            let scheme = scheme.trim();
            let scheme = if scheme.is_empty() {
                DEFAULT_SCHEME.to_string()
            } else {
                scheme.to_ascii_uppercase()
            };
            format!("{}:{}", scheme, code.trim())
        }
        None => format!("{}:{}", DEFAULT_SCHEME, trimmed),
    }
}
