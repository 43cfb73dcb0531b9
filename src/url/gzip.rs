/// Compute the pre-compressed variant name for an asset file.
///
/// `app.css` becomes `app.gz.css`; only the final extension moves, so
/// `app.min.js` becomes `app.min.gz.js`. Names without a usable extension
/// (no dot, hidden files, a dot inside a parent directory only) are
/// returned unchanged — a missing variant must never break a render.
pub fn gzip_variant_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, extension))
            if !stem.is_empty() && !extension.is_empty() && !extension.contains('/') =>
        {
            format!("{stem}.gz.{extension}")
        }
        _ => file_name.to_string(),
    }
}
