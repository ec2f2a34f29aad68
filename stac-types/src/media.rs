//! Media type classification for thumbnails.

/// Raster image subtypes every mainstream browser renders natively.
const BROWSER_IMAGE_SUBTYPES: &[&str] = &["png", "apng", "jpeg", "jpg", "pjpeg", "gif", "webp"];

/// True iff a browser can display an image of this media type without a plugin.
///
/// Parameters (`; charset=...`) are ignored and matching is case-insensitive.
/// A missing media type is not displayable.
#[must_use]
pub fn can_browser_display_image(media_type: Option<&str>) -> bool {
    let Some(media_type) = media_type else {
        return false;
    };
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    let Some((top, sub)) = essence.split_once('/') else {
        return false;
    };
    top.eq_ignore_ascii_case("image")
        && BROWSER_IMAGE_SUBTYPES
            .iter()
            .any(|known| sub.eq_ignore_ascii_case(known))
}
