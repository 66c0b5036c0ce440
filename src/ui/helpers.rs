//! Shared rendering utilities.
//!
//! Thumbnail templating and HTML escaping used across the components.

use crate::domain::StreamRecord;

/// Thumbnail edge length in pixels when none is configured.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 125;

/// Image shown for streams without a preview template.
pub const PLACEHOLDER_IMAGE_URL: &str = "http://via.placeholder.com/125x125";

/// Builds a square thumbnail URL for a stream.
///
/// Replaces the `{width}` and `{height}` placeholders of the preview template
/// with `size`, or falls back to [`PLACEHOLDER_IMAGE_URL`].
///
/// # Example
///
/// ```rust
/// use jitters::domain::{Preview, StreamRecord};
/// use jitters::ui::helpers::image_url;
///
/// let stream = StreamRecord {
///     preview: Preview {
///         template: Some("https://static-cdn.jtvnw.net/previews-ttv/live_user_x-{width}x{height}.jpg".into()),
///     },
///     ..Default::default()
/// };
/// assert_eq!(image_url(&stream, 125), "https://static-cdn.jtvnw.net/previews-ttv/live_user_x-125x125.jpg");
/// ```
#[must_use]
pub fn image_url(stream: &StreamRecord, size: u32) -> String {
    stream.image_template().map_or_else(
        || PLACEHOLDER_IMAGE_URL.to_string(),
        |template| fill_template(template, size, size),
    )
}

/// Substitutes `{width}` and `{height}` in an image template.
#[must_use]
pub fn fill_template(template: &str, width: u32, height: u32) -> String {
    template
        .replace("{width}", &width.to_string())
        .replace("{height}", &height.to_string())
}

/// Escapes text for use between tags.
#[must_use]
pub fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escapes text for use inside a double-quoted attribute.
#[must_use]
pub fn attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Preview;

    fn stream_with(template: Option<&str>) -> StreamRecord {
        StreamRecord {
            preview: Preview {
                template: template.map(String::from),
            },
            ..StreamRecord::default()
        }
    }

    #[test]
    fn test_image_url_uses_template() {
        let stream = stream_with(Some(
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_rotterdam08-{width}x{height}.jpg",
        ));
        assert_eq!(
            image_url(&stream, DEFAULT_THUMBNAIL_SIZE),
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_rotterdam08-125x125.jpg"
        );
    }

    #[test]
    fn test_image_url_falls_back_to_placeholder() {
        assert_eq!(image_url(&stream_with(None), 125), PLACEHOLDER_IMAGE_URL);
        assert_eq!(image_url(&stream_with(Some("")), 125), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn test_fill_template_distinct_dimensions() {
        assert_eq!(fill_template("{width}-{height}", 320, 180), "320-180");
        assert_eq!(fill_template("static.jpg", 320, 180), "static.jpg");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(text("<b>GSL & co</b>"), "&lt;b&gt;GSL &amp; co&lt;/b&gt;");
        assert_eq!(attribute("a\"b"), "a&quot;b");
    }
}
