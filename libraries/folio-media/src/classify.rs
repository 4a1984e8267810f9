//! URL shape classification

use serde::{Deserialize, Serialize};

/// What kind of media a URL points at, judged by shape alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaClass {
    /// Still image (by file extension)
    Image,
    /// Directly playable video file
    DirectVideo,
    /// HLS adaptive-streaming playlist (`.m3u8`)
    Hls,
    /// YouTube-hosted video or live stream
    YouTube,
    /// Facebook-hosted video
    Facebook,
}

/// Image file extensions recognized on the URL path
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "avif"];

/// Classify a media URL by string pattern
///
/// No network access, no validation of reachability; an empty or garbage
/// string classifies as `DirectVideo` and the player surface degrades
/// from there.
pub fn classify_media_url(raw: &str) -> MediaClass {
    let lower = raw.trim().to_ascii_lowercase();
    let path = strip_query(&lower);

    if lower.contains("youtube.com") || lower.contains("youtu.be") {
        return MediaClass::YouTube;
    }
    if lower.contains("facebook.com") || lower.contains("fb.watch") {
        return MediaClass::Facebook;
    }
    if path.ends_with(".m3u8") {
        return MediaClass::Hls;
    }
    if IMAGE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{ext}")))
    {
        return MediaClass::Image;
    }

    MediaClass::DirectVideo
}

/// Path portion of the URL, query string and fragment removed
fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_youtube_hosts() {
        assert_eq!(
            classify_media_url("https://www.youtube.com/watch?v=abc123"),
            MediaClass::YouTube
        );
        assert_eq!(
            classify_media_url("https://youtu.be/abc123"),
            MediaClass::YouTube
        );
    }

    #[test]
    fn classifies_facebook_hosts() {
        assert_eq!(
            classify_media_url("https://www.facebook.com/user/videos/123"),
            MediaClass::Facebook
        );
        assert_eq!(
            classify_media_url("https://fb.watch/xyz/"),
            MediaClass::Facebook
        );
    }

    #[test]
    fn classifies_hls_with_query() {
        assert_eq!(
            classify_media_url("https://cdn.example.com/live/stream.m3u8?token=1"),
            MediaClass::Hls
        );
    }

    #[test]
    fn classifies_images() {
        assert_eq!(
            classify_media_url("https://images.unsplash.com/photo.jpg?w=800"),
            MediaClass::Image
        );
        assert_eq!(
            classify_media_url("https://example.com/pic.WEBP"),
            MediaClass::Image
        );
    }

    #[test]
    fn everything_else_is_direct_video() {
        assert_eq!(
            classify_media_url("https://cdn.example.com/clip.mp4"),
            MediaClass::DirectVideo
        );
        assert_eq!(classify_media_url(""), MediaClass::DirectVideo);
        assert_eq!(classify_media_url("not a url"), MediaClass::DirectVideo);
    }

    #[test]
    fn deterministic() {
        let url = "https://cdn.example.com/live/stream.m3u8";
        assert_eq!(classify_media_url(url), classify_media_url(url));
    }
}
