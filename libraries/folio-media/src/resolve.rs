//! Playable-source derivation
//!
//! Turns a classified URL into something a video surface can attach:
//! an embed URL for hosted players, or the raw URL for HLS/direct
//! playback. Embeds are derived muted and controls-less so autoplay is
//! allowed; unmuted autoplay is never assumed to succeed.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::classify::{classify_media_url, MediaClass};

/// A resolved, attachable playback source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayableSource {
    /// YouTube iframe embed
    YouTubeEmbed {
        /// Parsed video/live id
        video_id: String,
        /// Muted, controls-less autoplay embed URL
        embed_url: String,
    },

    /// Facebook video plugin embed
    FacebookEmbed {
        /// plugins/video.php URL with the source form-encoded into `href`
        embed_url: String,
    },

    /// HLS playlist; attachment strategy depends on platform support
    Hls {
        /// The `.m3u8` playlist URL
        url: String,
    },

    /// Direct video file URL for a native video surface
    Direct {
        /// The raw URL
        url: String,
    },
}

/// How an HLS source should be attached to a native video surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HlsStrategy {
    /// Platform claims native `application/vnd.apple.mpegurl` support
    Native,
    /// Drive playback through a media-source extension library
    MediaSourceExtension,
}

impl HlsStrategy {
    /// Pick the strategy from the platform's claimed MIME support
    pub fn for_native_support(native: bool) -> Self {
        if native {
            HlsStrategy::Native
        } else {
            HlsStrategy::MediaSourceExtension
        }
    }
}

/// Resolve a stream URL into a playable source
///
/// Pure and deterministic. A YouTube URL whose id cannot be parsed falls
/// back to a direct source rather than failing; resolution is total.
pub fn resolve_playable_source(stream_url: &str) -> PlayableSource {
    let trimmed = stream_url.trim();

    match classify_media_url(trimmed) {
        MediaClass::YouTube => match extract_youtube_id(trimmed) {
            Some(video_id) => {
                let embed_url = format!(
                    "https://www.youtube.com/embed/{video_id}?autoplay=1&mute=1&controls=0&playsinline=1&loop=1&playlist={video_id}"
                );
                PlayableSource::YouTubeEmbed {
                    video_id,
                    embed_url,
                }
            }
            None => PlayableSource::Direct {
                url: trimmed.to_string(),
            },
        },
        MediaClass::Facebook => {
            let href: String = url::form_urlencoded::byte_serialize(trimmed.as_bytes()).collect();
            PlayableSource::FacebookEmbed {
                embed_url: format!(
                    "https://www.facebook.com/plugins/video.php?href={href}&show_text=false&autoplay=true&mute=1"
                ),
            }
        }
        MediaClass::Hls => PlayableSource::Hls {
            url: trimmed.to_string(),
        },
        MediaClass::Image | MediaClass::DirectVideo => PlayableSource::Direct {
            url: trimmed.to_string(),
        },
    }
}

/// Extract the video id from any recognized YouTube URL form
///
/// Handles `watch?v=`, `youtu.be/`, `/live/`, `/embed/`, `/shorts/` and
/// the legacy `/v/` form. All forms referencing one video yield the same
/// id.
pub fn extract_youtube_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let host = host.strip_prefix("m.").unwrap_or(host);

    if host == "youtu.be" {
        return parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned);
    }

    if !host.ends_with("youtube.com") {
        return None;
    }

    // watch?v=<id>
    if let Some(id) = parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
    {
        if !id.is_empty() {
            return Some(id);
        }
    }

    // /live/<id>, /embed/<id>, /shorts/<id>, /v/<id>
    let mut segments = parsed.path_segments()?;
    match segments.next()? {
        "live" | "embed" | "shorts" | "v" => segments
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    fn embed_id(source: PlayableSource) -> String {
        match source {
            PlayableSource::YouTubeEmbed {
                video_id,
                embed_url,
            } => {
                assert!(embed_url.contains(&video_id));
                video_id
            }
            other => panic!("expected YouTube embed, got {other:?}"),
        }
    }

    #[test]
    fn youtube_forms_resolve_to_same_id() {
        let watch = format!("https://www.youtube.com/watch?v={ID}");
        let short = format!("https://youtu.be/{ID}");
        let live = format!("https://www.youtube.com/live/{ID}");

        assert_eq!(embed_id(resolve_playable_source(&watch)), ID);
        assert_eq!(embed_id(resolve_playable_source(&short)), ID);
        assert_eq!(embed_id(resolve_playable_source(&live)), ID);
    }

    #[test]
    fn youtube_embed_is_muted_and_controls_less() {
        let source = resolve_playable_source(&format!("https://youtu.be/{ID}"));
        let PlayableSource::YouTubeEmbed { embed_url, .. } = source else {
            panic!("expected YouTube embed");
        };
        assert!(embed_url.contains("mute=1"));
        assert!(embed_url.contains("controls=0"));
        assert!(embed_url.starts_with("https://www.youtube.com/embed/"));
    }

    #[test]
    fn youtube_extra_forms() {
        assert_eq!(
            extract_youtube_id(&format!("https://www.youtube.com/embed/{ID}")).as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_youtube_id(&format!("https://www.youtube.com/shorts/{ID}")).as_deref(),
            Some(ID)
        );
        assert_eq!(
            extract_youtube_id(&format!("https://m.youtube.com/watch?v={ID}")).as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn unparseable_youtube_degrades_to_direct() {
        let source = resolve_playable_source("https://www.youtube.com/feed/subscriptions");
        assert!(matches!(source, PlayableSource::Direct { .. }));
    }

    #[test]
    fn facebook_href_is_encoded() {
        let source = resolve_playable_source("https://www.facebook.com/user/videos/123");
        let PlayableSource::FacebookEmbed { embed_url } = source else {
            panic!("expected Facebook embed");
        };
        assert!(embed_url.starts_with("https://www.facebook.com/plugins/video.php?href="));
        assert!(embed_url.contains("https%3A%2F%2Fwww.facebook.com%2Fuser%2Fvideos%2F123"));
    }

    #[test]
    fn hls_and_direct() {
        assert_eq!(
            resolve_playable_source("https://cdn.example.com/live.m3u8"),
            PlayableSource::Hls {
                url: "https://cdn.example.com/live.m3u8".to_string()
            }
        );
        assert_eq!(
            resolve_playable_source("https://cdn.example.com/clip.mp4"),
            PlayableSource::Direct {
                url: "https://cdn.example.com/clip.mp4".to_string()
            }
        );
    }

    #[test]
    fn hls_strategy_from_platform_claim() {
        assert_eq!(HlsStrategy::for_native_support(true), HlsStrategy::Native);
        assert_eq!(
            HlsStrategy::for_native_support(false),
            HlsStrategy::MediaSourceExtension
        );
    }
}
