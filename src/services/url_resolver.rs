use once_cell::sync::Lazy;
use regex::Regex;

static PLAYLIST_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[?&]list=([a-zA-Z0-9_-]+)").expect("PLAYLIST_ID_RE is a valid regex pattern")
});

static BARE_VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("BARE_VIDEO_ID_RE is a valid regex pattern")
});

static WATCH_VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"v=([a-zA-Z0-9_-]{11})").expect("WATCH_VIDEO_ID_RE is a valid regex pattern")
});

static SHORT_DOMAIN_VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})")
        .expect("SHORT_DOMAIN_VIDEO_ID_RE is a valid regex pattern")
});

static SHORTS_VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"shorts/([a-zA-Z0-9_-]{11})").expect("SHORTS_VIDEO_ID_RE is a valid regex pattern")
});

/// Extract a playlist id from a `list=` query parameter, if present.
pub fn resolve_playlist_id(input: &str) -> Option<String> {
    PLAYLIST_ID_RE
        .captures(input)
        .map(|caps| caps[1].to_string())
}

/// Extract a video id from a URL or bare identifier. Accepted forms, first
/// match wins: a bare 11-character id, `watch?v=<id>`, `/shorts/<id>`,
/// `youtu.be/<id>`.
pub fn resolve_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();

    if BARE_VIDEO_ID_RE.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    for pattern in [
        &*WATCH_VIDEO_ID_RE,
        &*SHORTS_VIDEO_ID_RE,
        &*SHORT_DOMAIN_VIDEO_ID_RE,
    ] {
        if let Some(caps) = pattern.captures(trimmed) {
            return Some(caps[1].to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_id_extracted_from_playlist_url() {
        let url = "https://www.youtube.com/playlist?list=PLabc123_-XYZ";
        assert_eq!(resolve_playlist_id(url), Some("PLabc123_-XYZ".to_string()));
    }

    #[test]
    fn playlist_id_extracted_regardless_of_other_params() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123&index=4";
        assert_eq!(resolve_playlist_id(url), Some("PL123".to_string()));
    }

    #[test]
    fn playlist_id_absent_returns_none() {
        assert_eq!(resolve_playlist_id("https://youtu.be/dQw4w9WgXcQ"), None);
        assert_eq!(resolve_playlist_id("not a url at all"), None);
    }

    #[test]
    fn bare_video_id_returned_unchanged() {
        assert_eq!(
            resolve_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            resolve_video_id("  dQw4w9WgXcQ  "),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn video_id_from_watch_url() {
        assert_eq!(
            resolve_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn video_id_from_short_domain_url() {
        assert_eq!(
            resolve_video_id("https://youtu.be/dQw4w9WgXcQ?t=42"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn video_id_from_shorts_path() {
        assert_eq!(
            resolve_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn unresolvable_input_returns_none() {
        assert_eq!(resolve_video_id("https://example.com/video"), None);
        assert_eq!(resolve_video_id("tooshort"), None);
        assert_eq!(resolve_video_id(""), None);
    }
}
