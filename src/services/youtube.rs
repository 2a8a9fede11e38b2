use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

const PLAYLIST_ITEMS_URL: &str = "https://www.googleapis.com/youtube/v3/playlistItems";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";
const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";

/// Why a transcript could not be fetched. All three reasons are recoverable:
/// the collector degrades to the metadata fallback instead of failing the
/// request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnavailableReason {
    NotAvailable,
    RateLimited,
    TransientNetwork,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptFetch {
    Available(String),
    Unavailable(UnavailableReason),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// List up to `max_videos` video ids from a playlist, in playlist order.
    async fn list_playlist_videos(
        &self,
        playlist_id: &str,
        max_videos: usize,
    ) -> AppResult<Vec<String>>;

    /// Fetch the transcript for one video. Unavailability is a tagged
    /// outcome, not an error; only genuine upstream failures return `Err`.
    async fn fetch_transcript(&self, video_id: &str) -> AppResult<TranscriptFetch>;

    /// Fetch title/description for one video. Best-effort: any failure
    /// resolves to `None`.
    async fn fetch_metadata(&self, video_id: &str) -> AppResult<Option<VideoMetadata>>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemsPage {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    content_details: Option<PlaylistItemContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemContentDetails {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: Option<VideoSnippet>,
}

#[derive(Debug, Deserialize, Default)]
struct VideoSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(default)]
    segs: Vec<TimedTextSegment>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    #[serde(default)]
    utf8: String,
}

/// YouTube Data API v3 client plus the caption (`timedtext`) endpoint.
pub struct YouTubeDataApi {
    client: reqwest::Client,
    api_key: SecretString,
    transcript_language: String,
}

impl YouTubeDataApi {
    pub fn new(
        client: reqwest::Client,
        api_key: SecretString,
        transcript_language: String,
    ) -> Self {
        Self {
            client,
            api_key,
            transcript_language,
        }
    }
}

#[async_trait]
impl VideoPlatform for YouTubeDataApi {
    async fn list_playlist_videos(
        &self,
        playlist_id: &str,
        max_videos: usize,
    ) -> AppResult<Vec<String>> {
        let per_page = max_videos.min(50).to_string();
        let mut video_ids: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.client.get(PLAYLIST_ITEMS_URL).query(&[
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", per_page.as_str()),
                ("key", self.api_key.expose_secret()),
            ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: PlaylistItemsPage = request
                .send()
                .await
                .map_err(|err| {
                    AppError::UpstreamError(format!("playlist listing request failed: {err}"))
                })?
                .error_for_status()
                .map_err(|err| {
                    AppError::UpstreamError(format!("playlist listing rejected: {err}"))
                })?
                .json()
                .await
                .map_err(|err| {
                    AppError::UpstreamError(format!("playlist listing returned bad payload: {err}"))
                })?;

            for item in page.items {
                if let Some(details) = item.content_details {
                    video_ids.push(details.video_id);
                    if video_ids.len() >= max_videos {
                        return Ok(video_ids);
                    }
                }
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(video_ids)
    }

    async fn fetch_transcript(&self, video_id: &str) -> AppResult<TranscriptFetch> {
        let response = match self
            .client
            .get(TIMEDTEXT_URL)
            .query(&[
                ("v", video_id),
                ("lang", self.transcript_language.as_str()),
                ("fmt", "json3"),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) if err.is_timeout() || err.is_connect() => {
                return Ok(TranscriptFetch::Unavailable(
                    UnavailableReason::TransientNetwork,
                ));
            }
            Err(err) => {
                return Err(AppError::UpstreamError(format!(
                    "transcript request failed: {err}"
                )));
            }
        };

        let status = response.status();
        if status.as_u16() == 429 {
            return Ok(TranscriptFetch::Unavailable(UnavailableReason::RateLimited));
        }
        if status.is_server_error() {
            return Ok(TranscriptFetch::Unavailable(
                UnavailableReason::TransientNetwork,
            ));
        }
        if !status.is_success() {
            return Ok(TranscriptFetch::Unavailable(UnavailableReason::NotAvailable));
        }

        let body = response.text().await.map_err(|err| {
            AppError::UpstreamError(format!("transcript body could not be read: {err}"))
        })?;

        // Videos without captions answer 200 with an empty body; videos with
        // captions in another language answer with an empty event list.
        let Ok(payload) = serde_json::from_str::<TimedTextResponse>(&body) else {
            return Ok(TranscriptFetch::Unavailable(UnavailableReason::NotAvailable));
        };

        let text = payload
            .events
            .iter()
            .flat_map(|event| event.segs.iter())
            .map(|seg| seg.utf8.trim())
            .filter(|seg| !seg.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.trim().is_empty() {
            Ok(TranscriptFetch::Unavailable(UnavailableReason::NotAvailable))
        } else {
            Ok(TranscriptFetch::Available(text.trim().to_string()))
        }
    }

    async fn fetch_metadata(&self, video_id: &str) -> AppResult<Option<VideoMetadata>> {
        let response = self
            .client
            .get(VIDEOS_URL)
            .query(&[
                ("part", "snippet"),
                ("id", video_id),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await;

        // Metadata is the fallback of a fallback; API or network trouble here
        // just means this video contributes nothing.
        let payload: VideoListResponse = match response {
            Ok(response) => match response.error_for_status() {
                Ok(response) => match response.json().await {
                    Ok(payload) => payload,
                    Err(err) => {
                        log::debug!("metadata payload for {video_id} unreadable: {err}");
                        return Ok(None);
                    }
                },
                Err(err) => {
                    log::debug!("metadata request for {video_id} rejected: {err}");
                    return Ok(None);
                }
            },
            Err(err) => {
                log::debug!("metadata request for {video_id} failed: {err}");
                return Ok(None);
            }
        };

        let Some(snippet) = payload.items.into_iter().next().and_then(|item| item.snippet) else {
            return Ok(None);
        };

        let title = snippet.title.trim().to_string();
        let description = snippet.description.trim().to_string();
        if title.is_empty() && description.is_empty() {
            return Ok(None);
        }

        Ok(Some(VideoMetadata { title, description }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timedtext_payload_parses_segments() {
        let body = r#"{"events":[{"segs":[{"utf8":"hello"},{"utf8":" world"}]},{"segs":[{"utf8":"again"}]}]}"#;
        let payload: TimedTextResponse = serde_json::from_str(body).expect("payload should parse");

        let text = payload
            .events
            .iter()
            .flat_map(|event| event.segs.iter())
            .map(|seg| seg.utf8.trim())
            .filter(|seg| !seg.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(text, "hello world again");
    }

    #[test]
    fn timedtext_payload_tolerates_missing_fields() {
        let payload: TimedTextResponse =
            serde_json::from_str(r#"{"events":[{},{"segs":[{}]}]}"#).expect("should parse");
        assert_eq!(payload.events.len(), 2);

        let payload: TimedTextResponse = serde_json::from_str("{}").expect("should parse");
        assert!(payload.events.is_empty());
    }

    #[test]
    fn playlist_page_parses_video_ids_and_token() {
        let body = r#"{
            "items": [
                {"contentDetails": {"videoId": "aaaaaaaaaaa"}},
                {"contentDetails": {"videoId": "bbbbbbbbbbb"}}
            ],
            "nextPageToken": "CAUQAA"
        }"#;
        let page: PlaylistItemsPage = serde_json::from_str(body).expect("page should parse");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(
            page.items[0].content_details.as_ref().unwrap().video_id,
            "aaaaaaaaaaa"
        );
    }

    #[test]
    fn video_list_parses_snippet() {
        let body = r#"{"items":[{"snippet":{"title":"T","description":"D"}}]}"#;
        let payload: VideoListResponse = serde_json::from_str(body).expect("should parse");

        let snippet = payload.items[0].snippet.as_ref().unwrap();
        assert_eq!(snippet.title, "T");
        assert_eq!(snippet.description, "D");
    }
}
