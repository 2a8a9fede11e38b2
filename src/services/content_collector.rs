use futures::stream::{self, StreamExt, TryStreamExt};

use crate::errors::{AppError, AppResult};
use crate::services::youtube::{TranscriptFetch, VideoMetadata, VideoPlatform};

/// Upper bound on in-flight per-video fetches. Matches the max-videos clamp,
/// so a single request never holds more outbound connections than videos.
pub const MAX_CONCURRENT_FETCHES: usize = 5;

/// Gather usable text for one video: transcript if available, otherwise a
/// synthesized title/description block. `None` means the video contributes
/// nothing and is dropped from aggregation.
pub async fn collect_text(
    platform: &dyn VideoPlatform,
    video_id: &str,
) -> AppResult<Option<String>> {
    match platform.fetch_transcript(video_id).await? {
        TranscriptFetch::Available(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        TranscriptFetch::Unavailable(reason) => {
            log::debug!("transcript for {video_id} unavailable: {reason:?}");
        }
    }

    let Some(metadata) = platform.fetch_metadata(video_id).await? else {
        return Ok(None);
    };

    Ok(synthesize_metadata_text(&metadata))
}

/// Collect text for every video, dropping videos that yield none. Fetches
/// run concurrently but results keep the input (resolution) order.
pub async fn collect_texts(
    platform: &dyn VideoPlatform,
    video_ids: Vec<String>,
) -> AppResult<Vec<String>> {
    let collected: Vec<Option<String>> = stream::iter(video_ids)
        .map(|video_id| async move {
            let text = collect_text(platform, &video_id).await?;
            if text.is_none() {
                log::info!("video {video_id} yielded no usable text, skipping");
            }
            Ok::<_, AppError>(text)
        })
        .buffered(MAX_CONCURRENT_FETCHES)
        .try_collect()
        .await?;

    Ok(collected.into_iter().flatten().collect())
}

fn synthesize_metadata_text(metadata: &VideoMetadata) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if !metadata.title.is_empty() {
        parts.push(format!("Video title: {}", metadata.title));
    }
    if !metadata.description.is_empty() {
        parts.push("Video description:".to_string());
        parts.push(metadata.description.clone());
    }

    let text = parts.join("\n").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
