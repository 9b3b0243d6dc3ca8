//! Response shapes for the parts of the YouTube Data API that we read.
//!
//! Only the fields the overlap calculation needs are modeled. Counts
//! arrive from the API as strings (`"viewCount": "1234"`) and are kept as
//! strings here; [`crate::youtube::client`] converts them.

use serde::Deserialize;

/// One page of a list response.
///
/// `items` is required: a page without it is a malformed response.
///
/// See: <https://developers.google.com/youtube/v3/guides/implementation/pagination>
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// Resources on this page.
    pub items: Vec<T>,

    /// Token for the next page, absent on the last page.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// Response to a `channels.list` lookup.
///
/// Unlike other list responses, YouTube omits `items` entirely when no
/// channel matches, so a missing list is read as an empty one.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Deserialize)]
pub struct ChannelList {
    #[serde(default)]
    pub items: Vec<Channel>,
}

/// A `channel` resource.
#[derive(Debug, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,

    pub statistics: ChannelStatistics,
}

/// Channel statistics.
#[derive(Debug, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: String,

    #[serde(rename = "viewCount")]
    pub view_count: String,
}

/// A `subscription` resource, as listed for a channel.
#[derive(Debug, Deserialize)]
pub struct Subscription {
    #[serde(rename = "subscriberSnippet")]
    pub subscriber_snippet: SubscriberSnippet,
}

/// The subscriber side of a subscription.
#[derive(Debug, Deserialize)]
pub struct SubscriberSnippet {
    /// The subscriber's channel ID.
    #[serde(rename = "channelId")]
    pub channel_id: String,
}

/// A `search` result restricted to videos.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
}

/// Identifies the resource a search result points at.
#[derive(Debug, Deserialize)]
pub struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// A `video` resource with only its statistics part.
#[derive(Debug, Deserialize)]
pub struct Video {
    pub id: Option<String>,

    pub statistics: VideoStatistics,
}

/// Statistics about a video.
///
/// YouTube hides `viewCount` on some videos, hence the `Option`.
#[derive(Debug, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_a_page_with_a_token() {
        let json = r#"{
            "kind": "youtube#subscriptionListResponse",
            "nextPageToken": "CAUQAA",
            "items": [{"subscriberSnippet": {"channelId": "UC1"}}]
        }"#;
        let page: Page<Subscription> = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(page.items[0].subscriber_snippet.channel_id, "UC1");
    }

    #[test]
    fn it_parses_the_last_page() {
        let json = r#"{"items": [{"id": {"kind": "youtube#video", "videoId": "v1"}}]}"#;
        let page: Page<SearchResult> = serde_json::from_str(json).unwrap();
        assert!(page.next_page_token.is_none());
        assert_eq!(page.items[0].id.video_id, "v1");
    }

    #[test]
    fn it_rejects_a_page_without_items() {
        let page = serde_json::from_str::<Page<SearchResult>>(r#"{"kind": "youtube#searchListResponse"}"#);
        assert!(page.is_err());
    }

    #[test]
    fn it_reads_a_channel_list_without_items_as_empty() {
        let json = r#"{"kind": "youtube#channelListResponse", "pageInfo": {"totalResults": 0}}"#;
        let list: ChannelList = serde_json::from_str(json).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn it_parses_videos_with_hidden_view_counts() {
        let json = r#"{"items": [{"id": "v1", "statistics": {"likeCount": "3"}}]}"#;
        let page: Page<Video> = serde_json::from_str(json).unwrap();
        assert!(page.items[0].statistics.view_count.is_none());
    }
}
