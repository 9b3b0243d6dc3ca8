// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading channel data from the YouTube Data API.

use crate::conf::Settings;
use crate::youtube::error::{Error, Result, parse_count};
use crate::youtube::pager::paginate;
use crate::youtube::service::{Endpoint, Query, Service, YouTubeService};
use crate::youtube::thing::{self, ChannelList, Page, SearchResult, Subscription, Video};
use log::{debug, info};
use tokio_stream::{Stream, StreamExt};

/// Identifier, subscriber count, and view count of a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelProfile {
    id: String,
    subscriber_count: u64,
    view_count: u64,
}

impl ChannelProfile {
    /// Creates a profile for the channel identified by `id`.
    pub fn new(id: impl Into<String>, subscriber_count: u64, view_count: u64) -> Self {
        let id = id.into();
        Self {
            id,
            subscriber_count,
            view_count,
        }
    }

    /// The ID YouTube uses to identify the channel.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of subscribers.
    pub fn subscriber_count(&self) -> u64 {
        self.subscriber_count
    }

    /// Total views across the channel's videos.
    pub fn view_count(&self) -> u64 {
        self.view_count
    }
}

impl TryFrom<thing::Channel> for ChannelProfile {
    type Error = Error;

    fn try_from(channel: thing::Channel) -> Result<Self> {
        let subscriber_count =
            parse_count("subscriberCount", &channel.statistics.subscriber_count)?;
        let view_count = parse_count("viewCount", &channel.statistics.view_count)?;
        Ok(ChannelProfile::new(channel.id, subscriber_count, view_count))
    }
}

/// How a user-supplied channel name is matched against YouTube channels.
#[derive(Debug, PartialEq, Eq)]
enum Lookup<'a> {
    /// A channel ID, like `UC_x5XG1OV2P6uZZ5FSM9Ttw`.
    Id(&'a str),

    /// A channel handle, like `@GoogleDevelopers`.
    Handle(&'a str),

    /// A legacy username, like `GoogleDevelopers`.
    Username(&'a str),
}

impl<'a> Lookup<'a> {
    fn for_input(input: &'a str) -> Self {
        let input = input.trim();
        let looks_like_id = input.len() == 24
            && input.starts_with("UC")
            && input
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');

        if looks_like_id {
            Lookup::Id(input)
        } else if input.starts_with('@') {
            Lookup::Handle(input)
        } else {
            Lookup::Username(input)
        }
    }

    fn param(&self) -> (&'static str, &'a str) {
        match *self {
            Lookup::Id(id) => ("id", id),
            Lookup::Handle(handle) => ("forHandle", handle),
            Lookup::Username(username) => ("forUsername", username),
        }
    }
}

/// Reads channel profiles, subscribers, and video statistics.
///
/// Every request goes through a [`Service`], which by default is a
/// [`YouTubeService`] talking to the real API.
#[derive(Debug)]
pub struct YouTubeClient<S = YouTubeService> {
    service: S,
    page_size: u32,
}

impl YouTubeClient<YouTubeService> {
    /// Creates a client that talks to the YouTube Data API using `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        let page_size = settings.page_size();
        let service = YouTubeService::new(settings)?;
        Ok(Self::with_service(service, page_size))
    }
}

impl<S: Service + Sync> YouTubeClient<S> {
    /// Creates a client on top of an arbitrary `service`, requesting
    /// `page_size` results per page from paginated endpoints.
    pub fn with_service(service: S, page_size: u32) -> Self {
        Self { service, page_size }
    }

    /// The service used to make requests.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Resolves a channel name, handle, or ID to its profile.
    ///
    /// Exactly one request is made. The first matching channel wins;
    /// no matches is [`Error::ChannelNotFound`].
    pub async fn load_profile(&self, channel: &str) -> Result<ChannelProfile> {
        let (key, value) = Lookup::for_input(channel).param();
        let query = Query::new()
            .param("part", "snippet,contentDetails,statistics")
            .param(key, value);

        let body = self.service.get(Endpoint::Channels, &query).await?;
        let list: ChannelList = serde_json::from_str(&body)?;
        let found = list
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::ChannelNotFound(channel.to_string()))?;

        let profile = ChannelProfile::try_from(found)?;
        info!(
            "Resolved {channel:?} to {} ({} subscribers, {} views)",
            profile.id(),
            profile.subscriber_count(),
            profile.view_count(),
        );
        Ok(profile)
    }

    /// Streams the channel IDs of everyone subscribed to `channel_id`.
    ///
    /// IDs come back in API order and are not deduplicated.
    pub fn subscriber_ids<'a>(
        &'a self,
        channel_id: &'a str,
    ) -> impl Stream<Item = Result<String>> + Send + 'a {
        let query = Query::new()
            .param("part", "subscriberSnippet")
            .param("channelId", channel_id)
            .param("maxResults", self.page_size);
        paginate(&self.service, Endpoint::Subscriptions, query, |item: Subscription| {
            Ok(item.subscriber_snippet.channel_id)
        })
    }

    /// Streams the IDs of videos uploaded by `channel_id`.
    pub fn video_ids<'a>(
        &'a self,
        channel_id: &'a str,
    ) -> impl Stream<Item = Result<String>> + Send + 'a {
        let query = Query::new()
            .param("part", "snippet")
            .param("channelId", channel_id)
            .param("maxResults", self.page_size)
            .param("type", "video");
        paginate(&self.service, Endpoint::Search, query, |item: SearchResult| {
            Ok(item.id.video_id)
        })
    }

    /// All subscriber IDs of `channel_id`, in API order.
    pub async fn subscribers(&self, channel_id: &str) -> Result<Vec<String>> {
        let ids = self
            .subscriber_ids(channel_id)
            .collect::<Result<Vec<_>>>()
            .await?;
        debug!("{channel_id} has {} listed subscribers", ids.len());
        Ok(ids)
    }

    /// View counts of the given videos, in the order the API lists them.
    ///
    /// The IDs are sent as one comma-joined batch and the response is not
    /// paginated. No request is made for an empty list.
    pub async fn view_counts(&self, video_ids: &[String]) -> Result<Vec<u64>> {
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = Query::new()
            .param("part", "statistics")
            .param("id", video_ids.join(","));
        let body = self.service.get(Endpoint::Videos, &query).await?;
        let page: Page<Video> = serde_json::from_str(&body)?;

        page.items
            .into_iter()
            .map(|video| {
                let views = video.statistics.view_count.ok_or_else(|| {
                    let id = video.id.as_deref().unwrap_or("<unknown>");
                    Error::MalformedResponse(format!("video {id} has no viewCount"))
                })?;
                parse_count("viewCount", &views)
            })
            .collect()
    }

    /// View counts of every video uploaded by `channel_id`.
    pub async fn video_views(&self, channel_id: &str) -> Result<Vec<u64>> {
        let ids = self
            .video_ids(channel_id)
            .collect::<Result<Vec<_>>>()
            .await?;
        debug!("{channel_id} has {} listed videos", ids.len());
        self.view_counts(&ids).await
    }
}
