// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Measures how much two channels overlap.
//!
//! [`compute_overlap`] gathers everything it needs from the API and then
//! hands it to [`OverlapReport::calculate`], which does the arithmetic
//! without touching the network.

use crate::tally::{ViewCount, ViewTally};
use crate::youtube::client::{ChannelProfile, YouTubeClient};
use crate::youtube::error::Result;
use crate::youtube::service::Service;
use log::{debug, info};
use std::collections::HashSet;
use tokio::try_join;

/// How many entries the "most viewed" ranking keeps.
pub const TOP_VIDEOS: usize = 5;

/// Everything fetched from the API for one channel.
#[derive(Clone, Debug)]
pub struct ChannelData {
    pub profile: ChannelProfile,

    /// Subscriber channel IDs, in API order, possibly with duplicates.
    pub subscribers: Vec<String>,

    /// View counts of the channel's videos, in API order.
    pub video_views: Vec<u64>,
}

/// The result of comparing two channels.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlapReport {
    first: ChannelProfile,
    second: ChannelProfile,
    common_subscribers: usize,
    common_subscriber_percent: f64,
    viewed_videos: Vec<ViewCount>,
    view_overlap_percent: f64,
}

impl OverlapReport {
    /// Computes overlap metrics from data already fetched for two channels.
    ///
    /// Percentages are relative to the first channel.
    ///
    /// The "most viewed" ranking pairs the concatenated subscriber IDs of
    /// both channels with their concatenated video view counts by position,
    /// so its entries are keyed by subscriber ID rather than video ID. The
    /// pairing stops at the shorter of the two lists.
    pub fn calculate(first: ChannelData, second: ChannelData) -> Self {
        let common = common_subscribers(&first.subscribers, &second.subscribers);
        let common_subscriber_percent = percentage(common as u64, first.profile.subscriber_count());

        let ids = first.subscribers.iter().chain(&second.subscribers);
        let views = first.video_views.iter().chain(&second.video_views);
        let tally = ids
            .zip(views)
            .map(|(id, &views)| (id.as_str(), views))
            .collect::<ViewTally>();
        debug!("Tallied views for {} identifiers", tally.len());

        let viewed_videos = tally.most_viewed(TOP_VIDEOS);
        let top_views = viewed_videos
            .iter()
            .fold(0u64, |sum, (_, views)| sum.saturating_add(*views));
        let view_overlap_percent = percentage(top_views, first.profile.view_count());

        Self {
            first: first.profile,
            second: second.profile,
            common_subscribers: common,
            common_subscriber_percent,
            viewed_videos,
            view_overlap_percent,
        }
    }

    /// Profile of the first channel.
    pub fn first(&self) -> &ChannelProfile {
        &self.first
    }

    /// Profile of the second channel.
    pub fn second(&self) -> &ChannelProfile {
        &self.second
    }

    /// Number of distinct subscribers the two channels share.
    pub fn common_subscribers(&self) -> usize {
        self.common_subscribers
    }

    /// Shared subscribers as a percentage of the first channel's
    /// subscriber count, rounded to two decimal places.
    pub fn common_subscriber_percent(&self) -> f64 {
        self.common_subscriber_percent
    }

    /// Up to [`TOP_VIDEOS`] entries, most viewed first.
    pub fn viewed_videos(&self) -> &[ViewCount] {
        &self.viewed_videos
    }

    /// Views of the ranked entries as a percentage of the first channel's
    /// view count, rounded to two decimal places.
    pub fn view_overlap_percent(&self) -> f64 {
        self.view_overlap_percent
    }
}

/// Number of distinct identifiers present in both lists.
pub fn common_subscribers(first: &[String], second: &[String]) -> usize {
    let first = first.iter().map(String::as_str).collect::<HashSet<_>>();
    let second = second.iter().map(String::as_str).collect::<HashSet<_>>();
    first.intersection(&second).count()
}

/// `part` as a percentage of `whole`, rounded to two decimal places.
///
/// A `whole` of zero gives zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round2(part as f64 / whole as f64 * 100.0)
    }
}

// Formatting rounds the exact binary value half to even, so 1/32 of 100
// (3.125) becomes 3.12 rather than 3.13.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Fetches both channels and compares them.
///
/// `first` and `second` are channel names, handles, or IDs. Profiles are
/// resolved one after the other, so an unknown first channel stops
/// everything before any other request is made. Subscriber and video
/// listings for the two channels are then fetched side by side. The first
/// error aborts the comparison.
pub async fn compute_overlap<S: Service + Sync>(
    client: &YouTubeClient<S>,
    first: &str,
    second: &str,
) -> Result<OverlapReport> {
    let first_profile = client.load_profile(first).await?;
    let second_profile = client.load_profile(second).await?;

    let (first_subscribers, second_subscribers) = try_join!(
        client.subscribers(first_profile.id()),
        client.subscribers(second_profile.id()),
    )?;

    let (first_views, second_views) = try_join!(
        client.video_views(first_profile.id()),
        client.video_views(second_profile.id()),
    )?;

    info!(
        "Comparing {} subscribers and {} videos against {} subscribers and {} videos",
        first_subscribers.len(),
        first_views.len(),
        second_subscribers.len(),
        second_views.len(),
    );

    let first = ChannelData {
        profile: first_profile,
        subscribers: first_subscribers,
        video_views: first_views,
    };
    let second = ChannelData {
        profile: second_profile,
        subscribers: second_subscribers,
        video_views: second_views,
    };
    Ok(OverlapReport::calculate(first, second))
}
