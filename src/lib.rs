// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! ytoverlap is a command-line tool for comparing two YouTube channels. It
//! looks up each channel's subscriber and view totals, lists their
//! subscribers and videos through the YouTube Data API, and reports how
//! many subscribers the channels share, which entries drew the most views,
//! and what share of the first channel's views those entries account for.
//!
//! # Examples
//!
//! Compare two channels by legacy username, handle, or channel ID:
//!
//! ```bash
//! ytoverlap GoogleDevelopers @ChromeDevs
//! ```
//!
//! Leave the channels off to be prompted for them:
//!
//! ```bash
//! ytoverlap
//! Enter name or ID of first YouTube channel: GoogleDevelopers
//! Enter name or ID of second YouTube channel: UC_x5XG1OV2P6uZZ5FSM9Ttw
//! ```
//!
//! Show what the tool is requesting as it runs:
//!
//! ```bash
//! ytoverlap -vv GoogleDevelopers @ChromeDevs
//! ```
//!
//! # YouTube Data API Setup
//!
//! Every request needs a YouTube Data API key:
//!
//! 1. Create a project in the [Google Cloud console].
//! 2. Enable the YouTube Data API v3 for it.
//! 3. Create an [API key] under "Credentials".
//! 4. Store the key in your shell's `$YOUTUBE_API_KEY` environment variable,
//!    or pass it with `--api-key`:
//!
//!    ```bash
//!    $ export YOUTUBE_API_KEY='copied api key'
//!    ```
//!
//! Requests count against the project's daily [quota]. Search requests are
//! the expensive ones, and a comparison makes at least one per channel.
//!
//! # Caveats
//!
//! The ranking of "most commonly viewed videos" pairs subscriber IDs with
//! video view counts by position, so its entries are subscriber IDs. See
//! [`OverlapReport::calculate`](overlap::OverlapReport::calculate).
//!
//! # License
//!
//! ytoverlap is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [API key]: https://developers.google.com/youtube/registering_an_application
//! [Google Cloud console]: https://console.cloud.google.com/
//! [quota]: https://developers.google.com/youtube/v3/getting-started#quota

pub mod auth;
pub mod cli;
pub mod conf;
pub mod http;
pub mod overlap;
pub mod tally;
pub mod view;
pub mod youtube;

#[cfg(test)]
mod test_utils;
