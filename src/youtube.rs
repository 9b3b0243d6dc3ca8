//! YouTube Data API clients and services for communicating with YouTube
//! over HTTP.

pub mod client;
pub mod error;
pub mod pager;
pub mod service;
pub mod thing;

pub use client::{ChannelProfile, YouTubeClient};
pub use error::{Error, Result};
