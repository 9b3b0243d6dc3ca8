//! Follows continuation tokens through paginated list endpoints.
//!
//! [`paginate`] returns a lazy [`Stream`]: a page is only requested once
//! every item of the previous page has been consumed, so callers that
//! process items as they arrive never hold more than one page in memory.
//! A stream cannot be rewound; restarting means calling [`paginate`]
//! again, which reissues the whole pagination from the first page.

use crate::youtube::error::Result;
use crate::youtube::service::{Endpoint, Query, Service};
use crate::youtube::thing::Page;
use async_stream::try_stream;
use log::{debug, trace, warn};
use serde::de::DeserializeOwned;
use tokio_stream::Stream;

/// Query parameter carrying the continuation token.
pub const PAGE_TOKEN: &str = "pageToken";

/// Streams every item of a paginated list endpoint.
///
/// Each page is decoded as a [`Page<T>`], and `extract` pulls the datum
/// of interest out of each item, in the order the API returned them.
/// While a page carries a `nextPageToken`, the request is reissued with
/// that token as `pageToken`; the stream ends after the first page
/// without one.
///
/// Any error ends the stream after being yielded. A `pageToken` already
/// present in `query` is discarded so pagination always starts at the
/// first page.
pub fn paginate<'a, S, T, U, F>(
    service: &'a S,
    endpoint: Endpoint,
    query: Query,
    mut extract: F,
) -> impl Stream<Item = Result<U>> + Send + 'a
where
    S: Service + Sync,
    T: DeserializeOwned + Send + 'a,
    U: Send + 'a,
    F: FnMut(T) -> Result<U> + Send + 'a,
{
    try_stream! {
        let mut query = query;
        if let Some(token) = query.remove(PAGE_TOKEN) {
            warn!("Ignoring {PAGE_TOKEN}={token} passed to {endpoint}");
        }

        let mut page_number = 1;
        loop {
            trace!("Requesting {endpoint} page {page_number}");
            let body = service.get(endpoint, &query).await?;
            let page: Page<T> = serde_json::from_str(&body)?;
            debug!(
                "{endpoint} page {page_number}: {} items, more: {}",
                page.items.len(),
                page.next_page_token.is_some(),
            );

            for item in page.items {
                yield extract(item)?;
            }

            match page.next_page_token {
                Some(token) => {
                    query.set(PAGE_TOKEN, token);
                    page_number += 1;
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestService, do_logging};
    use crate::youtube::Error;
    use crate::youtube::thing::Subscription;
    use pretty_assertions::assert_eq;
    use tokio_stream::StreamExt;

    const ALPHA: &str = "UCaaaaaaaaaaaaaaaaaaaaaa";

    fn subscribers(service: &TestService, channel_id: &str) -> impl Stream<Item = Result<String>> {
        let query = Query::new()
            .param("part", "subscriberSnippet")
            .param("channelId", channel_id);
        paginate(service, Endpoint::Subscriptions, query, |item: Subscription| {
            Ok(item.subscriber_snippet.channel_id)
        })
    }

    #[tokio::test]
    async fn it_collects_items_from_every_page_in_order() {
        do_logging();
        let service = TestService::new();
        let ids: Vec<String> = subscribers(&service, ALPHA)
            .collect::<Result<Vec<_>>>()
            .await
            .unwrap();
        assert_eq!(ids, vec!["s1", "s2", "s3", "s2"]);
    }

    #[tokio::test]
    async fn it_stops_when_a_page_has_no_token() {
        let service = TestService::new();
        let _ = subscribers(&service, ALPHA)
            .collect::<Result<Vec<_>>>()
            .await
            .unwrap();

        let requests = service.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].1.get(PAGE_TOKEN), None);
        assert_eq!(requests[1].1.get(PAGE_TOKEN), Some("page2"));
    }

    #[tokio::test]
    async fn it_handles_a_single_page() {
        let service = TestService::new();
        let ids: Vec<String> = subscribers(&service, "UCbbbbbbbbbbbbbbbbbbbbbb")
            .collect::<Result<Vec<_>>>()
            .await
            .unwrap();
        assert_eq!(ids, vec!["s2", "s3", "s4"]);
        assert_eq!(service.requests().len(), 1);
    }

    #[tokio::test]
    async fn it_is_lazy() {
        let service = TestService::new();
        let first = {
            let stream = subscribers(&service, ALPHA);
            tokio::pin!(stream);
            stream.next().await
        };
        assert_eq!(first.unwrap().unwrap(), "s1");
        assert_eq!(service.requests().len(), 1);
    }

    #[tokio::test]
    async fn it_ignores_a_page_token_in_the_base_query() {
        let service = TestService::new();
        let query = Query::new()
            .param("channelId", ALPHA)
            .param(PAGE_TOKEN, "page2");
        let ids = paginate(&service, Endpoint::Subscriptions, query, |item: Subscription| {
            Ok(item.subscriber_snippet.channel_id)
        })
        .collect::<Result<Vec<_>>>()
        .await
        .unwrap();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn it_fails_on_pages_without_items() {
        let service = TestService::new();
        let result = subscribers(&service, "UCcccccccccccccccccccccc")
            .collect::<Result<Vec<_>>>()
            .await;
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn it_fails_on_transport_errors() {
        let service = TestService::new();
        let result = subscribers(&service, "UCnowhere")
            .collect::<Result<Vec<_>>>()
            .await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn it_propagates_extraction_errors() {
        let service = TestService::new();
        let query = Query::new().param("channelId", ALPHA);
        let result = paginate(&service, Endpoint::Subscriptions, query, |_: Subscription| {
            Err::<String, _>(Error::MalformedResponse(String::from("nope")))
        })
        .collect::<Result<Vec<_>>>()
        .await;
        assert!(matches!(result, Err(Error::MalformedResponse(m)) if m == "nope"));
        assert_eq!(service.requests().len(), 1);
    }
}
