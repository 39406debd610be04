//! Cursor pagination over listing endpoints.
//!
//! Listings are exposed as lazy streams. The first page is requested when the
//! stream is first polled; each following page is requested with
//! `after = <id of the last item on the previous page>` and the previous
//! page's `per_page`, once the consumer asks for it. Exactly one request is in
//! flight at a time and nothing is prefetched.

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde::Serialize;

use paddle_core::Page;

use crate::client::PaddleClient;
use crate::error::PaddleError;
use crate::resource::Resource;

/// Query parameters of a single listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Requested page size. The server default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Return items after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl ListParams {
    /// Parameters for the first page.
    #[must_use]
    pub fn first(per_page: Option<u32>) -> Self {
        Self {
            per_page,
            after: None,
        }
    }

    /// Parameters for the page following `after`.
    #[must_use]
    pub fn after(per_page: u32, after: impl Into<String>) -> Self {
        Self {
            per_page: Some(per_page),
            after: Some(after.into()),
        }
    }
}

/// Where a page stream stands between polls.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageCursor {
    First(Option<u32>),
    After { per_page: u32, after: String },
    Done,
}

impl PageCursor {
    fn params(self) -> Option<ListParams> {
        match self {
            Self::First(per_page) => Some(ListParams::first(per_page)),
            Self::After { per_page, after } => Some(ListParams::after(per_page, after)),
            Self::Done => None,
        }
    }

    /// Cursor for the request following `page`.
    fn following<R: Resource>(page: &Page<R>) -> Result<Self, PaddleError> {
        let Some(pagination) = page.meta.pagination.as_ref() else {
            return Ok(Self::Done);
        };
        Ok(match page.next_cursor()? {
            Some(after) => Self::After {
                per_page: pagination.per_page,
                after: after.to_string(),
            },
            None => Self::Done,
        })
    }
}

/// Stream every page of `R`'s collection.
///
/// Ends after the first error.
pub(crate) fn pages<R: Resource>(
    client: &PaddleClient,
    per_page: Option<u32>,
) -> BoxStream<'_, Result<Page<R>, PaddleError>> {
    stream::unfold(PageCursor::First(per_page), move |cursor| async move {
        let params = cursor.params()?;
        tracing::debug!(
            resource = R::NAME,
            per_page = ?params.per_page,
            after = ?params.after,
            "Fetching page"
        );

        let page = match client.get::<Page<R>, _>(R::PATH, Some(&params)).await {
            Ok(page) => page,
            Err(e) => return Some((Err(e), PageCursor::Done)),
        };
        tracing::debug!(
            resource = R::NAME,
            items = page.data.len(),
            has_more = page.has_more(),
            request_id = %page.request_id(),
            "Received page"
        );

        match PageCursor::following(&page) {
            Ok(next) => Some((Ok(page), next)),
            Err(e) => {
                tracing::error!(resource = R::NAME, error = %e, "Malformed pagination state");
                Some((Err(e), PageCursor::Done))
            }
        }
    })
    .boxed()
}

/// Flatten a stream of pages into a stream of items, in order.
///
/// Pulls the next page only after every item of the current one has been
/// consumed. Errors are passed through.
pub fn items<'a, T, S>(pages: S) -> BoxStream<'a, Result<T, PaddleError>>
where
    T: Send + 'a,
    S: futures::Stream<Item = Result<Page<T>, PaddleError>> + Send + 'a,
{
    pages
        .map_ok(|page| stream::iter(page.data.into_iter().map(Ok::<T, PaddleError>)))
        .try_flatten()
        .boxed()
}
