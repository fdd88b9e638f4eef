//! Lazy traversal of list endpoints.
//!
//! List endpoints return one page per call together with a token (`cursor`,
//! `last_id`) or page counters. [`pages`] keeps calling an endpoint, feeding
//! the token of each page into the next request, and yields the pages as a
//! [`Stream`].

use std::future::Future;

use futures::stream::{self, Stream};

use crate::OzonResult;

/// Response types of list endpoints.
pub trait Paginated {
    /// Request parameters of the endpoint.
    type Params: Clone;

    /// Page size assumed when a request leaves it unset.
    const DEFAULT_LIMIT: i64;

    /// Parameters of the first request of a stream.
    ///
    /// Implementations set the page size to [`Paginated::DEFAULT_LIMIT`]
    /// when the caller left it unset, so a short page can be recognised.
    fn first_params(params: Self::Params) -> Self::Params {
        params
    }

    /// Returns the parameters for the following page, or `None` when this
    /// page is the last one.
    fn next_params(&self, current: &Self::Params) -> Option<Self::Params>;
}

/// Returns true if a cursor-based listing has more pages after a page of
/// `returned` items requested with `sent_cursor`.
///
/// The listing ends on an empty token, a token equal to the one sent, an
/// empty page, or a page shorter than `limit`.
pub(crate) fn has_next_cursor(
    sent_cursor: &str,
    next_cursor: &str,
    returned: usize,
    limit: i64,
) -> bool {
    if next_cursor.is_empty() || next_cursor == sent_cursor || returned == 0 {
        return false;
    }
    returned as i64 >= limit
}

/// Returns true if a page-number listing has more pages after a page of
/// `returned` items.
pub(crate) fn has_next_page(returned: usize, page_size: i64) -> bool {
    returned > 0 && returned as i64 >= page_size
}

type PageState<P, F> = (Option<P>, F);

/// Produces the pages of a list endpoint starting from `params`.
///
/// `fetch` performs one call. The stream yields each page, stops after the
/// last page, and ends after yielding the first error. Starting from params
/// that carry a previously returned token resumes the listing at that point.
pub fn pages<'a, R, F, Fut>(params: R::Params, fetch: F) -> impl Stream<Item = OzonResult<R>> + 'a
where
    R: Paginated + 'a,
    R::Params: 'a,
    F: FnMut(R::Params) -> Fut + 'a,
    Fut: Future<Output = OzonResult<R>> + 'a,
{
    stream::try_unfold((Some(R::first_params(params)), fetch), next_page::<R, F, Fut>)
}

async fn next_page<R, F, Fut>(
    (params, mut fetch): PageState<R::Params, F>,
) -> OzonResult<Option<(R, PageState<R::Params, F>)>>
where
    R: Paginated,
    F: FnMut(R::Params) -> Fut,
    Fut: Future<Output = OzonResult<R>>,
{
    let Some(params) = params else {
        return Ok(None);
    };

    let page = fetch(params.clone()).await?;
    let next = page.next_params(&params);

    Ok(Some((page, (next, fetch))))
}
