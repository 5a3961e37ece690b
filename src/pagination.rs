//! Paginated list responses
//!
//! List endpoints answer one page at a time. Each page carries a
//! [`Pagination`] block whose `next` link points at the following page;
//! walking a list is just following links until `next` is absent.

use crate::client::Client;
use crate::error::Result;
use crate::links::Link;
use futures::stream::Stream;
use futures::TryStreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Position of a page within its list
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub total_results: u64,
    pub total_pages: u64,
    #[serde(default)]
    pub first: Option<Link>,
    #[serde(default)]
    pub last: Option<Link>,
    #[serde(default)]
    pub next: Option<Link>,
    #[serde(default)]
    pub previous: Option<Link>,
}

/// One page of a paginated list
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub resources: Vec<T>,
}

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Stream the pages of a list endpoint, following `next` links
pub fn pages<'a, T>(
    client: &'a Client,
    path: &'a str,
    query: &'a [(&'a str, String)],
) -> impl Stream<Item = Result<Page<T>>> + 'a
where
    T: DeserializeOwned + 'a,
{
    futures::stream::try_unfold(Cursor::Start, move |cursor| async move {
        let page: Page<T> = match cursor {
            Cursor::Start => client.get(path, query).await?,
            Cursor::Next(href) => client.get_href(&href).await?,
            Cursor::Done => return Ok(None),
        };

        let cursor = match page.pagination.next.as_ref() {
            Some(link) => Cursor::Next(link.href.clone()),
            None => Cursor::Done,
        };

        Ok(Some((page, cursor)))
    })
}

/// Fetch every resource of a list endpoint (auto-paginate)
pub async fn fetch_all<T>(client: &Client, path: &str, query: &[(&str, String)]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let stream = pages(client, path, query);
    futures::pin_mut!(stream);

    let mut all = Vec::new();
    while let Some(page) = stream.try_next().await? {
        all.extend(page.resources);
    }

    Ok(all)
}
