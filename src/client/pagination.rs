use crate::client::HEADER_LINK;
use serde::{de::DeserializeOwned, Serialize, Serializer};
use url::Url;

/// Pagination directive forwarded opaquely to the transport: page size,
/// starting page, and a bound on how many pages to fetch. `NONE` is the
/// explicit "connection defaults, fetch everything" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApiOptions {
    pub page_size: Option<usize>,
    pub page_count: Option<usize>,
    pub start_page: Option<usize>,
}

impl ApiOptions {
    pub const NONE: ApiOptions = ApiOptions {
        page_size: None,
        page_count: None,
        start_page: None,
    };
}

/// One page of a list response. Most endpoints return a bare JSON array;
/// the Actions endpoints wrap their items in a `{total_count, items}`
/// envelope and implement this by unwrapping it.
pub(crate) trait Page: DeserializeOwned {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

impl<T: DeserializeOwned> Page for Vec<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self
    }
}

/// Represents `Pagination` information from a Github API response
#[derive(Debug, Default)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut pagination = Self::default();

        let links = if let Some(links) = headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            links
        } else {
            return pagination;
        };

        for link in links.split(',') {
            let segments: Vec<&str> = link.split(';').map(str::trim).collect();

            // Skip if we don't at least have href and rel
            if segments.len() < 2 {
                continue;
            }

            // Check if href segment is well formed and a valid url format
            let url = if segments[0].starts_with('<') && segments[0].ends_with('>') {
                if let Ok(url) = Url::parse(&segments[0][1..segments[0].len() - 1]) {
                    url
                } else {
                    continue;
                }
            } else {
                continue;
            };

            // and then pull out the page number
            let page = if let Some(page) =
                url.query_pairs()
                    .find_map(|(k, v)| if k == "page" { Some(v) } else { None })
            {
                page
            } else {
                continue;
            };

            for rel in &segments[1..] {
                match rel.trim() {
                    "rel=\"next\"" => {
                        pagination.next_page = page.parse().ok();
                    }
                    "rel=\"prev\"" => {
                        pagination.prev_page = page.parse().ok();
                    }
                    "rel=\"first\"" => {
                        pagination.first_page = page.parse().ok();
                    }
                    "rel=\"last\"" => {
                        pagination.last_page = page.parse().ok();
                    }
                    _ => {}
                }
            }
        }

        pagination
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPages {
    Created,
    Updated,
    Comments,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Serialize an optional list as one comma joined query value.
pub(crate) fn comma_separated<S>(
    values: &Option<Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match values {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod test {
    use super::{ApiOptions, Pagination, HEADER_LINK};
    use reqwest::header::HeaderMap;

    #[test]
    fn pagination() {
        let mut headers = HeaderMap::new();
        let link = r#"<https://api.github.com/user/repos?page=3&per_page=100>; rel="next", <https://api.github.com/user/repos?page=50&per_page=100>; rel="last""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.next_page, Some(3));
        assert_eq!(p.last_page, Some(50));
    }

    #[test]
    fn missing_link_header() {
        let p = Pagination::from_headers(&HeaderMap::new());
        assert_eq!(p.next_page, None);
        assert_eq!(p.last_page, None);
    }

    #[test]
    fn none_sentinel_sets_nothing() {
        assert_eq!(ApiOptions::NONE, ApiOptions::default());
        assert_eq!(ApiOptions::NONE.page_size, None);
    }
}
