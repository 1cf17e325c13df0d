use log::debug;
use reqwest::{header, Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

mod accept;
mod actions;
mod error;
mod guard;
mod issues;
mod orgs;
mod pagination;
mod rate_limit;
mod reactions;
mod repos;
mod route;

use pagination::Page;

pub use actions::{ActionsClient, ListRunJobsOptions, RunJobsFilter};
pub use error::{Error, GithubClientError, GithubClientErrorType, Result};
pub use issues::{IssueRequest, IssuesClient, ListIssueCommentsOptions, ListIssuesOptions};
pub use orgs::{ListMembersOptions, MemberFilter, MemberRole, OrgsClient};
pub use pagination::{ApiOptions, Pagination, SortDirection, SortPages, StateFilter};
pub use rate_limit::{Rate, RateLimitClient, RateLimits};
pub use reactions::{ListReactionsOptions, ReactionsClient};
pub use repos::{CollaboratorAffiliation, ListCollaboratorsOptions, RepositoryClient};
pub use route::RepoTarget;

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";

#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    github_api_token: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            github_api_token: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn github_api_token<S: Into<String>>(mut self, github_api_token: S) -> Self {
        self.github_api_token = Some(github_api_token.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let mut client_builder = ReqwestClient::builder().user_agent(&user_agent);

        if let Some(token) = &self.github_api_token {
            let mut headers = header::HeaderMap::new();
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| e.to_string())?,
            );
            client_builder = client_builder.default_headers(headers);
        }

        let client = client_builder.build()?;

        Ok(Client {
            base_url,
            user_agent,
            github_api_token: self.github_api_token,
            client,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A response envelope: the deserialized value plus the pagination and
/// rate-limit bookkeeping Github reports in response headers.
#[derive(Debug)]
pub struct Response<T> {
    pagination: Pagination,
    rate: Rate,
    value: T,
}

impl<T> Response<T> {
    pub(super) fn new(pagination: Pagination, rate: Rate, value: T) -> Self {
        Self {
            pagination,
            rate,
            value,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (Pagination, Rate, T) {
        (self.pagination, self.rate, self.value)
    }
}

#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Must always be
    /// terminated with a trailing slash.
    base_url: String,

    /// User agent string sent when communicating with GitHub APIs
    #[allow(unused)]
    user_agent: String,

    /// API token to use when issuing requests to GitHub
    #[allow(unused)]
    github_api_token: Option<String>,

    /// Client used to make http requests
    client: ReqwestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    fn get(&self, url: &str, accept: &[&str]) -> RequestBuilder {
        self.request(Method::GET, url, accept)
    }

    fn post(&self, url: &str, accept: &[&str]) -> RequestBuilder {
        self.request(Method::POST, url, accept)
    }

    fn put(&self, url: &str, accept: &[&str]) -> RequestBuilder {
        self.request(Method::PUT, url, accept)
    }

    fn patch(&self, url: &str, accept: &[&str]) -> RequestBuilder {
        self.request(Method::PATCH, url, accept)
    }

    fn delete(&self, url: &str, accept: &[&str]) -> RequestBuilder {
        self.request(Method::DELETE, url, accept)
    }

    fn request(&self, method: Method, url: &str, accept: &[&str]) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, url);
        let builder = self.client.request(method, &url);

        if let Some(value) = accept::header_value(accept) {
            builder.header(header::ACCEPT, value)
        } else {
            builder
        }
    }

    /// Check a response for failure statuses, turning Github's error payload
    /// into a typed error. Rate limit exhaustion is reported distinctly.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        debug!("Github Response: {:#?}", response);

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let rate = Rate::from_headers(response.headers());
        if status == StatusCode::FORBIDDEN && rate.remaining == 0 {
            return Err(Error::RateLimit);
        }

        let error = response.json::<GithubClientError>().await.unwrap_or_default();
        Err(Error::GithubClientError(status, error))
    }

    /// Process a response received from Github, deserializing the json body.
    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<Response<T>> {
        let response = self.check(response).await?;
        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());

        let value = response.json().await?;
        Ok(Response::new(pagination, rate, value))
    }

    /// Process a response whose body is irrelevant (204s and friends).
    async fn empty(&self, response: reqwest::Response) -> Result<Response<()>> {
        let response = self.check(response).await?;
        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());

        Ok(Response::new(pagination, rate, ()))
    }

    /// Interpret an existence probe: `204 No Content` means yes, `404 Not
    /// Found` means no, and anything else is a hard error.
    async fn boolean(&self, response: reqwest::Response) -> Result<Response<bool>> {
        debug!("Github Response: {:#?}", response);

        let pagination = Pagination::from_headers(response.headers());
        let rate = Rate::from_headers(response.headers());

        match response.status() {
            StatusCode::NO_CONTENT => Ok(Response::new(pagination, rate, true)),
            StatusCode::NOT_FOUND => Ok(Response::new(pagination, rate, false)),
            status => {
                let error = response.json::<GithubClientError>().await.unwrap_or_default();
                Err(Error::GithubClientError(status, error))
            }
        }
    }

    /// Fetch a list endpoint page by page, concatenating the items.
    ///
    /// The filter query and the pagination query are serialized separately;
    /// filters address the server-side query, pagination addresses the
    /// transport. Paging follows the `Link` header's `rel="next"` page and
    /// stops early when `options.page_count` pages have been fetched.
    async fn get_all<P, O>(
        &self,
        url: &str,
        accept: &[&str],
        filter: Option<&O>,
        options: ApiOptions,
    ) -> Result<Vec<P::Item>>
    where
        P: Page,
        O: Serialize,
    {
        #[derive(Serialize)]
        struct PageQuery {
            #[serde(skip_serializing_if = "Option::is_none")]
            per_page: Option<usize>,
            #[serde(skip_serializing_if = "Option::is_none")]
            page: Option<usize>,
        }

        let mut items = Vec::new();
        let mut page = options.start_page;
        let mut pages_fetched = 0;

        loop {
            let mut request = self.get(url, accept);
            if let Some(filter) = filter {
                request = request.query(filter);
            }
            let query = PageQuery {
                per_page: options.page_size,
                page,
            };
            let response = request.query(&query).send().await?;
            let response = self.check(response).await?;

            let pagination = Pagination::from_headers(response.headers());
            items.extend(response.json::<P>().await?.into_items());
            pages_fetched += 1;

            if let Some(count) = options.page_count {
                if pages_fetched >= count {
                    break;
                }
            }
            match pagination.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }

        Ok(items)
    }

    pub fn actions(&self) -> ActionsClient<'_> {
        ActionsClient::new(self)
    }

    pub fn issues(&self) -> IssuesClient<'_> {
        IssuesClient::new(self)
    }

    pub fn orgs(&self) -> OrgsClient<'_> {
        OrgsClient::new(self)
    }

    pub fn rate_limit(&self) -> RateLimitClient<'_> {
        RateLimitClient::new(self)
    }

    pub fn reactions(&self) -> ReactionsClient<'_> {
        ReactionsClient::new(self)
    }

    pub fn repos(&self) -> RepositoryClient<'_> {
        RepositoryClient::new(self)
    }
}
