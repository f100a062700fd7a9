use crate::GithubClient;
use credits::api::Result;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;
use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use std::time::Duration;

/// Requests past this deadline are aborted; the paginated fetchers treat
/// that like any other transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct GithubClientBuilder {
    client_builder: ClientBuilder,
    github_url: String,
    headers: HeaderMap,
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::default();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("curl"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        Self {
            client_builder: ClientBuilder::default().timeout(REQUEST_TIMEOUT),
            github_url: "https://api.github.com".to_string(),
            headers,
        }
    }
}

impl GithubClientBuilder {
    pub fn try_with_token(self, token: SecretString) -> Result<GithubClientBuilder> {
        let value = format!("token {}", token.expose_secret());
        Ok(self.try_with_header(header::AUTHORIZATION, value)?)
    }

    pub fn try_with_user_agent<STR: AsRef<str>>(self, user_agent: STR) -> Result<GithubClientBuilder> {
        Ok(self.try_with_header(header::USER_AGENT, user_agent)?)
    }

    pub fn with_github_url<STR: AsRef<str>>(mut self, url: STR) -> GithubClientBuilder {
        self.github_url = url.as_ref().trim_end_matches('/').to_string();
        self
    }

    fn try_with_header(mut self, key: HeaderName, val: impl AsRef<str>) -> anyhow::Result<GithubClientBuilder> {
        let val = HeaderValue::from_str(val.as_ref())?;
        self.headers.insert(key, val);
        Ok(self)
    }

    pub fn build(self) -> Result<GithubClient> {
        let client = self.client_builder.default_headers(self.headers).build()?;
        Ok(GithubClient {
            client,
            github_url: self.github_url,
        })
    }
}
