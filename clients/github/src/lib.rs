use async_trait::async_trait;
use credits::api::Contributor;
use credits::api::Error;
use credits::api::Repo;
use credits::api::RepoId;
use credits::api::Result;
use log::warn;
use reqwest::Client;

mod builder;
mod pagination;
mod payload;

pub use builder::GithubClientBuilder;

/// Page size for the organization listing. Contributor listings are fetched
/// through the URL the API hands back, verbatim.
const REPOS_PAGE_SIZE: u32 = 100;

pub struct GithubClient {
    client: Client,
    github_url: String,
}

pub struct GithubRepo {
    owner: String,
    name: String,
    contributors_url: String,
}

impl Repo for GithubRepo {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn contributors_url(&self) -> &str {
        &self.contributors_url
    }
}

#[async_trait]
impl credits::api::Client for GithubClient {
    type REPO = GithubRepo;

    async fn org_repos(&self, org: &str) -> Vec<GithubRepo> {
        let url = format!(
            "{}/orgs/{}/repos?type=public&per_page={}",
            self.github_url, org, REPOS_PAGE_SIZE
        );
        pagination::fetch_all::<payload::Repo>(&self.client, url)
            .await
            .into_iter()
            .filter_map(listable)
            .collect()
    }

    async fn repo(&self, id: &RepoId) -> Result<GithubRepo> {
        let url = format!("{}/repos/{}/{}", self.github_url, id.owner, id.name);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let repo = response.json::<payload::Repo>().await?;
        listable(repo).ok_or(Error::Error("repository has no contributors listing"))
    }

    async fn contributors(&self, repo: &GithubRepo) -> Vec<Contributor> {
        pagination::fetch_all::<payload::Contributor>(&self.client, repo.contributors_url.clone())
            .await
            .into_iter()
            .map(Contributor::from)
            .collect()
    }
}

fn listable(repo: payload::Repo) -> Option<GithubRepo> {
    if repo.contributors_url.is_empty() {
        warn!("Repository {}/{} has no contributors listing; skipping.", repo.owner.login, repo.name);
        return None;
    }
    Some(GithubRepo::from(repo))
}
