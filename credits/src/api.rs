use async_trait::async_trait;
use derive_more::Constructor;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: {0}")]
    Error(&'static str),
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A repository reference produced by discovery. Ephemeral, never persisted.
pub trait Repo: Send + Sync {
    fn owner(&self) -> &str;

    fn name(&self) -> &str;

    /// API URL listing the accounts that committed to this repository.
    fn contributors_url(&self) -> &str;
}

/// An `{owner, name}` pair as configured in the addon and hidden lists.
///
/// The wire shape keeps the `user`/`repo` keys the configuration has always
/// used.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Constructor)]
pub struct RepoId {
    #[serde(rename = "user")]
    pub owner: String,
    #[serde(rename = "repo")]
    pub name: String,
}

impl RepoId {
    /// Case-insensitive match on both owner and name.
    pub fn matches(&self, owner: &str, name: &str) -> bool {
        self.owner.eq_ignore_ascii_case(owner) && self.name.eq_ignore_ascii_case(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Constructor)]
pub struct Contributor {
    pub login: String,
}

#[async_trait]
pub trait Client: Send + Sync {
    type REPO: Repo;

    /// Lists the organization's public repositories. A failed fetch ends the
    /// listing early with whatever was accumulated.
    async fn org_repos(&self, org: &str) -> Vec<Self::REPO>;

    /// Looks up a single repository by owner and name.
    async fn repo(&self, id: &RepoId) -> Result<Self::REPO>;

    /// Lists accounts that committed to `repo`, in listing order. A failed
    /// fetch ends the listing early with whatever was accumulated.
    async fn contributors(&self, repo: &Self::REPO) -> Vec<Contributor>;
}

#[test]
fn repo_id_matches_ignoring_case() {
    let id = RepoId::new("Octocat".to_string(), "Spoon-Knife".to_string());
    assert!(id.matches("octocat", "spoon-knife"));
    assert!(id.matches("OCTOCAT", "SPOON-KNIFE"));
    assert!(!id.matches("octocat", "hello-world"));
    assert!(!id.matches("someone-else", "spoon-knife"));
}

#[test]
fn repo_id_wire_shape_uses_user_and_repo_keys() {
    let ids: Vec<RepoId> = serde_json::from_str(r#"[{"user":"octocat","repo":"spoon-knife"}]"#).unwrap();
    assert_eq!(ids, vec![RepoId::new("octocat".to_string(), "spoon-knife".to_string())]);
}
