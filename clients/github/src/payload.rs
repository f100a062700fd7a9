use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub name: String,
    pub owner: RepoOwner,
    /// Absent in some API responses (empty repositories); defaulted so the
    /// client can skip blanks.
    #[serde(default)]
    pub contributors_url: String,
}

#[derive(Deserialize, Debug)]
pub struct RepoOwner {
    pub login: String,
}

#[derive(Deserialize, Debug)]
pub struct Contributor {
    /// Missing on anonymous entries; defaulted so they can be filtered out.
    #[serde(default)]
    pub login: String,
}

impl From<Repo> for crate::GithubRepo {
    fn from(repo: Repo) -> Self {
        crate::GithubRepo {
            owner: repo.owner.login,
            name: repo.name,
            contributors_url: repo.contributors_url,
        }
    }
}

impl From<Contributor> for credits::api::Contributor {
    fn from(contributor: Contributor) -> Self {
        credits::api::Contributor::new(contributor.login)
    }
}
