use crate::api::{Client, Repo, RepoId};
use log::{debug, error, info};
use std::collections::HashSet;

/// Suffix the hosting platform gives automated accounts, e.g.
/// `dependabot[bot]`.
const BOT_SUFFIX: &str = "[bot]";

/// Collects every repository whose contributors should be counted: the
/// organization's public repositories plus the configured addons, minus the
/// hidden ones, deduplicated by contributors-listing URL.
///
/// Addon lookups that fail are logged and the repository is left out; the
/// run keeps going.
pub async fn discover_repos<CLIENT>(
    client: &CLIENT,
    org: &str,
    addons: &[RepoId],
    hidden: &[RepoId],
) -> Vec<CLIENT::REPO>
where
    CLIENT: Client,
{
    let mut seen = HashSet::new();
    let mut repos = Vec::new();

    for repo in client.org_repos(org).await {
        if is_hidden(hidden, repo.owner(), repo.name()) {
            debug!("Skipping hidden repository {}/{}", repo.owner(), repo.name());
            continue;
        }
        if seen.insert(repo.contributors_url().to_string()) {
            repos.push(repo);
        }
    }

    for id in addons {
        // Hidden addons cost no lookup.
        if is_hidden(hidden, &id.owner, &id.name) {
            continue;
        }
        match client.repo(id).await {
            Ok(repo) => {
                if seen.insert(repo.contributors_url().to_string()) {
                    repos.push(repo);
                }
            }
            Err(err) => error!("Failed to fetch addon repository {}/{}: {}", id.owner, id.name, err),
        }
    }

    info!("Found {} unique repositories to check for contributors.", repos.len());
    repos
}

fn is_hidden(hidden: &[RepoId], owner: &str, name: &str) -> bool {
    hidden.iter().any(|id| id.matches(owner, name))
}

/// Unions the contributors of every repository into one deduplicated list,
/// dropping bot accounts and anonymous entries, sorted with case folded for
/// comparison while the original casing is preserved.
pub async fn collect_contributors<CLIENT>(client: &CLIENT, repos: &[CLIENT::REPO]) -> Vec<String>
where
    CLIENT: Client,
{
    let mut logins = HashSet::new();
    for repo in repos {
        for contributor in client.contributors(repo).await {
            let login = contributor.login;
            if login.is_empty() {
                continue;
            }
            if login.ends_with(BOT_SUFFIX) {
                debug!("Skipping bot account {}", login);
                continue;
            }
            logins.insert(login);
        }
    }

    let mut logins: Vec<String> = logins.into_iter().collect();
    // Equal-fold ties break on the exact string so the order is deterministic.
    logins.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    logins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Contributor, Error, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;

    #[derive(Clone)]
    struct FakeRepo {
        owner: String,
        name: String,
        contributors_url: String,
    }

    impl Repo for FakeRepo {
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

    fn repo(owner: &str, name: &str) -> FakeRepo {
        FakeRepo {
            owner: owner.to_string(),
            name: name.to_string(),
            contributors_url: format!("https://api.test/repos/{}/{}/contributors", owner, name),
        }
    }

    fn id(owner: &str, name: &str) -> RepoId {
        RepoId::new(owner.to_string(), name.to_string())
    }

    #[derive(Default)]
    struct FakeClient {
        org_repos: Vec<FakeRepo>,
        lookups: HashMap<String, FakeRepo>,
        contributors: HashMap<String, Vec<&'static str>>,
    }

    impl FakeClient {
        fn with_org_repos(org_repos: Vec<FakeRepo>) -> Self {
            FakeClient {
                org_repos,
                ..FakeClient::default()
            }
        }

        fn with_lookup(mut self, repo: FakeRepo) -> Self {
            self.lookups.insert(format!("{}/{}", repo.owner, repo.name), repo);
            self
        }

        fn with_contributors(mut self, repo: &FakeRepo, logins: Vec<&'static str>) -> Self {
            self.contributors.insert(repo.contributors_url.clone(), logins);
            self
        }
    }

    #[async_trait]
    impl Client for FakeClient {
        type REPO = FakeRepo;

        async fn org_repos(&self, _org: &str) -> Vec<FakeRepo> {
            self.org_repos.clone()
        }

        async fn repo(&self, id: &RepoId) -> Result<FakeRepo> {
            self.lookups
                .get(&format!("{}/{}", id.owner, id.name))
                .cloned()
                .ok_or(Error::Error("repository not found"))
        }

        async fn contributors(&self, repo: &FakeRepo) -> Vec<Contributor> {
            self.contributors
                .get(&repo.contributors_url)
                .map(|logins| logins.iter().map(|login| Contributor::new(login.to_string())).collect())
                .unwrap_or_default()
        }
    }

    fn names(repos: &[FakeRepo]) -> Vec<&str> {
        repos.iter().map(|repo| repo.name.as_str()).collect()
    }

    #[tokio::test]
    async fn hidden_repos_are_filtered_case_insensitively() {
        let client = FakeClient::with_org_repos(vec![repo("acme", "widgets"), repo("acme", "Secret-Tool")]);
        let hidden = vec![id("ACME", "secret-tool")];

        let repos = discover_repos(&client, "acme", &[], &hidden).await;

        assert_eq!(names(&repos), vec!["widgets"]);
    }

    #[tokio::test]
    async fn repos_are_deduplicated_by_contributors_url() {
        let duplicate = repo("acme", "widgets");
        let client = FakeClient::with_org_repos(vec![repo("acme", "widgets"), duplicate]);

        let repos = discover_repos(&client, "acme", &[], &[]).await;

        assert_eq!(names(&repos), vec!["widgets"]);
    }

    #[tokio::test]
    async fn addon_repos_are_looked_up_and_included() {
        let addon = repo("friend", "gadget");
        let client = FakeClient::with_org_repos(vec![repo("acme", "widgets")]).with_lookup(addon);

        let repos = discover_repos(&client, "acme", &[id("friend", "gadget")], &[]).await;

        assert_eq!(names(&repos), vec!["widgets", "gadget"]);
    }

    #[tokio::test]
    async fn failed_addon_lookup_is_skipped() {
        let client = FakeClient::with_org_repos(vec![repo("acme", "widgets")]);

        let repos = discover_repos(&client, "acme", &[id("ghost", "missing")], &[]).await;

        assert_eq!(names(&repos), vec!["widgets"]);
    }

    #[tokio::test]
    async fn addon_matching_an_org_repo_is_not_duplicated() {
        let client =
            FakeClient::with_org_repos(vec![repo("acme", "widgets")]).with_lookup(repo("acme", "widgets"));

        let repos = discover_repos(&client, "acme", &[id("acme", "widgets")], &[]).await;

        assert_eq!(names(&repos), vec!["widgets"]);
    }

    #[tokio::test]
    async fn hidden_addon_is_excluded() {
        let client = FakeClient::with_org_repos(Vec::new()).with_lookup(repo("friend", "gadget"));

        let repos = discover_repos(&client, "acme", &[id("friend", "gadget")], &[id("Friend", "Gadget")]).await;

        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn bots_and_anonymous_entries_are_excluded() {
        let widgets = repo("acme", "widgets");
        let client = FakeClient::with_org_repos(vec![widgets.clone()]).with_contributors(
            &widgets,
            vec!["alice", "dependabot[bot]", "github-actions[bot]", ""],
        );

        let logins = collect_contributors(&client, &[widgets]).await;

        assert_eq!(logins, vec!["alice"]);
    }

    #[tokio::test]
    async fn logins_are_deduplicated_across_repos() {
        let widgets = repo("acme", "widgets");
        let docs = repo("acme", "docs");
        let client = FakeClient::with_org_repos(vec![widgets.clone(), docs.clone()])
            .with_contributors(&widgets, vec!["alice", "Bob"])
            .with_contributors(&docs, vec!["Bob", "carol"]);

        let logins = collect_contributors(&client, &[widgets, docs]).await;

        assert_eq!(logins, vec!["alice", "Bob", "carol"]);
    }

    #[tokio::test]
    async fn logins_sort_case_insensitively_preserving_casing() {
        let widgets = repo("acme", "widgets");
        let client =
            FakeClient::with_org_repos(vec![widgets.clone()]).with_contributors(&widgets, vec!["Bob", "alice"]);

        let logins = collect_contributors(&client, &[widgets]).await;

        assert_eq!(logins, vec!["alice", "Bob"]);
    }
}
