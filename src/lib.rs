use credits::api::RepoId;
use credits::api::Result;
use credits::document;
use credits::render;
use credits::roster;
use github_client::GithubClientBuilder;
use log::error;
use log::info;
use log::warn;

mod args;

pub use args::Args;

/// Fetches the contributor roster of the configured repositories and
/// rewrites the marker region of the index file.
///
/// Network and file problems degrade the run (partial roster, skipped
/// write); only failing to construct the client is fatal.
pub async fn refresh_contributors(args: Args) -> Result<()> {
    let client = GithubClientBuilder::default()
        .with_github_url(&args.api_url)
        .try_with_token(args.api_token)?
        .build()?;

    let addons = decode_repo_list("ADDON_REPOS", &args.addon_repos);
    let hidden = decode_repo_list("HIDDEN_REPOS", &args.hidden_repos);

    let repos = roster::discover_repos(&client, &args.org, &addons, &hidden).await;
    if repos.is_empty() {
        info!("No repositories found to fetch contributors from.");
        return Ok(());
    }

    let logins = roster::collect_contributors(&client, &repos).await;
    info!("Found {} unique contributors: {}", logins.len(), logins.join(", "));

    let fragment = render::contributors_fragment(&logins);
    match document::update_file(&args.index_file, &fragment) {
        Ok(true) => info!("Updated contributor section in {}.", args.index_file.display()),
        Ok(false) => info!("No changes detected in contributor list."),
        Err(err) => error!("Skipping update of {}: {}", args.index_file.display(), err),
    }
    Ok(())
}

/// Malformed JSON is not fatal: the list degrades to empty and the run goes
/// on without it.
fn decode_repo_list(name: &str, raw: &str) -> Vec<RepoId> {
    match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(err) => {
            warn!("Ignoring malformed {}: {}", name, err);
            Vec::new()
        }
    }
}
