use clap::Parser;
use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Organization whose public repositories are scanned
    #[clap(short, long, env = "ORG_NAME", default_value = "open-simples")]
    pub org: String,

    /// JSON list of extra repositories, e.g. [{"user":"octocat","repo":"spoon-knife"}]
    #[clap(long, env = "ADDON_REPOS", default_value = "[]")]
    pub addon_repos: String,

    /// JSON list of repositories to leave out of the roster
    #[clap(long, env = "HIDDEN_REPOS", default_value = "[]")]
    pub hidden_repos: String,

    /// API OAuth access token
    #[clap(short, long, env = "GITHUB_TOKEN")]
    pub api_token: SecretString,

    /// Repository API URL
    #[clap(long, env = "API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// HTML file whose marker region receives the contributor list
    #[clap(short, long, env = "INDEX_FILE", default_value = "index.html")]
    pub index_file: PathBuf,
}
