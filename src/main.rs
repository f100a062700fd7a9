use clap::Parser;
use credits::api::Error;
use credits_app::Args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    credits_app::refresh_contributors(args).await
}
