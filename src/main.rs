use anyhow::Result;
use clap::Parser;
use quotefeed::config::Config;
use quotefeed::demo::{self, Clients};
use quotefeed::http::HttpClient;
use quotefeed::runtime::RealRuntime;

/// quotefeed - unified market data client
///
/// Runs a demonstration sequence against Alpha Vantage, CoinAPI, the CoinAPI
/// NaaS JSON-RPC node, and Birdeye, printing each result to stdout.
///
/// Credentials are read from the ALPHA_VANTAGE_KEY, COINAPI_KEY,
/// COINAPI_NAAS_KEY, and BIRDEYE_KEY environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {}

/// Build the HTTP client shared by every vendor client.
fn build_http_client() -> Result<HttpClient> {
    let client = reqwest::Client::builder()
        .user_agent("quotefeed-cli")
        .build()?;
    Ok(HttpClient::new(client))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Cli::parse();
    let runtime = RealRuntime;

    let config = match Config::from_runtime(&runtime) {
        Ok(config) => config,
        Err(error) => {
            // Missing credentials report on stdout and exit 0.
            println!("Error: {}", error);
            return Ok(());
        }
    };

    let http = build_http_client()?;
    let clients = Clients::new(http, &config);
    demo::run(&clients).await;

    Ok(())
}
