//! The fixed demonstration sequence the binary runs.

use crate::config::Config;
use crate::http::HttpClient;
use crate::vendor::{AlphaVantageClient, BirdeyeClient, CoinApiClient, CoinApiNaasClient};

const BTC_OHLCV_SYMBOL: &str = "BITSTAMP_SPOT_BTC_USD";
const DEMO_BLOCK_NUMBER: u64 = 17_000_000;
const SAMPLE_TX_HASH: &str = "0xSampleTransactionHash";
const SAMPLE_ADDRESS: &str = "0xSampleEthereumAddress";
const SOL_TOKEN_ADDRESS: &str = "So11111111111111111111111111111111111111112";

/// The four vendor clients, sharing one HTTP transport.
pub struct Clients {
    pub alpha_vantage: AlphaVantageClient,
    pub coinapi: CoinApiClient,
    pub coinapi_naas: CoinApiNaasClient,
    pub birdeye: BirdeyeClient,
}

impl Clients {
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            alpha_vantage: AlphaVantageClient::new(http.clone(), &config.alpha_vantage_key),
            coinapi: CoinApiClient::new(http.clone(), &config.coinapi_key),
            coinapi_naas: CoinApiNaasClient::new(http.clone(), &config.coinapi_naas_key),
            birdeye: BirdeyeClient::new(http, &config.birdeye_key),
        }
    }
}

/// Runs the demonstration calls strictly in sequence, printing each label
/// and result to stdout. Failed calls print their error record like any
/// other result.
pub async fn run(clients: &Clients) {
    println!("Fetching daily time series for BTC...");
    println!("{}", clients.alpha_vantage.get_daily_time_series("BTC").await);

    println!("Fetching intraday time series for BTC...");
    println!(
        "{}",
        clients
            .alpha_vantage
            .get_intraday_time_series("BTC", AlphaVantageClient::DEFAULT_INTERVAL)
            .await
    );

    println!("Fetching BTC to USD exchange rate...");
    println!("{}", clients.alpha_vantage.get_crypto_price("BTC", "USD").await);

    println!("Fetching asset info for BTC...");
    println!("{}", clients.coinapi.get_asset_info("BTC").await);

    println!("Fetching BTC to USD exchange rate...");
    println!("{}", clients.coinapi.get_exchange_rate("BTC", "USD").await);

    println!("Fetching OHLCV data for BTC...");
    println!(
        "{}",
        clients
            .coinapi
            .get_ohlcv(BTC_OHLCV_SYMBOL, CoinApiClient::DEFAULT_PERIOD, None, None)
            .await
    );

    println!("Fetching block details for block number {}...", DEMO_BLOCK_NUMBER);
    println!("{}", clients.coinapi_naas.get_block_by_number(DEMO_BLOCK_NUMBER).await);

    println!("Fetching transaction details for a sample hash...");
    println!("{}", clients.coinapi_naas.get_transaction_by_hash(SAMPLE_TX_HASH).await);

    println!("Fetching account balance for a sample address...");
    println!("{}", clients.coinapi_naas.get_account_balance(SAMPLE_ADDRESS).await);

    println!("Fetching trending tokens...");
    println!(
        "{}",
        clients
            .birdeye
            .get_trending_tokens(BirdeyeClient::DEFAULT_CHAIN, "rank", "asc")
            .await
    );

    println!("Fetching token list...");
    println!(
        "{}",
        clients
            .birdeye
            .get_token_list(BirdeyeClient::DEFAULT_CHAIN, "v24hUSD", "desc")
            .await
    );

    println!("Fetching token price for SOL...");
    println!(
        "{}",
        clients
            .birdeye
            .get_token_price(SOL_TOKEN_ADDRESS, BirdeyeClient::DEFAULT_CHAIN)
            .await
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use reqwest::Client;

    #[tokio::test]
    async fn test_run_issues_every_call_in_the_sequence() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let body = r#"{"ok": true}"#;

        let alpha = server
            .mock("GET", "/alpha")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .expect(3)
            .create_async()
            .await;
        let assets = server
            .mock("GET", "/coinapi/assets/BTC")
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        let rate = server
            .mock("GET", "/coinapi/exchangerate/BTC/USD")
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        let ohlcv = server
            .mock("GET", "/coinapi/ohlcv/BITSTAMP_SPOT_BTC_USD/history")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        let naas = server
            .mock("POST", "/naas")
            .with_status(200)
            .with_body(body)
            .expect(3)
            .create_async()
            .await;
        let trending = server
            .mock("GET", "/birdeye/token_trending")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/birdeye/tokenlist")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        let price = server
            .mock("GET", "/birdeye/price")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let http = HttpClient::new(Client::new());
        let clients = Clients {
            alpha_vantage: AlphaVantageClient::with_base_url(
                http.clone(),
                "a",
                format!("{url}/alpha"),
            ),
            coinapi: CoinApiClient::with_base_url(http.clone(), "c", format!("{url}/coinapi")),
            coinapi_naas: CoinApiNaasClient::with_base_url(
                http.clone(),
                "n",
                format!("{url}/naas"),
            ),
            birdeye: BirdeyeClient::with_base_url(http, "b", format!("{url}/birdeye")),
        };

        run(&clients).await;

        alpha.assert_async().await;
        assets.assert_async().await;
        rate.assert_async().await;
        ohlcv.assert_async().await;
        naas.assert_async().await;
        trending.assert_async().await;
        list.assert_async().await;
        price.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_keeps_going_after_a_failed_call() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let body = r#"{"ok": true}"#;

        // Alpha Vantage is down; everything downstream still runs.
        let alpha = server
            .mock("GET", "/alpha")
            .match_query(Matcher::Any)
            .with_status(500)
            .expect(3)
            .create_async()
            .await;
        let birdeye = server
            .mock("GET", Matcher::Regex("^/birdeye/".into()))
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .expect(3)
            .create_async()
            .await;
        let coinapi = server
            .mock("GET", Matcher::Regex("^/coinapi/".into()))
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .expect(3)
            .create_async()
            .await;
        let naas = server
            .mock("POST", "/naas")
            .with_status(200)
            .with_body(body)
            .expect(3)
            .create_async()
            .await;

        let http = HttpClient::new(Client::new());
        let clients = Clients {
            alpha_vantage: AlphaVantageClient::with_base_url(
                http.clone(),
                "a",
                format!("{url}/alpha"),
            ),
            coinapi: CoinApiClient::with_base_url(http.clone(), "c", format!("{url}/coinapi")),
            coinapi_naas: CoinApiNaasClient::with_base_url(
                http.clone(),
                "n",
                format!("{url}/naas"),
            ),
            birdeye: BirdeyeClient::with_base_url(http, "b", format!("{url}/birdeye")),
        };

        run(&clients).await;

        alpha.assert_async().await;
        birdeye.assert_async().await;
        coinapi.assert_async().await;
        naas.assert_async().await;
    }
}
