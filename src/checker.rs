use std::{sync::Arc, time::Duration};

use alloy::{
    providers::{Provider, RootProvider},
    rpc::client::ClientBuilder,
    transports::http::Http,
};
use rand::{thread_rng, Rng};
use reqwest::Client;

use crate::{
    balance::get_native_balance,
    config::Config,
    constants::{
        MAX_WALLET_DELAY_MS, MIN_WALLET_DELAY_MS, PROXIES_FILE_PATH, RESULT_FILE_PATH,
        WALLETS_FILE_PATH,
    },
    utils::read_file_lines,
    xp::get_xp,
};

fn init_provider(rpc_url: &str) -> eyre::Result<Arc<RootProvider<Http<Client>>>> {
    let client = ClientBuilder::default().transport(Http::new(rpc_url.parse()?), false);

    Ok(Arc::new(RootProvider::new(client)))
}

async fn load_inputs(path: &str) -> Vec<String> {
    match read_file_lines(path).await {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!("Failed to load {path}: {e}");
            vec![]
        }
    }
}

fn pick_proxy(proxies: &[String], index: usize) -> &str {
    &proxies[index % proxies.len()]
}

fn format_xp(xp: f64) -> String {
    if xp.fract() == 0.0 {
        format!("{}", xp as i64)
    } else {
        xp.to_string()
    }
}

fn format_result_line(address: &str, xp: f64, balance: f64) -> String {
    format!("{address} - {} XP \\ {balance:.5} MONAD", format_xp(xp))
}

pub async fn check_all(config: Config) -> eyre::Result<()> {
    let wallets = load_inputs(WALLETS_FILE_PATH).await;
    let proxies = load_inputs(PROXIES_FILE_PATH).await;

    if wallets.is_empty() {
        tracing::error!("No wallets to check");
        eyre::bail!("No wallets to check");
    }

    if proxies.is_empty() {
        tracing::error!("No proxies available");
        eyre::bail!("No proxies available");
    }

    let provider = init_provider(&config.rpc_url)?;

    let chain_id = provider
        .get_chain_id()
        .await
        .inspect_err(|e| tracing::error!("Monad RPC is unreachable: {e}"))?;
    tracing::info!("Connected to Monad RPC (chain id {chain_id})");

    let total = wallets.len();
    let mut results = Vec::with_capacity(total);

    for (i, wallet) in wallets.iter().enumerate() {
        let proxy = pick_proxy(&proxies, i);

        let xp = match get_xp(wallet, proxy).await {
            Ok(xp) => xp,
            Err(e) => {
                tracing::error!("XP request for {wallet} via {proxy} failed: {e}");
                0.0
            }
        };

        let balance = match get_native_balance(provider.clone(), wallet).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::error!("Failed to fetch MONAD balance for {wallet}: {e}");
                0.0
            }
        };

        let line = format_result_line(wallet, xp, balance);
        tracing::info!("Checked {}/{} via {}: {}", i + 1, total, proxy, line);
        results.push(line);

        // Courtesy pause so upstream rate limits stay quiet
        let delay = thread_rng().gen_range(MIN_WALLET_DELAY_MS..=MAX_WALLET_DELAY_MS);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    tokio::fs::write(RESULT_FILE_PATH, results.join("\n")).await?;
    tracing::info!("Results saved to {RESULT_FILE_PATH}");

    Ok(())
}
