use std::{str::FromStr, sync::Arc};

use alloy::{
    network::Ethereum,
    primitives::{utils::format_units, Address, U256},
    providers::Provider,
    transports::Transport,
};

/// Fetches the native MONAD balance for an address, denominated in whole
/// tokens. The address is validated (checksum included for mixed-case input)
/// before any RPC traffic is sent.
pub async fn get_native_balance<P, T>(provider: Arc<P>, address: &str) -> eyre::Result<f64>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    let checksummed = Address::from_str(address)?;
    let balance_wei = provider.get_balance(checksummed).await?;

    wei_to_monad(balance_wei)
}

/// Converts a wei amount to MONAD (18 decimals).
pub fn wei_to_monad(balance_wei: U256) -> eyre::Result<f64> {
    Ok(format_units(balance_wei, "ether")?.parse::<f64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy::{providers::RootProvider, rpc::client::ClientBuilder, transports::http::Http};
    use reqwest::Client;

    #[test]
    fn one_ether_of_wei_is_one_monad() {
        let wei = U256::from(10).pow(U256::from(18));
        let monad = wei_to_monad(wei).unwrap();

        assert_eq!(monad, 1.0);
        assert_eq!(format!("{monad:.5}"), "1.00000");
    }

    #[test]
    fn zero_wei_is_zero_monad() {
        assert_eq!(wei_to_monad(U256::ZERO).unwrap(), 0.0);
    }

    #[test]
    fn fractional_balances_survive_conversion() {
        let wei = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(wei_to_monad(wei).unwrap(), 1.5);
    }

    #[tokio::test]
    async fn malformed_address_fails_before_any_rpc_call() {
        // Port 1 is never dialed: address parsing rejects the input first.
        let client = ClientBuilder::default()
            .transport(Http::new("http://127.0.0.1:1".parse().unwrap()), false);
        let provider = Arc::new(RootProvider::<Http<Client>>::new(client));

        let result = get_native_balance(provider, "not-an-address").await;

        assert!(result.is_err());
    }
}
