use std::time::Duration;

pub const ZERION_META_URL: &str = "https://zpi.zerion.io/wallet/get-meta/v1";
pub const ZERION_CLIENT_TYPE: &str = "web";
pub const ZERION_CLIENT_VERSION: &str = "1.143.1";

// FILES
pub const WALLETS_FILE_PATH: &str = "data/wallets.txt";
pub const PROXIES_FILE_PATH: &str = "data/proxy.txt";
pub const RESULT_FILE_PATH: &str = "data/result.txt";

pub const XP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Courtesy delay between wallets, in milliseconds
pub const MIN_WALLET_DELAY_MS: u64 = 500;
pub const MAX_WALLET_DELAY_MS: u64 = 1000;
