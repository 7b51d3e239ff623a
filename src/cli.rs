use std::path::PathBuf;

use clap::Parser;

pub mod private_key;

pub use private_key::PrivateKey;
use reqwest::Url;

#[derive(Debug, Clone, Parser)]
#[clap(rename_all = "kebab-case")]
pub struct Args {
    /// Private key to deploy with
    #[clap(short, long, env)]
    pub private_key: PrivateKey,

    /// The RPC Url to use for the deployment
    #[clap(short, long, env)]
    pub rpc_url: Url,

    /// The etherscan API key to use
    ///
    /// Contracts are only verified when this is set
    #[clap(short, long, env)]
    pub etherscan_api_key: Option<String>,

    /// Forge project containing the TestToken and DeepfakeDetection contracts
    #[clap(short, long, env, default_value = "./contracts")]
    pub contracts_dir: PathBuf,
}
