use std::path::PathBuf;

use reqwest::Url;

use crate::cli::{Args, PrivateKey};

/// Everything the deployment needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub private_key: PrivateKey,
    pub rpc_url: Url,
    pub contracts_dir: PathBuf,
    pub verification: Option<VerificationConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationConfig {
    pub etherscan_api_key: String,
}

impl From<Args> for DeploymentConfig {
    fn from(args: Args) -> Self {
        let verification = args
            .etherscan_api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(|etherscan_api_key| VerificationConfig { etherscan_api_key });

        Self {
            private_key: args.private_key,
            rpc_url: args.rpc_url,
            contracts_dir: args.contracts_dir,
            verification,
        }
    }
}
