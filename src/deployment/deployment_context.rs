use std::path::PathBuf;
use std::sync::atomic::AtomicU64;

use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{Signer, Wallet};
use reqwest::Url;
use tracing::instrument;

use super::runtime::{ContractRuntime, SourceVerifier};
use crate::cli::PrivateKey;
use crate::config::{DeploymentConfig, VerificationConfig};
use crate::ethers_utils;
use crate::forge_utils::{ContractSpec, ForgeCreate, ForgeVerify};
use crate::report::contract_deployment::ContractDeployment;
use crate::types::ConstructorArg;

/// Deploys through `forge create` and watches transactions over JSON-RPC
#[derive(Debug)]
pub struct DeploymentContext {
    pub contracts_dir: PathBuf,
    pub chain_id: u64,
    pub nonce: AtomicU64,
    pub private_key: PrivateKey,
    pub rpc_url: Url,
    pub provider: Provider<Http>,
}

impl DeploymentContext {
    pub async fn connect(config: &DeploymentConfig) -> eyre::Result<Self> {
        let provider = Provider::try_from(config.rpc_url.as_str())?;
        let chain_id = provider.get_chainid().await?;
        let wallet = Wallet::from(config.private_key.key.clone())
            .with_chain_id(chain_id.as_u64());

        let nonce = provider
            .get_transaction_count(wallet.address(), None)
            .await?;

        Ok(Self {
            contracts_dir: config.contracts_dir.clone(),
            chain_id: chain_id.as_u64(),
            nonce: AtomicU64::new(nonce.as_u64()),
            private_key: config.private_key.clone(),
            rpc_url: config.rpc_url.clone(),
            provider,
        })
    }

    pub fn next_nonce(&self) -> u64 {
        self.nonce.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
    }

    pub fn forge_create(&self, contract_spec: ContractSpec) -> ForgeCreate {
        ForgeCreate::new(contract_spec)
            .with_cwd(&self.contracts_dir)
            .with_private_key(self.private_key.clone())
            .with_rpc_url(&self.rpc_url)
            .with_override_nonce(self.next_nonce())
    }

    pub fn etherscan_verifier(
        &self,
        verification: &VerificationConfig,
    ) -> EtherscanVerifier {
        EtherscanVerifier {
            root: self.contracts_dir.clone(),
            chain_id: self.chain_id,
            etherscan_api_key: verification.etherscan_api_key.clone(),
        }
    }
}

#[async_trait]
impl ContractRuntime for DeploymentContext {
    #[instrument(skip_all, fields(contract = %contract))]
    async fn deploy(
        &self,
        contract: &ContractSpec,
        constructor_args: &[ConstructorArg],
    ) -> eyre::Result<ContractDeployment> {
        let output = self
            .forge_create(contract.clone())
            .with_constructor_args(constructor_args.iter().cloned())
            .run()
            .await?;

        ethers_utils::ensure_mined(&self.provider, output.transaction_hash)
            .await?;

        Ok(output.into())
    }

    async fn wait_for_confirmations(
        &self,
        deployment: &ContractDeployment,
        confirmations: usize,
    ) -> eyre::Result<()> {
        ethers_utils::wait_for_confirmations(
            &self.provider,
            deployment.transaction_hash,
            confirmations,
        )
        .await?;

        Ok(())
    }
}

/// Verifies sources on an Etherscan compatible explorer via `forge verify-contract`
#[derive(Debug)]
pub struct EtherscanVerifier {
    root: PathBuf,
    chain_id: u64,
    etherscan_api_key: String,
}

#[async_trait]
impl SourceVerifier for EtherscanVerifier {
    async fn verify(
        &self,
        contract: &ContractSpec,
        deployment: &ContractDeployment,
        constructor_args: &[ConstructorArg],
    ) -> eyre::Result<()> {
        ForgeVerify::new(contract.clone(), deployment.address)
            .with_root(&self.root)
            .with_chain(self.chain_id)
            .with_etherscan_api_key(&self.etherscan_api_key)
            .with_constructor_args(constructor_args.iter().cloned())
            .run()
            .await
    }
}
