use std::path::PathBuf;

use ethers::types::Address;
use eyre::{ContextCompat, WrapErr};
use tracing::{info, instrument};

use super::{check_output, ContractSpec};
use crate::types::ConstructorArg;

pub struct ForgeVerify {
    spec: ContractSpec,
    address: Address,
    root: Option<PathBuf>,
    chain: Option<u64>,
    etherscan_api_key: Option<String>,
    constructor_args: Vec<ConstructorArg>,
}

impl ForgeVerify {
    pub fn new(spec: ContractSpec, address: Address) -> Self {
        Self {
            spec,
            address,
            root: None,
            chain: None,
            etherscan_api_key: None,
            constructor_args: vec![],
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_chain(mut self, chain: u64) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn with_etherscan_api_key(
        mut self,
        etherscan_api_key: impl ToString,
    ) -> Self {
        self.etherscan_api_key = Some(etherscan_api_key.to_string());
        self
    }

    pub fn with_constructor_args(
        mut self,
        args: impl IntoIterator<Item = ConstructorArg>,
    ) -> Self {
        self.constructor_args.extend(args);
        self
    }

    pub fn command(&self) -> eyre::Result<tokio::process::Command> {
        let mut cmd = tokio::process::Command::new("forge");
        cmd.arg("verify-contract");

        cmd.arg("--watch");

        let root = self.root.as_ref().context("Missing root")?;

        cmd.arg("--root");
        cmd.arg(root);

        let chain = self.chain.as_ref().context("Missing chain")?;

        cmd.arg("--chain");
        cmd.arg(chain.to_string());

        let etherscan_api_key = self
            .etherscan_api_key
            .as_ref()
            .context("Missing etherscan api key")?;

        cmd.arg("--etherscan-api-key");
        cmd.arg(etherscan_api_key);

        if !self.constructor_args.is_empty() {
            cmd.arg("--constructor-args");
            cmd.arg(ConstructorArg::abi_encode(&self.constructor_args));
        }

        cmd.arg(format!("{:?}", self.address));
        cmd.arg(self.spec.to_string());

        Ok(cmd)
    }

    #[instrument(name = "forge_verify", skip_all, fields(contract = %self.spec))]
    pub async fn run(&self) -> eyre::Result<()> {
        info!("Verifying {} at {:?}", self.spec, self.address);

        let output = self
            .command()?
            .output()
            .await
            .wrap_err("Running forge verify-contract")?;

        check_output("verify-contract", &output)?;

        info!("Verified {} at {:?}", self.spec, self.address);

        Ok(())
    }
}
