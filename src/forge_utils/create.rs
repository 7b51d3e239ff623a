use std::path::{Path, PathBuf};

use ethers::types::{Address, H256};
use eyre::Context;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::ContractSpec;
use super::{check_output, strip_non_json};
use crate::cli::PrivateKey;
use crate::types::ConstructorArg;

#[derive(Debug)]
pub struct ForgeCreate {
    cwd: Option<PathBuf>,
    contract_spec: ContractSpec,
    private_key: Option<PrivateKey>,
    rpc_url: Option<String>,
    override_nonce: Option<u64>,
    constructor_args: Vec<ConstructorArg>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeOutput {
    pub deployer: Address,
    pub deployed_to: Address,
    pub transaction_hash: H256,
}

impl ForgeCreate {
    pub fn new(contract_spec: ContractSpec) -> Self {
        Self {
            cwd: None,
            contract_spec,
            private_key: None,
            rpc_url: None,
            override_nonce: None,
            constructor_args: vec![],
        }
    }

    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_owned());
        self
    }

    pub fn with_private_key(mut self, private_key: PrivateKey) -> Self {
        self.private_key = Some(private_key);
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: impl ToString) -> Self {
        self.rpc_url = Some(rpc_url.to_string());
        self
    }

    pub fn with_override_nonce(mut self, override_nonce: u64) -> Self {
        self.override_nonce = Some(override_nonce);
        self
    }

    pub fn with_constructor_args(
        mut self,
        args: impl IntoIterator<Item = ConstructorArg>,
    ) -> Self {
        self.constructor_args.extend(args);
        self
    }

    pub fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new("forge");
        cmd.arg("create");

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        cmd.arg(self.contract_spec.to_string());

        if let Some(private_key) = &self.private_key {
            cmd.arg("--private-key");
            cmd.arg(private_key.to_string());
        }

        if let Some(rpc_url) = &self.rpc_url {
            cmd.arg("--rpc-url");
            cmd.arg(rpc_url);
        }

        if let Some(nonce) = self.override_nonce {
            cmd.arg("--nonce");
            cmd.arg(nonce.to_string());
        }

        cmd.arg("--broadcast");
        cmd.arg("--json");

        // Takes all remaining values so it has to come last
        if !self.constructor_args.is_empty() {
            cmd.arg("--constructor-args");
            cmd.args(self.constructor_args.iter().map(ToString::to_string));
        }

        cmd
    }

    #[instrument(name = "forge_create", skip_all, fields(contract = %self.contract_spec))]
    pub async fn run(&self) -> eyre::Result<ForgeOutput> {
        info!(
            "Creating {} with {} constructor args",
            self.contract_spec,
            self.constructor_args.len()
        );

        let output = self
            .command()
            .output()
            .await
            .context("Running forge create")?;

        check_output("create", &output)?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        let output: ForgeOutput = serde_json::from_str(strip_non_json(&stdout))
            .with_context(|| format!("Parsing forge create output: {stdout}"))?;

        info!("Created: {output:?}");

        Ok(output)
    }
}
