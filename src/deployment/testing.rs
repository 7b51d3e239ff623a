use std::sync::Mutex;

use async_trait::async_trait;
use ethers::types::{Address, H256};

use super::runtime::{ContractRuntime, SourceVerifier};
use crate::forge_utils::ContractSpec;
use crate::report::contract_deployment::ContractDeployment;
use crate::types::ConstructorArg;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Deploy {
        contract: String,
        args: Vec<ConstructorArg>,
    },
    WaitForConfirmations {
        address: Address,
        confirmations: usize,
    },
    Verify {
        contract: String,
        address: Address,
        args: Vec<ConstructorArg>,
    },
}

/// Records every call and hands out sequential addresses
#[derive(Debug, Default)]
pub struct MockChain {
    calls: Mutex<Vec<Call>>,
    failing_contract: Option<String>,
    failing_verification: bool,
}

impl MockChain {
    pub fn failing_deploy_of(contract: &str) -> Self {
        Self {
            failing_contract: Some(contract.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_verification() -> Self {
        Self {
            failing_verification: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn deployed_contracts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Deploy { contract, .. } => Some(contract),
                _ => None,
            })
            .collect()
    }

    pub fn deploy_args(&self, name: &str) -> Vec<ConstructorArg> {
        self.calls()
            .into_iter()
            .find_map(|call| match call {
                Call::Deploy { contract, args } if contract == name => {
                    Some(args)
                }
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn verify_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Verify { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ContractRuntime for MockChain {
    async fn deploy(
        &self,
        contract: &ContractSpec,
        constructor_args: &[ConstructorArg],
    ) -> eyre::Result<ContractDeployment> {
        if self.failing_contract.as_deref() == Some(contract.name.as_str()) {
            eyre::bail!("forge create failed: {contract} reverted");
        }

        let n = self.deployed_contracts().len() as u64 + 1;

        self.record(Call::Deploy {
            contract: contract.name.clone(),
            args: constructor_args.to_vec(),
        });

        Ok(ContractDeployment {
            address: Address::from_low_u64_be(0x1000 + n),
            transaction_hash: H256::from_low_u64_be(n),
        })
    }

    async fn wait_for_confirmations(
        &self,
        deployment: &ContractDeployment,
        confirmations: usize,
    ) -> eyre::Result<()> {
        self.record(Call::WaitForConfirmations {
            address: deployment.address,
            confirmations,
        });

        Ok(())
    }
}

#[async_trait]
impl SourceVerifier for MockChain {
    async fn verify(
        &self,
        contract: &ContractSpec,
        deployment: &ContractDeployment,
        constructor_args: &[ConstructorArg],
    ) -> eyre::Result<()> {
        self.record(Call::Verify {
            contract: contract.name.clone(),
            address: deployment.address,
            args: constructor_args.to_vec(),
        });

        if self.failing_verification {
            eyre::bail!("forge verify failed: bytecode mismatch");
        }

        Ok(())
    }
}
