use async_trait::async_trait;

use crate::forge_utils::ContractSpec;
use crate::report::contract_deployment::ContractDeployment;
use crate::types::ConstructorArg;

/// Deploys contracts and tracks their transactions on chain
#[async_trait]
pub trait ContractRuntime: Send + Sync {
    /// Returns once the deployment transaction has been mined
    async fn deploy(
        &self,
        contract: &ContractSpec,
        constructor_args: &[ConstructorArg],
    ) -> eyre::Result<ContractDeployment>;

    async fn wait_for_confirmations(
        &self,
        deployment: &ContractDeployment,
        confirmations: usize,
    ) -> eyre::Result<()>;
}

/// Submits deployed contracts to a block explorer for source verification
#[async_trait]
pub trait SourceVerifier: Send + Sync {
    async fn verify(
        &self,
        contract: &ContractSpec,
        deployment: &ContractDeployment,
        constructor_args: &[ConstructorArg],
    ) -> eyre::Result<()>;
}
