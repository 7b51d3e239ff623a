use ethers::types::Address;
use tracing::{info, instrument};

use super::test_token::TestTokenDeployment;
use crate::deployment::runtime::ContractRuntime;
use crate::forge_utils::ContractSpec;
use crate::report::contract_deployment::ContractDeployment;
use crate::types::ConstructorArg;

pub const CONTRACT_NAME: &str = "DeepfakeDetection";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeepfakeDetectionDeployment {
    pub token_address: Address,
    pub deployment: ContractDeployment,
}

impl DeepfakeDetectionDeployment {
    pub fn contract_spec() -> ContractSpec {
        ContractSpec::name(CONTRACT_NAME)
    }

    pub fn constructor_args(&self) -> Vec<ConstructorArg> {
        vec![self.token_address.into()]
    }
}

/// Needs the mined token since its address is the only constructor argument
#[instrument(name = "deepfake_detection", skip_all)]
pub async fn deploy(
    runtime: &impl ContractRuntime,
    token: &TestTokenDeployment,
) -> eyre::Result<DeepfakeDetectionDeployment> {
    let token_address = token.deployment.address;

    info!("Deploying {CONTRACT_NAME} against token {token_address:?}");

    let deployment = runtime
        .deploy(
            &DeepfakeDetectionDeployment::contract_spec(),
            &[token_address.into()],
        )
        .await?;

    println!("{CONTRACT_NAME} deployed to: {:?}", deployment.address);

    Ok(DeepfakeDetectionDeployment {
        token_address,
        deployment,
    })
}
