use tracing::{info, instrument};

use super::deepfake_detection::DeepfakeDetectionDeployment;
use super::test_token::TestTokenDeployment;
use crate::deployment::runtime::{ContractRuntime, SourceVerifier};
use crate::forge_utils::ContractSpec;
use crate::report::contract_deployment::ContractDeployment;
use crate::types::ConstructorArg;

/// Explorers only index bytecode after a few blocks
pub const REQUIRED_CONFIRMATIONS: usize = 6;

#[instrument(skip_all, fields(contract = %contract))]
async fn confirm_and_verify(
    runtime: &impl ContractRuntime,
    verifier: &impl SourceVerifier,
    contract: ContractSpec,
    deployment: &ContractDeployment,
    constructor_args: &[ConstructorArg],
) -> eyre::Result<()> {
    runtime
        .wait_for_confirmations(deployment, REQUIRED_CONFIRMATIONS)
        .await?;

    verifier
        .verify(&contract, deployment, constructor_args)
        .await?;

    info!("Verified {contract} at {:?}", deployment.address);

    Ok(())
}

/// Verifies the dependent contract first, then the token
pub async fn verify(
    runtime: &impl ContractRuntime,
    verifier: &impl SourceVerifier,
    token: &TestTokenDeployment,
    deepfake_detection: &DeepfakeDetectionDeployment,
) -> eyre::Result<()> {
    println!("Waiting for block confirmations...");

    confirm_and_verify(
        runtime,
        verifier,
        DeepfakeDetectionDeployment::contract_spec(),
        &deepfake_detection.deployment,
        &deepfake_detection.constructor_args(),
    )
    .await?;

    confirm_and_verify(
        runtime,
        verifier,
        TestTokenDeployment::contract_spec(),
        &token.deployment,
        &token.constructor_args(),
    )
    .await?;

    Ok(())
}
