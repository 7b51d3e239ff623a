use tracing::{error, info, instrument};

use self::runtime::{ContractRuntime, SourceVerifier};
use self::stage::Stage;
use self::steps::{deepfake_detection, test_token, verification};
use crate::config::DeploymentConfig;
use crate::report::DeploymentReport;

pub mod deployment_context;
pub mod runtime;
pub mod stage;
pub mod steps;

#[cfg(test)]
pub(crate) mod testing;

pub use self::deployment_context::DeploymentContext;

pub async fn run_deployment(
    config: DeploymentConfig,
) -> eyre::Result<DeploymentReport> {
    let context = DeploymentContext::connect(&config).await?;

    info!(chain_id = context.chain_id, "Connected to {}", context.rpc_url);

    let verifier = config
        .verification
        .as_ref()
        .map(|verification| context.etherscan_verifier(verification));

    let mut pipeline = Pipeline::new(&context, verifier.as_ref());
    let report = pipeline.run().await?;

    info!(stage = %pipeline.stage(), "Deployment finished: {report}");

    Ok(report)
}

/// Deploys the token, then the detection contract, then optionally verifies both
pub struct Pipeline<'a, R, V> {
    runtime: &'a R,
    verifier: Option<&'a V>,
    stage: Stage,
}

impl<'a, R, V> Pipeline<'a, R, V>
where
    R: ContractRuntime,
    V: SourceVerifier,
{
    pub fn new(runtime: &'a R, verifier: Option<&'a V>) -> Self {
        Self {
            runtime,
            verifier,
            stage: Stage::Start,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    fn advance(&mut self, stage: Stage) {
        debug_assert!(!self.stage.is_terminal(), "run already finished");
        info!(from = %self.stage, to = %stage, "Stage transition");
        self.stage = stage;
    }

    #[instrument(name = "deployment", skip_all)]
    pub async fn run(&mut self) -> eyre::Result<DeploymentReport> {
        match self.run_stages().await {
            Ok(report) => {
                self.advance(Stage::Done);
                Ok(report)
            }
            Err(err) => {
                let failed_at = self.stage;
                error!(stage = %failed_at, "Deployment failed");
                self.advance(Stage::Failed);
                Err(err.wrap_err(format!(
                    "Deployment failed at stage '{failed_at}'"
                )))
            }
        }
    }

    async fn run_stages(&mut self) -> eyre::Result<DeploymentReport> {
        let test_token = test_token::deploy(self.runtime).await?;
        self.advance(Stage::TokenDeployed);

        let deepfake_detection =
            deepfake_detection::deploy(self.runtime, &test_token).await?;
        self.advance(Stage::DependentDeployed);

        let verified = if let Some(verifier) = self.verifier {
            verification::verify(
                self.runtime,
                verifier,
                &test_token,
                &deepfake_detection,
            )
            .await?;
            self.advance(Stage::Verified);
            true
        } else {
            info!("No etherscan API key, skipping verification");
            false
        };

        Ok(DeploymentReport {
            test_token,
            deepfake_detection,
            verified,
        })
    }
}
