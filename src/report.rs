use std::fmt;

use crate::deployment::steps::deepfake_detection::DeepfakeDetectionDeployment;
use crate::deployment::steps::test_token::TestTokenDeployment;

pub mod contract_deployment;

/// Outcome of a finished run, only ever logged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentReport {
    pub test_token: TestTokenDeployment,
    pub deepfake_detection: DeepfakeDetectionDeployment,
    pub verified: bool,
}

impl fmt::Display for DeploymentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TestToken={:?} DeepfakeDetection={:?} verified={}",
            self.test_token.deployment.address,
            self.deepfake_detection.deployment.address,
            self.verified
        )
    }
}
