use ethers::types::U256;
use tracing::{info, instrument};

use crate::deployment::runtime::ContractRuntime;
use crate::forge_utils::ContractSpec;
use crate::report::contract_deployment::ContractDeployment;
use crate::types::ConstructorArg;

pub const CONTRACT_NAME: &str = "TestToken";

pub const TOKEN_NAME: &str = "TEST Token";
pub const TOKEN_SYMBOL: &str = "TEST";
pub const INITIAL_SUPPLY_TOKENS: u64 = 1_000_000;
pub const TOKEN_DECIMALS: usize = 18;

/// 1M whole tokens in base units
pub fn initial_supply() -> U256 {
    U256::from(INITIAL_SUPPLY_TOKENS) * U256::exp10(TOKEN_DECIMALS)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestTokenDeployment {
    pub name: String,
    pub symbol: String,
    pub initial_supply: U256,
    pub deployment: ContractDeployment,
}

impl TestTokenDeployment {
    pub fn contract_spec() -> ContractSpec {
        ContractSpec::name(CONTRACT_NAME)
    }

    pub fn constructor_args(&self) -> Vec<ConstructorArg> {
        constructor_args(&self.name, &self.symbol, self.initial_supply)
    }
}

fn constructor_args(
    name: &str,
    symbol: &str,
    initial_supply: U256,
) -> Vec<ConstructorArg> {
    vec![name.into(), symbol.into(), initial_supply.into()]
}

#[instrument(name = "test_token", skip_all)]
pub async fn deploy(
    runtime: &impl ContractRuntime,
) -> eyre::Result<TestTokenDeployment> {
    let initial_supply = initial_supply();

    info!("Deploying {CONTRACT_NAME} with supply {initial_supply}");

    let deployment = runtime
        .deploy(
            &TestTokenDeployment::contract_spec(),
            &constructor_args(TOKEN_NAME, TOKEN_SYMBOL, initial_supply),
        )
        .await?;

    println!("{CONTRACT_NAME} deployed to: {:?}", deployment.address);

    Ok(TestTokenDeployment {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        initial_supply,
        deployment,
    })
}
