use std::fmt;

use ethers::abi::Token;
use ethers::types::{Address, U256};

/// A single constructor argument as passed to forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorArg {
    String(String),
    Uint(U256),
    Address(Address),
}

impl ConstructorArg {
    pub fn into_token(self) -> Token {
        match self {
            Self::String(s) => Token::String(s),
            Self::Uint(n) => Token::Uint(n),
            Self::Address(address) => Token::Address(address),
        }
    }

    /// ABI encodes the arguments the way the verifier expects them
    pub fn abi_encode(args: &[ConstructorArg]) -> String {
        let tokens: Vec<Token> =
            args.iter().cloned().map(ConstructorArg::into_token).collect();

        format!("0x{}", hex::encode(ethers::abi::encode(&tokens)))
    }
}

impl fmt::Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Address(address) => write!(f, "{address:?}"),
        }
    }
}

impl From<&str> for ConstructorArg {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<U256> for ConstructorArg {
    fn from(value: U256) -> Self {
        Self::Uint(value)
    }
}

impl From<Address> for ConstructorArg {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}
