pub mod common;
pub mod create;
pub mod verify;

pub use self::common::ContractSpec;
pub use self::create::{ForgeCreate, ForgeOutput};
pub use self::verify::ForgeVerify;

/// Forge prints compiler chatter around its JSON output
///
/// The JSON object is the last line opening with `{`, braces quoted inside
/// earlier warnings are skipped.
pub(crate) fn strip_non_json(s: &str) -> &str {
    let start = s
        .match_indices('{')
        .map(|(idx, _)| idx)
        .filter(|&idx| {
            s[..idx]
                .rsplit('\n')
                .next()
                .map_or(true, |prefix| prefix.trim().is_empty())
        })
        .last()
        .unwrap_or(0);

    match s.rfind('}') {
        Some(end) if end >= start => &s[start..=end],
        _ => &s[start..],
    }
}

/// Fails with forge's stderr if the command did not exit successfully
pub(crate) fn check_output(
    command: &str,
    output: &std::process::Output,
) -> eyre::Result<()> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        eyre::bail!("forge {command} failed: {}", stderr.trim());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn strips_compiler_output() {
        let stdout = indoc! {r#"
            Compiling 3 files with Solc 0.8.20
            Solc 0.8.20 finished in 1.02s
            {"deployer":"0x01","deployedTo":"0x02"}
        "#};

        assert_eq!(
            strip_non_json(stdout),
            r#"{"deployer":"0x01","deployedTo":"0x02"}"#
        );
    }

    #[test]
    fn skips_braces_quoted_in_warnings() -> eyre::Result<()> {
        let stdout = indoc! {r#"
            Warning: unreachable code
              function f() public {
            {"deployer":"0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266","deployedTo":"0x5fbdb2315678afecb367f032d93f642f64180aa3","transactionHash":"0x3c5a1b4d6c1ee4f31b2f3c7d1aa7d4c9e9a1d1f3a1b2c3d4e5f60718293a4b5c"}
        "#};

        let output: ForgeOutput = serde_json::from_str(strip_non_json(stdout))?;

        assert_eq!(
            output.deployed_to,
            "0x5fbdb2315678afecb367f032d93f642f64180aa3"
                .parse::<ethers::types::Address>()?
        );

        Ok(())
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(strip_non_json("no json here"), "no json here");
    }
}
