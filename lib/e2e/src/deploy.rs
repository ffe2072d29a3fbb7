use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
    str::FromStr,
};

use alloy::{
    hex,
    primitives::{Address, TxHash},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    sol,
    sol_types::SolError,
};
use eyre::{Context, ContextCompat};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constructor::Constructor,
    system::{env, DEPLOYER_ADDRESS_ENV_VAR_NAME},
};

sol! {
    /// Raised by the `StylusDeployer` when the constructor reverts.
    error ContractInitializationError(address contract_address, bytes revert_data);
}

/// Matches the transaction hash printed by `cargo stylus deploy`.
static TX_HASH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"0x[a-fA-F0-9]{64}").expect("tx hash regex should compile")
});

/// Matches the contract address, possibly preceded by ANSI color codes.
static CONTRACT_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"deployed code at address:\s*(?:\x1B\[[0-9;]*[a-zA-Z])*(0x[a-fA-F0-9]{40})",
    )
    .expect("contract address regex should compile")
});

/// Matches revert data reported by the node in `stderr`.
static REVERT_DATA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"data: Some\(String\("(0x[a-fA-F0-9]+)"\)\)"#)
        .expect("revert data regex should compile")
});

/// Constructor revert reported by the `StylusDeployer`.
#[derive(Debug)]
pub struct StylusDeployerError {
    /// Address the contract would have been deployed at.
    pub contract_address: Address,
    /// Hex encoded revert data of the constructor.
    pub revert_data: String,
}

impl StylusDeployerError {
    /// Convert [`eyre::Report`] into [`StylusDeployerError`].
    #[must_use]
    pub fn from_report(report: &eyre::Report) -> Option<&Self> {
        report.downcast_ref::<StylusDeployerError>()
    }
}

impl std::fmt::Display for StylusDeployerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "constructor of {} reverted with 0x{}",
            self.contract_address, self.revert_data
        )
    }
}

impl std::error::Error for StylusDeployerError {}

/// Result of a successful deployment.
#[derive(Clone, Debug)]
pub struct Deployment {
    /// Receipt of the deployment transaction.
    pub receipt: TransactionReceipt,
    /// Address of the deployed contract.
    pub contract_address: Address,
}

/// Deploys a Stylus contract crate with `cargo stylus deploy`.
#[derive(Clone, Debug)]
pub struct Deployer {
    rpc_url: String,
    private_key: String,
    manifest_dir: Option<PathBuf>,
    deployer_address: Option<Address>,
    constructor: Option<Constructor>,
}

impl Deployer {
    /// Create a deployer that signs with `private_key` against `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: String, private_key: String) -> Self {
        Self {
            rpc_url,
            private_key,
            manifest_dir: None,
            deployer_address: None,
            constructor: None,
        }
    }

    /// Deploy the crate in `manifest_dir` instead of the current directory.
    #[must_use]
    pub fn in_dir(mut self, manifest_dir: impl AsRef<Path>) -> Self {
        self.manifest_dir = Some(manifest_dir.as_ref().to_path_buf());
        self
    }

    /// Use `deployer_address` as the `StylusDeployer` instead of the
    /// `DEPLOYER_ADDRESS` environment variable.
    #[must_use]
    pub fn with_deployer_address(mut self, deployer_address: Address) -> Self {
        self.deployer_address = Some(deployer_address);
        self
    }

    /// Add a Solidity constructor to the deployer.
    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Deploy and activate the contract, running its constructor if one was
    /// configured.
    ///
    /// Consumes the deployer: every call publishes a new, independent
    /// instance.
    ///
    /// # Errors
    ///
    /// May error if:
    ///
    /// - `cargo stylus deploy` can't be executed or fails.
    /// - The constructor reverts, see [`StylusDeployerError`].
    /// - The deployment receipt can't be fetched.
    pub async fn deploy(self) -> eyre::Result<Deployment> {
        let mut command = Command::new("cargo");
        command
            .args(["stylus", "deploy"])
            .args(["-e", &self.rpc_url])
            .args(["--private-key", &self.private_key])
            .arg("--no-verify");

        if let Some(dir) = &self.manifest_dir {
            command.current_dir(dir);
        }

        if let Some(ctr) = &self.constructor {
            let deployer_address = match self.deployer_address {
                Some(address) => address,
                None => env(DEPLOYER_ADDRESS_ENV_VAR_NAME)?
                    .parse()
                    .wrap_err("failed to parse deployer address")?,
            };

            command
                .args(["--deployer-address", &deployer_address.to_string()])
                .args(["--constructor-signature", &ctr.signature])
                .arg("--constructor-args")
                .args(&ctr.args);
        }

        tracing::debug!(
            rpc_url = %self.rpc_url,
            dir = ?self.manifest_dir,
            "running `cargo stylus deploy`"
        );

        let output = command
            .output()
            .wrap_err("failed to execute `cargo stylus deploy` command")?;

        if !output.status.success() {
            return Err(deployment_error(&output));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let (tx_hash, contract_address) = parse_deploy_output(&stdout)?;
        let receipt = self.get_receipt(tx_hash).await?;

        Ok(Deployment { receipt, contract_address })
    }

    async fn get_receipt(
        &self,
        tx_hash: TxHash,
    ) -> eyre::Result<TransactionReceipt> {
        let provider = ProviderBuilder::new().on_http(
            self.rpc_url.parse().wrap_err("failed to parse rpc url")?,
        );

        provider
            .get_transaction_receipt(tx_hash)
            .await
            .wrap_err("failed to fetch deployment receipt")?
            .context("deployment receipt not found")
    }
}

/// Extracts the deployment transaction hash and contract address from the
/// `stdout` of `cargo stylus deploy`.
///
/// # Errors
///
/// May fail if either value is missing or malformed.
pub fn parse_deploy_output(stdout: &str) -> eyre::Result<(TxHash, Address)> {
    let contract_addr = CONTRACT_ADDRESS_REGEX
        .captures(stdout)
        .and_then(|cap| cap.get(1))
        .context(format!("no contract address found in output {stdout}"))?
        .as_str();
    let contract_address = Address::from_str(contract_addr).wrap_err(
        format!("failed to parse contract address from string: {contract_addr}"),
    )?;

    let tx_hash = TX_HASH_REGEX
        .find(stdout)
        .context(format!("no transaction hash found in output {stdout}"))?
        .as_str();
    let tx_hash =
        TxHash::from_str(tx_hash).wrap_err("failed to parse transaction hash")?;

    Ok((tx_hash, contract_address))
}

/// Turns a failed `cargo stylus deploy` run into a report, recognizing
/// constructor reverts.
fn deployment_error(output: &Output) -> eyre::Report {
    let stderr = String::from_utf8_lossy(&output.stderr);

    let Some(hex_data) = REVERT_DATA_REGEX
        .captures(&stderr)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
    else {
        return eyre::eyre!("deployment failed: {stderr}");
    };

    match hex::decode(hex_data) {
        Ok(data) => match ContractInitializationError::abi_decode(&data, false) {
            Ok(err) => eyre::Report::new(StylusDeployerError {
                contract_address: err.contract_address,
                revert_data: hex::encode(&err.revert_data),
            }),
            Err(_) => eyre::eyre!("deployment reverted with {hex_data}"),
        },
        Err(e) => eyre::eyre!("failed to decode revert data {hex_data}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    const TX_HASH: &str =
        "0x6ab1e7d2f0e5c9f5b1d2a4f3e0f2c1b5a6d7e8f90a1b2c3d4e5f60718293a4b5";

    #[test]
    fn parses_plain_deploy_output() {
        let stdout = format!(
            "deployed code at address: 0x16b8aec0b12a95d6fcfdb5d68dca41929c7da7a6\n\
             deployment tx hash: {TX_HASH}\n"
        );

        let (tx_hash, contract_address) =
            parse_deploy_output(&stdout).expect("should parse output");

        assert_eq!(tx_hash, TxHash::from_str(TX_HASH).unwrap());
        assert_eq!(
            contract_address,
            address!("16B8aEC0B12a95d6fcFdB5d68dca41929c7DA7a6")
        );
    }

    #[test]
    fn parses_colored_deploy_output() {
        let stdout = format!(
            "deployed code at address: \x1B[1;94m0x16b8aec0b12a95d6fcfdb5d68dca41929c7da7a6\x1B[0m\n\
             deployment tx hash: \x1B[1;94m{TX_HASH}\x1B[0m\n"
        );

        let (_, contract_address) =
            parse_deploy_output(&stdout).expect("should parse output");

        assert_eq!(
            contract_address,
            address!("16B8aEC0B12a95d6fcFdB5d68dca41929c7DA7a6")
        );
    }

    #[test]
    fn error_when_output_has_no_address() {
        let err = parse_deploy_output(&format!("deployment tx hash: {TX_HASH}"))
            .expect_err("should not parse output without address");

        assert!(err.to_string().contains("no contract address found"));
    }

    #[test]
    fn recognizes_constructor_revert() {
        let contract_address =
            address!("16B8aEC0B12a95d6fcFdB5d68dca41929c7DA7a6");
        let revert_data = vec![0x11, 0x8c, 0xda, 0xa7];
        let encoded = ContractInitializationError {
            contract_address,
            revert_data: revert_data.clone().into(),
        }
        .abi_encode();
        let stderr = format!(
            "execution reverted, data: Some(String(\"0x{}\"))",
            hex::encode(encoded)
        );
        let output = failed_output(&stderr);

        let report = deployment_error(&output);
        let err = StylusDeployerError::from_report(&report)
            .expect("should be a deployer error");

        assert_eq!(err.contract_address, contract_address);
        assert_eq!(err.revert_data, hex::encode(revert_data));
    }

    #[test]
    fn keeps_stderr_of_unrecognized_failure() {
        let output = failed_output("error: insufficient funds for gas");

        let report = deployment_error(&output);

        assert!(StylusDeployerError::from_report(&report).is_none());
        assert!(report.to_string().contains("insufficient funds for gas"));
    }

    fn failed_output(stderr: &str) -> Output {
        use std::os::unix::process::ExitStatusExt;

        Output {
            status: std::process::ExitStatus::from_raw(1 << 8),
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }
}
