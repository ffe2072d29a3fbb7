//! Exit statuses of the binaries when their arguments are rejected.
use std::process::{Command, Output};

const RPC_URL: &str = "http://localhost:8547";
const PRIVATE_KEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(std::env::temp_dir())
        .env_remove("RPC_URL")
        .env_remove("PRIVATE_KEY")
        .env_remove("DEPLOYER_ADDRESS")
        .env_remove("NFT1155_URI")
        .output()
        .expect("should run the binary")
}

#[test]
fn mint721_exits_with_one_when_uri_is_missing() {
    let output = run(
        env!("CARGO_BIN_EXE_mint721"),
        &["--rpc-url", RPC_URL, "--private-key", PRIVATE_KEY],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--uri"));
}

#[test]
fn mint721_exits_with_one_when_contract_is_malformed() {
    let output = run(
        env!("CARGO_BIN_EXE_mint721"),
        &[
            "--rpc-url",
            RPC_URL,
            "--private-key",
            PRIVATE_KEY,
            "--uri",
            "ipfs://bafy/1.json",
            "--contract",
            "0x1234",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn deploy_exits_with_one_when_rpc_url_is_missing() {
    for bin in [
        env!("CARGO_BIN_EXE_deploy-nft721"),
        env!("CARGO_BIN_EXE_deploy-nft1155"),
    ] {
        let output = run(bin, &["--private-key", PRIVATE_KEY]);

        assert_eq!(output.status.code(), Some(1), "{bin}");
    }
}

#[test]
fn help_exits_successfully() {
    let output = run(env!("CARGO_BIN_EXE_mint721"), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--uri"));
}
