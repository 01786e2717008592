#![cfg(feature = "e2e")]

use abi::Token;
use alloy::{
    primitives::{uint, U256},
    providers::Provider,
    signers::local::PrivateKeySigner,
};
use e2e::Account;
use eyre::{ContextCompat, Result};
use token_deployer::{
    connect, deploy, App, Config, ContractArtifact, DeploymentStatus, Field,
    RpcWallet, TokenDeployForm,
};

mod abi;

const TOKEN_NAME: &str = "Test Token";
const TOKEN_SYMBOL: &str = "TTK";
const SUPPLY: &str = "1000000";
const ONE_TOKEN: U256 = uint!(1_000_000_000_000_000_000_U256);

/// Configures a wallet the way the binary does, from an endpoint and a key.
fn wallet(alice: &Account) -> Result<RpcWallet> {
    let config = Config::default()
        .with_rpc_url(e2e::rpc_url()?.as_str())?
        .with_private_key(&alice.pk())?;
    RpcWallet::discover(&config).context("should discover wallet")
}

fn form() -> TokenDeployForm {
    TokenDeployForm::new(TOKEN_NAME, TOKEN_SYMBOL, SUPPLY)
}

#[e2e::test]
async fn connects_with_local_signer(alice: Account) -> Result<()> {
    let wallet = wallet(&alice)?;

    let session = connect(Some(&wallet)).await?;

    let chain_id = alice.wallet.get_chain_id().await?;
    assert!(session.connected);
    assert_eq!(session.account, Some(alice.address()));
    assert_eq!(session.chain_id, Some(chain_id));
    Ok(())
}

#[e2e::test]
async fn deploys_token(alice: Account) -> Result<()> {
    let wallet = wallet(&alice)?;
    let artifact = ContractArtifact::bundled()?;
    let session = connect(Some(&wallet)).await?;
    let balance_before = alice.balance().await?;

    let outcome = deploy(&wallet, &artifact, &form(), &session).await?;

    assert_eq!(outcome.status(), DeploymentStatus::Success);
    assert!(alice.balance().await? < balance_before, "gas should be paid");
    assert!(outcome.transaction_hash().is_some());
    let contract_addr =
        outcome.contract_address().context("should record contract")?;
    let contract = Token::new(contract_addr, &alice.wallet);

    let name = contract.name().call().await?;
    let symbol = contract.symbol().call().await?;
    let decimals = contract.decimals().call().await?;
    let total_supply = contract.totalSupply().call().await?;
    let balance = contract.balanceOf(alice.address()).call().await?;

    let expected_supply = U256::from(1_000_000u64) * ONE_TOKEN;
    assert_eq!(name, TOKEN_NAME);
    assert_eq!(symbol, TOKEN_SYMBOL);
    assert_eq!(decimals, 18);
    assert_eq!(total_supply, expected_supply);
    assert_eq!(balance, expected_supply);
    Ok(())
}

#[e2e::test]
async fn app_records_deployed_contract(alice: Account) -> Result<()> {
    let mut app = App::new(Some(wallet(&alice)?), ContractArtifact::bundled()?);
    app.edit(Field::Name, TOKEN_NAME);
    app.edit(Field::Symbol, TOKEN_SYMBOL);
    app.edit(Field::Supply, SUPPLY);

    app.toggle_connection().await?;
    app.deploy().await?;

    let outcome = app.state().outcome.as_ref().context("should deploy")?;
    assert_eq!(outcome.status(), DeploymentStatus::Success);
    let contract_addr =
        outcome.contract_address().context("should record contract")?;
    let code = alice.wallet.get_code_at(contract_addr).await?;
    assert!(!code.is_empty());

    app.toggle_connection().await?;
    assert!(!app.state().session.connected);
    assert_eq!(app.state().form.name, TOKEN_NAME);
    Ok(())
}

#[e2e::test]
async fn unfunded_account_fails_without_hash(alice: Account) -> Result<()> {
    let broke =
        RpcWallet::new(alice.url().clone(), Some(PrivateKeySigner::random()));
    let artifact = ContractArtifact::bundled()?;
    let session = connect(Some(&broke)).await?;
    let balance_before = alice.balance().await?;

    let outcome = deploy(&broke, &artifact, &form(), &session).await?;

    assert_eq!(outcome.status(), DeploymentStatus::Failure);
    assert_eq!(outcome.transaction_hash(), None);
    assert!(outcome.error().is_some());
    assert_eq!(alice.balance().await?, balance_before);
    Ok(())
}

#[e2e::test]
async fn node_managed_accounts_are_listed(alice: Account) -> Result<()> {
    use token_deployer::WalletProvider;

    let wallet = RpcWallet::new(alice.url().clone(), None);

    let accounts = wallet.accounts().await?;

    assert!(!wallet.signs_locally());
    assert!(!accounts.is_empty());
    Ok(())
}
