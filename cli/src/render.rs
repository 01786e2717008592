//! Terminal panels.

use std::fmt;

use token_deployer::{
    network::KNOWN_NETWORKS, ContractArtifact, DeploymentOutcome,
    DeploymentStatus, WalletSession,
};

/// The wallet panel: connection status, account and network.
pub(crate) struct SessionPanel<'a>(pub(crate) &'a WalletSession);

impl fmt::Display for SessionPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(f, "Wallet")?;
        let Some(account) = session.active_account() else {
            return writeln!(f, "  status:  disconnected");
        };
        writeln!(f, "  status:  connected")?;
        writeln!(f, "  account: {account}")?;
        match session.chain_id {
            Some(id) => {
                writeln!(f, "  network: {} ({id})", session.network_name)
            }
            None => writeln!(f, "  network: {}", session.network_name),
        }
    }
}

/// The deployment result panel.
pub(crate) struct OutcomePanel<'a>(pub(crate) &'a DeploymentOutcome);

impl fmt::Display for OutcomePanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        writeln!(f, "Deployment")?;
        match outcome.status() {
            DeploymentStatus::Pending => writeln!(f, "  status:   pending"),
            DeploymentStatus::Success => {
                writeln!(f, "  status:   success")?;
                if let Some(hash) = outcome.transaction_hash() {
                    writeln!(f, "  tx hash:  {hash}")?;
                }
                if let Some(address) = outcome.contract_address() {
                    writeln!(f, "  contract: {address}")?;
                }
                Ok(())
            }
            DeploymentStatus::Failure => {
                writeln!(f, "  status:   failure")?;
                if let Some(error) = outcome.error() {
                    writeln!(f, "  error:    {error}")?;
                }
                Ok(())
            }
        }
    }
}

/// The chain id to name table.
pub(crate) struct NetworksTable;

impl fmt::Display for NetworksTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, name) in KNOWN_NETWORKS {
            writeln!(f, "{id:>10}  {name}")?;
        }
        Ok(())
    }
}

/// Summary of the artifact that gets deployed.
pub(crate) struct ArtifactPanel<'a>(pub(crate) &'a ContractArtifact);

impl fmt::Display for ArtifactPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let artifact = self.0;
        writeln!(f, "{}", artifact.name())?;
        writeln!(f, "  {}", artifact.constructor_signature())?;
        writeln!(f, "  bytecode: {} bytes", artifact.bytecode().len())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256};
    use token_deployer::DeployReceipt;

    use super::*;

    fn sepolia() -> WalletSession {
        WalletSession {
            connected: true,
            account: Some(address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")),
            chain_id: Some(11_155_111),
            network_name: "Ethereum Sepolia".to_owned(),
        }
    }

    #[test]
    fn connected_session_shows_account_and_network() {
        let panel = SessionPanel(&sepolia()).to_string();

        assert!(panel.contains("connected"));
        assert!(panel.contains("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert!(panel.contains("Ethereum Sepolia (11155111)"));
    }

    #[test]
    fn empty_session_shows_disconnected() {
        let panel = SessionPanel(&WalletSession::default()).to_string();

        assert_eq!(panel, "Wallet\n  status:  disconnected\n");
    }

    #[test]
    fn success_shows_hash_and_contract() {
        let receipt = DeployReceipt {
            transaction_hash: b256!(
                "0x00000000000000000000000000000000000000000000000000000000000000aa"
            ),
            contract_address: address!(
                "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            ),
        };
        let mut outcome = DeploymentOutcome::pending();
        outcome.succeed(receipt).expect("should resolve");

        let panel = OutcomePanel(&outcome).to_string();

        assert!(panel.contains("success"));
        assert!(panel.contains(&receipt.transaction_hash.to_string()));
        assert!(panel.contains("0x5FbDB2315678afecb367f032d93F642f64180aa3"));
    }

    #[test]
    fn failure_shows_error_without_hash() {
        let mut outcome = DeploymentOutcome::pending();
        outcome.fail("insufficient funds").expect("should resolve");

        let panel = OutcomePanel(&outcome).to_string();

        assert!(panel.contains("failure"));
        assert!(panel.contains("insufficient funds"));
        assert!(!panel.contains("tx hash"));
    }

    #[test]
    fn networks_table_lists_every_network() {
        let table = NetworksTable.to_string();

        assert_eq!(table.lines().count(), KNOWN_NETWORKS.len());
        assert!(table.contains("Arbitrum One"));
    }

    #[test]
    fn artifact_panel_shows_constructor() {
        let artifact = ContractArtifact::bundled().expect("bundled artifact");

        let panel = ArtifactPanel(&artifact).to_string();

        assert!(panel.starts_with("Token\n"));
        assert!(panel.contains("constructor(string,string,uint256)"));
    }
}
