//! End-to-end test support.
//!
//! Tests run against a development node reachable at `RPC_URL`. Every
//! [`Account`] is a fresh key funded from the node's master account.

mod account;
mod system;

pub use account::Account;
pub use e2e_proc::test;
pub use system::rpc_url;
