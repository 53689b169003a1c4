//! ledger
//!
//! Read-only queries against the collection contract.
//!
//! # Design
//!
//! The [`Ledger`] trait is the seam between the harvest pipeline and the
//! blockchain node. Production uses [`EthLedger`], which issues `eth_call`
//! requests over JSON-RPC; tests use [`MockLedger`], an in-memory
//! implementation with configurable responses.
//!
//! Only two contract reads exist: `totalSupply()` (may be unsupported by
//! the contract; callers must tolerate rejection) and `tokenURI(uint256)`.

pub mod abi;
pub mod eth;
pub mod mock;
pub mod traits;

pub use eth::EthLedger;
pub use mock::{MockCall, MockLedger};
pub use traits::{Ledger, LedgerError};
