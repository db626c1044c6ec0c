pub mod db;
pub mod error;
pub mod ledger;

use db::MemoryStore;
use ledger::Ledger;

/// The ledger flavor the binary runs with.
pub type AppLedger = Ledger<MemoryStore>;
