//! A library containing the policy surface for a replicated, segmented message ledger.
//!
//! A managed ledger is an append-only log, broken into bounded segments that are each
//! replicated across an ensemble of storage nodes. [LedgerConfig] is the single source of
//! truth for every tunable governing one such log: segment sizing and rollover cadence,
//! replication quorum geometry for data and metadata segments, retention and deletion
//! policy, tiered offload to long-term storage, and operational timeouts.
//!
//! The configuration is plain data plus validation. It performs no I/O, spawns no tasks
//! and holds no locks; all behaviour is realised by the collaborators that read it — the
//! segment allocator, the rollover scheduler, the retention sweeper and the offload
//! trigger. Two of those collaborators are injected as capabilities: a [Clock](crate::traits::Clock)
//! supplying the current instant for every duration-based decision, and a
//! [LedgerOffloader](crate::traits::LedgerOffloader) moving closed segments to long-term
//! storage. Both default to safe implementations (the UTC system clock, and a driver that
//! refuses every offload).
//!
//! Setters are not synchronised. Construct and mutate a [LedgerConfig] while the owning
//! topic is being initialised, then share it as a [SharedLedgerConfig]; once handed to
//! concurrent readers it must be treated as read-only.
//!
//! # Examples
//! ```
//! use anyhow::Result;
//! use managed_ledger::{config::LedgerConfig, SharedLedgerConfig};
//! use std::{sync::Arc, time::Duration};
//!
//! fn main() -> Result<()> {
//!     let mut config = LedgerConfig::new();
//!     config
//!         .set_ensemble_size(5)
//!         .set_write_quorum_size(3)
//!         .set_ack_quorum_size(2)
//!         .set_minimum_rollover_time(Duration::from_secs(10 * 60))?
//!         .set_maximum_rollover_time(Duration::from_secs(2 * 60 * 60))?;
//!
//!     let config: SharedLedgerConfig = Arc::new(config);
//!     assert_eq!(config.maximum_rollover_time_ms(), 7_200_000);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod offload;
pub mod traits;

pub use config::{LedgerConfig, SharedLedgerConfig};
