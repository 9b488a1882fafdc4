use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use uuid::Uuid;

/// A time source consulted for every duration-based decision made over a ledger, such as
/// rollover age and retention age.
///
/// Defaults to [SystemClock](crate::clock::SystemClock). Swap in a manual implementation
/// to make time-dependent behaviour deterministic in tests.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// A driver responsible for moving closed segments to long-term storage.
///
/// `offload` copies the closed segment identified by `segment_id` to the long-term store,
/// while `delete_offloaded` removes a previously offloaded copy once its grace period has
/// elapsed. The `uid` disambiguates repeated offload attempts for the same segment.
///
/// Defaults to [NullLedgerOffloader](crate::offload::NullLedgerOffloader), which refuses
/// every request.
#[async_trait]
pub trait LedgerOffloader: Debug + Send + Sync {
    async fn offload(&self, segment_id: u64, uid: Uuid) -> Result<()>;
    async fn delete_offloaded(&self, segment_id: u64, uid: Uuid) -> Result<()>;
}
