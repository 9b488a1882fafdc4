use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use managed_ledger::traits::{Clock, LedgerOffloader};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use uuid::Uuid;

/// A clock pinned to a fixed instant, advanced manually by tests.
#[derive(Debug)]
pub struct ManualClock {
    now_ms: AtomicU64,
}

impl ManualClock {
    pub fn starting_at(now_ms: u64) -> Arc<Self> {
        Arc::new(Self {
            now_ms: AtomicU64::new(now_ms),
        })
    }

    pub fn advance_ms(&self, millis: u64) {
        self.now_ms.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.now_ms.load(Ordering::SeqCst) as i64)
            .unwrap()
    }
}

/// An offload driver that records every call made through it.
#[derive(Debug, Default)]
pub struct RecordingOffloader {
    pub offloaded: Mutex<Vec<(u64, Uuid)>>,
    pub deleted: Mutex<Vec<(u64, Uuid)>>,
}

#[async_trait]
impl LedgerOffloader for RecordingOffloader {
    async fn offload(&self, segment_id: u64, uid: Uuid) -> Result<()> {
        self.offloaded.lock().unwrap().push((segment_id, uid));
        Ok(())
    }

    async fn delete_offloaded(&self, segment_id: u64, uid: Uuid) -> Result<()> {
        self.deleted.lock().unwrap().push((segment_id, uid));
        Ok(())
    }
}
