use crate::{error::LedgerError, traits::LedgerOffloader};
use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use uuid::Uuid;

/// The default [LedgerOffloader], which fails every request with
/// [LedgerError::OffloadNotConfigured].
///
/// A ledger without a tiered storage backend keeps this driver; the offload trigger must
/// not be enabled while it is in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLedgerOffloader;

#[async_trait]
impl LedgerOffloader for NullLedgerOffloader {
    async fn offload(&self, segment_id: u64, uid: Uuid) -> Result<()> {
        warn!("Rejecting offload request for segment {segment_id} (uid {uid}): no offloader configured");
        Err(LedgerError::OffloadNotConfigured.into())
    }

    async fn delete_offloaded(&self, segment_id: u64, uid: Uuid) -> Result<()> {
        warn!("Rejecting offloaded-copy deletion for segment {segment_id} (uid {uid}): no offloader configured");
        Err(LedgerError::OffloadNotConfigured.into())
    }
}
