mod digest;

pub use digest::DigestType;

use crate::{
    clock::SystemClock,
    error::{LedgerError, Result},
    offload::NullLedgerOffloader,
    traits::{Clock, LedgerOffloader},
};
use chrono::TimeDelta;
use std::{fmt, sync::Arc, time::Duration};

pub type SharedLedgerConfig = Arc<LedgerConfig>;

const FOUR_HOURS: Duration = Duration::from_secs(4 * 60 * 60);

/// Every tunable governing one managed ledger.
///
/// Fields are read through accessors named after the tunable, and written through `set_`
/// prefixed setters that return `&mut Self` so calls chain during initialisation. The
/// three validated setters ([set_minimum_rollover_time](Self::set_minimum_rollover_time),
/// [set_maximum_rollover_time](Self::set_maximum_rollover_time) and
/// [set_throttle_mark_delete](Self::set_throttle_mark_delete)) return
/// `Result<&mut Self>` instead; a failed call mutates nothing, leaving the configuration
/// in its previous, valid state. Every other setter stores its input verbatim — several
/// fields use out-of-range values as sentinels (negative retention time, negative offload
/// threshold), so collaborators interpret them rather than this object rejecting them.
#[derive(Clone)]
pub struct LedgerConfig {
    create_if_missing: bool,
    max_entries_per_segment: u32,
    max_segment_size_mb: u32,
    minimum_rollover_time_ms: u64,
    maximum_rollover_time_ms: u64,
    ensemble_size: u32,
    write_quorum_size: u32,
    ack_quorum_size: u32,
    metadata_ensemble_size: u32,
    metadata_write_quorum_size: u32,
    metadata_ack_quorum_size: u32,
    metadata_max_entries_per_segment: u32,
    segment_rollover_timeout_secs: u32,
    throttle_mark_delete: f64,
    retention_time_ms: i64,
    retention_size_mb: i64,
    auto_skip_non_recoverable_data: bool,
    max_unacked_ranges_to_persist: u32,
    max_unacked_ranges_in_metadata_store: u32,
    offload_deletion_lag_ms: i64,
    offload_auto_trigger_size_threshold_bytes: i64,
    metadata_operations_timeout_secs: u64,
    read_entry_timeout_secs: i64,
    digest_type: DigestType,
    password: Vec<u8>,
    offloader: Arc<dyn LedgerOffloader>,
    clock: Arc<dyn Clock>,
}

// The authentication secret is redacted from debug output.
impl fmt::Debug for LedgerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LedgerConfig")
            .field("create_if_missing", &self.create_if_missing)
            .field("max_entries_per_segment", &self.max_entries_per_segment)
            .field("max_segment_size_mb", &self.max_segment_size_mb)
            .field("minimum_rollover_time_ms", &self.minimum_rollover_time_ms)
            .field("maximum_rollover_time_ms", &self.maximum_rollover_time_ms)
            .field("ensemble_size", &self.ensemble_size)
            .field("write_quorum_size", &self.write_quorum_size)
            .field("ack_quorum_size", &self.ack_quorum_size)
            .field("metadata_ensemble_size", &self.metadata_ensemble_size)
            .field("metadata_write_quorum_size", &self.metadata_write_quorum_size)
            .field("metadata_ack_quorum_size", &self.metadata_ack_quorum_size)
            .field(
                "metadata_max_entries_per_segment",
                &self.metadata_max_entries_per_segment,
            )
            .field(
                "segment_rollover_timeout_secs",
                &self.segment_rollover_timeout_secs,
            )
            .field("throttle_mark_delete", &self.throttle_mark_delete)
            .field("retention_time_ms", &self.retention_time_ms)
            .field("retention_size_mb", &self.retention_size_mb)
            .field(
                "auto_skip_non_recoverable_data",
                &self.auto_skip_non_recoverable_data,
            )
            .field(
                "max_unacked_ranges_to_persist",
                &self.max_unacked_ranges_to_persist,
            )
            .field(
                "max_unacked_ranges_in_metadata_store",
                &self.max_unacked_ranges_in_metadata_store,
            )
            .field("offload_deletion_lag_ms", &self.offload_deletion_lag_ms)
            .field(
                "offload_auto_trigger_size_threshold_bytes",
                &self.offload_auto_trigger_size_threshold_bytes,
            )
            .field(
                "metadata_operations_timeout_secs",
                &self.metadata_operations_timeout_secs,
            )
            .field("read_entry_timeout_secs", &self.read_entry_timeout_secs)
            .field("digest_type", &self.digest_type)
            .field("password", &"<redacted>")
            .field("offloader", &self.offloader)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            create_if_missing: true,
            max_entries_per_segment: 50_000,
            max_segment_size_mb: 100,
            minimum_rollover_time_ms: 0,
            maximum_rollover_time_ms: FOUR_HOURS.as_millis() as u64,
            ensemble_size: 3,
            write_quorum_size: 2,
            ack_quorum_size: 2,
            metadata_ensemble_size: 3,
            metadata_write_quorum_size: 2,
            metadata_ack_quorum_size: 2,
            metadata_max_entries_per_segment: 50_000,
            segment_rollover_timeout_secs: FOUR_HOURS.as_secs() as u32,
            throttle_mark_delete: 0.0,
            retention_time_ms: 0,
            retention_size_mb: 0,
            auto_skip_non_recoverable_data: false,
            max_unacked_ranges_to_persist: 10_000,
            max_unacked_ranges_in_metadata_store: 1_000,
            offload_deletion_lag_ms: FOUR_HOURS.as_millis() as i64,
            offload_auto_trigger_size_threshold_bytes: -1,
            metadata_operations_timeout_secs: 60,
            read_entry_timeout_secs: 120,
            digest_type: DigestType::default(),
            password: Vec::new(),
            offloader: Arc::new(NullLedgerOffloader),
            clock: Arc::new(SystemClock),
        }
    }
}

impl LedgerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to create the ledger when opening one that does not yet exist.
    pub fn create_if_missing(&self) -> bool {
        self.create_if_missing
    }

    pub fn set_create_if_missing(&mut self, create_if_missing: bool) -> &mut Self {
        self.create_if_missing = create_if_missing;
        self
    }

    pub fn max_entries_per_segment(&self) -> u32 {
        self.max_entries_per_segment
    }

    /// Sets the entry count at which the current segment is rolled over.
    pub fn set_max_entries_per_segment(&mut self, max_entries: u32) -> &mut Self {
        self.max_entries_per_segment = max_entries;
        self
    }

    pub fn max_segment_size_mb(&self) -> u32 {
        self.max_segment_size_mb
    }

    /// Sets the size, in megabytes, at which the current segment is rolled over.
    pub fn set_max_segment_size_mb(&mut self, max_size_mb: u32) -> &mut Self {
        self.max_segment_size_mb = max_size_mb;
        self
    }

    pub fn minimum_rollover_time_ms(&self) -> u64 {
        self.minimum_rollover_time_ms
    }

    /// Sets the minimum rollover time for segments in this ledger.
    ///
    /// When greater than zero, a segment will not be rolled over more frequently than the
    /// given time, even once it has reached the maximum entry count or size. Raising this
    /// reduces the rollover churn of ledgers with high write throughput.
    ///
    /// # Errors
    /// - Returns [LedgerError::MinimumRolloverAboveMaximum] if `time` exceeds the current
    ///   maximum rollover time. Neither bound is modified in that case.
    pub fn set_minimum_rollover_time(&mut self, time: Duration) -> Result<&mut Self> {
        let millis = time.as_millis() as u64;

        if millis > self.maximum_rollover_time_ms {
            return Err(LedgerError::MinimumRolloverAboveMaximum);
        }

        self.minimum_rollover_time_ms = millis;
        Ok(self)
    }

    pub fn maximum_rollover_time_ms(&self) -> u64 {
        self.maximum_rollover_time_ms
    }

    /// Sets the maximum rollover time for segments in this ledger.
    ///
    /// A segment that has not been rolled over within the given time is rolled regardless
    /// of its entry count or size. Lowering this forces rollover on ledgers with low
    /// request rates, so recovery never has to replay far back.
    ///
    /// # Errors
    /// - Returns [LedgerError::MaximumRolloverBelowMinimum] if `time` is below the current
    ///   minimum rollover time. Neither bound is modified in that case.
    pub fn set_maximum_rollover_time(&mut self, time: Duration) -> Result<&mut Self> {
        let millis = time.as_millis() as u64;

        if millis < self.minimum_rollover_time_ms {
            return Err(LedgerError::MaximumRolloverBelowMinimum);
        }

        self.maximum_rollover_time_ms = millis;
        Ok(self)
    }

    pub fn ensemble_size(&self) -> u32 {
        self.ensemble_size
    }

    /// Sets the number of storage nodes each data segment is spread across.
    ///
    /// Quorum geometry (`ack_quorum_size <= write_quorum_size <= ensemble_size`) is not
    /// checked here; the replication layer validates it when a segment is opened.
    pub fn set_ensemble_size(&mut self, ensemble_size: u32) -> &mut Self {
        self.ensemble_size = ensemble_size;
        self
    }

    pub fn write_quorum_size(&self) -> u32 {
        self.write_quorum_size
    }

    /// Sets the number of replicas written for each entry. Geometry is not checked here;
    /// see [set_ensemble_size](Self::set_ensemble_size).
    pub fn set_write_quorum_size(&mut self, write_quorum_size: u32) -> &mut Self {
        self.write_quorum_size = write_quorum_size;
        self
    }

    pub fn ack_quorum_size(&self) -> u32 {
        self.ack_quorum_size
    }

    /// Sets the number of acknowledgments required before a write completes. Geometry is
    /// not checked here; see [set_ensemble_size](Self::set_ensemble_size).
    pub fn set_ack_quorum_size(&mut self, ack_quorum_size: u32) -> &mut Self {
        self.ack_quorum_size = ack_quorum_size;
        self
    }

    pub fn metadata_ensemble_size(&self) -> u32 {
        self.metadata_ensemble_size
    }

    pub fn set_metadata_ensemble_size(&mut self, metadata_ensemble_size: u32) -> &mut Self {
        self.metadata_ensemble_size = metadata_ensemble_size;
        self
    }

    pub fn metadata_write_quorum_size(&self) -> u32 {
        self.metadata_write_quorum_size
    }

    pub fn set_metadata_write_quorum_size(&mut self, metadata_write_quorum_size: u32) -> &mut Self {
        self.metadata_write_quorum_size = metadata_write_quorum_size;
        self
    }

    pub fn metadata_ack_quorum_size(&self) -> u32 {
        self.metadata_ack_quorum_size
    }

    pub fn set_metadata_ack_quorum_size(&mut self, metadata_ack_quorum_size: u32) -> &mut Self {
        self.metadata_ack_quorum_size = metadata_ack_quorum_size;
        self
    }

    pub fn metadata_max_entries_per_segment(&self) -> u32 {
        self.metadata_max_entries_per_segment
    }

    pub fn set_metadata_max_entries_per_segment(&mut self, max_entries: u32) -> &mut Self {
        self.metadata_max_entries_per_segment = max_entries;
        self
    }

    pub fn segment_rollover_timeout_secs(&self) -> u32 {
        self.segment_rollover_timeout_secs
    }

    /// Sets the interval, in seconds, after which an idle writable segment is force
    /// rolled. Independent of the minimum/maximum rollover window; kept for
    /// compatibility with existing deployments.
    pub fn set_segment_rollover_timeout_secs(&mut self, timeout: u32) -> &mut Self {
        self.segment_rollover_timeout_secs = timeout;
        self
    }

    pub fn throttle_mark_delete(&self) -> f64 {
        self.throttle_mark_delete
    }

    /// Sets the rate limit on how many mark-delete (consumer position) updates per second
    /// are persisted. A rate of 0 disables the limiter, and is the default.
    ///
    /// # Errors
    /// - Returns [LedgerError::NegativeMarkDeleteRate] if `rate` is negative. The stored
    ///   rate is not modified in that case.
    pub fn set_throttle_mark_delete(&mut self, rate: f64) -> Result<&mut Self> {
        if rate < 0.0 {
            return Err(LedgerError::NegativeMarkDeleteRate);
        }

        self.throttle_mark_delete = rate;
        Ok(self)
    }

    pub fn retention_time_ms(&self) -> i64 {
        self.retention_time_ms
    }

    /// Sets the retention time for this ledger.
    ///
    /// Retention prevents data from being deleted for at least the given time, even when
    /// no consumers exist or every consumer has acknowledged the data.
    ///
    /// A retention time of 0 (the default) disables time-based retention. A negative
    /// retention time retains data indefinitely, bounded only by
    /// [set_retention_size_mb](Self::set_retention_size_mb).
    pub fn set_retention_time(&mut self, time: TimeDelta) -> &mut Self {
        self.retention_time_ms = time.num_milliseconds();
        self
    }

    pub fn retention_size_mb(&self) -> i64 {
        self.retention_size_mb
    }

    /// Sets the maximum retention quota, in megabytes, for this ledger.
    ///
    /// Works in conjunction with [set_retention_time](Self::set_retention_time): once the
    /// quota is exceeded, the oldest retained data is deleted. A quota of 0 deletes data
    /// as soon as it is unreferenced. A quota of -1 is unlimited.
    pub fn set_retention_size_mb(&mut self, size_mb: i64) -> &mut Self {
        self.retention_size_mb = size_mb;
        self
    }

    /// Whether readers skip segments that are no longer recoverable from the ensemble,
    /// instead of stalling on them.
    pub fn auto_skip_non_recoverable_data(&self) -> bool {
        self.auto_skip_non_recoverable_data
    }

    pub fn set_auto_skip_non_recoverable_data(&mut self, auto_skip: bool) -> &mut Self {
        self.auto_skip_non_recoverable_data = auto_skip;
        self
    }

    pub fn max_unacked_ranges_to_persist(&self) -> u32 {
        self.max_unacked_ranges_to_persist
    }

    /// Sets how many unacknowledged-entry ranges of consumer position state are persisted
    /// to segment storage and recovered.
    pub fn set_max_unacked_ranges_to_persist(&mut self, max_ranges: u32) -> &mut Self {
        self.max_unacked_ranges_to_persist = max_ranges;
        self
    }

    pub fn max_unacked_ranges_in_metadata_store(&self) -> u32 {
        self.max_unacked_ranges_in_metadata_store
    }

    /// Sets how many unacknowledged-entry ranges can be stored in the metadata store when
    /// segment storage is unavailable.
    pub fn set_max_unacked_ranges_in_metadata_store(&mut self, max_ranges: u32) -> &mut Self {
        self.max_unacked_ranges_in_metadata_store = max_ranges;
        self
    }

    pub fn offload_deletion_lag_ms(&self) -> i64 {
        self.offload_deletion_lag_ms
    }

    /// Sets the grace period between a segment being offloaded to long-term storage and
    /// its primary replicated copy being deleted.
    ///
    /// Any value is accepted; whether a zero or negative lag means "delete immediately"
    /// is the offload trigger's decision.
    pub fn set_offload_deletion_lag(&mut self, lag: TimeDelta) -> &mut Self {
        self.offload_deletion_lag_ms = lag.num_milliseconds();
        self
    }

    pub fn offload_auto_trigger_size_threshold_bytes(&self) -> i64 {
        self.offload_auto_trigger_size_threshold_bytes
    }

    /// Sets the total ledger size, in bytes, at which offload to long-term storage is
    /// automatically triggered.
    ///
    /// A negative threshold (the default) disables auto-triggering. A threshold of 0
    /// offloads data as soon as possible. Offload is evaluated when a segment rolls, and
    /// only takes effect once an offloader is wired in via
    /// [set_offloader](Self::set_offloader).
    pub fn set_offload_auto_trigger_size_threshold_bytes(&mut self, threshold: i64) -> &mut Self {
        self.offload_auto_trigger_size_threshold_bytes = threshold;
        self
    }

    pub fn metadata_operations_timeout_secs(&self) -> u64 {
        self.metadata_operations_timeout_secs
    }

    /// Sets the deadline, in seconds, for segment create/delete calls against the
    /// metadata store.
    pub fn set_metadata_operations_timeout_secs(&mut self, timeout: u64) -> &mut Self {
        self.metadata_operations_timeout_secs = timeout;
        self
    }

    pub fn read_entry_timeout_secs(&self) -> i64 {
        self.read_entry_timeout_secs
    }

    /// Sets the deadline, in seconds, for entry reads, after which the read completes
    /// with a failure. A timeout of zero or below disables the deadline.
    pub fn set_read_entry_timeout_secs(&mut self, timeout: i64) -> &mut Self {
        self.read_entry_timeout_secs = timeout;
        self
    }

    pub fn digest_type(&self) -> DigestType {
        self.digest_type
    }

    /// Sets the integrity check applied to every replicated write.
    pub fn set_digest_type(&mut self, digest_type: DigestType) -> &mut Self {
        self.digest_type = digest_type;
        self
    }

    /// Returns an owned copy of the authentication secret. Mutating the returned bytes
    /// has no effect on the stored secret.
    pub fn password(&self) -> Vec<u8> {
        self.password.clone()
    }

    /// Sets the authentication secret presented when opening segments, stored as the
    /// UTF-8 bytes of `password`. Never logged.
    pub fn set_password(&mut self, password: &str) -> &mut Self {
        self.password = password.as_bytes().to_vec();
        self
    }

    pub fn offloader(&self) -> Arc<dyn LedgerOffloader> {
        self.offloader.clone()
    }

    /// Replaces the driver used to offload closed segments to long-term storage.
    pub fn set_offloader(&mut self, offloader: Arc<dyn LedgerOffloader>) -> &mut Self {
        self.offloader = offloader;
        self
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// Replaces the time source used for duration-based decisions.
    pub fn set_clock(&mut self, clock: Arc<dyn Clock>) -> &mut Self {
        self.clock = clock;
        self
    }
}
