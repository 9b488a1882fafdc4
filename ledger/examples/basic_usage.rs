use anyhow::Result;
use chrono::TimeDelta;
use managed_ledger::{
    config::{DigestType, LedgerConfig},
    SharedLedgerConfig,
};
use std::{sync::Arc, time::Duration};

fn main() -> Result<()> {
    let mut config = LedgerConfig::new();
    config
        .set_ensemble_size(5)
        .set_write_quorum_size(3)
        .set_ack_quorum_size(2)
        .set_digest_type(DigestType::Crc32C)
        .set_password("ledger-secret")
        .set_retention_time(TimeDelta::days(2))
        .set_retention_size_mb(10_240)
        .set_minimum_rollover_time(Duration::from_secs(10 * 60))?
        .set_maximum_rollover_time(Duration::from_secs(2 * 60 * 60))?;

    let config: SharedLedgerConfig = Arc::new(config);

    println!(
        "segments roll over after at most {}ms, data retained for {}ms",
        config.maximum_rollover_time_ms(),
        config.retention_time_ms()
    );

    Ok(())
}
