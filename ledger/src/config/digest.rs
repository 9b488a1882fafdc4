/// The integrity check applied to every entry written to a replicated segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigestType {
    /// HMAC over the entry, keyed with the configured password.
    Mac,
    /// Software CRC-32.
    Crc32,
    /// Hardware-accelerated CRC-32C.
    #[default]
    Crc32C,
    /// No verification. Only suitable for throwaway data.
    Dummy,
}
