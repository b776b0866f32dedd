//! Packet monitor feed

/// Live packet statistics
pub trait PacketSource {
    /// Channel being monitored
    fn channel(&self) -> u8;

    /// Packets counted during the last second
    fn packets_per_second(&self) -> u32;

    /// Recent per-second counts, oldest first
    fn history(&self) -> &[u32];
}
