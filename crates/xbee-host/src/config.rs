//! Engine configuration.

/// Tunables for one receive engine instance.
///
/// Both channels are broadcast channels: capacity bounds how far a slow
/// subscriber may fall behind before it starts missing messages.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Capacity of the decoded-frame channel.
    pub frame_channel_capacity: usize,
    /// Capacity of the link-event channel.
    pub event_channel_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            frame_channel_capacity: 64,
            event_channel_capacity: 16,
        }
    }
}
