//! Host wireless-stack capability traits
//!
//! The link logic only needs three things from the platform: pick a device,
//! open it into writable channels, write a chunk. Everything else (GATT,
//! pairing, the picker UI) stays on the host side of this seam, which also
//! makes the link fully testable with in-memory fakes.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TransportError;

/// Bluetooth base UUID expansion of a 16-bit service id
const fn sig_service(short: u32) -> Uuid {
    Uuid::from_u128(0x0000_0000_0000_1000_8000_00805F9B34FB | ((short as u128) << 96))
}

/// Service UUIDs to request from the host device picker, tried in the
/// order the device reports them. Covers the common thermal-printer
/// service variants plus the generic serial profile.
pub const CANDIDATE_SERVICES: [Uuid; 5] = [
    // Thermal printer service
    sig_service(0x18F0),
    // Vendor variants seen on cheap 58mm printers
    sig_service(0xFF00),
    sig_service(0xFFE0),
    Uuid::from_u128(0xE7810A71_73AE_499D_8C15_FAA9AEF0C3F2),
    // Serial Port Profile
    sig_service(0x1101),
];

/// Write capabilities a channel advertises
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelProps {
    /// Acknowledged write
    pub write: bool,
    /// Unacknowledged write; faster, preferred when offered
    pub write_without_response: bool,
}

impl ChannelProps {
    pub fn is_writable(&self) -> bool {
        self.write || self.write_without_response
    }
}

/// One writable characteristic on a connected device
#[async_trait]
pub trait WriteChannel: Send + Sync {
    fn props(&self) -> ChannelProps;

    /// Write one chunk; the chunk either fully reaches the stack or errors
    async fn write(&self, chunk: &[u8]) -> Result<(), TransportError>;
}

/// The channels one service exposes
pub struct ServiceChannels {
    pub service: Uuid,
    pub channels: Vec<Arc<dyn WriteChannel>>,
}

/// A device handle obtained from the picker; can be re-opened after a
/// spontaneous link loss
#[async_trait]
pub trait LinkDevice: Send + Sync {
    fn id(&self) -> String;

    /// Connect and discover services, in the device's reported order
    async fn open(&self) -> Result<Vec<ServiceChannels>, TransportError>;
}

/// The host's device picker
#[async_trait]
pub trait DeviceSelector: Send + Sync {
    /// Prompt for a device advertising one of the allowed services.
    /// `Ok(None)` means the user dismissed the picker.
    async fn select(
        &self,
        allowed: &[Uuid],
    ) -> Result<Option<Arc<dyn LinkDevice>>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sig_service_expansion() {
        assert_eq!(
            sig_service(0x18F0).to_string(),
            "000018f0-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(
            CANDIDATE_SERVICES[4].to_string(),
            "00001101-0000-1000-8000-00805f9b34fb"
        );
    }

    #[test]
    fn test_channel_props_writable() {
        assert!(!ChannelProps::default().is_writable());
        assert!(
            ChannelProps {
                write: true,
                write_without_response: false
            }
            .is_writable()
        );
    }
}
