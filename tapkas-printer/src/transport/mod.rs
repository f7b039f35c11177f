//! Wireless printer link
//!
//! Cheap thermal printers drop bytes when written to at full speed, so the
//! link writes small chunks with a pause between them. One transfer at a
//! time: a send that arrives while another is in flight is rejected with
//! `Busy` instead of being queued behind an unbounded buffer.

mod traits;

pub use traits::{
    CANDIDATE_SERVICES, ChannelProps, DeviceSelector, LinkDevice, ServiceChannels, WriteChannel,
};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::error::TransportError;

/// Chunking parameters for the wireless link
#[derive(Debug, Clone, Copy)]
pub struct LinkConfig {
    /// Bytes per write
    pub chunk_size: usize,
    /// Pause between consecutive chunks
    pub chunk_delay: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            // 20 bytes fits the minimum BLE ATT payload without MTU
            // negotiation; 50ms keeps slow printer buffers from overrunning
            chunk_size: 20,
            chunk_delay: Duration::from_millis(50),
        }
    }
}

/// Link connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Default)]
struct LinkInner {
    device: Option<Arc<dyn LinkDevice>>,
    channel: Option<Arc<dyn WriteChannel>>,
    state: LinkState,
}

/// Connection manager for one wireless printer
///
/// Keeps the picked device handle across link losses so the next send can
/// reconnect without prompting the user again.
pub struct PrinterLink {
    selector: Arc<dyn DeviceSelector>,
    inner: Mutex<LinkInner>,
    /// Held for the duration of one transfer; `try_lock` turns a
    /// concurrent send into `Busy`
    busy: Mutex<()>,
    config: LinkConfig,
}

impl PrinterLink {
    pub fn new(selector: Arc<dyn DeviceSelector>) -> Self {
        Self::with_config(selector, LinkConfig::default())
    }

    pub fn with_config(selector: Arc<dyn DeviceSelector>, config: LinkConfig) -> Self {
        Self {
            selector,
            inner: Mutex::new(LinkInner::default()),
            busy: Mutex::new(()),
            config,
        }
    }

    pub async fn state(&self) -> LinkState {
        self.inner.lock().await.state
    }

    /// Prompt for a device and open a writable channel.
    ///
    /// A dismissed picker surfaces as `DeviceNotSelected` and leaves the
    /// link disconnected; it is not a failure of the link itself.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<(), TransportError> {
        let mut inner = self.inner.lock().await;
        inner.state = LinkState::Connecting;

        let device = match self.selector.select(&CANDIDATE_SERVICES).await {
            Ok(Some(device)) => device,
            Ok(None) => {
                inner.state = LinkState::Disconnected;
                return Err(TransportError::DeviceNotSelected);
            }
            Err(e) => {
                inner.state = LinkState::Disconnected;
                return Err(e);
            }
        };

        match Self::open_channel(&device).await {
            Ok(channel) => {
                info!(device = %device.id(), "printer connected");
                inner.device = Some(device);
                inner.channel = Some(channel);
                inner.state = LinkState::Connected;
                Ok(())
            }
            Err(e) => {
                inner.state = LinkState::Disconnected;
                Err(e)
            }
        }
    }

    /// Send one ESC/POS buffer, chunked and paced.
    ///
    /// A chunk failure aborts the remainder and drops the channel; bytes
    /// already written stay on the printer and are never retried here.
    #[instrument(skip_all, fields(len = bytes.len()))]
    pub async fn send(&self, bytes: &[u8]) -> Result<(), TransportError> {
        let _transfer = self.busy.try_lock().map_err(|_| TransportError::Busy)?;
        let channel = self.ensure_channel().await?;

        let chunks = bytes.chunks(self.config.chunk_size);
        let last = chunks.len().saturating_sub(1);
        for (i, chunk) in chunks.enumerate() {
            if let Err(e) = channel.write(chunk).await {
                let offset = i * self.config.chunk_size;
                warn!(offset, error = %e, "chunk write failed, dropping channel");
                let mut inner = self.inner.lock().await;
                inner.channel = None;
                inner.state = LinkState::Disconnected;
                return Err(TransportError::ChunkWrite {
                    offset,
                    reason: e.to_string(),
                });
            }
            if i < last {
                sleep(self.config.chunk_delay).await;
            }
        }
        debug!("transfer complete");
        Ok(())
    }

    /// Drop the channel and forget the device
    pub async fn disconnect(&self) {
        let mut inner = self.inner.lock().await;
        inner.device = None;
        inner.channel = None;
        inner.state = LinkState::Disconnected;
    }

    /// Spontaneous link loss: drop the channel but keep the device handle
    /// so the next send can reconnect without a new picker prompt
    pub async fn handle_disconnect(&self) {
        let mut inner = self.inner.lock().await;
        inner.channel = None;
        inner.state = LinkState::Disconnected;
    }

    /// Current channel, reconnecting through the cached device if needed
    async fn ensure_channel(&self) -> Result<Arc<dyn WriteChannel>, TransportError> {
        let mut inner = self.inner.lock().await;
        if let Some(channel) = &inner.channel {
            return Ok(channel.clone());
        }
        let Some(device) = inner.device.clone() else {
            return Err(TransportError::NotConnected);
        };

        debug!(device = %device.id(), "reconnecting");
        inner.state = LinkState::Connecting;
        match Self::open_channel(&device).await {
            Ok(channel) => {
                inner.channel = Some(channel.clone());
                inner.state = LinkState::Connected;
                Ok(channel)
            }
            Err(e) => {
                inner.state = LinkState::Disconnected;
                Err(e)
            }
        }
    }

    /// First service with a writable channel wins; within it, a
    /// write-without-response channel is preferred over acknowledged write
    async fn open_channel(
        device: &Arc<dyn LinkDevice>,
    ) -> Result<Arc<dyn WriteChannel>, TransportError> {
        let services = device.open().await?;
        for service in services {
            let mut fallback = None;
            for channel in service.channels {
                let props = channel.props();
                if props.write_without_response {
                    return Ok(channel);
                }
                if props.write && fallback.is_none() {
                    fallback = Some(channel);
                }
            }
            if let Some(channel) = fallback {
                return Ok(channel);
            }
        }
        Err(TransportError::NoWritableChannel)
    }
}
