//! Print service
//!
//! Ties the pipeline together: model -> directives -> ESC/POS -> link.
//! The ledger has already committed by the time anything reaches this
//! service, so a failed print loses paper, never money. Failures are
//! surfaced to the operator and never retried automatically.

use std::sync::Arc;

use tapkas_ledger::models::{CompanyDetails, SalesSession, Transaction};
use tracing::{info, instrument, warn};

use crate::PAPER_WIDTH;
use crate::error::PrintResult;
use crate::escpos::{EscPosEncoder, drawer_kick};
use crate::format::{ReceiptOptions, ReceiptRenderer, SessionReportRenderer};
use crate::preview;
use crate::transport::PrinterLink;

/// High-level printing entry point
pub struct PrintService {
    link: Arc<PrinterLink>,
    encoder: EscPosEncoder,
    width: usize,
}

impl PrintService {
    pub fn new(link: Arc<PrinterLink>) -> Self {
        Self::with_width(link, PAPER_WIDTH)
    }

    pub fn with_width(link: Arc<PrinterLink>, width: usize) -> Self {
        Self {
            link,
            encoder: EscPosEncoder::new(width),
            width,
        }
    }

    /// Print a customer receipt for a completed transaction
    #[instrument(skip_all, fields(ticket = %transaction.id))]
    pub async fn print_receipt(
        &self,
        transaction: &Transaction,
        company: &CompanyDetails,
        options: &ReceiptOptions,
    ) -> PrintResult<()> {
        let directives =
            ReceiptRenderer::new(transaction, company, self.width).render(options);
        let bytes = self.encoder.encode(&directives);
        if let Err(e) = self.link.send(&bytes).await {
            warn!(error = %e, "receipt print failed");
            return Err(e.into());
        }
        info!(len = bytes.len(), "receipt printed");
        Ok(())
    }

    /// Print a session Z-report
    #[instrument(skip_all, fields(session_id = session.id))]
    pub async fn print_report(
        &self,
        session: &SalesSession,
        company: &CompanyDetails,
    ) -> PrintResult<()> {
        let directives = SessionReportRenderer::new(session, company, self.width).render();
        let bytes = self.encoder.encode(&directives);
        if let Err(e) = self.link.send(&bytes).await {
            warn!(error = %e, "report print failed");
            return Err(e.into());
        }
        info!(len = bytes.len(), "report printed");
        Ok(())
    }

    /// Fire the cash drawer pulse
    #[instrument(skip(self))]
    pub async fn open_drawer(&self) -> PrintResult<()> {
        self.link.send(&drawer_kick()).await?;
        Ok(())
    }

    /// Receipt as display text; never touches the transport
    pub fn preview_receipt(
        &self,
        transaction: &Transaction,
        company: &CompanyDetails,
        options: &ReceiptOptions,
    ) -> String {
        let directives =
            ReceiptRenderer::new(transaction, company, self.width).render(options);
        preview::render_text(&directives, self.width)
    }

    /// Z-report as display text; never touches the transport
    pub fn preview_report(&self, session: &SalesSession, company: &CompanyDetails) -> String {
        let directives = SessionReportRenderer::new(session, company, self.width).render();
        preview::render_text(&directives, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use tapkas_ledger::{Cart, PaymentMethod, Product, VatRate, checkout};
    use uuid::Uuid;

    use crate::error::{PrintError, TransportError};
    use crate::transport::{
        CANDIDATE_SERVICES, ChannelProps, DeviceSelector, LinkDevice, ServiceChannels,
        WriteChannel,
    };

    struct SinkChannel {
        bytes: StdMutex<Vec<u8>>,
    }

    #[async_trait]
    impl WriteChannel for SinkChannel {
        fn props(&self) -> ChannelProps {
            ChannelProps {
                write: false,
                write_without_response: true,
            }
        }

        async fn write(&self, chunk: &[u8]) -> Result<(), TransportError> {
            self.bytes.lock().unwrap().extend_from_slice(chunk);
            Ok(())
        }
    }

    struct SinkDevice {
        channel: Arc<SinkChannel>,
    }

    #[async_trait]
    impl LinkDevice for SinkDevice {
        fn id(&self) -> String {
            "sink".into()
        }

        async fn open(&self) -> Result<Vec<ServiceChannels>, TransportError> {
            Ok(vec![ServiceChannels {
                service: CANDIDATE_SERVICES[0],
                channels: vec![self.channel.clone()],
            }])
        }
    }

    struct SinkSelector {
        device: Arc<SinkDevice>,
    }

    #[async_trait]
    impl DeviceSelector for SinkSelector {
        async fn select(
            &self,
            _allowed: &[Uuid],
        ) -> Result<Option<Arc<dyn LinkDevice>>, TransportError> {
            Ok(Some(self.device.clone()))
        }
    }

    async fn connected_service() -> (PrintService, Arc<SinkChannel>) {
        let channel = Arc::new(SinkChannel {
            bytes: StdMutex::new(Vec::new()),
        });
        let device = Arc::new(SinkDevice {
            channel: channel.clone(),
        });
        let link = Arc::new(PrinterLink::new(Arc::new(SinkSelector { device })));
        link.connect().await.unwrap();
        (PrintService::new(link), channel)
    }

    fn company() -> CompanyDetails {
        CompanyDetails {
            name: "Cafe De Kraai".into(),
            footer_message: "Bedankt!".into(),
            ..Default::default()
        }
    }

    fn pils_tx() -> Transaction {
        let product = Product {
            id: 1,
            name: "Pils".into(),
            price: Decimal::new(250, 2),
            vat_rate: VatRate::Standard,
            color: "#E8A33D".into(),
            stock: None,
            updated_at: 0,
        };
        let cart = Cart::new().add_line(&product);
        checkout(&cart, 1, PaymentMethod::Cash, 1000, None).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_print_receipt_sends_escpos() {
        let (service, channel) = connected_service().await;
        service
            .print_receipt(&pils_tx(), &company(), &ReceiptOptions::default())
            .await
            .unwrap();

        let bytes = channel.bytes.lock().unwrap().clone();
        assert_eq!(&bytes[..2], [0x1B, 0x40]);
        assert_eq!(&bytes[bytes.len() - 4..], [0x1D, 0x56, 0x41, 0x00]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_drawer_sends_pulse() {
        let (service, channel) = connected_service().await;
        service.open_drawer().await.unwrap();
        assert_eq!(
            channel.bytes.lock().unwrap().clone(),
            vec![0x1B, 0x70, 0x00, 0x19, 0xFA]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_print_report_sends_escpos() {
        let (service, channel) = connected_service().await;
        let mut session = SalesSession::open(1, Decimal::new(5000, 2), 0).unwrap();
        session.record_transaction(pils_tx()).unwrap();

        service.print_report(&session, &company()).await.unwrap();
        assert!(!channel.bytes.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_surfaces() {
        let link = Arc::new(PrinterLink::new(Arc::new(NoneSelector)));
        let service = PrintService::new(link);
        let err = service
            .print_receipt(&pils_tx(), &company(), &ReceiptOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PrintError::Transport(TransportError::NotConnected)
        ));
    }

    struct NoneSelector;

    #[async_trait]
    impl DeviceSelector for NoneSelector {
        async fn select(
            &self,
            _allowed: &[Uuid],
        ) -> Result<Option<Arc<dyn LinkDevice>>, TransportError> {
            Ok(None)
        }
    }

    #[test]
    fn test_preview_needs_no_transport() {
        let link = Arc::new(PrinterLink::new(Arc::new(NoneSelector)));
        let service = PrintService::new(link);

        let text = service.preview_receipt(&pils_tx(), &company(), &ReceiptOptions::default());
        assert!(text.contains("Cafe De Kraai"));
        assert!(text.contains("TOTAAL"));
        assert!(text.contains("2,50 €"));
    }
}
