//! Maintenance manager: firmware update (plain and signed), diagnostics/log
//! upload, and the connector-id validation shared by reset/unlock dispatch.
//!
//! Grounded in `MaintenanceManager.cpp`'s stage sequencing: status
//! notifications are emitted at each stage transition up to `Installing`
//! (Downloading/Downloaded/Installing or their *Failed counterparts for
//! plain firmware; Downloading/Downloaded/SignatureVerified/
//! InvalidSignature/InvalidCertificate/Installing for signed firmware), at
//! which point the local file path is handed to
//! [`ChargePointEventsHandler::install_firmware`]. The manager never
//! fabricates the terminal `Installed`/`InstallationFailed` status itself —
//! the application reports that once it has actually installed the image,
//! via `notifyFirmwareUpdateStatus`. Uploads/downloads are delegated to the
//! collaborator [`FileTransfer`] implementation rather than performed
//! in-process — the core never shells out to `curl`/`ftp` itself.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CertificateError, MaintenanceError};
use crate::point_init::firmware_status_notification::FirmwareNotificationStatus;
use crate::runtime::events::ChargePointEventsHandler;
use crate::runtime::security::CertificateStore;

/// Upload/download collaborator. The scheme prefix of `uri` is validated
/// by the manager before delegating, so a malicious or malformed URI can
/// never reach the transfer implementation.
pub trait FileTransfer: Send + Sync {
    fn download(&self, uri: &str, destination: &std::path::Path) -> Result<(), String>;
    fn upload(&self, source: &std::path::Path, uri: &str) -> Result<(), String>;
}

const SUPPORTED_SCHEMES: &[&str] = &["ftp", "ftps", "http", "https"];

fn validate_scheme(uri: &str) -> Result<(), MaintenanceError> {
    let scheme = uri.split("://").next().unwrap_or("");
    if SUPPORTED_SCHEMES.contains(&scheme) {
        Ok(())
    } else {
        Err(MaintenanceError::UnsupportedScheme(scheme.to_string()))
    }
}

/// Emits FirmwareStatusNotification transitions as the manager progresses
/// through a firmware update.
pub trait FirmwareStatusSink: Send + Sync {
    fn notify(&self, status: FirmwareNotificationStatus);
}

/// Emits DiagnosticsStatusNotification transitions during an upload.
pub trait DiagnosticsStatusSink: Send + Sync {
    fn notify(&self, status: crate::point_init::diagnostic_status_notification::DiagnosticsStatus);
}

pub struct MaintenanceManager {
    transfer: Arc<dyn FileTransfer>,
    certificates: Arc<CertificateStore>,
    events: Arc<dyn ChargePointEventsHandler>,
}

impl MaintenanceManager {
    pub fn new(
        transfer: Arc<dyn FileTransfer>,
        certificates: Arc<CertificateStore>,
        events: Arc<dyn ChargePointEventsHandler>,
    ) -> Self {
        MaintenanceManager { transfer, certificates, events }
    }

    /// Drives a plain (unsigned) firmware update to completion, reporting
    /// each stage to `sink`. Retries the download up to `retries` times,
    /// waiting `retry_interval` between attempts.
    pub fn update_firmware(
        &self,
        location: &str,
        destination: &std::path::Path,
        retries: u32,
        retry_interval: Duration,
        sink: &dyn FirmwareStatusSink,
    ) -> Result<(), MaintenanceError> {
        validate_scheme(location)?;
        sink.notify(FirmwareNotificationStatus::Downloading);

        let mut last_error = None;
        for attempt in 0..=retries {
            match self.transfer.download(location, destination) {
                Ok(()) => {
                    last_error = None;
                    break;
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < retries {
                        std::thread::sleep(retry_interval);
                    }
                }
            }
        }
        if let Some(e) = last_error {
            sink.notify(FirmwareNotificationStatus::DownloadFailed);
            return Err(MaintenanceError::Transfer(e));
        }
        sink.notify(FirmwareNotificationStatus::Downloaded);

        sink.notify(FirmwareNotificationStatus::Installing);
        self.events.install_firmware(destination);
        Ok(())
    }

    /// Drives a signed firmware update: after download, the certificate
    /// chain is validated against the installed Manufacturer CA and the
    /// SHA-256 signature over the firmware image is checked before
    /// installation proceeds.
    pub fn update_signed_firmware(
        &self,
        location: &str,
        destination: &std::path::Path,
        signing_certificate_pem: &[u8],
        signature: &[u8],
        sink: &dyn FirmwareStatusSink,
    ) -> Result<(), MaintenanceError> {
        use crate::point_init::firmware_status_notification::FirmwareNotificationStatus as S;

        validate_scheme(location)?;
        sink.notify(S::Downloading);
        if let Err(e) = self.transfer.download(location, destination) {
            sink.notify(S::DownloadFailed);
            return Err(MaintenanceError::Transfer(e));
        }
        sink.notify(S::Downloaded);

        if let Err(e) = self.certificates.verify_chain(signing_certificate_pem) {
            sink.notify(S::InvalidCertificate);
            return Err(e.into());
        }

        let image = std::fs::read(destination).map_err(|e| MaintenanceError::Transfer(e.to_string()))?;
        if let Err(e) = self.certificates.verify_signature(signing_certificate_pem, &image, signature) {
            sink.notify(S::InvalidSignature);
            return Err(e.into());
        }
        sink.notify(S::SignatureVerified);

        sink.notify(S::Installing);
        self.events.install_firmware(destination);
        Ok(())
    }

    /// Uploads a diagnostics/log file, retrying on failure, reporting
    /// progress to `sink`.
    pub fn upload_diagnostics(
        &self,
        source: &std::path::Path,
        location: &str,
        retries: u32,
        retry_interval: Duration,
        sink: &dyn DiagnosticsStatusSink,
    ) -> Result<(), MaintenanceError> {
        use crate::point_init::diagnostic_status_notification::DiagnosticsStatus as S;

        validate_scheme(location)?;
        sink.notify(S::Uploading);

        let mut last_error = None;
        for attempt in 0..=retries {
            match self.transfer.upload(source, location) {
                Ok(()) => {
                    last_error = None;
                    break;
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < retries {
                        std::thread::sleep(retry_interval);
                    }
                }
            }
        }
        if let Some(e) = last_error {
            sink.notify(S::UploadFailed);
            return Err(MaintenanceError::Transfer(e));
        }
        sink.notify(S::Uploaded);
        Ok(())
    }
}

/// Validates that `connector_id` is either `0` (whole station) or a known
/// connector, the check shared by Reset/UnlockConnector dispatch.
pub fn validate_connector_id(connector_id: u32, connector_count: u32) -> Result<(), CertificateError> {
    if connector_id <= connector_count {
        Ok(())
    } else {
        Err(CertificateError::Parse(format!(
            "connector {connector_id} out of range (max {connector_count})"
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::runtime::events::{ChargePointEventsHandler, NullEventsHandler};
    use std::sync::Mutex;

    struct RecordingSink {
        statuses: Mutex<Vec<FirmwareNotificationStatus>>,
    }

    impl FirmwareStatusSink for RecordingSink {
        fn notify(&self, status: FirmwareNotificationStatus) {
            self.statuses.lock().unwrap().push(status);
        }
    }

    struct AlwaysFailsTransfer;
    impl FileTransfer for AlwaysFailsTransfer {
        fn download(&self, _uri: &str, _destination: &std::path::Path) -> Result<(), String> {
            Err("connection refused".into())
        }
        fn upload(&self, _source: &std::path::Path, _uri: &str) -> Result<(), String> {
            Err("connection refused".into())
        }
    }

    struct AlwaysSucceedsTransfer;
    impl FileTransfer for AlwaysSucceedsTransfer {
        fn download(&self, _uri: &str, destination: &std::path::Path) -> Result<(), String> {
            std::fs::write(destination, b"firmware-bytes").map_err(|e| e.to_string())
        }
        fn upload(&self, _source: &std::path::Path, _uri: &str) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn unsupported_scheme_is_rejected_before_any_transfer() {
        let manager = MaintenanceManager::new(Arc::new(AlwaysSucceedsTransfer), Arc::new(CertificateStore::default()), Arc::new(NullEventsHandler));
        let sink = RecordingSink { statuses: Mutex::new(vec![]) };
        let err = manager
            .update_firmware("file:///etc/passwd", std::path::Path::new("/tmp/x"), 0, Duration::from_millis(1), &sink)
            .unwrap_err();
        assert!(matches!(err, MaintenanceError::UnsupportedScheme(_)));
        assert!(sink.statuses.lock().unwrap().is_empty());
    }

    #[test]
    fn failed_download_reports_download_failed_after_retries() {
        let manager = MaintenanceManager::new(Arc::new(AlwaysFailsTransfer), Arc::new(CertificateStore::default()), Arc::new(NullEventsHandler));
        let sink = RecordingSink { statuses: Mutex::new(vec![]) };
        let err = manager
            .update_firmware("https://example.com/fw.bin", std::path::Path::new("/tmp/x"), 2, Duration::from_millis(1), &sink)
            .unwrap_err();
        assert!(matches!(err, MaintenanceError::Transfer(_)));
        let statuses = sink.statuses.lock().unwrap();
        assert_eq!(*statuses, vec![FirmwareNotificationStatus::Downloading, FirmwareNotificationStatus::DownloadFailed]);
    }

    #[test]
    fn successful_plain_update_stops_at_installing_and_invokes_installer_once() {
        struct RecordingEvents {
            installed_paths: Mutex<Vec<std::path::PathBuf>>,
        }
        impl ChargePointEventsHandler for RecordingEvents {
            fn install_firmware(&self, firmware_file: &std::path::Path) {
                self.installed_paths.lock().unwrap().push(firmware_file.to_path_buf());
            }
        }

        let events = Arc::new(RecordingEvents { installed_paths: Mutex::new(vec![]) });
        let manager = MaintenanceManager::new(
            Arc::new(AlwaysSucceedsTransfer),
            Arc::new(CertificateStore::default()),
            Arc::clone(&events) as Arc<dyn ChargePointEventsHandler>,
        );
        let sink = RecordingSink { statuses: Mutex::new(vec![]) };
        let dest = std::env::temp_dir().join(format!("ocpp-fw-{}.bin", uuid::Uuid::new_v4()));
        manager
            .update_firmware("https://example.com/fw.bin", &dest, 0, Duration::from_millis(1), &sink)
            .unwrap();
        let statuses = sink.statuses.lock().unwrap();
        assert_eq!(
            *statuses,
            vec![
                FirmwareNotificationStatus::Downloading,
                FirmwareNotificationStatus::Downloaded,
                FirmwareNotificationStatus::Installing,
            ]
        );
        assert_eq!(*events.installed_paths.lock().unwrap(), vec![dest.clone()]);
        std::fs::remove_file(&dest).ok();
    }

    #[test]
    fn connector_id_zero_is_always_valid() {
        assert!(validate_connector_id(0, 0).is_ok());
    }

    #[test]
    fn connector_id_beyond_count_is_rejected() {
        assert!(validate_connector_id(3, 2).is_err());
    }
}
