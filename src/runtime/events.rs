//! The application-facing event/callback surface.
//!
//! Grounded in `IChargePointEventsHandler.h`: the runtime never decides
//! station-specific policy (whether to accept a remote start, where to
//! fetch a meter reading, which CA to trust) itself — it calls out to a
//! single implementation of [`ChargePointEventsHandler`] supplied by the
//! embedding application. [`NullEventsHandler`] is the inert default used
//! by tests and by any manager exercised without a real station attached.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::common::data_transfer::DataTransferStatus;
use crate::common::meter_value::MeterValue;
use crate::runtime::status_manager::RegistrationStatus;
use crate::server_init::{ChangeAvailabilityType, ChangeAvailabilityStatus, ResetType, UnlockConnectorStatus};

/// Type of CA certificate referenced by the security extension callbacks,
/// matching `CertificateUseEnumType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateUse {
    CentralSystemRootCertificate,
    ManufacturerRootCertificate,
}

/// Result of installing a CA certificate, matching `CertificateStatusEnumType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateStatus {
    Accepted,
    Rejected,
    Failed,
}

/// Result of a `DeleteCertificate` request, matching `DeleteCertificateStatusEnumType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCertificateStatus {
    Accepted,
    Failed,
    NotFound,
}

/// Hash algorithm identifying a certificate in `DeleteCertificate`/
/// `GetInstalledCertificateIds`, matching `HashAlgorithmEnumType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

/// Type of log requested by `GetLog`, matching `LogEnumType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    DiagnosticsLog,
    SecurityLog,
}

/// An installed certificate's identifying hash triple, as returned by
/// `getInstalledCertificates`.
#[derive(Debug, Clone)]
pub struct InstalledCertificate {
    pub hash_algorithm: HashAlgorithm,
    pub issuer_name_hash: String,
    pub issuer_key_hash: String,
    pub serial_number: String,
    pub certificate_pem: Vec<u8>,
}

/// The callback surface a Charge Point application implements to supply
/// station-specific policy and I/O. Every method has a meaningful default
/// supplied by [`NullEventsHandler`], so an application overrides only the
/// subset it cares about.
#[allow(unused_variables)]
pub trait ChargePointEventsHandler: Send + Sync {
    /// Called when the first attempt to connect to the Central System has
    /// failed. `status` is the previous registration status — if
    /// `Accepted`, some offline operations are still allowed.
    fn connection_failed(&self, status: RegistrationStatus) {}

    /// Called whenever the connection to the Central System is
    /// established or lost.
    fn connection_state_changed(&self, is_connected: bool) {}

    /// Called with the Central System's response to BootNotification.
    fn boot_notification(&self, status: RegistrationStatus, datetime: DateTime<Utc>) {}

    /// Called when the Central System's clock must be adopted.
    fn datetime_received(&self, datetime: DateTime<Utc>) {}

    /// Called for a ChangeAvailability request. `connector_id == 0` means
    /// the whole station. The default accepts every request.
    fn change_availability_requested(&self, connector_id: u32, availability: ChangeAvailabilityType) -> ChangeAvailabilityStatus {
        ChangeAvailabilityStatus::Accepted
    }

    /// Returns the meter value in Wh to stamp on a transaction's start or
    /// stop, for the `MeterStart`/`MeterStop` fields. Signed per the
    /// offline placeholder id convention used elsewhere in this crate.
    fn tx_start_stop_meter_value(&self, connector_id: u32) -> i64 {
        0
    }

    /// Called when a data transfer request is received from the Central
    /// System. Returns the response status and optional response data.
    fn data_transfer_requested(&self, vendor_id: &str, message_id: Option<&str>, request_data: Option<&str>) -> (DataTransferStatus, Option<String>) {
        (DataTransferStatus::UnknownVendorId, None)
    }

    /// Retrieves a meter value sample for `connector_id`, used for
    /// sampled/clock-aligned MeterValues.req construction.
    fn meter_value(&self, connector_id: u32) -> Option<MeterValue> {
        None
    }

    /// Called for a RemoteStartTransaction request. Returns whether it is
    /// accepted.
    fn remote_start_transaction_requested(&self, connector_id: u32, id_tag: &str) -> bool {
        false
    }

    /// Called for a RemoteStopTransaction request. Returns whether it is
    /// accepted.
    fn remote_stop_transaction_requested(&self, connector_id: u32) -> bool {
        false
    }

    /// Called when a transaction started offline is subsequently
    /// deauthorized once connectivity returns.
    fn transaction_deauthorized(&self, connector_id: u32) {}

    /// Called for a Reset request. Returns whether it is accepted.
    fn reset_requested(&self, reset_type: &ResetType) -> bool {
        true
    }

    /// Called for an UnlockConnector request.
    fn unlock_connector_requested(&self, connector_id: u32) -> UnlockConnectorStatus {
        UnlockConnectorStatus::NotSupported
    }

    /// Called on a diagnostics request; returns the path to the generated
    /// diagnostics file, or `None` if nothing is available.
    fn get_diagnostics(&self, start_time: Option<DateTime<Utc>>, stop_time: Option<DateTime<Utc>>) -> Option<std::path::PathBuf> {
        None
    }

    /// Called on an UpdateFirmware request; returns the destination path
    /// to download the new firmware image to.
    fn update_firmware_requested(&self) -> std::path::PathBuf {
        std::path::PathBuf::from("/tmp/firmware.bin")
    }

    /// Called once a downloaded firmware image has passed its checks and
    /// is ready to be installed. Installation may continue asynchronously.
    fn install_firmware(&self, firmware_file: &Path) {}

    /// Called when a CA certificate has been received and must be
    /// installed.
    fn ca_certificate_received(&self, use_type: CertificateUse, certificate_pem: &[u8]) -> CertificateStatus {
        CertificateStatus::Rejected
    }

    /// Called when a Charge Point certificate has been received and must
    /// be installed.
    fn charge_point_certificate_received(&self, certificate_pem: &[u8]) -> bool {
        false
    }

    /// Called to delete an installed CA certificate identified by hash.
    fn delete_certificate(&self, hash_algorithm: HashAlgorithm, issuer_name_hash: &str, issuer_key_hash: &str, serial_number: &str) -> DeleteCertificateStatus {
        DeleteCertificateStatus::NotFound
    }

    /// Called to generate a CSR in PEM format for the Central System to
    /// sign into a Charge Point certificate.
    fn generate_csr(&self) -> String {
        String::new()
    }

    /// Returns the installed CA certificates of the given use.
    fn installed_certificates(&self, use_type: CertificateUse) -> Vec<InstalledCertificate> {
        Vec::new()
    }

    /// Called on a GetLog request; returns the path to the generated log
    /// file, or `None` if nothing is available.
    fn get_log(&self, log_type: LogType, start_time: Option<DateTime<Utc>>, stop_time: Option<DateTime<Utc>>) -> Option<std::path::PathBuf> {
        None
    }

    /// Whether at least one Central System root certificate is installed.
    fn has_central_system_ca_certificate_installed(&self) -> bool {
        false
    }

    /// Whether at least one Charge Point certificate is installed.
    fn has_charge_point_certificate_installed(&self) -> bool {
        false
    }
}

/// The inert default: rejects everything that defaults to rejection,
/// accepts everything that defaults to acceptance, and otherwise does
/// nothing. Used by tests and by managers exercised without a real
/// application attached.
#[derive(Default)]
pub struct NullEventsHandler;

impl ChargePointEventsHandler for NullEventsHandler {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null_handler_accepts_change_availability() {
        let handler = NullEventsHandler;
        assert_eq!(
            handler.change_availability_requested(0, ChangeAvailabilityType::Operative),
            ChangeAvailabilityStatus::Accepted
        );
    }

    #[test]
    fn null_handler_rejects_remote_start() {
        let handler = NullEventsHandler;
        assert!(!handler.remote_start_transaction_requested(1, "TAG"));
    }

    #[test]
    fn null_handler_accepts_reset() {
        let handler = NullEventsHandler;
        assert!(handler.reset_requested(&ResetType::Soft));
    }

    #[test]
    fn null_handler_has_no_installed_certificates() {
        let handler = NullEventsHandler;
        assert!(!handler.has_central_system_ca_certificate_installed());
        assert!(handler.installed_certificates(CertificateUse::ManufacturerRootCertificate).is_empty());
    }
}
