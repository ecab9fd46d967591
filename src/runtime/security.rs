//! Security manager & certificate store.
//!
//! X.509 parsing and signature verification are delegated to `x509-parser`
//! and `ring` — this crate implements none of its own cryptographic
//! primitives, per the Non-goal. What lives here is OCPP-specific: the
//! Manufacturer CA trust anchor, chain validation against it, and the
//! SHA-256 signature check used by the signed firmware update workflow.

use std::sync::Mutex;

use ring::signature::{self, UnparsedPublicKey};
use x509_parser::prelude::*;

use crate::error::CertificateError;

/// Holds the installed Manufacturer CA certificate(s) a signed firmware
/// image's signing certificate must chain to, plus any additional CSMS /
/// CSO trust anchors installed via `InstallCertificate`.
#[derive(Default)]
pub struct CertificateStore {
    trusted_ca_der: Mutex<Vec<Vec<u8>>>,
}

impl CertificateStore {
    pub fn install_trusted_ca(&self, der: Vec<u8>) {
        self.trusted_ca_der.lock().expect("certificate store mutex poisoned").push(der);
    }

    /// Parses `certificate_pem`, checks its validity window, and verifies
    /// that it was signed by one of the installed trusted CAs.
    pub fn verify_chain(&self, certificate_pem: &[u8]) -> Result<(), CertificateError> {
        let (_, pem) = parse_x509_pem(certificate_pem).map_err(|e| CertificateError::Parse(e.to_string()))?;
        let (_, cert) = X509Certificate::from_der(&pem.contents).map_err(|e| CertificateError::Parse(e.to_string()))?;

        if !cert.validity().is_valid() {
            return Err(CertificateError::Expired);
        }

        let trusted = self.trusted_ca_der.lock().expect("certificate store mutex poisoned");
        if trusted.is_empty() {
            // No trust anchor installed yet: nothing to chain to.
            return Err(CertificateError::UntrustedChain);
        }
        for ca_der in trusted.iter() {
            if let Ok((_, ca_cert)) = X509Certificate::from_der(ca_der) {
                if cert.verify_signature(Some(ca_cert.public_key())).is_ok() {
                    return Ok(());
                }
            }
        }
        Err(CertificateError::UntrustedChain)
    }

    /// Verifies a SHA-256/RSA signature over `image` made by the key in
    /// `certificate_pem`. `RSA_PKCS1_2048_8192_SHA256` hashes `image`
    /// internally, so the raw image bytes are passed, not a pre-computed
    /// digest.
    pub fn verify_signature(&self, certificate_pem: &[u8], image: &[u8], signature: &[u8]) -> Result<(), CertificateError> {
        let (_, pem) = parse_x509_pem(certificate_pem).map_err(|e| CertificateError::Parse(e.to_string()))?;
        let (_, cert) = X509Certificate::from_der(&pem.contents).map_err(|e| CertificateError::Parse(e.to_string()))?;
        let public_key_bytes = cert.public_key().subject_public_key.data.to_vec();

        let verifier = UnparsedPublicKey::new(&signature::RSA_PKCS1_2048_8192_SHA256, &public_key_bytes);
        verifier
            .verify(image, signature)
            .map_err(|_| CertificateError::BadSignature)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_chain_without_trust_anchor_is_untrusted() {
        let store = CertificateStore::default();
        let err = store.verify_chain(b"not a real pem").unwrap_err();
        assert!(matches!(err, CertificateError::Parse(_) | CertificateError::UntrustedChain));
    }

    #[test]
    fn malformed_certificate_reports_parse_error() {
        let store = CertificateStore::default();
        let err = store.verify_signature(b"garbage", b"image", b"sig").unwrap_err();
        assert!(matches!(err, CertificateError::Parse(_)));
    }
}
