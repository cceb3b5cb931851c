//! Digest Envelope Adapter
//!
//! Implements `ConfidentialityTransform` by wrapping the payload in a JSON
//! envelope with a hex body and a SHA-256 digest checked on open. This does
//! not encrypt; deployments that need ciphertext plug in their own
//! transform behind the same port.

use serde::{Deserialize, Serialize};
use shared_types::{InterchainError, InterchainResult};

use crate::domain::digest_hex;
use crate::ports::ConfidentialityTransform;

/// Scheme tag written into every envelope.
pub const DIGEST_ENVELOPE_SCHEME: &str = "sha256-hex-envelope";

#[derive(Serialize, Deserialize)]
struct SealedEnvelope {
    scheme: String,
    digest: String,
    body: String,
}

/// Integrity-checked envelope transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigestEnvelopeSealer;

impl ConfidentialityTransform for DigestEnvelopeSealer {
    fn scheme(&self) -> &'static str {
        DIGEST_ENVELOPE_SCHEME
    }

    fn seal(&self, plaintext: &[u8]) -> InterchainResult<Vec<u8>> {
        let envelope = SealedEnvelope {
            scheme: DIGEST_ENVELOPE_SCHEME.to_string(),
            digest: digest_hex(plaintext),
            body: hex::encode(plaintext),
        };
        serde_json::to_vec(&envelope)
            .map_err(|e| InterchainError::collaborator("confidentiality.seal", e.to_string()))
    }

    fn open(&self, sealed: &[u8]) -> InterchainResult<Vec<u8>> {
        let envelope: SealedEnvelope = serde_json::from_slice(sealed)
            .map_err(|_| InterchainError::invalid("invalid sealed payload"))?;
        if envelope.scheme != DIGEST_ENVELOPE_SCHEME {
            return Err(InterchainError::invalid("unsupported sealing scheme"));
        }
        let body = hex::decode(&envelope.body)
            .map_err(|_| InterchainError::invalid("invalid sealed payload"))?;
        if digest_hex(&body) != envelope.digest {
            return Err(InterchainError::invalid("sealed payload integrity check failed"));
        }
        Ok(body)
    }
}
