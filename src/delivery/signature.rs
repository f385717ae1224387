use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("workspace key is not valid base64: {0}")]
    InvalidKey(#[from] base64::DecodeError),
}

/// Build the authorization token for one Data Collector API request.
///
/// The canonical string is
/// `METHOD\nCONTENT_LENGTH\nCONTENT_TYPE\nx-ms-date:DATE\nRESOURCE`,
/// signed with HMAC-SHA256 keyed by the base64-decoded workspace key.
/// Deterministic for fixed inputs; the only failure is a malformed key.
pub fn build_signature(
    customer_id: &str,
    shared_key: &str,
    date: &str,
    content_length: usize,
    method: &str,
    content_type: &str,
    resource: &str,
) -> Result<String, SignatureError> {
    let string_to_hash =
        format!("{method}\n{content_length}\n{content_type}\nx-ms-date:{date}\n{resource}");

    let decoded_key = BASE64.decode(shared_key)?;

    let mut mac = HmacSha256::new_from_slice(&decoded_key)
        .expect("HMAC accepts keys of any length");
    mac.update(string_to_hash.as_bytes());
    let encoded_hash = BASE64.encode(mac.finalize().into_bytes());

    Ok(format!("SharedKey {customer_id}:{encoded_hash}"))
}
