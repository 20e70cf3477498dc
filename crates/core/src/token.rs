//! Decoding of JSON Web Token payloads without verification
//!
//! Only the payload segment is read. The header and signature are never
//! inspected; the API server remains the trust boundary for these tokens.

use crate::error::{TokenError, TokenResult};
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, general_purpose};
use serde_json::{Map, Value};

/// base64url that accepts payloads with or without trailing `=`
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claims decoded from a token payload
#[derive(Clone, Debug, PartialEq)]
pub struct Claims {
    fields: Map<String, Value>,
}

impl Claims {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The `role` claim, if present and a string
    pub fn role(&self) -> Option<&str> {
        self.get("role").and_then(Value::as_str)
    }

    /// The raw numeric `exp` claim, in whatever unit the issuer used
    pub fn expires_at(&self) -> Option<f64> {
        self.fields.get("exp").and_then(Value::as_f64)
    }

    /// The `sub` claim
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    /// The `name` claim
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.fields.get(claim)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// Decode the payload of a `header.payload.signature` token
pub fn decode_claims(token: &str) -> TokenResult<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::MalformedLayout {
            segments: segments.len(),
        });
    }

    let payload = URL_SAFE_LENIENT.decode(segments[1])?;
    match serde_json::from_slice::<Value>(&payload)? {
        Value::Object(fields) => Ok(Claims::from_map(fields)),
        _ => Err(TokenError::NotAnObject),
    }
}

/// Build an unsigned token around `payload`
///
/// The header is fixed to `{"alg":"none","typ":"JWT"}` and the signature
/// segment is empty. Meant for fixtures and local development only.
pub fn encode_unsigned(payload: &Value) -> String {
    let header = URL_SAFE_LENIENT.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_LENIENT.encode(payload.to_string());
    format!("{header}.{body}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_valid_token() {
        let token = encode_unsigned(&json!({
            "sub": "user-1",
            "name": "Ada",
            "role": "admin",
            "exp": 1_700_000_000
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role(), Some("admin"));
        assert_eq!(claims.subject(), Some("user-1"));
        assert_eq!(claims.name(), Some("Ada"));
        assert_eq!(claims.expires_at(), Some(1_700_000_000.0));
    }

    #[test]
    fn test_decode_accepts_padded_payload() {
        let padded = base64::engine::general_purpose::URL_SAFE.encode(r#"{"role":"user","x":12}"#);
        assert!(padded.ends_with('='));
        let token = format!("e30.{padded}.sig");

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role(), Some("user"));
    }

    #[test]
    fn test_decode_ignores_header_and_signature() {
        let body = URL_SAFE_LENIENT.encode(r#"{"role":"user"}"#);
        let token = format!("not-a-header.{body}.not-a-signature");

        assert_eq!(decode_claims(&token).unwrap().role(), Some("user"));
    }

    #[test]
    fn test_wrong_segment_count() {
        assert_eq!(
            decode_claims("abc"),
            Err(TokenError::MalformedLayout { segments: 1 })
        );
        assert_eq!(
            decode_claims("a.b.c.d"),
            Err(TokenError::MalformedLayout { segments: 4 })
        );
        assert_eq!(
            decode_claims(""),
            Err(TokenError::MalformedLayout { segments: 1 })
        );
    }

    #[test]
    fn test_invalid_base64() {
        let result = decode_claims("e30.!!!.sig");
        assert!(matches!(result, Err(TokenError::InvalidEncoding { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let body = URL_SAFE_LENIENT.encode("not json");
        let result = decode_claims(&format!("e30.{body}.sig"));
        assert!(matches!(result, Err(TokenError::InvalidJson { .. })));
    }

    #[test]
    fn test_payload_must_be_object() {
        let body = URL_SAFE_LENIENT.encode("[1,2,3]");
        assert_eq!(
            decode_claims(&format!("e30.{body}.sig")),
            Err(TokenError::NotAnObject)
        );
    }

    #[test]
    fn test_non_string_role_is_absent() {
        let token = encode_unsigned(&json!({ "role": 7, "exp": "soon" }));
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.role(), None);
        assert_eq!(claims.expires_at(), None);
        assert_eq!(claims.get("role"), Some(&json!(7)));
    }
}
