//! Conversion of accepted responses into caller-facing values.
//!
//! # Design
//! The client is generic over a `Hydrator`, and the hydrator's `Output` type
//! decides what every operation returns. `JsonHydrator` decodes bodies into
//! `Cart`, `CartItem` or `bool`; `RawResponses` hands back the transport
//! response as-is. The mode is fixed when the client is built, so callers
//! know statically which variant they hold. Hydrators only ever see
//! responses that already passed classification.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::HttpResponse;

pub trait Hydrator {
    /// What an operation whose typed result is `T` returns in this mode.
    type Output<T>;

    /// `false` for modes that skip decoding entirely.
    const DECODES: bool;

    /// Turn a success response into the typed value.
    fn hydrate<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Self::Output<T>, ApiError>;

    /// Result of an operation that has no body on success.
    fn acknowledge(&self, response: HttpResponse) -> Self::Output<bool>;
}

/// Decodes JSON bodies with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHydrator;

impl Hydrator for JsonHydrator {
    type Output<T> = T;

    const DECODES: bool = true;

    fn hydrate<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    fn acknowledge(&self, _response: HttpResponse) -> bool {
        true
    }
}

/// Pass-through mode: every operation returns the raw `HttpResponse`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawResponses;

impl Hydrator for RawResponses {
    type Output<T> = HttpResponse;

    const DECODES: bool = false;

    fn hydrate<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        Ok(response)
    }

    fn acknowledge(&self, response: HttpResponse) -> HttpResponse {
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cart;

    #[test]
    fn json_hydrator_decodes_body() {
        let response = HttpResponse::new(
            200,
            r#"{"id":5,"customer":"c","channel":"web","localeCode":"en_US","items":[]}"#,
        );
        let cart = JsonHydrator.hydrate::<Cart>(response).unwrap();
        assert_eq!(cart.id, Some(5));
        assert_eq!(cart.channel, "web");
    }

    #[test]
    fn json_hydrator_reports_bad_json() {
        let err = JsonHydrator
            .hydrate::<Cart>(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn json_hydrator_acknowledges_empty_body() {
        assert!(JsonHydrator.acknowledge(HttpResponse::new(204, "")));
    }

    #[test]
    fn raw_responses_pass_through_unchanged() {
        let response = HttpResponse::new(200, "not even json");
        let out = RawResponses.hydrate::<Cart>(response.clone()).unwrap();
        assert_eq!(out, response);
        assert_eq!(RawResponses.acknowledge(response.clone()), response);
    }
}
