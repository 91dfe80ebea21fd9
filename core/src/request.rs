//! Request construction for each operation.
//!
//! Arguments are assumed to have passed `validate` already.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{AddItem, Address, Addressing, CreateCart};

fn without_body(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<B: Serialize>(method: HttpMethod, path: String, body: &B) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

pub(crate) fn build_get_cart(id: u64) -> HttpRequest {
    without_body(HttpMethod::Get, format!("/api/v1/carts/{id}"))
}

pub(crate) fn build_create_cart(
    customer: &str,
    channel: &str,
    locale_code: &str,
) -> Result<HttpRequest, ApiError> {
    let body = CreateCart {
        customer,
        channel,
        locale_code,
    };
    with_json(HttpMethod::Post, "/api/v1/carts/".to_string(), &body)
}

pub(crate) fn build_add_item(cart_id: u64, variant: &str, quantity: u32) -> Result<HttpRequest, ApiError> {
    let body = AddItem { variant, quantity };
    with_json(
        HttpMethod::Post,
        format!("/api/v1/carts/{cart_id}/items/"),
        &body,
    )
}

pub(crate) fn build_put_address(
    cart_id: u64,
    shipping: &Address,
    billing: Option<&Address>,
) -> Result<HttpRequest, ApiError> {
    let empty = Address::new();
    let body = Addressing {
        shipping_address: shipping,
        different_billing_address: billing.is_some(),
        billing_address: billing.unwrap_or(&empty),
    };
    with_json(
        HttpMethod::Put,
        format!("/api/v1/checkouts/addressing/{cart_id}"),
        &body,
    )
}
