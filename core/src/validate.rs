//! Argument checks that run before any request is built.
//!
//! Each function reports the first empty field in declaration order.

use crate::error::ApiError;
use crate::types::{Address, REQUIRED_ADDRESS_FIELDS};

fn require_id(field: &'static str, value: u64) -> Result<(), ApiError> {
    if value == 0 {
        return Err(ApiError::invalid(field, "cannot be empty"));
    }
    Ok(())
}

fn require_str(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::invalid(field, "cannot be empty"));
    }
    Ok(())
}

fn require_address(field: &'static str, label: &str, address: &Address) -> Result<(), ApiError> {
    if address.is_empty() {
        return Err(ApiError::invalid(field, "cannot be empty"));
    }
    for required in REQUIRED_ADDRESS_FIELDS {
        if address.get(required).map_or(true, str::is_empty) {
            return Err(ApiError::invalid(
                required,
                format!("field missing in {label} address"),
            ));
        }
    }
    Ok(())
}

pub(crate) fn get_cart(id: u64) -> Result<(), ApiError> {
    require_id("id", id)
}

pub(crate) fn create_cart(customer: &str, channel: &str, locale_code: &str) -> Result<(), ApiError> {
    require_str("customer", customer)?;
    require_str("channel", channel)?;
    require_str("localeCode", locale_code)
}

pub(crate) fn add_item(cart_id: u64, variant: &str, quantity: u32) -> Result<(), ApiError> {
    require_id("cartId", cart_id)?;
    require_str("variant", variant)?;
    if quantity == 0 {
        return Err(ApiError::invalid("quantity", "cannot be empty"));
    }
    Ok(())
}

pub(crate) fn put_address(
    cart_id: u64,
    shipping: &Address,
    billing: Option<&Address>,
) -> Result<(), ApiError> {
    require_id("cartId", cart_id)?;
    require_address("shippingAddress", "shipping", shipping)?;
    if let Some(billing) = billing {
        require_address("billingAddress", "billing", billing)?;
    }
    Ok(())
}
