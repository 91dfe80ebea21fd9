//! Domain shapes and request payloads for the cart and checkout endpoints.
//!
//! # Design
//! `Cart` and `CartItem` mirror what the server returns and are never edited
//! client-side; a fresh view comes from `get_cart`. They are defined
//! independently from the mock-server crate and the end-to-end tests catch
//! schema drift. Payload structs borrow from the caller so building a request
//! does not clone the arguments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Required keys of a shipping or billing address, in validation order.
pub const REQUIRED_ADDRESS_FIELDS: [&str; 6] = [
    "firstName",
    "lastName",
    "city",
    "postcode",
    "street",
    "countryCode",
];

/// A cart as held by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub customer: String,
    pub channel: String,
    pub locale_code: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// One line of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub variant: String,
    pub quantity: u32,
}

/// A shipping or billing address: a flat mapping from field name to value.
///
/// Extra keys beyond `REQUIRED_ADDRESS_FIELDS` (e.g. `phoneNumber`) are sent
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(BTreeMap<String, String>);

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Address {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Body of `POST /api/v1/carts/`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCart<'a> {
    pub customer: &'a str,
    pub channel: &'a str,
    pub locale_code: &'a str,
}

/// Body of `POST /api/v1/carts/{cartId}/items/`.
#[derive(Debug, Clone, Serialize)]
pub struct AddItem<'a> {
    pub variant: &'a str,
    pub quantity: u32,
}

/// Body of `PUT /api/v1/checkouts/addressing/{cartId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Addressing<'a> {
    pub shipping_address: &'a Address,
    pub different_billing_address: bool,
    pub billing_address: &'a Address,
}
