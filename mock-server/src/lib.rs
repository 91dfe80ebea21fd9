use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const ADDRESS_FIELDS: [&str; 6] = [
    "firstName",
    "lastName",
    "city",
    "postcode",
    "street",
    "countryCode",
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: u64,
    pub customer: String,
    pub channel: String,
    pub locale_code: String,
    pub items: Vec<CartItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub id: u64,
    pub variant: String,
    pub quantity: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCart {
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub locale_code: String,
}

#[derive(Deserialize)]
pub struct AddItem {
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Addressing {
    #[serde(default)]
    pub shipping_address: HashMap<String, String>,
    #[serde(default)]
    pub different_billing_address: bool,
    #[serde(default)]
    pub billing_address: HashMap<String, String>,
}

#[derive(Default)]
pub struct Store {
    next_cart_id: u64,
    next_item_id: u64,
    carts: HashMap<u64, Cart>,
    addressing: HashMap<u64, Addressing>,
}

impl Store {
    pub fn addressing(&self, cart_id: u64) -> Option<&Addressing> {
        self.addressing.get(&cart_id)
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Failure responses in the shape Sylius uses for its API errors.
pub enum Rejection {
    NotFound,
    Validation(Vec<String>),
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self {
            Rejection::NotFound => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"code": 404, "message": "Not Found"})),
            )
                .into_response(),
            Rejection::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "code": 400,
                    "message": "Validation Failed",
                    "errors": errors,
                })),
            )
                .into_response(),
        }
    }
}

pub fn app() -> Router {
    app_with_store(Db::default())
}

/// Router over a caller-owned store, so tests can inspect server state.
pub fn app_with_store(db: Db) -> Router {
    Router::new()
        .route("/api/v1/carts/", post(create_cart))
        .route("/api/v1/carts/{id}", get(get_cart))
        .route("/api/v1/carts/{cart_id}/items/", post(add_item))
        .route("/api/v1/checkouts/addressing/{cart_id}", put(put_address))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn missing<'a>(fields: impl IntoIterator<Item = (&'a str, bool)>) -> Vec<String> {
    fields
        .into_iter()
        .filter(|(_, empty)| *empty)
        .map(|(name, _)| format!("{name} should not be blank"))
        .collect()
}

fn missing_address_fields(prefix: &str, address: &HashMap<String, String>) -> Vec<String> {
    missing(
        ADDRESS_FIELDS
            .iter()
            .map(|f| (*f, address.get(*f).map_or(true, String::is_empty))),
    )
    .into_iter()
    .map(|e| format!("{prefix}.{e}"))
    .collect()
}

async fn create_cart(
    State(db): State<Db>,
    Json(input): Json<CreateCart>,
) -> Result<(StatusCode, Json<Cart>), Rejection> {
    let errors = missing([
        ("customer", input.customer.is_empty()),
        ("channel", input.channel.is_empty()),
        ("localeCode", input.locale_code.is_empty()),
    ]);
    if !errors.is_empty() {
        return Err(Rejection::Validation(errors));
    }

    let mut store = db.write().await;
    store.next_cart_id += 1;
    let cart = Cart {
        id: store.next_cart_id,
        customer: input.customer,
        channel: input.channel,
        locale_code: input.locale_code,
        items: Vec::new(),
    };
    store.carts.insert(cart.id, cart.clone());
    tracing::info!(cart_id = cart.id, "cart created");
    Ok((StatusCode::CREATED, Json(cart)))
}

async fn get_cart(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Cart>, Rejection> {
    let store = db.read().await;
    store.carts.get(&id).cloned().map(Json).ok_or(Rejection::NotFound)
}

async fn add_item(
    State(db): State<Db>,
    Path(cart_id): Path<u64>,
    Json(input): Json<AddItem>,
) -> Result<(StatusCode, Json<CartItem>), Rejection> {
    let mut store = db.write().await;
    if !store.carts.contains_key(&cart_id) {
        return Err(Rejection::NotFound);
    }
    let errors = missing([
        ("variant", input.variant.is_empty()),
        ("quantity", input.quantity == 0),
    ]);
    if !errors.is_empty() {
        return Err(Rejection::Validation(errors));
    }

    store.next_item_id += 1;
    let item = CartItem {
        id: store.next_item_id,
        variant: input.variant,
        quantity: input.quantity,
    };
    if let Some(cart) = store.carts.get_mut(&cart_id) {
        cart.items.push(item.clone());
    }
    tracing::info!(cart_id, item_id = item.id, "item added");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn put_address(
    State(db): State<Db>,
    Path(cart_id): Path<u64>,
    Json(input): Json<Addressing>,
) -> Result<StatusCode, Rejection> {
    let mut store = db.write().await;
    if !store.carts.contains_key(&cart_id) {
        return Err(Rejection::NotFound);
    }
    let mut errors = missing_address_fields("shippingAddress", &input.shipping_address);
    if input.different_billing_address {
        errors.extend(missing_address_fields("billingAddress", &input.billing_address));
    }
    if !errors.is_empty() {
        return Err(Rejection::Validation(errors));
    }

    store.addressing.insert(cart_id, input);
    tracing::info!(cart_id, "checkout addressed");
    Ok(StatusCode::NO_CONTENT)
}
