//! Operation facade for carts and checkout addressing.
//!
//! # Design
//! Every operation runs the same pipeline: validate arguments, build the
//! request, send it through the `Transport`, classify the status against the
//! operation's rule, then hydrate. Validation failures return before the
//! transport is touched. Nothing is retried and no error is swallowed.
//! `SyliusClient` holds no mutable state, so a shared reference can serve
//! concurrent callers if the transport allows it.

use tracing::debug;

use crate::classify::Operation;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::hydrate::{Hydrator, JsonHydrator, RawResponses};
use crate::request;
use crate::types::{Address, Cart, CartItem};
use crate::validate;

/// Client for the cart and checkout endpoints.
///
/// `H` selects what operations return: typed values with `JsonHydrator`
/// (the default) or the untouched `HttpResponse` with `RawResponses`.
#[derive(Debug, Clone)]
pub struct SyliusClient<T, H = JsonHydrator> {
    transport: T,
    hydrator: H,
}

impl<T: Transport> SyliusClient<T, JsonHydrator> {
    /// Typed client: operations return `Cart`, `CartItem` and `bool`.
    pub fn new(transport: T) -> Self {
        Self::with_hydrator(transport, JsonHydrator)
    }
}

impl<T: Transport> SyliusClient<T, RawResponses> {
    /// Pass-through client: accepted responses are returned undecoded.
    pub fn raw(transport: T) -> Self {
        Self::with_hydrator(transport, RawResponses)
    }
}

#[cfg(feature = "ureq")]
impl SyliusClient<crate::transport::UreqTransport, JsonHydrator> {
    pub fn connect(config: &crate::config::TransportConfig) -> Self {
        Self::new(crate::transport::UreqTransport::new(config))
    }
}

fn rejected(operation: Operation, err: ApiError) -> ApiError {
    if let ApiError::InvalidArgument { field, .. } = &err {
        debug!(operation = operation.name(), field, "argument rejected");
    }
    err
}

impl<T: Transport, H: Hydrator> SyliusClient<T, H> {
    pub fn with_hydrator(transport: T, hydrator: H) -> Self {
        Self {
            transport,
            hydrator,
        }
    }

    /// Whether operations decode bodies or return raw responses.
    pub fn is_hydrating(&self) -> bool {
        H::DECODES
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn execute(&self, operation: Operation, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(
            operation = operation.name(),
            method = request.method.as_str(),
            path = %request.path,
            "dispatching"
        );
        let response = self.transport.send(&request)?;
        operation.check(response)
    }

    /// `GET /api/v1/carts/{id}`.
    pub fn get_cart(&self, id: u64) -> Result<H::Output<Cart>, ApiError> {
        let op = Operation::GetCart;
        validate::get_cart(id).map_err(|e| rejected(op, e))?;
        let response = self.execute(op, request::build_get_cart(id))?;
        self.hydrator.hydrate::<Cart>(response)
    }

    /// `POST /api/v1/carts/`. Succeeds with 201; 400 is a validation failure.
    pub fn create_cart(
        &self,
        customer: &str,
        channel: &str,
        locale_code: &str,
    ) -> Result<H::Output<Cart>, ApiError> {
        let op = Operation::CreateCart;
        validate::create_cart(customer, channel, locale_code).map_err(|e| rejected(op, e))?;
        let req = request::build_create_cart(customer, channel, locale_code)?;
        let response = self.execute(op, req)?;
        self.hydrator.hydrate::<Cart>(response)
    }

    /// `POST /api/v1/carts/{cartId}/items/`. Succeeds with 201; 400 is a
    /// validation failure.
    pub fn add_item(
        &self,
        cart_id: u64,
        variant: &str,
        quantity: u32,
    ) -> Result<H::Output<CartItem>, ApiError> {
        let op = Operation::AddItem;
        validate::add_item(cart_id, variant, quantity).map_err(|e| rejected(op, e))?;
        let req = request::build_add_item(cart_id, variant, quantity)?;
        let response = self.execute(op, req)?;
        self.hydrator.hydrate::<CartItem>(response)
    }

    /// `PUT /api/v1/checkouts/addressing/{cartId}`. Succeeds with 204.
    ///
    /// Passing `billing` sets `differentBillingAddress`; with `None` the
    /// billing address is sent as an empty object.
    pub fn put_address(
        &self,
        cart_id: u64,
        shipping: &Address,
        billing: Option<&Address>,
    ) -> Result<H::Output<bool>, ApiError> {
        let op = Operation::PutAddress;
        validate::put_address(cart_id, shipping, billing).map_err(|e| rejected(op, e))?;
        let req = request::build_put_address(cart_id, shipping, billing)?;
        let response = self.execute(op, req)?;
        Ok(self.hydrator.acknowledge(response))
    }
}
