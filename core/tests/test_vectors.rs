//! Verify every operation against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request, a simulated
//! response and the expected result or error. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use std::cell::RefCell;

use serde::Serialize;
use serde_json::Value;
use sylius_core::{Address, ApiError, HttpMethod, HttpRequest, HttpResponse, SyliusClient, Transport};

/// Replays the case's simulated response and records what was sent.
struct Replay {
    response: Option<HttpResponse>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl Transport for Replay {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request.clone());
        Ok(self
            .response
            .clone()
            .expect("case without simulated_response reached the transport"))
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Run one case: call the operation, then check the request and outcome.
fn run_case<R: Serialize>(case: &Value, call: impl FnOnce(&SyliusClient<&Replay>) -> Result<R, ApiError>) {
    let name = case["name"].as_str().unwrap();
    let response = case.get("simulated_response").map(|sim| HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    });
    let replay = Replay {
        response,
        sent: RefCell::new(Vec::new()),
    };
    let client = SyliusClient::new(&replay);
    let result = call(&client);

    let sent = replay.sent.borrow();
    match case.get("expected_request") {
        Some(expected_req) => {
            assert_eq!(sent.len(), 1, "{name}: exactly one request");
            let req = &sent[0];
            assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
            assert_eq!(req.path, expected_req["path"].as_str().unwrap(), "{name}: path");

            let expected_headers: Vec<(String, String)> = expected_req["headers"]
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");

            match expected_req.get("body") {
                Some(expected_body) => {
                    let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                    assert_eq!(&body, expected_body, "{name}: body");
                }
                None => assert!(req.body.is_none(), "{name}: body should be None"),
            }
        }
        None => assert!(sent.is_empty(), "{name}: no request expected"),
    }

    match case.get("expected_error") {
        Some(expected_error) => {
            let err = match result {
                Ok(_) => panic!("{name}: expected error {expected_error}"),
                Err(err) => err,
            };
            check_error(name, &err, expected_error.as_str().unwrap());
        }
        None => {
            let value = serde_json::to_value(result.unwrap()).unwrap();
            assert_eq!(value, case["expected_result"], "{name}: parsed result");
        }
    }
}

fn check_error(name: &str, err: &ApiError, expected: &str) {
    if let Some(field) = expected.strip_prefix("InvalidArgument:") {
        assert!(
            matches!(err, ApiError::InvalidArgument { field: f, .. } if *f == field),
            "{name}: expected InvalidArgument on {field}, got {err:?}"
        );
        return;
    }
    let ok = match expected {
        "Validation" => matches!(err, ApiError::Validation { .. }),
        "BadRequest" => matches!(err, ApiError::BadRequest { .. }),
        "Unauthorized" => matches!(err, ApiError::Unauthorized { .. }),
        "NotFound" => matches!(err, ApiError::NotFound { .. }),
        "Server" => matches!(err, ApiError::Server { .. }),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(ok, "{name}: expected {expected}, got {err:?}");
}

fn address(value: &Value) -> Address {
    serde_json::from_value(value.clone()).unwrap()
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_cart_test_vectors() {
    for case in load(include_str!("../../test-vectors/get_cart.json")) {
        let id = case["input"]["id"].as_u64().unwrap();
        run_case(&case, |c| c.get_cart(id));
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_cart_test_vectors() {
    for case in load(include_str!("../../test-vectors/create_cart.json")) {
        let input = &case["input"];
        let customer = input["customer"].as_str().unwrap();
        let channel = input["channel"].as_str().unwrap();
        let locale_code = input["localeCode"].as_str().unwrap();
        run_case(&case, |c| c.create_cart(customer, channel, locale_code));
    }
}

// ---------------------------------------------------------------------------
// Add item
// ---------------------------------------------------------------------------

#[test]
fn add_item_test_vectors() {
    for case in load(include_str!("../../test-vectors/add_item.json")) {
        let input = &case["input"];
        let cart_id = input["cartId"].as_u64().unwrap();
        let variant = input["variant"].as_str().unwrap();
        let quantity = input["quantity"].as_u64().unwrap() as u32;
        run_case(&case, |c| c.add_item(cart_id, variant, quantity));
    }
}

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

#[test]
fn put_address_test_vectors() {
    for case in load(include_str!("../../test-vectors/put_address.json")) {
        let input = &case["input"];
        let cart_id = input["cartId"].as_u64().unwrap();
        let shipping = address(&input["shippingAddress"]);
        let billing = input.get("billingAddress").map(address);
        run_case(&case, |c| c.put_address(cart_id, &shipping, billing.as_ref()));
    }
}
