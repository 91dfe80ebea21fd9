//! Status-code classification per operation.
//!
//! # Design
//! Each operation has one expected success status and a short list of
//! statuses the server uses for domain failures. The table below is the only
//! place these codes live; adding an operation means adding a row. Anything
//! not in a row falls through to `ApiError::from_failed_response`.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::HttpResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    GetCart,
    CreateCart,
    AddItem,
    PutAddress,
}

/// Kind of domain failure a rule can map a status to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DomainFailure {
    Validation,
}

#[derive(Debug)]
pub(crate) struct StatusRule {
    pub operation: Operation,
    pub success: u16,
    pub domain_failures: &'static [(u16, DomainFailure)],
}

const VALIDATION_ON_400: &[(u16, DomainFailure)] = &[(400, DomainFailure::Validation)];

/// Indexed by `Operation as usize`.
static RULES: [StatusRule; 4] = [
    StatusRule {
        operation: Operation::GetCart,
        success: 200,
        domain_failures: &[],
    },
    StatusRule {
        operation: Operation::CreateCart,
        success: 201,
        domain_failures: VALIDATION_ON_400,
    },
    StatusRule {
        operation: Operation::AddItem,
        success: 201,
        domain_failures: VALIDATION_ON_400,
    },
    StatusRule {
        operation: Operation::PutAddress,
        success: 204,
        domain_failures: VALIDATION_ON_400,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    Success,
    Domain(DomainFailure),
    Generic,
}

impl Operation {
    pub(crate) fn rule(self) -> &'static StatusRule {
        &RULES[self as usize]
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Operation::GetCart => "get_cart",
            Operation::CreateCart => "create_cart",
            Operation::AddItem => "add_item",
            Operation::PutAddress => "put_address",
        }
    }

    pub(crate) fn classify(self, status: u16) -> Classification {
        let rule = self.rule();
        if status == rule.success {
            return Classification::Success;
        }
        rule.domain_failures
            .iter()
            .find(|(code, _)| *code == status)
            .map_or(Classification::Generic, |(_, kind)| Classification::Domain(*kind))
    }

    /// Pass a success response through, or turn it into the matching error.
    pub(crate) fn check(self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        let status = response.status;
        match self.classify(status) {
            Classification::Success => {
                debug!(operation = self.name(), status, "response accepted");
                Ok(response)
            }
            Classification::Domain(DomainFailure::Validation) => {
                warn!(operation = self.name(), status, "server rejected payload");
                Err(ApiError::Validation {
                    status,
                    body: response.body,
                })
            }
            Classification::Generic => {
                debug!(operation = self.name(), status, "unexpected status");
                Err(ApiError::from_failed_response(response))
            }
        }
    }
}
