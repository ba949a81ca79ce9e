//! Error Types
//!
//! Failures are split by how the views treat them: gateway errors on a single
//! item are soft, aggregate errors blank the page, validation errors never
//! leave the browser.

use thiserror::Error;

use crate::model::Address;
use crate::validate::DonationGuard;

/// Result of a single contract call
pub type GatewayResult<T> = Result<T, GatewayError>;

/// A contract call that did not produce a usable value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The wallet bridge is not loaded in the page
    #[error("wallet bridge unavailable: {0}")]
    Unavailable(String),

    /// A read call failed (network, RPC or contract error)
    #[error("read `{method}` failed: {message}")]
    Read { method: &'static str, message: String },

    /// The user declined the signature or the transaction reverted
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// The bridge answered with a value we cannot interpret
    #[error("malformed `{field}` in contract response: {value:?}")]
    Decode { field: &'static str, value: String },

    /// A write was attempted without a connected account
    #[error("no wallet connected")]
    NoAccount,
}

/// Hard failures: without the count or the id set no partial list exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("failed to read campaign count: {0}")]
    Count(#[source] GatewayError),

    #[error("failed to read campaign ids for {address}: {source}")]
    IdSet {
        address: Address,
        #[source]
        source: GatewayError,
    },
}

/// Conversion failures between human ETH strings and wei
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("amount is empty")]
    Empty,

    #[error("{0:?} is not a number")]
    Malformed(String),

    #[error("at most {max} decimal places are allowed")]
    TooManyDecimals { max: u32 },

    #[error("amount is too large")]
    Overflow,
}

/// Form input rejected before anything is sent to the wallet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,

    #[error("description is required")]
    EmptyDescription,

    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] UnitError),

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("duration must be a whole number of days greater than zero, got {0:?}")]
    InvalidDuration(String),
}

/// Why a create or donate submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Form input failed validation; nothing was sent
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The donate form is disabled for this campaign or account
    #[error("{}", .0.message())]
    Blocked(DonationGuard),

    /// The wallet or the contract refused the transaction
    #[error(transparent)]
    Rejected(GatewayError),
}
