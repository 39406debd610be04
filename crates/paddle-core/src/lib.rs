//! Core types for the Paddle Billing API.
//!
//! This crate provides the resource schema shared by the client:
//!
//! - **Identifiers**: `ProductId`, `PriceId`, and the `Identified` trait
//! - **Codes**: `CurrencyCode`, `CountryCode`, `TaxCategory`, `TaxMode`, `Interval`, `Status`
//! - **Resources**: `Product`, `Price`, and their create/update payloads
//! - **Envelopes**: `Page`, `ResponseMeta`, `Pagination`, `Envelope`, `ErrorEnvelope`
//! - **Events**: `EventType`
//!
//! Instances are only ever built from API responses. Create payloads never
//! carry an id; update payloads carry the id of the resource they target.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codes;
pub mod envelope;
pub mod error;
pub mod event_type;
pub mod ids;
pub mod price;
pub mod product;

pub use codes::{CountryCode, CurrencyCode, Interval, Status, TaxCategory, TaxMode};
pub use envelope::{ApiErrorBody, Envelope, ErrorEnvelope, Page, Pagination, ResponseMeta};
pub use error::{CursorError, SchemaError};
pub use event_type::EventType;
pub use ids::{Identified, PriceId, ProductId};
pub use price::{Money, Price, PriceCreate, PriceUpdate, Quantity, TimePeriod, UnitPriceOverride};
pub use product::{Product, ProductCreate, ProductUpdate};
