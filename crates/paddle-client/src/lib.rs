//! Paddle Billing client SDK.
//!
//! Typed async access to the Paddle Billing REST API: products, prices and
//! webhook event types, with lazy cursor pagination over listings.
//!
//! # Example
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use paddle_client::{PaddleClient, ProductCreate, TaxCategory};
//!
//! # async fn example() -> Result<(), paddle_client::PaddleError> {
//! let client = PaddleClient::new("your-api-key", true)?;
//!
//! let product = client
//!     .products()
//!     .create(&ProductCreate::new("Pro plan", TaxCategory::Saas))
//!     .await?;
//! println!("Created {}", product.id);
//!
//! // Every product, fetched page by page as the stream is consumed.
//! let all: Vec<_> = client.products().items(Some(50)).try_collect().await?;
//! println!("{} products", all.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod crudp;
mod error;
pub mod pagination;
mod resource;

pub use client::{PaddleClient, EVENT_TYPES_PATH};
pub use config::{
    Environment, PaddleConfig, DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECONDS, HDR_PADDLE_VERSION,
    PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
pub use crudp::Crudp;
pub use error::PaddleError;
pub use pagination::{items, ListParams};
pub use resource::Resource;

pub use paddle_core::{
    ApiErrorBody, CountryCode, CurrencyCode, CursorError, Envelope, ErrorEnvelope, EventType,
    Identified, Interval, Money, Page, Pagination, Price, PriceCreate, PriceId, PriceUpdate,
    Product, ProductCreate, ProductId, ProductUpdate, Quantity, ResponseMeta, SchemaError, Status,
    TaxCategory, TaxMode, TimePeriod, UnitPriceOverride,
};
