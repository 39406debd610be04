//! Price resource and the value types it is built from.

use serde::{Deserialize, Serialize};

use crate::codes::{CountryCode, CurrencyCode, Interval, Status, TaxMode};
use crate::ids::{Identified, PriceId, ProductId};
use crate::product::Product;

/// An amount in the lowest denomination of a currency (cents for USD).
///
/// The amount is a string because the API sends it as one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the lowest denomination.
    pub amount: String,
    /// Currency of the amount.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Build a money value.
    #[must_use]
    pub fn new(amount: impl Into<String>, currency_code: CurrencyCode) -> Self {
        Self {
            amount: amount.into(),
            currency_code,
        }
    }
}

/// Limits on how many units of a price can be bought at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    /// Minimum quantity.
    pub minimum: u32,
    /// Maximum quantity.
    pub maximum: u32,
}

/// A repeating period, such as "every 1 month".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    /// Unit of the period.
    pub interval: Interval,
    /// Number of units.
    pub frequency: u32,
}

/// Unit price used instead of the default for some countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPriceOverride {
    /// Countries the override applies to.
    pub country_codes: Vec<CountryCode>,
    /// Price charged in those countries.
    pub unit_price: Money,
}

/// A price as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Server-assigned identifier.
    pub id: PriceId,
    /// Product this price belongs to.
    pub product_id: ProductId,
    /// Internal description, not shown to customers.
    pub description: String,
    /// Default unit price.
    pub unit_price: Money,
    /// How often the price is charged. `None` for one-time prices.
    #[serde(default)]
    pub billing_cycle: Option<TimePeriod>,
    /// Trial before the first charge. Requires a billing cycle.
    #[serde(default)]
    pub trial_period: Option<TimePeriod>,
    /// How tax is calculated.
    #[serde(default)]
    pub tax_mode: Option<TaxMode>,
    /// Per-country price overrides.
    #[serde(default)]
    pub unit_price_overrides: Vec<UnitPriceOverride>,
    /// Purchase quantity limits.
    #[serde(default)]
    pub quantity: Option<Quantity>,
    /// Whether the price is active or archived.
    pub status: Status,
    /// The related product, when the API includes it.
    #[serde(default)]
    pub product: Option<Product>,
}

impl Identified for Price {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// Request body for creating a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceCreate {
    /// Product the price attaches to.
    pub product_id: ProductId,
    /// Internal description.
    pub description: String,
    /// Default unit price.
    pub unit_price: Money,
    /// Billing cycle; omit for one-time prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<TimePeriod>,
    /// Trial period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<TimePeriod>,
    /// Tax mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_mode: Option<TaxMode>,
    /// Per-country overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price_overrides: Option<Vec<UnitPriceOverride>>,
    /// Purchase quantity limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

impl PriceCreate {
    /// Create a one-time price payload.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        description: impl Into<String>,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            description: description.into(),
            unit_price,
            billing_cycle: None,
            trial_period: None,
            tax_mode: None,
            unit_price_overrides: None,
            quantity: None,
        }
    }

    /// Make the price recurring.
    #[must_use]
    pub fn with_billing_cycle(mut self, interval: Interval, frequency: u32) -> Self {
        self.billing_cycle = Some(TimePeriod {
            interval,
            frequency,
        });
        self
    }

    /// Add a trial period.
    #[must_use]
    pub fn with_trial_period(mut self, interval: Interval, frequency: u32) -> Self {
        self.trial_period = Some(TimePeriod {
            interval,
            frequency,
        });
        self
    }

    /// Set the tax mode.
    #[must_use]
    pub fn with_tax_mode(mut self, tax_mode: TaxMode) -> Self {
        self.tax_mode = Some(tax_mode);
        self
    }

    /// Add a per-country override.
    #[must_use]
    pub fn with_override(mut self, country_codes: Vec<CountryCode>, unit_price: Money) -> Self {
        self.unit_price_overrides
            .get_or_insert_with(Vec::new)
            .push(UnitPriceOverride {
                country_codes,
                unit_price,
            });
        self
    }

    /// Set purchase quantity limits.
    #[must_use]
    pub fn with_quantity(mut self, minimum: u32, maximum: u32) -> Self {
        self.quantity = Some(Quantity { minimum, maximum });
        self
    }
}

/// Request body for updating an existing price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceUpdate {
    /// Price to update.
    #[serde(skip)]
    pub id: PriceId,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    /// New billing cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<TimePeriod>,
    /// New trial period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<TimePeriod>,
    /// New tax mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_mode: Option<TaxMode>,
    /// Replacement override list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price_overrides: Option<Vec<UnitPriceOverride>>,
    /// New quantity limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    /// Archive or reactivate the price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl PriceUpdate {
    /// Start an empty update for the given price.
    #[must_use]
    pub fn new(id: impl Into<PriceId>) -> Self {
        Self {
            id: id.into(),
            description: None,
            unit_price: None,
            billing_cycle: None,
            trial_period: None,
            tax_mode: None,
            unit_price_overrides: None,
            quantity: None,
            status: None,
        }
    }

    /// Change the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Change the unit price.
    #[must_use]
    pub fn with_unit_price(mut self, unit_price: Money) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Change the status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }
}

impl Identified for PriceUpdate {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
