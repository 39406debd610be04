//! Product resource.
//!
//! A product describes something sold; prices attach to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::{Status, TaxCategory};
use crate::ids::{Identified, ProductId};

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Tax category used when calculating tax.
    pub tax_category: TaxCategory,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image shown at checkout.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the product is active or archived.
    pub status: Status,
    /// When the product was created (RFC 3339).
    pub created_at: DateTime<Utc>,
}

impl Identified for Product {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// Request body for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCreate {
    /// Display name.
    pub name: String,
    /// Tax category.
    pub tax_category: TaxCategory,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductCreate {
    /// Create a payload with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, tax_category: TaxCategory) -> Self {
        Self {
            name: name.into(),
            tax_category,
            description: None,
            image_url: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Request body for updating an existing product.
///
/// Only fields that are set are sent. The id selects the product and is
/// never part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    /// Product to update.
    #[serde(skip)]
    pub id: ProductId,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New tax category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<TaxCategory>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Archive or reactivate the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl ProductUpdate {
    /// Start an empty update for the given product.
    #[must_use]
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            tax_category: None,
            description: None,
            image_url: None,
            status: None,
        }
    }

    /// Change the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the tax category.
    #[must_use]
    pub fn with_tax_category(mut self, tax_category: TaxCategory) -> Self {
        self.tax_category = Some(tax_category);
        self
    }

    /// Change the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Change the image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Change the status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }
}

impl Identified for ProductUpdate {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
