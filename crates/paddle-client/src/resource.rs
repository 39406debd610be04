//! Binding between resource types and their API collections.

use serde::de::DeserializeOwned;
use serde::Serialize;

use paddle_core::{Identified, Price, PriceCreate, PriceUpdate, Product, ProductCreate, ProductUpdate};

/// A resource type served from one API collection.
///
/// [`Crudp`](crate::Crudp) is generic over this trait: an implementor needs
/// an id, must decode from the envelope's `data`, and names the payloads it
/// accepts for create and update.
pub trait Resource: DeserializeOwned + Identified + Send + 'static {
    /// Collection path, e.g. `/products`.
    const PATH: &'static str;
    /// Singular name used in logs and errors.
    const NAME: &'static str;

    /// Body of a create request. Carries no server-assigned fields.
    type Create: Serialize + Send + Sync;
    /// Body of an update request; its id selects the target.
    type Update: Serialize + Identified + Send + Sync;
}

impl Resource for Product {
    const PATH: &'static str = "/products";
    const NAME: &'static str = "product";

    type Create = ProductCreate;
    type Update = ProductUpdate;
}

impl Resource for Price {
    const PATH: &'static str = "/prices";
    const NAME: &'static str = "price";

    type Create = PriceCreate;
    type Update = PriceUpdate;
}
