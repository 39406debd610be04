//! Generic create/retrieve/update/paginate access to one resource collection.

use futures::stream::BoxStream;
use reqwest::Method;
use std::marker::PhantomData;

use paddle_core::{Envelope, Identified, Page, SchemaError};

use crate::client::PaddleClient;
use crate::error::PaddleError;
use crate::pagination::{self, ListParams};
use crate::resource::Resource;

/// API resource for one collection, e.g. `/products`.
///
/// Obtained from [`PaddleClient::resource`] or one of its shortcuts.
pub struct Crudp<'c, R: Resource> {
    client: &'c PaddleClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for Crudp<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for Crudp<'_, R> {}

impl<'c, R: Resource> Crudp<'c, R> {
    /// Creates a new resource accessor.
    #[must_use]
    pub const fn new(client: &'c PaddleClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Collection path this accessor is bound to.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        R::PATH
    }

    /// Fetch one resource by id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is empty
    /// - The resource does not exist (`NotFound`)
    /// - The request fails or the response does not match the schema
    pub async fn retrieve(&self, id: impl AsRef<str>) -> Result<R, PaddleError> {
        let path = item_path(R::PATH, R::NAME, id.as_ref())?;
        let envelope: Envelope<R> = self.client.get(&path, None::<&()>).await?;

        tracing::debug!(
            resource = R::NAME,
            path = %path,
            request_id = ?envelope.request_id(),
            "Retrieved resource"
        );
        Ok(envelope.data)
    }

    /// Create a resource.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` if the API rejects the payload, `Http` for other
    /// non-success statuses, or a transport/decode error.
    pub async fn create(&self, payload: &R::Create) -> Result<R, PaddleError> {
        let envelope: Envelope<R> = self
            .client
            .send_json(Method::POST, R::PATH, payload)
            .await?;

        tracing::info!(
            resource = R::NAME,
            id = %envelope.data.id(),
            request_id = ?envelope.request_id(),
            "Created resource"
        );
        Ok(envelope.data)
    }

    /// Update an existing resource. The payload's id selects the target.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create); additionally fails if the payload's
    /// id is empty.
    pub async fn update(&self, payload: &R::Update) -> Result<R, PaddleError> {
        let id = payload.id();
        let path = item_path(R::PATH, R::NAME, id)?;
        let envelope: Envelope<R> = self
            .client
            .send_json(Method::PATCH, &path, payload)
            .await?;

        tracing::info!(
            resource = R::NAME,
            id = %id,
            request_id = ?envelope.request_id(),
            "Updated resource"
        );
        Ok(envelope.data)
    }

    /// Deleting is not offered by the API; archive through
    /// [`update`](Self::update) instead.
    ///
    /// # Errors
    ///
    /// Always returns `UnsupportedOperation`; no request is sent.
    #[allow(clippy::unused_async)]
    pub async fn delete(&self, id: impl AsRef<str>) -> Result<(), PaddleError> {
        tracing::warn!(resource = R::NAME, id = %id.as_ref(), "Delete is not supported");
        Err(PaddleError::UnsupportedOperation {
            operation: "delete",
            resource: R::NAME,
        })
    }

    /// Fetch a single page with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn list(&self, params: &ListParams) -> Result<Page<R>, PaddleError> {
        let page: Page<R> = self.client.get(R::PATH, Some(params)).await?;

        tracing::debug!(
            resource = R::NAME,
            items = page.data.len(),
            request_id = %page.request_id(),
            "Listed page"
        );
        Ok(page)
    }

    /// Lazily stream every page of the collection.
    ///
    /// Each call starts over from the first page. The stream ends after the
    /// last page or after the first error; a page reporting `has_more` without
    /// items ends it with a `Decode` error.
    #[must_use]
    pub fn paginate(&self, per_page: Option<u32>) -> BoxStream<'c, Result<Page<R>, PaddleError>> {
        pagination::pages(self.client, per_page)
    }

    /// Lazily stream every item of the collection, in server order.
    #[must_use]
    pub fn items(&self, per_page: Option<u32>) -> BoxStream<'c, Result<R, PaddleError>> {
        pagination::items(self.paginate(per_page))
    }
}

/// `{path}/{id}` with the id escaped as one path segment.
pub(crate) fn item_path(
    path: &str,
    kind: &'static str,
    id: &str,
) -> Result<String, SchemaError> {
    match id {
        "" => Err(SchemaError::EmptyId { kind }),
        "." | ".." => Err(SchemaError::InvalidId {
            kind,
            value: id.to_string(),
        }),
        _ => Ok(format!("{path}/{}", urlencoding::encode(id))),
    }
}
