//! Block storage service accessor.

use crate::client::Session;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ListFilters, Volume};

/// Block storage (Cinder) operations bound to a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct BlockStorageService<'a> {
    pub(crate) session: &'a Session,
}

impl BlockStorageService<'_> {
    pub fn endpoint(&self) -> &str {
        &self.session.block_storage_url
    }

    pub async fn list_volumes(&self, filters: &ListFilters) -> Result<Vec<Volume>> {
        let s = self.session;
        endpoints::list_volumes(
            &s.http,
            &s.block_storage_url,
            s.token(),
            &s.paged(filters),
            s.request_timeout,
        )
        .await
    }
}
