use std::sync::Arc;

use async_graphql::Context;

use crate::store::Store;

pub trait StoreExt {
    fn store(&self) -> async_graphql::Result<&Store>;
}

impl StoreExt for Context<'_> {
    fn store(&self) -> async_graphql::Result<&Store> {
        self.data::<Arc<Store>>().map(Arc::as_ref)
    }
}
