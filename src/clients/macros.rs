/// Generates the read and update methods every entity client shares.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident, $entity_name_plural:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: $id) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                /// Every row, ordered by id.
                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_plural>](&self) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.list().await.map_err(<$error>::from)
                }

                /// Applies the patch atomically: on error the stored row is unchanged.
                #[tracing::instrument(skip(self))]
                pub async fn [<update_ $entity_name_snake>](
                    &self,
                    id: $id,
                    patch: <$entity as $crate::actor_framework::Entity>::Patch,
                ) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    self.inner.update(id, patch).await.map_err(<$error>::for_id(id))
                }
            }
        }
    };
}

/// Generates `create_<entity>` for entities whose creation needs no
/// cross-table checks.
macro_rules! impl_client_create {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<create_ $entity_name_snake>](
                    &self,
                    payload: <$entity as $crate::actor_framework::Entity>::CreatePayload,
                ) -> Result<$id, $error> {
                    tracing::debug!("Sending request");
                    self.inner.create(payload).await.map_err(<$error>::from)
                }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident, $entity_name_plural:ident) => {
        impl_client_create!($client_name, $entity, $id, $error, $entity_name_snake);
        impl_client_methods!($client_name, $entity, $id, $error, $entity_name_snake, $entity_name_plural);
    };
}
