//! Generates the standard CRUD handlers for one entity.
//!
//! `entity_handlers!(Row, Input, "/api/x", "/api/x/{id}", "tag" => [list, read, create, update, delete])`
//! emits one `pub async fn` per listed operation, each with its OpenAPI annotation.
//! Read-only entities omit the input type.

macro_rules! entity_handlers {
    (@op list, $entity:ident, $input:ident, $collection:tt, $item:tt, $tag:tt) => {
        #[utoipa::path(
            get,
            path = $collection,
            tag = $tag,
            responses(
                (status = 200, description = "All rows in the list envelope; empty table gives an empty list", body = [$entity]),
                (status = 400, description = "Store rejected the query", body = $crate::error::ErrorBody)
            )
        )]
        pub async fn list(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
        ) -> Result<impl axum::response::IntoResponse, $crate::error::AppError> {
            let rows = $crate::service::CrudService::list::<$entity, _>(&state.pool).await?;
            Ok($crate::response::success_many(
                format!("Successfully fetched {} data", <$entity as $crate::service::Table>::LABEL),
                rows,
            ))
        }
    };
    (@op read, $entity:ident, $input:ident, $collection:tt, $item:tt, $tag:tt) => {
        #[utoipa::path(
            get,
            path = $item,
            tag = $tag,
            params(("id" = i32, Path, description = "Primary key")),
            responses(
                (status = 200, description = "The row", body = $entity),
                (status = 404, description = "No row with this id", body = $crate::error::ErrorBody)
            )
        )]
        pub async fn read(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            axum::extract::Path(id): axum::extract::Path<String>,
        ) -> Result<impl axum::response::IntoResponse, $crate::error::AppError> {
            let id = $crate::handlers::parse_id(&id)?;
            let row = $crate::service::CrudService::get::<$entity, _>(&state.pool, id).await?;
            Ok($crate::response::success_one_ok(
                format!("Successfully fetched {} data", <$entity as $crate::service::Table>::LABEL),
                row,
            ))
        }
    };
    (@op create, $entity:ident, $input:ident, $collection:tt, $item:tt, $tag:tt) => {
        #[utoipa::path(
            post,
            path = $collection,
            tag = $tag,
            request_body = $input,
            responses(
                (status = 201, description = "Created row with its new id", body = $entity),
                (status = 400, description = "Malformed body or store rejected the row", body = $crate::error::ErrorBody)
            )
        )]
        pub async fn create(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            $crate::extractors::AppJson(body): $crate::extractors::AppJson<$input>,
        ) -> Result<impl axum::response::IntoResponse, $crate::error::AppError> {
            let row = $crate::service::CrudService::create::<$entity, _>(&state.pool, &body).await?;
            Ok($crate::response::success_one(
                format!("Successfully created {}", <$entity as $crate::service::Table>::LABEL),
                row,
            ))
        }
    };
    (@op update, $entity:ident, $input:ident, $collection:tt, $item:tt, $tag:tt) => {
        #[utoipa::path(
            put,
            path = $item,
            tag = $tag,
            params(("id" = i32, Path, description = "Primary key")),
            request_body = $input,
            responses(
                (status = 200, description = "Updated row", body = $entity),
                (status = 404, description = "No row with this id", body = $crate::error::ErrorBody)
            )
        )]
        pub async fn update(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            axum::extract::Path(id): axum::extract::Path<String>,
            $crate::extractors::AppJson(body): $crate::extractors::AppJson<$input>,
        ) -> Result<impl axum::response::IntoResponse, $crate::error::AppError> {
            let id = $crate::handlers::parse_id(&id)?;
            let row = $crate::service::CrudService::update::<$entity, _>(&state.pool, id, &body).await?;
            Ok($crate::response::success_one_ok(
                format!("Successfully updated {}", <$entity as $crate::service::Table>::LABEL),
                row,
            ))
        }
    };
    (@op delete, $entity:ident, $input:ident, $collection:tt, $item:tt, $tag:tt) => {
        #[utoipa::path(
            delete,
            path = $item,
            tag = $tag,
            params(("id" = i32, Path, description = "Primary key")),
            responses(
                (status = 200, description = "The deleted row", body = $entity),
                (status = 404, description = "No row with this id", body = $crate::error::ErrorBody)
            )
        )]
        pub async fn delete(
            axum::extract::State(state): axum::extract::State<$crate::state::AppState>,
            axum::extract::Path(id): axum::extract::Path<String>,
        ) -> Result<impl axum::response::IntoResponse, $crate::error::AppError> {
            let id = $crate::handlers::parse_id(&id)?;
            let row = $crate::service::CrudService::delete::<$entity, _>(&state.pool, id).await?;
            Ok($crate::response::success_one_ok(
                format!("Successfully deleted {}", <$entity as $crate::service::Table>::LABEL),
                row,
            ))
        }
    };
    ($entity:ident, $input:ident, $collection:tt, $item:tt, $tag:tt => [$($op:ident),+ $(,)?]) => {
        $( entity_handlers!(@op $op, $entity, $input, $collection, $item, $tag); )+
    };
    ($entity:ident, $collection:tt, $item:tt, $tag:tt => [$($op:ident),+ $(,)?]) => {
        $( entity_handlers!(@op $op, $entity, $entity, $collection, $item, $tag); )+
    };
}
