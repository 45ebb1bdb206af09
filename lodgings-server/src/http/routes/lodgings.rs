//! Lodging collection endpoints

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{LodgingBody, LodgingId};
use crate::http::server::AppState;
use crate::models::{Lodging, Page, PageLinks, PageParams, PAGE_SIZE};

/// Base path for collection links
const BASE_PATH: &str = "/lodgings";

/// One page of the collection with position metadata
#[derive(Debug, Serialize)]
pub struct LodgingPage {
    pub lodgings: Vec<Lodging>,
    #[serde(rename = "pageNumber")]
    pub page_number: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    pub links: PageLinks,
}

/// Self-link to a single lodging
#[derive(Debug, Serialize)]
pub struct LodgingLinks {
    pub lodging: String,
}

/// Response to a successful create
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub links: LodgingLinks,
}

/// Response to a successful replace
#[derive(Debug, Serialize)]
pub struct ReplacedResponse {
    pub links: LodgingLinks,
}

fn lodging_links(id: i64) -> LodgingLinks {
    LodgingLinks {
        lodging: format!("{}/{}", BASE_PATH, id),
    }
}

fn record_path(id: i64) -> String {
    format!("{}/{}", BASE_PATH, id)
}

/// GET /lodgings - paged listing with navigation links
async fn list_lodgings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<LodgingPage>, ApiError> {
    let total = state.store.count().await?;
    let page = Page::clamp(params.requested(), total);
    let lodgings = state.store.page(page.offset(), page.limit()).await?;

    Ok(Json(LodgingPage {
        lodgings,
        page_number: page.number,
        total_pages: page.last,
        page_size: PAGE_SIZE,
        total_count: total,
        links: page.links(BASE_PATH),
    }))
}

/// POST /lodgings - create a lodging
async fn create_lodging(
    State(state): State<Arc<AppState>>,
    LodgingBody(input): LodgingBody,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let draft = input.validate()?;
    let id = state.store.insert(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            links: lodging_links(id),
        }),
    ))
}

/// GET /lodgings/{id} - fetch one lodging
async fn get_lodging(
    State(state): State<Arc<AppState>>,
    LodgingId(id): LodgingId,
) -> Result<Json<Lodging>, ApiError> {
    match state.store.get(id).await? {
        Some(lodging) => Ok(Json(lodging)),
        None => Err(ApiError::path_not_found(record_path(id))),
    }
}

/// PUT /lodgings/{id} - full replace
///
/// Existence is checked before validation so an unknown id answers 404
/// even when the body is invalid.
async fn replace_lodging(
    State(state): State<Arc<AppState>>,
    LodgingId(id): LodgingId,
    LodgingBody(input): LodgingBody,
) -> Result<Json<ReplacedResponse>, ApiError> {
    if state.store.get(id).await?.is_none() {
        return Err(ApiError::path_not_found(record_path(id)));
    }

    let draft = input.validate()?;
    if !state.store.replace(id, draft).await? {
        return Err(ApiError::path_not_found(record_path(id)));
    }

    Ok(Json(ReplacedResponse {
        links: lodging_links(id),
    }))
}

/// DELETE /lodgings/{id}
async fn delete_lodging(
    State(state): State<Arc<AppState>>,
    LodgingId(id): LodgingId,
) -> Result<StatusCode, ApiError> {
    if state.store.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::path_not_found(record_path(id)))
    }
}

/// Lodging routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lodgings", get(list_lodgings).post(create_lodging))
        .route(
            "/lodgings/{id}",
            get(get_lodging).put(replace_lodging).delete(delete_lodging),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LodgingInput, DEFAULT_DESCRIPTION};
    use crate::store::MemoryStore;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            store: Arc::new(MemoryStore::new()),
        })
    }

    fn input(name: &str, price: f64, owner_id: i64) -> LodgingInput {
        LodgingInput {
            name: Some(name.to_owned()),
            price: Some(price),
            owner_id: Some(owner_id),
            ..LodgingInput::default()
        }
    }

    fn page_params(page: &str) -> Query<PageParams> {
        Query(PageParams {
            page: Some(page.to_owned()),
        })
    }

    async fn seed(state: &Arc<AppState>, n: usize) {
        for i in 0..n {
            create_lodging(
                State(state.clone()),
                LodgingBody(input(&format!("lodging-{}", i), 50.0, 1)),
            )
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn empty_listing() {
        let Json(page) = list_lodgings(State(state()), Query(PageParams::default()))
            .await
            .unwrap();

        assert!(page.lodgings.is_empty());
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.links, PageLinks::default());
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let state = state();

        let (status, Json(created)) = create_lodging(
            State(state.clone()),
            LodgingBody(input("Cabin", 100.0, 5)),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.links.lodging, format!("/lodgings/{}", created.id));

        let Json(lodging) = get_lodging(State(state), LodgingId(created.id))
            .await
            .unwrap();
        assert_eq!(lodging.name, "Cabin");
        assert_eq!(lodging.price, 100.0);
        assert_eq!(lodging.owner_id, 5);
        assert_eq!(lodging.description, DEFAULT_DESCRIPTION);
    }

    #[tokio::test]
    async fn create_missing_price_is_validation_error() {
        let mut body = input("Cabin", 100.0, 5);
        body.price = None;

        let err = create_lodging(State(state()), LodgingBody(body))
            .await
            .unwrap_err();
        let ApiError::Validation(e) = err else {
            panic!("expected validation error");
        };
        assert!(e.to_string().contains("price"));
    }

    #[tokio::test]
    async fn third_page_of_25_has_five_records() {
        let state = state();
        seed(&state, 25).await;

        let Json(page) = list_lodgings(State(state), page_params("3")).await.unwrap();
        assert_eq!(page.lodgings.len(), 5);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
        assert!(page.links.prev_page.is_some());
        assert!(page.links.next_page.is_none());
    }

    #[tokio::test]
    async fn page_beyond_end_clamps_to_last() {
        let state = state();
        seed(&state, 25).await;

        let Json(page) = list_lodgings(State(state), page_params("99"))
            .await
            .unwrap();
        assert_eq!(page.page_number, 3);
        assert_eq!(page.lodgings.len(), 5);
    }

    #[tokio::test]
    async fn garbage_page_param_serves_first_page() {
        let state = state();
        seed(&state, 12).await;

        let Json(page) = list_lodgings(State(state), page_params("nonsense"))
            .await
            .unwrap();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.lodgings.len(), 10);
    }

    #[tokio::test]
    async fn get_of_absent_id_names_path() {
        let err = get_lodging(State(state()), LodgingId(9999))
            .await
            .unwrap_err();
        let ApiError::PathNotFound { path } = err else {
            panic!("expected path not found");
        };
        assert_eq!(path, "/lodgings/9999");
    }

    #[tokio::test]
    async fn delete_then_delete_is_not_found() {
        let state = state();
        let (_, Json(created)) = create_lodging(
            State(state.clone()),
            LodgingBody(input("Doomed", 10.0, 1)),
        )
        .await
        .unwrap();

        let status = delete_lodging(State(state.clone()), LodgingId(created.id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = delete_lodging(State(state), LodgingId(created.id))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::PathNotFound { .. }));
    }

    #[tokio::test]
    async fn replace_of_absent_id_is_not_a_creation() {
        let state = state();

        let err = replace_lodging(
            State(state.clone()),
            LodgingId(42),
            LodgingBody(input("Ghost", 10.0, 1)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::PathNotFound { .. }));

        let Json(page) = list_lodgings(State(state), Query(PageParams::default()))
            .await
            .unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn replace_checks_existence_before_validation() {
        let err = replace_lodging(
            State(state()),
            LodgingId(42),
            LodgingBody(LodgingInput::default()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::PathNotFound { .. }));
    }

    #[tokio::test]
    async fn replace_swaps_record_and_links_back() {
        let state = state();
        let (_, Json(created)) = create_lodging(
            State(state.clone()),
            LodgingBody(input("Before", 10.0, 1)),
        )
        .await
        .unwrap();

        let Json(replaced) = replace_lodging(
            State(state.clone()),
            LodgingId(created.id),
            LodgingBody(input("After", 20.0, 2)),
        )
        .await
        .unwrap();
        assert_eq!(
            replaced.links.lodging,
            format!("/lodgings/{}", created.id)
        );

        let Json(lodging) = get_lodging(State(state), LodgingId(created.id))
            .await
            .unwrap();
        assert_eq!(lodging.name, "After");
        assert_eq!(lodging.owner_id, 2);
    }

    #[tokio::test]
    async fn replace_with_invalid_body_on_existing_record_is_400() {
        let state = state();
        let (_, Json(created)) = create_lodging(
            State(state.clone()),
            LodgingBody(input("Cabin", 100.0, 5)),
        )
        .await
        .unwrap();

        let err = replace_lodging(
            State(state),
            LodgingId(created.id),
            LodgingBody(LodgingInput::default()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
