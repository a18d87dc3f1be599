use axum::{Extension, Json};
use lendfinder_core::ServiceCategory;
use serde::Serialize;

use crate::middleware::RequestId;

use super::ApiResponse;

#[derive(Debug, Serialize)]
pub(super) struct ServiceCategoryItem {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub search_phrases: &'static [&'static str],
}

pub(super) async fn list_service_categories(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<ServiceCategoryItem>>> {
    let data = ServiceCategory::ALL
        .into_iter()
        .map(|category| ServiceCategoryItem {
            slug: category.slug(),
            name: category.display_name(),
            description: category.description(),
            search_phrases: category.search_phrases(),
        })
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}
