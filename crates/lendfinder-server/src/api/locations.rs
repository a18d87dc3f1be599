use axum::{
    extract::{Path, State},
    Extension, Json,
};
use lendfinder_core::{location_page_slug, CityRecord, ServiceCategory, StateHub};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct StateHubSummary {
    pub state: String,
    pub state_abbr: String,
    pub total_population: u64,
    pub city_count: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct StateHubDetail {
    pub state: String,
    pub state_abbr: String,
    pub total_population: u64,
    pub city_count: usize,
    pub cities: Vec<CityItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct CityItem {
    #[serde(flatten)]
    pub city: CityRecord,
    /// Landing-page paths for this city, one per service.
    pub pages: Vec<String>,
}

impl From<&StateHub> for StateHubSummary {
    fn from(hub: &StateHub) -> Self {
        Self {
            state: hub.state.clone(),
            state_abbr: hub.state_abbr.clone(),
            total_population: hub.total_population,
            city_count: hub.city_count,
        }
    }
}

fn city_pages(city: &CityRecord) -> Vec<String> {
    ServiceCategory::ALL
        .into_iter()
        .map(|service| {
            format!(
                "/locations/{}",
                location_page_slug(service.slug(), &city.city, &city.state_abbr)
            )
        })
        .collect()
}

pub(super) async fn list_states(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<StateHubSummary>>> {
    let data = state
        .hubs
        .states_by_population()
        .into_iter()
        .map(StateHubSummary::from)
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn get_state_hub(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(state_input): Path<String>,
) -> Result<Json<ApiResponse<StateHubDetail>>, ApiError> {
    let Some(hub) = state.hubs.hub(&state_input) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no location hub for state '{state_input}'"),
        ));
    };

    let data = StateHubDetail {
        state: hub.state.clone(),
        state_abbr: hub.state_abbr.clone(),
        total_population: hub.total_population,
        city_count: hub.city_count,
        cities: state
            .hubs
            .cities_for_state(&state_input)
            .iter()
            .map(|city| CityItem {
                pages: city_pages(city),
                city: city.clone(),
            })
            .collect(),
    };

    Ok(Json(ApiResponse::new(data, req_id.0)))
}
