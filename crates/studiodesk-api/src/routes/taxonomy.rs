use axum::Json;
use serde::Serialize;
use studiodesk_types::taxonomy::{
    self, Category, LabeledOption, PriorityInfo, StatusInfo, Studio,
};

/// The static reference catalog
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyResponse {
    pub studios: &'static [Studio],
    pub trainers: &'static [&'static str],
    pub classes: &'static [&'static str],
    pub categories: &'static [Category],
    pub priorities: &'static [PriorityInfo],
    pub statuses: &'static [StatusInfo],
    pub client_moods: &'static [LabeledOption],
    pub client_statuses: &'static [LabeledOption],
    pub departments: &'static [&'static str],
}

/// Taxonomy endpoint
#[utoipa::path(
    get,
    path = "/taxonomy",
    responses(
        (status = 200, description = "Studios, trainers, classes, categories, priorities, statuses and departments")
    ),
    tag = "taxonomy"
)]
pub async fn get_taxonomy() -> Json<TaxonomyResponse> {
    Json(TaxonomyResponse {
        studios: taxonomy::STUDIOS,
        trainers: taxonomy::TRAINERS,
        classes: taxonomy::CLASSES,
        categories: taxonomy::CATEGORIES,
        priorities: taxonomy::PRIORITIES,
        statuses: taxonomy::STATUSES,
        client_moods: taxonomy::CLIENT_MOODS,
        client_statuses: taxonomy::CLIENT_STATUSES,
        departments: taxonomy::DEPARTMENTS,
    })
}
