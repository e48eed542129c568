use axum::Json;
use serde::Serialize;

use egao_core::models::adl::{AdlRating, CATALOGUE, rating_description};

#[derive(Serialize)]
pub struct RatingOption {
    pub value: AdlRating,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct CatalogueEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub ratings: Vec<RatingOption>,
}

/// The ADL catalogue as the form layer renders it: every item with its
/// category and the four rating options (label, badge color, description).
pub async fn get_catalogue() -> Json<Vec<CatalogueEntry>> {
    let entries = CATALOGUE
        .iter()
        .map(|def| CatalogueEntry {
            id: def.id,
            label: def.label_ja,
            category: def.category.label_ja(),
            ratings: AdlRating::ALL
                .iter()
                .map(|rating| RatingOption {
                    value: *rating,
                    label: rating.label_ja(),
                    color: rating.status_color(),
                    description: rating_description(def.id, *rating),
                })
                .collect(),
        })
        .collect();
    Json(entries)
}
