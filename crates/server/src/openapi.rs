use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionDoc { Goalkeeper, Defender, Midfielder, Striker }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubDoc {
    pub id: Option<i64>,
    pub name: String,
    pub short_name: String,
    #[schema(example = "1899-11-29")]
    pub founding_date: String,
    pub total_trophies: u32,
}

/// Every field optional; omitted fields are left unchanged.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubPatchDoc {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub founding_date: Option<String>,
    pub total_trophies: Option<u32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDoc {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "1987-06-24")]
    pub birth_date: String,
    pub position: PositionDoc,
    pub club: Option<ClubDoc>,
}

/// `club: null` detaches the player from its club.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatchDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub position: Option<PositionDoc>,
    pub club: Option<ClubDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clubs::create,
        crate::routes::clubs::get,
        crate::routes::clubs::list,
        crate::routes::clubs::full_update,
        crate::routes::clubs::partial_update,
        crate::routes::clubs::delete,
        crate::routes::players::create,
        crate::routes::players::get,
        crate::routes::players::list,
        crate::routes::players::full_update,
        crate::routes::players::partial_update,
        crate::routes::players::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PositionDoc,
            ClubDoc,
            ClubPatchDoc,
            PlayerDoc,
            PlayerPatchDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clubs"),
        (name = "players")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
