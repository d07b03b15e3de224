use axum::response::Json;

pub const STATUS_MESSAGE: &str = "Looking good, up and running :)";

pub async fn status() -> Json<&'static str> {
    Json(STATUS_MESSAGE)
}
