use axum::{Json, Router, routing::get};

use crate::presentation::http::leads::MessageResponse;

#[utoipa::path(get, path = "/api", tag = "Health", security(()), responses((status = 200, body = MessageResponse)))]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Awesome lead manager".into(),
    })
}

pub fn routes() -> Router {
    Router::new().route("/api", get(root))
}

#[cfg(test)]
mod tests {
    use crate::presentation::http::router;
    use crate::test_support::{json_request, send, test_context};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn root_greets_without_authentication() {
        let app = router(test_context());
        let (status, body) = send(&app, json_request("GET", "/api", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Awesome lead manager");
    }
}
