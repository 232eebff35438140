use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::models::CivWinrate;

/// `GET /api/winrates`: the precomputed summary, best win rate first.
pub async fn list_winrates(State(state): State<AppState>) -> Json<Vec<CivWinrate>> {
    Json(state.summary.rows().to_vec())
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::calculate::WinrateSummary;
    use crate::models::CivWinrate;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_winrates_in_precomputed_order() {
        let summary = WinrateSummary::from_rows(vec![
            CivWinrate::new("Mayans", 100.0, 2),
            CivWinrate::new("Aztecs", 50.0, 2),
            CivWinrate::new("Unknown Civ", 0.0, 1),
        ]);
        let app = build_router(AppState::new(summary));

        let (status, json) = get_json(app, "/api/winrates").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!([
                {"name": "Mayans", "winrate": 100.0, "games": 2},
                {"name": "Aztecs", "winrate": 50.0, "games": 2},
                {"name": "Unknown Civ", "winrate": 0.0, "games": 1},
            ])
        );
    }

    #[tokio::test]
    async fn test_winrates_empty_is_array() {
        let app = build_router(AppState::new(WinrateSummary::from_rows(Vec::new())));

        let (status, json) = get_json(app, "/api/winrates").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!([]));
    }

    #[tokio::test]
    async fn test_winrates_repeat_requests_identical() {
        let summary = WinrateSummary::from_rows(vec![CivWinrate::new("Franks", 51.23, 400)]);
        let app = build_router(AppState::new(summary));

        let (_, first) = get_json(app.clone(), "/api/winrates").await;
        let (_, second) = get_json(app, "/api/winrates").await;

        assert_eq!(first, second);
        assert_eq!(first[0]["winrate"], 51.23);
    }
}
