//! HTTP API (axum): normalize documents sent as query params or JSON.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use crate::normalize::Normalizer;
use crate::stopwords::StopwordSet;

/// Shared app state: the stopword set every request filters against.
pub type AppState = Arc<StopwordSet>;

/// Body of POST /normalize, and params of GET /normalize?text=...
#[derive(Debug, serde::Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
    #[serde(default)]
    pub remove_stopwords: bool,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct NormalizeResponse {
    pub tokens: Vec<String>,
}

fn run(stopwords: &StopwordSet, req: &NormalizeRequest) -> NormalizeResponse {
    let tokens = Normalizer::new(stopwords)
        .with_remove_stopwords(req.remove_stopwords)
        .normalize(&req.text);
    NormalizeResponse { tokens }
}

/// GET /normalize?text=...&remove_stopwords=true -> { tokens }
pub async fn normalize_query(
    State(stopwords): State<AppState>,
    Query(req): Query<NormalizeRequest>,
) -> Json<NormalizeResponse> {
    Json(run(&stopwords, &req))
}

/// POST /normalize with { text, remove_stopwords } -> { tokens }
pub async fn normalize_json(
    State(stopwords): State<AppState>,
    Json(req): Json<NormalizeRequest>,
) -> Json<NormalizeResponse> {
    Json(run(&stopwords, &req))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/normalize", get(normalize_query).post(normalize_json))
        .with_state(state)
}

/// GET / -> static HTML form.
pub async fn index_page() -> axum::response::Html<&'static str> {
    const HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>review-wordlist</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; }
    h1 { font-size: 1.5rem; }
    textarea { width: 100%; min-height: 8rem; padding: 0.5rem; font-size: 1rem; box-sizing: border-box; }
    button { margin-top: 0.5rem; padding: 0.5rem 1rem; font-size: 1rem; cursor: pointer; }
    #tokens { margin-top: 1.5rem; font-family: monospace; color: #333; }
  </style>
</head>
<body>
  <h1>review-wordlist</h1>
  <form id="form">
    <textarea id="text" placeholder="Paste a review, HTML welcome" autofocus></textarea>
    <label><input type="checkbox" id="stop"> remove stopwords</label>
    <button type="submit">Normalize</button>
  </form>
  <div id="tokens"></div>
  <script>
    const form = document.getElementById('form');
    const out = document.getElementById('tokens');
    form.addEventListener('submit', async (e) => {
      e.preventDefault();
      try {
        const r = await fetch('/normalize', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({
            text: document.getElementById('text').value,
            remove_stopwords: document.getElementById('stop').checked,
          }),
        });
        const body = await r.json();
        out.textContent = body.tokens.length ? body.tokens.join(' ') : '(no tokens)';
      } catch (err) {
        out.textContent = 'error: ' + err;
      }
    });
  </script>
</body>
</html>
"#;
    axum::response::Html(HTML)
}
