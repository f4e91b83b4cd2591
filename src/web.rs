//! HTTP-оболочка: JSON API и встроенная веб-страница.
//!
//! Маршруты:
//!   GET  /                 страница с формой
//!   POST /api/categorize   только категория промпта
//!   POST /api/respond      полный конверт ответа
//!   GET  /api/status       доступен ли удалённый API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::agent::Agent;
use crate::category::categorize_prompt;

/// Запускает HTTP сервер на указанном порту.
pub async fn serve(agent: Agent, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let router = build_router(Arc::new(agent));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 HTTP API слушает на http://{}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}

/// Собирает роутер; вынесено отдельно, чтобы тесты могли поднять
/// сервер на свободном порту.
pub fn build_router(agent: Arc<Agent>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/categorize", post(api_categorize))
        .route("/api/respond", post(api_respond))
        .route("/api/status", get(api_status))
        .with_state(agent)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Deserialize)]
struct PromptRequest {
    prompt: Option<String>,
    #[serde(default)]
    use_remote: bool,
}

async fn api_categorize(
    Json(body): Json<PromptRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let prompt = require_prompt(body.prompt)?;
    let category = categorize_prompt(&prompt);

    Ok(Json(json!({
        "prompt": prompt,
        "category": category,
    })))
}

async fn api_respond(
    State(agent): State<Arc<Agent>>,
    Json(body): Json<PromptRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let prompt = require_prompt(body.prompt)?;
    let result = agent.process(&prompt, body.use_remote).await;

    match serde_json::to_value(&result) {
        Ok(value) => Ok(Json(value)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )),
    }
}

async fn api_status(State(agent): State<Arc<Agent>>) -> Json<Value> {
    Json(json!({ "remote_available": agent.is_remote_configured() }))
}

fn require_prompt(prompt: Option<String>) -> Result<String, (StatusCode, Json<Value>)> {
    prompt.ok_or((
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "в запросе нет поля 'prompt'" })),
    ))
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<title>Агентик — симулятор AI-агента</title>
<style>
  body { font-family: sans-serif; max-width: 720px; margin: 2em auto; padding: 0 1em; }
  textarea { width: 100%; height: 90px; box-sizing: border-box; }
  button { padding: 0.4em 1.2em; margin-top: 0.5em; }
  .meta { color: #666; font-size: 0.9em; margin-top: 1em; }
  pre { background: #f4f4f4; padding: 1em; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Агентик</h1>
<p>Введите промпт — агент определит категорию и ответит шаблоном
или через OpenAI API, если он настроен.</p>

<textarea id="prompt" placeholder="Например: summarize this article"></textarea><br>
<label><input type="checkbox" id="use_remote"> использовать OpenAI</label><br>
<button onclick="send()">Отправить</button>

<div class="meta" id="meta"></div>
<pre id="response" hidden></pre>

<script>
async function send() {
  const prompt = document.getElementById('prompt').value;
  const use_remote = document.getElementById('use_remote').checked;

  const res = await fetch('/api/respond', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ prompt, use_remote }),
  });
  const data = await res.json();

  const meta = document.getElementById('meta');
  const out = document.getElementById('response');
  if (!res.ok) {
    meta.textContent = 'Ошибка: ' + (data.error || res.status);
    out.hidden = true;
    return;
  }
  meta.textContent = 'категория: ' + data.category +
    ' · режим: ' + (data.used_remote ? 'OpenAI' : 'шаблон');
  out.textContent = data.response;
  out.hidden = false;
}
</script>
</body>
</html>
"##;
