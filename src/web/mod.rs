pub mod assets;

pub use assets::TeamAssets;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::cricket::{City, InputError, MatchState, Team};
use crate::presenter::{PredictError, PresentationOutput, Presenter};

#[derive(Clone)]
pub struct AppState {
    pub presenter: Presenter,
    pub assets: TeamAssets,
}

/// Mount point of the static logo directory.
pub const ASSETS_PREFIX: &str = "/assets";

/// Build the Axum router for the form.
pub fn router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/options", get(options_handler))
        .route("/api/predict", post(predict_handler))
        .nest_service(ASSETS_PREFIX, ServeDir::new(assets_dir))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub teams: Vec<Team>,
    pub cities: Vec<City>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub output: PresentationOutput,
    pub batting_logo: String,
    pub bowling_logo: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short notice for the page banner.
    pub warning: &'static str,
    pub detail: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn invalid_input(detail: String) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            warning: InputError::NOTICE,
            detail,
        }),
    )
}

/// Serve the form page, injecting the model name.
async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let html = FORM_HTML.replace(
        "<body>",
        &format!(
            r#"<body data-model="{}">"#,
            escape_attr(state.presenter.model_name())
        ),
    );
    Html(html)
}

/// GET /api/options
async fn options_handler() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        teams: Team::sorted(),
        cities: City::sorted(),
    })
}

/// POST /api/predict
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MatchState>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(match_state) = payload.map_err(|rejection| {
        warn!("Rejected form payload: {}", rejection.body_text());
        invalid_input(rejection.body_text())
    })?;

    match state.presenter.predict_match(&match_state) {
        Ok(output) => {
            info!(
                "{} vs {}: {:.2}% / {:.2}%",
                output.batting_team, output.bowling_team, output.win_percent, output.loss_percent
            );
            Ok(Json(PredictResponse {
                batting_logo: state.assets.logo(output.batting_team).to_string(),
                bowling_logo: state.assets.logo(output.bowling_team).to_string(),
                output,
            }))
        }
        Err(PredictError::InvalidInput(e)) => {
            warn!("Invalid match data: {}", e);
            Err(invalid_input(e.to_string()))
        }
        Err(PredictError::Model(e)) => {
            error!("Model {} failed: {}", state.presenter.model_name(), e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    warning: "Prediction failed",
                    detail: e.to_string(),
                }),
            ))
        }
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Embedded single-file form (HTML + CSS + JS)
const FORM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>IPL Win Predictor</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #ef476f;
    --green: #28a745;
    --red: #dc3545;
    --info: #6c63ff;
    --warn: #ff9800;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  main { max-width: 760px; margin: 0 auto; padding: 1.5rem 2rem; display: grid; gap: 1.2rem; }
  h1 { text-align: center; color: var(--accent); font-size: 2rem; padding: 1rem 0 .5rem; border-bottom: 1px solid var(--border); }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; padding: 1.2rem; display: grid; gap: 1rem; }
  .row { display: grid; gap: 1rem; }
  .row.two { grid-template-columns: 1fr 1fr; }
  .row.three { grid-template-columns: 1fr 1fr 1fr; }
  @media (max-width: 640px) { .row.two, .row.three { grid-template-columns: 1fr; } }
  label { display: grid; gap: .35rem; color: var(--muted); font-size: .8rem; text-transform: uppercase; letter-spacing: .05em; }
  select, input { background: var(--bg); color: var(--text); border: 1px solid var(--border); border-radius: 6px; padding: .5rem .6rem; font-size: .95rem; }
  button { background: var(--accent); color: #fff; border: none; border-radius: 6px; padding: .7rem 1.2rem; font-weight: 700; cursor: pointer; }
  button:disabled { opacity: .6; cursor: wait; }
  .notice { border-radius: 8px; padding: .8rem 1rem; font-size: .95rem; }
  .notice.warn { background: rgba(255,152,0,.15); color: var(--warn); }
  .notice.win { background: rgba(40,167,69,.15); color: var(--green); }
  .notice.loss { background: rgba(220,53,69,.15); color: var(--red); }
  .notice.info { background: rgba(108,99,255,.15); color: var(--info); }
  .matchup { display: grid; grid-template-columns: 4fr 1fr 4fr; align-items: center; text-align: center; }
  .matchup img { width: 150px; height: 150px; object-fit: contain; }
  .matchup .caption { color: var(--muted); font-size: .85rem; margin-top: .3rem; }
  .vs { font-size: 1.4rem; font-weight: 700; }
  .bar { display: flex; height: 28px; border-radius: 6px; overflow: hidden; background: var(--border); }
  .bar div { height: 100%; }
  .bar .win { background: var(--green); }
  .bar .loss { background: var(--red); }
  .legend { display: flex; justify-content: center; gap: 1.5rem; font-size: .8rem; color: var(--muted); }
  .swatch { display: inline-block; width: 10px; height: 10px; border-radius: 2px; margin-right: .35rem; }
  .hidden { display: none; }
  footer { text-align: center; color: var(--muted); font-size: .75rem; }
</style>
</head>
<body>
<main>
  <h1>🏏 IPL Win Predictor</h1>

  <form class="panel" id="match-form">
    <div class="row two">
      <label>🏏 Select Batting Team<select id="batting_team" required></select></label>
      <label>⚾ Select Bowling Team<select id="bowling_team" required></select></label>
    </div>
    <label>📍 Match Location<select id="city" required></select></label>
    <label>🎯 Target Score<input id="target" type="number" min="1" step="1" value="1" required></label>
    <div class="row three">
      <label>✅ Current Score<input id="current_score" type="number" min="0" step="1" value="0" required></label>
      <label>⏱ Overs Completed<input id="overs_completed" type="number" min="0" max="20" step="0.1" value="0.0" required></label>
      <label>❌ Wickets Lost<input id="wickets_lost" type="number" min="0" max="10" step="1" value="0" required></label>
    </div>
    <button type="submit" id="predict-btn">Predict Probability</button>
  </form>

  <div class="notice warn hidden" id="warning"></div>

  <section class="panel hidden" id="result">
    <div class="matchup">
      <div><img id="batting-logo" alt=""><div class="caption" id="batting-caption"></div></div>
      <div class="vs">🆚</div>
      <div><img id="bowling-logo" alt=""><div class="caption" id="bowling-caption"></div></div>
    </div>
    <h3>🧮 Win Probability</h3>
    <div class="notice win" id="win-line"></div>
    <div class="notice loss" id="loss-line"></div>
    <div class="bar"><div class="win" id="bar-win"></div><div class="loss" id="bar-loss"></div></div>
    <div class="legend">
      <span><span class="swatch" style="background:var(--green)"></span><span id="legend-win"></span></span>
      <span><span class="swatch" style="background:var(--red)"></span><span id="legend-loss"></span></span>
    </div>
    <div class="notice info" id="commentary"></div>
  </section>

  <footer id="model-footer"></footer>
</main>

<script>
const $ = id => document.getElementById(id);

function fillSelect(el, values) {
  el.innerHTML = values.map(v => `<option value="${v}">${v}</option>`).join('');
}

async function loadOptions() {
  const r = await fetch('/api/options');
  if (!r.ok) return;
  const o = await r.json();
  fillSelect($('batting_team'), o.teams);
  fillSelect($('bowling_team'), o.teams);
  fillSelect($('city'), o.cities);
}

function showWarning(text) {
  const w = $('warning');
  w.textContent = '⚠️ ' + text;
  w.classList.remove('hidden');
  $('result').classList.add('hidden');
}

function showLogo(img, caption, src, team) {
  img.src = src;
  img.alt = team;
  img.onerror = () => { img.style.display = 'none'; };
  img.style.display = '';
  caption.textContent = team;
}

function render(p) {
  $('warning').classList.add('hidden');
  showLogo($('batting-logo'), $('batting-caption'), p.batting_logo, p.batting_team);
  showLogo($('bowling-logo'), $('bowling-caption'), p.bowling_logo, p.bowling_team);
  $('win-line').innerHTML = `🔸 <b>${p.batting_team}</b> Win Chance: <b>${p.win_percent}%</b>`;
  $('loss-line').innerHTML = `🔹 <b>${p.bowling_team}</b> Win Chance: <b>${p.loss_percent}%</b>`;
  $('bar-win').style.width = (p.bar.win_fraction * 100) + '%';
  $('bar-loss').style.width = (p.bar.loss_fraction * 100) + '%';
  $('legend-win').textContent = p.batting_team;
  $('legend-loss').textContent = p.bowling_team;
  $('commentary').textContent = '📣 Commentary: ' + p.commentary_message;
  $('result').classList.remove('hidden');
}

$('match-form').addEventListener('submit', async ev => {
  ev.preventDefault();
  const btn = $('predict-btn');
  btn.disabled = true;
  const body = {
    batting_team: $('batting_team').value,
    bowling_team: $('bowling_team').value,
    city: $('city').value,
    target: parseInt($('target').value, 10),
    current_score: parseInt($('current_score').value, 10),
    overs_completed: parseFloat($('overs_completed').value),
    wickets_lost: parseInt($('wickets_lost').value, 10),
  };
  try {
    const r = await fetch('/api/predict', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body),
    });
    const data = await r.json();
    if (r.ok) render(data); else showWarning(data.warning);
  } catch (e) {
    showWarning('Prediction failed');
  } finally {
    btn.disabled = false;
  }
});

document.addEventListener('DOMContentLoaded', () => {
  $('model-footer').textContent = 'Model: ' + (document.body.dataset.model || '–');
});
loadOptions();
</script>
</body>
</html>"#;
