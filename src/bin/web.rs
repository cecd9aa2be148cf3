//! Single binary web server: JSON API over the roster, the match log and every derived stat.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Blobs are stored as JSON files under DATA_DIR (default "data").

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use rink_stats::{
    completed_matches, goalie_leaderboard, goalie_stats, head_to_head, live_match_stats,
    match_detail, opponent_stats, period_summary, player_match_history, player_stats,
    skater_leaderboard, BlobStore, HockeyError, HockeyState, NewGoal, NewShot, OpponentId,
    PlayerId, Position, PossessionType, RatingBand,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Live state plus the store it is persisted to after every mutation.
struct AppData {
    state: RwLock<HockeyState>,
    store: BlobStore,
}

type AppState = Data<AppData>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerBody {
    name: String,
    jersey_number: u8,
    position: Position,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartMatchBody {
    player_ids: Vec<PlayerId>,
    opponent_name: String,
    starting_goalie_id: PlayerId,
    #[serde(default)]
    centers: Vec<PlayerId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PenaltyBody {
    player_id: PlayerId,
    minutes: u32,
    infraction: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PossessionBody {
    #[serde(default)]
    player_id: Option<PlayerId>,
    #[serde(rename = "type")]
    kind: PossessionType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaceoffBody {
    winner_id: PlayerId,
    loser_id: PlayerId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwapGoalieBody {
    #[serde(default)]
    goalie_id: Option<PlayerId>,
}

#[derive(Deserialize)]
struct SummaryQuery {
    #[serde(default)]
    full: bool,
}

/// Path segment: player id (e.g. /api/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

/// Path segment: match id (e.g. /api/matches/{match_id})
#[derive(Deserialize)]
struct MatchPath {
    match_id: String,
}

#[derive(Deserialize)]
struct OpponentBody {
    name: String,
}

/// Path segment: saved opponent id (e.g. /api/opponents/saved/{opponent_id})
#[derive(Deserialize)]
struct SavedOpponentPath {
    opponent_id: OpponentId,
}

/// Path segment: opponent name, exactly as recorded.
#[derive(Deserialize)]
struct OpponentPath {
    name: String,
}

fn error_response(e: &HockeyError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        HockeyError::PlayerNotFound(_)
        | HockeyError::MatchNotFound(_)
        | HockeyError::OpponentNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Apply a mutation to a copy of the state, persist it and only then make it live.
/// A failed write leaves the in-memory state as it was.
async fn mutate<T, F>(data: &AppData, apply: F) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(&mut HockeyState) -> Result<T, HockeyError>,
{
    let mut state = data.state.write().await;
    let mut next = state.clone();
    let result = match apply(&mut next) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Rejected: {}", e);
            return error_response(&e);
        }
    };
    if let Err(e) = data.store.save_state(&next).await {
        log::error!("Failed to persist state: {}", e);
        return HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }));
    }
    *state = next;
    HttpResponse::Ok().json(result)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "rink-stats",
    })
}

/// Roster, sorted by jersey number.
#[get("/api/players")]
async fn api_list_players(data: AppState) -> HttpResponse {
    let state = data.state.read().await;
    let mut players = state.players.clone();
    players.sort_by_key(|p| p.jersey_number);
    HttpResponse::Ok().json(players)
}

#[post("/api/players")]
async fn api_add_player(data: AppState, body: Json<PlayerBody>) -> HttpResponse {
    mutate(&data, |s| s.add_player(&body.name, body.jersey_number, body.position)).await
}

#[put("/api/players/{player_id}")]
async fn api_update_player(data: AppState, path: Path<PlayerPath>, body: Json<PlayerBody>) -> HttpResponse {
    mutate(&data, |s| {
        s.update_player(&path.player_id, &body.name, body.jersey_number, body.position)
    })
    .await
}

#[delete("/api/players/{player_id}")]
async fn api_delete_player(data: AppState, path: Path<PlayerPath>) -> HttpResponse {
    mutate(&data, |s| s.delete_player(&path.player_id)).await
}

/// Career stats: goalie stats for goalies, skater stats for everyone else.
#[get("/api/players/{player_id}/stats")]
async fn api_player_stats(data: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let state = data.state.read().await;
    let Some(player) = state.player(&path.player_id) else {
        return error_response(&HockeyError::PlayerNotFound(path.player_id.clone()));
    };
    if player.is_goalie() {
        let stats = goalie_stats(&state.players, &state.matches, &player.id);
        let band = RatingBand::of(stats.rating);
        HttpResponse::Ok().json(serde_json::json!({ "player": player, "goalie": stats, "band": band }))
    } else {
        let stats = player_stats(&state.matches, &player.id);
        let band = RatingBand::of(stats.rating);
        HttpResponse::Ok().json(serde_json::json!({ "player": player, "skater": stats, "band": band }))
    }
}

#[get("/api/players/{player_id}/history")]
async fn api_player_history(data: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let state = data.state.read().await;
    if state.player(&path.player_id).is_none() {
        return error_response(&HockeyError::PlayerNotFound(path.player_id.clone()));
    }
    HttpResponse::Ok().json(player_match_history(&state.matches, &path.player_id))
}

#[get("/api/leaderboard")]
async fn api_leaderboard(data: AppState) -> HttpResponse {
    let state = data.state.read().await;
    HttpResponse::Ok().json(serde_json::json!({
        "skaters": skater_leaderboard(&state.players, &state.matches),
        "goalies": goalie_leaderboard(&state.players, &state.matches),
    }))
}

/// Completed matches, newest first.
#[get("/api/matches")]
async fn api_list_matches(data: AppState) -> HttpResponse {
    let state = data.state.read().await;
    HttpResponse::Ok().json(completed_matches(&state.matches))
}

#[get("/api/matches/{match_id}")]
async fn api_match_detail(data: AppState, path: Path<MatchPath>) -> HttpResponse {
    let state = data.state.read().await;
    match state.match_by_id(&path.match_id) {
        Some(game) => HttpResponse::Ok().json(match_detail(&state.players, game)),
        None => error_response(&HockeyError::MatchNotFound(path.match_id.clone())),
    }
}

#[delete("/api/matches/{match_id}")]
async fn api_delete_match(data: AppState, path: Path<MatchPath>) -> HttpResponse {
    mutate(&data, |s| s.delete_match(&path.match_id)).await
}

/// Start a match (fails if one is already in progress).
#[post("/api/matches")]
async fn api_start_match(data: AppState, body: Json<StartMatchBody>) -> HttpResponse {
    mutate(&data, |s| {
        s.start_match(
            &body.player_ids,
            &body.opponent_name,
            &body.starting_goalie_id,
            &body.centers,
        )
    })
    .await
}

#[get("/api/active")]
async fn api_active_match(data: AppState) -> HttpResponse {
    let state = data.state.read().await;
    match state.active_match() {
        Some(game) => HttpResponse::Ok().json(game),
        None => error_response(&HockeyError::NoActiveMatch),
    }
}

#[get("/api/active/stats")]
async fn api_active_stats(data: AppState) -> HttpResponse {
    let state = data.state.read().await;
    match state.active_match() {
        Some(game) => HttpResponse::Ok().json(live_match_stats(&state.players, game)),
        None => error_response(&HockeyError::NoActiveMatch),
    }
}

/// Period recap; `?full=true` covers the whole match once regulation is reached.
#[get("/api/active/summary")]
async fn api_active_summary(data: AppState, query: Query<SummaryQuery>) -> HttpResponse {
    let state = data.state.read().await;
    match state.active_match() {
        Some(game) => HttpResponse::Ok().json(period_summary(&state.players, game, query.full)),
        None => error_response(&HockeyError::NoActiveMatch),
    }
}

#[post("/api/active/goals")]
async fn api_record_goal(data: AppState, body: Json<NewGoal>) -> HttpResponse {
    let goal = body.into_inner();
    mutate(&data, |s| s.record_goal(goal)).await
}

#[post("/api/active/shots")]
async fn api_record_shot(data: AppState, body: Json<NewShot>) -> HttpResponse {
    let shot = body.into_inner();
    mutate(&data, |s| s.record_shot(shot)).await
}

#[post("/api/active/penalties")]
async fn api_record_penalty(data: AppState, body: Json<PenaltyBody>) -> HttpResponse {
    mutate(&data, |s| s.record_penalty(&body.player_id, body.minutes, &body.infraction)).await
}

#[post("/api/active/possessions")]
async fn api_record_possession(data: AppState, body: Json<PossessionBody>) -> HttpResponse {
    mutate(&data, |s| s.record_possession(body.player_id.as_deref(), body.kind)).await
}

#[post("/api/active/faceoffs")]
async fn api_record_faceoff(data: AppState, body: Json<FaceoffBody>) -> HttpResponse {
    mutate(&data, |s| s.record_faceoff(&body.winner_id, &body.loser_id)).await
}

#[post("/api/active/goalie")]
async fn api_swap_goalie(data: AppState, body: Json<SwapGoalieBody>) -> HttpResponse {
    mutate(&data, |s| s.swap_goalie(body.goalie_id.as_deref())).await
}

/// Close the current period: ends the match after regulation unless tied.
#[post("/api/active/period")]
async fn api_finish_period(data: AppState) -> HttpResponse {
    mutate(&data, |s| s.finish_period()).await
}

#[post("/api/active/end")]
async fn api_end_match(data: AppState) -> HttpResponse {
    mutate(&data, |s| s.end_match()).await
}

/// Saved opponents, in the order they were added.
#[get("/api/opponents/saved")]
async fn api_saved_opponents(data: AppState) -> HttpResponse {
    let state = data.state.read().await;
    HttpResponse::Ok().json(&state.opponents)
}

#[post("/api/opponents/saved")]
async fn api_add_opponent(data: AppState, body: Json<OpponentBody>) -> HttpResponse {
    mutate(&data, |s| s.add_opponent(&body.name)).await
}

#[delete("/api/opponents/saved/{opponent_id}")]
async fn api_delete_opponent(data: AppState, path: Path<SavedOpponentPath>) -> HttpResponse {
    mutate(&data, |s| s.delete_opponent(&path.opponent_id)).await
}

#[get("/api/opponents")]
async fn api_opponents(data: AppState) -> HttpResponse {
    let state = data.state.read().await;
    HttpResponse::Ok().json(opponent_stats(&state.matches))
}

#[get("/api/opponents/{name}")]
async fn api_opponent_detail(data: AppState, path: Path<OpponentPath>) -> HttpResponse {
    let state = data.state.read().await;
    HttpResponse::Ok().json(head_to_head(&state.matches, &path.name))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| default_data_dir());

    let store = BlobStore::directory(&data_dir);
    let state = store
        .load_state()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    if let Some(game) = state.active_match() {
        log::info!("Resuming active match {} against {}", game.id, game.opponent_name);
    }

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{} (data in {})", bind.0, bind.1, data_dir);

    let data = Data::new(AppData {
        state: RwLock::new(state),
        store,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .service(api_health)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_update_player)
            .service(api_delete_player)
            .service(api_player_stats)
            .service(api_player_history)
            .service(api_leaderboard)
            .service(api_list_matches)
            .service(api_start_match)
            .service(api_match_detail)
            .service(api_delete_match)
            .service(api_active_match)
            .service(api_active_stats)
            .service(api_active_summary)
            .service(api_record_goal)
            .service(api_record_shot)
            .service(api_record_penalty)
            .service(api_record_possession)
            .service(api_record_faceoff)
            .service(api_swap_goalie)
            .service(api_finish_period)
            .service(api_end_match)
            .service(api_saved_opponents)
            .service(api_add_opponent)
            .service(api_delete_opponent)
            .service(api_opponents)
            .service(api_opponent_detail)
    })
    .bind(bind)?
    .run()
    .await
}
