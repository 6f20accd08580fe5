use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Seeded entry: id, name, height, weight, types, has front sprite.
type Seed = (u32, &'static str, u32, u32, &'static [&'static str], bool);

const SEED: [Seed; 45] = [
    (1, "bulbasaur", 7, 69, &["grass", "poison"], true),
    (2, "ivysaur", 10, 130, &["grass", "poison"], true),
    (3, "venusaur", 20, 1000, &["grass", "poison"], true),
    (4, "charmander", 6, 85, &["fire"], true),
    (5, "charmeleon", 11, 190, &["fire"], true),
    (6, "charizard", 17, 905, &["fire", "flying"], true),
    (7, "squirtle", 5, 90, &["water"], true),
    (8, "wartortle", 10, 225, &["water"], true),
    (9, "blastoise", 16, 855, &["water"], true),
    (10, "caterpie", 3, 29, &["bug"], true),
    (11, "metapod", 7, 99, &["bug"], true),
    (12, "butterfree", 11, 320, &["bug", "flying"], true),
    (13, "weedle", 3, 32, &["bug", "poison"], true),
    (14, "kakuna", 6, 100, &["bug", "poison"], true),
    (15, "beedrill", 10, 295, &["bug", "poison"], true),
    (16, "pidgey", 3, 18, &["normal", "flying"], true),
    (17, "pidgeotto", 11, 300, &["normal", "flying"], true),
    (18, "pidgeot", 15, 395, &["normal", "flying"], true),
    (19, "rattata", 3, 35, &["normal"], true),
    (20, "raticate", 7, 185, &["normal"], true),
    (21, "spearow", 3, 20, &["normal", "flying"], true),
    (22, "fearow", 12, 380, &["normal", "flying"], true),
    (23, "ekans", 20, 69, &["poison"], true),
    (24, "arbok", 35, 650, &["poison"], true),
    (25, "pikachu", 4, 60, &["electric"], true),
    (26, "raichu", 8, 300, &["electric"], true),
    (27, "sandshrew", 6, 120, &["ground"], true),
    (28, "sandslash", 10, 295, &["ground"], true),
    (29, "nidoran-f", 4, 70, &["poison"], true),
    (30, "nidorina", 8, 200, &["poison"], true),
    (31, "nidoqueen", 13, 600, &["poison", "ground"], true),
    (32, "nidoran-m", 5, 90, &["poison"], false),
    (33, "nidorino", 9, 195, &["poison"], true),
    (34, "nidoking", 14, 620, &["poison", "ground"], true),
    (35, "clefairy", 6, 75, &["fairy"], true),
    (36, "clefable", 13, 400, &["fairy"], true),
    (37, "vulpix", 6, 99, &["fire"], true),
    (38, "ninetales", 11, 199, &["fire"], true),
    (39, "jigglypuff", 5, 55, &["normal", "fairy"], true),
    (40, "wigglytuff", 10, 120, &["normal", "fairy"], true),
    (41, "zubat", 8, 75, &["poison", "flying"], true),
    (42, "golbat", 16, 550, &["poison", "flying"], true),
    (43, "oddish", 5, 54, &["grass", "poison"], true),
    (44, "gloom", 8, 86, &["grass", "poison"], true),
    (45, "vileplume", 12, 186, &["grass", "poison"], true),
];

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

#[derive(Clone, Debug)]
pub struct Species {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<String>,
    pub sprite: Option<String>,
}

/// One entry of the list envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListEnvelope {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

pub type Pokedex = Arc<Vec<Species>>;

pub fn seeded() -> Vec<Species> {
    SEED.iter()
        .map(|&(id, name, height, weight, types, has_sprite)| Species {
            id,
            name: name.to_string(),
            height,
            weight,
            types: types.iter().map(|t| t.to_string()).collect(),
            sprite: has_sprite.then(|| format!("{SPRITE_BASE}/{id}.png")),
        })
        .collect()
}

pub fn app() -> Router {
    app_with(seeded())
}

pub fn app_with(species: Vec<Species>) -> Router {
    let dex: Pokedex = Arc::new(species);
    Router::new()
        .route("/pokemon", get(list_pokemon))
        .route("/pokemon/{id_or_name}", get(get_pokemon))
        .with_state(dex)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Absolute origin for links, taken from the `Host` header like the real API
/// would render it. Falls back to relative links.
fn origin(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(|host| format!("http://{host}"))
        .unwrap_or_default()
}

async fn list_pokemon(
    State(dex): State<Pokedex>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Json<ListEnvelope> {
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(20);
    let origin = origin(&headers);
    tracing::debug!(offset, limit, "list pokemon");

    let results = dex
        .iter()
        .skip(offset)
        .take(limit)
        .map(|s| NamedResource {
            name: s.name.clone(),
            url: format!("{origin}/pokemon/{}/", s.id),
        })
        .collect();

    let next = (offset + limit < dex.len())
        .then(|| format!("{origin}/pokemon?offset={}&limit={limit}", offset + limit));
    let previous = (offset > 0)
        .then(|| format!("{origin}/pokemon?offset={}&limit={limit}", offset.saturating_sub(limit)));

    Json(ListEnvelope {
        count: dex.len(),
        next,
        previous,
        results,
    })
}

async fn get_pokemon(
    State(dex): State<Pokedex>,
    Path(id_or_name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    tracing::debug!(%id_or_name, "get pokemon");
    let by_id = id_or_name.parse::<u32>().ok();
    dex.iter()
        .find(|s| s.name == id_or_name || Some(s.id) == by_id)
        .map(|s| Json(detail_json(s)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Render a species the way `/pokemon/{idOrName}` does, including fields the
/// client is expected to ignore.
pub fn detail_json(species: &Species) -> Value {
    let types: Vec<Value> = species
        .types
        .iter()
        .enumerate()
        .map(|(slot, name)| json!({ "slot": slot + 1, "type": { "name": name, "url": "" } }))
        .collect();
    json!({
        "id": species.id,
        "name": species.name,
        "height": species.height,
        "weight": species.weight,
        "base_experience": 64,
        "order": species.id,
        "types": types,
        "sprites": {
            "front_default": species.sprite,
            "back_default": null
        }
    })
}
