use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use serde_json::{json, Value};

use solana_balance_viewer::{BalanceFetcher, Config, FetchError, HttpIconProbe, IconProbe};

const WALLET: &str = "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1";

type Seen = Arc<Mutex<Vec<(HashMap<String, String>, Value)>>>;

fn search_assets_result() -> Value {
    json!({
        "total": 3,
        "limit": 1000,
        "items": [
            {
                "id": "Bonk111",
                "content": {
                    "metadata": { "name": "Bonk", "symbol": "BONK" },
                    "links": { "image": "https://img.example/bonk.png" }
                },
                "token_info": { "balance": 100000000, "decimals": 5 }
            },
            {
                "id": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                "content": {
                    "metadata": { "name": "USD Coin", "symbol": "USDC" },
                    "links": { "image": "https://img.example/usdc.png" }
                },
                "token_info": {
                    "balance": 1500000000,
                    "decimals": 9,
                    "price_info": { "price_per_token": 20.0, "currency": "USDC" }
                }
            },
            {
                "id": "Empty111",
                "content": { "metadata": { "name": "Empty", "symbol": "EMPTY" } },
                "token_info": { "balance": 0, "decimals": 6, "price_info": { "price_per_token": 500.0, "currency": "USDC" } }
            }
        ]
    })
}

async fn serve(price_status: StatusCode, seen: Seen) -> SocketAddr {
    let rpc = move |Query(query): Query<HashMap<String, String>>, Json(body): Json<Value>| {
        let seen = seen.clone();
        async move {
            seen.lock().unwrap().push((query, body.clone()));
            let result = match body["method"].as_str() {
                Some("searchAssets") => search_assets_result(),
                Some("getBalance") => json!({ "context": { "slot": 1 }, "value": 2000000000u64 }),
                _ => return Json(json!({ "jsonrpc": "2.0", "id": body["id"], "error": { "code": -32601, "message": "Method not found" } })),
            };
            Json(json!({ "jsonrpc": "2.0", "id": body["id"], "result": result }))
        }
    };

    let price = move |Query(query): Query<HashMap<String, String>>| async move {
        if price_status != StatusCode::OK {
            return (price_status, "upstream unavailable").into_response();
        }
        assert_eq!(query.get("ids").map(String::as_str), Some("solana"));
        assert_eq!(query.get("vs_currencies").map(String::as_str), Some("usd"));
        Json(json!({ "solana": { "usd": 150.0 } })).into_response()
    };

    let app = Router::new()
        .route("/", post(rpc))
        .route("/simple/price", get(price))
        .route("/icon.png", get(|| async { StatusCode::OK }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config(addr: SocketAddr) -> Config {
    Config::parse_from([
        "solana-balance-viewer".to_string(),
        "--helius-api-key".to_string(),
        "test-key".to_string(),
        "--helius-url".to_string(),
        format!("http://{}/", addr),
        "--coingecko-url".to_string(),
        format!("http://{}", addr),
    ])
}

#[tokio::test]
async fn fetches_and_values_wallet_end_to_end() {
    let seen = Seen::default();
    let addr = serve(StatusCode::OK, seen.clone()).await;

    let snapshot = BalanceFetcher::from_config(&config(addr))
        .fetch(WALLET)
        .await
        .unwrap();

    let native = snapshot.native.as_ref().unwrap();
    assert_eq!(native.ui_amount, 2.0);
    assert_eq!(native.valuation().value, Some(300.0));

    let symbols: Vec<&str> = snapshot.tokens.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["USDC", "BONK"]);
    assert_eq!(snapshot.tokens[0].valuation().value, Some(30.0));
    assert_eq!(snapshot.tokens[1].ui_amount, 1000.0);
    assert_eq!(snapshot.total_value_usd, 330.0);
}

#[tokio::test]
async fn sends_api_key_and_rpc_shapes() {
    let seen = Seen::default();
    let addr = serve(StatusCode::OK, seen.clone()).await;

    BalanceFetcher::from_config(&config(addr))
        .fetch(WALLET)
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen
        .iter()
        .all(|(query, _)| query.get("api-key").map(String::as_str) == Some("test-key")));

    let search = seen
        .iter()
        .map(|(_, body)| body)
        .find(|body| body["method"] == "searchAssets")
        .unwrap();
    assert_eq!(search["jsonrpc"], "2.0");
    assert_eq!(search["id"], "helius-test");
    assert_eq!(search["params"], json!({ "ownerAddress": WALLET, "tokenType": "fungible" }));

    let balance = seen
        .iter()
        .map(|(_, body)| body)
        .find(|body| body["method"] == "getBalance")
        .unwrap();
    assert_eq!(balance["id"], "helius-sol-balance");
    assert_eq!(balance["params"], json!([WALLET]));
}

#[tokio::test]
async fn price_api_500_fails_the_fetch() {
    let addr = serve(StatusCode::INTERNAL_SERVER_ERROR, Seen::default()).await;

    let result = BalanceFetcher::from_config(&config(addr)).fetch(WALLET).await;
    assert_eq!(result, Err(FetchError::FetchFailed));
}

#[tokio::test]
async fn unreachable_indexer_fails_the_fetch() {
    let addr = serve(StatusCode::OK, Seen::default()).await;
    let mut config = config(addr);
    config.helius_url = "http://127.0.0.1:1/".to_string();

    let result = BalanceFetcher::from_config(&config).fetch(WALLET).await;
    assert_eq!(result, Err(FetchError::FetchFailed));
}

#[tokio::test]
async fn icon_probe_checks_reachability() {
    let addr = serve(StatusCode::OK, Seen::default()).await;
    let probe = HttpIconProbe::default();

    assert!(probe.is_loadable(&format!("http://{}/icon.png", addr)).await);
    assert!(!probe.is_loadable(&format!("http://{}/missing.png", addr)).await);
}
