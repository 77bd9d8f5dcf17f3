//! # Storefront demo
//!
//! Starts the storefront, seeds the demo catalog and plays a short shopping conversation
//! through the assistant's call surface, printing every response as JSON.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use serde_json::{json, Value};
use storefront_cart::config::StorefrontConfig;
use storefront_cart::lifecycle::{seed_catalog, setup_tracing, Storefront};
use storefront_cart::model::UserId;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    let storefront = Storefront::start(config).map_err(|e| e.to_string())?;
    seed_catalog(&storefront.products)
        .await
        .map_err(|e| e.to_string())?;

    let user = UserId::anonymous();
    let script: Vec<(&str, Value)> = vec![
        ("searchProducts", json!({ "query": "audio" })),
        ("analyzeReviews", json!({ "productId": "1" })),
        ("recommendProducts", json!({ "productId": "3", "type": "complementary" })),
        ("addToCart", json!({ "productId": "1", "quantity": 2 })),
        ("addToCart", json!({ "productId": 3 })),
        ("updateCartItem", json!({ "productId": "3", "quantity": 9 })),
        ("updateCartItem", json!({ "productId": "3", "quantity": 2 })),
        ("removeFromCart", json!({ "productId": "3" })),
        ("getCart", json!({})),
        ("checkout", json!({})),
        ("getCart", json!({})),
    ];

    for (name, arguments) in script {
        let span = tracing::info_span!("conversation", action = name);
        let response = storefront
            .assistant
            .handle_call(&user, name, arguments)
            .instrument(span)
            .await;
        let rendered = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
        println!("> {}\n{}\n", name, rendered);
    }

    info!("Demo finished");
    storefront.shutdown().await.map_err(|e| e.to_string())
}
