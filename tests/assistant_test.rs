use rust_decimal::Decimal;
use serde_json::json;
use storefront_cart::assistant::{ActionResponse, CartCommand};
use storefront_cart::config::StorefrontConfig;
use storefront_cart::lifecycle::{seed_catalog, Storefront};
use storefront_cart::model::{OrderStatus, ProductCreate, ProductId, UserId};

async fn storefront_with(config: StorefrontConfig) -> Storefront {
    let storefront = Storefront::start(config).unwrap();
    seed_catalog(&storefront.products).await.unwrap();
    storefront
}

async fn storefront() -> Storefront {
    storefront_with(StorefrontConfig::default()).await
}

fn pid(id: &str) -> ProductId {
    ProductId::parse(id).unwrap()
}

fn product_ids(response: &ActionResponse) -> Vec<String> {
    response
        .products()
        .expect("product list")
        .iter()
        .map(|p| p.id.to_string())
        .collect()
}

fn recommendation_ids(response: &ActionResponse) -> Vec<String> {
    response
        .cart()
        .expect("cart view")
        .recommendations
        .iter()
        .map(|p| p.id.to_string())
        .collect()
}

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 1e-6)
        .unwrap_or(false)
}

#[tokio::test]
async fn test_list_and_search() {
    let storefront = storefront().await;
    let user = UserId::anonymous();
    let assistant = &storefront.assistant;

    let all = assistant.handle_call(&user, "listProducts", json!({})).await;
    assert!(all.success);
    assert_eq!(product_ids(&all), vec!["1", "2", "3", "4", "5", "6"]);

    let audio = assistant
        .handle_call(&user, "searchProducts", json!({"query": "AUDIO"}))
        .await;
    assert!(audio.success);
    assert_eq!(product_ids(&audio), vec!["3", "6"]);

    let nothing = assistant
        .handle_call(&user, "searchProducts", json!({"query": "aspirateur"}))
        .await;
    assert!(nothing.success);
    assert!(product_ids(&nothing).is_empty());
    assert_eq!(nothing.message, "No products match \"aspirateur\"");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_limit_comes_from_config() {
    let config = StorefrontConfig {
        search_limit: 2,
        ..StorefrontConfig::default()
    };
    let storefront = storefront_with(config).await;

    let found = storefront
        .assistant
        .dispatch(
            &UserId::anonymous(),
            CartCommand::SearchProducts {
                query: "pro".into(),
            },
        )
        .await;
    assert_eq!(product_ids(&found), vec!["1", "2"]);

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_update_remove_conversation() {
    let storefront = storefront().await;
    let user = UserId::new("alice");
    let assistant = &storefront.assistant;

    let added = assistant
        .handle_call(&user, "addToCart", json!({"productId": "1", "quantity": 2}))
        .await;
    assert!(added.success, "{}", added.message);
    assert_eq!(added.message, "Added 2 x Laptop Pro X to the cart");
    assert_eq!(added.cart().unwrap().cart.quantity_of(&pid("1")), Some(2));
    assert_eq!(recommendation_ids(&added), vec!["5"]);

    let added = assistant
        .handle_call(&user, "addToCart", json!({"productId": 3}))
        .await;
    assert!(added.success);
    assert_eq!(added.cart().unwrap().cart.quantity_of(&pid("3")), Some(1));
    assert_eq!(recommendation_ids(&added), vec!["6"]);

    let updated = assistant
        .handle_call(&user, "updateCartItem", json!({"productId": "3", "quantity": 4}))
        .await;
    assert!(updated.success);
    assert_eq!(updated.message, "Quantity updated");
    assert_eq!(updated.cart().unwrap().cart.quantity_of(&pid("3")), Some(4));

    let cart = assistant.handle_call(&user, "getCart", json!({})).await;
    assert_eq!(cart.message, "Cart (6 items)");
    let mut recs = recommendation_ids(&cart);
    recs.sort();
    assert_eq!(recs, vec!["5", "6"]);

    let removed = assistant
        .handle_call(&user, "updateCartItem", json!({"productId": "3", "quantity": 0}))
        .await;
    assert!(removed.success);
    assert_eq!(removed.message, "Product removed from the cart");
    assert_eq!(removed.cart().unwrap().cart.quantity_of(&pid("3")), None);

    let absent = assistant
        .handle_call(&user, "removeFromCart", json!({"productId": "42"}))
        .await;
    assert!(absent.success);
    assert_eq!(absent.message, "Product 42 is not in the cart");
    assert_eq!(absent.cart().unwrap().cart.items.len(), 1);

    let removed = assistant
        .handle_call(&user, "removeFromCart", json!({"productId": "1"}))
        .await;
    assert!(removed.success);
    assert!(removed.cart().unwrap().cart.is_empty());

    let empty = assistant.handle_call(&user, "getCart", json!({})).await;
    assert_eq!(empty.message, "The cart is empty");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stock_policy_applies_to_add_and_update() {
    let storefront = storefront().await;
    let user = UserId::new("bob");
    let assistant = &storefront.assistant;

    let too_many = assistant
        .handle_call(&user, "addToCart", json!({"productId": "3", "quantity": 9}))
        .await;
    assert!(!too_many.success);
    assert_eq!(too_many.message, "Only 8 x Casque Audio Pro in stock");

    let ok = assistant
        .handle_call(&user, "addToCart", json!({"productId": "3", "quantity": 5}))
        .await;
    assert!(ok.success);

    let on_top = assistant
        .handle_call(&user, "addToCart", json!({"productId": "3", "quantity": 4}))
        .await;
    assert!(!on_top.success);

    let exact = assistant
        .handle_call(&user, "updateCartItem", json!({"productId": "3", "quantity": 8}))
        .await;
    assert!(exact.success);

    let over = assistant
        .handle_call(&user, "updateCartItem", json!({"productId": "3", "quantity": 9}))
        .await;
    assert!(!over.success);

    let cart = storefront.carts.get_cart(user).await.unwrap();
    assert_eq!(cart.quantity_of(&pid("3")), Some(8));

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_without_stock_policy_checkout_still_guards_the_catalog() {
    let config = StorefrontConfig {
        enforce_stock: false,
        ..StorefrontConfig::default()
    };
    let storefront = storefront_with(config).await;
    let user = UserId::new("carol");
    let assistant = &storefront.assistant;

    let added = assistant
        .handle_call(&user, "addToCart", json!({"productId": "3", "quantity": 9}))
        .await;
    assert!(added.success);

    let checkout = assistant.handle_call(&user, "checkout", json!({})).await;
    assert!(!checkout.success);
    assert_eq!(
        checkout.message,
        "Insufficient stock for 3: requested 9, available 8"
    );

    let cart = storefront.carts.get_cart(user).await.unwrap();
    assert_eq!(cart.quantity_of(&pid("3")), Some(9));
    assert_eq!(storefront.products.check_stock(pid("3")).await.unwrap(), 8);

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_places_order_and_empties_cart() {
    let storefront = storefront().await;
    let user = UserId::new("dave");
    let assistant = &storefront.assistant;

    assistant
        .handle_call(&user, "addToCart", json!({"productId": "1", "quantity": 2}))
        .await;
    let checkout = assistant.handle_call(&user, "checkout", json!({})).await;
    assert!(checkout.success, "{}", checkout.message);
    assert_eq!(checkout.message, "Order order_1 confirmed, total 2599.98");

    let order = checkout.order().expect("order receipt");
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.lines.len(), 1);

    let json = serde_json::to_value(&checkout).unwrap();
    assert_eq!(json["data"]["status"], "confirmed");
    assert!(approx(&json["data"]["total"], 2599.98));

    assert_eq!(storefront.products.check_stock(pid("1")).await.unwrap(), 8);
    let after = assistant.handle_call(&user, "getCart", json!({})).await;
    assert_eq!(after.message, "The cart is empty");

    let again = assistant.handle_call(&user, "checkout", json!({})).await;
    assert!(!again.success);
    assert_eq!(again.message, "Cannot place an order for an empty cart");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failures_are_responses_not_errors() {
    let storefront = storefront().await;
    let user = UserId::anonymous();
    let assistant = &storefront.assistant;

    let unknown = assistant.handle_call(&user, "buyEverything", json!({})).await;
    assert!(!unknown.success);
    assert_eq!(unknown.message, "Unknown action: buyEverything");

    let missing = assistant
        .handle_call(&user, "addToCart", json!({"productId": "99"}))
        .await;
    assert!(!missing.success);
    assert_eq!(missing.message, "Product not found: 99");

    let zero = assistant
        .handle_call(&user, "addToCart", json!({"productId": "1", "quantity": 0}))
        .await;
    assert!(!zero.success);
    assert_eq!(zero.message, "Invalid quantity: 0");

    let malformed = assistant
        .handle_call(&user, "removeFromCart", json!({"productId": "a b"}))
        .await;
    assert!(!malformed.success);

    let mistyped = assistant
        .handle_call(&user, "updateCartItem", json!({"productId": "1"}))
        .await;
    assert!(!mistyped.success);
    assert!(mistyped.data.is_none());

    let cart = storefront.carts.get_cart(user).await.unwrap();
    assert!(cart.is_empty());

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_response_json_shape() {
    let storefront = storefront().await;
    let user = UserId::new("erin");

    let response = storefront
        .assistant
        .handle_call(&user, "addToCart", json!({"productId": "6", "quantity": 3}))
        .await;
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["userId"], "erin");
    let item = &json["data"]["items"][0];
    assert_eq!(item["productId"], "6");
    assert_eq!(item["name"], "Enceinte Bluetooth Premium");
    assert_eq!(item["quantity"], 3);
    assert!(approx(&item["price"], 179.99));
    assert!(approx(&json["data"]["total"], 539.97));
    assert_eq!(json["data"]["recommendations"][0]["id"], "3");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_engine_call_names_drive_the_cart() {
    let storefront = storefront().await;
    let user = UserId::new("frank");
    let assistant = &storefront.assistant;

    let added = assistant
        .handle_call(&user, "addItem", json!({"productId": "4", "quantity": 2}))
        .await;
    assert!(added.success, "{}", added.message);
    assert_eq!(added.message, "Added 2 x Montre Connectée Sport to the cart");

    let updated = assistant
        .handle_call(&user, "updateQuantity", json!({"productId": 4, "quantity": 5}))
        .await;
    assert!(updated.success, "{}", updated.message);
    let cart = storefront.carts.get_cart(user.clone()).await.unwrap();
    assert_eq!(cart.quantity_of(&pid("4")), Some(5));

    let removed = assistant
        .handle_call(&user, "removeItem", json!({"productId": "4"}))
        .await;
    assert!(removed.success, "{}", removed.message);
    let cart = storefront.carts.get_cart(user).await.unwrap();
    assert!(cart.is_empty());

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_stock_adjusts_the_catalog() {
    let storefront = storefront().await;
    let user = UserId::new("grace");
    let assistant = &storefront.assistant;

    let lowered = assistant
        .handle_call(&user, "updateStock", json!({"productId": "3", "quantity": -3}))
        .await;
    assert!(lowered.success, "{}", lowered.message);
    assert_eq!(lowered.message, "Stock for Casque Audio Pro is now 5");
    assert_eq!(lowered.product().expect("product").stock, 5);

    let too_many = assistant
        .handle_call(&user, "addToCart", json!({"productId": "3", "quantity": 6}))
        .await;
    assert_eq!(too_many.message, "Only 5 x Casque Audio Pro in stock");

    let over = assistant
        .handle_call(&user, "updateStock", json!({"productId": "3", "quantity": -9}))
        .await;
    assert!(!over.success);
    assert_eq!(over.message, "Insufficient stock: requested 9, available 5");
    assert_eq!(storefront.products.check_stock(pid("3")).await.unwrap(), 5);

    let restocked = assistant
        .handle_call(&user, "mettreAJourStock", json!({"productId": 3, "quantity": 10}))
        .await;
    assert!(restocked.success, "{}", restocked.message);
    assert_eq!(storefront.products.check_stock(pid("3")).await.unwrap(), 15);

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_analyze_reviews() {
    let storefront = storefront().await;
    let user = UserId::anonymous();
    let assistant = &storefront.assistant;

    let laptop = assistant
        .handle_call(&user, "analyzeReviews", json!({"productId": "1"}))
        .await;
    assert!(laptop.success, "{}", laptop.message);
    assert_eq!(laptop.message, "4 reviews for Laptop Pro X, average 4.0");
    let analysis = laptop.reviews().expect("review analysis");
    assert_eq!(analysis.positive_count, 3);
    assert_eq!(analysis.negative_count, 1);
    let top: Vec<&str> = analysis.top_comments.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(top, vec!["r2", "r1", "r3"]);

    let json = serde_json::to_value(&laptop).unwrap();
    assert_eq!(json["data"]["totalReviews"], 4);
    assert_eq!(json["data"]["topComments"][0]["userName"], "Hugo");

    let phone = assistant
        .handle_call(&user, "analyzeReviews", json!({"productId": "2"}))
        .await;
    assert!(!phone.success);
    assert_eq!(phone.message, "No customer reviews for Smartphone Galaxy");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_recommend_products_by_mode() {
    let storefront = storefront().await;
    let user = UserId::anonymous();
    let assistant = &storefront.assistant;

    let similar = assistant
        .handle_call(&user, "recommendProducts", json!({"productId": "6", "type": "similar"}))
        .await;
    assert!(similar.success, "{}", similar.message);
    assert_eq!(similar.message, "2 recommendations for Enceinte Bluetooth Premium");
    let found = similar.suggestions().expect("suggestions");
    let ids: Vec<&str> = found.iter().map(|s| s.product.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "4"]);
    assert_eq!(found[0].confidence, 0.7);

    let complementary = assistant
        .handle_call(
            &user,
            "recommanderProduits",
            json!({"productId": "3", "type": "complementaire"}),
        )
        .await;
    assert!(complementary.success, "{}", complementary.message);
    let json = serde_json::to_value(&complementary).unwrap();
    let ids: Vec<&str> = json["data"]
        .as_array()
        .expect("suggestion list")
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
    assert_eq!(json["data"][0]["reason"], "Goes well with this product");

    let unknown = assistant
        .handle_call(&user, "recommendProducts", json!({"productId": "99", "type": "similar"}))
        .await;
    assert_eq!(unknown.message, "Product not found: 99");

    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_total_out_of_range_is_a_failed_response() {
    let config = StorefrontConfig {
        enforce_stock: false,
        ..StorefrontConfig::default()
    };
    let storefront = storefront_with(config).await;
    storefront
        .products
        .add_product(
            pid("big"),
            ProductCreate::new("Big", Decimal::from_i128_with_scale(40_000_000_000_000_000_000, 0), 1),
        )
        .await
        .unwrap();
    let assistant = &storefront.assistant;

    let mallory = UserId::new("mallory");
    let overflow = assistant
        .handle_call(
            &mallory,
            "addToCart",
            json!({"productId": "big", "quantity": 3_000_000_000i64}),
        )
        .await;
    assert!(!overflow.success);
    assert_eq!(overflow.message, "Cart total out of range");

    let alice = UserId::new("alice");
    let added = assistant
        .handle_call(&alice, "addToCart", json!({"productId": "1"}))
        .await;
    assert!(added.success, "{}", added.message);

    storefront.shutdown().await.unwrap();
}
