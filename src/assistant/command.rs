//! The closed set of actions the assistant may invoke.
//!
//! A tool call arrives as a name plus a JSON object of arguments. [`CartCommand::from_call`]
//! is the only place such a pair becomes a command; anything it cannot map is an
//! [`AssistantError`], never a panic.

use super::error::AssistantError;
use super::recommend::RecommendationMode;
use crate::model::ProductId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "arguments", rename_all = "camelCase")]
pub enum CartCommand {
    ListProducts,
    SearchProducts {
        query: String,
    },
    #[serde(rename_all = "camelCase", alias = "addItem")]
    AddToCart {
        product_id: ProductId,
        #[serde(default = "one")]
        quantity: i64,
    },
    #[serde(rename_all = "camelCase", alias = "updateQuantity")]
    UpdateCartItem {
        product_id: ProductId,
        quantity: i64,
    },
    #[serde(rename_all = "camelCase", alias = "removeItem")]
    RemoveFromCart {
        product_id: ProductId,
    },
    GetCart,
    ClearCart,
    Checkout,
    /// Changes a product's stock by `quantity`, which may be negative.
    #[serde(rename_all = "camelCase", alias = "mettreAJourStock")]
    UpdateStock {
        product_id: ProductId,
        quantity: i64,
    },
    #[serde(rename_all = "camelCase", alias = "analyserAvisClients")]
    AnalyzeReviews {
        product_id: ProductId,
    },
    #[serde(rename_all = "camelCase", alias = "recommanderProduits")]
    RecommendProducts {
        product_id: ProductId,
        #[serde(rename = "type")]
        mode: RecommendationMode,
    },
}

fn one() -> i64 {
    1
}

/// Catalog ids arrive either as strings or as bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Text(String),
    Number(u64),
}

impl RawProductId {
    fn parse(self) -> Result<ProductId, AssistantError> {
        let raw = match self {
            RawProductId::Text(s) => s,
            RawProductId::Number(n) => n.to_string(),
        };
        Ok(ProductId::parse(raw)?)
    }
}

#[derive(Deserialize)]
struct SearchArgs {
    query: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddArgs {
    product_id: RawProductId,
    #[serde(default = "one")]
    quantity: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateArgs {
    product_id: RawProductId,
    quantity: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductArgs {
    product_id: RawProductId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendArgs {
    product_id: RawProductId,
    #[serde(rename = "type")]
    mode: RecommendationMode,
}

fn arguments<A: DeserializeOwned>(action: &str, arguments: Value) -> Result<A, AssistantError> {
    serde_json::from_value(arguments).map_err(|e| AssistantError::InvalidArguments {
        action: action.to_string(),
        reason: e.to_string(),
    })
}

impl CartCommand {
    /// Builds a command from a tool call. Actions without arguments ignore `args`.
    pub fn from_call(name: &str, args: Value) -> Result<Self, AssistantError> {
        let command = match name {
            "listProducts" => CartCommand::ListProducts,
            "getCart" => CartCommand::GetCart,
            "clearCart" => CartCommand::ClearCart,
            "checkout" => CartCommand::Checkout,
            "searchProducts" => {
                let SearchArgs { query } = arguments(name, args)?;
                CartCommand::SearchProducts { query }
            }
            "addToCart" | "addItem" => {
                let AddArgs {
                    product_id,
                    quantity,
                } = arguments(name, args)?;
                CartCommand::AddToCart {
                    product_id: product_id.parse()?,
                    quantity,
                }
            }
            "updateCartItem" | "updateQuantity" => {
                let UpdateArgs {
                    product_id,
                    quantity,
                } = arguments(name, args)?;
                CartCommand::UpdateCartItem {
                    product_id: product_id.parse()?,
                    quantity,
                }
            }
            "removeFromCart" | "removeItem" => {
                let ProductArgs { product_id } = arguments(name, args)?;
                CartCommand::RemoveFromCart {
                    product_id: product_id.parse()?,
                }
            }
            "updateStock" | "mettreAJourStock" => {
                let UpdateArgs {
                    product_id,
                    quantity,
                } = arguments(name, args)?;
                CartCommand::UpdateStock {
                    product_id: product_id.parse()?,
                    quantity,
                }
            }
            "analyzeReviews" | "analyserAvisClients" => {
                let ProductArgs { product_id } = arguments(name, args)?;
                CartCommand::AnalyzeReviews {
                    product_id: product_id.parse()?,
                }
            }
            "recommendProducts" | "recommanderProduits" => {
                let RecommendArgs { product_id, mode } = arguments(name, args)?;
                CartCommand::RecommendProducts {
                    product_id: product_id.parse()?,
                    mode,
                }
            }
            other => return Err(AssistantError::UnknownAction(other.to_string())),
        };
        Ok(command)
    }

    /// The action name as the assistant calls it.
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::ListProducts => "listProducts",
            CartCommand::SearchProducts { .. } => "searchProducts",
            CartCommand::AddToCart { .. } => "addToCart",
            CartCommand::UpdateCartItem { .. } => "updateCartItem",
            CartCommand::RemoveFromCart { .. } => "removeFromCart",
            CartCommand::GetCart => "getCart",
            CartCommand::ClearCart => "clearCart",
            CartCommand::Checkout => "checkout",
            CartCommand::UpdateStock { .. } => "updateStock",
            CartCommand::AnalyzeReviews { .. } => "analyzeReviews",
            CartCommand::RecommendProducts { .. } => "recommendProducts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pid(id: &str) -> ProductId {
        ProductId::parse(id).unwrap()
    }

    #[test]
    fn every_action_name_parses() {
        let calls = [
            ("listProducts", json!({})),
            ("searchProducts", json!({"query": "audio"})),
            ("addToCart", json!({"productId": "1", "quantity": 2})),
            ("updateCartItem", json!({"productId": "1", "quantity": 0})),
            ("removeFromCart", json!({"productId": "1"})),
            ("getCart", json!({})),
            ("clearCart", Value::Null),
            ("checkout", json!({})),
            ("updateStock", json!({"productId": "1", "quantity": -2})),
            ("analyzeReviews", json!({"productId": "1"})),
            ("recommendProducts", json!({"productId": "1", "type": "similar"})),
        ];
        for (name, args) in calls {
            let command = CartCommand::from_call(name, args).unwrap();
            assert_eq!(command.name(), name);
        }
    }

    #[test]
    fn engine_call_names_are_aliases() {
        let calls = [
            ("addItem", json!({"productId": "1", "quantity": 2}), "addToCart"),
            ("updateQuantity", json!({"productId": "1", "quantity": 0}), "updateCartItem"),
            ("removeItem", json!({"productId": "1"}), "removeFromCart"),
            ("mettreAJourStock", json!({"productId": "1", "quantity": 5}), "updateStock"),
            ("analyserAvisClients", json!({"productId": "1"}), "analyzeReviews"),
            (
                "recommanderProduits",
                json!({"productId": "1", "type": "complementaire"}),
                "recommendProducts",
            ),
        ];
        for (alias, args, canonical) in calls {
            let command = CartCommand::from_call(alias, args.clone()).unwrap();
            assert_eq!(command.name(), canonical);
            assert_eq!(command, CartCommand::from_call(canonical, args).unwrap());
        }

        let tagged: CartCommand = serde_json::from_value(
            json!({"name": "addItem", "arguments": {"productId": "4", "quantity": 3}}),
        )
        .unwrap();
        assert_eq!(
            tagged,
            CartCommand::AddToCart {
                product_id: pid("4"),
                quantity: 3
            }
        );
        let tagged: CartCommand = serde_json::from_value(
            json!({"name": "removeItem", "arguments": {"productId": "4"}}),
        )
        .unwrap();
        assert_eq!(tagged, CartCommand::RemoveFromCart { product_id: pid("4") });
    }

    #[test]
    fn recommend_products_needs_a_known_mode() {
        let command = CartCommand::from_call(
            "recommendProducts",
            json!({"productId": 2, "type": "similaire"}),
        )
        .unwrap();
        assert_eq!(
            command,
            CartCommand::RecommendProducts {
                product_id: pid("2"),
                mode: RecommendationMode::Similar
            }
        );

        let err = CartCommand::from_call(
            "recommendProducts",
            json!({"productId": "2", "type": "cheaper"}),
        )
        .unwrap_err();
        assert!(matches!(err, AssistantError::InvalidArguments { .. }));
    }

    #[test]
    fn add_to_cart_defaults_to_one_unit_and_accepts_numeric_ids() {
        let command = CartCommand::from_call("addToCart", json!({"productId": 3})).unwrap();
        assert_eq!(
            command,
            CartCommand::AddToCart {
                product_id: pid("3"),
                quantity: 1
            }
        );
    }

    #[test]
    fn unknown_actions_and_bad_arguments_are_errors() {
        assert_eq!(
            CartCommand::from_call("deleteEverything", json!({})),
            Err(AssistantError::UnknownAction("deleteEverything".into()))
        );

        let err = CartCommand::from_call("updateCartItem", json!({"productId": "1"})).unwrap_err();
        assert!(matches!(err, AssistantError::InvalidArguments { ref action, .. } if action == "updateCartItem"));

        let err = CartCommand::from_call("addToCart", json!({"productId": "1", "quantity": "two"}))
            .unwrap_err();
        assert!(matches!(err, AssistantError::InvalidArguments { .. }));
    }

    #[test]
    fn malformed_product_ids_are_rejected() {
        let err = CartCommand::from_call("removeFromCart", json!({"productId": ""})).unwrap_err();
        assert!(matches!(err, AssistantError::InvalidProductId(_)));

        let err =
            CartCommand::from_call("addToCart", json!({"productId": "two words"})).unwrap_err();
        assert!(matches!(err, AssistantError::InvalidProductId(_)));
    }

    #[test]
    fn commands_serialize_as_name_and_arguments() {
        let command = CartCommand::UpdateCartItem {
            product_id: pid("2"),
            quantity: 4,
        };
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({"name": "updateCartItem", "arguments": {"productId": "2", "quantity": 4}})
        );
        assert_eq!(
            serde_json::to_value(CartCommand::GetCart).unwrap(),
            json!({"name": "getCart"})
        );
    }
}
