//! # Assistant
//!
//! The typed action surface a conversational agent drives: a closed [`CartCommand`]
//! enumeration, one [`CartAssistant::dispatch`] entry point and uniform
//! [`ActionResponse`]s.
//!
//! ```rust,ignore
//! let response = assistant
//!     .handle_call(&user, "addToCart", json!({"productId": "1", "quantity": 2}))
//!     .await;
//! assert!(response.success);
//! ```

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod recommend;
pub mod response;
pub mod reviews;

pub use command::CartCommand;
pub use dispatcher::CartAssistant;
pub use error::AssistantError;
pub use recommend::{recommend, suggest, RecommendationMode, Suggestion};
pub use response::{ActionResponse, CartView, ResponseData};
pub use reviews::{analyze_reviews, ReviewAnalysis};
