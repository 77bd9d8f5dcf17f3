//! The demo catalog.

use crate::clients::ProductClient;
use crate::model::{InvalidProductId, ProductCreate, ProductId, Review};
use chrono::NaiveDate;
use crate::product_actor::ProductError;
use rust_decimal::Decimal;
use tracing::info;

/// The six products the storefront ships with.
pub fn demo_catalog() -> Result<Vec<(ProductId, ProductCreate)>, InvalidProductId> {
    let laptop = ProductId::parse("1")?;
    Ok(vec![
        (
            laptop.clone(),
            ProductCreate::new("Laptop Pro X", Decimal::new(129999, 2), 10)
                .with_reviews(laptop_reviews(&laptop))
                .with_description("Ordinateur portable haute performance pour les professionnels")
                .with_category("Informatique")
                .with_features(["16GB RAM", "SSD 512GB", "Intel i7"])
                .with_rating(4.5, 128)
                .with_image_url("https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=500&q=80"),
        ),
        (
            ProductId::parse("2")?,
            ProductCreate::new("Smartphone Galaxy", Decimal::new(89999, 2), 15)
                .with_description("Smartphone dernière génération avec appareil photo professionnel")
                .with_category("Téléphonie")
                .with_features(["6.7\" AMOLED", "256GB", "5G"])
                .with_rating(4.8, 256)
                .with_image_url("https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=500&q=80"),
        ),
        (
            ProductId::parse("3")?,
            ProductCreate::new("Casque Audio Pro", Decimal::new(24999, 2), 8)
                .with_description("Casque sans fil avec réduction de bruit active")
                .with_category("Audio")
                .with_features(["Bluetooth 5.0", "Autonomie 30h", "ANC"])
                .with_rating(4.6, 89)
                .with_image_url("https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&q=80"),
        ),
        (
            ProductId::parse("4")?,
            ProductCreate::new("Montre Connectée Sport", Decimal::new(19999, 2), 20)
                .with_description("Montre intelligente pour le sport et la santé")
                .with_category("Accessoires")
                .with_features(["GPS", "Cardio", "Étanche"])
                .with_rating(4.4, 167)
                .with_image_url("https://images.unsplash.com/photo-1544866092-1935c5ef2a8f?w=500&q=80"),
        ),
        (
            ProductId::parse("5")?,
            ProductCreate::new("Tablette Pro 12", Decimal::new(79999, 2), 8)
                .with_description("Tablette professionnelle avec stylet inclus")
                .with_category("Informatique")
                .with_features(["12.9 pouces", "256GB", "Stylet Pro", "iPadOS"])
                .with_rating(4.7, 92)
                .with_image_url("https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=500&q=80"),
        ),
        (
            ProductId::parse("6")?,
            ProductCreate::new("Enceinte Bluetooth Premium", Decimal::new(17999, 2), 30)
                .with_description("Enceinte portable waterproof avec son 360°")
                .with_category("Audio")
                .with_features(["Bluetooth 5.2", "20h autonomie", "IPX7", "Son surround"])
                .with_rating(4.4, 73)
                .with_image_url("https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500&q=80"),
        ),
    ])
}

fn laptop_reviews(product_id: &ProductId) -> Vec<Review> {
    [
        ("r1", 5, "Rapide et silencieux, parfait pour le montage vidéo", "Camille", (2024, 1, 14), 12),
        ("r2", 4, "Très bon écran, la batterie pourrait durer plus", "Hugo", (2024, 2, 3), 30),
        ("r3", 2, "Chauffe beaucoup sous charge", "Nina", (2024, 2, 21), 7),
        ("r4", 5, "Excellent rapport qualité prix", "Louis", (2024, 3, 9), 3),
    ]
    .into_iter()
    .filter_map(|(id, rating, comment, user_name, (y, m, d), helpful)| {
        Some(Review {
            id: id.to_string(),
            product_id: product_id.clone(),
            rating,
            comment: comment.to_string(),
            user_name: user_name.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            helpful,
        })
    })
    .collect()
}

/// Loads [`demo_catalog`] into the catalog actor. Returns how many products were added.
pub async fn seed_catalog(products: &ProductClient) -> Result<usize, ProductError> {
    let catalog =
        demo_catalog().map_err(|e| ProductError::InvalidProduct(e.to_string()))?;
    let count = catalog.len();
    for (id, params) in catalog {
        products.add_product(id, params).await?;
    }
    info!(count, "Catalog seeded");
    Ok(count)
}
