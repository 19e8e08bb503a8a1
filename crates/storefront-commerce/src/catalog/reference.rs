//! The storefront's built-in twelve-product catalog.

use super::{Catalog, Category, Product, StockStatus};

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{}/{}?w=400", IMAGE_BASE, photo)
}

/// The reference catalog shipped with the storefront demo.
pub fn reference_catalog() -> Catalog {
    use Category::*;

    let products = vec![
        Product::new(1, "iPhone 15 Pro Max", Electronics, 5849.0)
            .with_old_price(8999.0)
            .with_rating(5.0)
            .with_discount(35)
            .with_free_shipping(true)
            .with_image(image("photo-1592286927505-2fd0f3a1f3b4")),
        Product::new(2, "Tênis Nike Air Max", Sports, 479.90)
            .with_old_price(799.90)
            .with_rating(4.5)
            .with_discount(40)
            .with_free_shipping(true)
            .with_image(image("photo-1542291026-7eec264c27ff")),
        Product::new(3, "Notebook Dell Inspiron", Electronics, 3009.0)
            .with_old_price(4299.0)
            .with_rating(5.0)
            .with_discount(30)
            .with_free_shipping(true)
            .with_stock(StockStatus::Low)
            .with_image(image("photo-1496181133206-80ce9b88a853")),
        Product::new(4, "Smart TV 65\" 4K", Electronics, 2199.0)
            .with_old_price(3999.0)
            .with_rating(4.5)
            .with_discount(45)
            .with_free_shipping(true)
            .with_image(image("photo-1593359677879-a4bb92f829d1")),
        Product::new(5, "AirPods Pro 2", Electronics, 1487.0)
            .with_old_price(2399.0)
            .with_rating(5.0)
            .with_discount(38)
            .with_free_shipping(true)
            .with_image(image("photo-1606841837239-c5a1a4a07af7")),
        Product::new(6, "Apple Watch Series 9", Electronics, 2493.0)
            .with_old_price(4299.0)
            .with_rating(5.0)
            .with_discount(42)
            .with_free_shipping(true)
            .with_image(image("photo-1434494878577-86c23bcb06b9")),
        Product::new(7, "Camiseta Básica", Fashion, 39.90)
            .with_old_price(49.90)
            .with_rating(4.5)
            .with_discount(20)
            .with_image(image("photo-1521572163474-6864f9cf17ab")),
        Product::new(8, "Calça Jeans", Fashion, 89.90)
            .with_rating(4.0)
            .with_image(image("photo-1541099649105-f69ad21f3246")),
        Product::new(9, "Sofá Confortável", Home, 1020.0)
            .with_old_price(1200.0)
            .with_rating(4.5)
            .with_discount(15)
            .with_free_shipping(true)
            .with_stock(StockStatus::Low)
            .with_image(image("photo-1493663284031-b7e3aefcae8e")),
        Product::new(10, "Console PlayStation 5", Games, 2250.0)
            .with_old_price(2500.0)
            .with_rating(5.0)
            .with_discount(10)
            .with_free_shipping(true)
            .with_image(image("photo-1606813907291-d86efa9b94db")),
        Product::new(11, "Fone Gamer RGB", Games, 299.90)
            .with_old_price(350.0)
            .with_rating(4.5)
            .with_discount(15)
            .with_image(image("photo-1589578151266-11308265d904")),
        Product::new(12, "Conjunto de Halteres", Sports, 254.90)
            .with_old_price(319.90)
            .with_rating(4.5)
            .with_discount(20)
            .with_image(image("photo-1534438327276-14e5300c3a48")),
    ];

    Catalog { products }
}
