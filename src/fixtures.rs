// src/fixtures.rs - The demo dataset

//! Read-only seed data for the storefront: catalog, user roster, order and
//! review history, wishlist assignments, the interaction log, and the
//! pre-aggregated analytics series. Loaded once and never mutated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::admin::{Analytics, CategoryShare, MonthlyRevenue, TopProductSales};
use crate::auth::{User, UserRole};
use crate::catalog::{Category, Product};
use crate::orders::{Order, OrderItem, OrderStatus, ShippingAddress};
use crate::recommend::{InteractionKind, UserInteraction};
use crate::reviews::Review;
use crate::types::{ProductId, UserId};

/// A wishlist seed assignment: `user_id` saved `product_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistEntry {
    pub user_id: UserId,
    pub product_id: ProductId,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: 1,
            name: "iPhone 15 Pro Max".to_string(),
            slug: "iphone-15-pro-max".to_string(),
            description: "Latest iPhone with titanium design, A17 Pro chip, and advanced camera system.".to_string(),
            price: 1199.99,
            original_price: 1299.99,
            discount: 8,
            category: Category::Smartphones,
            brand: "Apple".to_string(),
            rating: 4.8,
            review_count: 2847,
            in_stock: 15,
            tags: strings(&["5G", "iOS", "Pro Camera", "Titanium"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=500",
                "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=500",
            ]),
            specifications: specs(&[
                ("display", "6.7\" Super Retina XDR"),
                ("processor", "A17 Pro"),
                ("storage", "256GB"),
                ("camera", "48MP + 12MP + 12MP"),
                ("battery", "4441mAh"),
            ]),
            features: strings(&["Face ID", "Wireless Charging", "Water Resistant", "5G Ready"]),
        },
        Product {
            id: 2,
            name: "MacBook Pro 16\" M3".to_string(),
            slug: "macbook-pro-16-m3".to_string(),
            description: "Powerhouse laptop with M3 chip, stunning Liquid Retina XDR display.".to_string(),
            price: 2499.99,
            original_price: 2699.99,
            discount: 7,
            category: Category::Laptops,
            brand: "Apple".to_string(),
            rating: 4.9,
            review_count: 1234,
            in_stock: 8,
            tags: strings(&["M3 Chip", "macOS", "Professional", "Retina Display"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=500",
                "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=500",
            ]),
            specifications: specs(&[
                ("display", "16.2\" Liquid Retina XDR"),
                ("processor", "Apple M3"),
                ("storage", "512GB SSD"),
                ("memory", "18GB Unified Memory"),
                ("battery", "Up to 22 hours"),
            ]),
            features: strings(&[
                "Touch ID",
                "Force Touch Trackpad",
                "Thunderbolt 4",
                "Studio-quality mics",
            ]),
        },
        Product {
            id: 3,
            name: "Sony WH-1000XM5".to_string(),
            slug: "sony-wh-1000xm5".to_string(),
            description: "Industry-leading noise canceling headphones with premium sound quality.".to_string(),
            price: 399.99,
            original_price: 449.99,
            discount: 11,
            category: Category::Headphones,
            brand: "Sony".to_string(),
            rating: 4.7,
            review_count: 5678,
            in_stock: 25,
            tags: strings(&["Noise Canceling", "Wireless", "Hi-Res Audio", "Long Battery"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1583394838336-acd977736f90?w=500",
                "https://images.unsplash.com/photo-1484704849700-f032a568e944?w=500",
            ]),
            specifications: specs(&[
                ("driver", "30mm Dynamic"),
                ("frequency", "4Hz-40kHz"),
                ("battery", "30 hours"),
                ("weight", "250g"),
                ("connectivity", "Bluetooth 5.2"),
            ]),
            features: strings(&[
                "Active Noise Cancellation",
                "360 Reality Audio",
                "Quick Charge",
                "Multipoint Connection",
            ]),
        },
        Product {
            id: 4,
            name: "Apple Watch Ultra 2".to_string(),
            slug: "apple-watch-ultra-2".to_string(),
            description: "The most rugged and capable Apple Watch designed for endurance athletes.".to_string(),
            price: 799.99,
            original_price: 849.99,
            discount: 6,
            category: Category::Smartwatches,
            brand: "Apple".to_string(),
            rating: 4.6,
            review_count: 987,
            in_stock: 12,
            tags: strings(&["Titanium", "GPS", "Cellular", "Fitness"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=500",
                "https://images.unsplash.com/photo-1579586337278-3f436f25d4d9?w=500",
            ]),
            specifications: specs(&[
                ("display", "49mm Titanium"),
                ("processor", "S9 SiP"),
                ("storage", "64GB"),
                ("battery", "36 hours"),
                ("water", "100m Water Resistant"),
            ]),
            features: strings(&["ECG", "Blood Oxygen", "Temperature Sensing", "Crash Detection"]),
        },
        Product {
            id: 5,
            name: "iPad Pro 12.9\" M2".to_string(),
            slug: "ipad-pro-12-9-m2".to_string(),
            description: "Ultimate iPad experience with M2 chip and Liquid Retina XDR display.".to_string(),
            price: 1099.99,
            original_price: 1199.99,
            discount: 8,
            category: Category::Tablets,
            brand: "Apple".to_string(),
            rating: 4.8,
            review_count: 1876,
            in_stock: 18,
            tags: strings(&["M2 Chip", "Pro Display", "Apple Pencil", "iPadOS"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1561154464-82e9adf32764?w=500",
                "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=500",
            ]),
            specifications: specs(&[
                ("display", "12.9\" Liquid Retina XDR"),
                ("processor", "Apple M2"),
                ("storage", "256GB"),
                ("camera", "12MP + 10MP"),
                ("connectivity", "Wi-Fi 6E + 5G"),
            ]),
            features: strings(&[
                "Face ID",
                "Apple Pencil Support",
                "Magic Keyboard Compatible",
                "ProRes Video",
            ]),
        },
        Product {
            id: 6,
            name: "PlayStation 5 Console".to_string(),
            slug: "playstation-5-console".to_string(),
            description: "Next-gen gaming console with lightning-fast loading and immersive gameplay.".to_string(),
            price: 499.99,
            original_price: 549.99,
            discount: 9,
            category: Category::Gaming,
            brand: "Sony".to_string(),
            rating: 4.5,
            review_count: 3456,
            in_stock: 5,
            tags: strings(&["4K Gaming", "Ray Tracing", "SSD", "DualSense"]),
            images: strings(&[
                "https://images.unsplash.com/photo-1606144042614-b2417e99c4e3?w=500",
                "https://images.unsplash.com/photo-1611532736597-de2d4265fba3?w=500",
            ]),
            specifications: specs(&[
                ("processor", "AMD Zen 2"),
                ("gpu", "AMD RDNA 2"),
                ("storage", "825GB SSD"),
                ("memory", "16GB GDDR6"),
                ("resolution", "4K at 60fps"),
            ]),
            features: strings(&[
                "Ray Tracing",
                "3D Audio",
                "Haptic Feedback",
                "Backwards Compatibility",
            ]),
        },
    ]
});

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: 1,
            email: "admin@store.com".to_string(),
            name: "Admin User".to_string(),
            role: UserRole::Admin,
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100".to_string(),
            join_date: date(2023, 1, 15),
            is_active: true,
        },
        User {
            id: 2,
            email: "john.doe@email.com".to_string(),
            name: "John Doe".to_string(),
            role: UserRole::Customer,
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100".to_string(),
            join_date: date(2024, 3, 20),
            is_active: true,
        },
        User {
            id: 3,
            email: "jane.smith@email.com".to_string(),
            name: "Jane Smith".to_string(),
            role: UserRole::Customer,
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100".to_string(),
            join_date: date(2024, 5, 10),
            is_active: true,
        },
    ]
});

static SEED_ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Order {
            id: "ORD-001".to_string(),
            user_id: 2,
            status: OrderStatus::Delivered,
            total: 1599.98,
            items: vec![
                OrderItem {
                    product_id: 1,
                    quantity: 1,
                    price: 1199.99,
                },
                OrderItem {
                    product_id: 3,
                    quantity: 1,
                    price: 399.99,
                },
            ],
            shipping_address: ShippingAddress {
                name: "John Doe".to_string(),
                street: "123 Tech Street".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip: "94105".to_string(),
                country: "USA".to_string(),
            },
            order_date: date(2024, 6, 1),
            delivery_date: Some(date(2024, 6, 5)),
            tracking_number: "TRK123456789".to_string(),
        },
        Order {
            id: "ORD-002".to_string(),
            user_id: 3,
            status: OrderStatus::Processing,
            total: 2499.99,
            items: vec![OrderItem {
                product_id: 2,
                quantity: 1,
                price: 2499.99,
            }],
            shipping_address: ShippingAddress {
                name: "Jane Smith".to_string(),
                street: "456 Innovation Ave".to_string(),
                city: "Seattle".to_string(),
                state: "WA".to_string(),
                zip: "98101".to_string(),
                country: "USA".to_string(),
            },
            order_date: date(2024, 6, 15),
            delivery_date: None,
            tracking_number: "TRK987654321".to_string(),
        },
    ]
});

static SEED_REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        Review {
            id: 1,
            product_id: 1,
            user_id: 2,
            user_name: "John Doe".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100".to_string(),
            rating: 5,
            title: "Amazing phone!".to_string(),
            comment: "The camera quality is incredible and the battery life exceeds expectations. Definitely worth the upgrade.".to_string(),
            date: date(2024, 6, 10),
            helpful: 45,
            verified: true,
        },
        Review {
            id: 2,
            product_id: 1,
            user_id: 3,
            user_name: "Jane Smith".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100".to_string(),
            rating: 4,
            title: "Great but expensive".to_string(),
            comment: "Love the features and build quality, but the price point is quite high. Overall satisfied with the purchase.".to_string(),
            date: date(2024, 6, 8),
            helpful: 23,
            verified: true,
        },
        Review {
            id: 3,
            product_id: 3,
            user_id: 2,
            user_name: "John Doe".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100".to_string(),
            rating: 5,
            title: "Best noise canceling headphones".to_string(),
            comment: "The noise cancellation is phenomenal. Perfect for long flights and office work.".to_string(),
            date: date(2024, 6, 12),
            helpful: 67,
            verified: true,
        },
    ]
});

static WISHLIST_SEED: Lazy<Vec<WishlistEntry>> = Lazy::new(|| {
    vec![
        WishlistEntry { user_id: 2, product_id: 2 },
        WishlistEntry { user_id: 2, product_id: 4 },
        WishlistEntry { user_id: 3, product_id: 1 },
        WishlistEntry { user_id: 3, product_id: 5 },
    ]
});

static INTERACTIONS: Lazy<Vec<UserInteraction>> = Lazy::new(|| {
    vec![
        UserInteraction {
            user_id: 2,
            product_id: 1,
            action: InteractionKind::Purchase,
            date: date(2024, 6, 1),
            rating: Some(5),
        },
        UserInteraction {
            user_id: 2,
            product_id: 3,
            action: InteractionKind::Purchase,
            date: date(2024, 6, 1),
            rating: Some(5),
        },
        UserInteraction {
            user_id: 2,
            product_id: 2,
            action: InteractionKind::View,
            date: date(2024, 6, 10),
            rating: None,
        },
        UserInteraction {
            user_id: 2,
            product_id: 4,
            action: InteractionKind::Wishlist,
            date: date(2024, 6, 8),
            rating: None,
        },
        UserInteraction {
            user_id: 3,
            product_id: 2,
            action: InteractionKind::Purchase,
            date: date(2024, 6, 15),
            rating: Some(4),
        },
        UserInteraction {
            user_id: 3,
            product_id: 1,
            action: InteractionKind::View,
            date: date(2024, 6, 12),
            rating: None,
        },
        UserInteraction {
            user_id: 3,
            product_id: 5,
            action: InteractionKind::Wishlist,
            date: date(2024, 6, 14),
            rating: None,
        },
    ]
});

static ANALYTICS: Lazy<Analytics> = Lazy::new(|| Analytics {
    total_sales: 4099.97,
    total_orders: 2,
    total_products: 6,
    total_users: 3,
    monthly_revenue: vec![
        MonthlyRevenue { month: "Jan".to_string(), revenue: 12500.0 },
        MonthlyRevenue { month: "Feb".to_string(), revenue: 15200.0 },
        MonthlyRevenue { month: "Mar".to_string(), revenue: 18900.0 },
        MonthlyRevenue { month: "Apr".to_string(), revenue: 22100.0 },
        MonthlyRevenue { month: "May".to_string(), revenue: 19800.0 },
        MonthlyRevenue { month: "Jun".to_string(), revenue: 25600.0 },
    ],
    top_products: vec![
        TopProductSales { name: "iPhone 15 Pro Max".to_string(), sales: 45 },
        TopProductSales { name: "MacBook Pro 16\"".to_string(), sales: 32 },
        TopProductSales { name: "Sony WH-1000XM5".to_string(), sales: 28 },
        TopProductSales { name: "iPad Pro 12.9\"".to_string(), sales: 19 },
    ],
    category_distribution: vec![
        CategoryShare { category: "Smartphones".to_string(), percentage: 35 },
        CategoryShare { category: "Laptops".to_string(), percentage: 25 },
        CategoryShare { category: "Headphones".to_string(), percentage: 20 },
        CategoryShare { category: "Tablets".to_string(), percentage: 12 },
        CategoryShare { category: "Gaming".to_string(), percentage: 8 },
    ],
});

/// The product catalog.
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// The user roster. User 1 is the admin account.
pub fn users() -> &'static [User] {
    &USERS
}

/// Historical orders present before any checkout in this session.
pub fn seed_orders() -> &'static [Order] {
    &SEED_ORDERS
}

/// Reviews present before any submission in this session.
pub fn seed_reviews() -> &'static [Review] {
    &SEED_REVIEWS
}

/// Saved wishlist assignments, loaded per user at login.
pub fn wishlist_seed() -> &'static [WishlistEntry] {
    &WISHLIST_SEED
}

/// The interaction log consumed by the recommendation engine.
pub fn interactions() -> &'static [UserInteraction] {
    &INTERACTIONS
}

/// Pre-aggregated dashboard series.
pub fn analytics() -> &'static Analytics {
    &ANALYTICS
}

/// A ready-made shipping address for demos and tests.
pub fn demo_shipping_address() -> ShippingAddress {
    ShippingAddress {
        name: "John Doe".to_string(),
        street: "123 Tech Street".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip: "94105".to_string(),
        country: "USA".to_string(),
    }
}
