//! Static merch catalog.
//!
//! Items and prices are fixed at build time and never stored in the database.
//! Purchases record the price they paid so history survives catalog changes.

/// Item name → price in coins.
pub const CATALOG: &[(&str, i64)] = &[
    ("t-shirt", 80),
    ("cup", 20),
    ("book", 50),
    ("pen", 10),
    ("powerbank", 200),
    ("hoody", 300),
    ("umbrella", 200),
    ("socks", 10),
    ("wallet", 50),
    ("pink-hoody", 500),
];

/// Look up the price of an item. Names are case-sensitive.
pub fn price_of(item: &str) -> Option<i64> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, price)| *price)
}
