//! Fixed lookup tables used by the insight composer

pub const DEFAULT_ICON: &str = "📊";

const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("rent", "🏠"),
    ("food", "🍕"),
    ("transport", "🚗"),
    ("entertainment", "🎬"),
    ("misc", "📦"),
    ("savings", "💰"),
    ("shopping", "🛍️"),
    ("health", "💊"),
    ("utilities", "⚡"),
];

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A reference-priced item a category's spend is expressed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunComparison {
    pub category: &'static str,
    pub unit_price: f64,
    pub label: &'static str,
}

impl FunComparison {
    const fn new(category: &'static str, unit_price: f64, label: &'static str) -> Self {
        Self {
            category,
            unit_price,
            label,
        }
    }
}

/// Evaluated in order; every qualifying row produces a sentence
pub const FUN_COMPARISONS: &[FunComparison] = &[
    FunComparison::new("food", 250.0, "cups of chai ☕"),
    FunComparison::new("food", 500.0, "plates of biryani 🍛"),
    FunComparison::new("transport", 30.0, "auto rides 🛺"),
    FunComparison::new("transport", 150.0, "Uber rides 🚖"),
    FunComparison::new("entertainment", 200.0, "movie tickets 🎬"),
    FunComparison::new("entertainment", 500.0, "Netflix subscriptions 📺"),
    FunComparison::new("shopping", 1000.0, "new t-shirts 👕"),
    FunComparison::new("rent", 5000.0, "coworking day passes 💼"),
];

/// Unit used when no table row qualifies
pub const FALLBACK_UNIT_PRICE: f64 = 250.0;
pub const FALLBACK_LABEL: &str = "cups of chai ☕";

pub fn icon_for(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
