//! Carbon estimates for free-text activity logs.
//!
//! Turns input like "biked 4.5 km" or "used 3 kwh electricity" into a
//! structured estimate. Positive `co2_kg` means saved, negative means emitted.
//! Everything is local arithmetic over fixed emission factors.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Matches a quantity and unit such as "12 km", "3.5 kwh", "0.2 kg", "2 m3".
static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(\.\d+)?)\s*(km|kwh|kw|kg|m3)").expect("quantity pattern is valid")
});

/// kg CO₂ per km by car; walking and cycling count as this much saved.
const CAR_FACTOR: f64 = 0.20;

/// (keyword, factor) per category, in matching order.
const TRANSPORT: &[(&str, f64)] = &[
    ("car", CAR_FACTOR),
    ("motorbike", 0.10),
    ("bus", 0.05),
    ("train", 0.03),
    ("flight", 0.25),
    ("cycle", 0.0),
    ("bike", 0.0),
    ("walk", 0.0),
];

const ENERGY: &[(&str, f64)] = &[
    ("electricity", 0.82),
    ("lpg", 2.98),
    ("natural_gas", 1.90),
];

const FOOD: &[(&str, f64)] = &[
    ("beef", 27.0),
    ("chicken", 6.9),
    ("milk", 1.3),
    ("rice", 2.7),
    ("vegetables", 0.5),
];

const WASTE: &[(&str, f64)] = &[("plastic", 6.0), ("paper", 1.3)];

/// Keywords that imply a distance when no unit is given.
const TRAVEL_WORDS: &[&str] = &["car", "cycle", "bike", "walk", "bus", "train"];

/// Points awarded per logged activity.
pub const POINTS_PER_ACTIVITY: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("Describe an activity first")]
    Empty,

    #[error("Couldn't detect an activity in \"{0}\"")]
    Unrecognized(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Transport,
    Energy,
    Food,
    Waste,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Food => "food",
            Category::Waste => "waste",
        }
    }

    fn default_unit(&self) -> &'static str {
        match self {
            Category::Transport => "km",
            Category::Energy => "kwh",
            Category::Food | Category::Waste => "kg",
        }
    }
}

/// A structured estimate for one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonEstimate {
    /// Matched keyword ("car", "electricity", ...)
    pub activity: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: String,
    /// Positive = saved, negative = emitted
    pub co2_kg: f64,
    pub message: String,
}

impl CarbonEstimate {
    pub fn is_saving(&self) -> bool {
        self.co2_kg > 0.0
    }

    /// XP for logging this activity: ten per kg saved, at least one.
    pub fn xp_reward(&self) -> u32 {
        if self.is_saving() {
            ((self.co2_kg * 10.0).round() as u32).max(1)
        } else {
            1
        }
    }

    /// kg of CO₂ saved (zero for emissions).
    pub fn saved_kg(&self) -> f64 {
        self.co2_kg.max(0.0)
    }
}

/// Extract the first quantity and normalised unit from `text`.
pub fn extract_quantity(text: &str) -> Option<(f64, String)> {
    let caps = QUANTITY_RE.captures(text)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = match caps.get(3)?.as_str() {
        "kw" => "kwh",
        other => other,
    };
    Some((value, unit.to_string()))
}

/// Estimate the CO₂ impact of a described activity.
pub fn estimate(input: &str) -> Result<CarbonEstimate, EstimateError> {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return Err(EstimateError::Empty);
    }

    let (quantity, unit) = match extract_quantity(&text) {
        Some((q, u)) => (q, Some(u)),
        None if TRAVEL_WORDS.iter().any(|w| text.contains(w)) => (1.0, Some("km".to_string())),
        None => (1.0, None),
    };

    let tables = [
        (Category::Transport, TRANSPORT),
        (Category::Energy, ENERGY),
        (Category::Food, FOOD),
        (Category::Waste, WASTE),
    ];

    for (category, table) in tables {
        for (keyword, factor) in table {
            let spaced = keyword.replace('_', " ");
            if !text.contains(keyword) && !text.contains(&spaced) {
                continue;
            }
            let unit = unit.unwrap_or_else(|| category.default_unit().to_string());
            return Ok(build(category, keyword, *factor, quantity, unit));
        }
    }

    Err(EstimateError::Unrecognized(input.trim().to_string()))
}

fn build(category: Category, keyword: &str, factor: f64, quantity: f64, unit: String) -> CarbonEstimate {
    let activity = match keyword {
        "bike" => "cycle",
        other => other,
    };

    let (co2_kg, message) = match (category, activity) {
        (Category::Transport, "cycle" | "walk") => {
            let saved = quantity * CAR_FACTOR;
            (
                saved,
                format!("{} {} {} saved {:.2} kg CO₂", title(activity), quantity, unit, saved),
            )
        }
        (Category::Food, _) => {
            let emitted = quantity * factor;
            (
                -emitted,
                format!("{} {} of {} emitted {:.2} kg CO₂", quantity, unit, activity, emitted),
            )
        }
        _ => {
            let emitted = quantity * factor;
            (
                -emitted,
                format!("{} {} {} emitted {:.2} kg CO₂", title(activity), quantity, unit, emitted),
            )
        }
    };

    CarbonEstimate {
        activity: activity.to_string(),
        category,
        quantity,
        unit,
        co2_kg,
        message,
    }
}

fn title(word: &str) -> String {
    let word = word.replace('_', " ");
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
