use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category identifiers are the keys of the wardrobe mapping (e.g. `jacket`).
pub type CategoryId = String;

/// The slot a category fills when outfits are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Outer,
    Inner,
    Bottom,
    /// One-piece garments. Never part of a generated outfit.
    Special,
}

impl Layer {
    /// The three layers that take part in combination, in nesting order.
    pub const COMBINABLE: [Layer; 3] = [Layer::Outer, Layer::Inner, Layer::Bottom];

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Outer => "outer",
            Layer::Inner => "inner",
            Layer::Bottom => "bottom",
            Layer::Special => "special",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outer" => Ok(Layer::Outer),
            "inner" => Ok(Layer::Inner),
            "bottom" => Ok(Layer::Bottom),
            "special" => Ok(Layer::Special),
            other => Err(format!(
                "Unknown layer '{}' (expected outer, inner, bottom or special)",
                other
            )),
        }
    }
}

/// How a single category takes part in generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every item currently in the category is an option.
    #[default]
    Any,
    /// The category contributes nothing.
    None,
    /// Exactly this item, whether or not it is still in the wardrobe.
    Item(String),
}

impl Selection {
    const ANY: &'static str = "any";
    const NONE: &'static str = "none";
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Any => f.write_str(Self::ANY),
            Selection::None => f.write_str(Self::NONE),
            Selection::Item(name) => f.write_str(name),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    /// `any` and `none` are the sentinels; anything else names an item.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "" => Err("Selection cannot be empty".to_string()),
            Self::ANY => Ok(Selection::Any),
            Self::NONE => Ok(Selection::None),
            item => Ok(Selection::Item(item.to_string())),
        }
    }
}

/// One garment chosen for one layer of an outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPick {
    pub category: CategoryId,
    pub item: String,
}

impl LayerPick {
    pub fn new(category: impl Into<CategoryId>, item: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            item: item.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub outer: Option<LayerPick>,
    pub inner: LayerPick,
    pub bottom: LayerPick,
}
