//! # Outfit Generator
//!
//! Exhaustive enumeration of outfits: no ranking, no de-duplication, no limit.
//!
//! Each combinable layer is first flattened into an option list by walking its
//! selection mapping in order:
//!
//! | selection | options contributed                                  |
//! |-----------|------------------------------------------------------|
//! | `none`    | nothing                                              |
//! | `any`     | one per item currently in the category               |
//! | item      | exactly that item, even if it was since removed      |
//!
//! The outer layer is optional: an empty outer list becomes a single "no outer"
//! option. Inner and bottom are mandatory: if either is empty there are no
//! outfits at all. The result is the Cartesian product with outer as the
//! outermost loop and bottom varying fastest.

use crate::model::{Layer, LayerPick, Outfit, Selection};
use crate::selection::{LayerMap, LayerSelection};
use crate::wardrobe::Wardrobe;

/// Flattens one layer's selections into its ordered option list.
pub fn layer_options(wardrobe: &Wardrobe, map: &LayerMap) -> Vec<LayerPick> {
    let mut options = Vec::new();
    for (category, selection) in map.iter() {
        match selection {
            Selection::None => {}
            Selection::Any => {
                if let Some(items) = wardrobe.items(category) {
                    options.extend(items.iter().map(|item| LayerPick::new(category, item)));
                }
            }
            Selection::Item(item) => options.push(LayerPick::new(category, item)),
        }
    }
    options
}

fn options_for(
    wardrobe: &Wardrobe,
    selections: &LayerSelection,
    layer: Layer,
) -> Vec<LayerPick> {
    selections
        .layer(layer)
        .map(|map| layer_options(wardrobe, map))
        .unwrap_or_default()
}

/// Every outfit the selections allow.
pub fn generate(wardrobe: &Wardrobe, selections: &LayerSelection) -> Vec<Outfit> {
    let outer_options = options_for(wardrobe, selections, Layer::Outer);
    let outer: Vec<Option<LayerPick>> = if outer_options.is_empty() {
        vec![None]
    } else {
        outer_options.into_iter().map(Some).collect()
    };

    let inner = options_for(wardrobe, selections, Layer::Inner);
    if inner.is_empty() {
        tracing::debug!("no inner options selected, nothing to combine");
        return Vec::new();
    }

    let bottom = options_for(wardrobe, selections, Layer::Bottom);
    if bottom.is_empty() {
        tracing::debug!("no bottom options selected, nothing to combine");
        return Vec::new();
    }

    let mut outfits = Vec::with_capacity(outer.len() * inner.len() * bottom.len());
    for outer_pick in &outer {
        for inner_pick in &inner {
            for bottom_pick in &bottom {
                outfits.push(Outfit {
                    outer: outer_pick.clone(),
                    inner: inner_pick.clone(),
                    bottom: bottom_pick.clone(),
                });
            }
        }
    }

    tracing::debug!(
        outer = outer.len(),
        inner = inner.len(),
        bottom = bottom.len(),
        total = outfits.len(),
        "generated outfits"
    );
    outfits
}
