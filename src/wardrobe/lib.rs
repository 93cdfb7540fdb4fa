//! # Wardrobe Architecture
//!
//! Wardrobe is an outfit generator: it keeps a closet of clothing items grouped
//! into categories, lets the user pick which categories and items to wear, and
//! enumerates every outfit those picks allow. The core is a library with no
//! terminal assumptions; the `wardrobe` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, asks for confirmation  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the saved wardrobe, falls back to defaults         │
//! │  - Applies actions and persists when the wardrobe changes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State + Commands (app.rs, commands/*.rs)                   │
//! │  - One Action in, one CmdResult out                         │
//! │  - Wardrobe, selections, outfits, page, pending removals    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (wardrobe, registry, selection, generator, pages)   │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Garment Layers
//!
//! Every category belongs to one [`model::Layer`]. Outfits combine exactly one
//! inner and one bottom item with an optional outer item. One-piece categories
//! (the `special` layer) are stored and listed but never combined.
//!
//! ## Persistence
//!
//! Only the wardrobe is saved: items per category, category order and layer
//! tags. Selections, outfits and the current page live for one session and are
//! rebuilt from the wardrobe on load.
//!
//! ## Testing Strategy
//!
//! - **Domain modules**: unit tests on plain values
//! - **Commands**: unit tests on an [`app::AppState`]
//! - **API**: tests against [`store::memory::InMemoryStore`]
//! - **CLI**: end-to-end tests in `tests/` with a temporary data directory

pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod init;
pub mod model;
pub mod pagination;
pub mod registry;
pub mod selection;
pub mod store;
pub mod wardrobe;
