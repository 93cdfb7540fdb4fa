use crate::config::WardrobeConfig;
use crate::model::{CategoryId, Layer};
use std::path::PathBuf;

pub mod categories;
pub mod config;
pub mod generate;
pub mod items;
pub mod list;
pub mod page;
pub mod select;

#[derive(Debug, Clone)]
pub struct WardrobePaths {
    pub data: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A category as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub id: CategoryId,
    pub name: String,
    pub layer: Layer,
    pub items: Vec<String>,
    pub protected: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Set when items or categories changed and the wardrobe must be saved.
    pub wardrobe_changed: bool,
    /// Set when a removal is waiting for confirmation.
    pub awaiting_confirmation: bool,
    pub listed_categories: Vec<CategoryListing>,
    pub config: Option<WardrobeConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn changed(mut self) -> Self {
        self.wardrobe_changed = true;
        self
    }

    pub fn awaiting_confirmation(mut self) -> Self {
        self.awaiting_confirmation = true;
        self
    }

    pub fn with_listed_categories(mut self, categories: Vec<CategoryListing>) -> Self {
        self.listed_categories = categories;
        self
    }

    pub fn with_config(mut self, config: WardrobeConfig) -> Self {
        self.config = Some(config);
        self
    }
}
