use clap::{Parser, Subcommand};
use wardrobe::error::{Result, WardrobeError};
use wardrobe::model::{Layer, Selection};

#[derive(Parser, Debug)]
#[command(name = "wardrobe", bin_name = "wardrobe", version)]
#[command(about = "Generate outfits from the clothes you own", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories and their items
    #[command(alias = "ls")]
    List,

    /// Add an item to a category
    Add {
        category: String,
        /// Item name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Remove an item from a category
    #[command(alias = "rm")]
    Remove {
        category: String,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Add or remove categories
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Generate outfits and show one page of them
    #[command(alias = "gen")]
    Generate {
        /// Selection for one category: `any`, `none`, or an item name
        #[arg(short, long = "select", value_name = "CATEGORY=CHOICE", value_parser = parse_select)]
        select: Vec<(String, Selection)>,

        /// Page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        name: String,
        /// Garment layer: outer, inner, bottom or special
        #[arg(short, long)]
        layer: Layer,
    },
    /// Remove a category and all its items
    #[command(alias = "rm")]
    Remove {
        category: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Parses `CATEGORY=CHOICE`.
pub fn parse_select(s: &str) -> Result<(String, Selection)> {
    let (category, choice) = s
        .split_once('=')
        .ok_or_else(|| WardrobeError::Api(format!("expected CATEGORY=CHOICE, got '{}'", s)))?;
    let category = category.trim();
    if category.is_empty() {
        return Err(WardrobeError::Api(format!("missing category in '{}'", s)));
    }
    let selection = choice.parse::<Selection>().map_err(WardrobeError::Api)?;
    Ok((category.to_string(), selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_select_pairs() {
        assert_eq!(
            parse_select("jacket=none").unwrap(),
            ("jacket".to_string(), Selection::None)
        );
        assert_eq!(
            parse_select("shirt=White oxford").unwrap(),
            ("shirt".to_string(), Selection::Item("White oxford".into()))
        );
        assert!(parse_select("jacket").is_err());
        assert!(parse_select("=any").is_err());
    }

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["wardrobe"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_collects_selections() {
        let cli = Cli::try_parse_from([
            "wardrobe",
            "generate",
            "-s",
            "jacket=none",
            "--select",
            "pants=any",
            "--page",
            "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate { select, page }) => {
                assert_eq!(select.len(), 2);
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn category_add_requires_known_layer() {
        assert!(Cli::try_parse_from(["wardrobe", "category", "add", "Scarves"]).is_err());
        assert!(
            Cli::try_parse_from(["wardrobe", "category", "add", "Scarves", "-l", "hat"]).is_err()
        );
        let cli =
            Cli::try_parse_from(["wardrobe", "category", "add", "Scarves", "-l", "Outer"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Category {
                action: CategoryCommands::Add {
                    layer: Layer::Outer,
                    ..
                }
            })
        ));
    }
}
