//! # CLI Layer
//!
//! One client of the wardrobe library. This is the only place that parses
//! arguments, writes to the terminal or reads confirmations from stdin.
//!
//! - `run()`: parse, set up logging, load the wardrobe, dispatch
//! - `handle_*()`: one per command, calls the API and prints the result
//! - `print_*()` (in `print.rs`): turns `CmdResult` data into terminal output

use super::print::{print_categories, print_messages, print_outfits};
use super::setup::{CategoryCommands, Cli, Commands};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wardrobe::api::ConfigAction;
use wardrobe::app::Action;
use wardrobe::config::WardrobeConfig;
use wardrobe::error::{Result, WardrobeError};
use wardrobe::init::{initialize, WardrobeContext};
use wardrobe::model::{Layer, Selection};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { category, name }) => handle_add(&mut ctx, &category, &name),
        Some(Commands::Remove {
            category,
            name,
            yes,
        }) => handle_remove(&mut ctx, &category, &name, yes),
        Some(Commands::Category { action }) => match action {
            CategoryCommands::Add { name, layer } => handle_category_add(&mut ctx, &name, layer),
            CategoryCommands::Remove { category, yes } => {
                handle_category_remove(&mut ctx, &category, yes)
            }
        },
        Some(Commands::Generate { select, page }) => handle_generate(&mut ctx, select, page),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "wardrobe=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn handle_list(ctx: &WardrobeContext) -> Result<()> {
    let result = ctx.api.list_categories();
    print_categories(&result.listed_categories);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut WardrobeContext, category: &str, name: &[String]) -> Result<()> {
    let name = name.join(" ");
    let result = ctx.api.add_item(category, &name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(
    ctx: &mut WardrobeContext,
    category: &str,
    name: &[String],
    yes: bool,
) -> Result<()> {
    let name = name.join(" ");
    let result = ctx.api.request_remove_item(category, &name)?;
    if !result.awaiting_confirmation {
        print_messages(&result.messages);
        return Ok(());
    }

    let action = if yes || confirm(&result.messages)? {
        Action::ConfirmRemoveItem
    } else {
        Action::CancelRemoveItem
    };
    let result = ctx.api.dispatch(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_category_add(ctx: &mut WardrobeContext, name: &str, layer: Layer) -> Result<()> {
    let result = ctx.api.add_category(name, Some(layer))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_category_remove(ctx: &mut WardrobeContext, category: &str, yes: bool) -> Result<()> {
    let result = ctx.api.request_remove_category(category)?;
    if !result.awaiting_confirmation {
        print_messages(&result.messages);
        return Ok(());
    }

    let action = if yes || confirm(&result.messages)? {
        Action::ConfirmRemoveCategory
    } else {
        Action::CancelRemoveCategory
    };
    let result = ctx.api.dispatch(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_generate(
    ctx: &mut WardrobeContext,
    select: Vec<(String, Selection)>,
    page: usize,
) -> Result<()> {
    for (category, selection) in select {
        let result = ctx.api.select(&category, selection)?;
        print_messages(&result.messages);
    }

    let result = ctx.api.generate()?;
    ctx.api.go_to_page(page)?;

    let state = ctx.api.state();
    if state.outfits().is_empty() {
        print_messages(&result.messages);
        return Ok(());
    }
    print_outfits(&state.page());
    Ok(())
}

fn handle_config(ctx: &WardrobeContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in WardrobeConfig::keys() {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Prints the pending question and reads `Y` from stdin.
fn confirm(question: &[wardrobe::api::CmdMessage]) -> Result<bool> {
    print_messages(question);
    print!("[Y] To confirm: ");
    io::stdout().flush().map_err(WardrobeError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(WardrobeError::Io)?;
    Ok(input.trim() == "Y")
}
