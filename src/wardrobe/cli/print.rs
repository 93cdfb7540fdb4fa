use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wardrobe::api::{CategoryListing, CmdMessage, MessageLevel};
use wardrobe::model::{LayerPick, Outfit};
use wardrobe::pagination::Page;
use wardrobe::registry::display_name;

const COLUMN_WIDTH: usize = 32;
const NO_OUTER: &str = "(no outer)";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_categories(categories: &[CategoryListing]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let id = if category.name == category.id {
            String::new()
        } else {
            format!(" ({})", category.id)
        };
        let marker = if category.protected { " default" } else { "" };
        println!(
            "{}{} {}{}",
            category.name.bold(),
            id.dimmed(),
            format!("[{}]", category.layer).cyan(),
            marker.dimmed()
        );
        if category.items.is_empty() {
            println!("    {}", "no items".dimmed());
        }
        for item in &category.items {
            println!("    {}", item);
        }
    }
}

fn pick_label(pick: &LayerPick) -> String {
    format!("{} ({})", pick.item, display_name(&pick.category))
}

pub(super) fn print_outfits(page: &Page<'_, Outfit>) {
    if page.entries.is_empty() {
        return;
    }

    let idx_width = (page.offset + page.entries.len()).to_string().len() + 2;
    for (i, outfit) in page.entries.iter().enumerate() {
        let idx = format!("{:>width$}", format!("{}.", page.offset + i + 1), width = idx_width);

        let outer = match &outfit.outer {
            Some(pick) => pad_to_width(&pick_label(pick), COLUMN_WIDTH).normal(),
            None => pad_to_width(NO_OUTER, COLUMN_WIDTH).dimmed(),
        };
        let inner = pad_to_width(&pick_label(&outfit.inner), COLUMN_WIDTH);
        let bottom = truncate_to_width(&pick_label(&outfit.bottom), COLUMN_WIDTH);

        println!("{} {}{}{}", idx.yellow(), outer, inner, bottom);
    }

    println!();
    println!("{}", page_footer(page).dimmed());
}

/// `Page x/y (n outfits)`, followed by the `--page` values for neighbouring pages.
fn page_footer<T>(page: &Page<'_, T>) -> String {
    let mut footer = format!(
        "Page {}/{} ({} outfits)",
        page.number, page.total_pages, page.total_entries
    );
    if page.has_prev() {
        footer.push_str(&format!("  prev: --page {}", page.number - 1));
    }
    if page.has_next() {
        footer.push_str(&format!("  next: --page {}", page.number + 1));
    }
    footer
}

fn pad_to_width(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
