//! Human-readable output using `colored`.

use colored::Colorize;

use crate::core::quote::{FETCH_FAILED_MESSAGE, Quote};

/// Render a quote for human consumption.
///
/// Three lines mirroring the three display regions: text, attributed
/// author, tag label.
#[must_use]
pub fn render_quote(quote: &Quote, no_color: bool) -> String {
    let mut output = String::new();

    if no_color {
        output.push_str(&quote.content);
        output.push('\n');
        output.push_str(&quote.attribution());
        output.push('\n');
        output.push_str(&format!("tags: {}", quote.tags_text));
    } else {
        output.push_str(&quote.content.bold().to_string());
        output.push('\n');
        output.push_str(&quote.attribution().italic().to_string());
        output.push('\n');
        output.push_str(&format!("tags: {}", quote.tags_text).dimmed().to_string());
    }

    output
}

/// Render the fixed failure message; the author region stays empty and a
/// user-typed tag is preserved.
#[must_use]
pub fn render_failure(tag: &str, no_color: bool) -> String {
    let mut output = String::new();

    if no_color {
        output.push_str(FETCH_FAILED_MESSAGE);
    } else {
        output.push_str(&FETCH_FAILED_MESSAGE.red().to_string());
    }

    if !tag.is_empty() {
        output.push('\n');
        if no_color {
            output.push_str(&format!("tags: {tag}"));
        } else {
            output.push_str(&format!("tags: {tag}").dimmed().to_string());
        }
    }

    output
}
