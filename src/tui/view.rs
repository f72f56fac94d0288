//! Rendering of the interactive display regions.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use super::app::App;

/// Draw the four regions: quote text, author, tags, footer.
pub fn draw(frame: &mut Frame, app: &App) {
    let outer = Block::bordered().title(" qfetch ");
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [quote_area, author_area, tags_area, footer_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);

    // Quote text region: the loading animation replaces the text, dimmed
    // (the reduced-opacity analog).
    let quote = app.loading.frame().map_or_else(
        || Paragraph::new(app.quote_text.as_str()),
        |loading_frame| Paragraph::new(loading_frame).style(Style::new().add_modifier(Modifier::DIM)),
    );
    frame.render_widget(quote.wrap(Wrap { trim: true }), quote_area);

    let author = Paragraph::new(app.author.as_str())
        .style(Style::new().add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Right);
    frame.render_widget(author, author_area);

    let tags = Paragraph::new(Line::from(format!("tags: {}", app.tags)))
        .style(Style::new().add_modifier(Modifier::DIM));
    frame.render_widget(tags, tags_area);

    frame.render_widget(footer(app), footer_area);
}

fn footer(app: &App) -> Paragraph<'static> {
    let mut text = String::from("Enter: new quote  ·  type to edit tag  ·  Esc: quit");

    if app.loading.is_loading() {
        // Busy marker while the trigger is disabled.
        text.push_str("  [busy]");
    } else if let (Some(source), Some(at)) = (app.source, app.last_update) {
        text.push_str(&format!(
            "  ·  {} at {}",
            source.display_name(),
            at.format("%H:%M:%S")
        ));
    }

    Paragraph::new(text).style(Style::new().add_modifier(Modifier::DIM))
}
