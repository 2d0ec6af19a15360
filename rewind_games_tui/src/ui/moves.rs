//! Move history list rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use rewind_games::Game;

/// Renders the navigable move history.
///
/// One line per recorded step; the active step is tagged so a player can
/// see where the timeline currently points while the cursor roams.
pub fn render_moves(f: &mut Frame, area: Rect, game: &Game, selected: usize) {
    let items: Vec<ListItem> = game
        .entries()
        .iter()
        .map(|entry| {
            let label = if entry.step() == game.current_step() {
                format!("{} (current)", entry)
            } else {
                entry.to_string()
            };
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("History"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
