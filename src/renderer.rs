use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_COLUMNS, GLYPH_CELL, GridSize, Theme};
use crate::game::{GameStatus, Snapshot};
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, hud_info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, hud_info);
    let theme = hud_info.theme;

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, hud_info.grid, snapshot, theme);
    render_snake(frame, inner, hud_info.grid, snapshot, theme);

    match snapshot.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::Over => render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            snapshot.end_reason,
            theme,
        ),
        GameStatus::Running => {}
    }
}

fn render_food(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: GridSize,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, grid, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(theme.food));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: GridSize,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let buffer = frame.buffer_mut();

    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, grid, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

/// Maps a grid cell to the terminal column/row of its left half.
///
/// Cells that fall outside the grid or the visible area yield `None`.
fn logical_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
