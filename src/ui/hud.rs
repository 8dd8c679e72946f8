use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{GridSize, Theme};
use crate::game::Snapshot;

const SEPARATOR: &str = " │ ";

/// Values shown in the HUD that are not part of the game snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub grid: GridSize,
    pub tick_rate_hz: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(snapshot, info, usize::from(hud_area.width)))
            .alignment(Alignment::Left)
            .style(Style::default().fg(info.theme.muted)),
        hud_area,
    );

    play_area
}

/// Builds the HUD line, dropping the labels when the full text would not fit.
fn info_line(snapshot: &Snapshot, info: &HudInfo<'_>, available_width: usize) -> Line<'static> {
    let compact = full_width(snapshot, info) > available_width;
    let score_label = if compact { "S" } else { "Score" };
    let length_label = if compact { "L" } else { "Length" };
    let value = Style::default()
        .fg(info.theme.text)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw(format!("{score_label}: ")),
        Span::styled(snapshot.score.to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw(format!("{length_label}: ")),
        Span::styled(snapshot.snake.len().to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw(format!(
            "{}x{} @ {} Hz",
            info.grid.width, info.grid.height, info.tick_rate_hz
        )),
    ])
}

fn full_width(snapshot: &Snapshot, info: &HudInfo<'_>) -> usize {
    let text = format!(
        "Score: {}{SEPARATOR}Length: {}{SEPARATOR}{}x{} @ {} Hz",
        snapshot.score,
        snapshot.snake.len(),
        info.grid.width,
        info.grid.height,
        info.tick_rate_hz
    );
    text.width()
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::{GameStatus, Snapshot};
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{HudInfo, info_line};

    fn snapshot() -> Snapshot {
        Snapshot {
            snake: vec![Position { x: 1, y: 0 }, Position { x: 0, y: 0 }],
            food: Some(Position { x: 3, y: 3 }),
            score: 12,
            status: GameStatus::Running,
            end_reason: None,
            direction: Direction::Right,
            tick_count: 4,
        }
    }

    fn text(line: &ratatui::text::Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn wide_hud_uses_full_labels() {
        let info = HudInfo {
            grid: GridSize {
                width: 40,
                height: 30,
            },
            tick_rate_hz: 10,
            theme: &THEME_CLASSIC,
        };

        let line = info_line(&snapshot(), &info, 80);

        assert_eq!(text(&line), "Score: 12 │ Length: 2 │ 40x30 @ 10 Hz");
    }

    #[test]
    fn narrow_hud_uses_compact_labels() {
        let info = HudInfo {
            grid: GridSize {
                width: 40,
                height: 30,
            },
            tick_rate_hz: 10,
            theme: &THEME_CLASSIC,
        };

        let line = info_line(&snapshot(), &info, 20);

        assert_eq!(text(&line), "S: 12 │ L: 2 │ 40x30 @ 10 Hz");
    }
}
