//! Stateless rendering of the guessing game.

use super::app::App;
use crate::celebration::Sprite;
use crate::feedback::{FeedbackKind, GuessTag};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::time::Instant;
use strictly_guess::{LOWER_BOUND, TargetSource, UPPER_BOUND};

/// Renders the whole screen.
pub fn draw<S: TargetSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Stats
            Constraint::Length(3), // Input
            Constraint::Length(3), // Feedback
            Constraint::Min(3),    // Guesses
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_stats(frame, chunks[1], app);
    draw_input(frame, chunks[2], app);
    draw_feedback(frame, chunks[3], app);
    draw_guesses(frame, chunks[4], app);
    draw_help(frame, chunks[5], app);
    draw_confetti(frame, area, &app.surface().sprites(Instant::now()));
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Strictly Guess",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Guess a number between {} and {}",
            LOWER_BOUND, UPPER_BOUND
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_stats<S: TargetSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let board = app.board();
    let stats = Line::from(vec![
        Span::raw("Attempts: "),
        Span::styled(
            board.attempts().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Remaining: "),
        Span::styled(
            board.remaining().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let paragraph = Paragraph::new(stats)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_input<S: TargetSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let locked = *app.board().locked();
    let (title, border) = if locked {
        (" Locked ", Style::default().fg(Color::DarkGray))
    } else if app.submit_enabled() {
        (" Your guess (Enter to submit) ", Style::default().fg(Color::Green))
    } else {
        (" Your guess ", Style::default().fg(Color::Gray))
    };

    let text = if app.input().is_empty() && !locked {
        Span::styled(
            format!("{}-{}", LOWER_BOUND, UPPER_BOUND),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(app.input().to_string())
    };

    let paragraph = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(paragraph, area);
}

fn draw_feedback<S: TargetSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let feedback = app.board().feedback();
    let style = match feedback.kind() {
        FeedbackKind::Ready => Style::default().fg(Color::White),
        FeedbackKind::Error => Style::default().fg(Color::Red),
        FeedbackKind::Hint => Style::default().fg(Color::Yellow),
        FeedbackKind::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    let paragraph = Paragraph::new(feedback.message().as_str())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_guesses<S: TargetSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chips: Vec<Span> = app
        .board()
        .guesses()
        .iter()
        .flat_map(|guess| {
            [
                Span::styled(format!(" {} ", guess.value()), tag_style(*guess.tag())),
                Span::raw(" "),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(chips))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Previous guesses "),
        );
    frame.render_widget(paragraph, area);
}

fn tag_style(tag: GuessTag) -> Style {
    match tag {
        GuessTag::High => Style::default().fg(Color::White).bg(Color::Red),
        GuessTag::Low => Style::default().fg(Color::White).bg(Color::Blue),
        GuessTag::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn draw_help<S: TargetSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let help = if *app.board().locked() {
        "r/Enter: play again   q/Esc: quit"
    } else {
        "Enter: submit   Backspace: delete   Esc: quit"
    };
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_confetti(frame: &mut Frame, area: Rect, sprites: &[Sprite]) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    for sprite in sprites {
        let x = area.x + ((sprite.column * f32::from(area.width)) as u16).min(area.width - 1);
        let y = area.y + ((sprite.row * f32::from(area.height)) as u16).min(area.height - 1);
        let piece = Paragraph::new("*").style(Style::default().fg(sprite.color));
        frame.render_widget(piece, Rect::new(x, y, 1, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CelebrationSettings;
    use crate::tui::app::TuiSurface;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_guess::{FixedTarget, GameSession};

    fn render(app: &App<FixedTarget>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with_guesses(target: u8, guesses: &[&str]) -> App<FixedTarget> {
        // No confetti, so the rendered text is deterministic.
        let settings: CelebrationSettings = toml::from_str("particles = 0").unwrap();
        let surface = TuiSurface::new(settings, StdRng::seed_from_u64(5));
        let mut app = App::new(GameSession::with_source(FixedTarget::new(target)), surface);
        for guess in guesses {
            for c in guess.chars() {
                app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            }
            app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        }
        app
    }

    #[test]
    fn test_fresh_screen() {
        let screen = render(&app_with_guesses(50, &[]));
        assert!(screen.contains("Strictly Guess"));
        assert!(screen.contains("Attempts: 0"));
        assert!(screen.contains("Remaining: 10"));
        assert!(screen.contains("Ready to play?"));
    }

    #[test]
    fn test_hint_and_guess_list() {
        let screen = render(&app_with_guesses(50, &["25", "75"]));
        assert!(screen.contains("Too high!"));
        assert!(screen.contains(" 25 "));
        assert!(screen.contains(" 75 "));
        // Every chip keeps its padding, the first one included.
        assert!(screen.contains("│ 25   75 "));
        assert!(screen.contains("Remaining: 8"));
    }

    #[test]
    fn test_finished_screen_offers_restart() {
        let screen = render(&app_with_guesses(50, &["50"]));
        assert!(screen.contains("Congratulations!"));
        assert!(screen.contains("Locked"));
        assert!(screen.contains("play again"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = app_with_guesses(50, &["50"]);
        let mut terminal = Terminal::new(TestBackend::new(1, 1)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
