//! # Home Screen
//!
//! The root screen: shows who is signed in, lets the user sign in or
//! out, and is the navigation trigger for the details screen.
//!
//! ## States
//!
//! - **Signed out**: sign-in key hints.
//! - **Loading**: animated spinner while a simulated sign-in resolves.
//! - **Signed in**: name and email of the stored identity.
//! - **Error**: a bordered panel with the failure message. The panel
//!   stays until the next successful sign-in or sign-out clears the
//!   error in the store.
//!
//! The screen renders a snapshot of [`SessionState`] passed in as a
//! prop; it never mutates the store itself. Mutations happen in the
//! main loop in response to the [`HomeEvent`]s emitted here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::SessionState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// High-level events the home screen emits for the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    /// Start a simulated sign-in that will succeed.
    SignIn,
    /// Start a simulated sign-in that will fail.
    SignInFailing,
    SignOut,
    /// Navigate to the details screen.
    OpenDetails,
    Quit,
}

/// The home screen component. Props-based: `session` is a snapshot
/// taken by the caller.
pub struct HomeScreen {
    pub session: SessionState,
    pub spinner_frame: usize,
}

impl HomeScreen {
    pub fn new(session: SessionState, spinner_frame: usize) -> Self {
        Self {
            session,
            spinner_frame,
        }
    }

    fn status_lines(&self) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Home",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "ratatui + crossterm + session store",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];

        if self.session.is_loading {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            lines.push(Line::from(Span::styled(
                format!("{glyph} Signing in..."),
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(user) = &self.session.user {
            lines.push(Line::from(format!("Signed in: {}", user.name)));
            lines.push(Line::from(Span::styled(
                format!("Email: {}", user.email),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Signed out",
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }
}

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Reserve the bottom of the screen for the error panel so the
        // centered status block doesn't jump when an error appears.
        let (content_area, error_area) = match &self.session.error {
            Some(message) => {
                let wrapped = wrap_error(message, area.width);
                let panel_height = wrapped.len() as u16 + 2; // borders
                let layout = Layout::vertical([
                    Constraint::Min(0),
                    Constraint::Length(panel_height.min(area.height)),
                ]);
                let [content, error] = layout.areas(area);
                (content, Some((error, wrapped)))
            }
            None => (area, None),
        };

        let lines = self.status_lines();
        let block_height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(block_height)])
            .flex(Flex::Center)
            .areas(content_area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);

        if let Some((error_rect, wrapped)) = error_area {
            let error_style = Style::default().fg(Color::Red);
            let paragraph = Paragraph::new(wrapped)
                .block(Block::bordered().title("Error").border_style(error_style))
                .style(error_style);
            frame.render_widget(paragraph, error_rect);
        }
    }
}

impl EventHandler for HomeScreen {
    type Event = HomeEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HomeEvent> {
        // Quit always works; everything else is ignored while a
        // sign-in is resolving.
        if let TuiEvent::InputChar('q') | TuiEvent::Escape = event {
            return Some(HomeEvent::Quit);
        }
        if self.session.is_loading {
            return None;
        }

        let signed_in = self.session.user.is_some();
        match event {
            TuiEvent::InputChar('l') if !signed_in => Some(HomeEvent::SignIn),
            TuiEvent::InputChar('f') if !signed_in => Some(HomeEvent::SignInFailing),
            TuiEvent::InputChar('o') if signed_in => Some(HomeEvent::SignOut),
            TuiEvent::InputChar('d') | TuiEvent::Submit => Some(HomeEvent::OpenDetails),
            _ => None,
        }
    }
}

/// Wrap an error message to fit inside the bordered panel.
fn wrap_error(message: &str, panel_width: u16) -> Vec<Line<'static>> {
    let inner_width = panel_width.saturating_sub(2).max(1) as usize;
    textwrap::wrap(message, inner_width)
        .into_iter()
        .map(|cow| Line::from(cow.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_user;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn signed_out() -> SessionState {
        SessionState::default()
    }

    fn signed_in() -> SessionState {
        SessionState {
            user: Some(test_user()),
            ..Default::default()
        }
    }

    fn loading() -> SessionState {
        SessionState {
            is_loading: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_signed_out_sign_in_keys() {
        let mut home = HomeScreen::new(signed_out(), 0);
        assert_eq!(
            home.handle_event(&TuiEvent::InputChar('l')),
            Some(HomeEvent::SignIn)
        );
        assert_eq!(
            home.handle_event(&TuiEvent::InputChar('f')),
            Some(HomeEvent::SignInFailing)
        );
        // Sign-out is not available while signed out
        assert_eq!(home.handle_event(&TuiEvent::InputChar('o')), None);
    }

    #[test]
    fn test_signed_in_sign_out_key() {
        let mut home = HomeScreen::new(signed_in(), 0);
        assert_eq!(
            home.handle_event(&TuiEvent::InputChar('o')),
            Some(HomeEvent::SignOut)
        );
        // Sign-in is not available while signed in
        assert_eq!(home.handle_event(&TuiEvent::InputChar('l')), None);
        assert_eq!(home.handle_event(&TuiEvent::InputChar('f')), None);
    }

    #[test]
    fn test_details_navigation_keys() {
        let mut home = HomeScreen::new(signed_out(), 0);
        assert_eq!(
            home.handle_event(&TuiEvent::Submit),
            Some(HomeEvent::OpenDetails)
        );
        assert_eq!(
            home.handle_event(&TuiEvent::InputChar('d')),
            Some(HomeEvent::OpenDetails)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut home = HomeScreen::new(signed_out(), 0);
        assert_eq!(home.handle_event(&TuiEvent::InputChar('q')), Some(HomeEvent::Quit));
        assert_eq!(home.handle_event(&TuiEvent::Escape), Some(HomeEvent::Quit));
    }

    #[test]
    fn test_loading_ignores_everything_but_quit() {
        let mut home = HomeScreen::new(loading(), 0);
        assert_eq!(home.handle_event(&TuiEvent::InputChar('l')), None);
        assert_eq!(home.handle_event(&TuiEvent::Submit), None);
        assert_eq!(home.handle_event(&TuiEvent::InputChar('o')), None);
        assert_eq!(home.handle_event(&TuiEvent::InputChar('q')), Some(HomeEvent::Quit));
    }

    #[test]
    fn test_status_lines_show_user_when_signed_in() {
        let home = HomeScreen::new(signed_in(), 0);
        let text: Vec<String> = home.status_lines().iter().map(Line::to_string).collect();
        assert!(text.iter().any(|line| line.contains("Signed in: Test User")));
        assert!(text.iter().any(|line| line.contains("test@example.com")));
    }

    #[test]
    fn test_status_lines_show_signed_out_hint() {
        let home = HomeScreen::new(signed_out(), 0);
        let text: Vec<String> = home.status_lines().iter().map(Line::to_string).collect();
        assert!(text.iter().any(|line| line.contains("Signed out")));
        assert!(!text.iter().any(|line| line.contains("Signed in:")));
    }

    #[test]
    fn test_status_lines_show_spinner_while_loading() {
        let home = HomeScreen::new(loading(), 3);
        let text: Vec<String> = home.status_lines().iter().map(Line::to_string).collect();
        assert!(text.iter().any(|line| line.contains("Signing in...")));
    }

    #[test]
    fn test_wrap_error_fits_panel_width() {
        let lines = wrap_error("a longer failure message that needs wrapping", 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.to_string().len() <= 18);
        }
    }

    #[test]
    fn test_render_smoke_all_states() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let states = [
            signed_out(),
            signed_in(),
            loading(),
            SessionState {
                error: Some("Failed to load user".to_string()),
                ..Default::default()
            },
        ];
        for session in states {
            terminal
                .draw(|f| HomeScreen::new(session.clone(), 0).render(f, f.area()))
                .unwrap();
        }
    }
}
