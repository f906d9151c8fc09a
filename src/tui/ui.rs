//! Frame layout: title bar on top, the active screen in the middle,
//! key hints along the bottom.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::state::SessionState;
use crate::tui::component::Component;
use crate::tui::components::{DetailsScreen, HomeScreen, TitleBar};
use crate::tui::navigation::Route;

pub fn draw_ui(frame: &mut Frame, session: &SessionState, route: &Route, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        route.title().to_string(),
        session.user.as_ref().map(|u| u.name.clone()),
        Local::now().format("%H:%M").to_string(),
    );
    title_bar.render(frame, title_area);

    match route {
        Route::Home => {
            HomeScreen::new(session.clone(), spinner_frame).render(frame, main_area);
        }
        Route::Details { item_id } => {
            DetailsScreen::new(item_id.clone()).render(frame, main_area);
        }
    }

    let footer = Paragraph::new(Span::styled(
        footer_hints(route, session),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(footer, footer_area);
}

/// Key hints for the active screen, adjusted to the session state so
/// only actions that would do something are advertised.
fn footer_hints(route: &Route, session: &SessionState) -> &'static str {
    match route {
        Route::Home if session.is_loading => "signing in...  [q] quit",
        Route::Home if session.user.is_some() => "[enter] details  [o] sign out  [q] quit",
        Route::Home => "[enter] details  [l] sign in  [f] failing sign-in  [q] quit",
        Route::Details { .. } => "[esc] back  [q] quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_user;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_footer_hints_follow_session_state() {
        let home = Route::Home;
        let signed_out = SessionState::default();
        assert!(footer_hints(&home, &signed_out).contains("[l] sign in"));

        let signed_in = SessionState {
            user: Some(test_user()),
            ..Default::default()
        };
        assert!(footer_hints(&home, &signed_in).contains("[o] sign out"));
        assert!(!footer_hints(&home, &signed_in).contains("[l] sign in"));

        let loading = SessionState {
            is_loading: true,
            ..Default::default()
        };
        assert!(footer_hints(&home, &loading).contains("signing in"));
    }

    #[test]
    fn test_footer_hints_on_details() {
        let details = Route::Details {
            item_id: "123".to_string(),
        };
        assert!(footer_hints(&details, &SessionState::default()).contains("[esc] back"));
    }

    #[test]
    fn test_draw_ui_smoke_both_routes() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let session = SessionState {
            user: Some(test_user()),
            ..Default::default()
        };

        terminal
            .draw(|f| draw_ui(f, &session, &Route::Home, 0))
            .unwrap();
        terminal
            .draw(|f| {
                draw_ui(
                    f,
                    &session,
                    &Route::Details {
                        item_id: "123".to_string(),
                    },
                    0,
                )
            })
            .unwrap();
    }
}
