//! # TitleBar Component
//!
//! Single-line bar at the top of the screen: app name and active screen
//! title on the left, signed-in user (when present) and a wall clock on
//! the right — the terminal stand-in for a mobile status bar.
//!
//! Stateless and props-based: all three fields come from the caller,
//! so the bar just renders what it is given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Title of the visible screen (e.g. "Home").
    pub screen_title: String,
    /// Name of the signed-in user, if any.
    pub user_name: Option<String>,
    /// Preformatted clock text (e.g. "14:05").
    pub clock: String,
}

impl TitleBar {
    pub fn new(screen_title: String, user_name: Option<String>, clock: String) -> Self {
        Self {
            screen_title,
            user_name,
            clock,
        }
    }

    /// Compose the full bar line, padding so the clock sits flush
    /// right. Padding is computed by display width, not byte length,
    /// so wide characters in a user name don't push the clock off
    /// screen.
    fn line_text(&self, width: u16) -> String {
        let left = match &self.user_name {
            Some(name) => format!("atrium · {} · {}", self.screen_title, name),
            None => format!("atrium · {}", self.screen_title),
        };
        let padding = (width as usize)
            .saturating_sub(left.width())
            .saturating_sub(self.clock.width())
            .max(1);
        format!("{left}{}{}", " ".repeat(padding), self.clock)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.line_text(area.width);
        frame.render_widget(
            Span::styled(text, Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
