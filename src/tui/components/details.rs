//! # Details Screen
//!
//! Displays the item id it was navigated to with. Pure parameter
//! pass-through: the session store plays no part on this screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events the details screen emits for the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsEvent {
    Back,
    Quit,
}

/// The details screen component. `item_id` is the route parameter.
pub struct DetailsScreen {
    pub item_id: String,
}

impl DetailsScreen {
    pub fn new(item_id: String) -> Self {
        Self { item_id }
    }
}

/// The body line for a given item id.
fn body_text(item_id: &str) -> String {
    format!("Item ID: {item_id}")
}

impl Component for DetailsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Details",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(body_text(&self.item_id)),
        ];

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

impl EventHandler for DetailsScreen {
    type Event = DetailsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailsEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => {
                Some(DetailsEvent::Back)
            }
            TuiEvent::InputChar('q') => Some(DetailsEvent::Quit),
            _ => None,
        }
    }
}
