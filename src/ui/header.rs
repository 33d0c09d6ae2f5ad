use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Currency converter";

pub struct Header;

impl Header {
    pub fn widget() -> Paragraph<'static> {
        let line = Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
