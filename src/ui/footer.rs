use crate::ui::theme::{GLOBAL_BORDER, HINT_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const MAIN_HINTS: &str = " 0-9: Amount │ F: From │ T: To │ S: Swap │ Q: Quit";
const PICKER_HINTS: &str = " Up/Down: Move │ Enter: Select │ Esc: Close";

pub struct Footer;

impl Footer {
    pub fn widget(area: Rect, picker_open: bool) -> Paragraph<'static> {
        let hints = if picker_open { PICKER_HINTS } else { MAIN_HINTS };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
