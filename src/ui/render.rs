use crate::catalog::{Currency, Role};
use crate::converter::{ConversionPhase, ConverterState, CurrencyPanel};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::picker::PickerState;
use crate::ui::theme::{
    panel_palette, ACTIVE_HIGHLIGHT, BACKGROUND, ERROR_TEXT, HEADER_TEXT, HINT_TEXT,
    LOADING_TEXT, POPUP_BORDER, SWAP_CONTROL,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let regions = layout_regions(area);
    frame.render_widget(Header::widget(), regions.header);

    let state = app.converter();
    let source = CurrencyPanel {
        amount: app.amount_input().to_string(),
        ..state.panel(Role::Source)
    };
    frame.render_widget(panel_widget(&source), regions.source);
    frame.render_widget(panel_widget(&state.panel(Role::Target)), regions.target);

    let swap_line = if state.swap_visible {
        Line::from(Span::styled(
            "⇅ swap (S)",
            Style::default()
                .fg(SWAP_CONTROL)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(
        Paragraph::new(swap_line).alignment(Alignment::Center),
        regions.swap,
    );

    let status = status_lines(state);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        regions.status,
    );

    frame.render_widget(
        Footer::widget(regions.footer, app.picker().is_visible()),
        regions.footer,
    );

    if !app.picker().is_visible() && regions.source.height > 2 && regions.source.width > 2 {
        let label_width = panel_label(&source).chars().count() as u16;
        let x = regions.source.x + 1 + label_width + app.amount_input().chars().count() as u16;
        let x = x.min(regions.source.x + regions.source.width.saturating_sub(2));
        frame.set_cursor_position((x, regions.source.y + 2));
    }

    if let PickerState::Visible { role, highlighted } = app.picker() {
        draw_picker(frame, area, *role, *highlighted);
    }
}

fn status_lines(state: &ConverterState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match state.phase() {
        ConversionPhase::Pending => lines.push(Line::from(Span::styled(
            "Converting…",
            Style::default().fg(LOADING_TEXT),
        ))),
        ConversionPhase::Idle if !state.has_error() => lines.push(Line::from(Span::styled(
            "Type an amount to convert",
            Style::default().fg(HINT_TEXT),
        ))),
        ConversionPhase::Idle | ConversionPhase::Settled => {}
    }
    if state.has_error() {
        lines.push(Line::from(Span::styled(
            state.error.clone(),
            Style::default().fg(ERROR_TEXT),
        )));
    }
    lines
}

fn panel_label(panel: &CurrencyPanel) -> String {
    format!(
        " {} {} · {}   ",
        panel.currency.icon(),
        panel.currency.code(),
        panel.currency.name()
    )
}

fn panel_widget(panel: &CurrencyPanel) -> Paragraph<'static> {
    let palette = panel_palette(panel.role);
    let text_style = Style::default().fg(palette.text).bg(palette.background);

    let amount = if panel.amount.is_empty() {
        Span::styled(
            panel.role.placeholder(),
            text_style.add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled(panel.amount.clone(), text_style.add_modifier(Modifier::BOLD))
    };

    let arrow = if panel.role.is_editable() { "▾ F" } else { "▾ T" };
    let lines = vec![
        Line::from(Span::styled(format!(" {}  {}", panel.role.title(), arrow), text_style)),
        Line::from(vec![Span::styled(panel_label(panel), text_style), amount]),
    ];

    Paragraph::new(lines).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    )
}

fn draw_picker(frame: &mut Frame<'_>, area: Rect, role: Role, highlighted: usize) {
    let lines: Vec<Line> = Currency::ALL
        .iter()
        .enumerate()
        .map(|(idx, currency)| {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} {} ", currency.icon(), currency.code()),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(currency.name(), Style::default().fg(HINT_TEXT)),
            ]);
            if idx == highlighted {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(32);
    let height = lines.len().saturating_add(2) as u16;
    let rect = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", role.title()),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
