use crate::ui::theme::{BANANA_YELLOW, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget(model: &str, api_configured: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (key_text, key_style) = if api_configured {
            ("API key set", Style::default().fg(STATUS_OK))
        } else {
            ("API key missing", Style::default().fg(STATUS_ERROR))
        };

        let line = Line::from(vec![
            Span::styled("  Banana", text_style.add_modifier(Modifier::BOLD)),
            Span::styled(
                "Toon",
                Style::default().fg(BANANA_YELLOW).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(model.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(key_text, key_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
