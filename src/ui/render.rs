use crate::intake::PreviewSummary;
use crate::studio::StudioState;
use crate::style::PRESETS;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_panels, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BANANA_YELLOW, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(app.model(), app.api_configured()), header);
    frame.render_widget(Clear, body);

    let panels = body_panels(body);
    let state = app.studio().state();
    draw_upload(frame, app, state, panels.upload);
    draw_style(frame, app, state, panels.style);
    draw_result(frame, app, state, panels.result);

    frame.render_widget(Footer::widget(footer.width), footer);
}

fn panel(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_upload(frame: &mut Frame<'_>, app: &App, state: &StudioState, area: Rect) {
    let focused = app.focus() == Focus::Path;
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();

    match state.preview() {
        Some(preview) => {
            lines.push(Line::from(vec![
                Span::styled("Original  ", muted),
                Span::styled(preview.summary().name.clone(), text.add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::styled(describe_preview(preview.summary()), text));
            lines.push(Line::styled(preview.to_string(), muted));
        }
        None => {
            lines.push(Line::styled("No image selected", muted));
            lines.push(Line::styled("JPEG, PNG, WebP", muted));
            lines.push(Line::from(""));
        }
    }

    let cursor = if focused { "▏" } else { "" };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Path: ", muted),
        Span::styled(format!("{}{}", app.path_input(), cursor), text),
    ]));

    let widget = Paragraph::new(lines).block(panel(" 1 Upload Photo ", focused));
    frame.render_widget(widget, area);
}

fn draw_style(frame: &mut Frame<'_>, app: &App, state: &StudioState, area: Rect) {
    let list_focused = app.focus() == Focus::Presets;
    let custom_focused = app.focus() == Focus::Custom;
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();

    for (index, preset) in PRESETS.iter().enumerate() {
        let marker = if list_focused && index == app.preset_cursor() {
            "›"
        } else {
            " "
        };
        let style = if state.style.is_preset_highlighted(index) {
            Style::default().fg(BANANA_YELLOW).bg(ACTIVE_HIGHLIGHT)
        } else {
            text
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} {}. ", marker, index + 1), muted),
            Span::styled(preset.to_string(), style),
        ]));
    }

    let cursor = if custom_focused { "▏" } else { "" };
    let custom = state.style.custom();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Custom: ", muted),
        if custom.is_empty() && !custom_focused {
            Span::styled("Or type a custom style...", muted)
        } else {
            Span::styled(format!("{}{}", custom, cursor), text)
        },
    ]));

    lines.push(Line::from(""));
    lines.push(generate_button(app, state));

    if let Some(error) = state.error.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::styled(error.to_string(), Style::default().fg(STATUS_ERROR)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" 2 Choose Style ", list_focused || custom_focused));
    frame.render_widget(widget, area);
}

fn generate_button(app: &App, state: &StudioState) -> Line<'static> {
    if state.is_pending() {
        return Line::styled(
            format!("  {} Cartoonifying...", spinner(app.animation_tick())),
            Style::default().fg(BANANA_YELLOW),
        );
    }
    let style = if state.can_generate() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    Line::from(vec![Span::raw("  "), Span::styled(" Cartoonify Image (Ctrl+G) ", style)])
}

fn draw_result(frame: &mut Frame<'_>, app: &App, state: &StudioState, area: Rect) {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();

    if state.is_pending() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", spinner(app.animation_tick())),
                Style::default().fg(STATUS_OK),
            ),
            Span::styled("Generating cartoon...", text),
        ]));
    } else if let Some(result) = state.result.as_ref() {
        lines.push(Line::from(vec![
            Span::styled("Gemini Output  ", muted),
            Span::styled(
                format!(
                    "{} · {}",
                    result.media_type(),
                    format_size(result.payload().len() / 4 * 3)
                ),
                text,
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::styled("Ctrl+D to download", Style::default().fg(STATUS_OK)));
    } else {
        lines.push(Line::styled("Result will appear here", muted));
    }

    if let Some(notice) = app.notice() {
        let color = if notice.is_error { STATUS_ERROR } else { STATUS_OK };
        lines.push(Line::from(""));
        lines.push(Line::styled(notice.text.clone(), Style::default().fg(color)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" 3 Result ", false));
    frame.render_widget(widget, area);
}

fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

fn describe_preview(summary: &PreviewSummary) -> String {
    match summary.dimensions {
        Some((w, h)) => format!(
            "{} · {} · {}×{}",
            summary.media_type,
            format_size(summary.byte_len),
            w,
            h
        ),
        None => format!("{} · {}", summary.media_type, format_size(summary.byte_len)),
    }
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f >= KB * KB {
        format!("{:.1} MB", bytes_f / (KB * KB))
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}
