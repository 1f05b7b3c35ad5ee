//! Request preview rendering
//!
//! Shows the parsed breakdown of the URL being typed: path, version and
//! each query parameter, with a marker on parameters the manifest does
//! not list for the current path.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render_pane(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ")
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = Vec::new();

    if !app.preview.parse_ok {
        lines.push(Line::from(Span::styled(
            "(type a full URL to see its breakdown)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let path = match &app.preview.path {
            Some(path) => format!("/{path}"),
            None => "/".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled("Path     ", Style::default().fg(Color::DarkGray)),
            Span::styled(path, Style::default().fg(Color::White)),
        ]));

        if let Some(version) = &app.preview.version {
            lines.push(Line::from(vec![
                Span::styled("Version  ", Style::default().fg(Color::DarkGray)),
                Span::styled(version.clone(), Style::default().fg(Color::White)),
            ]));
        }

        if !app.preview.entries.is_empty() {
            lines.push(Line::from(""));
            for entry in &app.preview.entries {
                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(entry.name.clone(), Style::default().fg(Color::Cyan)),
                ];
                if let Some(value) = &entry.value {
                    spans.push(Span::styled(" = ", Style::default().fg(Color::DarkGray)));
                    spans.push(Span::styled(
                        value.clone(),
                        Style::default().fg(Color::White),
                    ));
                }
                if entry.known == Some(false) {
                    spans.push(Span::styled(
                        "  (not in manifest)",
                        Style::default().fg(Color::Yellow),
                    ));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "preview_render_tests.rs"]
mod preview_render_tests;
