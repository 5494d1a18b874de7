use dogfeed_core::{ConfirmPrompt, EntryRowView, FeedViewModel};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;
use super::Screen;

pub fn render(frame: &mut Frame<'_>, view: &FeedViewModel, screen: &mut Screen) {
    let screen_area = frame.area();
    let areas = layout::split(screen_area);

    frame.render_widget(
        Paragraph::new(APP_HEADER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)),
        areas.header,
    );
    frame.render_widget(
        Paragraph::new(WELCOME_TEXT).alignment(Alignment::Center),
        areas.welcome,
    );
    frame.render_widget(buttons(), areas.buttons);

    render_feed(frame, areas.list, view, screen);
    frame.render_widget(footer(view, screen.list.selected()), areas.footer);

    if view.busy {
        render_loading(frame, areas.list, screen.spinner_frame);
    }
    if let Some(prompt) = &screen.prompt {
        render_prompt(frame, screen_area, prompt);
    }
}

fn buttons() -> Paragraph<'static> {
    let button = Style::default()
        .fg(Color::White)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD);
    Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::styled(BUTTON_FETCH, button),
            Span::raw("   "),
            Span::styled(BUTTON_CLEAR, button),
        ]),
    ])
    .alignment(Alignment::Center)
}

fn render_feed(frame: &mut Frame<'_>, area: Rect, view: &FeedViewModel, screen: &mut Screen) {
    let block = Block::default()
        .title(LIST_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY_LIGHT));

    if view.is_empty {
        frame.render_widget(
            Paragraph::new(EMPTY_FEED)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = view.entries.iter().map(entry_row).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(PRIMARY_LIGHT).fg(Color::Black))
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, area, screen.list.state_mut());
}

fn entry_row(entry: &EntryRowView) -> ListItem<'static> {
    let id = entry.id.to_string();
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:>3}. ", entry.position),
            Style::default().fg(PRIMARY),
        ),
        Span::raw(entry.url.clone()),
        Span::styled(
            format!("  #{}", &id[..8]),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn footer(view: &FeedViewModel, selected: Option<usize>) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        KEY_HINTS,
        Style::default().fg(Color::DarkGray),
    )];
    spans.push(Span::raw(format!("  |  Dogs: {}", view.entries.len())));
    if let Some(selected) = selected.filter(|_| !view.is_empty) {
        spans.push(Span::raw(format!("  |  Viewing: {}", selected + 1)));
    }
    if view.outstanding > 1 {
        spans.push(Span::raw(format!("  |  In flight: {}", view.outstanding)));
    }
    Paragraph::new(Line::from(spans))
}

fn render_loading(frame: &mut Frame<'_>, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let overlay = layout::centered(26, 3, area);
    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(format!("{spinner} {LOADING_TEXT}"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(PRIMARY))
            .block(Block::default().borders(Borders::ALL)),
        overlay,
    );
}

fn render_prompt(frame: &mut Frame<'_>, area: Rect, prompt: &ConfirmPrompt) {
    let dialog = layout::centered(50, 7, area);
    frame.render_widget(Clear, dialog);

    let text = vec![
        Line::from(prompt.message.as_str()),
        Line::default(),
        Line::from(vec![
            Span::raw(format!("[n] {}", prompt.cancel_label)),
            Span::raw("      "),
            Span::styled(
                format!("[y] {}", prompt.confirm_label),
                Style::default()
                    .fg(DESTRUCTIVE)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", prompt.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DESTRUCTIVE)),
            ),
        dialog,
    );
}
