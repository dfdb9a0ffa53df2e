//! Frame layout and widget rendering.
//!
//! Layout, top to bottom: header with the query/filter/sort controls,
//! the company table (or a placeholder), and a status/footer strip.

use crate::model::Company;
use crate::state::{AppState, DirectoryView, InputMode, LineEditor, LoadState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Render one frame from the current state.
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let view = state.directory_view();

    render_header(frame, chunks[0], state);
    render_body(frame, chunks[1], state, &view);
    render_footer(frame, chunks[2], state, &view);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let search_line = match &state.mode {
        InputMode::EditSearch(editor) => editing_line("Search: ", editor),
        _ => Line::from(vec![
            Span::styled("Search: ", label_style()),
            if state.search_query().is_empty() {
                Span::styled("(all)", dim_style())
            } else {
                Span::raw(state.search_query().to_string())
            },
        ]),
    };

    let filters = state.filters();
    let mut spans = vec![
        Span::styled("Industry: ", label_style()),
        Span::raw(filters.industry.clone().unwrap_or_else(|| "All".to_string())),
        Span::raw("  "),
        Span::styled("Location: ", label_style()),
        Span::raw(filters.location.clone().unwrap_or_else(|| "All".to_string())),
        Span::raw("  "),
    ];
    match &state.mode {
        InputMode::EditMinEmployees(editor) => {
            spans.extend(editing_line("Min employees: ", editor).spans);
        }
        _ => {
            spans.push(Span::styled("Min employees: ", label_style()));
            spans.push(Span::raw(filters.min_employees.to_string()));
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled("Sort: ", label_style()));
    spans.push(Span::raw(state.sort().to_string()));

    let header = Paragraph::new(vec![search_line, Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Company Directory"),
    );
    frame.render_widget(header, area);
}

/// Text with a block cursor at the editor position.
fn editing_line(label: &str, editor: &LineEditor) -> Line<'static> {
    let text = editor.text();
    let byte_cursor = editor.byte_cursor();
    let before = &text[..byte_cursor];
    let after = &text[byte_cursor..];

    let mut chars = after.chars();
    let (at_cursor, rest) = match chars.next() {
        Some(ch) => (ch.to_string(), chars.as_str().to_string()),
        None => (" ".to_string(), String::new()),
    };

    Line::from(vec![
        Span::styled(label.to_string(), label_style().add_modifier(Modifier::BOLD)),
        Span::raw(before.to_string()),
        Span::styled(at_cursor, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(rest),
    ])
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, view: &DirectoryView) {
    match state.load() {
        LoadState::Loading => {
            render_placeholder(frame, area, "Loading companies...", None);
        }
        LoadState::Failed { message } => {
            render_placeholder(
                frame,
                area,
                "Failed to load company data",
                Some(message.as_str()),
            );
        }
        LoadState::Ready if view.items.is_empty() => {
            render_placeholder(
                frame,
                area,
                "No companies found",
                Some("Try adjusting your search or filter criteria"),
            );
        }
        LoadState::Ready => render_table(frame, area, state, view),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, headline: &str, detail: Option<&str>) {
    let mut lines = vec![
        Line::raw(""),
        Line::styled(
            headline.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(detail) = detail {
        lines.push(Line::styled(detail.to_string(), dim_style()));
    }

    let placeholder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState, view: &DirectoryView) {
    let header = Row::new(["Name", "Industry", "Location", "Employees", "Founded"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = view.items.iter().map(company_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::ALL));

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn company_row(company: &Company) -> Row<'static> {
    Row::new(vec![
        Cell::from(company.name.clone()),
        Cell::from(company.industry.clone()),
        Cell::from(company.location.clone()),
        Cell::from(company.employees.to_string()),
        Cell::from(company.founded_year.to_string()),
    ])
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, view: &DirectoryView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let status = status_line(state, view, area.width as usize);
    frame.render_widget(Paragraph::new(status), chunks[0]);

    let hints = match state.mode {
        InputMode::Browse => {
            "q quit  / search  i industry  o location  m min-emp  s sort  S reverse  \u{2190}/\u{2192} page  r reset"
        }
        _ => "Enter/Esc done  Backspace delete",
    };
    frame.render_widget(Paragraph::new(Span::styled(hints, dim_style())), chunks[1]);
}

fn status_line(state: &AppState, view: &DirectoryView, width: usize) -> Line<'static> {
    if !matches!(state.load(), LoadState::Ready) {
        return Line::raw("");
    }

    let pages = if view.total_pages > 1 {
        format!("Page {} of {}  ", view.current_page, view.total_pages)
    } else {
        String::new()
    };

    let description = view
        .items
        .get(state.selected)
        .map(|c| c.description.as_str())
        .unwrap_or("");

    let mut line = format!("{pages}{description}");
    truncate_to_width(&mut line, width);
    Line::raw(line)
}

/// Trim trailing characters so the rendered width fits the column
/// budget; wide (CJK) characters count as two cells.
fn truncate_to_width(text: &mut String, max_width: usize) {
    let mut width = 0;
    let mut cut = text.len();
    for (index, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            cut = index;
            break;
        }
    }
    text.truncate(cut);
}

fn label_style() -> Style {
    Style::default().fg(Color::Cyan)
}

fn dim_style() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}
