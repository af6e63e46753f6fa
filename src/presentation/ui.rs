use crate::application::{App, AppMode};
use crate::domain::{WorkflowState, RETAILER_CATALOG};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const COUPON_DETAILS: [&str; 4] = [
    "Valid online and in stores (where applicable)",
    "Cannot be combined with other offers",
    "Some exclusions may apply",
    "Limited time offer",
];

const DISCLAIMER: &str =
    "* Exact savings may vary. Check retailer's website for full terms and conditions.";

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(chunks[1]);

    render_selector(f, app, body[0]);
    render_coupon_panel(f, app, body[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let retailer = app
        .workflow
        .retailer()
        .map(|r| r.name().to_string())
        .unwrap_or_else(|| "none".to_string());
    let header = Paragraph::new(format!("couponhunt - Coupon Hunt | Retailer: {}", retailer))
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_selector(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let pending = app.workflow.is_pending();

    let items: Vec<ListItem> = RETAILER_CATALOG
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let style = if pending {
                Style::default().fg(Color::DarkGray)
            } else if index == app.catalog_index {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(*name).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Retailers"));
    f.render_widget(list, chunks[0]);

    let entering = matches!(app.mode, AppMode::EnteringRetailer);
    let input_text = if app.input.is_empty() && !entering {
        "e: type a retailer name".to_string()
    } else {
        app.input.clone()
    };
    let input_style = if entering {
        Style::default().fg(Color::Green)
    } else if pending {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Custom retailer"))
        .style(input_style);
    f.render_widget(input, chunks[1]);
}

fn render_coupon_panel(f: &mut Frame, app: &App, area: Rect) {
    match &app.workflow {
        WorkflowState::Idle => {
            let hint =
                Paragraph::new("Pick a retailer and press Enter to generate a coupon code.")
                    .block(Block::default().borders(Borders::ALL).title("Coupon"))
                    .wrap(Wrap { trim: true });
            f.render_widget(hint, area);
        }
        WorkflowState::Pending(retailer) => {
            let spinner = Paragraph::new(format!("Generating code for {}...", retailer))
                .block(Block::default().borders(Borders::ALL).title("Coupon"))
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true });
            f.render_widget(spinner, area);
        }
        WorkflowState::Failed(_, message) => {
            let error = Paragraph::new(message.as_str())
                .block(Block::default().borders(Borders::ALL).title("Coupon"))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(error, area);
        }
        WorkflowState::Succeeded(retailer, result) => {
            let copy_label = if app.copy_acknowledged() {
                "Copied!"
            } else {
                "c: copy to clipboard"
            };

            let mut lines = vec![
                Line::from(Span::styled(
                    result.code.clone(),
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(copy_label),
                Line::from(""),
                Line::from(format!("Description: {}", result.description)),
                Line::from(""),
                Line::from("Details:"),
            ];
            for detail in COUPON_DETAILS {
                lines.push(Line::from(format!("  - {}", detail)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                DISCLAIMER,
                Style::default().fg(Color::DarkGray),
            )));

            let panel = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("Coupon for {}", retailer)),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(panel, area);
        }
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else if app.workflow.is_pending() {
                "Generating code... input is disabled until the request finishes".to_string()
            } else {
                "↑↓/jk: pick retailer | Enter: generate | e: custom retailer | c: copy code | F1/?: help | q: quit"
                    .to_string()
            }
        }
        AppMode::EnteringRetailer => {
            format!("Retailer: {} (Enter to generate, Esc to cancel)", app.input)
        }
        AppMode::Help => {
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
        }
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::EnteringRetailer => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "Coupon Hunt Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"COUPON HUNT REFERENCE

=== HOW IT WORKS ===
1. Select Retailer    Choose from the supported retailers list,
                      or type any retailer name by hand
2. Generate Code      The service predicts a potential valid code
3. Validate & Save    Codes are verified as they are generated;
                      copy the result straight to your clipboard

=== RETAILER SELECTION ===
↑↓ or j/k       Move the highlight through the catalog
Enter           Generate a coupon for the highlighted retailer
e or i          Type a custom retailer name
                (Enter submits, Esc cancels; blank names are ignored)

While a request is running, every generate action is disabled.
The running request is never abandoned; it always finishes with
a code or an error before the next one can start.

=== RESULTS ===
c               Copy the generated code to the clipboard
                (the label reads "Copied!" for a moment)

Each coupon comes with a description and standard terms:
valid online and in stores where applicable, cannot be combined
with other offers, some exclusions may apply, limited time.
Exact savings may vary - check the retailer's website.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
        .to_string()
}
