//! Rendering for every portal section.
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  CareVault  [1] Home  [2] Hospital Portal  [3] Patient Portal  ...  │
//!   ├─── section body ────────────────────────────────────────────────────┤
//!   │  (varies per section)                                               │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings + last error)                                 │
//!   └─────────────────────────────────────────────────────────────────────┘

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use carevault_assistant::{
    bodies::DISCLAIMER,
    format::{classify_body, strip_bold, LineKind},
};
use carevault_contracts::{
    chat::Sender,
    navigation::{FeedbackTab, FeedbackType, HospitalTab, Language, Section},
    portal::{FeedbackStatus, ReportStatus},
    response::Category,
};
use carevault_portals::{mock_data, search_reports};

use crate::{App, Editing};

// ── Shared styles ─────────────────────────────────────────────────────────────

fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn label() -> Style {
    Style::default().fg(Color::Gray)
}

fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border())
}

/// A row of tab labels with the active one highlighted.
fn tab_line<T: PartialEq + Copy>(tabs: &[T], active: T, name: impl Fn(T) -> &'static str) -> Line<'static> {
    let mut spans = Vec::new();
    for tab in tabs {
        let style = if *tab == active { selected() } else { Style::default().fg(Color::White) };
        spans.push(Span::styled(format!(" {} ", name(*tab)), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

// ── Frame ─────────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // section body
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    match app.store.state().section {
        Section::Home => render_home(f, chunks[1]),
        Section::Hospital => render_hospital(f, chunks[1], app),
        Section::Patient => render_patient(f, chunks[1], app),
        Section::Feedback => render_feedback(f, chunks[1], app),
        Section::Chatbot => render_chatbot(f, chunks[1], app),
    }

    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled("CareVault    ", title_style)];

    for (i, (section, name)) in mock_data::nav_items().into_iter().enumerate() {
        let style = if app.store.state().section == section {
            selected()
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}] {}  ", i + 1, name), style));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).border_style(border()));
    f.render_widget(header, area);
}

// ── Home ──────────────────────────────────────────────────────────────────────

fn render_home(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", mock_data::HERO_TITLE),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", mock_data::HERO_TAGLINE), label())),
        Line::from(""),
    ];

    for card in mock_data::feature_cards() {
        lines.push(Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(Color::Green)),
            Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(format!("    {}", card.description), label())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter] ", Style::default().fg(Color::Cyan)),
        Span::raw("Get Started    "),
        Span::styled("[l] ", Style::default().fg(Color::Cyan)),
        Span::raw("Learn More"),
    ]));

    let p = Paragraph::new(lines).block(block("Home")).wrap(Wrap { trim: false });
    f.render_widget(p, area);
}

// ── Hospital portal ───────────────────────────────────────────────────────────

fn report_status_color(status: ReportStatus) -> Color {
    match status {
        ReportStatus::Completed => Color::Green,
        ReportStatus::InReview => Color::Yellow,
        ReportStatus::Pending => Color::Gray,
    }
}

fn render_hospital(f: &mut Frame, area: Rect, app: &App) {
    let hospital = &app.store.state().hospital;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let tabs = Paragraph::new(tab_line(&HospitalTab::ALL, hospital.tab, HospitalTab::label))
        .block(block("Hospital Portal"));
    f.render_widget(tabs, chunks[0]);

    let reports = mock_data::hospital_reports();
    let mut lines: Vec<Line> = Vec::new();

    match hospital.tab {
        HospitalTab::Dashboard => {
            let stats: Vec<Span> = mock_data::hospital_stats()
                .into_iter()
                .flat_map(|s| {
                    [
                        Span::styled(format!("  {}: ", s.label), label()),
                        Span::styled(s.value, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                    ]
                })
                .collect();
            lines.push(Line::from(stats));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("  Recent Reports", Style::default().add_modifier(Modifier::BOLD))));
            for r in reports.iter().take(3) {
                lines.push(report_line(&r.patient_name, &r.id, &r.report_type, &r.date, r.status));
            }
        }
        HospitalTab::Reports => {
            let cursor = if app.editing == Editing::ReportQuery { "▏" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("  Search: ", label()),
                Span::raw(format!("{}{}", hospital.report_query, cursor)),
                Span::styled("    Filter: ", label()),
                Span::styled(hospital.report_filter.label(), Style::default().fg(Color::Cyan)),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "  {:<14}{:<12}{:<15}{:<12}{:<12}{}",
                    "Report ID", "Patient ID", "Patient", "Type", "Date", "Status"
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            let hits = search_reports(&reports, &hospital.report_query, hospital.report_filter);
            if hits.is_empty() {
                lines.push(Line::from(Span::styled("  No reports match.", dim())));
            }
            for r in hits {
                lines.push(Line::from(vec![
                    Span::raw(format!(
                        "  {:<14}{:<12}{:<15}{:<12}{:<12}",
                        r.id, r.patient_id, r.patient_name, r.report_type, r.date
                    )),
                    Span::styled(r.status.label(), Style::default().fg(report_status_color(r.status))),
                ]));
            }
        }
        HospitalTab::Upload => {
            lines.push(Line::from(Span::styled("  Upload New Report", Style::default().add_modifier(Modifier::BOLD))));
            lines.push(Line::from(Span::styled("  Securely upload patient reports and documents", label())));
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "  Report types: {}",
                mock_data::UPLOAD_REPORT_TYPES.join(", ")
            )));
            lines.push(Line::from(Span::styled(format!("  {}", mock_data::UPLOAD_FORMATS), dim())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  File upload is not available in this demo.",
                Style::default().fg(Color::Yellow),
            )));
        }
        HospitalTab::Patients => {
            let mut seen: Vec<&str> = Vec::new();
            for r in &reports {
                if seen.contains(&r.patient_id.as_str()) {
                    continue;
                }
                seen.push(&r.patient_id);
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<12}", r.patient_id), Style::default().fg(Color::Cyan)),
                    Span::raw(r.patient_name.clone()),
                ]));
            }
        }
    }

    let p = Paragraph::new(lines).block(block(hospital.tab.label())).wrap(Wrap { trim: false });
    f.render_widget(p, chunks[1]);
}

fn report_line(name: &str, id: &str, kind: &str, date: &str, status: ReportStatus) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ▸ ", dim()),
        Span::styled(format!("{:<14}", name), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} • {} • {}  ", id, kind, date), label()),
        Span::styled(status.label(), Style::default().fg(report_status_color(status))),
    ])
}

// ── Patient portal ────────────────────────────────────────────────────────────

fn render_patient(f: &mut Frame, area: Rect, app: &App) {
    let patient = &app.store.state().patient;
    let mut lines: Vec<Line> = vec![Line::from("")];

    if !patient.signed_in {
        lines.push(Line::from(Span::styled("  Securely access your medical reports and documents", label())));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Sign in with: ", label()),
            Span::styled(patient.login_method.label(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!("   (e.g. {})", patient.login_method.placeholder()), dim()),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  [m] ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch method    "),
            Span::styled("[Enter] ", Style::default().fg(Color::Cyan)),
            Span::raw("Sign In Securely"),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {}", mock_data::SECURITY_NOTICE), dim())));

        let p = Paragraph::new(lines).block(block("Patient Portal")).wrap(Wrap { trim: false });
        f.render_widget(p, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let profile = mock_data::patient_profile();
    let info = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  Name:   ", label()), Span::raw(profile.name)]),
        Line::from(vec![Span::styled("  ID:     ", label()), Span::raw(profile.id)]),
        Line::from(vec![Span::styled("  Phone:  ", label()), Span::raw(profile.phone)]),
        Line::from(vec![Span::styled("  Email:  ", label()), Span::raw(profile.email)]),
        Line::from(vec![Span::styled("  DOB:    ", label()), Span::raw(profile.date_of_birth)]),
        Line::from(""),
        Line::from(Span::styled("  Quick Actions", Style::default().add_modifier(Modifier::BOLD))),
    ]
    .into_iter()
    .chain(
        mock_data::PATIENT_QUICK_ACTIONS
            .iter()
            .map(|a| Line::from(Span::styled(format!("  • {}", a), label()))),
    )
    .collect::<Vec<_>>();
    f.render_widget(
        Paragraph::new(info).block(block("Personal Information")).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let items: Vec<ListItem> = mock_data::patient_reports()
        .into_iter()
        .map(|r| {
            let icon_color = if r.urgent { Color::Yellow } else { Color::Cyan };
            let mut spans = vec![
                Span::styled("  ■ ", Style::default().fg(icon_color)),
                Span::styled(r.report_type, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {} • {}  ", r.hospital, r.date), label()),
                Span::styled(
                    r.status.clone(),
                    Style::default().fg(if r.status == "Available" { Color::Green } else { Color::Gray }),
                ),
            ];
            if r.urgent {
                spans.push(Span::styled("  URGENT", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();
    f.render_widget(List::new(items).block(block("Your Medical Reports")), chunks[1]);
}

// ── Feedback portal ───────────────────────────────────────────────────────────

fn stars(rating: u8) -> Span<'static> {
    let text: String = (1..=5u8).map(|i| if i <= rating { '★' } else { '☆' }).collect();
    Span::styled(text, Style::default().fg(Color::Yellow))
}

fn render_feedback(f: &mut Frame, area: Rect, app: &App) {
    let feedback = &app.store.state().feedback;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let tabs = Paragraph::new(tab_line(&FeedbackTab::ALL, feedback.tab, FeedbackTab::label))
        .block(block("Feedback"));
    f.render_widget(tabs, chunks[0]);

    let mut lines: Vec<Line> = vec![Line::from("")];

    match feedback.tab {
        FeedbackTab::Submit => {
            lines.push(Line::from(vec![
                Span::styled("  Feedback Type:  ", label()),
                Span::styled(feedback.feedback_type.label(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("   ({} options)", FeedbackType::ALL.len()),
                    dim(),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  Department:     ", label()),
                Span::styled(mock_data::FEEDBACK_DEPARTMENTS.join(" / "), dim()),
            ]));
            let rating_text = if feedback.rating > 0 {
                format!("  {} out of 5 stars", feedback.rating)
            } else {
                "  Click to rate".to_string()
            };
            lines.push(Line::from(vec![
                Span::styled("  Overall Rating: ", label()),
                stars(feedback.rating),
                Span::styled(rating_text, dim()),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", mock_data::FEEDBACK_PRIVACY_NOTICE),
                dim(),
            )));
        }
        FeedbackTab::Track => {
            for record in mock_data::feedback_history() {
                let kind_color = match record.kind.as_str() {
                    "Complaint" => Color::Red,
                    "Appreciation" => Color::Green,
                    _ => Color::Cyan,
                };
                let status_color = match record.status {
                    FeedbackStatus::Resolved => Color::Green,
                    FeedbackStatus::UnderReview => Color::Yellow,
                    FeedbackStatus::Acknowledged => Color::Gray,
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  Feedback #{}  ", record.display_number()), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(record.status.label(), Style::default().fg(status_color)),
                    Span::raw("  "),
                    stars(record.rating),
                    Span::raw("  "),
                    Span::styled(record.kind.clone(), Style::default().fg(kind_color)),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {} • {}", record.hospital, record.doctor),
                    label(),
                )));
                lines.push(Line::from(format!("    {}", record.summary)));
                lines.push(Line::from(Span::styled(
                    format!("    Status updated on {}", record.date),
                    dim(),
                )));
                lines.push(Line::from(""));
            }
        }
        FeedbackTab::Impact => {
            for stat in mock_data::feedback_impact() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:>6}  ", stat.value), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                    Span::styled(stat.label, label()),
                ]));
            }
        }
    }

    let p = Paragraph::new(lines).block(block(feedback.tab.label())).wrap(Wrap { trim: false });
    f.render_widget(p, chunks[1]);
}

// ── Medical assistant ─────────────────────────────────────────────────────────

fn category_color(category: Option<Category>) -> Color {
    match category {
        Some(Category::Medicine) => Color::Magenta,
        Some(Category::Hospital) => Color::Red,
        Some(Category::General) | None => Color::Cyan,
    }
}

/// Styled lines for one assistant body.
fn body_lines(text: &str) -> Vec<Line<'static>> {
    classify_body(text)
        .into_iter()
        .map(|kind| match kind {
            LineKind::Heading(h) => Line::from(Span::styled(
                format!("  {}", h),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            LineKind::Bullet(b) => Line::from(format!("      {}", b)),
            LineKind::Callout(c) => Line::from(Span::styled(
                format!("  {}", strip_bold(c)),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            LineKind::Success(s) => Line::from(Span::styled(format!("  {}", s), Style::default().fg(Color::Green))),
            LineKind::Text(t) => Line::from(format!("  {}", strip_bold(t))),
            LineKind::Blank => Line::from(""),
        })
        .collect()
}

/// Rows `lines` occupy once wrapped to `width` columns.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_chatbot(f: &mut Frame, area: Rect, app: &App) {
    let chat = &app.store.state().chat;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(30)])
        .split(area);

    // Sidebar: language, quick questions.
    let mut side: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(" Language: ", label()),
            Span::styled(chat.language.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format!(" ({} available, [g] to change)", Language::ALL.len()),
            dim(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Quick Questions", Style::default().add_modifier(Modifier::BOLD))),
    ];
    for (i, q) in app.store.responder().quick_questions().iter().enumerate() {
        side.push(Line::from(vec![
            Span::styled(format!(" F{} ", i + 1), Style::default().fg(category_color(Some(q.category)))),
            Span::raw(q.text.clone()),
        ]));
    }
    side.push(Line::from(""));
    let mic = if chat.listening { " Microphone: on" } else { " Microphone: off" };
    side.push(Line::from(Span::styled(mic, dim())));
    f.render_widget(
        Paragraph::new(side).block(block("Medical Assistant")).wrap(Wrap { trim: false }),
        columns[0],
    );

    // Conversation + input.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(columns[1]);

    let mut lines: Vec<Line> = Vec::new();
    for message in chat.session.conversation().messages() {
        let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S").to_string();
        match message.sender {
            Sender::User => {
                lines.push(Line::from(vec![
                    Span::styled("You ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::styled(time, dim()),
                ]));
                lines.push(Line::from(format!("  {}", message.text)));
            }
            Sender::Assistant => {
                let tag = message.category.map(|c| c.label()).unwrap_or("general");
                lines.push(Line::from(vec![
                    Span::styled(
                        "AI Medical Assistant ",
                        Style::default().fg(category_color(message.category)).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("[{}] ", tag), dim()),
                    Span::styled(time, dim()),
                ]));
                lines.extend(body_lines(&message.text));
            }
        }
        lines.push(Line::from(""));
    }
    if chat.session.is_typing() {
        lines.push(Line::from(Span::styled("  ● ● ●  typing", dim())));
    }

    let inner_height = rows[0].height.saturating_sub(2);
    let inner_width = rows[0].width.saturating_sub(2);
    let scroll = wrapped_height(&lines, inner_width).saturating_sub(inner_height);
    let online = Span::styled(" ● Online ", Style::default().fg(Color::Green));
    let conversation = Paragraph::new(lines)
        .block(block("Conversation").title(online))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(conversation, rows[0]);

    let (prompt_style, cursor) = if app.editing == Editing::ChatDraft {
        (Style::default().fg(Color::Cyan), "▏")
    } else {
        (dim(), "")
    };
    let placeholder = chat.draft.is_empty() && app.editing != Editing::ChatDraft;
    let input_text = if placeholder {
        Span::styled("Ask about medicines, hospitals, or health information...", dim())
    } else {
        Span::raw(format!("{}{}", chat.draft, cursor))
    };
    let input = Paragraph::new(vec![
        Line::from(vec![Span::styled("> ", prompt_style), input_text]),
        Line::from(Span::styled(DISCLAIMER, dim())),
    ])
    .block(block("Message"));
    f.render_widget(input, rows[1]);
}

// ── Footer ────────────────────────────────────────────────────────────────────

fn key(k: &str) -> Span<'static> {
    Span::styled(format!("[{}] ", k), Style::default().fg(Color::Cyan))
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    match app.editing {
        Editing::ChatDraft => {
            spans.extend([key("Enter"), Span::raw("Send  "), key("Esc"), Span::raw("Stop typing  ")]);
        }
        Editing::ReportQuery => {
            spans.extend([key("Enter/Esc"), Span::raw("Done  ")]);
        }
        Editing::None => {
            spans.extend([key("1-5"), Span::raw("Section  ")]);
            match state.section {
                Section::Home => {}
                Section::Hospital => {
                    spans.extend([key("Tab"), Span::raw("Next tab  ")]);
                    if state.hospital.tab == HospitalTab::Reports {
                        spans.extend([key("/"), Span::raw("Search  "), key("f"), Span::raw("Filter  ")]);
                    }
                }
                Section::Patient => {
                    if state.patient.signed_in {
                        spans.extend([key("o"), Span::raw("Sign out  ")]);
                    }
                }
                Section::Feedback => {
                    spans.extend([key("Tab"), Span::raw("Next tab  ")]);
                    if state.feedback.tab == FeedbackTab::Submit {
                        spans.extend([key("←/→"), Span::raw("Rating  "), key("t"), Span::raw("Type  ")]);
                    }
                }
                Section::Chatbot => {
                    spans.extend([
                        key("i"),
                        Span::raw("Type  "),
                        key("F1-F5"),
                        Span::raw("Quick question  "),
                        key("v"),
                        Span::raw("Mic  "),
                    ]);
                }
            }
            spans.extend([key("q"), Span::raw("Quit")]);
        }
    }

    if let Some(err) = &app.last_error {
        spans.push(Span::styled(format!("   {}", err), Style::default().fg(Color::Red)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).border_style(border()));
    f.render_widget(footer, area);
}
