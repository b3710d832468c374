//! MedMap Naga — interactive Ratatui chat dashboard
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  MedMap Assist · location · snapshot size                           │
//!   ├─── left panel ──────────────────┬─── right panel ───────────────────┤
//!   │  Conversation                   │  Results (ranked cards)           │
//!   │                                 ├───────────────────────────────────┤
//!   │                                 │  Emergency Alerts (live feed)     │
//!   ├─────────────────────────────────┴───────────────────────────────────┤
//!   │  input line                                                         │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘

use std::{
    io,
    sync::mpsc::Receiver,
    time::Duration,
};

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use medmap_alerts::{seal_request, AlertEvent, InMemoryAlertLog};
use medmap_assist::{ChatSession, FAQ_ENTRIES};
use medmap_contracts::{
    chat::MessageRole,
    emergency::{EmergencyAlert, EmergencyRequest},
    facility::Facility,
    geo::{GeoPoint, NAGA_CITY_CENTROID},
    resource::{AvailabilityRecord, ResourceCategory},
};
use medmap_core::{
    nearby_facilities,
    traits::{AlertLog, SnapshotProvider},
};
use medmap_data::{catalog, SyntheticAvailability};

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    session: ChatSession,
    input: String,

    facilities: Vec<Facility>,
    snapshot: Vec<AvailabilityRecord>,
    generator: SyntheticAvailability,
    user_location: Option<GeoPoint>,

    alert_log: InMemoryAlertLog,
    alert_rx: Receiver<AlertEvent>,
    recent_alerts: Vec<EmergencyAlert>,

    // Tab cycles the quick questions into the input field.
    faq_cursor: usize,

    // One-line status message (errors, confirmations).
    status: Option<String>,
}

impl App {
    fn new() -> Self {
        let mut generator = SyntheticAvailability::from_entropy();
        let snapshot = generator.snapshot(Utc::now());
        let alert_log = InMemoryAlertLog::new();
        let alert_rx = alert_log.subscribe();

        Self {
            session: ChatSession::new(),
            input: String::new(),
            facilities: catalog::facilities(),
            snapshot,
            generator,
            user_location: Some(NAGA_CITY_CENTROID),
            alert_log,
            alert_rx,
            recent_alerts: Vec::new(),
            faq_cursor: 0,
            status: None,
        }
    }

    /// Submit whatever is in the input field.
    fn submit_input(&mut self) {
        let text = self.input.clone();
        match self.session.submit(
            &text,
            &self.snapshot,
            &self.facilities,
            self.user_location,
            Utc::now(),
        ) {
            Ok(()) => {
                self.input.clear();
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Release a staged reply when its latency has elapsed, and drain any
    /// alert notifications into the feed.
    fn tick(&mut self) {
        self.session.poll(Utc::now());

        let mut changed = false;
        while self.alert_rx.try_recv().is_ok() {
            changed = true;
        }
        if changed || self.recent_alerts.is_empty() {
            if let Ok(latest) = self.alert_log.recent(5) {
                self.recent_alerts = latest;
            }
        }
    }

    /// Regenerate the availability snapshot.
    fn refresh_snapshot(&mut self) {
        self.snapshot = self.generator.snapshot(Utc::now());
        self.status = Some(format!("snapshot refreshed ({} records)", self.snapshot.len()));
    }

    /// Fire a demonstration SOS broadcast for O+ blood.
    fn send_demo_sos(&mut self) {
        let Some(location) = self.user_location else {
            self.status = Some("no location available for SOS".to_string());
            return;
        };

        let request = EmergencyRequest {
            category: ResourceCategory::Blood,
            resource: "O+".to_string(),
            description: "demo SOS from the dashboard".to_string(),
            contact_number: "+63 917 000 1111".to_string(),
        };
        let nearby = nearby_facilities(
            &self.facilities,
            &self.snapshot,
            location,
            Some((request.category, request.resource.as_str())),
        );

        match seal_request(&request, Some(location), nearby, Utc::now())
            .and_then(|alert| self.alert_log.append(&alert).map(|_| alert))
        {
            Ok(alert) => {
                self.status = Some(format!(
                    "SOS sent, reference {}",
                    &alert.reference[..12.min(alert.reference.len())]
                ));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Cycle the next quick question into the input field.
    fn cycle_faq(&mut self) {
        self.input = FAQ_ENTRIES[self.faq_cursor].question.to_string();
        self.faq_cursor = (self.faq_cursor + 1) % FAQ_ENTRIES.len();
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // conversation + side panels
            Constraint::Length(3), // input
            Constraint::Length(3), // footer
        ])
        .split(full);

    render_header(f, outer[0], app);

    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(outer[1]);

    render_conversation(f, mid[0], app);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(mid[1]);

    render_results(f, side[0], app);
    render_alerts(f, side[1], app);

    render_input(f, outer[2], app);
    render_footer(f, outer[3], app);
}

fn render_header(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let location = match app.user_location {
        Some(point) => format!("{:.4}, {:.4}", point.lat, point.lon),
        None => "location unknown".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            " MedMap Assist ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Naga City medical resource finder  ·  "),
        Span::styled(location, Style::default().fg(Color::Cyan)),
        Span::raw(format!("  ·  {} records", app.snapshot.len())),
    ]);

    let header = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" MedMap Naga "));
    f.render_widget(header, area);
}

fn render_conversation(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    // Render the newest exchange fully; clip older history from the top.
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut rendered: Vec<Line> = Vec::new();
    for message in app.session.messages() {
        let (label, style) = match message.role {
            MessageRole::User => ("you", Style::default().fg(Color::Yellow)),
            MessageRole::Bot => ("assist", Style::default().fg(Color::Green)),
        };
        rendered.push(Line::from(Span::styled(
            format!("[{label}]"),
            style.add_modifier(Modifier::BOLD),
        )));
        for text_line in message.content.lines() {
            rendered.push(Line::from(format!("  {text_line}")));
        }
        rendered.push(Line::raw(""));
    }
    if app.session.is_processing() {
        rendered.push(Line::from(Span::styled(
            "[assist] ...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let skip = rendered.len().saturating_sub(inner_height);
    lines.extend(rendered.into_iter().skip(skip));

    let block = Block::default().borders(Borders::ALL).title(" Conversation ");
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_results(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let items: Vec<ListItem> = match app.session.last_outcome() {
        Some(outcome) if !outcome.matches.is_empty() => outcome
            .matches
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let distance = match item.distance_km {
                    Some(km) => format!("{km:.1} km"),
                    None => "—".to_string(),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{}. ", index + 1),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "{} · {} · {distance} · stock {}",
                        item.facility.name, item.record.resource_name, item.record.stock
                    )),
                ]))
            })
            .collect(),
        Some(_) => vec![ListItem::new("no matching available resources")],
        None => vec![ListItem::new("results will appear here after a query")],
    };

    let block = Block::default().borders(Borders::ALL).title(" Results ");
    f.render_widget(List::new(items).block(block), area);
}

fn render_alerts(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let items: Vec<ListItem> = if app.recent_alerts.is_empty() {
        vec![ListItem::new("no emergency alerts yet (ctrl-s sends a demo)")]
    } else {
        app.recent_alerts
            .iter()
            .map(|alert| {
                let reference = &alert.reference[..8.min(alert.reference.len())];
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{reference} "),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "{} · {} notified · {}",
                        alert.resource,
                        alert.nearby.len(),
                        alert.reported_at.format("%H:%M:%S"),
                    )),
                ]))
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Emergency Alerts ");
    f.render_widget(List::new(items).block(block), area);
}

fn render_input(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let title = if app.session.is_processing() {
        " Ask (processing...) "
    } else {
        " Ask about medical resources "
    };

    let content = match &app.status {
        Some(status) => Line::from(vec![
            Span::raw(format!("{}_  ", app.input)),
            Span::styled(
                format!("[{status}]"),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        None => Line::from(format!("{}_", app.input)),
    };

    let input = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, _app: &App) {
    let spans = vec![
        Span::styled(" enter ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" send  "),
        Span::styled(" tab ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" quick question  "),
        Span::styled(" ctrl-s ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" demo SOS  "),
        Span::styled(" ctrl-r ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" refresh data  "),
        Span::styled(" esc ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" quit "),
    ];

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

// ── Terminal plumbing ─────────────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    loop {
        app.tick();
        terminal.draw(|f| ui(f, &app))?;

        // Short poll while a reply is staged so it appears on time.
        let timeout = if app.session.is_processing() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(200)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,

                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.send_demo_sos();
                    }
                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.refresh_snapshot();
                    }

                    KeyCode::Enter => app.submit_input(),
                    KeyCode::Tab => app.cycle_faq(),
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Char(c) => app.input.push(c),

                    _ => {}
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
