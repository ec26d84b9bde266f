use crate::activities::{select_catalog, ActivityError, ActivityScript};
use crate::emotion::Emotion;
use crate::guided::GuidedActivity;
use crate::input::TextInput;
use crate::journal_state::JournalState;
use crate::mood_history::MoodPoint;
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, List, ListItem, ListState,
        Paragraph, Tabs, Wrap,
    },
    Frame, Terminal,
};
use std::{
    io::{stdout, Stdout},
    time::{Duration, Instant},
};
use unicode_width::UnicodeWidthStr;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);
const CURSOR_BLINK: Duration = Duration::from_millis(500);

pub enum Action {
    Submit(String),
    ChooseActivity(&'static str),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Journal,
    MoodChart,
    Activities,
    Learn,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Journal, Tab::MoodChart, Tab::Activities, Tab::Learn];

    fn title(self) -> &'static str {
        match self {
            Tab::Journal => "Journal",
            Tab::MoodChart => "Mood Chart",
            Tab::Activities => "Activities",
            Tab::Learn => "Learn",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

enum ActivityView {
    Choosing,
    Playing(GuidedActivity),
    NotFound(String),
}

struct Toast {
    title: String,
    message: String,
    warning: bool,
    shown_at: Instant,
}

struct ViewState {
    tab: Tab,
    input: TextInput,
    cursor_visible: bool,
    last_cursor_update: Instant,
    selected_activity: usize,
    activity: ActivityView,
    toast: Option<Toast>,
}

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    view: ViewState,
}

fn mood_color(emotion: Emotion) -> Color {
    let (r, g, b) = emotion.rgb();
    Color::Rgb(r, g, b)
}

fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn hint_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn key_hint<'a>(pairs: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = vec![Span::raw("Press ")];
    for (i, (key, what)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(", "));
        }
        spans.push(Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(format!(" to {what}")));
    }
    Line::from(spans)
}

impl UI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI {
            terminal,
            view: ViewState {
                tab: Tab::Journal,
                input: TextInput::new(),
                cursor_visible: true,
                last_cursor_update: Instant::now(),
                selected_activity: 0,
                activity: ActivityView::Choosing,
                toast: None,
            },
        })
    }

    pub fn display(&mut self, journal: &JournalState, analyzing: bool) -> Result<()> {
        let now = Instant::now();
        if now.duration_since(self.view.last_cursor_update) >= CURSOR_BLINK {
            self.view.cursor_visible = !self.view.cursor_visible;
            self.view.last_cursor_update = now;
        }
        if self
            .view
            .toast
            .as_ref()
            .is_some_and(|t| now.duration_since(t.shown_at) >= TOAST_LIFETIME)
        {
            self.view.toast = None;
        }

        let view = &self.view;
        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(5),
                        Constraint::Length(3),
                        Constraint::Min(10),
                        Constraint::Length(1),
                    ]
                    .as_ref(),
                )
                .split(f.area());

            render_header(f, chunks[0], journal.current_mood());

            let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
                .block(Block::default().borders(Borders::ALL))
                .select(view.tab.index())
                .highlight_style(title_style());
            f.render_widget(tabs, chunks[1]);

            match view.tab {
                Tab::Journal => render_journal(f, chunks[2], view, journal, analyzing),
                Tab::MoodChart => render_mood_chart(f, chunks[2], &journal.mood_history()),
                Tab::Activities => render_activities(f, chunks[2], view, journal.current_mood()),
                Tab::Learn => render_learn(f, chunks[2]),
            }

            render_footer(f, chunks[3], view, analyzing);
        })?;

        Ok(())
    }

    pub fn handle_input(&mut self, mood: Emotion, analyzing: bool) -> Result<Option<Action>> {
        if !event::poll(Duration::from_millis(50))? {
            return Ok(None);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        match key.code {
            KeyCode::Tab => {
                self.view.tab = self.view.tab.next();
                return Ok(None);
            }
            KeyCode::BackTab => {
                self.view.tab = self.view.tab.previous();
                return Ok(None);
            }
            _ => {}
        }

        match self.view.tab {
            Tab::Journal => Ok(self.handle_journal_key(key, analyzing)),
            Tab::Activities => Ok(self.handle_activity_key(key, mood)),
            Tab::MoodChart | Tab::Learn => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Ok(Some(Action::Quit)),
                _ => Ok(None),
            },
        }
    }

    fn handle_journal_key(&mut self, key: KeyEvent, analyzing: bool) -> Option<Action> {
        let input = &mut self.view.input;
        if key.code == KeyCode::Esc {
            return Some(Action::Quit);
        }
        if analyzing {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                if input.is_blank() {
                    self.show_problem("Oops! 📝", "Please write something in your journal first!");
                    return None;
                }
                return Some(Action::Submit(input.as_str().to_string()));
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Enter => input.insert('\n'),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
        self.view.cursor_visible = true;
        self.view.last_cursor_update = Instant::now();
        None
    }

    fn handle_activity_key(&mut self, key: KeyEvent, mood: Emotion) -> Option<Action> {
        match &mut self.view.activity {
            ActivityView::Choosing => {
                let activities = &select_catalog(mood).activities;
                match key.code {
                    KeyCode::Up => {
                        self.view.selected_activity = self.view.selected_activity.saturating_sub(1)
                    }
                    KeyCode::Down => {
                        if self.view.selected_activity < activities.len() - 1 {
                            self.view.selected_activity += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let index = self.view.selected_activity.min(activities.len() - 1);
                        return Some(Action::ChooseActivity(activities[index].id));
                    }
                    KeyCode::Esc | KeyCode::Char('q') => return Some(Action::Quit),
                    _ => {}
                }
            }
            ActivityView::Playing(playback) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => {
                    if playback.is_completed() {
                        self.back_to_selection();
                    } else {
                        playback.advance();
                    }
                }
                KeyCode::Esc => self.back_to_selection(),
                _ => {}
            },
            ActivityView::NotFound(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.back_to_selection();
                }
            }
        }
        None
    }

    fn back_to_selection(&mut self) {
        let previous = std::mem::replace(&mut self.view.activity, ActivityView::Choosing);
        if let ActivityView::Playing(playback) = previous {
            playback.reset();
        }
    }

    /// Shows the chosen activity's script, or the not-found screen.
    pub fn open_activity(&mut self, script: Result<&'static ActivityScript, ActivityError>) {
        self.view.activity = match script {
            Ok(script) => ActivityView::Playing(GuidedActivity::start(script)),
            Err(ActivityError::NotFound(id)) => ActivityView::NotFound(id),
        };
        self.show_toast(
            "Great choice! 🎉",
            "That sounds like a wonderful activity to try!",
            false,
        );
    }

    pub fn on_entry_saved(&mut self) {
        self.view.input.clear();
        self.view.selected_activity = 0;
        self.back_to_selection();
        self.view.tab = Tab::Activities;
        self.show_toast("Great job! ✨", "Your journal entry has been saved!", false);
    }

    pub fn show_problem(&mut self, title: &str, message: &str) {
        self.show_toast(title, message, true);
    }

    fn show_toast(&mut self, title: &str, message: &str, warning: bool) {
        self.view.toast = Some(Toast {
            title: title.to_string(),
            message: message.to_string(),
            warning,
            shown_at: Instant::now(),
        });
    }
}

fn render_header(f: &mut Frame, area: Rect, mood: Emotion) {
    let message = mood.mascot_message();
    let width = message.width();
    let color = mood_color(mood);

    let lines = vec![
        Line::from(Span::styled("Welcome to JIELEWE", title_style())),
        Line::from(Span::styled(
            mood.mascot_face(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("╭{}╮", "─".repeat(width + 2))),
        Line::from(format!("│ {message} │")),
        Line::from(format!("╰{}╯", "─".repeat(width + 2))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_journal(
    f: &mut Frame,
    area: Rect,
    view: &ViewState,
    journal: &JournalState,
    analyzing: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Min(6),
                Constraint::Length(7),
            ]
            .as_ref(),
        )
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("Daily Journal", title_style())),
        Line::from("How are you feeling today? Write about your day!"),
    ])
    .alignment(Alignment::Center);
    f.render_widget(intro, chunks[0]);

    let (text, style, title) = if analyzing {
        (
            view.input.as_str().to_string(),
            Style::default().fg(Color::DarkGray),
            "Analyzing your feelings...",
        )
    } else if view.input.as_str().is_empty() {
        (
            "Tell me about your day... What made you happy? What was challenging? I'm here to listen! 😊"
                .to_string(),
            Style::default().fg(Color::DarkGray),
            "Your journal",
        )
    } else if view.cursor_visible {
        (view.input.with_cursor_marker(), Style::default(), "Your journal")
    } else {
        (view.input.as_str().to_string(), Style::default(), "Your journal")
    };
    let input = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, chunks[1]);

    let recent: Vec<ListItem> = journal
        .all()
        .iter()
        .rev()
        .take(5)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} {:<8}", entry.emotion.emoji(), entry.emotion.label()),
                    Style::default().fg(mood_color(entry.emotion)),
                ),
                Span::raw(format!(
                    "[{}] {}",
                    entry.date.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                    entry.preview()
                )),
            ]))
        })
        .collect();
    let recent_list =
        List::new(recent).block(Block::default().borders(Borders::ALL).title("Recent entries"));
    f.render_widget(recent_list, chunks[2]);
}

fn x_labels(points: &[MoodPoint]) -> Vec<Span<'static>> {
    let days: Vec<&'static str> = points.iter().map(|p| p.day_of_week).collect();
    let picked = match days.len() {
        0 => vec!["", ""],
        1 => vec![days[0], ""],
        2..=7 => days,
        n => vec![days[0], days[n / 2], days[n - 1]],
    };
    picked.into_iter().map(Span::raw).collect()
}

fn render_mood_chart(f: &mut Frame, area: Rect, points: &[MoodPoint]) {
    if points.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Start Your Mood Journey", title_style())),
            Line::from("Write your first journal entry to see your mood trends here! ✨"),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(area);

    let line: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.chart_value()))
        .collect();
    let dots: Vec<(Emotion, Vec<(f64, f64)>)> = Emotion::ALL
        .iter()
        .map(|emotion| {
            let data = line
                .iter()
                .zip(points)
                .filter(|(_, p)| p.emotion == *emotion)
                .map(|(xy, _)| *xy)
                .collect();
            (*emotion, data)
        })
        .collect();

    let mut datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&line)];
    for (emotion, data) in &dots {
        datasets.push(
            Dataset::default()
                .name(emotion.label())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(mood_color(*emotion)))
                .data(data),
        );
    }

    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Mood Journey"),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels(points)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([1.0, 4.0])
                .labels(vec![
                    Span::raw("angry"),
                    Span::raw("sad"),
                    Span::raw("neutral"),
                    Span::raw("happy"),
                ]),
        );
    f.render_widget(chart, chunks[0]);

    let mut legend = Vec::new();
    for emotion in Emotion::ALL {
        legend.push(Span::styled("● ", Style::default().fg(mood_color(emotion))));
        legend.push(Span::raw(format!("{} {}   ", emotion.emoji(), emotion.label())));
    }
    f.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        chunks[1],
    );

    if let Some(last) = points.last() {
        let detail = Paragraph::new(format!(
            "Latest ({}): {} Feeling: {} | Confidence: {}%",
            last.day_of_week,
            last.emotion.emoji(),
            last.emotion.label(),
            last.confidence_percent()
        ))
        .alignment(Alignment::Center);
        f.render_widget(detail, chunks[2]);
    }
}

fn render_activities(f: &mut Frame, area: Rect, view: &ViewState, mood: Emotion) {
    let color = mood_color(mood);
    match &view.activity {
        ActivityView::Choosing => {
            let catalog = select_catalog(mood);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    [
                        Constraint::Length(4),
                        Constraint::Min(6),
                        Constraint::Length(2),
                    ]
                    .as_ref(),
                )
                .split(area);

            let header = Paragraph::new(vec![
                Line::from(Span::styled(
                    catalog.title,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(catalog.subtitle),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
            f.render_widget(header, chunks[0]);

            let items: Vec<ListItem> = catalog
                .activities
                .iter()
                .map(|activity| {
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            format!("{} {}", activity.icon.glyph(), activity.title),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(format!("   {}", activity.description)),
                    ])
                })
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Activities"))
                .highlight_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");
            f.render_stateful_widget(
                list,
                chunks[1],
                &mut ListState::default().with_selected(Some(view.selected_activity)),
            );

            let encouragement = Paragraph::new(
                "Remember: All feelings are valid, and you're doing great by taking care of yourself! 🌈",
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
            f.render_widget(encouragement, chunks[2]);
        }
        ActivityView::Playing(playback) => render_playback(f, area, playback, color),
        ActivityView::NotFound(id) => {
            let missing = Paragraph::new(vec![
                Line::from(""),
                Line::from("Activity not found. Please try another one!"),
                Line::from(Span::styled(
                    format!("({id})"),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(missing, area);
        }
    }
}

fn render_playback(f: &mut Frame, area: Rect, playback: &GuidedActivity, color: Color) {
    let script = playback.script();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
            ]
            .as_ref(),
        )
        .split(area);

    let title = Paragraph::new(format!("{} {}", script.icon.glyph(), script.title))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
    f.render_widget(title, chunks[0]);

    let percent = playback.progress_percent().min(100);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{} | {}% Complete", playback.step_label(), percent));
    f.render_widget(gauge, chunks[1]);

    let body = match playback.current_step() {
        Some(step) => vec![Line::from(""), Line::from(step)],
        None => vec![
            Line::from(""),
            Line::from(Span::styled("🎉 Activity Complete!", title_style())),
            Line::from("You did an amazing job! How do you feel now?"),
        ],
    };
    let step = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(step, chunks[2]);
}

fn render_learn(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(40),
                Constraint::Percentage(40),
                Constraint::Percentage(20),
            ]
            .as_ref(),
        )
        .split(area);

    let cards = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Neutral,
    ];
    for (row, pair) in cards.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
            .split(rows[row]);
        for (col, emotion) in pair.iter().enumerate() {
            let guide = emotion.guide();
            let mut lines = vec![
                Line::from(guide.description),
                Line::from(""),
                Line::from(Span::styled(
                    "Helpful Tips:",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ];
            lines.extend(guide.tips.iter().map(|tip| Line::from(format!("• {tip}"))));

            let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(mood_color(*emotion)))
                    .title(format!("{} {}", emotion.emoji(), guide.name)),
            );
            f.render_widget(card, cols[col]);
        }
    }

    let remember = Paragraph::new(
        "All emotions are valid and important! They help us understand ourselves and the world around us. \
         The key is learning healthy ways to express and manage them. 💙",
    )
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Remember"));
    f.render_widget(remember, rows[2]);
}

fn render_footer(f: &mut Frame, area: Rect, view: &ViewState, analyzing: bool) {
    if let Some(toast) = &view.toast {
        let style = if toast.warning {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };
        let line = Line::from(vec![
            Span::styled(format!("{} ", toast.title), style),
            Span::raw(toast.message.as_str()),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let controls = match (view.tab, &view.activity) {
        (Tab::Journal, _) if analyzing => Line::from("Analyzing your feelings..."),
        (Tab::Journal, _) => key_hint(&[
            ("Ctrl+S", "save my journal"),
            ("Tab", "switch tabs"),
            ("Esc", "quit"),
        ]),
        (Tab::Activities, ActivityView::Choosing) => key_hint(&[
            ("Up/Down", "choose"),
            ("Enter", "start"),
            ("Tab", "switch tabs"),
            ("q", "quit"),
        ]),
        (Tab::Activities, ActivityView::Playing(playback)) => key_hint(&[
            ("Enter", playback.action_label()),
            ("Esc", "stop"),
        ]),
        (Tab::Activities, ActivityView::NotFound(_)) => {
            key_hint(&[("Enter", "go back to activities")])
        }
        _ => key_hint(&[("Tab", "switch tabs"), ("q", "quit")]),
    };
    f.render_widget(
        Paragraph::new(controls)
            .style(hint_style())
            .alignment(Alignment::Center),
        area,
    );
}

impl Drop for UI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
