mod app;
mod config;
mod engine;
mod event;
mod store;
mod ui;
mod vocab;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};

use app::{App, FormField, QuizState, Tab};
use config::Config;
use event::{AppEvent, EventSource};
use store::csv_store::CsvStore;
use ui::components::add_word_form::AddWordForm;
use ui::components::quiz_panel::QuizPanel;
use ui::components::stats_panel::StatsPanel;
use ui::components::word_vault::WordVault;
use ui::layout::{AppLayout, pack_hint_lines};
use ui::line_input::InputResult;
use ui::theme::Theme;

#[derive(Parser)]
#[command(name = "dictit", version, about = "Personal vocabulary tracker with quizzes and badges")]
struct Cli {
    #[arg(short, long, help = "Vocabulary CSV file")]
    data_file: Option<PathBuf>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Seed for quiz question selection")]
    seed: Option<u64>,
}

fn init_logging() -> Result<()> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dictit");
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("dictit.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        log::warn!("config unreadable, using defaults: {e:#}");
        Config::default()
    });
    config.apply_overrides(cli.theme, cli.data_file);
    config.validate(&Theme::available_themes());

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        log::warn!("theme {:?} failed to load, using built-in colors", config.theme);
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));

    let store = CsvStore::new(config.data_path());
    let vocab = store.load()?;
    log::info!(
        "loaded {} entries from {}",
        vocab.len(),
        store.path().display()
    );

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut app = App::new(store, vocab, theme, rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventSource::new();
    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventSource,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if let KeyCode::F(n @ 1..=4) = key.code
        && let Some(tab) = Tab::from_index(n as usize - 1)
    {
        app.select_tab(tab);
        return;
    }

    match app.tab {
        Tab::AddWord => handle_form_key(app, key),
        Tab::WordVault => handle_vault_key(app, key),
        Tab::Quiz => handle_quiz_key(app, key),
        Tab::Stats => handle_stats_key(app, key),
    }
}

/// Keys shared by the tabs that have no text entry.
fn handle_nav_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.select_tab(app.tab.next()),
        KeyCode::BackTab => app.select_tab(app.tab.prev()),
        KeyCode::Char(ch @ '1'..='4') if app.tab != Tab::Quiz => {
            if let Some(tab) = Tab::from_index(ch as usize - '1' as usize) {
                app.select_tab(tab);
            }
        }
        _ => return false,
    }
    true
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_form(Local::now().date_naive());
            return;
        }
        KeyCode::Esc => {
            app.clear_form_status();
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
            return;
        }
        _ => {}
    }

    if app.form.focused() == FormField::PartOfSpeech {
        match key.code {
            KeyCode::Left => app.form.part_of_speech = app.form.part_of_speech.prev(),
            KeyCode::Right => app.form.part_of_speech = app.form.part_of_speech.next(),
            _ => {}
        }
        return;
    }

    if let Some(input) = app.form.focused_input_mut()
        && input.handle(key) == InputResult::Edited
    {
        app.clear_form_status();
    }
}

fn handle_vault_key(app: &mut App, key: KeyEvent) {
    if handle_nav_key(app, key) {
        return;
    }
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.vault_select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.vault_select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.vault_select_first(),
        KeyCode::End | KeyCode::Char('G') => app.vault_select_last(),
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    if handle_nav_key(app, key) {
        return;
    }
    match (&app.quiz, key.code) {
        (QuizState::Asking { .. }, KeyCode::Down | KeyCode::Char('j')) => app.quiz_select_next(),
        (QuizState::Asking { .. }, KeyCode::Up | KeyCode::Char('k')) => app.quiz_select_prev(),
        (QuizState::Asking { .. }, KeyCode::Char(ch @ '1'..='4')) => {
            app.quiz_select(ch as usize - '1' as usize);
        }
        (QuizState::Asking { .. }, KeyCode::Enter) => app.submit_answer(),
        (
            QuizState::Answered { .. } | QuizState::Unavailable(_),
            KeyCode::Enter | KeyCode::Char('n'),
        ) => app.new_question(),
        _ => {}
    }
}

fn handle_stats_key(app: &mut App, key: KeyEvent) {
    handle_nav_key(app, key);
}

fn footer_hints(app: &App) -> Vec<&'static str> {
    match app.tab {
        Tab::AddWord => vec![
            "[Tab/↓] Next field",
            "[S-Tab/↑] Prev field",
            "[←/→] Part of speech",
            "[Enter] Add to vault",
            "[F1-F4] Tabs",
            "[Ctrl+C] Quit",
        ],
        Tab::WordVault => vec![
            "[j/k] Scroll",
            "[g/G] First/last",
            "[1-4] Tabs",
            "[q] Quit",
        ],
        Tab::Quiz => match app.quiz {
            QuizState::Answered { .. } => vec!["[Enter/n] Next question", "[F1-F4] Tabs", "[q] Quit"],
            QuizState::Unavailable(_) => {
                vec!["[F1] Add words", "[Enter/n] Try again", "[F2-F4] Tabs", "[q] Quit"]
            }
            QuizState::Asking { .. } => {
                vec!["[j/k/1-4] Choose", "[Enter] Submit", "[F1-F4] Tabs", "[q] Quit"]
            }
        },
        Tab::Stats => vec!["[1-4] Tabs", "[q] Quit"],
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let hints = footer_hints(app);
    let hint_lines = pack_hint_lines(&hints, area.width as usize);
    let layout = AppLayout::new(area, hint_lines.len() as u16);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Dict It ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " My Personal Dictionary | {} words | {} points",
                app.total_entries(),
                app.total_points()
            ),
            Style::default().fg(colors.muted()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("[{}] {}", i + 1, tab.title()));
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(colors.muted()))
        .highlight_style(
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(Block::default().style(Style::default().bg(colors.bg())));
    frame.render_widget(tabs, layout.tabs);

    match app.tab {
        Tab::AddWord => frame.render_widget(
            AddWordForm::new(&app.form, app.form_status.as_ref(), app.theme),
            layout.main,
        ),
        Tab::WordVault => frame.render_widget(
            WordVault::new(app.vocab.entries(), app.vault_selected, app.theme),
            layout.main,
        ),
        Tab::Quiz => frame.render_widget(QuizPanel::new(&app.quiz, app.theme), layout.main),
        Tab::Stats => {
            let badges = app.badges();
            frame.render_widget(
                StatsPanel::new(app.total_entries(), app.total_points(), &badges, app.theme),
                layout.main,
            );
        }
    }

    let footer_lines: Vec<Line> = hint_lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.muted()))))
        .collect();
    frame.render_widget(Paragraph::new(footer_lines), layout.footer);
}
