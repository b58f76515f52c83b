use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::data::{DataError, DataProvider, Snapshot, split_columns};
use crate::model::{Config, Issue, SummaryCounts};
use crate::nav::{self, DrawerRow, Entry, ListState, Tree, build_tree};

use super::input::{self, Action};
use super::render;
use super::theme::Theme;

/// Everything the event loop can deliver to the reducer.
#[derive(Debug)]
pub enum Msg {
    Resize(u16, u16),
    Key(KeyEvent),
    Tick,
    Data(Result<Snapshot, DataError>),
}

/// Follow-up asynchronous requests produced by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Fetch,
}

/// One logical issue list (tree + cursor). The collapse set lives on
/// the App because fold state is shared across refreshes, not per tree.
pub struct Column {
    pub title: &'static str,
    pub tree: Tree,
    pub list: ListState,
}

impl Column {
    fn new(title: &'static str) -> Self {
        Column {
            title,
            tree: Tree::default(),
            list: ListState::default(),
        }
    }

    pub fn entries(&self, collapsed: &HashSet<String>) -> Vec<Entry> {
        nav::visible_entries(&self.tree, collapsed)
    }

    pub fn rows(&self, collapsed: &HashSet<String>) -> Vec<DrawerRow> {
        nav::drawer_rows(&self.tree, collapsed)
    }

    pub fn issue(&self, entry: Entry) -> &Issue {
        &self.tree.ordered[entry.idx]
    }

    pub fn selected_id(&self, collapsed: &HashSet<String>) -> Option<&str> {
        let entries = self.entries(collapsed);
        entries
            .get(self.list.selected)
            .map(|entry| self.tree.ordered[entry.idx].id.as_str())
    }

    pub fn selected_issue(&self, collapsed: &HashSet<String>) -> Option<&Issue> {
        let entries = self.entries(collapsed);
        entries
            .get(self.list.selected)
            .map(|entry| &self.tree.ordered[entry.idx])
    }
}

/// Main application state. Mutated only by `update`, one message at a
/// time.
pub struct App {
    pub width: usize,
    pub height: usize,
    pub columns: [Column; 2],
    pub active: usize,
    pub collapsed: HashSet<String>,
    pub refresh: Duration,
    pub limit: usize,
    pub last_updated: Option<DateTime<Local>>,
    pub summary: SummaryCounts,
    pub error: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            width: 0,
            height: 0,
            columns: [Column::new("Future Work"), Column::new("Completed Work")],
            active: 0,
            collapsed: HashSet::new(),
            refresh: Duration::from_secs(config.dashboard.refresh_secs),
            limit: config.dashboard.limit,
            last_updated: None,
            summary: SummaryCounts::default(),
            error: None,
            show_help: false,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
        }
    }

    /// The reducer: fold one message into the state, returning any
    /// async requests to issue. Never blocks.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Resize(width, height) => {
                self.width = width as usize;
                self.height = height as usize;
                self.ensure_visible_all();
                Vec::new()
            }
            Msg::Key(key) => match input::action_for(key, self.show_help) {
                Some(action) => self.apply(action),
                None => Vec::new(),
            },
            Msg::Tick => {
                if self.refresh.is_zero() {
                    Vec::new()
                } else {
                    vec![Effect::Fetch]
                }
            }
            Msg::Data(Ok(snapshot)) => {
                self.apply_snapshot(snapshot);
                Vec::new()
            }
            Msg::Data(Err(err)) => {
                // Keep the last good snapshot on screen; only the
                // status line changes.
                self.error = Some(err.to_string());
                Vec::new()
            }
        }
    }

    fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Refresh => return vec![Effect::Fetch],
            Action::NextList => {
                self.active = (self.active + 1) % self.columns.len();
                self.ensure_visible_all();
            }
            Action::PrevList => {
                self.active = (self.active + self.columns.len() - 1) % self.columns.len();
                self.ensure_visible_all();
            }
            Action::MoveDown => self.move_selection(1),
            Action::MoveUp => self.move_selection(-1),
            Action::Fold => self.set_collapse_for_selected(true),
            Action::Unfold => self.set_collapse_for_selected(false),
        }
        Vec::new()
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.columns[self.active].entries(&self.collapsed).len();
        self.columns[self.active].list.move_by(delta, len);
        self.ensure_visible_all();
    }

    fn set_collapse_for_selected(&mut self, collapse: bool) {
        let Some(issue) = self.columns[self.active].selected_issue(&self.collapsed) else {
            return;
        };
        if !issue.is_epic() {
            return;
        }
        let id = issue.id.clone();
        if collapse {
            self.collapsed.insert(id.clone());
        } else {
            self.collapsed.remove(&id);
        }
        // Re-project and keep the cursor on the folded issue; a cursor
        // that would land on a hidden row falls back to the top.
        let column = &mut self.columns[self.active];
        let entries = nav::visible_entries(&column.tree, &self.collapsed);
        let ids: Vec<&str> = entries
            .iter()
            .map(|entry| column.tree.ordered[entry.idx].id.as_str())
            .collect();
        column.list.relocate(Some(&id), &ids);
        self.ensure_visible_all();
    }

    fn ensure_visible_all(&mut self) {
        // The scroll window is in entry units but rows render wrapped
        // titles, so the page height comes from the drawer's own math.
        let layout = nav::drawer_layout(self.width, self.height);
        for idx in 0..self.columns.len() {
            let page = render::drawer::page_size(
                &self.columns[idx],
                &self.collapsed,
                layout.drawer_width,
                self.height,
            );
            let len = self.columns[idx].entries(&self.collapsed).len();
            self.columns[idx].list.ensure_visible(len, page);
        }
    }

    /// Swap in a fresh snapshot. The cursor follows the issue the user
    /// was looking at, found by id in the rebuilt entry list; the fold
    /// set carries over untouched.
    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.error = None;
        self.last_updated = Some(Local::now());
        self.summary = snapshot.summary;

        let previous: Vec<Option<String>> = self
            .columns
            .iter()
            .map(|column| column.selected_id(&self.collapsed).map(str::to_string))
            .collect();

        let (future, closed) = split_columns(&snapshot.issues, self.limit);
        self.columns[0].tree = build_tree(&future, &snapshot.edges);
        self.columns[1].tree = build_tree(&closed, &snapshot.edges);

        for (idx, prev) in previous.iter().enumerate() {
            let column = &mut self.columns[idx];
            let entries = nav::visible_entries(&column.tree, &self.collapsed);
            let ids: Vec<&str> = entries
                .iter()
                .map(|entry| column.tree.ordered[entry.idx].id.as_str())
                .collect();
            column.list.relocate(prev.as_deref(), &ids);
        }
        self.ensure_visible_all();
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        self.columns[self.active].selected_issue(&self.collapsed)
    }
}

/// Run the dashboard until the user quits.
pub fn run(provider: Arc<dyn DataProvider>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, provider);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    provider: Arc<dyn DataProvider>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel::<Msg>();

    let size = terminal.size()?;
    let _ = app.update(Msg::Resize(size.width, size.height));

    // Initial snapshot, fire and forget
    spawn_fetch(provider.clone(), tx.clone());

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Async refresh results arrive like any other message. With
        // overlapping refreshes the last result to land wins.
        while let Ok(msg) = rx.try_recv() {
            let effects = app.update(msg);
            handle_effects(effects, &provider, &tx);
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let effects = app.update(Msg::Key(key));
                    handle_effects(effects, &provider, &tx);
                }
                Event::Resize(width, height) => {
                    let effects = app.update(Msg::Resize(width, height));
                    handle_effects(effects, &provider, &tx);
                }
                _ => {}
            }
        }

        if !app.refresh.is_zero() && last_tick.elapsed() >= app.refresh {
            last_tick = Instant::now();
            let effects = app.update(Msg::Tick);
            handle_effects(effects, &provider, &tx);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn handle_effects(effects: Vec<Effect>, provider: &Arc<dyn DataProvider>, tx: &mpsc::Sender<Msg>) {
    for effect in effects {
        match effect {
            Effect::Fetch => spawn_fetch(provider.clone(), tx.clone()),
        }
    }
}

fn spawn_fetch(provider: Arc<dyn DataProvider>, tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let _ = tx.send(Msg::Data(provider.fetch()));
    });
}
