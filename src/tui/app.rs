use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use indexmap::IndexMap;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::io::pack_io::load_pack;
use crate::io::state::{SavedState, read_state, write_state};
use crate::io::watcher::{FileEvent, PackWatcher};
use crate::model::config::AppConfig;
use crate::model::query::{ListQuery, TierScope};
use crate::model::task::{Task, TaskTier};
use crate::ops::{pipeline, progress};

use super::input;
use super::list::ListView;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// Main application state
pub struct App {
    pub tasks: Vec<Task>,
    pub config: AppConfig,
    pub theme: Theme,
    pub query: ListQuery,
    pub list: ListView,
    /// Completed task ids with completion time (completion order)
    pub completed: IndexMap<String, chrono::DateTime<Utc>>,
    /// Current rolled task id, if any
    pub current_task: Option<String>,
    pub mode: Mode,
    pub show_detail: bool,
    pub should_quit: bool,
    /// Transient status-row message
    pub status: Option<String>,
    pub pack_path: PathBuf,
    pub state_dir: PathBuf,
    /// List viewport height in terminal lines, recorded by the last render
    pub list_viewport_lines: usize,
    /// Unsaved completion/current-task changes
    pub dirty: bool,
}

impl App {
    pub fn new(tasks: Vec<Task>, config: AppConfig, pack_path: PathBuf, state_dir: PathBuf) -> Self {
        let theme = Theme::from_config(&config.ui);
        let list = ListView::new(
            TaskTier::Easy,
            config.scroll.rows_per_notch,
            config.scroll.suppress_ticks,
        );
        let mut app = App {
            tasks,
            config,
            theme,
            query: ListQuery::default(),
            list,
            completed: IndexMap::new(),
            current_task: None,
            mode: Mode::Navigate,
            show_detail: false,
            should_quit: false,
            status: None,
            pack_path,
            state_dir,
            list_viewport_lines: 0,
            dirty: false,
        };
        app.refresh_view();
        app
    }

    /// The filtered/sorted list the player currently sees.
    ///
    /// Associated fn over the fields (not `&self`) so callers can hold the
    /// result while mutating other parts of the app.
    pub fn visible_of<'a>(
        tasks: &'a [Task],
        query: &ListQuery,
        completed: &IndexMap<String, chrono::DateTime<Utc>>,
        active_tier: TaskTier,
    ) -> Vec<&'a Task> {
        let mut visible = pipeline::apply_query(tasks, query, |t| completed.contains_key(&t.id));
        if query.tier_scope == TierScope::ThisTier {
            // tier scoping is a view concern, not a pipeline one; filtering
            // after the stable sort preserves the pipeline's order
            visible.retain(|t| t.tier == Some(active_tier));
        }
        visible
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        Self::visible_of(
            &self.tasks,
            &self.query,
            &self.completed,
            self.list.selection.active_tier(),
        )
    }

    pub fn is_completed(&self, task: &Task) -> bool {
        self.completed.contains_key(&task.id)
    }

    pub fn active_tier(&self) -> TaskTier {
        self.list.selection.active_tier()
    }

    /// Terminal lines one task row occupies
    pub fn row_block(&self) -> usize {
        self.config.ui.row_lines.max(1) as usize
    }

    /// Re-run the pipeline and reconcile selection/scroll with the fresh
    /// list. Called after every query, tier, or completion change.
    pub fn refresh_view(&mut self) {
        let tier = self.list.selection.active_tier();
        let visible = Self::visible_of(&self.tasks, &self.query, &self.completed, tier);
        let completed = &self.completed;
        let completed_first = self.query.completed_first;
        self.list.reset_after_query_change(tier, &visible, completed_first, |t| {
            completed.contains_key(&t.id)
        });
    }

    pub fn set_active_tier(&mut self, tier: TaskTier) {
        self.list.selection.set_active_tier(tier);
        self.refresh_view();
    }

    /// Keyboard-navigation path: bring the selected row into the window
    pub fn ensure_selection_visible(&mut self) {
        let total = self.visible_tasks().len();
        let viewport = self.list_viewport_lines;
        let row_block = self.row_block();
        self.list.ensure_selection_visible(total, viewport, row_block);
    }

    /// Wheel path: scroll the window without following the selection
    pub fn on_wheel(&mut self, rotation: f64) {
        let total = self.visible_tasks().len();
        let viewport = self.list_viewport_lines;
        let row_block = self.row_block();
        self.list.on_wheel(rotation, viewport, row_block, total);
    }

    /// Toggle completion of the selected task, then re-anchor the
    /// selection to it — completion sort may have moved it.
    pub fn toggle_selected(&mut self) {
        let tier = self.list.selection.active_tier();
        let visible = Self::visible_of(&self.tasks, &self.query, &self.completed, tier);
        let Some(task) = visible.get(self.list.selection.selected_index()).copied() else {
            return;
        };
        let id = task.id.clone();

        if self.completed.shift_remove(&id).is_none() {
            self.completed.insert(id.clone(), Utc::now());
            if self.current_task.as_deref() == Some(id.as_str()) {
                self.current_task = None;
            }
        }
        self.dirty = true;

        let visible = Self::visible_of(&self.tasks, &self.query, &self.completed, tier);
        self.list.selection.select_task(tier, &visible, &id);
        self.ensure_selection_visible();
    }

    /// Roll a random task from the current tier. Refuses while a rolled
    /// task is still outstanding, like the overlay button does.
    pub fn roll_random(&mut self) {
        if let Some(id) = &self.current_task
            && !self.completed.contains_key(id)
        {
            self.status = Some("current task still open".into());
            return;
        }
        let mut rng = rand::thread_rng();
        let completed = &self.completed;
        let rolled = progress::roll_random(&self.tasks, |t| completed.contains_key(&t.id), &mut rng)
            .map(|t| (t.id.clone(), t.name.clone()));
        match rolled {
            Some((id, name)) => {
                self.current_task = Some(id);
                self.status = Some(format!("rolled: {name}"));
                self.dirty = true;
            }
            None => {
                self.status = Some("nothing left to roll".into());
            }
        }
    }

    /// Complete the current rolled task and clear it
    pub fn complete_current(&mut self) {
        let Some(id) = self.current_task.take() else {
            self.status = Some("no current task".into());
            return;
        };
        self.completed.entry(id).or_insert_with(Utc::now);
        self.dirty = true;
        self.refresh_view();
    }

    /// Task behind the current task id, if it is still in the pack
    pub fn current_task_ref(&self) -> Option<&Task> {
        let id = self.current_task.as_deref()?;
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the pack after a reload, keeping completion for ids that
    /// still exist
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        if let Some(id) = &self.current_task
            && !self.tasks.iter().any(|t| t.id == *id)
        {
            self.current_task = None;
        }
        self.refresh_view();
    }

    pub fn saved_state(&self) -> SavedState {
        let mut state = SavedState {
            completed: self.completed.clone(),
            current_task: self.current_task.clone(),
            ..Default::default()
        };
        state.ui.active_tier = Some(self.list.selection.active_tier());
        state.ui.selected_by_tier = self.list.selection.snapshot();
        state.ui.query = self.query.clone();
        state
    }

    pub fn restore_state(&mut self, state: SavedState) {
        self.completed = state.completed;
        self.current_task = state.current_task;
        self.query = state.ui.query;
        self.list.selection.restore(&state.ui.selected_by_tier);
        if let Some(tier) = state.ui.active_tier {
            self.list.selection.set_active_tier(tier);
        }
        self.refresh_view();
    }
}

fn save_state(app: &mut App) {
    if write_state(&app.state_dir, &app.saved_state()).is_ok() {
        app.dirty = false;
    }
}

/// Run the TUI application
pub fn run(pack_arg: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let pack_path = match pack_arg {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from("tasks.json"),
    };
    let state_dir = pack_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let tasks = load_pack(&pack_path)?;
    let config = load_config(&state_dir);
    let mut app = App::new(tasks, config, pack_path, state_dir);
    if let Some(state) = read_state(&app.state_dir) {
        app.restore_state(state);
    }

    // Pack edits show up live; watcher failure is not fatal
    let watcher = PackWatcher::start(&app.pack_path).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Save state before exit
    save_state(&mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&PackWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    // Debounced state save: every ~5 key presses
                    save_counter += 1;
                    if save_counter >= 5 && app.dirty {
                        save_state(app);
                        save_counter = 0;
                    }
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(app, mouse);
                }
                _ => {}
            }
        }

        if let Some(w) = watcher
            && w.poll().iter().any(|e| matches!(e, FileEvent::PackChanged))
        {
            match load_pack(&app.pack_path) {
                Ok(tasks) => {
                    app.replace_tasks(tasks);
                    app.status = Some("task pack reloaded".into());
                }
                Err(e) => {
                    app.status = Some(format!("pack reload failed: {e}"));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
