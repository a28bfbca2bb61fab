use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::admin::{AdminChannel, AdminClient};
use crate::config::{ConfigStore, resolve_shop};
use crate::model::StockroomConfig;
use crate::modal::ModalController;
use crate::picker::{PickKind, PickVerb};
use crate::pipeline::{PipelineError, Provisioned, ProvisioningPipeline};
use crate::selection::{CandidateList, SelectionReconciler};

use super::event_loop;

const LOG_KEEP: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Customers,
    Product,
    Collection,
    Provision,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Customers,
        Focus::Product,
        Focus::Collection,
        Focus::Provision,
    ];

    fn step(self, forward: bool) -> Focus {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let n = Self::ORDER.len();
        let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
        Self::ORDER[next]
    }
}

pub(in crate::tui_shell) type SharedPipeline = Arc<ProvisioningPipeline<Arc<dyn AdminChannel>>>;
pub(in crate::tui_shell) type RunResult = Result<Provisioned, PipelineError>;

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) client: Option<Arc<AdminClient>>,
    pub(in crate::tui_shell) shop_label: String,

    pub(in crate::tui_shell) selection: SelectionReconciler,
    pub(in crate::tui_shell) candidates: CandidateList,
    pub(in crate::tui_shell) customer_modal: ModalController,
    pub(in crate::tui_shell) modal_cursor: usize,

    pub(in crate::tui_shell) pipeline: Option<SharedPipeline>,
    pub(in crate::tui_shell) inflight: Option<Receiver<RunResult>>,
    pub(in crate::tui_shell) last_result: Vec<String>,

    pub(in crate::tui_shell) pending_pick: Option<(PickKind, PickVerb)>,
    pub(in crate::tui_shell) picker_page_size: usize,

    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) log: Vec<String>,
    pub(in crate::tui_shell) quit: bool,
}

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let store = ConfigStore::open_cwd()?;
    let mut app = App::load(&store, &opts);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

impl App {
    fn load(store: &ConfigStore, opts: &crate::tui::TuiRunOptions) -> App {
        let cfg = match store.read_config() {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(error = %format!("{:#}", err), "config unreadable; using defaults");
                Default::default()
            }
        };

        let mut app = App::new(&cfg);
        let connected = resolve_shop(&cfg, &opts.overrides).and_then(AdminClient::new);
        match connected {
            Ok(client) => {
                app.shop_label = client.shop().base_url.clone();
                let client = Arc::new(client);
                let channel: Arc<dyn AdminChannel> = client.clone();
                app.pipeline = Some(Arc::new(ProvisioningPipeline::new(channel)));
                app.client = Some(client);
                app.load_candidates();
            }
            Err(err) => app.push_log(format!("not connected: {:#}", err)),
        }
        app
    }

    /// Disconnected app state; no terminal or network is touched.
    pub(in crate::tui_shell) fn new(cfg: &StockroomConfig) -> App {
        App {
            client: None,
            shop_label: "(not connected)".to_string(),
            selection: SelectionReconciler::new(cfg.selection.customer_key),
            candidates: CandidateList::new(cfg.selection.candidate_limit),
            customer_modal: ModalController::new(),
            modal_cursor: 0,
            pipeline: None,
            inflight: None,
            last_result: Vec::new(),
            pending_pick: None,
            picker_page_size: cfg.picker.page_size,
            focus: Focus::Customers,
            log: Vec::new(),
            quit: false,
        }
    }

    fn load_candidates(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };
        match self.candidates.load(client.as_ref()) {
            Ok(list) => {
                let n = list.len();
                self.push_log(format!("loaded {} customers", n));
            }
            Err(err) => self.push_log(format!("customers: {}", err)),
        }
    }

    pub(in crate::tui_shell) fn push_log(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!(target: "stockroom::tui", "{}", line);
        self.log.push(line);
        if self.log.len() > LOG_KEEP {
            let drop = self.log.len() - LOG_KEEP;
            self.log.drain(0..drop);
        }
    }

    pub(in crate::tui_shell) fn handle_key(&mut self, key: KeyEvent) {
        if self.customer_modal.is_visible() {
            super::customer_modal::handle_key(self, key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => self.focus = self.focus.step(true),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.focus = self.focus.step(false)
            }
            KeyCode::Enter => self.activate(PickVerb::Select),
            KeyCode::Char('a') => self.activate(PickVerb::Add),
            KeyCode::Char('r') => self.start_provisioning(),
            _ => {}
        }
    }

    fn activate(&mut self, verb: PickVerb) {
        match self.focus {
            Focus::Customers => {
                if self.candidates.is_loaded() {
                    self.modal_cursor = 0;
                } else {
                    self.load_candidates();
                }
                self.customer_modal.show();
            }
            Focus::Product => self.pending_pick = Some((PickKind::Product, verb)),
            Focus::Collection => self.pending_pick = Some((PickKind::Collection, verb)),
            Focus::Provision => self.start_provisioning(),
        }
    }
}
