//! TUI Renderer for the interactive browser
//!
//! ## Design:
//! - Renderer owns UI state (focus, selections, the search buffer)
//! - Renderer does NOT own data: every intent goes back to the handler,
//!   which answers with a fresh `BrowserScreenViewModel`
//! - Components turn key presses into intents; views draw the screen

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use scentdex_engine::Action;

use crate::presentation::view_models::{BrowserScreenViewModel, DetailPanelViewModel};
use crate::presentation::views::tui::components::{
    ChipsComponent, FacetPanelComponent, ResultsAction, ResultsComponent,
};
use crate::presentation::views::tui::{
    AccordChartView, DetailPanelView, HeaderView, Palette, StatusBarView,
};

/// What the user asked for; the handler turns it into a new screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserIntent {
    Dispatch(Action),
    OpenDetails(String),
    OpenSimilar(String),
    ClosePanel,
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Facets,
    Results,
    Chips,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Facets => Focus::Results,
            Focus::Results => Focus::Chips,
            Focus::Chips => Focus::Facets,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Facets => Focus::Chips,
            Focus::Results => Focus::Facets,
            Focus::Chips => Focus::Results,
        }
    }
}

pub struct BrowserRenderer {
    screen: BrowserScreenViewModel,
    focus: Focus,
    facets: FacetPanelComponent,
    results: ResultsComponent,
    chips: ChipsComponent,
    /// Search buffer while the header is being edited
    search: Option<String>,
    should_quit: bool,
    error_message: Option<String>,
}

impl BrowserRenderer {
    pub fn new(screen: BrowserScreenViewModel) -> Self {
        Self {
            screen,
            focus: Focus::Facets,
            facets: FacetPanelComponent::new(),
            results: ResultsComponent::new(),
            chips: ChipsComponent::new(),
            search: None,
            should_quit: false,
            error_message: None,
        }
    }

    /// Run until the user quits. `on_intent` applies an intent and returns
    /// the screen to draw next; its errors are shown in the status bar.
    pub fn run<F>(mut self, mut on_intent: F) -> Result<()>
    where
        F: FnMut(BrowserIntent) -> Result<BrowserScreenViewModel>,
    {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, &mut on_intent);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<F>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        on_intent: &mut F,
    ) -> Result<()>
    where
        F: FnMut(BrowserIntent) -> Result<BrowserScreenViewModel>,
    {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && let Some(intent) = self.handle_key_event(key)
            {
                self.apply(intent, on_intent);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn apply<F>(&mut self, intent: BrowserIntent, on_intent: &mut F)
    where
        F: FnMut(BrowserIntent) -> Result<BrowserScreenViewModel>,
    {
        let resets_results = matches!(
            &intent,
            BrowserIntent::Dispatch(action) if !matches!(action, Action::ToggleFavorite(_))
        );
        match on_intent(intent) {
            Ok(screen) => {
                self.screen = screen;
                self.error_message = None;
                if resets_results {
                    self.results.reset();
                }
            }
            Err(e) => self.error_message = Some(format!("{:#}", e)),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<BrowserIntent> {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.search.is_some() {
            return self.handle_search_key(key);
        }

        if let Some(panel) = &self.screen.detail {
            return self.handle_panel_key(key, panel.clone());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                None
            }
            KeyCode::Char('/') => {
                self.search = Some(self.screen.query.clone());
                None
            }
            KeyCode::Char('t') => Some(BrowserIntent::ToggleTheme),
            KeyCode::Char('c') => Some(BrowserIntent::Dispatch(Action::ClearAll)),
            KeyCode::Char('B') => Some(BrowserIntent::Dispatch(Action::ClearFocus)),
            KeyCode::Char('F') => Some(BrowserIntent::Dispatch(Action::ToggleFavoritesView)),
            _ => self.handle_focused_key(key),
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) -> Option<BrowserIntent> {
        match self.focus {
            Focus::Facets => self
                .facets
                .handle_input(key, &self.screen.facets)
                .map(BrowserIntent::Dispatch),
            Focus::Chips => self
                .chips
                .handle_input(key, &self.screen.chips)
                .map(BrowserIntent::Dispatch),
            Focus::Results => {
                let action = self.results.handle_input(key, &self.screen.results)?;
                Some(match action {
                    ResultsAction::OpenDetails(code) => BrowserIntent::OpenDetails(code),
                    ResultsAction::OpenSimilar(code) => BrowserIntent::OpenSimilar(code),
                    ResultsAction::ToggleFavorite(code) => {
                        BrowserIntent::Dispatch(Action::ToggleFavorite(code))
                    }
                    ResultsAction::FocusBrand(brand) => {
                        BrowserIntent::Dispatch(Action::FocusBrand(brand))
                    }
                })
            }
        }
    }

    /// Every edit re-runs the search, so results follow the typing.
    fn handle_search_key(&mut self, key: KeyEvent) -> Option<BrowserIntent> {
        let buffer = self.search.as_mut()?;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                self.search = None;
                None
            }
            KeyCode::Backspace => {
                buffer.pop();
                Some(BrowserIntent::Dispatch(Action::SetQuery(buffer.clone())))
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                Some(BrowserIntent::Dispatch(Action::SetQuery(buffer.clone())))
            }
            _ => None,
        }
    }

    fn handle_panel_key(
        &mut self,
        key: KeyEvent,
        panel: DetailPanelViewModel,
    ) -> Option<BrowserIntent> {
        match (key.code, panel) {
            (KeyCode::Char('q'), _) => {
                self.should_quit = true;
                None
            }
            (KeyCode::Esc | KeyCode::Backspace, _) => Some(BrowserIntent::ClosePanel),
            (KeyCode::Char('s'), DetailPanelViewModel::Item(detail)) => {
                Some(BrowserIntent::OpenSimilar(detail.code))
            }
            (KeyCode::Char('f'), DetailPanelViewModel::Item(detail)) => {
                Some(BrowserIntent::Dispatch(Action::ToggleFavorite(detail.code)))
            }
            (KeyCode::Char('t'), _) => Some(BrowserIntent::ToggleTheme),
            _ => None,
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let screen = &self.screen;
        let palette = Palette::for_theme(screen.dark);
        let size = f.area();
        f.render_widget(Block::default().style(palette.base()), size);

        // Layout: [Header | Facets + Results + Side | Chips | Status]
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(size);

        f.render_widget(
            HeaderView::new(&screen.query, self.search.as_deref(), &screen.theme, palette),
            rows[0],
        );

        let columns = Layout::horizontal([
            Constraint::Percentage(28),
            Constraint::Min(30),
            Constraint::Percentage(26),
        ])
        .split(rows[1]);

        self.facets.render(
            f,
            columns[0],
            &screen.facets,
            palette,
            self.focus == Focus::Facets,
        );

        let title = format!("Results · {}", screen.summary.text);
        self.results.render(
            f,
            columns[1],
            &screen.results,
            &title,
            palette,
            self.focus == Focus::Results,
        );

        let side = Layout::vertical([Constraint::Length(7), Constraint::Min(5)]).split(columns[2]);
        render_summary(f, side[0], screen, palette);
        f.render_widget(AccordChartView::new(&screen.accord_stats, palette), side[1]);

        self.chips.render(
            f,
            rows[2],
            &screen.chips,
            palette,
            self.focus == Focus::Chips,
        );

        f.render_widget(
            StatusBarView::new(
                screen.notice.as_deref(),
                self.error_message.as_deref(),
                palette,
            ),
            rows[3],
        );

        if let Some(panel) = &screen.detail {
            f.render_widget(DetailPanelView::new(panel, palette), popup_area(rows[1]));
        }
    }
}

/// Brand blurb when one is focused, otherwise the plain counts.
fn render_summary(f: &mut Frame, area: Rect, screen: &BrowserScreenViewModel, palette: Palette) {
    let muted = Style::default().fg(palette.muted);
    let lines = match &screen.summary.brand {
        Some(brand) => vec![
            Line::from(Span::styled(
                brand.name.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(brand.description.clone()),
        ],
        None => vec![
            Line::from(screen.summary.text.clone()),
            Line::from(Span::styled(
                format!("{} disabled option(s)", screen.facets.disabled),
                muted,
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Summary")
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn popup_area(area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage(5),
        Constraint::Percentage(90),
        Constraint::Percentage(5),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Percentage(15),
        Constraint::Percentage(70),
        Constraint::Percentage(15),
    ])
    .split(vertical[1])[1]
}
