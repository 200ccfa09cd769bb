#![allow(clippy::arithmetic_side_effects)]
use {
    super::{
        config::{GestureMode, ReaderConfig},
        render::BookRenderer,
        state::{self, ReadingState},
        theme::Theme,
    },
    crossterm::{
        cursor,
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
            KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
        },
        execute,
        terminal::{self},
    },
    miette::IntoDiagnostic,
    ratatui::{
        Frame, Terminal,
        backend::CrosstermBackend,
        layout::{Alignment, Constraint, Layout, Position, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph, Wrap},
    },
    ratatui_image::picker::Picker,
    std::{
        io, panic,
        path::PathBuf,
        sync::mpsc::{self, Receiver},
        time::{Duration, Instant},
    },
    storyflip::{
        Bounds, FlipController, FlipDirection, FlipEvent, FlipView, MediaKind, PageRenderer,
        Phase, Result, Story, Swipe, SwipeDetector,
    },
    tui_tree_widget::{Tree, TreeItem, TreeState},
};

const FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);
const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    }
}

enum AppMode {
    Normal,
    GoToPage { input: String },
    Autoplay { last_advance: Instant },
    /// "The End" card after asking for a page past the last one.
    Finished,
}

pub struct TuiApp {
    story: Story,
    story_key: PathBuf,
    controller: FlipController,
    events: Receiver<FlipEvent>,
    renderer: Option<BookRenderer>,
    theme: Theme,
    config: ReaderConfig,
    autoplay_delay: Duration,
    swipe: SwipeDetector,
    press_at: Option<(u16, u16)>,
    tree_state: TreeState<usize>,
    show_sidebar: bool,
    show_help: bool,
    show_info: bool,
    notification: Option<String>,
    notification_time: Option<Instant>,
    mode: AppMode,
    finished: bool,
}

impl TuiApp {
    pub fn new(
        story: Story,
        story_key: PathBuf,
        mut controller: FlipController,
        config: ReaderConfig,
        finished: bool,
    ) -> Result<Self> {
        let (tx, events) = mpsc::channel();
        controller.subscribe(move |event| {
            let _ = tx.send(*event);
        });

        let autoplay_delay = config.autoplay_delay()?;
        let mut tree_state = TreeState::default();
        tree_state.select(vec![controller.current_page()]);

        Ok(Self {
            story,
            story_key,
            controller,
            events,
            renderer: None,
            theme: Theme::preset(config.theme),
            config,
            autoplay_delay,
            swipe: SwipeDetector::default(),
            press_at: None,
            tree_state,
            show_sidebar: false,
            show_help: false,
            show_info: false,
            notification: None,
            notification_time: None,
            mode: AppMode::Normal,
            finished,
        })
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_time = Some(Instant::now());
    }

    fn reading_state(&self) -> ReadingState {
        ReadingState {
            current_page: self.controller.current_page(),
            finished: self.finished,
            source_path: self.story_key.to_string_lossy().to_string(),
        }
    }

    fn save(&self) {
        if let Err(err) = state::save_state(&self.story_key, &self.reading_state()) {
            log::warn!("could not save reading position: {err}");
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.controller.current_page() > 1 {
            self.notify(format!("Resumed at page {}", self.controller.current_page()));
        }

        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = execute!(
                io::stdout(),
                DisableMouseCapture,
                terminal::LeaveAlternateScreen,
                cursor::Show
            );
            let _ = terminal::disable_raw_mode();
            original_hook(info);
        }));

        terminal::enable_raw_mode().into_diagnostic()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .into_diagnostic()?;

        let _guard = TerminalGuard;

        let picker = Picker::from_query_stdio()
            .inspect_err(|err| log::info!("no terminal graphics support: {err}"))
            .ok();
        self.renderer = Some(BookRenderer::new(
            self.theme.clone(),
            self.config.layout,
            picker,
        ));

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).into_diagnostic()?;

        let result = self.main_loop(&mut terminal);

        // Nothing may land after the view is gone.
        self.controller.cancel_flip();
        self.save();

        drop(_guard);
        let _ = panic::take_hook();

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            if let Some(t) = self.notification_time
                && t.elapsed() >= NOTIFICATION_TTL
            {
                self.notification = None;
                self.notification_time = None;
            }

            self.controller.poll();
            self.drain_flip_events();
            self.step_autoplay();

            let current = self.controller.current_page();
            if let Some(renderer) = self.renderer.as_mut() {
                renderer.load_illustration(&self.story, current);
                if let Some(preview) = self.controller.preview_page() {
                    renderer.load_illustration(&self.story, preview);
                }
            }

            terminal.draw(|f| self.render_ui(f)).into_diagnostic()?;

            if event::poll(self.poll_timeout()).into_diagnostic()? {
                match event::read().into_diagnostic()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if !self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(_, _) => self.drop_gesture(),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        if self.controller.phase() != Phase::Idle {
            return self
                .controller
                .time_until_commit()
                .map_or(FRAME, |remaining| remaining.clamp(Duration::from_millis(1), FRAME));
        }

        match &self.mode {
            AppMode::Autoplay { last_advance } => self
                .autoplay_delay
                .saturating_sub(last_advance.elapsed())
                .clamp(Duration::from_millis(1), IDLE_POLL),
            _ => IDLE_POLL,
        }
    }

    fn drain_flip_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                FlipEvent::PageChanged { page, direction } => {
                    log::info!("turned {direction} to page {page}");
                    self.tree_state.select(vec![page]);
                    self.save();
                }
                FlipEvent::StoryComplete => {
                    self.finished = true;
                    self.mode = AppMode::Finished;
                    self.save();
                }
            }
        }
    }

    fn step_autoplay(&mut self) {
        let AppMode::Autoplay {
            ref mut last_advance,
        } = self.mode
        else {
            return;
        };

        if last_advance.elapsed() < self.autoplay_delay || !self.controller.is_idle() {
            return;
        }

        *last_advance = Instant::now();
        if !self.controller.next_page() {
            // Last page: the StoryComplete event switches to the end card.
            log::debug!("autoplay reached the end");
        }
    }

    fn book_bounds(&self) -> Option<Bounds> {
        let area = self.renderer.as_ref()?.area();
        (!area.is_empty()).then(|| {
            Bounds::new(
                f32::from(area.x),
                f32::from(area.y),
                f32::from(area.width),
                f32::from(area.height),
            )
        })
    }

    fn sidebar_area(&self, frame_area: Rect) -> Option<Rect> {
        self.show_sidebar.then(|| Rect {
            width: self.config.sidebar_width.min(frame_area.width),
            ..frame_area
        })
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (f32::from(mouse.column), f32::from(mouse.row));

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.controller.next_page();
            }
            MouseEventKind::ScrollUp => {
                self.controller.prev_page();
            }
            MouseEventKind::Down(MouseButton::Left)
                if self.show_sidebar && mouse.column < self.config.sidebar_width =>
            {
                self.tree_state
                    .click_at(Position::new(mouse.column, mouse.row));
                if let Some(&page) = self.tree_state.selected().last() {
                    self.controller.go_to_page(page);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(bounds) = self.book_bounds().filter(|b| b.contains(x, y)) else {
                    return;
                };
                self.press_at = Some((mouse.column, mouse.row));
                match self.config.gesture {
                    GestureMode::Drag => {
                        self.controller.start_drag(x, y);
                    }
                    GestureMode::Swipe => {
                        // Mouse positions are cells, so the threshold follows the book.
                        self.swipe = SwipeDetector::for_width(bounds.width);
                        self.swipe.press(x, y);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.config.gesture == GestureMode::Drag
                    && let Some(bounds) = self.book_bounds()
                {
                    self.controller.update_drag(x, y, bounds);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed_at = self.press_at.take();
                let committed = match self.config.gesture {
                    GestureMode::Drag => self.controller.end_drag(),
                    GestureMode::Swipe => {
                        match self.swipe.release(x, y).and_then(Swipe::flip_direction) {
                            Some(FlipDirection::Next) => self.controller.next_page(),
                            Some(FlipDirection::Previous) => self.controller.prev_page(),
                            None => false,
                        }
                    }
                };

                if !committed && pressed_at == Some((mouse.column, mouse.row)) {
                    self.click_zone(x);
                }
            }
            _ => {}
        }
    }

    /// A resize mid-gesture would skew its geometry.
    fn drop_gesture(&mut self) {
        if self.controller.phase() == Phase::Dragging {
            self.controller.cancel_flip();
        }
        if self.swipe.is_tracking() {
            log::debug!("resize dropped a swipe in progress");
            self.swipe.reset();
        }
        self.press_at = None;
    }

    /// A tap without travel turns toward the half of the book it landed on.
    fn click_zone(&mut self, x: f32) {
        let Some(bounds) = self.book_bounds() else {
            return;
        };

        if x > bounds.center_x() {
            self.controller.next_page();
        } else {
            self.controller.prev_page();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.notification = None;
        self.notification_time = None;

        if let AppMode::GoToPage { ref mut input } = self.mode {
            match key.code {
                KeyCode::Esc => {
                    self.mode = AppMode::Normal;
                }
                KeyCode::Enter => {
                    let parsed = input.parse::<usize>();
                    self.mode = AppMode::Normal;
                    if let Ok(page) = parsed {
                        let total = self.controller.total_pages();
                        if !(1..=total).contains(&page) {
                            self.notify(format!("Page must be between 1 and {total}"));
                        } else if !self.controller.go_to_page(page) {
                            self.notify(format!("Already on page {page}"));
                        }
                    }
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    input.push(c);
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                _ => {}
            }
            return true;
        }

        if let AppMode::Finished = self.mode {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return false,
                KeyCode::Char('r') | KeyCode::Home => {
                    self.mode = AppMode::Normal;
                    self.controller.go_to_page(1);
                }
                _ => {
                    self.mode = AppMode::Normal;
                }
            }
            return true;
        }

        if let AppMode::Autoplay { .. } = self.mode {
            self.mode = AppMode::Normal;
            self.notify("Autoplay stopped");
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('s')
            ) {
                return true;
            }
        }

        if self.show_help {
            self.show_help = false;
            return true;
        }

        if self.show_info {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('i')) {
                self.show_info = false;
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return false;
            }
            KeyCode::Tab => {
                self.show_sidebar = !self.show_sidebar;
            }
            KeyCode::Up if self.show_sidebar => {
                self.tree_state.key_up();
            }
            KeyCode::Down if self.show_sidebar => {
                self.tree_state.key_down();
            }
            KeyCode::Enter if self.show_sidebar => {
                if let Some(&page) = self.tree_state.selected().last() {
                    self.controller.go_to_page(page);
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::PageDown => {
                self.controller.next_page();
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                self.controller.prev_page();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.controller.go_to_page(1);
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.controller.go_to_page(self.controller.total_pages());
            }
            KeyCode::Char('x') => {
                if self.controller.cancel_flip() {
                    self.notify("Page turn cancelled");
                }
            }
            KeyCode::Char(':') => {
                self.mode = AppMode::GoToPage {
                    input: String::new(),
                };
            }
            KeyCode::Char('s') => {
                self.mode = AppMode::Autoplay {
                    last_advance: Instant::now(),
                };
                self.notify(format!(
                    "Autoplay started ({:.1}s) -- any key stops",
                    self.autoplay_delay.as_secs_f32()
                ));
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char('i') => {
                self.show_info = !self.show_info;
            }
            _ => {}
        }

        true
    }

    fn render_ui(&mut self, frame: &mut Frame) {
        let full = frame.area();
        let sidebar = self.sidebar_area(full);
        let content = match sidebar {
            Some(side) => Rect {
                x: full.x + side.width,
                width: full.width - side.width,
                ..full
            },
            None => full,
        };

        if let Some(side) = sidebar {
            self.render_sidebar(frame, side);
        }

        let [book_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(content);
        self.render_book(frame, book_area);
        self.render_status_bar(frame, status_area);

        if let Some(ref msg) = self.notification {
            self.render_notification(frame, content, msg);
        }

        if self.show_help {
            self.render_help_overlay(frame);
        }

        if self.show_info {
            self.render_info_overlay(frame);
        }

        match self.mode {
            AppMode::GoToPage { ref input } => self.render_goto_page_dialog(frame, input),
            AppMode::Autoplay { .. } => self.render_autoplay_indicator(frame),
            AppMode::Finished => self.render_finished_card(frame),
            AppMode::Normal => {}
        }
    }

    fn render_book(&mut self, frame: &mut Frame, area: Rect) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        renderer.set_area(area);
        if let Some(view) = FlipView::capture(&self.story, &self.controller) {
            renderer.render(&view, frame.buffer_mut());
        }
    }

    fn build_tree_items(&self) -> Vec<TreeItem<'static, usize>> {
        let current = self.controller.current_page();

        self.story
            .pages
            .iter()
            .enumerate()
            .map(|(idx, page)| {
                let number = idx + 1;
                let marker = if number == current { " <" } else { "" };
                let preview: String = page.text.chars().take(16).collect();
                TreeItem::new_leaf(number, format!("{number:>3}. {preview}{marker}"))
            })
            .collect()
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        let items = self.build_tree_items();
        let Ok(tree) = Tree::new(&items) else {
            return;
        };

        let tree = tree
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Pages ")
                    .style(Style::default().fg(self.theme.accent)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(tree, area, &mut self.tree_state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let state = self.controller.state();
        let phase = match self.controller.phase() {
            Phase::Idle => String::new(),
            Phase::Dragging => format!(
                "| dragging {} {:>3.0}% ",
                state.flip_direction,
                state.flip_progress * 100.0
            ),
            Phase::Committing => format!("| turning {} ", state.flip_direction),
        };

        let autoplay = match self.mode {
            AppMode::Autoplay { .. } => "| AUTOPLAY ",
            _ => "",
        };

        let status_text = format!(
            " Page {}/{} ({:.0}%) {}{}| [:] GoTo | [?] Help | [q] Quit",
            self.controller.current_page(),
            self.controller.total_pages(),
            self.controller.progress_percent(),
            phase,
            autoplay,
        );

        let status_bar = Paragraph::new(Line::from(vec![Span::styled(
            status_text,
            Style::default().fg(Color::Gray),
        )]));

        frame.render_widget(status_bar, area);
    }

    fn render_notification(&self, frame: &mut Frame, area: Rect, message: &str) {
        let notification_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + area.height / 2,
            width: area.width / 2,
            height: 3,
        }
        .intersection(frame.area());

        frame.render_widget(Clear, notification_area);
        let notification = Paragraph::new(message)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Notification")
                    .style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(notification, notification_area);
    }

    fn centered_popup(frame: &Frame, width: u16, height: u16) -> Rect {
        let area = frame.area();
        let width = width.min(area.width.saturating_sub(4));
        let height = height.min(area.height.saturating_sub(2));
        Rect {
            x: area.width.saturating_sub(width) / 2,
            y: area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn render_goto_page_dialog(&self, frame: &mut Frame, input: &str) {
        let popup_area = Self::centered_popup(frame, 40, 5);
        frame.render_widget(Clear, popup_area);

        let display_text = format!("Page (1-{}): {}_", self.controller.total_pages(), input);
        let dialog = Paragraph::new(display_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Go to Page ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(dialog, popup_area);
    }

    fn render_info_overlay(&self, frame: &mut Frame) {
        let popup_area = Self::centered_popup(frame, 64, 20);
        frame.render_widget(Clear, popup_area);

        let label = |key: &str| {
            Span::styled(
                format!("  {key}: "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let mut lines = vec![Line::from(vec![
            label("Title"),
            Span::raw(self.story.title.clone()),
        ])];
        if let Some(ref author) = self.story.author {
            lines.push(Line::from(vec![label("Author"), Span::raw(author.clone())]));
        }
        if let Some(ref summary) = self.story.summary {
            lines.push(Line::from(vec![label("Summary"), Span::raw(summary.clone())]));
        }

        let media_pages = self
            .story
            .pages
            .iter()
            .filter(|p| p.assets().next().is_some())
            .count();
        let video_pages = self
            .story
            .pages
            .iter()
            .filter(|p| {
                p.assets()
                    .any(|a| matches!(MediaKind::classify(a), MediaKind::Video(_)))
            })
            .count();

        lines.push(Line::from(""));
        lines.push(Line::from(format!("  Pages: {}", self.story.page_count())));
        lines.push(Line::from(format!("  Pages with media: {media_pages}")));
        lines.push(Line::from(format!("  Pages with video: {video_pages}")));
        lines.push(Line::from(format!(
            "  Flip: {} ms, drag threshold {:.2}",
            self.controller.config().flip_duration.as_millis(),
            self.controller.config().drag_threshold
        )));
        lines.push(Line::from(format!("  Theme: {}", self.theme.name)));
        lines.push(Line::from(""));
        lines.push(Line::from("  Press [i] or [Esc] to close"));

        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Story Info ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Magenta)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(panel, popup_area);
    }

    fn render_autoplay_indicator(&self, frame: &mut Frame) {
        let area = frame.area();
        let indicator_width = 24.min(area.width);
        let indicator_area = Rect {
            x: area.width.saturating_sub(indicator_width).saturating_sub(1),
            y: 0,
            width: indicator_width,
            height: 3.min(area.height),
        };

        frame.render_widget(Clear, indicator_area);
        let text = format!("Autoplay ({:.1}s)", self.autoplay_delay.as_secs_f32());
        let widget = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Green)),
            )
            .style(Style::default().fg(Color::White));
        frame.render_widget(widget, indicator_area);
    }

    fn render_finished_card(&self, frame: &mut Frame) {
        let popup_area = Self::centered_popup(frame, 44, 7);
        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(Span::styled(
                "The End",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
            Line::from(format!("You finished \"{}\"!", self.story.title)).centered(),
            Line::from("[r] Read again   [q] Quit").centered(),
        ];

        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().fg(self.theme.accent)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });

        frame.render_widget(card, popup_area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let popup_area = Self::centered_popup(frame, 64, 30);
        frame.render_widget(Clear, popup_area);

        let heading = |text: &'static str, color: Color| {
            Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD).fg(color),
            ))
        };

        let gesture_line = match self.config.gesture {
            GestureMode::Drag => "  Drag page edge    Turn page (release past the threshold)",
            GestureMode::Swipe => "  Swipe left/right  Next/previous page",
        };

        let lines = vec![
            heading("Turning pages", Color::Cyan),
            Line::from("  l, Right, Space   Next page"),
            Line::from("  h, Left           Previous page"),
            Line::from("  g, Home           First page"),
            Line::from("  G, End            Last page"),
            Line::from("  :                 Go to page (type number)"),
            Line::from("  x                 Cancel a page turn in progress"),
            Line::from(gesture_line),
            Line::from("  Click left/right  Previous/next page"),
            Line::from("  Scroll wheel      Previous/next page"),
            Line::from(""),
            heading("Panels", Color::Magenta),
            Line::from("  Tab               Toggle page list"),
            Line::from("  Up/Down, Enter    Choose from page list"),
            Line::from("  i                 Story info"),
            Line::from("  s                 Autoplay (any key stops)"),
            Line::from(""),
            heading("Other", Color::Gray),
            Line::from("  ?                 Toggle this help"),
            Line::from("  q, Esc, Ctrl-c    Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "  Your place is saved automatically.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let help = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Controls ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(help, popup_area);
    }
}
