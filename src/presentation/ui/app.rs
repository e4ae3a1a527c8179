//! Main application orchestrator.

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::use_cases::OrderSession;
use crate::domain::entities::OrderState;
use crate::domain::keybinding::Keybind;
use crate::domain::screen::ScreenId;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{CheckoutScreen, MenuScreen, StartScreen, ViewAction};
use crate::presentation::widgets::{FooterBar, HeaderBar, MenuListState, StatusBar};

const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal front end for one ordering session.
pub struct App {
    session: OrderSession,
    registry: CommandRegistry,
    order_rx: watch::Receiver<OrderState>,
    order: OrderState,
    screen: ScreenId,
    menu_state: MenuListState,
    /// Shown status and when it expires. `None` expiry never expires.
    notification: Option<(StatusBar, Option<Instant>)>,
    notification_duration: Duration,
}

impl App {
    /// Wraps a session. Notifications stay visible for `notification_duration`.
    #[must_use]
    pub fn new(session: OrderSession, notification_duration: Duration) -> Self {
        let mut order_rx = session.subscribe();
        let order = order_rx.borrow_and_update().clone();
        let screen = session.current_screen();

        Self {
            session,
            registry: CommandRegistry::new(),
            order_rx,
            order,
            screen,
            menu_state: MenuListState::default(),
            notification: None,
            notification_duration,
        }
    }

    /// Runs the event loop until a quit key.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;

        info!(
            submitted = self.session.submitted_count(),
            "Application exiting normally"
        );
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        loop {
            tokio::select! {
                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        break;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                Ok(()) = self.order_rx.changed() => {
                    self.order = self.order_rx.borrow_and_update().clone();
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = notification_interval.tick() => {
                    if self.expire_notification(Instant::now()) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(..) => EventResult::Consumed,
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        let Some(action) = self.view_action(key) else {
            return EventResult::Continue;
        };
        self.dispatch(action);
        EventResult::Consumed
    }

    /// Routes the key to the active screen, which decides what it means.
    fn view_action(&mut self, key: KeyEvent) -> Option<ViewAction> {
        match self.screen {
            ScreenId::Start => {
                let view = StartScreen::new();
                let action = self.registry.find_action(key, view.actions())?;
                Some(view.handle_action(action))
            }
            ScreenId::Checkout => {
                let view = CheckoutScreen::new(&self.order, self.session.policy().tax_rate);
                let action = self.registry.find_action(key, view.actions())?;
                Some(view.handle_action(action))
            }
            screen => {
                let category = screen.menu_category()?;
                let view = MenuScreen::new(
                    category,
                    self.session.catalog().items(category),
                    &self.order,
                );
                let action = self.registry.find_action(key, view.actions())?;
                Some(view.handle_action(action, &mut self.menu_state))
            }
        }
    }

    fn dispatch(&mut self, action: ViewAction) {
        match action {
            ViewAction::None => return,
            ViewAction::StartOrder => {
                if let Err(e) = self.session.on_start_order_button_clicked() {
                    warn!(error = %e, "Start order refused");
                }
            }
            ViewAction::SelectionChanged(item) => {
                debug!(item = %item, "Selection changed");
                if let Err(e) = self.session.on_selection_changed(item) {
                    warn!(error = %e, "Selection refused");
                    self.notify(StatusBar::error(e.to_string()));
                }
            }
            ViewAction::Next => match self.session.on_next_button_clicked() {
                Ok(Some(receipt)) => self.notify(StatusBar::success(receipt.summary())),
                Ok(None) => {}
                Err(e) if e.is_incomplete() => {
                    let message = self.screen.menu_category().map_or_else(
                        || e.to_string(),
                        |category| {
                            format!(
                                "Choose your {} first",
                                category.display_name().to_lowercase()
                            )
                        },
                    );
                    self.notify(StatusBar::warning(message));
                }
                Err(e) => {
                    warn!(error = %e, "Next refused");
                    self.notify(StatusBar::error(e.to_string()));
                }
            },
            ViewAction::Cancel => {
                self.session.on_cancel_button_clicked();
                self.notify(StatusBar::info("Order cancelled"));
            }
        }
        self.sync();
    }

    fn sync(&mut self) {
        if self.order_rx.has_changed().unwrap_or(false) {
            self.order = self.order_rx.borrow_and_update().clone();
        }

        let screen = self.session.current_screen();
        if screen != self.screen {
            debug!(from = %self.screen, to = %screen, "Screen changed");
            self.screen = screen;
            self.menu_state = screen
                .menu_category()
                .map(|category| {
                    MenuScreen::new(
                        category,
                        self.session.catalog().items(category),
                        &self.order,
                    )
                    .initial_state()
                })
                .unwrap_or_default();
        }
    }

    fn notify(&mut self, status: StatusBar) {
        let expires_at = Instant::now().checked_add(self.notification_duration);
        self.notification = Some((status, expires_at));
    }

    fn expire_notification(&mut self, now: Instant) -> bool {
        match &self.notification {
            Some((_, Some(expires_at))) if *expires_at <= now => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    fn status_bar(&self) -> StatusBar {
        let status = self
            .notification
            .as_ref()
            .map_or_else(StatusBar::new, |(status, _)| status.clone());
        if self.screen == ScreenId::Start {
            status
        } else {
            status.subtotal(self.order.subtotal())
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(HeaderBar::new(self.screen), header_area);

        let commands: Vec<Keybind> = match self.screen {
            ScreenId::Start => {
                let view = StartScreen::new();
                frame.render_widget(&view, body_area);
                view.get_commands(&self.registry)
            }
            ScreenId::Checkout => {
                let view = CheckoutScreen::new(&self.order, self.session.policy().tax_rate);
                let commands = view.get_commands(&self.registry);
                frame.render_widget(view, body_area);
                commands
            }
            screen => match screen.menu_category() {
                Some(category) => {
                    let view = MenuScreen::new(
                        category,
                        self.session.catalog().items(category),
                        &self.order,
                    )
                    .can_advance(self.session.can_advance());
                    let commands = view.get_commands(&self.registry);
                    frame.render_stateful_widget(view, body_area, &mut self.menu_state);
                    commands
                }
                None => Vec::new(),
            },
        };

        frame.render_widget(&self.status_bar(), status_area);
        frame.render_widget(FooterBar::new(&commands), footer_area);
    }
}
