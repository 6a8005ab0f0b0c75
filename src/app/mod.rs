// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid, the lightbox
//! and the directory menu.
//!
//! The `App` struct wires together the gallery model, the network client,
//! localization and persisted preferences, and translates component effects
//! into tasks such as image fetches or scroll operations.

mod grid_state;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::GalleryClient;
use crate::i18n::fluent::I18n;
use crate::lightbox;
use crate::menu;
use crate::ui::theming::Scheme;
use grid_state::GridState;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// `None` when the configured server URL is unusable.
    client: Option<GalleryClient>,
    grid: GridState,
    lightbox: lightbox::State,
    menu: menu::State,
    scheme: Scheme,
    app_state: persisted_state::AppState,
    window_size: Size,
    /// i18n key of a startup warning shown in the top bar.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("server", &self.client.as_ref().map(|c| c.base_url().as_str()))
            .field("status", &self.grid.status)
            .field("lightbox", &self.lightbox.phase())
            .field("scheme", &self.scheme)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, persisted state and translations, then starts fetching
    /// the gallery index.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (app_state, state_warning) = persisted_state::AppState::load();
        let scheme = Scheme::resolve(app_state.scheme);

        let server_url = flags
            .server_url
            .clone()
            .unwrap_or_else(|| config.server.url.clone());
        let client = match GalleryClient::new(&server_url) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(url = %server_url, error = %err, "unusable server url");
                None
            }
        };

        let window_size = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);
        let mut grid = GridState::new(config.observer_options(), config.max_height_fraction());
        grid.resize(window_size);
        let mut lightbox = lightbox::State::new(config.zoom_limits(), config.swipe_threshold());
        let _ = lightbox.handle(
            lightbox::Message::ViewportResized(window_size),
            &grid.index,
        );

        let mut app = App {
            i18n,
            config,
            client,
            grid,
            lightbox,
            menu: menu::State::default(),
            scheme,
            app_state,
            window_size,
            notice: config_warning.or(state_warning),
        };

        let task = app.fetch_index();
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let current = self
            .lightbox
            .is_visible()
            .then(|| self.lightbox.viewer().current)
            .flatten()
            .and_then(|id| self.grid.index.thumbnail(id));
        match current {
            Some(item) if !item.name.is_empty() => format!("{} - {app_name}", item.name),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.scheme.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_lightbox_subscription(self.lightbox.is_visible()),
            subscription::create_tick_subscription(self.lightbox.is_loading()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::IndexLoaded(result) => self.on_index_loaded(result),
            Message::ReloadIndex => self.fetch_index(),
            Message::ThumbnailLoaded { id, result } => self.on_thumbnail_loaded(id, result),
            Message::ContextAnswered { id, result } => {
                update::log_context_answer(id, &result);
                Task::none()
            }
            Message::Grid(message) => self.on_grid_message(message),
            Message::Lightbox(message) => self.on_lightbox_message(message),
            Message::Menu(message) => self.on_menu_message(message),
            Message::TopBar(message) => self.on_top_bar_message(message),
            Message::WindowResized(size) => self.on_window_resized(size),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            grid: &self.grid,
            lightbox: &self.lightbox,
            menu: &self.menu,
            scheme: self.scheme,
            notice: self.notice.as_deref(),
        })
    }
}
