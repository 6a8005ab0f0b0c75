// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component messages are forwarded to their owners; the effects they
//! return are turned into network tasks or scroll operations here.

use super::{App, Message};
use crate::error::Error;
use crate::gallery::{DecodedImage, GalleryIndex, ImageId, LoadedThumbnail};
use crate::lightbox::{self, Attempt, Effect as LightboxEffect};
use crate::menu::{self, Effect as MenuEffect};
use crate::ui::grid::{self, GRID_SCROLLABLE_ID};
use crate::ui::top_bar;
use iced::widget::{operation, Id};
use iced::{Size, Task};

impl App {
    pub(super) fn fetch_index(&mut self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            self.grid.fail("error-config");
            return Task::none();
        };
        self.grid.set_loading();
        Task::perform(
            async move { client.fetch_index().await },
            Message::IndexLoaded,
        )
    }

    pub(super) fn on_index_loaded(&mut self, result: Result<GalleryIndex, Error>) -> Task<Message> {
        match result {
            Ok(index) => {
                tracing::info!(
                    thumbnails = index.thumbnails().count(),
                    directories = index.directories().count(),
                    "gallery index loaded"
                );
                self.menu = menu::State::build(&index);
                self.grid.load(index);
                self.request_visible_thumbnails()
            }
            Err(err) => {
                tracing::error!(error = %err, "could not load gallery index");
                self.grid.fail(err.i18n_key());
                Task::none()
            }
        }
    }

    pub(super) fn on_thumbnail_loaded(
        &mut self,
        id: ImageId,
        result: Result<DecodedImage, Error>,
    ) -> Task<Message> {
        let outcome = match result {
            Ok(image) => Some(LoadedThumbnail::new(
                image,
                self.grid.index.display_width,
                self.config.pixelate_factor(),
            )),
            Err(err) => {
                tracing::warn!(%id, error = %err, "thumbnail failed to load");
                None
            }
        };
        self.grid.thumbnails.finish(id, outcome);
        self.grid.relayout();
        self.request_visible_thumbnails()
    }

    /// Starts fetches for tiles that entered the observed region.
    fn request_visible_thumbnails(&mut self) -> Task<Message> {
        let Some(client) = self.client.as_ref() else {
            return Task::none();
        };
        Task::batch(self.grid.take_visible().into_iter().map(|id| {
            let client = client.clone();
            Task::perform(
                async move { client.fetch_thumbnail(id).await },
                move |result| Message::ThumbnailLoaded { id, result },
            )
        }))
    }

    pub(super) fn on_grid_message(&mut self, message: grid::Message) -> Task<Message> {
        match message {
            grid::Message::Scrolled { bounds, offset } => {
                self.grid.scrolled(bounds.size(), offset.y);
                self.request_visible_thumbnails()
            }
            grid::Message::ThumbnailClicked(id) => {
                self.on_lightbox_message(lightbox::Message::Open(id))
            }
            grid::Message::ThumbnailContext(id) => {
                let Some(client) = self.client.clone() else {
                    return Task::none();
                };
                Task::perform(
                    async move { client.open_context(id).await },
                    move |result| Message::ContextAnswered { id, result },
                )
            }
        }
    }

    pub(super) fn on_lightbox_message(&mut self, message: lightbox::Message) -> Task<Message> {
        let (effect, task) = self.lightbox.handle(message, &self.grid.index);
        let task = task.map(Message::Lightbox);
        match effect {
            LightboxEffect::None => task,
            LightboxEffect::FetchImage(request) => {
                let Some(client) = self.client.clone() else {
                    return task;
                };
                let fetch = Task::perform(
                    async move { client.fetch_image(request).await },
                    move |result| {
                        Message::Lightbox(lightbox::Message::ImageFetched { request, result })
                    },
                );
                Task::batch([task, fetch])
            }
            LightboxEffect::OpenExternally(id) => {
                if let Some(client) = self.client.as_ref() {
                    open_externally(&client.image_url(id, Attempt::Initial));
                }
                task
            }
        }
    }

    pub(super) fn on_menu_message(&mut self, message: menu::Message) -> Task<Message> {
        match self.menu.handle(message) {
            MenuEffect::None => Task::none(),
            MenuEffect::ScrollTo(target) => match self.grid.layout.header_offset(&target) {
                Some(y) => self.scroll_grid_to(y),
                None => {
                    tracing::debug!(%target, "menu target not in layout");
                    Task::none()
                }
            },
        }
    }

    pub(super) fn on_top_bar_message(&mut self, message: top_bar::Message) -> Task<Message> {
        match message {
            top_bar::Message::ToggleMenu => self.on_menu_message(menu::Message::Toggle),
            top_bar::Message::ToggleScheme => {
                self.scheme = self.scheme.toggled();
                self.app_state.scheme = Some(self.scheme);
                if let Some(key) = self.app_state.save() {
                    self.notice = Some(key);
                }
                Task::none()
            }
            top_bar::Message::BackToTop => self.scroll_grid_to(0.0),
            top_bar::Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    pub(super) fn on_window_resized(&mut self, size: Size) -> Task<Message> {
        if size == self.window_size {
            return Task::none();
        }
        self.window_size = size;
        self.grid.resize(size);
        let lightbox_task = self.on_lightbox_message(lightbox::Message::ViewportResized(size));
        Task::batch([lightbox_task, self.request_visible_thumbnails()])
    }

    fn scroll_grid_to(&mut self, y: f32) -> Task<Message> {
        let target = self.grid.scroll_target(y);
        let snap = operation::snap_to(Id::new(GRID_SCROLLABLE_ID), target);
        Task::batch([snap, self.request_visible_thumbnails()])
    }
}

/// The context endpoint's answer is not used beyond logging.
pub(super) fn log_context_answer(id: ImageId, result: &Result<serde_json::Value, Error>) {
    match result {
        Ok(answer) => tracing::debug!(%id, %answer, "context action accepted"),
        Err(err) => tracing::warn!(%id, error = %err, "context action failed"),
    }
}

/// Hands the full image to the system's default viewer or browser.
fn open_externally(url: &str) {
    match open::that_detached(url) {
        Ok(()) => tracing::debug!(%url, "opened image externally"),
        Err(err) => tracing::warn!(%url, error = %err, "could not open image externally"),
    }
}
