// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating viewer state and update logic.
//!
//! ```text
//! Closed --Open(id)--> Loading --fetched--> Open
//!                        |  ^                 |
//!                 failed |  | retry=1         | Navigate / swipe
//!                        +--+                 v
//!                                          Loading (sibling)
//! ```
//!
//! Close, a click on the backdrop or any unbound key return to `Closed`
//! from either `Loading` or `Open`. A click on the open image also closes
//! it and asks for the image to be shown by the system viewer.

use super::gesture::{Gesture, TouchTracker};
use super::keys::Command;
use super::pan;
use super::request::{Failure, ImageRequest, RequestTracker};
use super::rotation::{RotationAngle, RotationMap, Turn};
use super::scale::{Scale, ZoomLimits};
use crate::config::DEFAULT_SWIPE_THRESHOLD;
use crate::error::Error;
use crate::gallery::{DecodedImage, Direction, GalleryIndex, ImageId};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, Point, Size, Task, Vector};
use std::f32::consts::TAU;

/// Identifier of the scrollable that hosts the lightbox image.
pub const SCROLLABLE_ID: &str = "lightbox-image-scrollable";

/// Spinner advance per animation tick, in radians.
const SPINNER_STEP: f32 = 0.15;
/// Pointer travel under which a press and release on the image is a click.
const CLICK_SLOP: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Loading,
    Open,
}

/// Session state of the viewer.
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub phase: Phase,
    pub current: Option<ImageId>,
    pub scale: Scale,
    /// Pan offset in the image frame (before rotation).
    pub translate: Vector,
    pub rotations: RotationMap,
}

impl ViewerState {
    fn new(limits: &ZoomLimits) -> Self {
        Self {
            phase: Phase::Closed,
            current: None,
            scale: Scale::fitted(limits),
            translate: Vector::ZERO,
            rotations: RotationMap::default(),
        }
    }

    #[must_use]
    pub fn rotation(&self) -> RotationAngle {
        self.current
            .map(|id| self.rotations.get(id))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Thumbnail clicked.
    Open(ImageId),
    ImageFetched {
        request: ImageRequest,
        result: Result<DecodedImage, Error>,
    },
    Navigate(Direction),
    Rotate(Turn),
    ZoomIn,
    ZoomOut,
    Close,
    BackgroundClicked,
    /// Left button went down on the image: start dragging. Released without
    /// moving, it counts as a click.
    ImagePressed,
    ViewportResized(Size),
    /// Keyboard, mouse and touch input while the lightbox is showing.
    RawEvent(event::Event),
    SpinnerTick,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchImage(ImageRequest),
    /// Open the full image outside the application.
    OpenExternally(ImageId),
}

/// Screen geometry of the current image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub angle: RotationAngle,
    /// Bounding box of the scaled, rotated image on screen.
    pub bounding: Size,
    pub viewport: Size,
}

/// Mouse drag on the image.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Drag {
    Idle,
    /// Pressed before any cursor position was seen; the first move anchors.
    Pending,
    /// `travel` sums the pointer distance covered since the press.
    Active { anchor: Point, travel: f32 },
}

#[derive(Debug, Clone)]
pub struct State {
    viewer: ViewerState,
    limits: ZoomLimits,
    swipe_threshold: f32,
    requests: RequestTracker,
    /// Image as decoded, unrotated.
    source: Option<DecodedImage>,
    /// `source` turned by the current rotation.
    display: Option<DecodedImage>,
    viewport: Size,
    touch: TouchTracker,
    drag: Drag,
    cursor: Option<Point>,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), DEFAULT_SWIPE_THRESHOLD)
    }
}

impl State {
    #[must_use]
    pub fn new(limits: ZoomLimits, swipe_threshold: f32) -> Self {
        Self {
            viewer: ViewerState::new(&limits),
            limits,
            swipe_threshold,
            requests: RequestTracker::default(),
            source: None,
            display: None,
            viewport: Size::ZERO,
            touch: TouchTracker::default(),
            drag: Drag::Idle,
            cursor: None,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.viewer.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.viewer.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.viewer.phase == Phase::Loading
    }

    #[must_use]
    pub fn display_image(&self) -> Option<&DecodedImage> {
        self.display.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag != Drag::Idle
    }

    #[must_use]
    pub fn can_pan(&self) -> bool {
        self.geometry()
            .is_some_and(|geometry| !pan::fits(geometry.bounding, geometry.viewport))
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Request whose completion is awaited, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<ImageRequest> {
        self.requests.pending()
    }

    #[must_use]
    pub fn geometry(&self) -> Option<Geometry> {
        let source = self.source.as_ref()?;
        let angle = self.viewer.rotation();
        let fitted = pan::fitted_rotated(source.size(), self.viewport, angle);
        Some(Geometry {
            angle,
            bounding: pan::bounding_size(fitted, self.viewer.scale.value(), angle),
            viewport: self.viewport,
        })
    }

    /// Relative scroll position of the image scrollable that renders the
    /// current pan offset.
    #[must_use]
    pub fn scroll_offset(&self) -> RelativeOffset {
        let Some(geometry) = self.geometry() else {
            return RelativeOffset { x: 0.5, y: 0.5 };
        };
        let limit = pan::max_screen_offset(geometry.bounding, geometry.viewport);
        let shift = pan::screen_displacement(self.viewer.translate, geometry.angle);
        let relative = |limit: f32, shift: f32| {
            if limit > 0.0 {
                ((limit - shift) / (2.0 * limit)).clamp(0.0, 1.0)
            } else {
                0.5
            }
        };
        RelativeOffset {
            x: relative(limit.x, shift.x),
            y: relative(limit.y, shift.y),
        }
    }

    pub fn handle(&mut self, message: Message, index: &GalleryIndex) -> (Effect, Task<Message>) {
        match message {
            Message::Open(id) => (self.begin_loading(id), Task::none()),
            Message::ImageFetched { request, result } => self.on_fetched(request, result),
            Message::Navigate(direction) => (self.navigate(direction, index), Task::none()),
            Message::Rotate(turn) => self.rotate(turn),
            Message::ZoomIn => {
                let scale = self.viewer.scale.step_in(&self.limits);
                self.set_scale(scale)
            }
            Message::ZoomOut => {
                let scale = self.viewer.scale.step_out(&self.limits);
                self.set_scale(scale)
            }
            Message::Close | Message::BackgroundClicked => {
                self.close();
                (Effect::None, Task::none())
            }
            Message::ImagePressed => {
                if self.viewer.phase == Phase::Open {
                    self.drag = match self.cursor {
                        Some(position) => Drag::Active {
                            anchor: position,
                            travel: 0.0,
                        },
                        None => Drag::Pending,
                    };
                }
                (Effect::None, Task::none())
            }
            Message::ViewportResized(size) => {
                self.viewport = size;
                (Effect::None, self.reclamp())
            }
            Message::RawEvent(event) => self.on_raw_event(event, index),
            Message::SpinnerTick => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % TAU;
                (Effect::None, Task::none())
            }
        }
    }

    fn begin_loading(&mut self, id: ImageId) -> Effect {
        self.viewer.phase = Phase::Loading;
        self.viewer.current = Some(id);
        self.source = None;
        self.display = None;
        self.drag = Drag::Idle;
        self.spinner_rotation = 0.0;
        let request = self.requests.begin(id);
        tracing::debug!(%id, generation = request.generation, "loading image");
        Effect::FetchImage(request)
    }

    fn on_fetched(
        &mut self,
        request: ImageRequest,
        result: Result<DecodedImage, Error>,
    ) -> (Effect, Task<Message>) {
        match result {
            Ok(image) => {
                if !self.requests.complete(&request) {
                    tracing::debug!(id = %request.id, generation = request.generation, "dropping stale image");
                    return (Effect::None, Task::none());
                }
                let angle = self.viewer.rotations.get(request.id);
                self.display = Some(image.rotated(angle));
                self.source = Some(image);
                self.viewer.current = Some(request.id);
                self.viewer.phase = Phase::Open;
                self.reset_transform();
                (Effect::None, self.sync_scroll())
            }
            Err(err) => match self.requests.fail(&request) {
                Failure::Stale => (Effect::None, Task::none()),
                Failure::Retry(retry) => {
                    tracing::warn!(id = %request.id, error = %err, "image load failed, retrying with re-encode");
                    (Effect::FetchImage(retry), Task::none())
                }
                Failure::GiveUp => {
                    tracing::error!(id = %request.id, error = %err, "image load failed after re-encode retry");
                    (Effect::None, Task::none())
                }
            },
        }
    }

    fn navigate(&mut self, direction: Direction, index: &GalleryIndex) -> Effect {
        if !self.is_visible() {
            return Effect::None;
        }
        match self
            .viewer
            .current
            .and_then(|id| index.sibling(id, direction))
        {
            Some(next) => self.begin_loading(next),
            None => Effect::None,
        }
    }

    fn rotate(&mut self, turn: Turn) -> (Effect, Task<Message>) {
        let (Phase::Open, Some(id), Some(source)) =
            (self.viewer.phase, self.viewer.current, self.source.as_ref())
        else {
            return (Effect::None, Task::none());
        };
        let angle = self.viewer.rotations.turn(id, turn);
        self.display = Some(source.rotated(angle));
        self.reset_transform();
        (Effect::None, self.sync_scroll())
    }

    fn set_scale(&mut self, scale: Scale) -> (Effect, Task<Message>) {
        if self.viewer.phase != Phase::Open {
            return (Effect::None, Task::none());
        }
        self.viewer.scale = scale;
        (Effect::None, self.reclamp())
    }

    fn pan_by(&mut self, delta: Vector) -> Task<Message> {
        let Some(geometry) = self.geometry() else {
            return Task::none();
        };
        if self.viewer.phase != Phase::Open || pan::fits(geometry.bounding, geometry.viewport) {
            return Task::none();
        }
        let local = pan::to_image_frame(delta, geometry.angle);
        self.viewer.translate = pan::clamp_translate(
            self.viewer.translate + local,
            geometry.angle,
            geometry.bounding,
            geometry.viewport,
        );
        self.sync_scroll()
    }

    /// Re-applies containment after the scale or viewport changed. This is
    /// also where a fitting image is re-centered.
    fn reclamp(&mut self) -> Task<Message> {
        let Some(geometry) = self.geometry() else {
            return Task::none();
        };
        self.viewer.translate = pan::clamp_translate(
            self.viewer.translate,
            geometry.angle,
            geometry.bounding,
            geometry.viewport,
        );
        self.sync_scroll()
    }

    fn reset_transform(&mut self) {
        self.viewer.scale = Scale::fitted(&self.limits);
        self.viewer.translate = Vector::ZERO;
        self.drag = Drag::Idle;
    }

    fn close(&mut self) {
        self.viewer.phase = Phase::Closed;
        self.viewer.current = None;
        self.source = None;
        self.display = None;
        self.requests.invalidate();
        self.touch.reset();
        self.drag = Drag::Idle;
        self.reset_transform();
    }

    /// Ends a drag. A press and release that barely moved is a click on the
    /// image, which hands the image to the system viewer and closes.
    fn release_drag(&mut self) -> Effect {
        let clicked = match self.drag {
            Drag::Idle => false,
            Drag::Pending => true,
            Drag::Active { travel, .. } => travel <= CLICK_SLOP,
        };
        self.drag = Drag::Idle;
        if !clicked || self.viewer.phase != Phase::Open {
            return Effect::None;
        }
        match self.viewer.current {
            Some(id) => {
                self.close();
                Effect::OpenExternally(id)
            }
            None => Effect::None,
        }
    }

    fn sync_scroll(&self) -> Task<Message> {
        operation::snap_to(Id::new(SCROLLABLE_ID), self.scroll_offset())
    }

    fn on_raw_event(
        &mut self,
        event: event::Event,
        index: &GalleryIndex,
    ) -> (Effect, Task<Message>) {
        if !self.is_visible() {
            return (Effect::None, Task::none());
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { modified_key, .. }) => {
                match Command::from_key(&modified_key) {
                    Command::Navigate(direction) => (self.navigate(direction, index), Task::none()),
                    Command::Rotate(turn) => self.rotate(turn),
                    Command::ZoomIn => self.handle(Message::ZoomIn, index),
                    Command::ZoomOut => self.handle(Message::ZoomOut, index),
                    Command::Ignore => (Effect::None, Task::none()),
                    Command::Close => {
                        self.close();
                        (Effect::None, Task::none())
                    }
                }
            }
            event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
                };
                if y > 0.0 {
                    self.handle(Message::ZoomIn, index)
                } else if y < 0.0 {
                    self.handle(Message::ZoomOut, index)
                } else {
                    (Effect::None, Task::none())
                }
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Some(position);
                match self.drag {
                    Drag::Idle => (Effect::None, Task::none()),
                    Drag::Pending => {
                        self.drag = Drag::Active {
                            anchor: position,
                            travel: 0.0,
                        };
                        (Effect::None, Task::none())
                    }
                    Drag::Active { anchor, travel } => {
                        self.drag = Drag::Active {
                            anchor: position,
                            travel: travel + anchor.distance(position),
                        };
                        (Effect::None, self.pan_by(position - anchor))
                    }
                }
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                (self.release_drag(), Task::none())
            }
            event::Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor = None;
                self.drag = Drag::Idle;
                (Effect::None, Task::none())
            }
            event::Event::Touch(touch) => {
                let zoomed = self.viewer.scale.is_zoomed();
                match self.touch.handle(touch, zoomed, self.swipe_threshold) {
                    Gesture::None => (Effect::None, Task::none()),
                    Gesture::Pan(delta) => (Effect::None, self.pan_by(delta)),
                    Gesture::Pinch(ratio) => {
                        let scale = self.viewer.scale.pinched(ratio, &self.limits);
                        self.set_scale(scale)
                    }
                    Gesture::Swipe(direction) => (self.navigate(direction, index), Task::none()),
                }
            }
            _ => (Effect::None, Task::none()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::Attempt;
    use crate::test_utils::{assert_abs_diff_eq, blank_image};
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Location, Modifiers};
    use iced::touch::Finger;

    const INDEX: &str = r#"<body data-width="250"><ul class="flex"><li><img data-id="5" /><span class="name">five</span></li><li><img data-id="6" /><span class="name">six</span></li><li><img data-id="7" /><span class="name">seven</span></li></ul><ul class="stretch"><li><div class="dir-container" id="8"><span>dir</span></div></li></ul><ul class="flex"><li><img data-id="9" /><span class="name">nine</span></li></ul></body>"#;

    fn index() -> GalleryIndex {
        GalleryIndex::parse(INDEX).expect("index parses")
    }

    fn lightbox() -> State {
        let mut state = State::default();
        let _ = state.handle(Message::ViewportResized(Size::new(800.0, 600.0)), &index());
        state
    }

    fn image(width: u32, height: u32) -> DecodedImage {
        blank_image(width, height)
    }

    fn expect_fetch(effect: Effect) -> ImageRequest {
        match effect {
            Effect::FetchImage(request) => request,
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    /// Opens `id` and completes its fetch with an image of the given size.
    fn open(state: &mut State, id: u32, width: u32, height: u32) {
        let index = index();
        let (effect, _) = state.handle(Message::Open(ImageId::new(id)), &index);
        let request = expect_fetch(effect);
        let _ = state.handle(
            Message::ImageFetched {
                request,
                result: Ok(image(width, height)),
            },
            &index,
        );
    }

    fn key(key: Key) -> Message {
        Message::RawEvent(event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::KeyQ),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        }))
    }

    fn character(c: &str) -> Message {
        key(Key::Character(c.into()))
    }

    fn touch(event: iced::touch::Event) -> Message {
        Message::RawEvent(event::Event::Touch(event))
    }

    #[test]
    fn opening_goes_through_loading() {
        let mut state = lightbox();
        let (effect, _) = state.handle(Message::Open(ImageId::new(5)), &index());

        let request = expect_fetch(effect);
        assert_eq!(request.id, ImageId::new(5));
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.display_image().is_none());
    }

    #[test]
    fn arrow_right_shows_sibling_with_fresh_transform() {
        let mut state = lightbox();
        open(&mut state, 5, 1600, 1200);
        assert_eq!(state.phase(), Phase::Open);
        assert_abs_diff_eq!(state.viewer().scale.value(), 1.0);
        assert_eq!(state.viewer().translate, Vector::ZERO);

        let _ = state.handle(Message::ZoomIn, &index());
        let (effect, _) = state.handle(key(Key::Named(Named::ArrowRight)), &index());
        let request = expect_fetch(effect);
        assert_eq!(request.id, ImageId::new(6));

        let _ = state.handle(
            Message::ImageFetched {
                request,
                result: Ok(image(100, 100)),
            },
            &index(),
        );
        assert_eq!(state.viewer().current, Some(ImageId::new(6)));
        assert_abs_diff_eq!(state.viewer().scale.value(), 1.0);
        assert_eq!(state.viewer().rotation(), RotationAngle::ZERO);
    }

    #[test]
    fn rotation_is_restored_per_image() {
        let mut state = lightbox();
        open(&mut state, 6, 400, 200);
        let _ = state.handle(character("r"), &index());
        assert_eq!(state.viewer().rotation().degrees(), 90);
        let shown = state.display_image().expect("image shown");
        assert_eq!((shown.width, shown.height), (200, 400));

        open(&mut state, 5, 400, 200);
        assert_eq!(state.viewer().rotation(), RotationAngle::ZERO);

        let _ = state.handle(key(Key::Named(Named::ArrowRight)), &index());
        let request = state.pending_request().expect("sibling requested");
        let _ = state.handle(
            Message::ImageFetched {
                request,
                result: Ok(image(400, 200)),
            },
            &index(),
        );
        assert_eq!(state.viewer().rotation().degrees(), 90);
    }

    #[test]
    fn navigation_stops_at_group_edge() {
        let mut state = lightbox();
        open(&mut state, 7, 100, 100);
        let (effect, _) = state.handle(key(Key::Named(Named::ArrowRight)), &index());
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Open);
        assert_eq!(state.viewer().current, Some(ImageId::new(7)));
    }

    #[test]
    fn failed_fetch_retries_exactly_once() {
        let mut state = lightbox();
        let (effect, _) = state.handle(Message::Open(ImageId::new(7)), &index());
        let first = expect_fetch(effect);

        let (effect, _) = state.handle(
            Message::ImageFetched {
                request: first,
                result: Err(Error::Http("503".into())),
            },
            &index(),
        );
        let retry = expect_fetch(effect);
        assert_eq!(retry.id, ImageId::new(7));
        assert_eq!(retry.attempt, Attempt::Reencode);

        let (effect, _) = state.handle(
            Message::ImageFetched {
                request: retry,
                result: Err(Error::Decode("bad".into())),
            },
            &index(),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Loading);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = lightbox();
        let (effect, _) = state.handle(Message::Open(ImageId::new(5)), &index());
        let stale = expect_fetch(effect);
        let _ = state.handle(Message::Open(ImageId::new(6)), &index());

        let _ = state.handle(
            Message::ImageFetched {
                request: stale,
                result: Ok(image(10, 10)),
            },
            &index(),
        );
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.viewer().current, Some(ImageId::new(6)));
    }

    #[test]
    fn completion_after_close_does_not_reopen() {
        let mut state = lightbox();
        let (effect, _) = state.handle(Message::Open(ImageId::new(5)), &index());
        let request = expect_fetch(effect);
        let _ = state.handle(Message::BackgroundClicked, &index());

        let _ = state.handle(
            Message::ImageFetched {
                request,
                result: Ok(image(10, 10)),
            },
            &index(),
        );
        assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn unbound_key_closes_but_function_keys_do_not() {
        let mut state = lightbox();
        open(&mut state, 5, 100, 100);

        let _ = state.handle(key(Key::Named(Named::F5)), &index());
        let _ = state.handle(key(Key::Named(Named::Shift)), &index());
        assert_eq!(state.phase(), Phase::Open);

        let _ = state.handle(key(Key::Named(Named::Escape)), &index());
        assert_eq!(state.phase(), Phase::Closed);
        assert!(state.viewer().current.is_none());
    }

    #[test]
    fn wheel_zoom_is_clamped() {
        let mut state = lightbox();
        open(&mut state, 5, 1600, 1200);
        let wheel = |y| {
            Message::RawEvent(event::Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y },
            }))
        };

        for _ in 0..50 {
            let _ = state.handle(wheel(1.0), &index());
        }
        assert_abs_diff_eq!(state.viewer().scale.value(), 10.0);

        for _ in 0..50 {
            let _ = state.handle(wheel(-1.0), &index());
        }
        assert_abs_diff_eq!(state.viewer().scale.value(), 1.0);
    }

    #[test]
    fn drag_pans_within_bounds_and_zoom_out_recenters() {
        let mut state = lightbox();
        open(&mut state, 5, 800, 600);
        for _ in 0..3 {
            let _ = state.handle(Message::ZoomIn, &index());
        }

        let moved = |x, y| {
            Message::RawEvent(event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(x, y),
            }))
        };
        let _ = state.handle(moved(400.0, 300.0), &index());
        let _ = state.handle(Message::ImagePressed, &index());
        let _ = state.handle(moved(5000.0, 300.0), &index());

        let geometry = state.geometry().expect("image open");
        let limit = pan::max_screen_offset(geometry.bounding, geometry.viewport);
        assert_abs_diff_eq!(state.viewer().translate.x, limit.x, epsilon = 1e-3);
        assert_abs_diff_eq!(state.scroll_offset().x, 0.0);

        for _ in 0..5 {
            let _ = state.handle(Message::ZoomOut, &index());
        }
        assert_eq!(state.viewer().translate, Vector::ZERO);
    }

    #[test]
    fn press_before_any_cursor_move_still_drags() {
        let mut state = lightbox();
        open(&mut state, 5, 800, 600);
        for _ in 0..3 {
            let _ = state.handle(Message::ZoomIn, &index());
        }

        let moved = |x, y| {
            Message::RawEvent(event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(x, y),
            }))
        };
        let _ = state.handle(Message::ImagePressed, &index());
        assert!(state.is_dragging());
        let _ = state.handle(moved(300.0, 300.0), &index());
        assert_eq!(state.viewer().translate, Vector::ZERO);
        let _ = state.handle(moved(200.0, 300.0), &index());

        assert!(state.is_dragging());
        assert_abs_diff_eq!(state.viewer().translate.x, -100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(state.viewer().translate.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn click_on_image_opens_it_externally() {
        let mut state = lightbox();
        open(&mut state, 5, 400, 300);
        let released = Message::RawEvent(event::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )));

        let _ = state.handle(Message::ImagePressed, &index());
        let (effect, _) = state.handle(released, &index());

        assert_eq!(effect, Effect::OpenExternally(ImageId::new(5)));
        assert_eq!(state.phase(), Phase::Closed);
    }

    #[test]
    fn release_after_drag_keeps_lightbox_open() {
        let mut state = lightbox();
        open(&mut state, 5, 800, 600);
        let _ = state.handle(Message::ZoomIn, &index());
        let moved = |x, y| {
            Message::RawEvent(event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(x, y),
            }))
        };
        let released = Message::RawEvent(event::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )));

        let _ = state.handle(moved(400.0, 300.0), &index());
        let _ = state.handle(Message::ImagePressed, &index());
        let _ = state.handle(moved(360.0, 300.0), &index());
        let _ = state.handle(moved(400.0, 300.0), &index());
        let (effect, _) = state.handle(released, &index());

        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Open);
        assert!(!state.is_dragging());
    }

    #[test]
    fn pinch_to_half_distance_halves_scale_then_clamps() {
        let mut state = lightbox();
        open(&mut state, 5, 800, 600);
        for _ in 0..9 {
            let _ = state.handle(Message::ZoomIn, &index());
        }
        let before = state.viewer().scale.value();

        let _ = state.handle(
            touch(iced::touch::Event::FingerPressed {
                id: Finger(1),
                position: Point::new(100.0, 300.0),
            }),
            &index(),
        );
        let _ = state.handle(
            touch(iced::touch::Event::FingerPressed {
                id: Finger(2),
                position: Point::new(500.0, 300.0),
            }),
            &index(),
        );
        let _ = state.handle(
            touch(iced::touch::Event::FingerMoved {
                id: Finger(2),
                position: Point::new(300.0, 300.0),
            }),
            &index(),
        );
        assert_abs_diff_eq!(state.viewer().scale.value(), before / 2.0, epsilon = 1e-4);

        let _ = state.handle(
            touch(iced::touch::Event::FingerMoved {
                id: Finger(2),
                position: Point::new(110.0, 300.0),
            }),
            &index(),
        );
        assert_abs_diff_eq!(state.viewer().scale.value(), 1.0);
    }

    #[test]
    fn swipe_left_navigates_when_not_zoomed() {
        let mut state = lightbox();
        open(&mut state, 5, 100, 100);
        let _ = state.handle(
            touch(iced::touch::Event::FingerPressed {
                id: Finger(1),
                position: Point::new(600.0, 300.0),
            }),
            &index(),
        );
        let (effect, _) = state.handle(
            touch(iced::touch::Event::FingerLifted {
                id: Finger(1),
                position: Point::new(300.0, 310.0),
            }),
            &index(),
        );
        assert_eq!(expect_fetch(effect).id, ImageId::new(6));
    }

    #[test]
    fn input_is_ignored_while_closed() {
        let mut state = lightbox();
        let (effect, _) = state.handle(key(Key::Named(Named::ArrowRight)), &index());
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Closed);
    }
}
