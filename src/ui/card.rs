// SPDX-License-Identifier: MPL-2.0
//! The flip card component: messages, update, view, and redraw subscription.
//!
//! `FlipCard` shows one of two images and toggles between them on tap with a
//! directional flip. The face swap happens immediately inside `update`; the
//! transition only decorates the swap visually. A tap with either face
//! missing is a silent no-op.

use crate::config::CardConfig;
use crate::error::Result;
use crate::media::{self, ImageData};
use crate::ui::state::{Face, FaceState};
use crate::ui::transition::FlipTransition;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, mouse_area, Space};
use iced::{ContentFit, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Flip duration applied when none is given.
pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(500);

/// Redraw pulse interval while a flip is in flight (~60 fps).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Surface size used while no face image is set.
const PLACEHOLDER_WIDTH: f32 = 200.0;
const PLACEHOLDER_HEIGHT: f32 = 280.0;

#[derive(Debug, Clone)]
pub enum Message {
    /// Single left press on the card surface.
    Tapped,
    /// Animation frame pulse while a flip is in flight.
    Tick(Instant),
}

/// A card-like image display that flips between a front and a back face.
///
/// Construct it with both faces via [`FlipCard::new`], from a layout
/// description via [`FlipCard::from_config`], or empty via `Default` (images
/// assigned later through the property setters).
#[derive(Debug, Clone)]
pub struct FlipCard {
    front: Option<ImageData>,
    back: Option<ImageData>,
    face: FaceState,
    flip_duration: Duration,
    transition: Option<FlipTransition>,
}

impl Default for FlipCard {
    fn default() -> Self {
        Self {
            front: None,
            back: None,
            face: FaceState::default(),
            flip_duration: DEFAULT_FLIP_DURATION,
            transition: None,
        }
    }
}

impl FlipCard {
    /// Creates a card resting on its back face.
    #[must_use]
    pub fn new(back: ImageData, front: ImageData, duration: Duration) -> Self {
        let mut card = Self::default();
        card.back = Some(back);
        card.front = Some(front);
        card.set_flip_duration(duration);
        card
    }

    /// Creates a card from a layout description, loading any configured
    /// face images from disk.
    pub fn from_config(config: &CardConfig) -> Result<Self> {
        let mut card = Self::default();
        card.flip_duration = Duration::from_secs_f32(config.normalized_flip_duration_secs());
        card.face = FaceState::new(config.is_showing_front);
        if let Some(path) = &config.front {
            card.front = Some(media::load_image(path)?);
        }
        if let Some(path) = &config.back {
            card.back = Some(media::load_image(path)?);
        }
        Ok(card)
    }

    /// Sets the image shown when face-up.
    pub fn set_front(&mut self, front: ImageData) {
        self.front = Some(front);
    }

    /// Sets the image shown when face-down.
    pub fn set_back(&mut self, back: ImageData) {
        self.back = Some(back);
    }

    /// Sets which face is visible, without animating.
    pub fn set_showing_front(&mut self, showing_front: bool) {
        self.face = FaceState::new(showing_front);
    }

    /// Sets the flip duration. Non-positive durations are ignored and the
    /// previous value is kept.
    pub fn set_flip_duration(&mut self, duration: Duration) {
        if duration > Duration::ZERO {
            self.flip_duration = duration;
        }
    }

    #[must_use]
    pub fn is_showing_front(&self) -> bool {
        self.face.is_showing_front()
    }

    #[must_use]
    pub fn flip_duration(&self) -> Duration {
        self.flip_duration
    }

    /// Returns the image currently rendered, if that face is set.
    #[must_use]
    pub fn visible_image(&self) -> Option<&ImageData> {
        match self.face.visible_face() {
            Face::Front => self.front.as_ref(),
            Face::Back => self.back.as_ref(),
        }
    }

    /// Returns true while a flip transition is in flight at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| !t.is_finished(now))
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tapped => self.tap(Instant::now()),
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Handles a tap at `now`: toggles the face and starts the flip.
    ///
    /// Requires both faces to be set; otherwise the tap is a no-op. A tap
    /// during an in-flight flip toggles again and restarts the animation in
    /// the opposite direction.
    pub fn tap(&mut self, now: Instant) {
        if self.front.is_none() || self.back.is_none() {
            #[cfg(debug_assertions)]
            eprintln!("flip_card: tap ignored, front or back face is not set");
            return;
        }
        let direction = self.face.flip();
        self.transition = Some(FlipTransition::start(direction, self.flip_duration, now));
    }

    /// Advances the animation clock, dropping a finished transition.
    pub fn tick(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }

    /// Renders the card surface.
    ///
    /// The visible face is drawn at its natural size; while a flip is in
    /// flight its width is scaled by the transition and kept centered so the
    /// card collapses toward its vertical axis and re-expands. The surface is
    /// always wrapped in a tap area, images set or not.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let (slot_width, slot_height) = self.slot_size();
        let scale = self
            .transition
            .map_or(1.0, |transition| transition.horizontal_scale(now));

        let surface: Element<'_, Message> = match self.visible_image() {
            Some(face) => image(face.handle.clone())
                .content_fit(ContentFit::Fill)
                .width(Length::Fixed((slot_width * scale).max(1.0)))
                .height(Length::Fixed(slot_height))
                .into(),
            None => Space::new()
                .width(Length::Fixed(slot_width))
                .height(Length::Fixed(slot_height))
                .into(),
        };

        let slot = container(surface)
            .width(Length::Fixed(slot_width))
            .height(Length::Fixed(slot_height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        mouse_area(slot).on_press(Message::Tapped).into()
    }

    /// Emits animation frame pulses while a flip is in flight.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.transition.is_some() {
            iced::time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Natural size of the card surface: the visible face's dimensions,
    /// falling back to the hidden face, then to a placeholder.
    fn slot_size(&self) -> (f32, f32) {
        let sized_face = self
            .visible_image()
            .or(self.front.as_ref())
            .or(self.back.as_ref());
        match sized_face {
            Some(face) => (face.width as f32, face.height as f32),
            None => (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT),
        }
    }
}
