// SPDX-License-Identifier: MPL-2.0
//! Touch gesture recognition for the lightbox.
//!
//! - one finger while zoomed: pan by the finger's movement
//! - one finger otherwise: horizontal swipe, decided when the finger lifts
//! - two fingers: pinch, reported as the ratio between successive distances

use crate::gallery::Direction;
use iced::touch;
use iced::{Point, Vector};
use std::collections::BTreeMap;

/// What a touch event amounts to once interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    None,
    Pan(Vector),
    /// New distance divided by the previous one.
    Pinch(f32),
    Swipe(Direction),
}

#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    fingers: BTreeMap<u64, Point>,
    swipe_origin: Option<Point>,
    pinch_distance: Option<f32>,
}

impl TouchTracker {
    /// Feeds one touch event. `zoomed` tells whether a single finger pans or
    /// swipes; `swipe_threshold` is the horizontal travel needed to navigate.
    pub fn handle(&mut self, event: touch::Event, zoomed: bool, swipe_threshold: f32) -> Gesture {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.fingers.insert(id.0, position);
                match self.fingers.len() {
                    1 => self.swipe_origin = Some(position),
                    2 => {
                        self.swipe_origin = None;
                        self.pinch_distance = self.finger_distance();
                    }
                    _ => self.swipe_origin = None,
                }
                Gesture::None
            }
            touch::Event::FingerMoved { id, position } => {
                let Some(previous) = self.fingers.insert(id.0, position) else {
                    // Finger we never saw go down.
                    self.fingers.remove(&id.0);
                    return Gesture::None;
                };
                if self.fingers.len() >= 2 {
                    self.pinch_step()
                } else if zoomed {
                    Gesture::Pan(position - previous)
                } else {
                    Gesture::None
                }
            }
            touch::Event::FingerLifted { id, position } => {
                let was_single = self.fingers.len() == 1;
                self.fingers.remove(&id.0);
                let gesture = match (was_single, self.swipe_origin) {
                    (true, Some(origin)) if !zoomed => swipe(origin, position, swipe_threshold),
                    _ => Gesture::None,
                };
                self.after_release();
                gesture
            }
            touch::Event::FingerLost { id, .. } => {
                self.fingers.remove(&id.0);
                self.after_release();
                Gesture::None
            }
        }
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn after_release(&mut self) {
        if self.fingers.len() < 2 {
            self.pinch_distance = None;
        }
        if self.fingers.is_empty() {
            self.swipe_origin = None;
        }
    }

    fn pinch_step(&mut self) -> Gesture {
        let Some(distance) = self.finger_distance() else {
            return Gesture::None;
        };
        match self.pinch_distance.replace(distance) {
            Some(previous) if previous > 0.0 => Gesture::Pinch(distance / previous),
            _ => Gesture::None,
        }
    }

    fn finger_distance(&self) -> Option<f32> {
        let mut positions = self.fingers.values();
        let a = positions.next()?;
        let b = positions.next()?;
        Some(a.distance(*b))
    }
}

fn swipe(origin: Point, end: Point, threshold: f32) -> Gesture {
    let dx = end.x - origin.x;
    if dx.abs() < threshold {
        Gesture::None
    } else if dx < 0.0 {
        Gesture::Swipe(Direction::Next)
    } else {
        Gesture::Swipe(Direction::Previous)
    }
}
