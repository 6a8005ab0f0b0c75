// SPDX-License-Identifier: MPL-2.0
//! Full-image request bookkeeping.
//!
//! Every time the lightbox starts loading an image it opens a new
//! generation. A completion is only applied when it belongs to the current
//! generation, so a slow response for an image the user already navigated
//! away from cannot replace what is on screen.

use crate::gallery::ImageId;

/// Which fetch of an image this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// Plain `GET /image/{id}`.
    Initial,
    /// `GET /image/{id}?retry=1`, asking the server to re-encode.
    Reencode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest {
    pub id: ImageId,
    pub generation: u64,
    pub attempt: Attempt,
}

/// What to do after a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Outdated request; nothing to do.
    Stale,
    /// Issue this follow-up request.
    Retry(ImageRequest),
    /// Both attempts failed.
    GiveUp,
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: u64,
    pending: Option<ImageRequest>,
}

impl RequestTracker {
    /// Starts a new generation for `id` and returns its first request.
    pub fn begin(&mut self, id: ImageId) -> ImageRequest {
        self.generation = self.generation.wrapping_add(1);
        let request = ImageRequest {
            id,
            generation: self.generation,
            attempt: Attempt::Initial,
        };
        self.pending = Some(request);
        request
    }

    #[must_use]
    pub fn is_current(&self, request: &ImageRequest) -> bool {
        self.pending.as_ref() == Some(request)
    }

    /// Marks `request` as completed successfully. Returns false if it was stale.
    pub fn complete(&mut self, request: &ImageRequest) -> bool {
        if self.is_current(request) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Records a failure and decides the follow-up. Only the first attempt of
    /// the current generation is retried.
    pub fn fail(&mut self, request: &ImageRequest) -> Failure {
        if !self.is_current(request) {
            return Failure::Stale;
        }
        match request.attempt {
            Attempt::Initial => {
                let retry = ImageRequest {
                    attempt: Attempt::Reencode,
                    ..*request
                };
                self.pending = Some(retry);
                Failure::Retry(retry)
            }
            Attempt::Reencode => {
                self.pending = None;
                Failure::GiveUp
            }
        }
    }

    /// Drops whatever is in flight; its completion will be ignored.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<ImageRequest> {
        self.pending
    }
}
