// SPDX-License-Identifier: MPL-2.0
//! Gallery server model: the parsed index, thumbnails and HTTP client.

pub mod client;
pub mod decoded;
pub mod index;
pub mod thumbnail;

pub use client::GalleryClient;
pub use decoded::DecodedImage;
pub use index::{DirectoryMarker, Direction, GalleryIndex, ImageId, Section, ThumbnailItem};
pub use thumbnail::{crop_height, LoadedThumbnail, ThumbnailState, ThumbnailStore};
