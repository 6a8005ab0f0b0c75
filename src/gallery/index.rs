// SPDX-License-Identifier: MPL-2.0
//! Gallery index document model and parser.
//!
//! The server's `/` page is HTML written by hand with `fmt.Fprintf`-style
//! templating: void elements are left unclosed and names are not escaped.
//! The parser is therefore lenient. It only looks at the handful of
//! elements it needs and ignores everything else:
//!
//! ```text
//! <body data-width="250" data-fit="true">
//! <div class="menu" id="menu">...</div>
//! <ul class="flex">
//!   <li><img title="a.jpg" data-id="5" /><span class="name">a.jpg</span></li>
//! </ul>
//! <ul class="stretch">
//!   <li><div class="dir-container" id="9"><span>holidays</span></div></li>
//! </ul>
//! ```

use crate::config::DEFAULT_DISPLAY_WIDTH;
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt;
use std::str::FromStr;

/// Server-assigned identifier of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u32);

impl ImageId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Navigation direction within a thumbnail group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailItem {
    pub id: ImageId,
    /// Tooltip text: the file name, or the relative path when the server
    /// lists a single directory.
    pub title: String,
    /// Caption shown under the tile.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryMarker {
    /// Element id used as the scroll target.
    pub id: String,
    pub label: String,
}

/// One `<ul>` run of the index, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Thumbnails(Vec<ThumbnailItem>),
    Directories(Vec<DirectoryMarker>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryIndex {
    /// Tile width in logical pixels (`data-width`).
    pub display_width: u32,
    /// Crop tall thumbnails (`data-fit`).
    pub fit: bool,
    /// Whether the server wants the directory menu shown.
    pub show_menu: bool,
    pub sections: Vec<Section>,
}

impl Default for GalleryIndex {
    /// An index with no sections, used until the server has answered.
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            fit: false,
            show_menu: false,
            sections: Vec::new(),
        }
    }
}

impl GalleryIndex {
    /// Parses the index document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`] when the markup cannot be tokenized or has no
    /// `<body>` element.
    pub fn parse(html: &str) -> Result<Self> {
        IndexParser::default().run(html)
    }

    pub fn thumbnails(&self) -> impl Iterator<Item = &ThumbnailItem> {
        self.sections.iter().flat_map(|section| match section {
            Section::Thumbnails(items) => items.as_slice(),
            Section::Directories(_) => &[],
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryMarker> {
        self.sections.iter().flat_map(|section| match section {
            Section::Directories(markers) => markers.as_slice(),
            Section::Thumbnails(_) => &[],
        })
    }

    #[must_use]
    pub fn thumbnail(&self, id: ImageId) -> Option<&ThumbnailItem> {
        self.thumbnails().find(|item| item.id == id)
    }

    /// Neighbour of `id` within its own thumbnail group. Groups are never
    /// crossed, and there is no wrap-around.
    #[must_use]
    pub fn sibling(&self, id: ImageId, direction: Direction) -> Option<ImageId> {
        self.sections.iter().find_map(|section| {
            let Section::Thumbnails(items) = section else {
                return None;
            };
            let position = items.iter().position(|item| item.id == id)?;
            let target = match direction {
                Direction::Next => position.checked_add(1)?,
                Direction::Previous => position.checked_sub(1)?,
            };
            items.get(target).map(|item| item.id)
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Debug)]
enum Capture {
    Caption,
    DirectoryLabel,
}

#[derive(Debug, Default)]
struct IndexParser {
    display_width: Option<u32>,
    fit: bool,
    show_menu: Option<bool>,
    seen_body: bool,
    sections: Vec<Section>,
    open: Option<Section>,
    pending_directory: Option<String>,
    capture: Option<Capture>,
    text: String,
}

impl IndexParser {
    fn run(mut self, html: &str) -> Result<GalleryIndex> {
        let mut reader = Reader::from_str(html);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    let position = reader.error_position();
                    return Err(Error::Index(format!("{err} at byte {position}")));
                }
            };
            match event {
                Event::Start(ref tag) | Event::Empty(ref tag) => self.on_start(tag),
                Event::Text(ref text) => {
                    if self.capture.is_some() {
                        let chunk = match text.unescape() {
                            Ok(unescaped) => unescaped.into_owned(),
                            Err(_) => String::from_utf8_lossy(text).into_owned(),
                        };
                        self.text.push_str(&chunk);
                    }
                }
                Event::End(ref tag) => match tag.local_name().as_ref() {
                    b"span" => self.finish_capture(),
                    b"ul" => self.close_section(),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        self.close_section();
        if !self.seen_body {
            return Err(Error::Index("document has no <body>".to_string()));
        }

        let show_menu = self.show_menu.unwrap_or_else(|| {
            self.sections
                .iter()
                .any(|section| matches!(section, Section::Directories(_)))
        });

        Ok(GalleryIndex {
            display_width: self
                .display_width
                .filter(|width| *width > 0)
                .unwrap_or(DEFAULT_DISPLAY_WIDTH),
            fit: self.fit,
            show_menu,
            sections: self.sections,
        })
    }

    fn on_start(&mut self, tag: &BytesStart<'_>) {
        match tag.local_name().as_ref() {
            b"body" => {
                self.seen_body = true;
                self.display_width = attribute(tag, "data-width").and_then(|w| w.trim().parse().ok());
                self.fit = attribute(tag, "data-fit").is_some_and(|fit| fit.trim() == "true");
            }
            b"ul" => {
                self.close_section();
                let class = attribute(tag, "class").unwrap_or_default();
                if has_class(&class, "flex") {
                    self.open = Some(Section::Thumbnails(Vec::new()));
                } else if has_class(&class, "stretch") {
                    self.open = Some(Section::Directories(Vec::new()));
                }
            }
            b"img" => {
                let Some(Section::Thumbnails(items)) = self.open.as_mut() else {
                    return;
                };
                let Some(raw_id) = attribute(tag, "data-id") else {
                    return;
                };
                match raw_id.parse::<ImageId>() {
                    Ok(id) => items.push(ThumbnailItem {
                        id,
                        title: attribute(tag, "title").unwrap_or_default(),
                        name: String::new(),
                    }),
                    Err(err) => tracing::warn!(data_id = %raw_id, error = %err, "skipping thumbnail with invalid id"),
                }
            }
            b"div" => {
                let class = attribute(tag, "class").unwrap_or_default();
                if has_class(&class, "dir-container") {
                    self.pending_directory = attribute(tag, "id");
                } else if attribute(tag, "id").as_deref() == Some("menu") {
                    self.show_menu = Some(!has_class(&class, "hidden"));
                }
            }
            b"span" => {
                let class = attribute(tag, "class").unwrap_or_default();
                self.capture = match self.open {
                    Some(Section::Thumbnails(_)) if has_class(&class, "name") => {
                        Some(Capture::Caption)
                    }
                    Some(Section::Directories(_)) if self.pending_directory.is_some() => {
                        Some(Capture::DirectoryLabel)
                    }
                    _ => None,
                };
                self.text.clear();
            }
            _ => {}
        }
    }

    fn finish_capture(&mut self) {
        let Some(capture) = self.capture.take() else {
            return;
        };
        let text = std::mem::take(&mut self.text).trim().to_string();
        match (capture, self.open.as_mut()) {
            (Capture::Caption, Some(Section::Thumbnails(items))) => {
                if let Some(last) = items.last_mut() {
                    last.name = text;
                }
            }
            (Capture::DirectoryLabel, Some(Section::Directories(markers))) => {
                if let Some(id) = self.pending_directory.take() {
                    markers.push(DirectoryMarker { id, label: text });
                }
            }
            _ => {}
        }
    }

    fn close_section(&mut self) {
        self.capture = None;
        self.pending_directory = None;
        match self.open.take() {
            Some(Section::Thumbnails(items)) if !items.is_empty() => {
                self.sections.push(Section::Thumbnails(items));
            }
            Some(Section::Directories(markers)) if !markers.is_empty() => {
                self.sections.push(Section::Directories(markers));
            }
            _ => {}
        }
    }
}

fn attribute(tag: &BytesStart<'_>, name: &str) -> Option<String> {
    tag.html_attributes()
        .with_checks(false)
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}

fn has_class(class: &str, wanted: &str) -> bool {
    class.split_ascii_whitespace().any(|c| c == wanted)
}
