// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! UI language is taken from `--lang`, then `[general] language` in the
//! config file, then the system locale, falling back to `en-US`.

pub mod fluent;
