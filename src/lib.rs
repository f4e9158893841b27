// SPDX-License-Identifier: MPL-2.0
//! `thumbsmith` is a single-page YouTube thumbnail editor built with the Iced
//! GUI framework.
//!
//! It composes a styled title and two image layers over a fixed 1280x720
//! canvas with a live preview and PNG export, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/thumbsmith/0.1.0")]

pub mod app;
pub mod compose;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
