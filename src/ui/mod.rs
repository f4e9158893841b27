// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`editor`] - The thumbnail editor: live preview plus control sidebar
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon rendering (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod editor;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
