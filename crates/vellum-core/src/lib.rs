//! Vellum Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! Vellum slide composition pipeline. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and line segments ([`geometry`] module)
//! - **Theme**: The fixed semantic color palette ([`theme::Theme`])
//! - **Style**: Independently owned style descriptors and their factory ([`style`] module)
//! - **Primitives**: Absolute-coordinate draw primitives ([`primitive`] module)

pub mod color;
pub mod geometry;
pub mod primitive;
pub mod style;
pub mod theme;
