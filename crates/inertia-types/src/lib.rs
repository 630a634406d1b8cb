//! Wire types for the Inertia page protocol.
//!
//! This crate is the single source of truth for the structures that cross
//! the wire between the server adapter and the client-side router. Types
//! defined here flow downstream to `TypeScript` via `ts-rs` so the client
//! adapter can consume the exact same shapes.
//!
//! # Modules
//!
//! - [`headers`] -- Request and response header names of the protocol
//! - [`page`] -- The page object returned for every navigation
//! - [`props`] -- Prop maps and the layer-merging primitive
//! - [`route`] -- Route table projection exposed to the client

pub mod headers;
pub mod page;
pub mod props;
pub mod route;

// Re-export all public types at crate root for convenience.
pub use page::Page;
pub use props::{Props, merge_layer};
pub use route::RouteInfo;
