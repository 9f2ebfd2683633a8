//! Walkable path network model

pub mod components;
pub mod network;

pub use components::{NodeKey, PathEdge, PathNode};
pub use network::PathGraph;
