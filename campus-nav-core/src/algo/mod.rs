//! Spatial algorithms independent of any graph

pub mod point_in_polygon;
