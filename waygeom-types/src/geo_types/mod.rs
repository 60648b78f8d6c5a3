//! Interoperability with the `geo-types` crate. `x` is longitude and `y` is latitude.

mod coord;
mod linestring;
mod point;

pub use linestring::polyline_from_line_string;
