//! SpreadsheetML drawings.
//!
//! A drawing part positions chart frames and pictures on a sheet. This module
//! provides cell anchoring, pixel positioning and the `xdr:wsDr` serializer,
//! along with the small DrawingML fragments (`a:blip`, `a:xfrm`) they share.

pub mod anchor;
pub mod blip;
pub mod drawing;
pub mod xfrm;

pub use anchor::{Marker, ObjectPosition, position_object_pixels, scale_px};
pub use drawing::{Anchor, Drawing, DrawingObject, ObjectKind, Placement};
