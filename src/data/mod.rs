//! Conversion from UFO data handed over by a norad-based host

pub mod conversions;
