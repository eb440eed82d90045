//! Theme - Palette, Typography, Tones and Status Appearance

pub mod colors;
pub mod status;
pub mod tone;
pub mod typography;
