//! Pure helpers shared across pages: palette vocabulary, brightness math,
//! image URL handling, display formatting and CSV assembly.

pub mod brightness;
pub mod csv;
pub mod format;
pub mod images;
pub mod palette;
