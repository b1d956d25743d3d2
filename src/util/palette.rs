//! Closed vocabulary of the seasonal colour palettes the analysis backend
//! can assign.
//!
//! Wire fields on products and analyses stay `String` because the backend
//! owns the vocabulary; this enum exists for filter dropdowns and form
//! choices, where an open string would let typos through.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// One of the four seasonal palettes.
///
/// The wire spelling is the lowercase two-word name (e.g. `"winter clear"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    WinterClear,
    SummerCool,
    SpringBright,
    AutumnWarm,
}

impl Palette {
    /// All palettes in display order.
    pub const ALL: [Palette; 4] = [
        Palette::WinterClear,
        Palette::SummerCool,
        Palette::SpringBright,
        Palette::AutumnWarm,
    ];

    /// Wire name as the backend spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Palette::WinterClear => "winter clear",
            Palette::SummerCool => "summer cool",
            Palette::SpringBright => "spring bright",
            Palette::AutumnWarm => "autumn warm",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Palette::WinterClear => "Winter Clear",
            Palette::SummerCool => "Summer Cool",
            Palette::SpringBright => "Spring Bright",
            Palette::AutumnWarm => "Autumn Warm",
        }
    }

    /// Parses either the wire spelling or the display label, ignoring case.
    pub fn parse(value: &str) -> Option<Palette> {
        match value.trim().to_lowercase().as_str() {
            "winter clear" => Some(Palette::WinterClear),
            "summer cool" => Some(Palette::SummerCool),
            "spring bright" => Some(Palette::SpringBright),
            "autumn warm" => Some(Palette::AutumnWarm),
            _ => None,
        }
    }
}
