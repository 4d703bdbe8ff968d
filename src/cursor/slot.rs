//! System cursor slots
//!
//! Each slot of the cursor scheme is addressed two ways: by its registry value
//! name under `Control Panel\Cursors` and by the `OCR_*` identifier that
//! `SetSystemCursor` expects.

use std::fmt;

/// A replaceable system cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemCursor {
    AppStarting,
    Arrow,
    Crosshair,
    Hand,
    Help,
    IBeam,
    No,
    SizeAll,
    SizeNESW,
    SizeNS,
    SizeNWSE,
    SizeWE,
    UpArrow,
    Wait,
}

impl SystemCursor {
    /// Every slot, in scheme order
    pub const ALL: [SystemCursor; 14] = [
        Self::AppStarting,
        Self::Arrow,
        Self::Crosshair,
        Self::Hand,
        Self::Help,
        Self::IBeam,
        Self::No,
        Self::SizeAll,
        Self::SizeNESW,
        Self::SizeNS,
        Self::SizeNWSE,
        Self::SizeWE,
        Self::UpArrow,
        Self::Wait,
    ];

    /// Text select, normal select and link select
    pub const COMMON: [SystemCursor; 3] = [Self::IBeam, Self::Arrow, Self::Hand];

    /// Link select only
    pub const LINK: [SystemCursor; 1] = [Self::Hand];

    /// The `OCR_*` identifier passed to SetSystemCursor
    pub fn id(self) -> u32 {
        match self {
            Self::AppStarting => 32650,
            Self::Arrow => 32512,
            Self::Crosshair => 32515,
            Self::Hand => 32649,
            Self::Help => 32651,
            Self::IBeam => 32513,
            Self::No => 32648,
            Self::SizeAll => 32646,
            Self::SizeNESW => 32643,
            Self::SizeNS => 32645,
            Self::SizeNWSE => 32642,
            Self::SizeWE => 32644,
            Self::UpArrow => 32516,
            Self::Wait => 32514,
        }
    }

    /// The registry value name for this slot
    pub fn name(self) -> &'static str {
        match self {
            Self::AppStarting => "AppStarting",
            Self::Arrow => "Arrow",
            Self::Crosshair => "Crosshair",
            Self::Hand => "Hand",
            Self::Help => "Help",
            Self::IBeam => "IBeam",
            Self::No => "No",
            Self::SizeAll => "SizeAll",
            Self::SizeNESW => "SizeNESW",
            Self::SizeNS => "SizeNS",
            Self::SizeNWSE => "SizeNWSE",
            Self::SizeWE => "SizeWE",
            Self::UpArrow => "UpArrow",
            Self::Wait => "Wait",
        }
    }

    /// Look up a slot by registry value name (case-insensitive, like the registry)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SystemCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
