//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

use shmaude_engine::IconStyle;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons.
    Nerd,
    /// Standard Unicode symbols (default, wide compatibility).
    #[default]
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Mode for the configured style, forced to ASCII when `NO_COLOR` is set.
    pub fn from_config(style: IconStyle) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Ascii;
        }
        match style {
            IconStyle::Nerd => Self::Nerd,
            IconStyle::Unicode => Self::Unicode,
            IconStyle::Ascii => Self::Ascii,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    // === Sidebar ===

    pub fn new_chat(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0415}",
            IconMode::Unicode | IconMode::Ascii => "+",
        }
    }

    pub fn chat(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰭹",
            IconMode::Unicode => "◆",
            IconMode::Ascii => "#",
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0349}",
            IconMode::Unicode => "⌕",
            IconMode::Ascii => "?",
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f05a8}",
            IconMode::Unicode => "☀",
            IconMode::Ascii => "*",
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0594}",
            IconMode::Unicode => "☾",
            IconMode::Ascii => ")",
        }
    }

    // === Header ===

    pub fn share(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0497}",
            IconMode::Unicode => "⇪",
            IconMode::Ascii => "^",
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0493}",
            IconMode::Unicode => "⚙",
            IconMode::Ascii => "=",
        }
    }

    pub fn active(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "●",
            IconMode::Ascii => "*",
        }
    }

    // === Message actions ===

    pub fn copy(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f018f}",
            IconMode::Unicode => "⧉",
            IconMode::Ascii => "[c]",
        }
    }

    pub fn like(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0513}",
            IconMode::Unicode => "▲",
            IconMode::Ascii => "+1",
        }
    }

    pub fn dislike(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0511}",
            IconMode::Unicode => "▼",
            IconMode::Ascii => "-1",
        }
    }

    pub fn regenerate(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f0450}",
            IconMode::Unicode => "⟳",
            IconMode::Ascii => "~",
        }
    }

    // === Input ===

    pub fn attach(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f03e2}",
            IconMode::Unicode => "⊕",
            IconMode::Ascii => "@",
        }
    }

    pub fn send(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f005d}",
            IconMode::Unicode => "↑",
            IconMode::Ascii => "^",
        }
    }

    /// Filled and empty dots of the typing indicator.
    pub fn typing_dots(&self) -> (&'static str, &'static str) {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => ("●", "○"),
            IconMode::Ascii => ("o", "."),
        }
    }
}
