//! Screen layout.
//!
//! ```text
//! ┌ sidebar ─────────┬ main ───────────────────────────────┐
//! │ S Shmaude        │ Current Chat ● Active    ⇪ Share ⚙  │
//! │                  │─────────────────────────────────────│
//! │ + New convers... │                                     │
//! │                  │  messages / welcome panel           │
//! │ RECENT CHATS     │                                     │
//! │ ◆ Current Chat   │                                     │
//! │ ⌕ Research A...  │╭───────────────────────────────────╮│
//! │                  ││ Message Shmaude...          ⊕ [↑] ││
//! │ (●  ) ☀ Dark Mode│╰───────────────────────────────────╯│
//! │ RT Rhamsez ...   │ AI Shmaude Sonnet 4 · disclaimer    │
//! └──────────────────┴─────────────────────────────────────┘
//! ```
//!
//! Layout is a pure function of the terminal area and the composer, so the
//! same rects serve both drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use shmaude_engine::Composer;

use crate::text::{hard_wrap, hard_wrap_cursor};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 60;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 16;

/// Sidebar width including its right border.
pub const SIDEBAR_WIDTH: u16 = 30;

/// Largest number of text rows the input grows to before scrolling.
pub const MAX_INPUT_ROWS: u16 = 6;

/// Width of the attach/send column inside the input box.
pub const INPUT_ACTIONS_WIDTH: u16 = 8;

/// Header height (title row plus divider).
const HEADER_HEIGHT: u16 = 2;

/// Regions of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLayout {
    pub brand: Rect,
    pub new_chat: Rect,
    pub recent_title: Rect,
    pub recent_items: Rect,
    pub theme_toggle: Rect,
    pub divider: Rect,
    pub profile: Rect,
}

impl SidebarLayout {
    /// Lay out the sidebar content inside `inner` (the area without border).
    pub fn compute(inner: Rect) -> Self {
        let row = |offset: u16, height: u16| {
            let y = inner.y.saturating_add(offset);
            let bottom = inner.y.saturating_add(inner.height);
            Rect::new(inner.x, y.min(bottom), inner.width, height.min(bottom.saturating_sub(y)))
        };
        let from_bottom = |offset: u16, height: u16| {
            let y = (inner.y + inner.height).saturating_sub(offset).max(inner.y);
            Rect::new(inner.x, y, inner.width, height)
        };

        Self {
            brand: row(0, 1),
            new_chat: row(2, 1),
            recent_title: row(4, 1),
            recent_items: row(5, 2),
            theme_toggle: from_bottom(4, 1),
            divider: from_bottom(3, 1),
            profile: from_bottom(2, 2),
        }
    }
}

/// All regions of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    /// Whole sidebar including border.
    pub sidebar: Rect,
    /// Sidebar content regions.
    pub sidebar_parts: SidebarLayout,
    /// Chat header.
    pub header: Rect,
    /// Message list or welcome panel.
    pub messages: Rect,
    /// Bordered input box.
    pub input: Rect,
    /// Text area inside the input box.
    pub input_text: Rect,
    /// Attach icon cell range.
    pub attach: Rect,
    /// Send control.
    pub send: Rect,
    /// Model badge and disclaimer.
    pub footer: Rect,
}

impl ShellLayout {
    /// Compute the layout, or `None` when the area is below the minimum size.
    pub fn compute(area: Rect, composer: &Composer) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);
        let sidebar = columns[0];
        let main = columns[1];

        let text_width = input_text_width(main.width);
        let input_height = input_rows(composer, text_width) + 2;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ])
            .split(main);

        let input = rows[2];
        let InputParts {
            text: input_text,
            attach,
            send,
        } = InputParts::compute(input);

        Some(Self {
            sidebar,
            sidebar_parts: SidebarLayout::compute(sidebar_content(sidebar)),
            header: rows[0],
            messages: rows[1],
            input,
            input_text,
            attach,
            send,
            footer: rows[3],
        })
    }
}

/// Regions inside the bordered input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputParts {
    pub text: Rect,
    pub attach: Rect,
    pub send: Rect,
}

impl InputParts {
    /// Split the bordered input box `input` into text, attach and send cells.
    pub fn compute(input: Rect) -> Self {
        let inner_y = input.y + 1;
        let text = Rect::new(
            input.x + 2,
            inner_y,
            input_text_width(input.width),
            input.height.saturating_sub(2),
        );
        let actions_x = text.x + text.width;
        Self {
            text,
            attach: Rect::new(actions_x + 1, inner_y, 2, 1),
            send: Rect::new(actions_x + 3, inner_y, 3, 1),
        }
    }
}

/// Content area of the sidebar: one column of left padding, right border excluded.
pub fn sidebar_content(sidebar: Rect) -> Rect {
    Rect::new(
        sidebar.x + 1,
        sidebar.y,
        sidebar.width.saturating_sub(2),
        sidebar.height,
    )
}

/// Center a fixed-size rect within an area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Hit-test target for mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    NewConversation,
    ThemeToggle,
    Send,
}

impl ShellLayout {
    /// What was clicked at `(column, row)`, if anything interactive.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let pos = Position::new(column, row);
        if self.sidebar_parts.new_chat.contains(pos) {
            Some(ClickTarget::NewConversation)
        } else if self.sidebar_parts.theme_toggle.contains(pos) {
            Some(ClickTarget::ThemeToggle)
        } else if self.send.contains(pos) {
            Some(ClickTarget::Send)
        } else {
            None
        }
    }
}

/// Width available for input text inside a main panel of `main_width`.
pub fn input_text_width(main_width: u16) -> u16 {
    // Two border columns, one padding column each side of the text.
    main_width
        .saturating_sub(2 + 2 + INPUT_ACTIONS_WIDTH)
        .max(1)
}

/// Visible text rows for the composer, between 1 and [`MAX_INPUT_ROWS`].
pub fn input_rows(composer: &Composer, text_width: u16) -> u16 {
    let width = usize::from(text_width);
    let rows = hard_wrap(composer.text(), width).len();
    let (cursor_row, _) = hard_wrap_cursor(composer.text(), width, composer.cursor());
    let needed = rows.max(cursor_row + 1);
    u16::try_from(needed)
        .unwrap_or(MAX_INPUT_ROWS)
        .clamp(1, MAX_INPUT_ROWS)
}
