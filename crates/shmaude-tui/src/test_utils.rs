//! Test utilities for rendering the app into a buffer and reading it back
//! as text.

use crate::app::App;
use crate::screens::render_app;
use ratatui::{buffer::Buffer, layout::Rect};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 100;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 30;

/// Convert a buffer to a string representation.
///
/// Each row becomes a line with trailing whitespace trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the app at the given size into a fresh buffer.
pub fn render_app_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_app(app, area, &mut buffer);
    buffer
}

/// Render the app at the default test size and return it as a string.
pub fn render_app_to_string(app: &App) -> String {
    buffer_to_string(&render_app_buffer(app, TEST_WIDTH, TEST_HEIGHT))
}
