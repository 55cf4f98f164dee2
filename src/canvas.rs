use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, Widget},
};

/// Draws onto a buffer using coordinates relative to `area`, silently
/// dropping anything that falls outside of it
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    pub(crate) fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    pub(crate) fn width(&self) -> u16 {
        self.area.width
    }

    pub(crate) fn height(&self) -> u16 {
        self.area.height
    }

    pub(crate) fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        self.mvprint_clipped(y, x, u16::MAX, s, style);
    }

    /// Like `mvprint()`, but truncates the text to at most `max_width`
    /// columns
    pub(crate) fn mvprint_clipped<S: AsRef<str>>(
        &mut self,
        y: u16,
        x: u16,
        max_width: u16,
        s: S,
        style: Option<Style>,
    ) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // area, though we need to be sure that the Rect passed to the
            // Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width).min(max_width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    pub(crate) fn fill(&mut self, y: u16, x: u16, width: u16, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf.set_style(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                style,
            );
        }
    }

    pub(crate) fn hline(&mut self, y: u16, x: u16, ch: char, length: u16, style: Option<Style>) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), style);
    }
}
