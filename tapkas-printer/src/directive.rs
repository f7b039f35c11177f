//! Print directives
//!
//! The platform-neutral output of the formatters: an ordered sequence of
//! style-tagged text runs and structural directives. The screen preview and
//! the ESC/POS encoder both consume this sequence, so a receipt looks the
//! same on either path.

use crate::encoding::text_width;

/// Horizontal alignment of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Character size of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    #[default]
    Normal,
    /// Double width and height
    Double,
}

/// Style attributes attached to a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub bold: bool,
    pub align: Align,
    pub size: TextSize,
}

/// Separator rule style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStyle {
    /// A line of '-'
    Single,
    /// A line of '='
    Double,
}

/// One element of the print stream
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// A text line with style attributes
    Text { text: String, style: Style },
    /// A full-width separator line
    Rule(RuleStyle),
    /// Feed n blank lines
    Feed(u8),
    /// Full paper cut
    Cut,
}

/// Directive sequence builder
///
/// Fluent API in the style of an ESC/POS text builder, but the output is
/// the abstract directive list: alignment/bold/size are carried as state
/// and stamped onto each emitted line.
pub struct DirectiveBuilder {
    directives: Vec<Directive>,
    width: usize,
    style: Style,
}

impl DirectiveBuilder {
    /// Create a builder for the given paper width in characters
    pub fn new(width: usize) -> Self {
        Self {
            directives: Vec::new(),
            width,
            style: Style::default(),
        }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Emit a text line with the current style
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.directives.push(Directive::Text {
            text: s.to_string(),
            style: self.style,
        });
        self
    }

    /// Emit an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    // === Alignment ===

    pub fn align_left(&mut self) -> &mut Self {
        self.style.align = Align::Left;
        self
    }

    pub fn align_center(&mut self) -> &mut Self {
        self.style.align = Align::Center;
        self
    }

    pub fn align_right(&mut self) -> &mut Self {
        self.style.align = Align::Right;
        self
    }

    // === Text Style ===

    pub fn bold_on(&mut self) -> &mut Self {
        self.style.bold = true;
        self
    }

    pub fn bold_off(&mut self) -> &mut Self {
        self.style.bold = false;
        self
    }

    pub fn size_double(&mut self) -> &mut Self {
        self.style.size = TextSize::Double;
        self
    }

    pub fn size_reset(&mut self) -> &mut Self {
        self.style.size = TextSize::Normal;
        self
    }

    // === Separators ===

    pub fn rule_single(&mut self) -> &mut Self {
        self.directives.push(Directive::Rule(RuleStyle::Single));
        self
    }

    pub fn rule_double(&mut self) -> &mut Self {
        self.directives.push(Directive::Rule(RuleStyle::Double));
        self
    }

    // === Layout Helpers ===

    /// Emit left and right text on the same line, spaces filling the gap.
    ///
    /// When the fields do not fit the width they are joined with a single
    /// space instead: the right field always prints in full and the left
    /// field is not truncated here.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let effective = match self.style.size {
            TextSize::Normal => self.width,
            // Double-size characters take two columns
            TextSize::Double => self.width / 2,
        };
        let lw = text_width(left);
        let rw = text_width(right);

        if lw + rw >= effective {
            self.line(&format!("{} {}", left, right))
        } else {
            let spaces = effective - lw - rw;
            self.line(&format!("{}{}{}", left, " ".repeat(spaces), right))
        }
    }

    // === Paper Control ===

    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.directives.push(Directive::Feed(lines));
        self
    }

    pub fn cut(&mut self) -> &mut Self {
        self.directives.push(Directive::Cut);
        self
    }

    // === Build ===

    /// Finalize and return the directive sequence
    pub fn finish(self) -> Vec<Directive> {
        self.directives
    }
}
