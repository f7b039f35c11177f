//! On-screen ticket preview
//!
//! Renders a directive sequence as plain text the way the paper would look:
//! same formatter output as the printer path, minus device bytes.

use crate::directive::{Align, Directive, RuleStyle};
use crate::encoding::{pad_text, text_width};

/// Render directives as display text for the given paper width
pub fn render_text(directives: &[Directive], width: usize) -> String {
    let mut out = String::new();
    for directive in directives {
        match directive {
            Directive::Text { text, style } => {
                let line = match style.align {
                    Align::Left => text.clone(),
                    Align::Center => center(text, width),
                    Align::Right => pad_text(text, width, true),
                };
                out.push_str(line.trim_end());
                out.push('\n');
            }
            Directive::Rule(RuleStyle::Single) => {
                out.push_str(&"-".repeat(width));
                out.push('\n');
            }
            Directive::Rule(RuleStyle::Double) => {
                out.push_str(&"=".repeat(width));
                out.push('\n');
            }
            Directive::Feed(n) => {
                for _ in 0..*n {
                    out.push('\n');
                }
            }
            // Nothing to show for a cut
            Directive::Cut => {}
        }
    }
    out
}

fn center(s: &str, width: usize) -> String {
    let w = text_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat((width - w) / 2), s)
}
