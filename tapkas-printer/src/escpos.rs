//! ESC/POS command encoding
//!
//! Turns a directive sequence into one contiguous ESC/POS byte buffer.
//! Chunking for the wireless link happens in the transport layer, never
//! here.

use crate::directive::{Align, Directive, RuleStyle, Style, TextSize};
use crate::encoding::encode_text;

/// ESC @ - initialize printer
const INIT: [u8; 2] = [0x1B, 0x40];
/// GS V A 0x00 - full cut
const FULL_CUT: [u8; 4] = [0x1D, 0x56, 0x41, 0x00];
/// ESC p 0x00 0x19 0xFA - cash drawer pulse on pin 2
const DRAWER_KICK: [u8; 5] = [0x1B, 0x70, 0x00, 0x19, 0xFA];

/// Cash drawer kick pulse, sent standalone (not part of a ticket)
pub fn drawer_kick() -> Vec<u8> {
    DRAWER_KICK.to_vec()
}

/// Encodes directives into ESC/POS bytes
///
/// Text is passed through as-is: column layout is already baked into the
/// directive text, so the encoder never re-justifies lines.
pub struct EscPosEncoder {
    width: usize,
}

impl EscPosEncoder {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn encode(&self, directives: &[Directive]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&INIT);

        // ESC @ resets to left/normal/plain; track to emit only changes
        let mut current = Style::default();

        for directive in directives {
            match directive {
                Directive::Text { text, style } => {
                    self.apply_style(&mut out, &mut current, *style);
                    out.extend_from_slice(&encode_text(text));
                    out.push(b'\n');
                }
                Directive::Rule(style) => {
                    let c = match style {
                        RuleStyle::Single => b'-',
                        RuleStyle::Double => b'=',
                    };
                    self.apply_style(&mut out, &mut current, Style::default());
                    out.extend(std::iter::repeat_n(c, self.width));
                    out.push(b'\n');
                }
                Directive::Feed(n) => {
                    // ESC d n - print and feed n lines
                    out.extend_from_slice(&[0x1B, 0x64, *n]);
                }
                Directive::Cut => {
                    out.extend_from_slice(&FULL_CUT);
                }
            }
        }
        out
    }

    fn apply_style(&self, out: &mut Vec<u8>, current: &mut Style, next: Style) {
        if current.bold != next.bold {
            // ESC E n
            out.extend_from_slice(&[0x1B, 0x45, next.bold as u8]);
        }
        if current.align != next.align {
            // ESC a n
            let n = match next.align {
                Align::Left => 0,
                Align::Center => 1,
                Align::Right => 2,
            };
            out.extend_from_slice(&[0x1B, 0x61, n]);
        }
        if current.size != next.size {
            // GS ! n - 0x11 doubles width and height
            let n = match next.size {
                TextSize::Normal => 0x00,
                TextSize::Double => 0x11,
            };
            out.extend_from_slice(&[0x1D, 0x21, n]);
        }
        *current = next;
    }
}
