use std::fmt::{self, Write};

use crate::buffer::Cursor;

/// Write a float through `core::fmt`'s shortest round-trip `Display`.
///
/// With `precision`, the fraction is cut (never rounded) to exactly that many
/// digits and zero-padded. Non-finite values are written as-is.
pub(crate) fn write_float<F>(
    value: F,
    finite: bool,
    buf: &mut [u8],
    precision: Option<u32>,
) -> usize
where
    F: fmt::Display,
{
    let mut out = Cursor::new(buf);
    match precision {
        Some(places) if finite => {
            let mut fixed = Fixed::new(&mut out, places);
            let _ = write!(fixed, "{value}");
            fixed.pad();
        }
        _ => {
            let _ = write!(out, "{value}");
        }
    }
    out.finish()
}

/// Filter that keeps at most `places` digits after the decimal point.
struct Fixed<'c, 'a> {
    out: &'c mut Cursor<'a>,
    places: u32,
    point: bool,
    fraction: u32,
}

impl<'c, 'a> Fixed<'c, 'a> {
    fn new(out: &'c mut Cursor<'a>, places: u32) -> Self {
        Self {
            out,
            places,
            point: false,
            fraction: 0,
        }
    }

    fn byte(&mut self, b: u8) {
        if self.point {
            if self.fraction < self.places {
                self.out.push(b);
                self.fraction += 1;
            }
        } else if b == b'.' {
            self.point = true;
            if self.places > 0 {
                self.out.push(b'.');
            }
        } else {
            self.out.push(b);
        }
    }

    /// Complete the fraction with zeros while there is room.
    fn pad(mut self) {
        if self.places == 0 {
            return;
        }
        if !self.point {
            self.point = true;
            self.out.push(b'.');
        }
        while self.fraction < self.places {
            let full = self.out.is_full();
            self.out.push(b'0');
            if full {
                break;
            }
            self.fraction += 1;
        }
    }
}

impl Write for Fixed<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            self.byte(b);
        }
        Ok(())
    }
}
