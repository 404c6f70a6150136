//! Single-line protobuf text format.

use std::fmt::{self, Write};

/// Writes `name:value` pairs separated by single spaces, skipping proto3 default values.
pub struct TextWriter<'a, W: Write> {
    out: &'a mut W,
    first: bool,
}

impl<'a, W: Write> TextWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        TextWriter { out, first: true }
    }

    pub fn string_field(&mut self, name: &str, value: &str) -> fmt::Result {
        if value.is_empty() {
            return Ok(());
        }
        self.field_name(name)?;
        self.out.write_char('"')?;
        escape_into(self.out, value)?;
        self.out.write_char('"')
    }

    pub fn int_field(&mut self, name: &str, value: i64) -> fmt::Result {
        if value == 0 {
            return Ok(());
        }
        self.field_name(name)?;
        write!(self.out, "{value}")
    }

    fn field_name(&mut self, name: &str) -> fmt::Result {
        if !self.first {
            self.out.write_char(' ')?;
        }
        self.first = false;
        write!(self.out, "{name}:")
    }
}

/// Escape a string the way Go's prototext does.
/// C0 controls and DEL become `\xNN`, C1 controls become `\u00NN`.
pub fn escape_into<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c < ' ' || c == '\u{7f}' => write!(out, "\\x{:02x}", u32::from(c))?,
            c if c.is_control() => write!(out, "\\u{:04x}", u32::from(c))?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}
