use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    write(&mut io::stdout().lock(), value)
}

/// Used when stdout already carries the command's primary output.
pub fn eprint<T: Serialize>(value: &T) -> AppResult<()> {
    write(&mut io::stderr().lock(), value)
}

pub fn write<W: Write, T: Serialize>(writer: &mut W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
