use std::io::{self, Write};

use crate::phrase::Solution;

/// Writes one space-joined line per solution.
pub fn print_result<W: Write>(solutions: &[Solution], out: &mut W) -> io::Result<()> {
    if solutions.is_empty() {
        writeln!(out, "No solution found.")?;
        return Ok(());
    }
    for solution in solutions {
        writeln!(out, "{}", solution)?;
    }
    Ok(())
}
