#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use std::io::{BufWriter, Write};
use xtsp_core::prelude::{CheckResult, Tour};

/// A trait to write tsplib95 tour.
pub trait TsplibSolution<W: Write> {
    /// Writes tsplib95 tour using 1-based vertex ids.
    fn write_tsplib(&self, writer: BufWriter<W>) -> CheckResult<()>;
}

impl<W: Write> TsplibSolution<W> for Tour {
    fn write_tsplib(&self, mut writer: BufWriter<W>) -> CheckResult<()> {
        writeln!(writer, "NAME : {}", self.name)?;
        writeln!(writer, "TYPE : TOUR")?;
        writeln!(writer, "DIMENSION : {}", self.len())?;
        writeln!(writer, "TOUR_SECTION")?;

        self.vertices.iter().try_for_each(|vertex| writeln!(writer, "{}", vertex + 1))?;

        writeln!(writer, "-1")?;
        writeln!(writer, "EOF")?;

        writer.flush()?;

        Ok(())
    }
}
