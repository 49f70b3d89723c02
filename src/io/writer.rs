use crate::model::{Solution, SolutionSink};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Writes `solution` as two lines: `"{penalty} {seconds:.1}"` and the model
/// identifiers separated by single spaces.
pub fn write_solution<W: Write>(mut w: W, solution: &Solution) -> io::Result<()> {
    writeln!(w, "{} {:.1}", solution.penalty, solution.elapsed_secs())?;
    let mut ids = solution.sequence.iter();
    if let Some(first) = ids.next() {
        write!(w, "{first}")?;
        for id in ids {
            write!(w, " {id}")?;
        }
    }
    writeln!(w)?;
    w.flush()
}

/// File sink: every emission truncates and rewrites the destination, so
/// the file always holds the latest solution.
#[derive(Debug, Clone)]
pub struct SolutionWriter {
    path: PathBuf,
    writes: usize,
}

impl SolutionWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writes: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of solutions written so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SolutionSink for SolutionWriter {
    type Error = io::Error;

    fn emit(&mut self, solution: &Solution) -> io::Result<()> {
        let file = File::create(&self.path)?;
        write_solution(BufWriter::new(file), solution)?;
        self.writes += 1;
        Ok(())
    }
}
