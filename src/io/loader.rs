use super::err::LoaderError;
use crate::model::{Model, ModelId, OptionConstraint, Problem};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    num::ParseIntError,
    path::Path,
    str::FromStr,
};

/// Reads car-sequencing instances.
///
/// The format is a stream of whitespace-separated integers:
///
/// ```text
/// C M K
/// c_0 .. c_{M-1}            capacities
/// n_0 .. n_{M-1}            window sizes
/// id count b_0 .. b_{M-1}   K times, b in {0, 1}
/// ```
///
/// Line breaks carry no meaning. Models keep their file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader {
    validate: bool,
}

impl Default for InstanceLoader {
    fn default() -> Self {
        Self { validate: true }
    }
}

impl InstanceLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to run [`Problem::validate`] on the parsed instance.
    #[inline]
    pub fn validate(mut self, yes: bool) -> Self {
        self.validate = yes;
        self
    }

    pub fn from_bufread<R: BufRead>(&self, mut br: R) -> Result<Problem, LoaderError> {
        let mut sc = Scanner::new(&mut br);
        let cars = sc.next_count()?;
        let options = sc.next_count()?;
        let classes = sc.next_count()?;

        // Header counts are untrusted; buffers grow with what is actually read.
        let mut capacities = Vec::new();
        for _ in 0..options {
            capacities.push(sc.next_count()?);
        }
        let mut windows = Vec::new();
        for _ in 0..options {
            windows.push(sc.next_count()?);
        }
        let constraints = capacities
            .into_iter()
            .zip(windows)
            .map(|(c, n)| OptionConstraint::new(c, n))
            .collect();

        let mut models = Vec::new();
        for _ in 0..classes {
            let id = ModelId::new(sc.next_count()?);
            let count = sc.next_count()?;
            let mut requires = Vec::new();
            for option in 0..options {
                match sc.next::<i64>()? {
                    0 => requires.push(false),
                    1 => requires.push(true),
                    value => {
                        return Err(LoaderError::InvalidFlag {
                            model: id,
                            option,
                            value,
                        })
                    }
                }
            }
            models.push(Model::new(id, count, requires));
        }

        let problem = Problem::new(cars, constraints, models);
        if self.validate {
            problem.validate()?;
        }

        tracing::debug!(
            cars,
            options,
            classes,
            "loaded car-sequencing instance"
        );
        Ok(problem)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem, LoaderError> {
        let file = File::open(path).map_err(LoaderError::Io)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem, LoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem, LoaderError> {
        self.from_reader(s.as_bytes())
    }
}

#[derive(Debug)]
struct Scanner<R: BufRead> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    #[inline]
    fn fill_line(&mut self) -> Result<(), LoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        if n == 0 {
            return Err(LoaderError::UnexpectedEof);
        }
        Ok(())
    }

    #[inline]
    fn skip_ws(&mut self) -> Result<(), LoaderError> {
        loop {
            let bytes = self.buf.as_bytes();
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.buf.len() {
                return Ok(());
            }
            self.fill_line()?;
        }
    }

    /// Parses the next whitespace-separated token as `T`.
    #[inline]
    fn next<T: FromStr<Err = ParseIntError>>(&mut self) -> Result<T, LoaderError> {
        self.skip_ws()?;
        let start = self.pos;
        let bytes = self.buf.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Ok(self.buf[start..self.pos].parse::<T>()?)
    }

    /// A count or index: any integer, rejected when negative.
    #[inline]
    fn next_count(&mut self) -> Result<usize, LoaderError> {
        let v = self.next::<i64>()?;
        usize::try_from(v).map_err(|_| LoaderError::NegativeValue(v))
    }
}
