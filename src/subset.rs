use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{debug, trace};
use thiserror::Error;

use crate::utils::queues::RandomizedQueue;
use crate::utils::random::RandomSource;

/// An error that occurred while selecting a subset of lines.
#[derive(Error, Debug)]
pub enum SubsetError {
    /// The input file could not be opened.
    #[error("Unable to open input {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Error while reading input lines: {0}")]
    Read(io::Error),

    #[error("Error while writing output lines: {0}")]
    Write(io::Error),
}

pub type SubsetResult<T> = Result<T, SubsetError>;

/// Prints `min(k, lines)` lines of `input` to `output`, chosen uniformly at
/// random without replacement and in random order.
///
/// Returns the number of lines written. `k == 0` or empty input write
/// nothing.
pub fn subset<R, W>(k: usize, input: R, output: &mut W) -> SubsetResult<usize>
where
    R: BufRead,
    W: Write,
{
    subset_with_source(k, input, output, RandomSource::new())
}

/// Same as [`subset`], drawing lines with the given random source.
pub fn subset_with_source<R, W>(
    k: usize,
    input: R,
    output: &mut W,
    random: RandomSource,
) -> SubsetResult<usize>
where
    R: BufRead,
    W: Write,
{
    let mut queue = RandomizedQueue::with_source(random);
    for line in input.lines() {
        queue.enqueue(line.map_err(SubsetError::Read)?);
    }
    debug!("Loaded {} lines, selecting up to {}", queue.len(), k);

    let mut written = 0;
    while written < k {
        let Some(line) = queue.dequeue() else {
            break;
        };
        trace!("Selected line: {}", line);
        writeln!(output, "{}", line).map_err(SubsetError::Write)?;
        written += 1;
    }
    output.flush().map_err(SubsetError::Write)?;

    Ok(written)
}
