use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use argh::FromArgs;
use log::debug;

use crate::subset::{subset_with_source, SubsetError, SubsetResult};
use crate::utils::random::RandomSource;

#[derive(FromArgs, PartialEq, Debug)]
#[argh(description = "Print a random subset of the input lines")]
struct Global {
    #[argh(positional, description = "how many random lines to print")]
    count: usize,

    #[argh(
        option,
        short = 'i',
        long = "input",
        description = "file to read lines from (defaults to stdin)"
    )]
    input: Option<String>,

    #[argh(
        option,
        short = 's',
        long = "seed",
        description = "seed for a reproducible selection"
    )]
    seed: Option<u64>,
}

#[derive(Debug, Default, PartialEq)]
pub struct SubsetOptions {
    pub count: usize,
    pub input: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl From<Global> for SubsetOptions {
    fn from(args: Global) -> Self {
        let mut options = SubsetOptions {
            count: args.count,
            ..SubsetOptions::default()
        };
        if let Some(input) = args.input {
            options.input = Some(PathBuf::from(input));
        }
        if let Some(seed) = args.seed {
            options.seed = Some(seed);
        }
        options
    }
}

impl SubsetOptions {
    fn random_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::new(),
        }
    }
}

/// Runs the selection described by `options` against stdout.
pub fn execute(options: &SubsetOptions) -> SubsetResult<usize> {
    debug!("Selecting lines with options: {:?}", options);

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let random = options.random_source();

    match &options.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| SubsetError::Open {
                path: path.clone(),
                source,
            })?;
            subset_with_source(options.count, BufReader::new(file), &mut output, random)
        }
        None => subset_with_source(options.count, io::stdin().lock(), &mut output, random),
    }
}

pub fn run() -> SubsetResult<()> {
    let args: Global = argh::from_env();
    let written = execute(&SubsetOptions::from(args))?;
    debug!("Wrote {} lines", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<SubsetOptions, argh::EarlyExit> {
        Global::from_args(&["randq"], args).map(SubsetOptions::from)
    }

    #[test]
    fn count_alone_reads_stdin_unseeded() {
        let options = parse(&["3"]).unwrap();
        assert_eq!(
            options,
            SubsetOptions {
                count: 3,
                ..SubsetOptions::default()
            }
        );
    }

    #[test]
    fn flags_override_defaults() {
        let options = parse(&["2", "--input", "lines.txt", "-s", "11"]).unwrap();
        assert_eq!(options.count, 2);
        assert_eq!(options.input, Some(PathBuf::from("lines.txt")));
        assert_eq!(options.seed, Some(11));
    }

    #[test]
    fn count_is_required() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["many"]).is_err());
    }

    #[test]
    fn missing_input_file_is_an_open_error() {
        let options = SubsetOptions {
            count: 1,
            input: Some(PathBuf::from("/nonexistent/randq/input.txt")),
            seed: None,
        };
        assert!(matches!(execute(&options), Err(SubsetError::Open { .. })));
    }
}
