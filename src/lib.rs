pub mod util;
pub mod interpreter;

use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;
use clap::Parser as ClapParser;
use thiserror::Error;
use crate::interpreter::logger::{ConsoleLogger, Logger};
use crate::interpreter::Session;

#[derive(ClapParser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[clap(help = "Source files, evaluated in order in one session")]
    pub input: Vec<PathBuf>,
    #[clap(short, long = "eval", value_name = "SOURCE", help = "Evaluate SOURCE after the input files")]
    pub eval: Vec<String>,

    #[clap(long, help = "Print the token sequence instead of evaluating")]
    pub tokens: bool,
    #[clap(long, help = "Print the parsed forms instead of evaluating")]
    pub ast: bool,
    #[clap(long, help = "Print the result of every top-level form")]
    pub print_result: bool,

    #[clap(short, long, help = "Print verbose log output")]
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read standard input: {0}")]
    ReadStdin(std::io::Error),
    #[error("{0} error(s) reported")]
    Diagnostics(usize),
}

fn read_sources(config: &Config) -> Result<Vec<(String, String)>, Error> {
    let mut sources = Vec::new();

    for path in &config.input {
        let source = std::fs::read_to_string(path)
            .map_err(|source| Error::ReadInput { path: path.clone(), source })?;
        sources.push((path.to_string_lossy().into_owned(), source));
    }

    for (i, source) in config.eval.iter().enumerate() {
        sources.push((format!("<eval {}>", i + 1), source.clone()));
    }

    if sources.is_empty() {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).map_err(Error::ReadStdin)?;
        sources.push((String::from("<stdin>"), source));
    }

    Ok(sources)
}

pub fn run(config: &Config) -> Result<(), Error> {
    util::init_tracing(config.verbose);

    let sources = read_sources(config)?;

    let logger = Rc::new(ConsoleLogger::new());
    let mut session = Session::new(Rc::clone(&logger) as Rc<dyn Logger>);

    for (name, source) in &sources {
        tracing::debug!(%name, bytes = source.len(), "running source");

        if config.tokens {
            println!("{}", session.tokens(source).iter().map(|token| format!("{} {}", token.start(), token)).collect::<Vec<String>>().join("\n"));
        } else if config.ast {
            println!("{}", session.parse(source).iter().map(|form| format!("{:?}", form)).collect::<Vec<String>>().join("\n"));
        } else {
            for result in session.run(source) {
                if config.print_result {
                    println!("=> {}", result);
                }
            }
        }
    }

    match logger.error_count() {
        0 => Ok(()),
        count => Err(Error::Diagnostics(count)),
    }
}
