extern crate argparse;

use std::io::{self, prelude::*};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::Env;
use log::debug;

use rabbithole::{
    print_result, AnagramPhrase, HashAlgorithm, HashComparison, Solver, SolverConfig, TargetHash,
};

/// Reads one line from stdin after printing `prompt`, without its line terminator.
fn acquire(prompt: &str, input: &mut impl BufRead) -> Result<String> {
    println!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("could not read from stdin")?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn main() -> Result<()> {
    use argparse::{ArgumentParser, Store, StoreFalse, StoreOption, StoreTrue};

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut phrase = String::new();
    let mut hash = String::new();
    let mut dictionary_path = String::new();
    let mut algorithm = HashAlgorithm::Md5;
    let mut exact_case = false;
    let mut prune = true;
    let mut max_nodes: Option<u64> = None;
    let mut pause = false;

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Recover a phrase from its anagram and hash, using a word list");
        ap.refer(&mut phrase)
            .add_option(&["-p", "--phrase"], Store, "The anagram phrase (prompted for if missing)");
        ap.refer(&mut hash)
            .add_option(&["-H", "--hash"], Store, "Hash of the original phrase (prompted for if missing)");
        ap.refer(&mut dictionary_path)
            .add_option(&["-f", "--dictionary"], Store, "The path of the word list (prompted for if missing)");
        ap.refer(&mut algorithm)
            .add_option(&["-a", "--algorithm"], Store, "Hash algorithm: md5 (default) or sha256");
        ap.refer(&mut exact_case)
            .add_option(&["--exact-case"], StoreTrue, "Compare hashes case-sensitively");
        ap.refer(&mut prune)
            .add_option(&["--no-prune"], StoreFalse, "Walk every combination, even hopeless ones");
        ap.refer(&mut max_nodes)
            .add_option(&["--max-nodes"], StoreOption, "Give up after visiting this many search nodes");
        ap.refer(&mut pause)
            .add_option(&["--pause"], StoreTrue, "Wait for Enter before starting the search");
        ap.parse_args_or_exit();
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if phrase.is_empty() {
        phrase = acquire("Type in the anagram phrase...", &mut input)?;
    }
    if hash.is_empty() {
        hash = acquire(&format!("Type in the phrase {} hash...", algorithm), &mut input)?;
    }
    if dictionary_path.is_empty() {
        dictionary_path = acquire("Type in the word file location...", &mut input)?;
    }

    let comparison = if exact_case {
        HashComparison::Exact
    } else {
        HashComparison::CaseInsensitive
    };
    let config = SolverConfig {
        algorithm,
        prune_partial: prune,
        node_budget: max_nodes,
    };
    debug!("config: {:?}", config);

    let phrase = AnagramPhrase::new(phrase)?;
    let target = TargetHash::new(&hash)?.with_comparison(comparison);
    let mut solver = Solver::new(phrase, PathBuf::from(dictionary_path), target).with_config(config);

    solver.load_all_res()?;

    if pause {
        acquire("Press Enter to start the search...", &mut input)?;
    }

    let solutions = solver.solve()?;

    let stdout = io::stdout();
    print_result(solutions, &mut stdout.lock())?;
    Ok(())
}
