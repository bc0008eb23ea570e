use std::env;
use std::fs;
use std::process::ExitCode;

use canonical::{canonicalize, NormalizeConfig, StopwordSet};

fn main() -> ExitCode {
    let Some(file_path) = env::args().nth(1) else {
        eprintln!("usage: demo <FILE>");
        return ExitCode::from(2);
    };
    let content = match fs::read_to_string(&file_path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("cannot read {file_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let doc = canonicalize(&content, &NormalizeConfig::default(), &StopwordSet::italian());
    println!("normalized: {}", doc.normalized);
    println!();
    println!("tokens: {:?}", doc.tokens.texts().collect::<Vec<_>>());
    println!();
    println!(
        "kept {} of {} tokens ({} stopwords removed)",
        doc.tokens.len(),
        doc.total_tokens,
        doc.stopwords_removed()
    );
    ExitCode::SUCCESS
}
