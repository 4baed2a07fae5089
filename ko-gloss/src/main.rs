use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ko_gloss_lib::morphology::generate_conjugations;
use ko_gloss_lib::output::{candidates_to_string, to_bracketed};
use ko_gloss_lib::{
    extract_stems_for_lookup, hangul, DisplayLanguage, ExclusionSet, Level, Resolver, Session,
    UnknownPos, UserConfig, VocabTable,
};
use tracing::Level as LogLevel;

#[derive(Parser)]
#[command(name = "ko-gloss", about = "Annotate Korean text with vocabulary glosses")]
struct Cli {
    /// Korean text to annotate. If omitted, reads from stdin.
    input: Option<String>,

    /// Vocabulary table (JSON array of {word, level, pos, glosses}).
    #[arg(long)]
    vocab: PathBuf,

    /// User configuration JSON ({enabled, level, displayLanguage, showHighlight}).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vocabulary level: 1, 2, or 3 for all levels. Overrides --config.
    #[arg(long, value_parser = parse_level)]
    level: Option<Level>,

    /// Display language: en, zh or ja. Overrides --config.
    #[arg(long)]
    lang: Option<DisplayLanguage>,

    /// Print the text with {surface:gloss} inline instead of JSON.
    #[arg(long)]
    bracketed: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print stem candidates for each Hangul run (verb-only marked with *).
    #[arg(long)]
    stems: bool,

    /// Print common conjugations of each whitespace-separated dictionary form.
    #[arg(long, conflicts_with = "stems")]
    conjugate: bool,

    /// Verb-only stems never match entries without a recorded part of speech.
    #[arg(long)]
    strict_pos: bool,

    /// Annotate grammatical particles too.
    #[arg(long)]
    no_exclude: bool,

    /// Debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_level(s: &str) -> Result<Level, String> {
    let n: u8 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    Level::try_from(n).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { LogLevel::DEBUG } else { LogLevel::WARN })
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => UserConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => UserConfig::default(),
    };
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(lang) = cli.lang {
        config.display_language = lang;
    }

    let table = VocabTable::from_path(&cli.vocab)
        .with_context(|| format!("loading vocabulary {}", cli.vocab.display()))?;
    let excluded = if cli.no_exclude {
        ExclusionSet::empty()
    } else {
        ExclusionSet::default_particles()
    };
    let unknown_pos = if cli.strict_pos {
        UnknownPos::Reject
    } else {
        UnknownPos::Admit
    };
    let session =
        Session::new(Arc::new(table), excluded, config).with_resolver(Resolver::new(unknown_pos));

    match cli.input {
        Some(ref text) => process_line(text, &session, &cli)?,
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("reading stdin")?;
                if !line.trim().is_empty() {
                    process_line(&line, &session, &cli)?;
                }
            }
        }
    }
    Ok(())
}

fn process_line(line: &str, session: &Session, cli: &Cli) -> Result<()> {
    if cli.stems {
        for (start, end) in hangul::syllable_runs(line) {
            let word = &line[start..end];
            println!("{word}\t{}", candidates_to_string(&extract_stems_for_lookup(word)));
        }
        return Ok(());
    }
    if cli.conjugate {
        for word in line.split_whitespace() {
            println!("{word}\t{}", generate_conjugations(word).join(", "));
        }
        return Ok(());
    }

    let spans = session.scan(line);
    if cli.bracketed {
        println!("{}", to_bracketed(line, &spans));
    } else {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&spans)
        } else {
            serde_json::to_string(&spans)
        };
        println!("{}", json.context("serialising spans")?);
    }
    Ok(())
}
