use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use finmorph_lib::{analyze_complexity, analyze_text, detect_profanity, output, Lexicon};

#[derive(Parser)]
#[command(name = "finmorph", about = "Finnish morphological analysis toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Reduce every word to its lemma with part of speech and case/number.
    Lemmatize {
        /// Finnish text to analyze. If omitted, reads from stdin.
        text: Option<String>,

        /// Skip the case/number diagnosis.
        #[arg(long)]
        no_morphology: bool,

        /// Render annotation lines instead of JSON.
        #[arg(long)]
        annotated: bool,
    },

    /// Score the structural complexity of the text.
    Complexity {
        /// Finnish text to analyze. If omitted, reads from stdin.
        text: Option<String>,

        /// Drop the per-case distribution from the report.
        #[arg(long)]
        summary: bool,
    },

    /// Screen the text for profanity and toxic phrases.
    Profanity {
        /// Text to screen. If omitted, reads from stdin.
        text: Option<String>,

        /// Include the individual flagged words.
        #[arg(long)]
        flagged: bool,

        /// Score at or above which the text counts as toxic.
        #[arg(long, default_value_t = 0.5)]
        threshold: f64,
    },
}

impl Command {
    fn text(&self) -> Option<&str> {
        match self {
            Command::Lemmatize { text, .. }
            | Command::Complexity { text, .. }
            | Command::Profanity { text, .. } => text.as_deref(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let lexicon = Lexicon::new();

    match cli.command.text() {
        Some(text) => process_line(text, &lexicon, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.expect("failed to read stdin");
                if !line.trim().is_empty() {
                    process_line(&line, &lexicon, &cli);
                }
            }
        }
    }
}

fn process_line(line: &str, lexicon: &Lexicon, cli: &Cli) {
    match &cli.command {
        Command::Lemmatize {
            no_morphology,
            annotated,
            ..
        } => {
            let analysis = analyze_text(line, lexicon, !no_morphology);
            if *annotated {
                println!("{}", output::annotate_text(&analysis));
            } else {
                let json = if cli.pretty {
                    serde_json::to_string_pretty(&analysis)
                } else {
                    serde_json::to_string(&analysis)
                };
                println!("{}", json.expect("JSON serialization failed"));
            }
        }
        Command::Complexity { summary, .. } => {
            let report = analyze_complexity(line, !summary);
            let json = if cli.pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            println!("{}", json.expect("JSON serialization failed"));
        }
        Command::Profanity {
            flagged, threshold, ..
        } => {
            let report = detect_profanity(line, *flagged, *threshold);
            let json = if cli.pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            };
            println!("{}", json.expect("JSON serialization failed"));
        }
    }
}
