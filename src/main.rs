use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use tint::cli;
use tint::error::LoadError;
use tint::highlight::highlight;
use tint::profile::SyntaxProfile;
use tint::span::Position;
use tint::theme::{AnsiTheme, paint};

/// Profile used when none is supplied, embedded at build time.
const DEFAULT_PROFILE: &str = include_str!("../syntax.toml");

/// Snippet highlighted when no files are given.
const DEMO_SNIPPET: &str = "#include <stdio.h> /* does this comment exist? */\n\
int main() {\n\
    printf(\"Hello, World!\");\n\
    const int y = 100; // answer\n\
    return obj.value;\n\
}\n";

fn load_profile(args: &cli::Args) -> Result<SyntaxProfile, LoadError> {
    match &args.profile {
        Some(path) => SyntaxProfile::load(path),
        None => {
            if Path::new("syntax.toml").is_file() {
                SyntaxProfile::load("syntax.toml")
            } else {
                SyntaxProfile::from_toml_str(DEFAULT_PROFILE, "builtin profile")
            }
        }
    }
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn dump_profile(p: &SyntaxProfile) -> String {
    let sets = [
        ("keywords", &p.keywords),
        ("line_comment", &p.line_comment_chars),
        ("block_comment_lead", &p.block_lead),
        ("block_comment_trail", &p.block_trail),
        ("strings", &p.string_delims),
        ("functions", &p.functions),
        ("symbols", &p.symbols),
        ("operators", &p.operators),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "line_comment_len: {}", p.line_comment_len);
    for (name, set) in sets {
        let _ = writeln!(out, "{name} ({}): {}", set.len(), set.members().join(" "));
    }
    out
}

fn main() {
    let args = cli::parse_args();

    let profile = match load_profile(&args) {
        Ok(p) => Some(p),
        Err(e) => {
            eprintln!("tint: cannot load profile: {e}");
            if args.dump {
                process::exit(1);
            }
            eprintln!("tint: rendering without styling");
            None
        }
    };

    if args.dump {
        if let Some(p) = &profile {
            print!("{}", dump_profile(p));
        }
        return;
    }

    let inputs: Vec<String> = if args.files.is_empty() {
        vec![DEMO_SNIPPET.to_string()]
    } else {
        args.files
            .iter()
            .map(|path| match read_input(path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("tint: {path}: {e}");
                    process::exit(1);
                }
            })
            .collect()
    };

    let theme = if args.plain { AnsiTheme::none() } else { AnsiTheme::dark() };

    for text in &inputs {
        let Some(p) = &profile else {
            // Profile failed to load: everything renders as-is, unstyled.
            print!("{text}");
            continue;
        };
        match highlight(text, Position::new(0, 0), p) {
            Ok(spans) => print!("{}", paint(&spans, &theme)),
            Err(e) => {
                // The pass aborted; fall back to the raw text.
                eprintln!("tint: {e}");
                print!("{text}");
            }
        }
    }
}
