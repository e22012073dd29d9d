use std::env;
use std::process;

#[derive(Debug)]
pub struct Args {
    pub profile: Option<String>,
    pub files: Vec<String>,
    pub plain: bool,
    pub dump: bool,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut profile: Option<String> = None;
    let mut files: Vec<String> = Vec::new();
    let mut plain = false;
    let mut dump = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            i += 1;
            // Everything after -- is a file operand
            while i < args.len() {
                files.push(args[i].clone());
                i += 1;
            }
            break;
        }

        if arg == "-p" || arg == "--profile" {
            i += 1;
            if i >= args.len() {
                eprintln!("tint: {arg} requires an argument");
                process::exit(1);
            }
            profile = Some(args[i].clone());
        } else if let Some(path) = arg.strip_prefix("-p") {
            profile = Some(path.to_string());
        } else if arg == "--plain" {
            plain = true;
        } else if arg == "--dump" {
            dump = true;
        } else if arg == "-h" || arg == "--help" {
            print_usage();
            process::exit(0);
        } else if arg == "--version" {
            println!("tint {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        } else if arg.starts_with('-') && arg.len() > 1 {
            eprintln!("tint: unknown option: {arg}");
            eprintln!("Try 'tint --help' for usage.");
            process::exit(1);
        } else {
            files.push(arg.clone());
        }

        i += 1;
    }

    Args { profile, files, plain, dump }
}

fn print_usage() {
    println!("Usage: tint [OPTIONS] [FILE...]");
    println!();
    println!("Highlight source files on the terminal using a syntax profile.");
    println!("With no FILE, a built-in demo snippet is highlighted; a FILE of");
    println!("'-' reads standard input.");
    println!();
    println!("Options:");
    println!("  -p, --profile <path>  Syntax profile to use (TOML). Defaults to");
    println!("                        ./syntax.toml, then the built-in C-like profile.");
    println!("      --plain           No ANSI styling (categories still computed)");
    println!("      --dump            Print the loaded profile's sets and exit");
    println!("  -h, --help            Show this help");
    println!("      --version         Show version");
}
