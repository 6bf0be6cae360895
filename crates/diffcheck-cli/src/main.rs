use anyhow::Result;
use diffcheck_core::{check_diffs, extract_hunks, parse_expected, Baseline, CheckConfig};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut paths = Vec::new();
    let mut help = false;

    for arg in &args[1..] {
        if arg == "--help" || arg == "-h" {
            help = true;
        } else {
            paths.push(arg.clone());
        }
    }

    if help {
        print_usage();
        return Ok(());
    }
    if paths.is_empty() || paths.len() > 2 {
        print_usage();
        process::exit(1);
    }

    let exp_path = &paths[0];

    let (diff_content, diff_name) = if let Some(path) = paths.get(1) {
        let content = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Error: Diff file not found at '{}'", path);
            process::exit(1);
        });
        (content, path.clone())
    } else {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("Error: No diff file specified and no data piped from stdin.");
            process::exit(1);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        (buffer, "<stdin>".to_string())
    };

    let exp_found = Path::new(exp_path).is_file();
    let exp_content = if exp_found {
        fs::read_to_string(exp_path)?
    } else {
        String::new()
    };

    let candidates = extract_hunks(&diff_content, Some(&diff_name));
    let (exp_hunks, directives) = parse_expected(&exp_content);
    let config = CheckConfig::from_directives(directives)?;
    let baseline = Baseline::build(exp_hunks, &config);

    let report = check_diffs(&candidates, &baseline, &config, exp_path, exp_found);

    if let Some(text) = &report.unexpected {
        println!("{}", text);
    }
    if !report.confirmed.is_empty() {
        io::stderr().write_all(report.confirmed.as_bytes())?;
    }

    Ok(())
}

fn print_usage() {
    println!("Usage: diffcheck EXP_DIFFS_FILE [DIFF_FILE]");
    println!();
    println!("Examines a generated diff file (or piped stdin) and filters out");
    println!("expected differences. Unexpected differences are printed to stdout;");
    println!("expected differences that still occur are printed to stderr.");
    println!();
    println!("The expected diffs file may contain any of these directives:");
    println!();
    println!("  ; @ExpIgnoreCase");
    println!("      Discard a generated diff if it differs from an expected diff");
    println!("      only in case.");
    println!("  ; @IgnoreAddressIndex=i");
    println!("      For every expected diff with a decimal address in the 5");
    println!("      characters at index 'i', also accept the form with the");
    println!("      address written as $-prefixed hexadecimal.");
    println!("  ; @IgnoreDiffsContainingRegex=r");
    println!("      Discard a generated diff if any of its lines matches the");
    println!("      regular expression 'r'.");
    println!("  ; @IgnoreFile=f");
    println!("      Discard generated diffs from a file whose name ends with 'f'.");
    println!("  ; @IgnoreWhitespace");
    println!("      Discard a generated diff if its old and new lines differ only");
    println!("      in leading/trailing whitespace or blank lines.");
    println!("  ; @IgnoreWrap");
    println!("      Discard a generated diff if its old and new lines differ only");
    println!("      in where they are wrapped.");
    println!("  ; @RegexReplace=/s/r");
    println!("      Discard a generated diff if its old lines match the new lines");
    println!("      after replacing matches of 's' with 'r' in the old lines.");
    println!("  ; @RegexReplaceNew=/s/r");
    println!("      Discard a generated diff if its new lines match the old lines");
    println!("      after replacing matches of 's' with 'r' in the new lines.");
}
