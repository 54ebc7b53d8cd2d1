//! Command implementations for the docspell CLI.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use log::info;

use crate::classify::ClassifierBank;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SpellConfig;
use crate::error::Result;
use crate::release::{ReleaseResolver, ReleaseVersion, VersionSource};
use crate::spelling::SpellChecker;
use crate::wordlist::{WordList, merge, newline_terminated};

/// Execute a CLI command, writing results to stdout and status lines to stderr.
pub fn execute_command(args: DocspellArgs) -> Result<ExitCode> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let status = execute_command_to(&args, &mut out, &mut err)?;
    out.flush()?;
    Ok(status)
}

/// Execute a CLI command, writing results to `out` and status lines to `err`.
pub fn execute_command_to<W: Write, E: Write>(
    args: &DocspellArgs,
    out: &mut W,
    err: &mut E,
) -> Result<ExitCode> {
    match &args.command {
        Command::Sort(sort_args) => sort_word_lists(sort_args, args, out, err),
        Command::Check(check_args) => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            check_text(check_args, &text, args, out)
        }
        Command::Classify(classify_args) => classify_tokens(classify_args, args, out),
        Command::Release(release_args) => show_release(release_args, args, out),
    }
}

/// Sort word lists one after another, stopping at the first failure.
///
/// Lists handled before a failing one keep whatever was saved.
fn sort_word_lists<W: Write, E: Write>(
    args: &SortArgs,
    cli_args: &DocspellArgs,
    out: &mut W,
    err: &mut E,
) -> Result<ExitCode> {
    let additions: Vec<String> = args
        .add_words
        .iter()
        .map(|word| newline_terminated(word))
        .collect();

    for path in &args.word_lists {
        let mut list = WordList::load(path)?;
        let outcome = merge(list.lines(), &additions);
        let save = args.should_save() && outcome.is_changed();

        let result = SortResult::new(path, &outcome, args.should_show_diff(), save)?;
        output_result(out, &result, cli_args)?;

        if save {
            writeln!(err, "Saving to file {}", path.display())?;
            list.set_lines(outcome.merged);
            list.save()?;
            info!("Saved {} lines to {}", list.len(), path.display());
        } else {
            info!(
                "{}: {}",
                path.display(),
                if outcome.is_changed() { "not saved" } else { "already sorted" }
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Spell-check `text` and report every remaining error.
///
/// Exits with failure when any error is reported.
pub fn check_text<W: Write>(
    args: &CheckArgs,
    text: &str,
    cli_args: &DocspellArgs,
    out: &mut W,
) -> Result<ExitCode> {
    let config = check_config(args)?;
    let release = ReleaseResolver::new(&config.root)
        .with_version_file(&config.version_file)
        .resolve();

    let checker = SpellChecker::from_config(&config, &release)?;
    let report = CheckReport::new(&release, checker.check(text)?);
    output_result(out, &report, cli_args)?;

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        info!("{} spelling errors", report.error_count);
        Ok(ExitCode::FAILURE)
    }
}

/// Build the effective check configuration: file values first, flags on top.
fn check_config(args: &CheckArgs) -> Result<SpellConfig> {
    let mut config = match &args.config {
        Some(path) => SpellConfig::load(path)?,
        None => SpellConfig::default(),
    };

    if !args.word_lists.is_empty() {
        config.word_lists = args.word_lists.clone();
    }
    if !args.dictionaries.is_empty() {
        config.dictionaries = args.dictionaries.clone();
    }
    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(version_file) = &args.version_file {
        config.version_file = version_file.clone();
    }
    if let Some(width) = args.context_width {
        config.context_width = width;
    }
    if let Some(count) = args.max_suggestions {
        config.max_suggestions = count;
    }
    if let Some(distance) = args.max_distance {
        config.max_distance = distance;
    }
    if !args.classifiers.is_empty() {
        config.classifiers = Some(args.classifiers.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Show which classifiers accept each token.
fn classify_tokens<W: Write>(
    args: &ClassifyArgs,
    cli_args: &DocspellArgs,
    out: &mut W,
) -> Result<ExitCode> {
    let release = match &args.release {
        Some(version) => ReleaseVersion::new(version.clone(), VersionSource::Override),
        None => ReleaseVersion::resolve(&args.root),
    };
    let bank = ClassifierBank::standard(&release);

    let tokens = args
        .tokens
        .iter()
        .map(|token| {
            let classifiers: Vec<String> =
                bank.matching(token).into_iter().map(String::from).collect();
            ClassifyResult {
                token: token.clone(),
                suppressed: !classifiers.is_empty(),
                classifiers,
            }
        })
        .collect();

    let report = ClassifyReport {
        release: release.as_str().to_string(),
        source: release.source(),
        tokens,
    };
    output_result(out, &report, cli_args)?;

    Ok(ExitCode::SUCCESS)
}

/// Show the resolved release version and where it came from.
fn show_release<W: Write>(
    args: &ReleaseArgs,
    cli_args: &DocspellArgs,
    out: &mut W,
) -> Result<ExitCode> {
    let mut resolver = ReleaseResolver::new(&args.root);
    if let Some(version_file) = &args.version_file {
        resolver = resolver.with_version_file(version_file);
    }

    let release = resolver.resolve();
    output_result(out, &ReleaseInfo::from(&release), cli_args)?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> DocspellArgs {
        DocspellArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_check_config_overrides() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("docspell.json");
        fs::write(&config_path, r#"{"context_width": 10, "max_suggestions": 2}"#).unwrap();

        let args = parse(&[
            "docspell",
            "check",
            "--config",
            config_path.to_str().unwrap(),
            "--context",
            "20",
        ]);
        let Command::Check(check_args) = &args.command else {
            panic!("Expected Check command");
        };

        let config = check_config(check_args).unwrap();
        assert_eq!(config.context_width, 20);
        assert_eq!(config.max_suggestions, 2);
        assert!(config.classifiers.is_none());
    }

    #[test]
    fn test_classify_tokens() {
        let args = parse(&["docspell", "classify", "--release", "RC", "RC", "hello", "/dev/sda"]);
        let mut out = Vec::new();

        execute_command_to(&args, &mut out, &mut io::sink()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "RC: acronym, version\nhello: not suppressed\n/dev/sda: path\n"
        );
    }

    #[test]
    fn test_show_release_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("VERSION"), "B7\n").unwrap();

        let args = parse(&["docspell", "release", "--root", dir.path().to_str().unwrap()]);
        let mut out = Vec::new();
        execute_command_to(&args, &mut out, &mut io::sink()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "B7 (from version file)\n");
    }

    #[test]
    fn test_classify_release_flag_is_an_override() {
        let args = parse(&[
            "docspell", "--format", "json", "classify", "--release", "B7", "B7",
        ]);
        let mut out = Vec::new();
        execute_command_to(&args, &mut out, &mut io::sink()).unwrap();

        let report: ClassifyReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.release, "B7");
        assert_eq!(report.source, VersionSource::Override);
        assert_eq!(report.tokens[0].classifiers, vec!["version"]);
    }

    #[test]
    fn test_saving_status_only_when_changed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "b\na\n").unwrap();
        let args = parse(&["docspell", "sort", "-q", "-s", path.to_str().unwrap()]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        execute_command_to(&args, &mut out, &mut err).unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            format!("Saving to file {}\n", path.display())
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");

        let mut err = Vec::new();
        execute_command_to(&args, &mut out, &mut err).unwrap();
        assert!(err.is_empty());
        assert!(out.is_empty());
    }
}
