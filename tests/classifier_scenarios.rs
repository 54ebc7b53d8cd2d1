use std::fs;

use clap::Parser;
use tempfile::TempDir;

use docspell::classify::{
    AcronymClassifier, CLASSIFIER_NAMES, Classifier, ClassifierBank, CryptoAddressClassifier,
    OptionClassifier, PackageClassifier, PathClassifier, VersionClassifier,
};
use docspell::cli::{Command, DocspellArgs, check_text};
use docspell::error::Result;
use docspell::release::{ReleaseVersion, VersionSource};

fn all_classifiers(release: &ReleaseVersion) -> Vec<Box<dyn Classifier>> {
    vec![
        Box::new(AcronymClassifier::new()),
        Box::new(OptionClassifier::new()),
        Box::new(PackageClassifier::new()),
        Box::new(PathClassifier::new()),
        Box::new(CryptoAddressClassifier::new()),
        Box::new(VersionClassifier::new(release)),
    ]
}

fn accepted_by(token: &str, release: &ReleaseVersion) -> Vec<&'static str> {
    all_classifiers(release)
        .iter()
        .filter(|classifier| classifier.accepts(token))
        .map(|classifier| classifier.name())
        .collect()
}

#[test]
fn acronyms_and_camel_case() {
    let release = ReleaseVersion::unknown();

    assert_eq!(accepted_by("API", &release), vec!["acronym"]);
    assert!(accepted_by("APIs", &release).contains(&"acronym"));
    assert!(!accepted_by("Api", &release).contains(&"acronym"));
    assert!(accepted_by("Api", &release).contains(&"option"));
    assert_eq!(accepted_by("win:fullScreen", &release), vec!["option"]);
}

#[test]
fn package_names() {
    let release = ReleaseVersion::unknown();

    assert_eq!(accepted_by("libfoo-dev", &release), vec!["package"]);
    assert_eq!(accepted_by("fonts-dejavu-ttf", &release), vec!["package"]);
    assert_eq!(accepted_by("virt-manager", &release), vec!["package"]);
    assert!(accepted_by("libfoo", &release).is_empty());
}

#[test]
fn crypto_addresses() {
    let release = ReleaseVersion::unknown();

    for address in [
        "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        "0x0000000000000000000000000000000000000000",
    ] {
        assert!(accepted_by(address, &release).contains(&"crypto-address"));
    }
}

#[test]
fn release_version_equality() {
    let release = ReleaseVersion::new("1.2.3", VersionSource::File);

    assert_eq!(accepted_by("1.2.3", &release).last(), Some(&"version"));
    assert!(!accepted_by("1.2.4", &release).contains(&"version"));
}

#[test]
fn single_match_is_independent_of_bank_order() {
    let release = ReleaseVersion::new("B7", VersionSource::Vcs);
    let tokens = ["API", "libfoo-dev", "/dev/kvmfr0", "win:fullScreen", "libfoo"];

    let forward = ClassifierBank::standard(&release);
    let mut reversed = ClassifierBank::new();
    for classifier in all_classifiers(&release).into_iter().rev() {
        reversed.register(classifier);
    }

    for token in tokens {
        assert_eq!(forward.is_suppressed(token), reversed.is_suppressed(token), "{token}");
    }

    // Removing unrelated classifiers keeps single-match tokens suppressed.
    for token in ["API", "libfoo-dev", "/dev/kvmfr0"] {
        let owner = forward.matching(token);
        assert_eq!(owner.len(), 1, "{token}");

        let others: Vec<&str> = CLASSIFIER_NAMES
            .iter()
            .copied()
            .filter(|name| *name != owner[0])
            .collect();
        let mut bank = ClassifierBank::standard(&release);
        for name in others {
            bank.remove(name);
        }
        assert!(bank.is_suppressed(token), "{token}");
        assert_eq!(bank.len(), 1);
    }
}

#[test]
fn check_reports_only_unsuppressed_words() -> Result<()> {
    let dir = TempDir::new()?;
    let dictionary = dir.path().join("dictionary.txt");
    let words = dir.path().join("words.txt");
    fs::write(&dictionary, "install\nthe\npackage\nand\nrun\n")?;
    fs::write(&words, "kvmfr\n")?;
    fs::write(dir.path().join("VERSION"), "B7\n")?;

    let args = DocspellArgs::try_parse_from([
        "docspell",
        "check",
        "--dictionary",
        dictionary.to_str().expect("utf-8 path"),
        "--word-list",
        words.to_str().expect("utf-8 path"),
        "--root",
        dir.path().to_str().expect("utf-8 path"),
        "--context",
        "8",
    ])
    .expect("valid arguments");
    let Command::Check(check_args) = &args.command else {
        panic!("Expected Check command");
    };

    let text = "Install the libfoo-dev package and run kvmfr\nwith B7 on /dev/kvmfr0\n";
    let mut out = Vec::new();
    check_text(check_args, text, &args, &mut out)?;

    assert_eq!(
        String::from_utf8(out).expect("utf-8 output"),
        "Spelling error: with\nContext: n kvmfr with B7 on /\nSpelling error: on\nContext: with B7 on /dev/kv\n"
    );
    Ok(())
}
