// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linkarc CLI entrypoint.
//!
//! Prints a built-in demo linkage, or a JSON linkage bundle given as a file
//! argument, in the selected output forms (diagram by default).

use std::process::ExitCode;

use serde::Deserialize;
use smol_str::SmolStr;

use linkarc::model::{Dictionary, Disjunct, Link, Linkage, Sentence, SentenceWord};
use linkarc::options::DisplayOptions;
use linkarc::render::{
    render_diagram, render_disjuncts, render_links_and_domains, render_postscript,
    PostscriptMode,
};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<bundle.json>] [--walls] [--long] [--show-suffixes] [--no-subscripts] [--width <cols>] [--links] [--disjuncts] [--postscript]\n\nWithout a bundle file a built-in demo linkage is printed.\nThe arc diagram is always printed; --links, --disjuncts and --postscript\nadd the flat listings and the PostScript document."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    bundle: Option<String>,
    walls: bool,
    long: bool,
    show_suffixes: bool,
    no_subscripts: bool,
    width: Option<usize>,
    links: bool,
    disjuncts: bool,
    postscript: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--walls" => options.walls = true,
            "--long" => options.long = true,
            "--show-suffixes" => options.show_suffixes = true,
            "--no-subscripts" => options.no_subscripts = true,
            "--links" => options.links = true,
            "--disjuncts" => options.disjuncts = true,
            "--postscript" => options.postscript = true,
            "--width" => {
                let Some(value) = args.next() else { return Err(()) };
                let Ok(width) = value.parse::<usize>() else { return Err(()) };
                if width == 0 {
                    return Err(());
                }
                options.width = Some(width);
            }
            other if other.starts_with("--") => return Err(()),
            other => {
                if options.bundle.is_some() {
                    return Err(());
                }
                options.bundle = Some(other.to_owned());
            }
        }
    }

    Ok(options)
}

/// A self-contained linkage description, as stored in fixture files.
#[derive(Debug, Deserialize)]
struct LinkageBundle {
    sentence: Sentence,
    #[serde(default)]
    links: Vec<Link>,
    #[serde(default)]
    options: DisplayOptions,
}

fn demo_bundle() -> LinkageBundle {
    let mut sentence = Sentence::new(Dictionary::new(true, true));
    let mut wall = SentenceWord::synthetic();
    wall.set_chosen(Some(Disjunct::new("LEFT-WALL", "Wd+", 0.0)));
    sentence.push_word(wall);
    for (unsplit, token, expression) in [
        ("the", "the", "Ds+"),
        ("big", "big.a", "A+"),
        ("cat", "cat.n", "Ds- A- Ss+"),
        ("chased", "chased.v", "Ss- O+"),
        ("a", "a", "Ds+"),
        ("dog", "dog.n", "Ds- O-"),
        (".", ".", "Xp-"),
    ] {
        let mut word = SentenceWord::new(unsplit);
        word.set_alternatives(vec![SmolStr::new(unsplit)]);
        word.set_chosen(Some(Disjunct::new(token, expression, 0.0)));
        sentence.push_word(word);
    }
    let mut wall = SentenceWord::synthetic();
    wall.set_chosen(Some(Disjunct::new("RIGHT-WALL", "RW-", 0.0)));
    sentence.push_word(wall);

    let links = vec![
        Link::new(0, 4, "Wd", "Wd", "Wd").expect("demo link"),
        Link::new(1, 3, "Ds", "Ds", "Ds").expect("demo link"),
        Link::new(2, 3, "A", "A", "A").expect("demo link"),
        Link::new(3, 4, "Ss", "Ss", "Ss").expect("demo link"),
        Link::new(4, 6, "O", "O", "O").expect("demo link"),
        Link::new(5, 6, "Ds", "Ds", "Ds").expect("demo link"),
        Link::new(4, 7, "Xp", "Xp", "Xp").expect("demo link"),
    ];

    LinkageBundle {
        sentence,
        links,
        options: DisplayOptions::default(),
    }
}

fn run(cli: &CliOptions) -> Result<(), String> {
    let bundle = match &cli.bundle {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read {path}: {err}"))?;
            serde_json::from_str::<LinkageBundle>(&json)
                .map_err(|err| format!("cannot parse {path}: {err}"))?
        }
        None => demo_bundle(),
    };

    let mut options = bundle.options;
    options.display_walls |= cli.walls;
    options.display_short &= !cli.long;
    options.display_suffixes |= cli.show_suffixes;
    options.display_word_subscripts &= !cli.no_subscripts;
    if let Some(width) = cli.width {
        options.screen_width = width;
    }

    let linkage = Linkage::new(&bundle.sentence, bundle.links, options)
        .map_err(|err| format!("invalid linkage: {err}"))?;

    print!("{}", render_diagram(&linkage).map_err(|err| err.to_string())?);
    if cli.links {
        print!(
            "{}",
            render_links_and_domains(&linkage).map_err(|err| err.to_string())?
        );
    }
    if cli.disjuncts {
        print!("{}", render_disjuncts(&linkage, None));
    }
    if cli.postscript {
        print!(
            "{}",
            render_postscript(&linkage, PostscriptMode::Document)
                .map_err(|err| err.to_string())?
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "linkarc".to_owned());

    let Ok(cli) = parse_options(args) else {
        print_usage(&program);
        return ExitCode::from(2);
    };

    if let Err(message) = run(&cli) {
        eprintln!("{program}: {message}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
