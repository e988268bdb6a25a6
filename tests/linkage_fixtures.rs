// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use linkarc::model::{Link, Linkage, Sentence};
use linkarc::options::DisplayOptions;
use linkarc::render::{
    render_diagram, render_disjuncts, render_links_and_domains, render_postscript,
    PostscriptMode,
};

#[derive(Debug, Deserialize)]
struct LinkageBundle {
    sentence: Sentence,
    #[serde(default)]
    links: Vec<Link>,
    #[serde(default)]
    options: DisplayOptions,
}

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read_bundle(name: &str) -> LinkageBundle {
    let path = fixtures_dir().join(name);
    let json = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));
    serde_json::from_str(&json)
        .unwrap_or_else(|err| panic!("failed to parse {path:?}: {err}"))
}

#[test]
fn cat_fixture_renders_the_expected_diagram() {
    let bundle = read_bundle("cat.json");
    let linkage = Linkage::new(&bundle.sentence, bundle.links, bundle.options)
        .expect("expected cat.json to build a linkage");
    let diagram = render_diagram(&linkage).expect("diagram");
    assert_eq!(diagram, "\n +-Ds+       \n |   |       \nthe cat ran . \n\n");
}

#[test]
fn cat_fixture_flat_outputs_are_consistent() {
    let bundle = read_bundle("cat.json");
    let linkage = Linkage::new(&bundle.sentence, bundle.links, bundle.options)
        .expect("expected cat.json to build a linkage");

    let links = render_links_and_domains(&linkage).expect("links");
    assert!(links.contains("<---Ds---->"));
    assert!(links.contains("the"));
    assert!(links.contains("cat"));

    let disjuncts = render_disjuncts(&linkage, None);
    assert_eq!(disjuncts.lines().count(), 4);
    assert!(disjuncts.contains("Ss- Xp+"));

    let postscript = render_postscript(&linkage, PostscriptMode::Fragment).expect("postscript");
    assert_eq!(postscript, "[(the)(cat)(ran)(.)]\n[[0 1 0 (Ds)]]\n[0]\n");
}

#[test]
fn stem_suffix_fixture_merges_into_the_stem_slot() {
    let bundle = read_bundle("stem_suffix.json");
    let linkage = Linkage::new(&bundle.sentence, bundle.links, bundle.options)
        .expect("expected stem_suffix.json to build a linkage");

    let words = linkage.display_words().expect("display words");
    let words: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    assert_eq!(words, vec!["he", "runed", ""]);

    let diagram = render_diagram(&linkage).expect("diagram");
    assert!(diagram.contains("runed"));
    assert!(!diagram.contains("=.ed"));
    // The suffix link renders nowhere either.
    assert!(!diagram.contains("LL"));
}

#[test]
fn island_fixture_brackets_the_unlinked_word() {
    let bundle = read_bundle("island.json");
    let linkage = Linkage::new(&bundle.sentence, bundle.links, bundle.options)
        .expect("expected island.json to build a linkage");
    let diagram = render_diagram(&linkage).expect("diagram");
    assert_eq!(diagram, "\nthe [gorp] \n\n");
}

#[test]
fn fixtures_render_identically_on_repeat_runs() {
    for name in ["cat.json", "stem_suffix.json", "island.json"] {
        let bundle = read_bundle(name);
        let linkage = Linkage::new(&bundle.sentence, bundle.links.clone(), bundle.options.clone())
            .expect("linkage");
        let first = render_diagram(&linkage).expect("diagram");
        let linkage = Linkage::new(&bundle.sentence, bundle.links, bundle.options)
            .expect("linkage");
        let second = render_diagram(&linkage).expect("diagram");
        assert_eq!(first, second, "unstable render for {name}");
    }
}
