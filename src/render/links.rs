// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flat links-and-domains listing.
//!
//! Links in original order, each prefixed by its domain names left-aligned
//! to the widest domain list in the linkage, then an arrow line padded over
//! fixed byte templates.

use smol_str::SmolStr;

use crate::model::{Link, LinkBounds, Linkage};
use crate::resolve::ResolveError;
use crate::text::overlay_left;

const WORD_TEMPLATE: &str = "               ";
const LABEL_TEMPLATE: &str = "     ";
const ARC_TEMPLATE: &str = "-----";
/// Four columns per missing domain entry, matching ` (%s)` for the
/// single-letter domain names.
const DOMAIN_PAD: &str = "    ";

/// Renders every link with its domains, plus any post-processing violation.
pub fn render_links_and_domains(linkage: &Linkage<'_>) -> Result<String, ResolveError> {
    let words = linkage.display_words()?;
    let mut longest = 0usize;
    for link in linkage.links() {
        if link.is_excluded() {
            continue;
        }
        longest = longest.max(link.domains().len());
    }

    let mut out = String::new();
    for link in linkage.links() {
        let Some(bounds) = link.bounds() else { continue };
        for domain in link.domains() {
            out.push_str(" (");
            out.push_str(domain);
            out.push(')');
        }
        for _ in link.domains().len()..longest {
            out.push_str(DOMAIN_PAD);
        }
        out.push_str("   ");
        append_arrow_line(&mut out, linkage, words, bounds, link);
    }
    out.push('\n');

    if let Some(violation) = linkage.violation() {
        out.push_str("P.P. violations:\n");
        out.push_str("        ");
        out.push_str(violation);
        out.push_str("\n\n");
    }

    Ok(out)
}

fn append_arrow_line(
    out: &mut String,
    linkage: &Linkage<'_>,
    words: &[SmolStr],
    bounds: &LinkBounds,
    link: &Link,
) {
    let dict = linkage.sentence().dict();
    let markers = dict.markers();
    let last = linkage.num_words().saturating_sub(1);

    if bounds.left() == 0 && dict.left_wall_defined() {
        overlay_left(out, markers.left_wall_display(), WORD_TEMPLATE);
    } else if bounds.left() == last && dict.right_wall_defined() {
        overlay_left(out, markers.right_wall_display(), WORD_TEMPLATE);
    } else {
        overlay_left(out, &words[bounds.left()], WORD_TEMPLATE);
    }
    overlay_left(out, link.llabel(), LABEL_TEMPLATE);
    out.push_str("   <---");
    overlay_left(out, link.label(), ARC_TEMPLATE);
    out.push_str("->  ");
    overlay_left(out, link.rlabel(), LABEL_TEMPLATE);
    out.push_str("     ");
    out.push_str(&words[bounds.right()]);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use smol_str::SmolStr;

    use super::render_links_and_domains;
    use crate::model::fixtures;
    use crate::model::{Link, Linkage};
    use crate::options::DisplayOptions;

    #[test]
    fn lists_links_in_original_order() {
        let sentence = fixtures::cat_sentence();
        let options = DisplayOptions {
            display_walls: true,
            ..DisplayOptions::default()
        };
        let linkage =
            Linkage::new(&sentence, fixtures::cat_links_with_walls(), options)
                .expect("linkage");
        let text = render_links_and_domains(&linkage).expect("links");
        let lines: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("   LEFT-WALL"));
        assert!(lines[0].contains("<---Wd---->"));
        assert!(lines[0].ends_with("ran"));
        assert!(lines[1].contains("the"));
    }

    #[test]
    fn domain_columns_align_arrow_lines() {
        let sentence = fixtures::cat_sentence();
        let mut first = Link::new(1, 2, "Ds", "Ds", "Ds").expect("link");
        first.set_domains(vec![SmolStr::new("m"), SmolStr::new("d")]);
        let second = Link::new(2, 3, "Ss", "Ss", "Ss").expect("link");
        let linkage = Linkage::new(&sentence, vec![first, second], DisplayOptions::default())
            .expect("linkage");
        let text = render_links_and_domains(&linkage).expect("links");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with(" (m) (d)   "));
        assert!(lines[1].starts_with("           "));
        let arrow = |line: &str| line.find("<---").expect("arrow");
        assert_eq!(arrow(lines[0]), arrow(lines[1]));
    }

    #[test]
    fn excluded_links_are_skipped() {
        let sentence = fixtures::cat_sentence();
        let links = vec![Link::excluded("Xx"), Link::new(1, 2, "Ds", "Ds", "Ds").expect("link")];
        let linkage =
            Linkage::new(&sentence, links, DisplayOptions::default()).expect("linkage");
        let text = render_links_and_domains(&linkage).expect("links");
        assert_eq!(text.lines().filter(|line| !line.is_empty()).count(), 1);
    }

    #[test]
    fn violations_are_appended() {
        let sentence = fixtures::cat_sentence();
        let mut linkage =
            Linkage::new(&sentence, fixtures::cat_links(), DisplayOptions::default())
                .expect("linkage");
        linkage.set_violation(Some(SmolStr::new("Unbounded s domain")));
        let text = render_links_and_domains(&linkage).expect("links");
        assert!(text.ends_with("P.P. violations:\n        Unbounded s domain\n\n"));
    }
}
