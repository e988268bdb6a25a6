// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkarc-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkarc and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! PostScript description of a linkage.
//!
//! Reuses the arc layout and page breaks computed for the terminal diagram —
//! layout is never derived twice. The emitted body is three bracketed
//! blocks: the word list, the `[left right height (label)]` link triples,
//! and the page row starts. The surrounding program text is an opaque
//! template.

use crate::layout::ArcLayout;
use crate::model::Linkage;
use crate::resolve::ResolveError;

use super::diagram::{diagram_run, DiagramRun};

/// Output framing for [`render_postscript`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostscriptMode {
    /// Body only, for embedding.
    Fragment,
    /// Full document with the fixed program preamble and postamble.
    Document,
}

/// Renders the linkage as a PostScript description.
///
/// A diagram that would exceed the height bound yields the same diagnostic
/// text as the terminal renderer.
pub fn render_postscript(
    linkage: &Linkage<'_>,
    mode: PostscriptMode,
) -> Result<String, ResolveError> {
    let (layout, row_starts) = match diagram_run(linkage)? {
        DiagramRun::Drawn {
            layout, row_starts, ..
        } => (layout, row_starts),
        DiagramRun::TooHigh { text } => return Ok(text),
    };

    let body = postscript_body(linkage, &layout, &row_starts)?;
    Ok(match mode {
        PostscriptMode::Fragment => body,
        PostscriptMode::Document => format!("{HEADER}{body}{TRAILER}"),
    })
}

fn postscript_body(
    linkage: &Linkage<'_>,
    layout: &ArcLayout,
    row_starts: &[usize],
) -> Result<String, ResolveError> {
    let words = linkage.display_words()?;
    let offset = usize::from(!layout.show_first());
    let last = linkage.num_words().saturating_sub(1);
    let mut body = String::new();
    let mut int = itoa::Buffer::new();

    body.push('[');
    for (printed, word) in words
        .iter()
        .take(layout.words_to_print())
        .skip(offset)
        .enumerate()
    {
        if printed % 10 == 0 && printed > 0 {
            body.push('\n');
        }
        body.push('(');
        body.push_str(word);
        body.push(')');
    }
    body.push_str("]\n");

    body.push('[');
    let mut printed = 0usize;
    for (index, link) in linkage.links().iter().enumerate() {
        let Some(bounds) = link.bounds() else { continue };
        if !layout.show_first() && bounds.left() == 0 {
            continue;
        }
        if !layout.show_last() && bounds.right() == last {
            continue;
        }
        // Links the packer suppressed (empty-word and hidden-suffix links)
        // have no height and are not emitted.
        let Some(height) = layout.link_rows()[index] else { continue };
        if printed % 7 == 0 && printed > 0 {
            body.push('\n');
        }
        printed += 1;
        body.push('[');
        body.push_str(int.format(bounds.left() - offset));
        body.push(' ');
        body.push_str(int.format(bounds.right() - offset));
        body.push(' ');
        body.push_str(int.format(height));
        body.push_str(" (");
        body.push_str(link.label());
        body.push_str(")]");
    }
    body.push_str("]\n");

    body.push('[');
    for (row, start) in row_starts.iter().enumerate() {
        if row > 0 {
            body.push(' ');
        }
        body.push_str(int.format(*start));
    }
    body.push_str("]\n");

    Ok(body)
}

static HEADER: &str = "\
%!PS-Adobe-2.0 EPSF-1.2
%%Pages: 1
%%BoundingBox: 0 -20 500 200
%%EndComments
%%BeginDocument:

% compute size of diagram by adding
% #rows x 8.5
% (#rows -1) x 10
% \\sum maxheight x 10
/nulllink () def                     % The symbol of a null link
/wordfontsize 11 def      % the size of the word font
/labelfontsize 9 def      % the size of the connector label font
/ex 10 def  % the horizontal radius of all the links
/ey 10 def  % the height of the level 0 links
/ed 10 def  % amount to add to this height per level
/radius 10 def % radius for rounded arcs
/row-spacing 10 def % the space between successive rows of the diagram

/gap wordfontsize .5 mul def  % the gap between words
/top-of-words wordfontsize .85 mul def
             % the delta y above where the text is written where
             % the major axis of the ellipse is located
/label-gap labelfontsize .1 mul def

/centerpage 6.5 72 mul 2 div def
  % this number of points from the left margin is the center of page

/rightpage 6.5 72 mul def
  % number of points from the left margin is the the right margin

/show-string-centered-dict 5 dict def

/show-string-centered {
  show-string-centered-dict begin
  /string exch def
  /ycenter exch def
  /xcenter exch def
  xcenter string stringwidth pop 2 div sub
  ycenter labelfontsize .3 mul sub
  moveto
  string show
  end
} def

/clear-word-box {
  show-string-centered-dict begin
  /string exch def
  /ycenter exch def
  /xcenter exch def
  newpath
  /urx string stringwidth pop 2 div def
  /ury labelfontsize .3 mul def
  xcenter urx sub ycenter ury sub moveto
  xcenter urx add ycenter ury sub lineto
  xcenter urx add ycenter ury add lineto
  xcenter urx sub ycenter ury add lineto
  closepath
  1 setgray fill
  0 setgray
  end
} def

/diagram-sentence-dict 20 dict def

/diagram-sentence-circle
{diagram-sentence-dict begin
   /links exch def
   /words exch def
   /n words length def
   /Times-Roman findfont wordfontsize scalefont setfont
   /x 0 def
   /y 0 def

   /left-ends [x dup words {stringwidth pop add gap add dup}
	                     forall pop pop] def
   /right-ends [x words {stringwidth pop add dup gap add} forall pop] def
   /centers [0 1 n 1 sub {/i exch def
		      left-ends i get
		      right-ends i get
		      add 2 div
		    } for ] def

   x y moveto
   words {show gap 0 rmoveto} forall

   .5 setlinewidth

   links {dup 0 get /leftword exch def
          dup 1 get /rightword exch def
          dup 2 get /level exch def
          3 get /string exch def
          newpath
          string nulllink eq {[2] 1 setdash}{[] 0 setdash} ifelse
          centers leftword get
	  y top-of-words add
          moveto

          centers rightword get
          centers leftword get
          sub 2  div dup
          radius
          lt {/radiusx exch def}{pop /radiusx radius def} ifelse

          centers leftword get
	  y top-of-words add ey ed level mul add add
          centers rightword get
	  y top-of-words add ey ed level mul add add
	  radiusx
          arcto
          4 {pop} repeat
	  centers rightword get
          y top-of-words add ey ed level mul add add
	  centers rightword get
	  y top-of-words add
	  radiusx
	  arcto
          4 {pop} repeat
	  centers rightword get
	  y top-of-words add
	  lineto

	  stroke

          /radius-y    ey ed level mul add	  def

	  /center-arc-x
	     centers leftword get centers rightword get add 2 div
	  def

          /center-arc-y
             y top-of-words radius-y add add
	  def

          /Courier-Bold findfont labelfontsize scalefont setfont
	  center-arc-x center-arc-y string clear-word-box
	  center-arc-x center-arc-y string show-string-centered
          } forall
	  end
  } def

/diagramdict 20 dict def

/diagram
{diagramdict begin
   /break-words exch def
   /links exch def
   /words exch def
   /n words length def
   /n-rows break-words length def
   /Times-Roman findfont wordfontsize scalefont setfont

   /left-ends [0 dup words {stringwidth pop add gap add dup}
	                     forall pop pop] def
   /right-ends [0 words {stringwidth pop add dup gap add} forall pop] def

   /lwindows [ break-words {left-ends exch get gap 2 div sub } forall ] def
   /rwindows [1 1 n-rows 1 sub {/i exch def
		      lwindows i get } for
	              right-ends n 1 sub get gap 2 div add
	      ] def

    /max 0 def
    0 1 links length 1 sub {
	/i exch def
	/t links i get 2 get def
	t max gt {/max t def} if
      } for

    /max-height ed max mul ey add top-of-words add row-spacing add def
    /total-height n-rows max-height mul row-spacing sub def

    /max-width 0 def            % compute the widest window
    0 1 n-rows 1 sub {
        /i exch def
        /t rwindows i get lwindows i get sub def
        t max-width gt {/max-width t def} if
      } for

    centerpage max-width 2 div sub 0 translate  % centers it

   n-rows 1 sub -1 0
     {/i exch def
	gsave
	newpath
        /centering 0 def
               % set centering to 0 to prevent centering of each row

	centering -100 moveto  % -100 because some letters go below zero
        centering max-height n-rows mul lineto
        rwindows i get lwindows i get sub centering add
                       max-height n-rows mul lineto
        rwindows i get lwindows i get sub centering add
                       -100 lineto
	closepath
        clip
	lwindows i get neg n-rows i sub 1 sub max-height mul translate
        centerpage centering 0 translate
        words links diagram-sentence-circle
	grestore
     } for
     end
} def

";

static TRAILER: &str = "\
diagram

%%EndDocument
";

#[cfg(test)]
mod tests {
    use super::{render_postscript, PostscriptMode};
    use crate::model::fixtures;
    use crate::model::{Link, Linkage};
    use crate::options::DisplayOptions;
    use crate::render::diagram::DIAGRAM_TOO_HIGH;

    #[test]
    fn fragment_lists_words_links_and_row_starts() {
        let sentence = fixtures::cat_sentence();
        let linkage =
            Linkage::new(&sentence, fixtures::cat_links(), DisplayOptions::default())
                .expect("linkage");
        let body = render_postscript(&linkage, PostscriptMode::Fragment).expect("postscript");
        assert_eq!(body, "[(the)(cat)(ran)(.)]\n[[0 1 0 (Ds)]]\n[0]\n");
    }

    #[test]
    fn document_mode_wraps_the_fragment() {
        let sentence = fixtures::cat_sentence();
        let linkage =
            Linkage::new(&sentence, fixtures::cat_links(), DisplayOptions::default())
                .expect("linkage");
        let text = render_postscript(&linkage, PostscriptMode::Document).expect("postscript");
        assert!(text.starts_with("%!PS-Adobe-2.0 EPSF-1.2\n"));
        assert!(text.contains("[(the)(cat)(ran)(.)]\n"));
        assert!(text.ends_with("diagram\n\n%%EndDocument\n"));
    }

    #[test]
    fn indices_are_renumbered_when_the_left_wall_hides() {
        let sentence = fixtures::cat_sentence();
        let links = vec![
            Link::new(1, 2, "Ds", "Ds", "Ds").expect("link"),
            Link::new(2, 3, "Ss", "Ss", "Ss").expect("link"),
        ];
        let linkage =
            Linkage::new(&sentence, links, DisplayOptions::default()).expect("linkage");
        let body = render_postscript(&linkage, PostscriptMode::Fragment).expect("postscript");
        // Word 1 of the sentence is word 0 of the display.
        assert!(body.contains("[0 1 0 (Ds)]"));
        assert!(body.contains("[1 2 0 (Ss)]"));
    }

    #[test]
    fn packer_suppressed_links_are_not_emitted() {
        let sentence = fixtures::stem_suffix_sentence();
        let linkage = Linkage::new(
            &sentence,
            fixtures::stem_suffix_links(),
            DisplayOptions::default(),
        )
        .expect("linkage");
        let body = render_postscript(&linkage, PostscriptMode::Fragment).expect("postscript");
        assert!(body.contains("(Ss)"));
        assert!(!body.contains("(LL)"));
    }

    #[test]
    fn too_high_diagrams_yield_the_same_diagnostic() {
        let sentence = fixtures::cat_sentence();
        let links: Vec<Link> = (0..crate::layout::MAX_HEIGHT)
            .map(|_| Link::new(1, 2, "Ds", "Ds", "Ds").expect("link"))
            .collect();
        let linkage =
            Linkage::new(&sentence, links, DisplayOptions::default()).expect("linkage");
        let text = render_postscript(&linkage, PostscriptMode::Document).expect("postscript");
        assert_eq!(text, DIAGRAM_TOO_HIGH);
    }
}
