//! Plain-text rendering for terminals.
//!
//! Block elements start on a new line, inline text is word-wrapped at the
//! configured width, measured in terminal columns. Definition descriptions and quotes are indented, list
//! items get a bullet or number, and `pre` content is copied verbatim.

use folio_core::{Element, Tag};
use unicode_width::UnicodeWidthStr;

/// Width used by [`TextWriter::default`].
pub const DEFAULT_WIDTH: usize = 80;

const BLOCK_ELEMENTS: &[&str] = &[
    "aside", "blockquote", "dd", "div", "dl", "dt", "h1", "h2", "h3", "h4", "h5", "h6", "li",
    "ol", "p", "section", "ul",
];

/// Writes element trees as wrapped plain text.
#[derive(Debug, Clone, Copy)]
pub struct TextWriter {
    width: usize,
    indent: usize,
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl TextWriter {
    /// Wrap lines at `width` columns.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            indent: 2,
        }
    }

    /// Set the indentation step for nested descriptions and quotes.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// The wrap width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Render `element` as text.
    pub fn write(&self, element: &Element) -> String {
        let mut state = LineState::new(self.width);
        self.walk(element, &mut state);
        state.finish()
    }

    fn walk(&self, element: &Element, state: &mut LineState) {
        match element {
            Element::Text(text) => state.push_text(text),
            Element::Fragment(children) => self.walk_all(children, state),
            Element::Tag(tag) => self.write_tag(tag, state),
            Element::Empty => {}
        }
    }

    fn walk_all(&self, children: &[Element], state: &mut LineState) {
        for child in children {
            self.walk(child, state);
        }
    }

    fn write_tag(&self, tag: &Tag, state: &mut LineState) {
        match tag.name.as_str() {
            "br" => state.newline(),
            "hr" => {
                state.break_line();
                let rule = "-".repeat(self.width.saturating_sub(state.indent).max(1));
                state.push_raw(&rule);
                state.break_line();
            }
            "pre" => {
                state.break_line();
                let content = Element::Tag(tag.clone()).text_content();
                for line in content.lines() {
                    state.push_raw(line);
                    state.newline();
                }
            }
            "ul" | "ol" => self.write_list(tag, state),
            name if BLOCK_ELEMENTS.contains(&name) => {
                let extra = if matches!(name, "dd" | "blockquote") {
                    self.indent
                } else {
                    0
                };
                state.break_line();
                state.indent += extra;
                self.walk_all(&tag.children, state);
                state.indent -= extra;
                state.break_line();
            }
            _ => self.walk_all(&tag.children, state),
        }
    }

    fn write_list(&self, list: &Tag, state: &mut LineState) {
        let ordered = list.name == "ol";
        let mut number = list
            .get_attr("start")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(1);

        state.break_line();
        for child in &list.children {
            let Element::Tag(item) = child else {
                self.walk(child, state);
                continue;
            };
            if item.name != "li" {
                self.write_tag(item, state);
                continue;
            }

            let marker = if ordered {
                let current = number;
                number = number.saturating_add(1);
                format!("{current}. ")
            } else {
                "- ".to_string()
            };
            state.break_line();
            state.push_marker(&marker);
            let width = marker.width();
            state.indent += width;
            self.walk_all(&item.children, state);
            state.indent -= width;
            state.break_line();
        }
    }
}

/// Cursor over the output being built.
struct LineState {
    out: String,
    width: usize,
    indent: usize,
    col: usize,
    // Indentation for the current line is not written yet.
    at_start: bool,
    // Nothing but indentation or a list marker on the current line.
    fresh: bool,
    pending_space: bool,
}

impl LineState {
    fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
            indent: 0,
            col: 0,
            at_start: true,
            fresh: true,
            pending_space: false,
        }
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.col = 0;
        self.at_start = true;
        self.fresh = true;
        self.pending_space = false;
    }

    fn break_line(&mut self) {
        if !self.fresh {
            self.newline();
        }
    }

    fn ensure_indent(&mut self) {
        if self.at_start {
            self.out.push_str(&" ".repeat(self.indent));
            self.col = self.indent;
            self.at_start = false;
        }
    }

    fn push_marker(&mut self, marker: &str) {
        self.ensure_indent();
        self.out.push_str(marker);
        self.col += marker.width();
    }

    fn push_raw(&mut self, text: &str) {
        self.ensure_indent();
        self.out.push_str(text);
        self.col += text.width();
        self.fresh = false;
    }

    fn push_text(&mut self, text: &str) {
        if text.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        for (i, word) in text.split_whitespace().enumerate() {
            if i > 0 {
                self.pending_space = true;
            }
            self.push_word(word);
        }
        if text.ends_with(char::is_whitespace) {
            self.pending_space = true;
        }
    }

    fn push_word(&mut self, word: &str) {
        let len = word.width();
        let space = self.pending_space && !self.fresh;
        if !self.fresh && self.col + usize::from(space) + len > self.width {
            self.newline();
        }
        self.ensure_indent();
        if self.pending_space && !self.fresh {
            self.out.push(' ');
            self.col += 1;
        }
        self.out.push_str(word);
        self.col += len;
        self.fresh = false;
        self.pending_space = false;
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Element {
        Tag::new("p").child(text).into()
    }

    #[test]
    fn test_wraps_at_width() {
        let out = TextWriter::new(9).write(&p("one two three four"));
        assert_eq!(out, "one two\nthree\nfour");
    }

    #[test]
    fn test_long_word_is_not_split() {
        let out = TextWriter::new(4).write(&p("abcdefgh ij"));
        assert_eq!(out, "abcdefgh\nij");
    }

    #[test]
    fn test_blocks_start_new_lines() {
        let out = TextWriter::default().write(&Element::fragment([p("a"), p("b")]));
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_inline_pieces_join_without_spaces() {
        let el: Element = Tag::new("div")
            .child("Foo")
            .child("(")
            .child("x")
            .child(", ")
            .child("*args")
            .child(")")
            .into();
        assert_eq!(TextWriter::default().write(&el), "Foo(x, *args)");
    }

    #[test]
    fn test_lists() {
        let ul: Element = Tag::new("ul")
            .child(Tag::new("li").child(p("first")))
            .child(Tag::new("li").child("second"))
            .into();
        assert_eq!(TextWriter::default().write(&ul), "- first\n- second");

        let ol: Element = Tag::new("ol")
            .attr("start", "3")
            .child(Tag::new("li").child("c"))
            .child(Tag::new("li").child("d"))
            .into();
        assert_eq!(TextWriter::default().write(&ol), "3. c\n4. d");
    }

    #[test]
    fn test_list_numbering_stops_at_the_largest_start() {
        let ol: Element = Tag::new("ol")
            .attr("start", u64::MAX.to_string())
            .child(Tag::new("li").child("last"))
            .child(Tag::new("li").child("after"))
            .into();
        let max = u64::MAX;
        assert_eq!(
            TextWriter::default().write(&ol),
            format!("{max}. last\n{max}. after")
        );
    }

    #[test]
    fn test_wide_characters_take_two_columns() {
        let out = TextWriter::new(8).write(&p("日本語 日本語 日本語"));
        assert_eq!(out, "日本語\n日本語\n日本語");
        assert!(out.lines().all(|line| line.width() <= 8));

        let out = TextWriter::new(13).write(&p("日本語 日本語 x"));
        assert_eq!(out, "日本語 日本語\nx");
    }

    #[test]
    fn test_wide_list_items_wrap_under_marker() {
        let ul: Element = Tag::new("ul")
            .child(Tag::new("li").child("日本 日本"))
            .into();
        assert_eq!(TextWriter::new(7).write(&ul), "- 日本\n  日本");
    }

    #[test]
    fn test_list_items_wrap_under_marker() {
        let ul: Element = Tag::new("ul")
            .child(Tag::new("li").child("aaa bbb ccc"))
            .into();
        assert_eq!(TextWriter::new(9).write(&ul), "- aaa bbb\n  ccc");
    }

    #[test]
    fn test_definition_descriptions_are_indented() {
        let dl: Element = Tag::new("dl")
            .child(Tag::new("dt").child("Term"))
            .child(Tag::new("dd").child("Desc"))
            .into();
        assert_eq!(TextWriter::default().write(&dl), "Term\n  Desc");
        assert_eq!(TextWriter::default().with_indent(4).write(&dl), "Term\n    Desc");
    }

    #[test]
    fn test_pre_is_verbatim() {
        let pre: Element = Tag::new("pre")
            .child(Tag::new("code").child("a  b\nc"))
            .into();
        assert_eq!(TextWriter::new(2).write(&pre), "a  b\nc");
    }

    #[test]
    fn test_rule_and_break() {
        let el = Element::fragment([
            Element::text("a"),
            Tag::new("br").into(),
            Element::text("b"),
            Tag::new("hr").into(),
        ]);
        assert_eq!(TextWriter::new(3).write(&el), "a\nb\n---");
    }
}
