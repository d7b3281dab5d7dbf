// src/core/html.rs
// Case-insensitive tag block scanning over raw HTML text.
// Naive by intent: no DOM, no nesting, first closing tag wins.

use super::sanitize::{normalize_entities, normalize_ws};

/// ASCII-only lowercasing; byte offsets stay valid against the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next complete `<tag …>…</tag>` block at or after `from`.
/// Returns byte offsets `(start_of_open_tag, end_of_close_tag)`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    next_block_in(s, &lc, &to_lower(o), &to_lower(c), from)
}

fn next_block_in(s: &str, lc: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(open)? + at;
        // `<tr` must not match `<track`
        let boundary = lc.as_bytes().get(start + open.len()).copied();
        if !matches!(boundary, Some(b' ' | b'\t' | b'\r' | b'\n' | b'>' | b'/')) {
            at = start + open.len();
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(close)?;
        return Some((start, open_end + end_rel + close.len()));
    }
}

/// Iterator over successive `<tag>` blocks of one document.
/// Lowercases the haystack once instead of per lookup.
pub struct TagBlocks<'a> {
    s: &'a str,
    lc: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> TagBlocks<'a> {
    pub fn new(s: &'a str, tag: &str) -> Self {
        let tag = to_lower(tag);
        Self {
            s,
            lc: to_lower(s),
            open: join!("<", &tag),
            close: join!("</", &tag, ">"),
            pos: 0,
        }
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        let (start, end) = next_block_in(self.s, &self.lc, &self.open, &self.close, self.pos)?;
        self.pos = end;
        Some(&self.s[start..end])
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Visible text of one `<td>…</td>` block, trimmed.
pub fn cell_text(block: &str) -> String {
    normalize_entities(&strip_tags(inner_after_open_tag(block)))
        .trim()
        .to_string()
}

/// Rows of the first `<table>` in the document, each row as its `<td>` texts.
/// `None` when the document has no table at all.
pub fn first_table_rows(doc: &str) -> Option<Vec<Vec<String>>> {
    let table = TagBlocks::new(doc, "table").next()?;
    let rows = TagBlocks::new(table, "tr")
        .map(|tr| TagBlocks::new(tr, "td").map(cell_text).collect())
        .collect();
    Some(rows)
}

/// Header texts of a row, `<th>` or `<td>`, in document order.
pub fn header_cells(tr_block: &str) -> Vec<String> {
    let lc = to_lower(tr_block);
    let mut out = Vec::new();
    let mut pos = 0usize;
    loop {
        let th = next_block_in(tr_block, &lc, "<th", "</th>", pos);
        let td = next_block_in(tr_block, &lc, "<td", "</td>", pos);
        let (s, e) = match (th, td) {
            (Some(a), Some(b)) => if a.0 < b.0 { a } else { b },
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => break,
        };
        out.push(cell_text(&tr_block[s..e]));
        pos = e;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_case_insensitive() {
        let doc = "<TABLE border=1><TR><TD>a</TD></TR></TABLE>";
        let rows = first_table_rows(doc).unwrap();
        assert_eq!(rows, vec![vec![s!("a")]]);
    }

    #[test]
    fn tr_does_not_match_track() {
        let doc = "<table><track src=x></track><tr><td>1</td></tr></table>";
        let rows = first_table_rows(doc).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec![s!("1")]);
    }

    #[test]
    fn only_the_first_table_is_read() {
        let doc = "<table><tr><td>x</td></tr></table><table><tr><td>y</td></tr></table>";
        let rows = first_table_rows(doc).unwrap();
        assert_eq!(rows, vec![vec![s!("x")]]);
    }

    #[test]
    fn no_table_is_none() {
        assert!(first_table_rows("<p>nothing here</p>").is_none());
    }

    #[test]
    fn cell_text_strips_markup_and_entities() {
        let td = "<td class=x> <b>12:00</b>&nbsp;</td>";
        assert_eq!(cell_text(td), "12:00");
    }

    #[test]
    fn header_cells_mix_th_and_td() {
        let tr = "<tr><th>Intensity</th><td>Name</td><th>Signal</th></tr>";
        assert_eq!(header_cells(tr), vec![s!("Intensity"), s!("Name"), s!("Signal")]);
    }

    #[test]
    fn next_tag_block_offsets() {
        let s = "xx<td a=1>in</td>yy";
        let (a, b) = next_tag_block_ci(s, "<TD", "</TD>", 0).unwrap();
        assert_eq!(&s[a..b], "<td a=1>in</td>");
    }
}
