/// Expands tabs into spaces, up to the next multiple of the tab stop.
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::TabExpander;
///
/// let expander = TabExpander::new(4);
/// assert_eq!(expander.expand("a\tb\n\tc"), "a   b\n    c");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TabExpander {
    tab_stop: usize,
}

impl TabExpander {
    /// Create a tab expander (a tab stop of `0` is treated as `1`).
    pub fn new(tab_stop: usize) -> Self {
        Self {
            tab_stop: std::cmp::max(1, tab_stop),
        }
    }

    /// Expand every tab in `text`; columns restart after each newline.
    pub fn expand(&self, text: &str) -> String {
        let tabs = text.matches('\t').count();
        let mut expanded = String::with_capacity(text.len() + (self.tab_stop * tabs));
        let mut column = 0;

        for c in text.chars() {
            match c {
                '\t' => {
                    let next_tab = (column + self.tab_stop) - ((column + self.tab_stop) % self.tab_stop);
                    expanded.push_str(&" ".repeat(next_tab - column));
                    column = next_tab;
                }
                '\n' => {
                    expanded.push(c);
                    column = 0;
                }
                _ => {
                    expanded.push(c);
                    column += 1;
                }
            }
        }

        expanded
    }
}

/// Greedily word-wraps text to a column width.
///
/// Each output line holds at most `columns - 1` characters, leaving room for the newline.
/// Lines are cut at the last whitespace before the limit (or hard at the limit if there is none), discarding the whitespace around the cut.
/// Embedded newlines are honoured: each line of the input is wrapped independently.
/// Tabs are not expanded; see [`TabExpander`].
///
/// ### Example
/// ```
/// # use declopt_builder as declopt;
/// use declopt::WordWrapper;
///
/// let wrapper = WordWrapper::new(11);
/// assert_eq!(
///     wrapper.wrap_words("the quick brown fox\njumps"),
///     vec!["the quick", "brown fox", "jumps"]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordWrapper {
    columns: usize,
}

impl WordWrapper {
    /// Create a word wrapper for the given column width (widths below `2` are treated as `2`).
    pub fn new(columns: usize) -> Self {
        Self {
            columns: std::cmp::max(2, columns),
        }
    }

    /// The column width being wrapped to.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Wrap `text` into lines.
    /// There is always at least one line, even for empty text.
    pub fn wrap_words(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::default();

        for line in text.split('\n') {
            self.wrap_line(&mut lines, line);
        }

        lines
    }

    fn wrap_line(&self, out: &mut Vec<String>, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        let max_column = self.columns - 1;
        let mut line_start = 0;
        let mut column = 0;
        let mut last_space: Option<usize> = None;
        let mut cut = false;
        let mut i = 0;

        while i < chars.len() {
            if chars[i].is_whitespace() {
                last_space = Some(i);
            }

            if column == max_column {
                // Final column reached: cut at the last whitespace, or right here if there is none.
                let line_end = match last_space {
                    Some(space) => trim_end(&chars, line_start, space),
                    None => i,
                };
                out.push(chars[line_start..line_end].iter().collect());
                cut = true;

                line_start = trim_start(&chars, line_end);
                i = line_start;
                column = 0;
                last_space = None;
            } else {
                column += 1;
                i += 1;
            }
        }

        // Only whitespace followed the final cut.
        if cut && line_start == chars.len() {
            return;
        }

        out.push(chars[line_start..].iter().collect());
    }
}

fn trim_end(chars: &[char], floor: usize, mut end: usize) -> usize {
    while end > floor && chars[end - 1].is_whitespace() {
        end -= 1;
    }

    end
}

fn trim_start(chars: &[char], mut start: usize) -> usize {
    while start < chars.len() && chars[start].is_whitespace() {
        start += 1;
    }

    start
}
