pub mod forrecap;
pub mod forview;

use crate::base;

/// Text tree whose top level nodes are printed flush left as headings.
pub struct Tree {
    charset: base::Charset,
    root: Node,
}

#[derive(Default)]
struct Node {
    data: std::borrow::Cow<'static, str>,
    children: Vec<Self>,
}

impl Node {
    fn new(data: std::borrow::Cow<'static, str>) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Appends a child and returns it.
    fn push(&mut self, data: std::borrow::Cow<'static, str>) -> &mut Self {
        self.children.push(Self::new(data));
        let n = self.children.len();
        &mut self.children[n - 1]
    }

    /// Returns the last child if its data is `data`, otherwise appends a new
    /// child with that data.
    fn last_or_push(&mut self, data: &str) -> &mut Self {
        match self.children.last() {
            Some(child) if child.data == data => {}
            _ => self.children.push(Self::new(data.to_string().into())),
        }
        let n = self.children.len();
        &mut self.children[n - 1]
    }
}

/// Writes `label`, a run of dashes and `value` so that values line up
/// across rows of `width` characters.
fn dashed(charset: &base::Charset, label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + base::util::BOUNDING_SPACES_COUNT + value.chars().count();
    let dash_count = width.saturating_sub(used).max(base::util::MIN_DASHES_COUNT);
    let mut s = String::with_capacity(width);
    s.push_str(label);
    s.push(' ');
    s.extend(std::iter::repeat_n(charset.dash, dash_count));
    s.push(' ');
    s.push_str(value);
    s
}

impl std::fmt::Display for Tree {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_node(
            node: &Node,
            f: &mut std::fmt::Formatter,
            preprefix: &mut String,
            is_last_child_of_parent: bool,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            let (prefix_tail, child_prefix_tail) = if is_last_child_of_parent {
                (charset.tree_corner, charset.tree_space)
            } else {
                (charset.tree_sideways_t, charset.tree_pipe_gap)
            };
            writeln!(f, "{}{}{}", preprefix, prefix_tail, node.data)?;
            preprefix.push_str(child_prefix_tail);
            for (i, child) in node.children.iter().enumerate() {
                write_node(child, f, preprefix, i >= node.children.len() - 1, charset)?;
            }
            preprefix.truncate(preprefix.len() - child_prefix_tail.len());
            Ok(())
        }

        let mut preprefix = String::new();
        for lv1 in self.root.children.iter() {
            writeln!(f, "{}", lv1.data)?;
            for (i, lv2) in lv1.children.iter().enumerate() {
                write_node(
                    lv2,
                    f,
                    &mut preprefix,
                    i >= lv1.children.len() - 1,
                    &self.charset,
                )?;
            }
        }
        Ok(())
    }
}
