use crate::base;

/// Records grouped under their date, one leaf per record.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub first_iid: usize,
    pub rl: base::Recordlist,
}

impl Config {
    pub fn to_tree(&self) -> base::Tree {
        let mut records = self.rl.iter_with_iid().collect::<Vec<_>>();
        records.sort_by_key(|(_, r)| r.date());

        let width = records
            .iter()
            .map(|&(iid0, r)| {
                base::util::count_digits((iid0 + self.first_iid) as u64)
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + movement(r).chars().count()
            })
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        for (iid0, r) in records {
            let day = format!("{} {}", r.date(), r.weekday());
            let data = self.leaf_data(r, iid0, width);
            root.last_or_push(&day).push(data.into());
        }
        base::Tree {
            charset: self.charset.clone(),
            root,
        }
    }

    fn leaf_data(&self, r: &base::Record, iid0: usize, width: usize) -> String {
        let iid = (iid0 + self.first_iid).to_string();
        let mut s = base::tree::dashed(&self.charset, &iid, &movement(r), width);
        s.push(' ');
        s.push_str(r.category().as_str());
        if !r.shift().is_empty() {
            s.push_str(" (shift ");
            s.push_str(r.shift());
            s.push(')');
        }
        s
    }
}

/// Signed change in stock, e.g. `+30` or `-10`.
fn movement(r: &base::Record) -> String {
    format!("{:+}", r.movement())
}
