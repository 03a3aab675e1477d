use crate::base;

/// Records in store order, i.e. the order they were appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recordlist(Vec<base::Record>);

impl Recordlist {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }

    /// Yields each record with its zero-based position among the records
    /// sharing its date.
    pub fn iter_with_iid(&self) -> impl Iterator<Item = (usize, &base::Record)> {
        let mut seen = std::collections::HashMap::<base::Date, usize>::new();
        self.iter().map(move |r| {
            let n = seen.entry(r.date()).or_default();
            let iid = *n;
            *n += 1;
            (iid, r)
        })
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&base::Category> {
        let mut cats = self.iter().map(base::Record::category).collect::<Vec<_>>();
        cats.sort();
        cats.dedup();
        cats
    }
}

impl IntoIterator for Recordlist {
    type Item = base::Record;
    type IntoIter = std::vec::IntoIter<base::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Recordlist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Recordlist {
    type Err = ParseError;

    /// Parses one JSON record per line. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Record>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Recordlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_keeps_store_order() {
        let rl = r#"
            {"c":"bbb","d":"2015-03-30","s":"1","o":1}
            {"c":"aaa","d":"2014-03-30","s":"1","o":2}
            {"c":"ccc","d":"2016-03-30","s":"1","o":3}
        "#
        .parse::<Recordlist>()
        .unwrap();
        let cats = rl
            .iter()
            .map(|r| r.category().as_str())
            .collect::<Vec<_>>();
        assert_eq!(cats, vec!["bbb", "aaa", "ccc"]);
    }

    #[rstest]
    #[case(r#"{"c":"","d":"2015-03-30","s":"1"}"#, "invalid record at line 1")]
    #[case(
        r#"
            []
        "#,
        "invalid record at line 2"
    )]
    #[case(
        r#"

            {"c":"a","d":"2015-03-30","s":"1"}
            {"c":"a","d":"2015-03-30"}
        "#,
        "invalid record at line 4"
    )]
    fn test_fromstr_errormsg(#[case] s: &str, #[case] want: &str) {
        assert_eq!(s.parse::<Recordlist>().unwrap_err().to_string(), want)
    }

    #[rstest]
    #[case("", &[])]
    #[case(
        r#"
            {"c":"a","d":"2015-03-01","s":"1","o":1}
            {"c":"a","d":"2015-03-30","s":"1","o":1}
            {"c":"a","d":"2015-03-30","s":"1","o":1}
            {"c":"a","d":"2015-03-01","s":"1","o":1}
            {"c":"a","d":"2015-04-01","s":"1","o":1}
        "#,
        &[0, 0, 1, 1, 0],
    )]
    fn test_iter_with_iid(#[case] rl: Recordlist, #[case] want_iids: &[usize]) {
        let got = rl.iter_with_iid().map(|(i, _)| i).collect::<Vec<_>>();
        assert_eq!(got, want_iids)
    }

    #[test]
    fn test_categories() {
        let rl = r#"
            {"c":"Roll","d":"2015-03-30","s":"1","o":1}
            {"c":"Box","d":"2015-03-30","s":"1","o":1}
            {"c":"Roll","d":"2015-03-31","s":"2","i":4}
        "#
        .parse::<Recordlist>()
        .unwrap();
        assert_eq!(rl.len(), 3);
        let cats = rl
            .categories()
            .into_iter()
            .map(base::Category::as_str)
            .collect::<Vec<_>>();
        assert_eq!(cats, vec!["Box", "Roll"]);
    }
}
