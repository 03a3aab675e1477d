use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// If `fullmatch` is false, ensures all categories starts with and ends with
/// `*`, except for empty categories which are left alone. If `fullmatch` is
/// true, does not modify categories.
pub fn preprocess_categories<'a>(
    categories: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return categories.into();
    }
    categories
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Returns a new record list such that each record:
/// - Is in 'interval'
/// - Matches any wildcard pattern in 'categories'
/// - Does not match any wildcard pattern in 'not_categories'
pub fn filter_rl<T, U>(
    rl: &base::Recordlist,
    interval: base::Interval,
    categories: &[T],
    not_categories: &[U],
) -> base::Recordlist
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = categories
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_categories
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    rl.iter()
        .filter(|r| interval.contains(r.date()))
        .filter(|r| {
            incl.iter().any(|p| p.matches(r.category().as_str()))
                && !excl.iter().any(|p| p.matches(r.category().as_str()))
        })
        .collect::<base::Recordlist>()
}

/// Applies `opts` to `rl`, keeping records dated within `interval`.
pub fn filter_rl_with_opts(
    rl: &base::Recordlist,
    interval: base::Interval,
    opts: &cli::sharedopts::CategoriesOpts,
) -> base::Recordlist {
    let categories = preprocess_categories(&opts.categories, opts.fullmatch);
    let not_categories = preprocess_categories(&opts.not_categories, opts.fullmatch);
    filter_rl(rl, interval, &categories, &not_categories)
}
