//! Ticket title resolution
//!
//! Turns a ticket query (e.g. `ABC-42`) into a branch-name fragment
//! (e.g. `ABC-42-fix-crash`) by paging through the issue tracker listing.
//!
//! Resolution is optimistic: a page that fails to load counts as a page
//! without a match, and running out of pages falls back to the raw query.

use crate::tracker::{Availability, IssueTrackerCli, SearchPage};
use tb_config::IssueTrackerConfig;

/// Which tab-separated columns of the plain listing hold the key and summary
///
/// Column indices are 0-based and count non-empty fields only, so runs of
/// tabs used for alignment do not shift them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRule {
    pub key_column: usize,
    pub summary_column: usize,
}

impl Default for ExtractionRule {
    /// jira-cli `--plain`: TYPE, KEY, SUMMARY, STATUS, ...
    fn default() -> Self {
        Self {
            key_column: 1,
            summary_column: 2,
        }
    }
}

impl ExtractionRule {
    /// Branch fragment for the first record whose key matches `query`
    pub fn extract(&self, listing: &str, query: &str) -> Option<String> {
        let query = query.trim();
        listing.lines().find_map(|line| {
            let fields: Vec<&str> = line
                .split('\t')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .collect();

            let key = fields.get(self.key_column)?;
            if !key.eq_ignore_ascii_case(query) {
                return None;
            }

            let summary = fields.get(self.summary_column).copied().unwrap_or_default();
            let fragment = normalize_fragment(key, summary);
            (!fragment.is_empty()).then_some(fragment)
        })
    }
}

/// Build a branch-name fragment from an issue key and summary
///
/// `UPPER(key)-lower(summary)`, reduced to `[A-Za-z0-9-]` with single
/// hyphens and no leading or trailing hyphen.
pub fn normalize_fragment(key: &str, summary: &str) -> String {
    sanitize_branch_fragment(&format!(
        "{}-{}",
        key.to_uppercase(),
        summary.to_lowercase()
    ))
}

/// Reduce arbitrary text to alphanumerics separated by single hyphens
pub fn sanitize_branch_fragment(raw: &str) -> String {
    let mut fragment = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = match c {
            c if c.is_ascii_alphanumeric() => c,
            ' ' | '-' => '-',
            _ => continue,
        };
        if c == '-' && (fragment.is_empty() || fragment.ends_with('-')) {
            continue;
        }
        fragment.push(c);
    }
    while fragment.ends_with('-') {
        fragment.pop();
    }
    fragment
}

/// Outcome title of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTitle {
    /// Normalized fragment from a matching issue
    Matched(String),
    /// The original query, unchanged
    Fallback(String),
}

impl ResolvedTitle {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedTitle::Matched(title) | ResolvedTitle::Fallback(title) => title,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedTitle::Fallback(_))
    }
}

/// Something the user should be told about a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveNotice {
    /// The availability probe failed, no search was made
    TrackerUnavailable { reason: String },
    /// Every page up to the bound was searched without a match
    NotFound { query: String, pages_searched: usize },
}

/// Resolved title plus the notices produced on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub title: ResolvedTitle,
    pub notices: Vec<ResolveNotice>,
}

impl Resolution {
    fn matched(fragment: String) -> Self {
        Self {
            title: ResolvedTitle::Matched(fragment),
            notices: Vec::new(),
        }
    }

    fn fallback(query: &str, notice: ResolveNotice) -> Self {
        Self {
            title: ResolvedTitle::Fallback(query.to_string()),
            notices: vec![notice],
        }
    }
}

/// Paginated ticket title resolver
#[derive(Debug, Clone)]
pub struct TicketResolver {
    tracker: IssueTrackerCli,
    page_size: u32,
    page_bound: u32,
    rule: ExtractionRule,
}

impl TicketResolver {
    pub fn new(tracker: IssueTrackerCli, page_size: u32, page_bound: u32) -> Self {
        Self {
            tracker,
            page_size: page_size.max(1),
            page_bound,
            rule: ExtractionRule::default(),
        }
    }

    pub fn from_config(tracker: IssueTrackerCli, config: &IssueTrackerConfig) -> Self {
        Self::new(tracker, config.page_size, config.page_bound).with_rule(ExtractionRule {
            key_column: config.key_column,
            summary_column: config.summary_column,
        })
    }

    pub fn with_rule(mut self, rule: ExtractionRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn tracker(&self) -> &IssueTrackerCli {
        &self.tracker
    }

    /// Pages searched in order: offsets `0, size, 2*size, ...` up to and including the bound
    pub fn pages(&self) -> impl Iterator<Item = SearchPage> + '_ {
        std::iter::successors(Some(0u32), move |start| start.checked_add(self.page_size))
            .take_while(move |start| *start <= self.page_bound)
            .map(move |start| SearchPage {
                start,
                size: self.page_size,
            })
    }

    /// Resolve `query` to a branch-name fragment
    ///
    /// Never fails. When the tracker is unavailable or no page matches, the
    /// title falls back to `query` and a notice explains why.
    pub async fn resolve(&self, query: &str) -> Resolution {
        if let Availability::Unavailable { reason } = self.tracker.probe().await {
            return Resolution::fallback(query, ResolveNotice::TrackerUnavailable { reason });
        }

        self.search(query).await
    }

    /// Page through the listing without probing first
    ///
    /// The tracker is searched for the trimmed key; the fallback keeps
    /// `query` as typed.
    pub async fn search(&self, query: &str) -> Resolution {
        let key = query.trim();
        let mut pages_searched = 0;

        for page in self.pages() {
            pages_searched += 1;
            match self.tracker.list_page(key, page).await {
                Ok(output) if output.success() => {
                    if let Some(fragment) = self.rule.extract(&output.stdout, key) {
                        log::info!(
                            "Resolved {} to {} on page {}",
                            key,
                            fragment,
                            page.paginate_arg()
                        );
                        return Resolution::matched(fragment);
                    }
                }
                Ok(output) => {
                    log::debug!(
                        "Page {} exited with {:?}, treating as no match",
                        page.paginate_arg(),
                        output.status
                    );
                }
                Err(e) => {
                    log::warn!(
                        "Page {} could not be searched, treating as no match: {}",
                        page.paginate_arg(),
                        e
                    );
                }
            }
        }

        log::info!(
            "No issue matching {} within {} page(s)",
            key,
            pages_searched
        );
        Resolution::fallback(
            query,
            ResolveNotice::NotFound {
                query: query.to_string(),
                pages_searched,
            },
        )
    }
}
