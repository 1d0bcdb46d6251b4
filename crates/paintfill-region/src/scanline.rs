//! Scan-row tracker
//!
//! While a fill runs, every row remembers the closed column interval that
//! has already been scanned for seeds. When a new span asks to scan a row,
//! the tracker compares it with the stored interval and hands back only the
//! part(s) that have not been looked at yet.
//!
//! A scanned pixel never becomes a match again (it either did not match,
//! or it matched and a seed covering its run was pushed), so skipping the
//! stored interval is safe. This keeps total work at O(area) and stops the
//! same run from being seeded over and over.
//!
//! # Relations
//!
//! With stored `[sl, sr]` and candidate `[cl, cr]`:
//!
//! | Relation       | Test                         | Newly scanned          | Stored after |
//! |----------------|------------------------------|------------------------|--------------|
//! | `Untracked`    | no record                    | `[cl, cr]`             | `[cl, cr]`   |
//! | `Disjoint`     | `sr <= cl` or `sl >= cr`     | `[cl, cr]`             | `[cl, cr]`   |
//! | `Covered`      | `sl <= cl` and `sr >= cr`    | nothing                | unchanged    |
//! | `OverlapLeft`  | `sl <= cl` and `sr < cr`     | `[sr + 1, cr]`         | `[sl, cr]`   |
//! | `OverlapRight` | `sl > cl` and `sr >= cr`     | `[cl, sl - 1]`, join `sl` | `[cl, sr]` |
//! | `Engulfs`      | `sl > cl` and `sr < cr`      | `[cl, sl - 1]`, join `sl`; `[sr + 1, cr]` | `[cl, cr]` |
//!
//! The disjoint test runs first, so intervals touching at a single column
//! count as disjoint and are rescanned in full.

/// A closed column interval `[left, right]` on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub left: u32,
    pub right: u32,
}

impl Span {
    /// # Panics
    ///
    /// Panics if `left > right`.
    pub fn new(left: u32, right: u32) -> Self {
        assert!(left <= right, "empty span [{}, {}]", left, right);
        Self { left, right }
    }
}

/// How a candidate span relates to a row's stored interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The row has never been scanned.
    Untracked,
    /// Stored and candidate do not overlap.
    Disjoint,
    /// Stored interval already contains the candidate.
    Covered,
    /// Stored interval overlaps the candidate's left end.
    OverlapLeft,
    /// Stored interval overlaps the candidate's right end.
    OverlapRight,
    /// Candidate strictly extends the stored interval on both sides.
    Engulfs,
}

impl Relation {
    /// Classify `candidate` against the stored interval of its row.
    pub fn classify(stored: Option<Span>, candidate: Span) -> Self {
        let Some(s) = stored else {
            return Relation::Untracked;
        };
        let c = candidate;
        if s.right <= c.left || s.left >= c.right {
            Relation::Disjoint
        } else if s.left <= c.left && s.right >= c.right {
            Relation::Covered
        } else if s.left <= c.left {
            Relation::OverlapLeft
        } else if s.right >= c.right {
            Relation::OverlapRight
        } else {
            Relation::Engulfs
        }
    }
}

/// A piece of a candidate span that still has to be scanned.
///
/// `join` is set when the piece ends right before the stored interval's
/// old left edge. A run reaching the end of the piece continues into that
/// column, and if the column still matches, a seed already pending for it
/// will fill the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unscanned {
    pub span: Span,
    pub join: Option<u32>,
}

/// Result of claiming a candidate span on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub relation: Relation,
    parts: [Option<Unscanned>; 2],
}

impl Claim {
    fn new(relation: Relation, first: Option<Unscanned>, second: Option<Unscanned>) -> Self {
        Self {
            relation,
            parts: [first, second],
        }
    }

    /// `true` when nothing on the row needs scanning.
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(Option::is_none)
    }

    /// The unscanned pieces, left to right.
    pub fn parts(&self) -> impl Iterator<Item = Unscanned> + '_ {
        self.parts.iter().flatten().copied()
    }
}

/// Per-row record of scanned intervals for one fill.
#[derive(Debug)]
pub struct ScanTracker {
    rows: Vec<Option<Span>>,
}

impl ScanTracker {
    /// An empty tracker for an image with `height` rows.
    pub fn new(height: u32) -> Self {
        Self {
            rows: vec![None; height as usize],
        }
    }

    /// The stored interval of `row`, if it was ever scanned.
    pub fn record(&self, row: u32) -> Option<Span> {
        self.rows.get(row as usize).copied().flatten()
    }

    /// Number of rows that have been scanned at least once.
    pub fn tracked_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.is_some()).count()
    }

    /// Record that `candidate` is about to be scanned on `row` and return
    /// the parts of it not covered by earlier scans.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the tracker's height.
    pub fn claim(&mut self, row: u32, candidate: Span) -> Claim {
        let slot = &mut self.rows[row as usize];
        let relation = Relation::classify(*slot, candidate);
        let whole = Unscanned {
            span: candidate,
            join: None,
        };

        match (relation, *slot) {
            (Relation::Untracked | Relation::Disjoint, _) => {
                *slot = Some(candidate);
                Claim::new(relation, Some(whole), None)
            }
            (Relation::Covered, _) => Claim::new(relation, None, None),
            (Relation::OverlapLeft, Some(s)) => {
                *slot = Some(Span::new(s.left, candidate.right));
                let right = Unscanned {
                    span: Span::new(s.right + 1, candidate.right),
                    join: None,
                };
                Claim::new(relation, Some(right), None)
            }
            (Relation::OverlapRight, Some(s)) => {
                *slot = Some(Span::new(candidate.left, s.right));
                let left = Unscanned {
                    span: Span::new(candidate.left, s.left - 1),
                    join: Some(s.left),
                };
                Claim::new(relation, Some(left), None)
            }
            (Relation::Engulfs, Some(s)) => {
                *slot = Some(candidate);
                let left = Unscanned {
                    span: Span::new(candidate.left, s.left - 1),
                    join: Some(s.left),
                };
                let right = Unscanned {
                    span: Span::new(s.right + 1, candidate.right),
                    join: None,
                };
                Claim::new(relation, Some(left), Some(right))
            }
            (_, None) => unreachable!("only Untracked is classified without a record"),
        }
    }
}
