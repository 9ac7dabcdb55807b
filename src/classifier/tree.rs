//! Route tree for bounded path-template rendering
//!
//! The tree encodes every valid literal/variable segment sequence of the API
//! surface being instrumented. Matching walks the tree one segment at a
//! time; rendering replaces each variable segment with a fixed placeholder,
//! so the set of strings the tree can produce is finite and known up front.
//!
//! Unlike a request router, the tree never resolves to a handler: its only
//! output is the template string used as a metric label. That changes the
//! matching contract in one important way - a walk that fails at *any* depth
//! fails entirely. Keeping a matched prefix would leak unknown suffixes into
//! the label set one prefix at a time.

use std::collections::HashMap;

use anyhow::bail;
use smallvec::SmallVec;

/// Placeholder rendered for a variable segment.
const VARIABLE_SEGMENT: &str = "-";

/// First segment required of every route pattern.
const API_ROOT: &str = "api";

/// Most API paths have well under 8 segments after `/api`; the walk buffers
/// rendered segments on the stack up to that depth.
const MAX_INLINE_SEGMENTS: usize = 8;

/// One node of the route tree.
///
/// Literal children are keyed by their exact segment value. A node has at
/// most one variable child: template rendering cannot distinguish two
/// variables in the same position, so patterns that declare different
/// parameter names there share the child.
#[derive(Debug, Clone, Default)]
struct TreeNode {
    literals: HashMap<String, TreeNode>,
    variable: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn insert(&mut self, segments: &[&str]) {
        let Some((segment, remaining)) = segments.split_first() else {
            return;
        };
        let child: &mut TreeNode = if segment.starts_with('{') && segment.ends_with('}') {
            self.variable.get_or_insert_with(Default::default)
        } else {
            self.literals.entry((*segment).to_string()).or_default()
        };
        child.insert(remaining);
    }

    fn count(&self) -> usize {
        let children: usize = self.literals.values().map(TreeNode::count).sum();
        let variable = self.variable.as_ref().map_or(0, |node| node.count());
        1 + children + variable
    }
}

/// Immutable matcher for every valid API path shape.
///
/// Built once from route patterns, then shared read-only across all
/// concurrent classifications. The root of the tree is the `api` segment
/// itself: patterns must start with `/api`, and [`RouteTree::template`]
/// receives the segments that follow it.
#[derive(Debug, Clone, Default)]
pub struct RouteTree {
    root: TreeNode,
}

impl RouteTree {
    /// Create an empty tree. It matches only the bare `/api` path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from route patterns.
    ///
    /// Patterns use the same placeholder syntax as OpenAPI paths:
    /// `/api/clusters_mgmt/v1/clusters/{cluster_id}`. Literal segments match
    /// exactly, `{...}` segments match any non-empty value. Every pattern
    /// must start with `/api`.
    ///
    /// Inserting a pattern also makes all of its prefixes matchable: a walk
    /// may stop at any node, not only at the end of a pattern.
    pub fn from_patterns<I, S>(patterns: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for pattern in patterns {
            tree.insert(pattern.as_ref())?;
        }
        Ok(tree)
    }

    /// Insert a single route pattern.
    pub fn insert(&mut self, pattern: &str) -> anyhow::Result<()> {
        let segments: SmallVec<[&str; MAX_INLINE_SEGMENTS]> =
            pattern.split('/').filter(|s| !s.is_empty()).collect();
        let Some((root, remaining)) = segments.split_first() else {
            bail!("route pattern {pattern:?} is empty");
        };
        if *root != API_ROOT {
            bail!("route pattern {pattern:?} must start with /api");
        }
        self.root.insert(remaining);
        Ok(())
    }

    /// Render the template for the path segments that follow `/api`.
    ///
    /// Walks the tree one segment at a time, preferring an exact literal
    /// child over the variable child. Returns `None` as soon as a segment
    /// has no transition - including when the path is deeper than the tree -
    /// and the caller maps that to the single fallback label. An empty
    /// segment list renders as `"/api"`.
    #[must_use]
    pub fn template(&self, segments: &[&str]) -> Option<String> {
        let mut node = &self.root;
        let mut rendered: SmallVec<[&str; MAX_INLINE_SEGMENTS]> = SmallVec::new();
        for &segment in segments {
            if let Some(child) = node.literals.get(segment) {
                node = child;
                rendered.push(segment);
            } else if let Some(child) = node.variable.as_deref() {
                node = child;
                rendered.push(VARIABLE_SEGMENT);
            } else {
                return None;
            }
        }

        let mut template = String::with_capacity(
            1 + API_ROOT.len() + rendered.iter().map(|s| s.len() + 1).sum::<usize>(),
        );
        template.push('/');
        template.push_str(API_ROOT);
        for segment in rendered {
            template.push('/');
            template.push_str(segment);
        }
        Some(template)
    }

    /// Number of nodes in the tree, including the `api` root.
    ///
    /// This is the upper bound on the number of distinct templates the tree
    /// can render.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Whether the tree contains only the `api` root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}
