//! Registry of the SNB data generator prefixes and their derivation rules.
//!
//! A prefix such as `dynamic/comment` names both the shard files produced by
//! the generator (`dynamic/comment_0_0.csv`, `dynamic/comment_1_0.csv`, ...)
//! and the primary output file (`comment.csv`). The registry is a fixed table;
//! per-prefix behavior is selected by the [`Derivation`] tag rather than by
//! comparing prefix names in the conversion loop.

/// How a prefix's records are reshaped beyond plain delimiter conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Straight delimiter conversion.
    Plain,
    /// Split a comment's parent (post or comment) into two edge files.
    ///
    /// The second-to-last field is the parent post id, the last field the
    /// parent comment id. Exactly one of them is expected to be set.
    ReplyOf {
        post_output: &'static str,
        comment_output: &'static str,
    },
    /// Emit `id,parent` into `output` whenever the last field is non-empty.
    Parent { output: &'static str },
    /// Append a constant `0` weight column.
    EdgeWeight,
    /// Append a constant `0` weight column and repeat the first field.
    WeightedMembership,
}

impl Derivation {
    /// Minimum number of fields a record needs for this rule to apply.
    pub fn min_fields(&self) -> usize {
        match self {
            Self::ReplyOf { .. } => 2,
            Self::Plain | Self::Parent { .. } | Self::EdgeWeight | Self::WeightedMembership => 1,
        }
    }

    /// File names of the extra outputs this rule writes, in write order.
    pub fn derived_outputs(&self) -> Vec<&'static str> {
        match self {
            Self::ReplyOf {
                post_output,
                comment_output,
            } => vec![*post_output, *comment_output],
            Self::Parent { output } => vec![*output],
            Self::Plain | Self::EdgeWeight | Self::WeightedMembership => Vec::new(),
        }
    }

    /// Short label used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::ReplyOf { .. } => "reply-of",
            Self::Parent { .. } => "parent",
            Self::EdgeWeight => "edge-weight",
            Self::WeightedMembership => "weighted-membership",
        }
    }
}

/// A known prefix and the rule applied to its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixSpec {
    /// Prefix relative to the input directory, e.g. `static/place`.
    pub name: &'static str,
    pub derivation: Derivation,
}

impl PrefixSpec {
    pub const fn new(name: &'static str, derivation: Derivation) -> Self {
        Self { name, derivation }
    }

    /// Final path component of the prefix (`dynamic/comment` -> `comment`).
    pub fn stem(&self) -> &'static str {
        match self.name.rsplit_once('/') {
            Some((_, stem)) => stem,
            None => self.name,
        }
    }

    /// Sub-directory of the input directory holding the shards, if any.
    pub fn directory(&self) -> Option<&'static str> {
        self.name.rsplit_once('/').map(|(dir, _)| dir)
    }

    /// File name of the primary output, `<stem>.csv`.
    pub fn primary_output(&self) -> String {
        format!("{}.csv", self.stem())
    }

    /// Look up a registered prefix by its full name.
    pub fn lookup(name: &str) -> Option<&'static PrefixSpec> {
        PREFIXES.iter().find(|spec| spec.name == name)
    }
}

/// Every prefix emitted by the SNB data generator that the loader consumes.
pub static PREFIXES: [PrefixSpec; 18] = [
    PrefixSpec::new("static/organisation", Derivation::Plain),
    PrefixSpec::new(
        "static/place",
        Derivation::Parent {
            output: "place_isPartOf_place.csv",
        },
    ),
    PrefixSpec::new("static/tag", Derivation::Plain),
    PrefixSpec::new(
        "static/tagclass",
        Derivation::Parent {
            output: "tagclass_isSubclassOf_tagclass.csv",
        },
    ),
    PrefixSpec::new(
        "dynamic/comment",
        Derivation::ReplyOf {
            post_output: "comment_replyOf_post.csv",
            comment_output: "comment_replyOf_comment.csv",
        },
    ),
    PrefixSpec::new("dynamic/comment_hasTag_tag", Derivation::Plain),
    PrefixSpec::new("dynamic/forum", Derivation::Plain),
    PrefixSpec::new(
        "dynamic/forum_hasMember_person",
        Derivation::WeightedMembership,
    ),
    PrefixSpec::new("dynamic/forum_hasTag_tag", Derivation::Plain),
    PrefixSpec::new("dynamic/person", Derivation::Plain),
    PrefixSpec::new("dynamic/person_hasInterest_tag", Derivation::Plain),
    PrefixSpec::new("dynamic/person_knows_person", Derivation::EdgeWeight),
    PrefixSpec::new("dynamic/person_likes_comment", Derivation::Plain),
    PrefixSpec::new("dynamic/person_likes_post", Derivation::Plain),
    PrefixSpec::new("dynamic/person_studyAt_organisation", Derivation::Plain),
    PrefixSpec::new("dynamic/person_workAt_organisation", Derivation::Plain),
    PrefixSpec::new("dynamic/post", Derivation::Plain),
    PrefixSpec::new("dynamic/post_hasTag_tag", Derivation::Plain),
];
