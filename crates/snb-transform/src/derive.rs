//! Per-prefix record derivations.
//!
//! Every function here operates on fields that have already been quoted, so
//! derived rows carry the same quoting as the primary row they came from.

use snb_model::Derivation;

/// A row destined for one of a derivation's extra outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRow {
    /// Index into [`Derivation::derived_outputs`].
    pub output: usize,
    pub fields: Vec<String>,
}

/// Appends the synthetic columns of `derivation` to a primary row.
pub fn extend_primary(derivation: &Derivation, fields: &mut Vec<String>) {
    match derivation {
        Derivation::EdgeWeight => fields.push("0".to_string()),
        Derivation::WeightedMembership => {
            // Records always carry at least one field.
            let member = fields[0].clone();
            fields.push("0".to_string());
            fields.push(member);
        }
        Derivation::Plain | Derivation::ReplyOf { .. } | Derivation::Parent { .. } => {}
    }
}

/// Builds the derived row for a record, if the rule emits one.
///
/// `fields` must hold at least [`Derivation::min_fields`] values.
pub fn derived_row(derivation: &Derivation, fields: &[String]) -> Option<DerivedRow> {
    match derivation {
        Derivation::ReplyOf { .. } => {
            let id = &fields[0];
            let created = &fields[1];
            let parent_post = &fields[fields.len() - 2];
            let parent_comment = &fields[fields.len() - 1];
            let (output, parent) = if parent_post.is_empty() {
                (1, parent_comment)
            } else {
                (0, parent_post)
            };
            Some(DerivedRow {
                output,
                fields: vec![id.clone(), parent.clone(), created.clone()],
            })
        }
        Derivation::Parent { .. } => {
            let parent = &fields[fields.len() - 1];
            (!parent.is_empty()).then(|| DerivedRow {
                output: 0,
                fields: vec![fields[0].clone(), parent.clone()],
            })
        }
        Derivation::Plain | Derivation::EdgeWeight | Derivation::WeightedMembership => None,
    }
}
