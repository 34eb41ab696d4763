//! Coarse change previews between an existing file and a fresh render.
//!
//! This is a line-*set* difference, not a canonical diff: lines are compared
//! by membership, so moved or duplicated lines are not reported. It is good
//! enough to tell users whether regenerating would change a file and roughly
//! how.

use std::collections::HashSet;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum DiffReport {
    /// Nothing on disk yet; every rendered line would be added.
    NewFile { added: Vec<String> },
    /// Byte-identical to the rendered content.
    UpToDate,
    /// Existing lines missing from the render, and rendered lines missing
    /// from the existing file, each in original order.
    Changed {
        removed: Vec<String>,
        added: Vec<String>,
    },
}

impl DiffReport {
    pub fn compute(existing: Option<&str>, rendered: &str) -> Self {
        let Some(existing) = existing else {
            return Self::NewFile {
                added: rendered.lines().map(str::to_string).collect(),
            };
        };

        if existing == rendered {
            return Self::UpToDate;
        }

        let old: HashSet<&str> = existing.lines().collect();
        let new: HashSet<&str> = rendered.lines().collect();

        Self::Changed {
            removed: existing
                .lines()
                .filter(|l| !new.contains(l))
                .map(str::to_string)
                .collect(),
            added: rendered
                .lines()
                .filter(|l| !old.contains(l))
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate)
    }

    pub fn added(&self) -> &[String] {
        match self {
            Self::NewFile { added } | Self::Changed { added, .. } => added,
            Self::UpToDate => &[],
        }
    }

    pub fn removed(&self) -> &[String] {
        match self {
            Self::Changed { removed, .. } => removed,
            _ => &[],
        }
    }

    /// Short human summary, e.g. `+3 -1`.
    pub fn summary(&self) -> String {
        match self {
            Self::NewFile { added } => format!("new file (+{})", added.len()),
            Self::UpToDate => "up to date".to_string(),
            Self::Changed { removed, added } => format!("+{} -{}", added.len(), removed.len()),
        }
    }
}
