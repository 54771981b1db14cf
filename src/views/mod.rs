//! Derived View Layer
//!
//! Pure projections over a catalog snapshot, recomputed on every call.
//! Nothing here mutates or caches; the dataset is small enough that
//! recomputation is the simplest correct answer.

use std::collections::HashSet;

use crate::models::{Artifact, Theme};

/// Artifacts whose theme matches the selector, original order preserved.
/// `Theme::All` returns the whole snapshot. The result is an owned
/// captured sequence, ready to hand to a `Sequencer` while an overlay is
/// open.
pub fn filter_by_theme(snapshot: &[Artifact], theme: Theme) -> Vec<Artifact> {
    match theme {
        Theme::All => snapshot.to_vec(),
        _ => snapshot
            .iter()
            .filter(|a| a.theme == theme.as_str())
            .cloned()
            .collect(),
    }
}

/// The artifact with the maximum like count; ties go to the first one in
/// sequence order. `None` on an empty snapshot.
pub fn featured(snapshot: &[Artifact]) -> Option<&Artifact> {
    snapshot.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.likes > current.likes => Some(candidate),
        Some(current) => Some(current),
        None => Some(candidate),
    })
}

/// Sum of like counters across the snapshot.
pub fn total_likes(snapshot: &[Artifact]) -> u64 {
    snapshot.iter().map(|a| u64::from(a.likes)).sum()
}

/// Number of distinct theme labels actually present (free text, so this
/// may differ from the size of the `Theme` enum).
pub fn distinct_theme_count(snapshot: &[Artifact]) -> usize {
    snapshot
        .iter()
        .map(|a| a.theme.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(id: &str, theme: &str, likes: u32) -> Artifact {
        Artifact {
            id: id.to_string(),
            title: format!("Artifact {}", id),
            image: format!("{}.png", id),
            theme: theme.to_string(),
            description: None,
            date: "2026-01-01".to_string(),
            likes,
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let snapshot = vec![artifact("1", "Peace", 3), artifact("2", "Unity", 5)];
        let filtered = filter_by_theme(&snapshot, Theme::All);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "2");

        assert!(filter_by_theme(&[], Theme::All).is_empty());
    }

    #[test]
    fn test_featured_tie_takes_first() {
        let snapshot = vec![
            artifact("1", "Peace", 5),
            artifact("2", "Unity", 9),
            artifact("3", "Peace", 9),
        ];
        assert_eq!(featured(&snapshot).unwrap().id, "2");
    }

    #[test]
    fn test_featured_empty_is_none() {
        assert!(featured(&[]).is_none());
    }

    #[test]
    fn test_distinct_theme_count() {
        let snapshot = vec![
            artifact("1", "Peace", 0),
            artifact("2", "Peace", 0),
            artifact("3", "Unity", 0),
        ];
        assert_eq!(distinct_theme_count(&snapshot), 2);
    }
}
