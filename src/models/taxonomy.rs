//! Mood taxonomy: the frozen emotion catalog and its grid views

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::catalog::{BLUE_PAIRS, GREEN_PAIRS, RED_PAIRS, YELLOW_PAIRS};
use super::mood::{MoodEmotion, MoodQuadrant, QuadrantFilter};
use crate::error::TaxonomyError;

/// `(한국어, English)`
pub type NamePair = (&'static str, &'static str);

/// Badges per grid row
pub const BADGES_PER_ROW: usize = 4;
/// Rows every quadrant panel is padded to
pub const ROWS_PER_QUADRANT: usize = 7;

/// One ordered name list per quadrant
#[derive(Debug, Clone, Copy)]
pub struct QuadrantLists {
    pub yellow: &'static [NamePair],
    pub red: &'static [NamePair],
    pub green: &'static [NamePair],
    pub blue: &'static [NamePair],
}

impl QuadrantLists {
    pub const REFERENCE: QuadrantLists = QuadrantLists {
        yellow: YELLOW_PAIRS,
        red: RED_PAIRS,
        green: GREEN_PAIRS,
        blue: BLUE_PAIRS,
    };

    pub fn get(&self, quadrant: MoodQuadrant) -> &'static [NamePair] {
        match quadrant {
            MoodQuadrant::Yellow => self.yellow,
            MoodQuadrant::Red => self.red,
            MoodQuadrant::Green => self.green,
            MoodQuadrant::Blue => self.blue,
        }
    }
}

/// Map a quadrant's name pairs to emotions in definition order.
pub fn create_quadrant(quadrant: MoodQuadrant, pairs: &[NamePair]) -> Vec<MoodEmotion> {
    pairs
        .iter()
        .enumerate()
        .map(|(index, &(name_ko, name_en))| MoodEmotion {
            id: format!("{}-{}", quadrant.key(), index + 1),
            name_ko,
            name_en,
            quadrant,
            slot: index,
        })
        .collect()
}

/// Grid cell of a quadrant panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell<'a> {
    Emotion(&'a MoodEmotion),
    Placeholder,
}

impl<'a> GridCell<'a> {
    pub fn emotion(&self) -> Option<&'a MoodEmotion> {
        match self {
            GridCell::Emotion(e) => Some(e),
            GridCell::Placeholder => None,
        }
    }
}

/// Chunk `entries` into rows of `per_row` cells, filling the last row and
/// then appending empty rows up to `target_rows`. Rows beyond the target are
/// kept; padding never goes negative.
pub fn grid_rows<'a>(entries: &[&'a MoodEmotion], per_row: usize, target_rows: usize) -> Vec<Vec<GridCell<'a>>> {
    let per_row = per_row.max(1);
    let mut rows: Vec<Vec<GridCell<'a>>> = entries
        .chunks(per_row)
        .map(|chunk| {
            let mut row: Vec<GridCell<'a>> = chunk.iter().map(|&e| GridCell::Emotion(e)).collect();
            row.resize(per_row, GridCell::Placeholder);
            row
        })
        .collect();

    while rows.len() < target_rows {
        rows.push(vec![GridCell::Placeholder; per_row]);
    }
    rows
}

/// Number of placeholder cells a padded grid holds
pub fn pad_count(actual: usize, per_row: usize, target_rows: usize) -> usize {
    let per_row = per_row.max(1);
    let real_rows = actual.div_ceil(per_row);
    real_rows.max(target_rows) * per_row - actual
}

/// The frozen emotion catalog
#[derive(Debug, Clone)]
pub struct MoodTaxonomy {
    emotions: Vec<MoodEmotion>,
}

impl MoodTaxonomy {
    /// Flatten the lists quadrant by quadrant in enumeration order.
    pub fn build(lists: &QuadrantLists) -> Self {
        let emotions: Vec<MoodEmotion> = MoodQuadrant::ALL
            .into_iter()
            .flat_map(|q| create_quadrant(q, lists.get(q)))
            .collect();
        debug!(count = emotions.len(), "mood taxonomy built");
        Self { emotions }
    }

    pub fn reference() -> Self {
        Self::build(&QuadrantLists::REFERENCE)
    }

    pub fn emotions(&self) -> &[MoodEmotion] {
        &self.emotions
    }

    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    pub fn in_quadrant(&self, quadrant: MoodQuadrant) -> Vec<&MoodEmotion> {
        self.emotions.iter().filter(|e| e.quadrant == quadrant).collect()
    }

    /// Partition by quadrant, slot order preserved. Every quadrant has an
    /// entry, possibly empty.
    pub fn by_quadrant(&self) -> BTreeMap<MoodQuadrant, Vec<&MoodEmotion>> {
        let mut map: BTreeMap<MoodQuadrant, Vec<&MoodEmotion>> =
            MoodQuadrant::ALL.into_iter().map(|q| (q, Vec::new())).collect();
        for emotion in &self.emotions {
            map.entry(emotion.quadrant).or_default().push(emotion);
        }
        map
    }

    /// Padded grid for one quadrant panel
    pub fn quadrant_grid(&self, quadrant: MoodQuadrant) -> Vec<Vec<GridCell<'_>>> {
        grid_rows(&self.in_quadrant(quadrant), BADGES_PER_ROW, ROWS_PER_QUADRANT)
    }

    /// Highlight flag per quadrant. Nothing is removed; dimmed quadrants
    /// are still rendered.
    pub fn filter_visible(&self, filter: QuadrantFilter) -> BTreeMap<MoodQuadrant, bool> {
        MoodQuadrant::ALL.into_iter().map(|q| (q, filter.highlights(q))).collect()
    }
}

/// Ids unique, slots `0..n` per quadrant, every quadrant non-empty, meta
/// colors parse.
pub fn validate_taxonomy(taxonomy: &MoodTaxonomy) -> Result<(), TaxonomyError> {
    let mut seen = HashSet::new();
    for emotion in taxonomy.emotions() {
        if !seen.insert(emotion.id.as_str()) {
            return Err(TaxonomyError::DuplicateId(emotion.id.clone()));
        }
    }

    for (quadrant, entries) in taxonomy.by_quadrant() {
        if entries.is_empty() {
            return Err(TaxonomyError::EmptyQuadrant(quadrant));
        }
        for (expected, emotion) in entries.iter().enumerate() {
            if emotion.slot != expected {
                return Err(TaxonomyError::SlotOutOfOrder {
                    quadrant,
                    expected,
                    found: emotion.slot,
                });
            }
        }
        let meta = quadrant.meta();
        if meta.rgb().is_none() {
            return Err(TaxonomyError::InvalidColor { quadrant, color: meta.color });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_quadrant_assigns_ids_and_slots() {
        let pairs: &[NamePair] = &[("환희", "Elation"), ("활기찬", "Lively")];
        let emotions = create_quadrant(MoodQuadrant::Yellow, pairs);
        assert_eq!(
            emotions,
            vec![
                MoodEmotion {
                    id: "yellow-1".to_string(),
                    name_ko: "환희",
                    name_en: "Elation",
                    quadrant: MoodQuadrant::Yellow,
                    slot: 0,
                },
                MoodEmotion {
                    id: "yellow-2".to_string(),
                    name_ko: "활기찬",
                    name_en: "Lively",
                    quadrant: MoodQuadrant::Yellow,
                    slot: 1,
                },
            ]
        );
    }

    #[test]
    fn test_reference_catalog_is_complete() {
        let taxonomy = MoodTaxonomy::reference();
        assert_eq!(taxonomy.len(), 100);

        let ids: HashSet<_> = taxonomy.emotions().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 100);

        for (_, entries) in taxonomy.by_quadrant() {
            assert_eq!(entries.len(), 25);
            let slots: Vec<usize> = entries.iter().map(|e| e.slot).collect();
            assert_eq!(slots, (0..25).collect::<Vec<_>>());
        }
        assert_eq!(validate_taxonomy(&taxonomy), Ok(()));
    }

    #[test]
    fn test_catalog_follows_enumeration_order() {
        let taxonomy = MoodTaxonomy::reference();
        let first = &taxonomy.emotions()[0];
        assert_eq!(first.id, "yellow-1");
        assert_eq!(taxonomy.emotions()[25].id, "red-1");
        assert_eq!(taxonomy.emotions()[50].id, "green-1");
        assert_eq!(taxonomy.emotions()[99].id, "blue-25");
        assert_eq!(taxonomy.emotions()[99].name_en, "Uncertain");
    }

    #[test]
    fn test_grid_pads_short_quadrant() {
        let pairs: Vec<NamePair> = (0..18).map(|_| ("감정", "Feeling")).collect();
        let emotions = create_quadrant(MoodQuadrant::Blue, &pairs);
        let refs: Vec<&MoodEmotion> = emotions.iter().collect();

        let rows = grid_rows(&refs, 4, ROWS_PER_QUADRANT);
        assert_eq!(rows.len(), ROWS_PER_QUADRANT);
        assert!(rows.iter().all(|r| r.len() == 4));

        let content_rows = rows.iter().filter(|r| r.iter().any(|c| c.emotion().is_some())).count();
        assert_eq!(content_rows, 5);

        let placeholders = rows.iter().flatten().filter(|c| **c == GridCell::Placeholder).count();
        assert_eq!(placeholders, pad_count(18, 4, ROWS_PER_QUADRANT));
        assert_eq!(placeholders, 10);
        assert_eq!(rows[4][1].emotion().map(|e| e.slot), Some(17));
        assert_eq!(rows[4][2], GridCell::Placeholder);
    }

    #[test]
    fn test_grid_never_drops_rows() {
        let pairs: Vec<NamePair> = (0..40).map(|_| ("감정", "Feeling")).collect();
        let emotions = create_quadrant(MoodQuadrant::Red, &pairs);
        let refs: Vec<&MoodEmotion> = emotions.iter().collect();

        let rows = grid_rows(&refs, 4, ROWS_PER_QUADRANT);
        assert_eq!(rows.len(), 10);
        assert_eq!(pad_count(40, 4, ROWS_PER_QUADRANT), 0);
        assert_eq!(grid_rows(&[], 4, 2).len(), 2);
    }

    #[test]
    fn test_reference_grid_shape() {
        let taxonomy = MoodTaxonomy::reference();
        let grid = taxonomy.quadrant_grid(MoodQuadrant::Green);
        assert_eq!(grid.len(), ROWS_PER_QUADRANT);
        assert_eq!(grid.iter().flatten().filter_map(|c| c.emotion()).count(), 25);
        assert_eq!(grid[0][0].emotion().map(|e| e.name_en), Some("Serene"));
    }

    #[test]
    fn test_filter_visible_dims_without_removing() {
        let taxonomy = MoodTaxonomy::reference();
        let all = taxonomy.filter_visible(QuadrantFilter::All);
        assert!(all.values().all(|&h| h));

        let only_red = taxonomy.filter_visible(QuadrantFilter::Only(MoodQuadrant::Red));
        assert_eq!(only_red.len(), 4);
        assert_eq!(only_red.values().filter(|&&h| h).count(), 1);
        assert_eq!(only_red.get(&MoodQuadrant::Red), Some(&true));
        assert_eq!(taxonomy.len(), 100);
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        const DUP: &[NamePair] = &[("하나", "One")];
        let lists = QuadrantLists { yellow: DUP, red: DUP, green: DUP, blue: DUP };
        let mut taxonomy = MoodTaxonomy::build(&lists);
        assert_eq!(validate_taxonomy(&taxonomy), Ok(()));

        taxonomy.emotions[1].id = "yellow-1".to_string();
        assert_eq!(
            validate_taxonomy(&taxonomy),
            Err(TaxonomyError::DuplicateId("yellow-1".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_quadrant() {
        const ONE: &[NamePair] = &[("하나", "One")];
        let lists = QuadrantLists { yellow: ONE, red: &[], green: ONE, blue: ONE };
        let taxonomy = MoodTaxonomy::build(&lists);
        assert_eq!(
            validate_taxonomy(&taxonomy),
            Err(TaxonomyError::EmptyQuadrant(MoodQuadrant::Red))
        );
    }
}
