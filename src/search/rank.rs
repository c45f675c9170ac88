//! Distance ordering and Top-K collection for template scores.

use std::cmp::Ordering;

/// Distance of one library template to the candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Scored {
    /// Position of the template in the library.
    pub index: usize,
    /// Average point distance; lower is better.
    pub distance: f64,
}

/// Ascending distance with NaN last, ties resolved by library order.
fn scored_cmp_asc(a: &Scored, b: &Scored) -> Ordering {
    a.distance
        .is_nan()
        .cmp(&b.distance.is_nan())
        .then_with(|| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.index.cmp(&b.index))
}

/// Returns the closest template.
///
/// The running best is replaced only by a strictly smaller distance, so the
/// earliest template wins ties and a NaN never displaces an earlier score.
pub(crate) fn best_of(distances: &[f64]) -> Option<Scored> {
    let (&first, rest) = distances.split_first()?;
    let mut best = Scored {
        index: 0,
        distance: first,
    };
    for (offset, &distance) in rest.iter().enumerate() {
        if distance < best.distance {
            best = Scored {
                index: offset + 1,
                distance,
            };
        }
    }
    Some(best)
}

/// Top-K container keeping the `k` closest templates.
pub(crate) struct TopK {
    k: usize,
    items: Vec<Scored>,
}

impl TopK {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            k,
            items: Vec::with_capacity(k),
        }
    }

    /// Pushes a score, evicting the farthest entry when at capacity.
    pub(crate) fn push(&mut self, scored: Scored) {
        if self.k == 0 {
            return;
        }
        if self.items.len() < self.k {
            self.items.push(scored);
            return;
        }

        let mut worst_idx = 0usize;
        for (idx, item) in self.items.iter().enumerate().skip(1) {
            if scored_cmp_asc(item, &self.items[worst_idx]) == Ordering::Greater {
                worst_idx = idx;
            }
        }

        if scored_cmp_asc(&scored, &self.items[worst_idx]) == Ordering::Less {
            self.items[worst_idx] = scored;
        }
    }

    /// Returns the kept entries, closest first.
    pub(crate) fn into_sorted_asc(mut self) -> Vec<Scored> {
        self.items.sort_by(scored_cmp_asc);
        self.items
    }
}
