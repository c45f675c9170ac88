//! Nearest-template matcher.

use crate::geometry::Point;
use crate::library::{Template, TemplateLibrary};
use crate::normalize::NormalizeConfig;
use crate::score::average_distance;
use crate::search::pipeline::prepare;
use crate::search::rank::{best_of, Scored, TopK};
use crate::search::{Match, MatchConfig};
use crate::trace::{trace_event, trace_span};
use crate::util::{StrokeMatchError, StrokeMatchResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Returns the label of the template closest to `candidate`.
///
/// Templates are scored in order and each one exactly once; the first
/// template wins when distances are equal. An empty `library` is reported
/// before an empty `candidate`.
pub fn recommend(candidate: &[Point], library: &[Template]) -> StrokeMatchResult<String> {
    if library.is_empty() {
        return Err(StrokeMatchError::EmptyLibrary);
    }
    let cfg = NormalizeConfig::default();
    let candidate = prepare(candidate, &cfg)?;
    let distances = library
        .iter()
        .map(|tpl| {
            let prepared = prepare(tpl.gesture.points(), &cfg)?;
            average_distance(&candidate, &prepared)
        })
        .collect::<StrokeMatchResult<Vec<f64>>>()?;
    let best = best_of(&distances).ok_or(StrokeMatchError::EmptyLibrary)?;
    Ok(library[best.index].label.clone())
}

/// Matcher over a template library whose templates are prepared once.
///
/// Each template is resampled and normalized at construction, so a match
/// call only prepares the candidate and scores it against every template.
pub struct Matcher {
    library: TemplateLibrary,
    prepared: Vec<Vec<Point>>,
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(library: TemplateLibrary) -> StrokeMatchResult<Self> {
        let cfg = MatchConfig::default();
        let prepared = prepare_library(&library, &cfg.normalize)?;
        Ok(Self {
            library,
            prepared,
            cfg,
        })
    }

    /// Replaces the configuration, re-preparing templates if the
    /// normalization frame changed.
    pub fn with_config(mut self, cfg: MatchConfig) -> StrokeMatchResult<Self> {
        cfg.validate()?;
        if cfg.normalize != self.cfg.normalize {
            self.prepared = prepare_library(&self.library, &cfg.normalize)?;
        }
        self.cfg = cfg;
        Ok(self)
    }

    /// Returns the library this matcher scores against.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Distance from `candidate` to every template, in library order.
    pub fn scores(&self, candidate: &[Point]) -> StrokeMatchResult<Vec<f64>> {
        let candidate = prepare(candidate, &self.cfg.normalize)?;

        #[cfg(feature = "rayon")]
        {
            if self.cfg.parallel {
                return self
                    .prepared
                    .par_iter()
                    .map(|tpl| average_distance(&candidate, tpl))
                    .collect();
            }
        }

        self.prepared
            .iter()
            .map(|tpl| average_distance(&candidate, tpl))
            .collect()
    }

    /// Returns the closest template, or `None` if it is farther than
    /// `max_distance`.
    pub fn best_match(&self, candidate: &[Point]) -> StrokeMatchResult<Option<Match>> {
        let _span = trace_span!("best_match", templates = self.prepared.len()).entered();
        let distances = self.scores(candidate)?;
        let best = best_of(&distances).ok_or(StrokeMatchError::EmptyLibrary)?;
        trace_event!(
            "best_match",
            index = best.index,
            distance = best.distance
        );
        if !self.accepts(best.distance) {
            return Ok(None);
        }
        Ok(Some(self.to_match(best)))
    }

    /// Returns the label of [`Matcher::best_match`].
    pub fn recommend(&self, candidate: &[Point]) -> StrokeMatchResult<Option<String>> {
        Ok(self.best_match(candidate)?.map(|m| m.label))
    }

    /// Returns up to `k` templates, closest first, skipping any beyond
    /// `max_distance`. Ties keep library order.
    pub fn rank(&self, candidate: &[Point], k: usize) -> StrokeMatchResult<Vec<Match>> {
        let _span = trace_span!("rank", templates = self.prepared.len(), k = k).entered();
        let distances = self.scores(candidate)?;
        let mut topk = TopK::new(k);
        for (index, &distance) in distances.iter().enumerate() {
            if self.accepts(distance) {
                topk.push(Scored { index, distance });
            }
        }
        let ranked: Vec<Match> = topk
            .into_sorted_asc()
            .into_iter()
            .map(|scored| self.to_match(scored))
            .collect();
        trace_event!("rank", kept = ranked.len());
        Ok(ranked)
    }

    fn accepts(&self, distance: f64) -> bool {
        self.cfg.max_distance.map_or(true, |max| distance <= max)
    }

    fn to_match(&self, scored: Scored) -> Match {
        Match {
            label: self.library.templates()[scored.index].label.clone(),
            distance: scored.distance,
            index: scored.index,
        }
    }
}

fn prepare_library(
    library: &TemplateLibrary,
    cfg: &NormalizeConfig,
) -> StrokeMatchResult<Vec<Vec<Point>>> {
    library
        .templates()
        .iter()
        .map(|tpl| prepare(tpl.gesture.points(), cfg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{recommend, Matcher};
    use crate::geometry::Point;
    use crate::search::pipeline::geometric_ten_match_with;
    use crate::gesture::Gesture;
    use crate::library::{Template, TemplateLibrary};
    use crate::normalize::NormalizeConfig;
    use crate::search::MatchConfig;
    use crate::util::StrokeMatchError;

    fn line_and_dot() -> TemplateLibrary {
        let line: &[[f64; 2]] = &[[0.0, 0.0], [100.0, 0.0]];
        let dot: &[[f64; 2]] = &[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]];
        TemplateLibrary::from_pairs([("line", line), ("dot", dot)]).unwrap()
    }

    fn pts(pairs: &[[f64; 2]]) -> Vec<Point> {
        pairs.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn recommend_picks_line_for_flat_stroke() {
        let lib = line_and_dot();
        let candidate = pts(&[[0.0, 0.0], [50.0, 1.0], [100.0, 0.0]]);
        assert_eq!(recommend(&candidate, lib.templates()).unwrap(), "line");
    }

    #[test]
    fn recommend_rejects_empty_library_first() {
        assert_eq!(recommend(&[], &[]), Err(StrokeMatchError::EmptyLibrary));
        let candidate = pts(&[[1.0, 1.0]]);
        assert_eq!(
            recommend(&candidate, &[]),
            Err(StrokeMatchError::EmptyLibrary)
        );
    }

    #[test]
    fn recommend_rejects_empty_candidate() {
        let lib = line_and_dot();
        assert_eq!(
            recommend(&[], lib.templates()),
            Err(StrokeMatchError::EmptyGesture)
        );
    }

    #[test]
    fn matcher_agrees_with_recommend() {
        let lib = line_and_dot();
        let candidate = pts(&[[0.0, 0.0], [50.0, 1.0], [100.0, 0.0]]);
        let expected = recommend(&candidate, lib.templates()).unwrap();
        let matcher = Matcher::new(lib).unwrap();
        let best = matcher.best_match(&candidate).unwrap().unwrap();
        assert_eq!(best.label, expected);
        assert_eq!(best.index, 0);
        assert!((best.distance - 30.0).abs() < 1e-2, "{}", best.distance);
    }

    #[test]
    fn max_distance_rejects_far_matches() {
        let matcher = Matcher::new(line_and_dot())
            .unwrap()
            .with_config(MatchConfig {
                max_distance: Some(10.0),
                ..MatchConfig::default()
            })
            .unwrap();
        let candidate = pts(&[[0.0, 0.0], [50.0, 1.0], [100.0, 0.0]]);
        assert_eq!(matcher.recommend(&candidate).unwrap(), None);
        assert!(matcher.rank(&candidate, 2).unwrap().is_empty());
    }

    #[test]
    fn with_config_validates() {
        let err = Matcher::new(line_and_dot())
            .unwrap()
            .with_config(MatchConfig {
                normalize: NormalizeConfig {
                    size: -1.0,
                    ..NormalizeConfig::default()
                },
                ..MatchConfig::default()
            })
            .err()
            .unwrap();
        assert!(matches!(err, StrokeMatchError::InvalidConfig { .. }));
    }

    #[test]
    fn with_config_reprepares_for_a_new_frame() {
        let lib = line_and_dot();
        let candidate = pts(&[[0.0, 0.0], [40.0, 80.0], [90.0, 10.0]]);
        let default_scores = Matcher::new(lib.clone())
            .unwrap()
            .scores(&candidate)
            .unwrap();

        let frame = NormalizeConfig {
            size: 50.0,
            degenerate_threshold: 5.0,
        };
        let matcher = Matcher::new(lib)
            .unwrap()
            .with_config(MatchConfig {
                normalize: frame,
                ..MatchConfig::default()
            })
            .unwrap();
        assert_eq!(matcher.config().normalize, frame);

        let scores = matcher.scores(&candidate).unwrap();
        let expected: Vec<f64> = matcher
            .library()
            .templates()
            .iter()
            .map(|tpl| geometric_ten_match_with(&candidate, tpl.gesture.points(), &frame).unwrap())
            .collect();
        assert_eq!(scores, expected);
        assert_ne!(scores, default_scores);
    }

    #[test]
    fn rank_orders_by_distance() {
        let lib = TemplateLibrary::new(vec![
            Template::new("dot", Gesture::from_pairs(&[[0.0, 0.0]]).unwrap()),
            Template::new(
                "line",
                Gesture::from_pairs(&[[0.0, 0.0], [100.0, 0.0]]).unwrap(),
            ),
        ])
        .unwrap();
        let matcher = Matcher::new(lib).unwrap();
        let candidate = pts(&[[0.0, 0.0], [50.0, 1.0], [100.0, 0.0]]);
        let ranked = matcher.rank(&candidate, 5).unwrap();
        let labels: Vec<&str> = ranked.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["line", "dot"]);
        assert!(ranked[0].distance <= ranked[1].distance);
        assert!(matcher.rank(&candidate, 0).unwrap().is_empty());
    }
}
