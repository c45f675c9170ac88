//! Template libraries.
//!
//! A `TemplateLibrary` is an ordered, non-empty list of labelled gestures
//! with unique labels. Order matters: ranking ties resolve to the template
//! listed first. `SharedLibrary` lets a running service swap in a new library
//! while readers keep using the snapshot they already hold.

use crate::gesture::Gesture;
use crate::util::{StrokeMatchError, StrokeMatchResult};
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A labelled reference gesture.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    /// Label returned when this template wins.
    pub label: String,
    /// Reference path.
    #[cfg_attr(feature = "serde", serde(rename = "points"))]
    pub gesture: Gesture,
}

impl Template {
    /// Creates a template from a label and a gesture.
    pub fn new(label: impl Into<String>, gesture: Gesture) -> Self {
        Self {
            label: label.into(),
            gesture,
        }
    }
}

/// Ordered, non-empty set of templates with unique labels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Template>", into = "Vec<Template>")
)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
}

impl TemplateLibrary {
    /// Builds a library, rejecting empty lists and duplicate labels.
    pub fn new(templates: Vec<Template>) -> StrokeMatchResult<Self> {
        if templates.is_empty() {
            return Err(StrokeMatchError::EmptyLibrary);
        }
        let mut seen = HashSet::with_capacity(templates.len());
        for tpl in &templates {
            if !seen.insert(tpl.label.as_str()) {
                return Err(StrokeMatchError::DuplicateLabel {
                    label: tpl.label.clone(),
                });
            }
        }
        Ok(Self { templates })
    }

    /// Builds a library from `(label, [[x, y], ...])` entries.
    pub fn from_pairs<'a, I>(entries: I) -> StrokeMatchResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a [[f64; 2]])>,
    {
        let templates = entries
            .into_iter()
            .map(|(label, pairs)| -> StrokeMatchResult<Template> {
                Ok(Template::new(label, Gesture::from_pairs(pairs)?))
            })
            .collect::<StrokeMatchResult<Vec<_>>>()?;
        Self::new(templates)
    }

    /// Returns the templates in library order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Returns the number of templates (always at least one).
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks up a template by label.
    pub fn get(&self, label: &str) -> Option<&Template> {
        self.templates.iter().find(|tpl| tpl.label == label)
    }

    /// Iterates over labels in library order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|tpl| tpl.label.as_str())
    }
}

impl TryFrom<Vec<Template>> for TemplateLibrary {
    type Error = StrokeMatchError;

    fn try_from(templates: Vec<Template>) -> StrokeMatchResult<Self> {
        Self::new(templates)
    }
}

impl From<TemplateLibrary> for Vec<Template> {
    fn from(lib: TemplateLibrary) -> Self {
        lib.templates
    }
}

/// Copy-on-write handle to the current template library.
///
/// Readers take an `Arc` snapshot and never observe a partially updated
/// library; writers replace the whole library at once.
#[derive(Debug)]
pub struct SharedLibrary {
    current: RwLock<Arc<TemplateLibrary>>,
}

impl SharedLibrary {
    /// Wraps an initial library.
    pub fn new(library: TemplateLibrary) -> Self {
        Self {
            current: RwLock::new(Arc::new(library)),
        }
    }

    /// Returns the library current at the time of the call.
    pub fn snapshot(&self) -> Arc<TemplateLibrary> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs `library` and returns the one it replaced.
    pub fn replace(&self, library: TemplateLibrary) -> Arc<TemplateLibrary> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(library))
    }
}
