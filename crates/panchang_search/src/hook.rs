//! Regional rule hooks: post-processing of display names and qualities.
//!
//! Hooks run after the core has produced a [`PanchangInfo`]. They see a
//! [`PanchangView`], which carries only strings and a metadata map, so the
//! element numbers, angles and percentages in `PanchangInfo` cannot be
//! altered by a hook.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use crate::error::SearchError;
use crate::panchang_types::PanchangInfo;

/// What a hook is allowed to change. Hooks run grouped by capability in
/// this order, and in registration order within a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Capability {
    /// Rename elements (regional language, alternate spellings).
    Naming,
    /// Rewrite auspiciousness or nature labels.
    Quality,
    /// Attach region-specific key/value metadata.
    Metadata,
}

/// Display label for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementLabel {
    /// Display name.
    pub name: String,
    /// Nature or category label, if the element has one.
    pub quality: Option<String>,
}

impl ElementLabel {
    fn new(name: &str, quality: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            quality: quality.map(str::to_string),
        }
    }
}

/// Display-only projection of a panchang, mutable by hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanchangView {
    pub vara: ElementLabel,
    pub tithi: ElementLabel,
    pub paksha: String,
    pub nakshatra: ElementLabel,
    pub yoga: ElementLabel,
    pub karana: ElementLabel,
    pub sun_rashi: String,
    pub moon_rashi: String,
    /// Extra region-specific fields, sorted by key.
    pub metadata: BTreeMap<String, String>,
}

impl PanchangView {
    /// Canonical labels taken from the computed panchang.
    pub fn from_info(info: &PanchangInfo) -> Self {
        Self {
            vara: ElementLabel::new(info.vara.name, None),
            tithi: ElementLabel::new(info.tithi.info.name, Some(info.tithi.info.category.name())),
            paksha: info.tithi.info.paksha.name().to_string(),
            nakshatra: ElementLabel::new(info.nakshatra.info.name, None),
            yoga: ElementLabel::new(info.yoga.info.name, Some(info.yoga.info.nature.name())),
            karana: ElementLabel::new(info.karana.info.name, Some(info.karana.info.nature)),
            sun_rashi: info.sun_rashi.name.to_string(),
            moon_rashi: info.moon_rashi.name.to_string(),
            metadata: BTreeMap::new(),
        }
    }
}

/// A regional extension that rewrites display fields.
pub trait RegionalRuleHook: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Rewrite `panchang` in place.
    fn apply(&self, panchang: &mut PanchangView) -> Result<(), SearchError>;
}

/// Hooks grouped by capability.
#[derive(Default)]
pub struct HookRegistry {
    hooks: BTreeMap<Capability, Vec<Box<dyn RegionalRuleHook>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hook under `capability`; it runs after those already registered
    /// there.
    pub fn register(&mut self, capability: Capability, hook: Box<dyn RegionalRuleHook>) {
        debug!("registering hook '{}' for {capability:?}", hook.name());
        self.hooks.entry(capability).or_default().push(hook);
    }

    /// Names of the hooks registered under `capability`, in run order.
    pub fn hook_names(&self, capability: Capability) -> Vec<&str> {
        self.hooks
            .get(&capability)
            .map(|hs| hs.iter().map(|h| h.name()).collect())
            .unwrap_or_default()
    }

    /// Run every hook over `view`. Stops at the first failure.
    pub fn apply_all(&self, view: &mut PanchangView) -> Result<(), SearchError> {
        for (capability, hooks) in &self.hooks {
            for hook in hooks {
                if let Err(e) = hook.apply(view) {
                    warn!("hook '{}' ({capability:?}) failed: {e}", hook.name());
                    return Err(SearchError::Hook {
                        hook: hook.name().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Build the canonical view of `info` and run every hook over it.
    pub fn render(&self, info: &PanchangInfo) -> Result<PanchangView, SearchError> {
        let mut view = PanchangView::from_info(info);
        self.apply_all(&mut view)?;
        Ok(view)
    }

    /// Total number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: BTreeMap<&Capability, Vec<&str>> = self
            .hooks
            .iter()
            .map(|(c, hs)| (c, hs.iter().map(|h| h.name()).collect()))
            .collect();
        f.debug_struct("HookRegistry").field("hooks", &names).finish()
    }
}
