//! Predicate-based record filtering.
//!
//! A [`FilterChain`] evaluates an ordered sequence of [`Predicate`]s as a
//! short-circuiting conjunction: the first predicate that rejects a record
//! drops it. New predicates are added by implementing the trait and pushing
//! them onto the chain; existing predicates are never modified to compose.

use crate::record::City;
use std::collections::HashSet;

/// Population threshold used when no explicit configuration is supplied.
pub const DEFAULT_POPULATION_LIMIT: u64 = 5_000_000;

/// One filtering rule over a [`City`] record.
pub trait Predicate: Send + Sync {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// `true` to keep the record, `false` to drop it.
    fn accept(&self, city: &City) -> bool;
}

/// Keeps records whose population meets a minimum threshold.
///
/// A missing population (absent or non-numeric source field) always fails;
/// malformed records are excluded here rather than crashing the run.
pub struct MinPopulation(pub u64);

impl Predicate for MinPopulation {
    fn name(&self) -> &'static str {
        "min_population"
    }

    fn accept(&self, city: &City) -> bool {
        city.population.is_some_and(|p| p >= self.0)
    }
}

/// Keeps records whose country code is in the allow-list.
///
/// An empty allow-list is unrestricted: every record passes.
pub struct CountryAllowList {
    codes: HashSet<String>,
}

impl CountryAllowList {
    #[must_use]
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Predicate for CountryAllowList {
    fn name(&self) -> &'static str {
        "country_allow_list"
    }

    fn accept(&self, city: &City) -> bool {
        self.codes.is_empty() || self.codes.contains(&city.country_code)
    }
}

/// Ordered conjunction of predicates.
#[derive(Default)]
pub struct FilterChain {
    predicates: Vec<Box<dyn Predicate>>,
}

impl FilterChain {
    /// An empty chain, which accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate, builder style.
    #[must_use]
    pub fn with(mut self, predicate: impl Predicate + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// `true` when every predicate accepts the record. Evaluation stops at
    /// the first rejection.
    pub fn accept(&self, city: &City) -> bool {
        self.predicates.iter().all(|p| p.accept(city))
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Process-wide filter settings, fixed at startup and read-only for the run.
#[derive(Clone, Debug)]
pub struct FilterConfig {
    /// Minimum population a record must reach to survive.
    pub min_population: u64,
    /// Country codes permitted to pass; empty means unrestricted.
    pub allowed_countries: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_population: DEFAULT_POPULATION_LIMIT,
            allowed_countries: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Build the standard two-predicate chain from this configuration.
    #[must_use]
    pub fn into_chain(self) -> FilterChain {
        FilterChain::new()
            .with(MinPopulation(self.min_population))
            .with(CountryAllowList::new(self.allowed_countries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(population: Option<u64>, country: &str) -> City {
        City {
            id: Some(1),
            name: "Test".into(),
            asciiname: "Test".into(),
            lat: "0.0".into(),
            lng: "0.0".into(),
            country_code: country.into(),
            population,
            elevation: None,
            time_zone: "UTC".into(),
        }
    }

    #[test]
    fn population_threshold_is_inclusive() {
        let p = MinPopulation(5_000_000);
        assert!(p.accept(&city(Some(5_000_000), "FR")));
        assert!(!p.accept(&city(Some(4_999_999), "FR")));
    }

    #[test]
    fn missing_population_never_passes() {
        assert!(!MinPopulation(0).accept(&city(None, "FR")));
    }

    #[test]
    fn empty_allow_list_is_unrestricted() {
        let p = CountryAllowList::new(Vec::<String>::new());
        assert!(p.accept(&city(Some(1), "FR")));
        assert!(p.accept(&city(Some(1), "")));
    }

    #[test]
    fn allow_list_is_exact_membership() {
        let p = CountryAllowList::new(["DE", "NL"]);
        assert!(p.accept(&city(Some(1), "DE")));
        assert!(!p.accept(&city(Some(1), "FR")));
    }

    #[test]
    fn chain_short_circuits_as_conjunction() {
        let chain = FilterChain::new()
            .with(MinPopulation(100))
            .with(CountryAllowList::new(["FR"]));
        assert!(chain.accept(&city(Some(100), "FR")));
        assert!(!chain.accept(&city(Some(99), "FR")));
        assert!(!chain.accept(&city(Some(100), "DE")));
    }

    #[test]
    fn empty_chain_accepts_everything() {
        assert!(FilterChain::new().accept(&city(None, "")));
    }
}
