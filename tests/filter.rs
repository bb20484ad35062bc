use geoflow::{City, CountryAllowList, FilterChain, MinPopulation, Predicate};

fn fixtures() -> Vec<City> {
    [
        "1\tTokyo\tTokyo\t\t35.68\t139.69\t\t\tJP\t\t\t\t\t\t37400068\t40\tAsia/Tokyo",
        "2\tParis\tParis\t\t48.85\t2.35\t\t\tFR\t\t\t\t\t\t2148000\t35\tEurope/Paris",
        "3\tBerlin\tBerlin\t\t52.52\t13.40\t\t\tDE\t\t\t\t\t\t3644826\t34\tEurope/Berlin",
        "4\tNowhere\tNowhere\t\t0.0\t0.0\t\t\tXX\t\t\t\t\t\tnot-a-number\t\tEtc/UTC",
    ]
    .iter()
    .map(|line| City::from_line(line))
    .collect()
}

fn surviving(chain: &FilterChain, cities: &[City]) -> Vec<String> {
    cities
        .iter()
        .filter(|c| chain.accept(c))
        .map(|c| c.name.clone())
        .collect()
}

#[test]
fn removing_a_predicate_never_shrinks_the_surviving_set() {
    let cities = fixtures();
    let full = FilterChain::new()
        .with(MinPopulation(3_000_000))
        .with(CountryAllowList::new(["JP", "FR"]));
    let without_country = FilterChain::new().with(MinPopulation(3_000_000));
    let without_population = FilterChain::new().with(CountryAllowList::new(["JP", "FR"]));

    let kept_full = surviving(&full, &cities);
    for reduced in [&without_country, &without_population] {
        let kept_reduced = surviving(reduced, &cities);
        assert!(kept_reduced.len() >= kept_full.len());
        for name in &kept_full {
            assert!(kept_reduced.contains(name), "{name} lost by removing a predicate");
        }
    }
}

#[test]
fn malformed_population_is_rejected_not_fatal() {
    let cities = fixtures();
    let chain = FilterChain::new().with(MinPopulation(0));
    let kept = surviving(&chain, &cities);
    assert!(!kept.contains(&"Nowhere".to_string()));
    assert_eq!(kept.len(), 3);
}

#[test]
fn chains_compose_without_touching_existing_predicates() {
    // A new rule slots in alongside the built-ins via the same trait.
    struct NamedOnly;
    impl Predicate for NamedOnly {
        fn name(&self) -> &'static str {
            "named_only"
        }
        fn accept(&self, city: &City) -> bool {
            !city.name.is_empty()
        }
    }

    let chain = FilterChain::new()
        .with(MinPopulation(1))
        .with(NamedOnly);
    assert_eq!(chain.len(), 2);
    let kept = surviving(&chain, &fixtures());
    assert_eq!(kept, ["Tokyo", "Paris", "Berlin"]);
}
