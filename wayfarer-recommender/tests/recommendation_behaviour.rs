//! Behavioural tests for the recommenders using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wayfarer_core::{Destination, Trait, TraitScores};
use wayfarer_recommender::{RecommendError, Snapshot, VibeRequest};

#[derive(Debug, Default)]
struct RecommendWorld {
    snapshot: RefCell<Option<Snapshot>>,
    names: RefCell<Vec<String>>,
    previous: RefCell<Option<Vec<String>>>,
    error: RefCell<Option<RecommendError>>,
}

impl RecommendWorld {
    fn record<F>(&self, run: F)
    where
        F: FnOnce(&Snapshot) -> Result<Vec<String>, RecommendError>,
    {
        let outcome = {
            let snapshot = self.snapshot.borrow();
            run(snapshot.as_ref().expect("snapshot should be built"))
        };
        match outcome {
            Ok(names) => {
                self.names.replace(names);
                self.error.replace(None);
            }
            Err(error) => {
                self.names.replace(Vec::new());
                self.error.replace(Some(error));
            }
        }
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::default()
}

fn names(results: &[wayfarer_recommender::Recommendation<'_>]) -> Vec<String> {
    results
        .iter()
        .map(|result| result.destination.name.clone())
        .collect()
}

#[given("a snapshot of a beach resort, a mountain trek and a beach trek")]
fn given_snapshot(world: &RecommendWorld) {
    let snapshot = Snapshot::build(vec![
        Destination::new(1, "Beach Resort")
            .with_description("beach resort")
            .with_traits(TraitScores::from_array([1, 5, 1, 1, 5])),
        Destination::new(2, "Mountain Trek")
            .with_description("mountain trek")
            .with_traits(TraitScores::from_array([5, 1, 5, 1, 1])),
        Destination::new(3, "Beach Trek")
            .with_description("beach trek")
            .with_traits(TraitScores::from_array([3, 3, 3, 3, 3])),
    ])
    .expect("catalogue is not empty");
    world.snapshot.replace(Some(snapshot));
}

#[when("I ask for {count} text recommendation for \"{query}\"")]
fn when_text(world: &RecommendWorld, count: usize, query: String) {
    let query = query.trim_matches('"').to_owned();
    world.record(|snapshot| {
        snapshot
            .recommend_by_query(&query, count)
            .map(|results| names(&results))
    });
}

#[when("I ask for {count} trait recommendations for \"{query}\"")]
fn when_traits(world: &RecommendWorld, count: usize, query: String) {
    let query = query.trim_matches('"').to_owned();
    world.record(|snapshot| {
        snapshot
            .recommend_by_traits(&query, count)
            .map(|results| names(&results))
    });
}

#[when(
    "I ask twice for {count} vibe recommendations for adventure {adventure}, relax {relax}, nature {nature}, culture {culture} and luxury {luxury}"
)]
fn when_vibe_twice(
    world: &RecommendWorld,
    count: usize,
    adventure: u32,
    relax: u32,
    nature: u32,
    culture: u32,
    luxury: u32,
) {
    let vibe = VibeRequest::from(TraitScores::from_array([
        adventure, relax, nature, culture, luxury,
    ]));
    world.record(|snapshot| {
        snapshot
            .recommend_by_vibe(&vibe, count)
            .map(|results| names(&results))
    });
    let first = world.names.borrow().clone();
    world.previous.replace(Some(first));
    world.record(|snapshot| {
        snapshot
            .recommend_by_vibe(&vibe, count)
            .map(|results| names(&results))
    });
}

#[when("I ask for vibe recommendations without a luxury score")]
fn when_vibe_missing_luxury(world: &RecommendWorld) {
    let vibe = VibeRequest::default()
        .with(Trait::Adventure, 5.0)
        .with(Trait::Relax, 1.0)
        .with(Trait::Nature, 5.0)
        .with(Trait::Culture, 1.0);
    world.record(|snapshot| {
        snapshot
            .recommend_by_vibe(&vibe, 3)
            .map(|results| names(&results))
    });
}

#[then("the recommended destinations are \"{expected}\"")]
fn then_names(world: &RecommendWorld, expected: String) {
    assert!(world.error.borrow().is_none(), "unexpected error");
    let expected: Vec<String> = expected
        .trim_matches('"')
        .split(", ")
        .map(str::to_owned)
        .collect();
    assert_eq!(*world.names.borrow(), expected);
}

#[then("both vibe rankings are identical")]
fn then_identical(world: &RecommendWorld) {
    let previous = world.previous.borrow();
    assert_eq!(previous.as_ref(), Some(&*world.names.borrow()));
}

#[then("the request fails because nothing matched")]
fn then_no_matches(world: &RecommendWorld) {
    assert!(matches!(
        *world.error.borrow(),
        Some(RecommendError::NoMatches { .. })
    ));
}

#[then("the request fails because luxury is missing")]
fn then_missing_luxury(world: &RecommendWorld) {
    assert_eq!(
        *world.error.borrow(),
        Some(RecommendError::MissingTrait {
            name: Trait::Luxury
        })
    );
}

#[scenario(path = "tests/features/recommendations.feature", index = 0)]
fn text_skips_matches(world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendations.feature", index = 1)]
fn traits_skip_matches(world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendations.feature", index = 2)]
fn unmatched_query_rejected(world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendations.feature", index = 3)]
fn vibe_is_deterministic(world: RecommendWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/recommendations.feature", index = 4)]
fn vibe_missing_luxury_rejected(world: RecommendWorld) {
    let _ = world;
}
