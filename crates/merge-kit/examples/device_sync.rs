//! Example: converging device state without coordination.

use std::collections::BTreeMap;

use merge_kit::prelude::*;

/// Join keeps the *minimum*: the best latency any device has observed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct BestLatencyMs(f64);

impl Merge for BestLatencyMs {
    fn merge(&mut self, other: &Self) -> bool {
        if other.0 != 0.0 && (self.0 == 0.0 || other.0 < self.0) {
            self.0 = other.0;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Merge)]
struct DeviceState {
    page_views: BTreeMap<String, u64>,
    highest_version_seen: u32,
    tos_accepted: bool,
    best_latency: BestLatencyMs,
}

fn main() {
    // Three devices mutate their local replica while offline.
    let mut phone = DeviceState::default();
    phone.page_views.insert("home".into(), 12);
    phone.highest_version_seen = 3;
    phone.best_latency = BestLatencyMs(80.0);

    let mut tablet = DeviceState::default();
    tablet.page_views.insert("home".into(), 4);
    tablet.page_views.insert("pricing".into(), 9);
    tablet.tos_accepted = true;
    tablet.best_latency = BestLatencyMs(35.0);

    let mut laptop = DeviceState::default();
    laptop.page_views.insert("docs".into(), 7);
    laptop.highest_version_seen = 5;
    laptop.best_latency = BestLatencyMs(120.0);

    println!("phone:  {phone:?}");
    println!("tablet: {tablet:?}");
    println!("laptop: {laptop:?}\n");

    // Sync in two different orders; both converge to the same state.
    let one_order = join(&join(&phone, &tablet), &laptop);
    let another = join(&laptop, &join(&tablet, &phone));
    assert_eq!(one_order, another);

    println!("converged: {one_order:?}\n");

    // The changed flag tells a replica when gossip carries no news.
    let changed = phone.merge(&one_order);
    println!("phone learned something new: {changed}");
    let changed = phone.merge(&tablet);
    println!("merging tablet again changes phone: {changed}");
}
