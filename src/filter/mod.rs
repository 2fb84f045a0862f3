//! Decides which markers are visible for a given search text and network.
//!
//! Every call to [`apply`] is a full pass over the bindings. The datasets this
//! serves hold hundreds of records, so there's no index.

use crate::foodbanks::models::FoodBankRecord;
use crate::map::models::MarkerId;
use crate::map::renderer::MapRenderer;
use crate::map::surface::MapSurface;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// The network selection that matches every record. Compared
/// case-sensitively.
pub const ALL_NETWORKS: &str = "All";

#[derive(Clone, Debug, PartialEq)]
pub struct FilterCriteria {
    search: String,
    network: String,
}

impl FilterCriteria {
    pub fn new(search: &str, network: &str) -> Self {
        Self {
            search: search.trim().to_lowercase(),
            network: network.to_string(),
        }
    }

    pub fn network_matches(&self, record: &FoodBankRecord) -> bool {
        self.network == ALL_NETWORKS
            || (!record.network.is_empty()
                && record.network.to_lowercase() == self.network.to_lowercase())
    }

    pub fn search_matches(&self, record: &FoodBankRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        format!(
            "{} {} {} {}",
            record.name, record.location_name, record.address, record.postcode
        )
        .to_lowercase()
        .contains(&self.search)
    }

    pub fn matches(&self, record: &FoodBankRecord) -> bool {
        self.network_matches(record) && self.search_matches(record)
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new("", ALL_NETWORKS)
    }
}

/// Markers whose attachment changed during one pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub attached: Vec<MarkerId>,
    pub detached: Vec<MarkerId>,
    pub visible: usize,
}

impl FilterOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.attached.is_empty() && self.detached.is_empty()
    }
}

pub fn apply<S: MapSurface>(
    renderer: &mut MapRenderer<S>,
    criteria: &FilterCriteria,
) -> FilterOutcome {
    let decisions: Vec<(MarkerId, bool)> = renderer
        .bindings()
        .iter()
        .map(|binding| (binding.id, criteria.matches(&binding.record)))
        .collect();

    let mut outcome = FilterOutcome::default();
    for (id, visible) in decisions {
        if visible {
            outcome.visible += 1;
            if renderer.show(id) {
                outcome.attached.push(id);
            }
        } else if renderer.hide(id) {
            outcome.detached.push(id);
        }
    }
    outcome
}
