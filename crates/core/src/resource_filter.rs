//! Resource browser filtering.

use serde::{Deserialize, Serialize};

use crate::learning::{LearningItem, ResourceType};
use crate::types::EntityId;

/// Search text plus optional skill and type restrictions. An empty filter
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFilter {
    pub query: String,
    pub skill_id: Option<EntityId>,
    pub resource_type: Option<ResourceType>,
}

impl ResourceFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_skill(mut self, skill_id: impl Into<EntityId>) -> Self {
        self.skill_id = Some(skill_id.into());
        self
    }

    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    /// Case-insensitive substring match on title or description, then the
    /// skill and type restrictions.
    pub fn matches(&self, item: &LearningItem) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = item.title.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query);
        let matches_skill = self
            .skill_id
            .as_deref()
            .map_or(true, |skill| item.belongs_to(skill));
        let matches_type = self.resource_type.map_or(true, |t| item.resource_type == t);
        matches_search && matches_skill && matches_type
    }

    pub fn apply<'a>(&self, items: &'a [LearningItem]) -> Vec<&'a LearningItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Split resources into `(completed, pending)`, preserving order.
pub fn partition_by_completion<'a>(
    items: Vec<&'a LearningItem>,
) -> (Vec<&'a LearningItem>, Vec<&'a LearningItem>) {
    items.into_iter().partition(|item| item.completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::Difficulty;

    fn catalog() -> Vec<LearningItem> {
        vec![
            LearningItem::new("r1", "Advanced JavaScript Concepts", ResourceType::Course, Difficulty::Advanced, &["skill-1"])
                .with_description("Closures, prototypes, and async patterns"),
            LearningItem::new("r2", "Python for Data Science", ResourceType::Course, Difficulty::Advanced, &["skill-2"])
                .with_description("Analysis and visualization"),
            LearningItem::new("r3", "React Performance", ResourceType::Article, Difficulty::Advanced, &["skill-4", "skill-1"])
                .with_description("Make React apps fast")
                .with_completed(true),
        ]
    }

    fn ids(items: &[&LearningItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let items = catalog();
        assert_eq!(ResourceFilter::default().apply(&items).len(), 3);
    }

    #[test]
    fn query_is_case_insensitive_over_title_and_description() {
        let items = catalog();
        let by_title = ResourceFilter::default().with_query("PYTHON").apply(&items);
        assert_eq!(ids(&by_title), vec!["r2"]);
        let by_description = ResourceFilter::default().with_query("closures").apply(&items);
        assert_eq!(ids(&by_description), vec!["r1"]);
    }

    #[test]
    fn skill_filter_uses_membership() {
        let items = catalog();
        let found = ResourceFilter::default().with_skill("skill-1").apply(&items);
        assert_eq!(ids(&found), vec!["r1", "r3"]);
    }

    #[test]
    fn filters_combine() {
        let items = catalog();
        let found = ResourceFilter::default()
            .with_skill("skill-1")
            .with_type(ResourceType::Article)
            .with_query("react")
            .apply(&items);
        assert_eq!(ids(&found), vec!["r3"]);
    }

    #[test]
    fn unknown_skill_matches_nothing() {
        let items = catalog();
        assert!(ResourceFilter::default().with_skill("ghost").apply(&items).is_empty());
    }

    #[test]
    fn partition_splits_completed_and_pending() {
        let items = catalog();
        let (done, pending) = partition_by_completion(ResourceFilter::default().apply(&items));
        assert_eq!(ids(&done), vec!["r3"]);
        assert_eq!(ids(&pending), vec!["r1", "r2"]);
    }
}
