use tracing::{debug, trace};

use crate::model::{Category, ProjectRecord};

/// The category selected in the projects filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Returns the records matching `selection`, keeping their original order.
///
/// Total over its inputs: a category with no records yields an empty vector.
pub fn filter_projects(records: &[ProjectRecord], selection: CategoryFilter) -> Vec<&ProjectRecord> {
    let filtered: Vec<&ProjectRecord> = records
        .iter()
        .filter(|record| selection.matches(&record.category))
        .collect();

    debug!(
        "Filtered {} projects to {} for category {}",
        records.len(),
        filtered.len(),
        selection.label()
    );
    filtered
}

/// Selectable filters: `All`, then each category present in `records` in
/// [`Category::ALL`] order.
pub fn available_filters(records: &[ProjectRecord]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    filters.extend(
        Category::ALL
            .into_iter()
            .filter(|category| records.iter().any(|record| record.category == *category))
            .map(CategoryFilter::Only),
    );
    trace!("Available filters: {:?}", filters);
    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project(id: u32, category: Category) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("Project {}", id),
            description: String::new(),
            image_url: String::new(),
            category,
            technologies: vec![],
            repository_url: "https://github.com".to_string(),
            demo_url: String::new(),
            featured: false,
        }
    }

    fn ids(records: &[&ProjectRecord]) -> Vec<u32> {
        records.iter().map(|record| record.id).collect()
    }

    #[test]
    fn test_filter_selects_category_in_order() {
        let records = vec![
            project(1, Category::WebApp),
            project(2, Category::Mobile),
            project(3, Category::WebApp),
        ];

        assert_eq!(ids(&filter_projects(&records, Category::WebApp.into())), vec![1, 3]);
        assert_eq!(ids(&filter_projects(&records, Category::Mobile.into())), vec![2]);
        assert_eq!(ids(&filter_projects(&records, CategoryFilter::All)), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let records = vec![project(1, Category::WebApp), project(2, Category::Mobile)];

        let result = filter_projects(&records, Category::Design.into());

        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_empty_records() {
        assert!(filter_projects(&[], CategoryFilter::All).is_empty());
        assert!(filter_projects(&[], Category::OpenSource.into()).is_empty());
    }

    #[test]
    fn test_available_filters_follow_category_order() {
        let records = vec![
            project(1, Category::OpenSource),
            project(2, Category::WebApp),
            project(3, Category::OpenSource),
        ];

        let filters = available_filters(&records);

        assert_eq!(
            filters,
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(Category::WebApp),
                CategoryFilter::Only(Category::OpenSource),
            ]
        );
    }

    #[test]
    fn test_available_filters_without_records() {
        assert_eq!(available_filters(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::Only(Category::OpenSource).label(), "Open Source");
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            arb_category().prop_map(CategoryFilter::Only),
        ]
    }

    fn arb_records() -> impl Strategy<Value = Vec<ProjectRecord>> {
        prop::collection::vec(arb_category(), 0..24).prop_map(|categories| {
            categories
                .into_iter()
                .enumerate()
                .map(|(i, category)| project(i as u32 + 1, category))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_filter_keeps_exactly_matching_records(records in arb_records(), selection in arb_filter()) {
            let filtered = filter_projects(&records, selection);
            let expected: Vec<u32> = records
                .iter()
                .filter(|record| match selection {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(category) => record.category == category,
                })
                .map(|record| record.id)
                .collect();

            prop_assert_eq!(ids(&filtered), expected);
        }

        #[test]
        fn prop_filter_all_is_identity(records in arb_records()) {
            let filtered: Vec<ProjectRecord> = filter_projects(&records, CategoryFilter::All)
                .into_iter()
                .cloned()
                .collect();

            prop_assert_eq!(filtered, records);
        }

        #[test]
        fn prop_filter_is_idempotent(records in arb_records(), selection in arb_filter()) {
            let once: Vec<ProjectRecord> = filter_projects(&records, selection)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_projects(&once, selection);

            prop_assert_eq!(ids(&twice), once.iter().map(|record| record.id).collect::<Vec<_>>());
        }

        #[test]
        fn prop_available_filters_are_unique(records in arb_records()) {
            let filters = available_filters(&records);

            prop_assert_eq!(filters[0], CategoryFilter::All);
            for (i, filter) in filters.iter().enumerate() {
                prop_assert!(!filters[i + 1..].contains(filter));
                prop_assert!(!filter_projects(&records, *filter).is_empty() || records.is_empty());
            }
        }
    }
}
