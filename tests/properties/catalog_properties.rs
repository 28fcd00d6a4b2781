use std::collections::HashSet;

use proptest::prelude::*;

use toolkit::catalog::{Catalog, load};

use crate::strategies::catalog_json;

fn uids(catalog: &Catalog) -> Vec<String> {
    catalog.tools().map(|t| t.uid.clone()).collect()
}

proptest! {
    #[test]
    fn uids_are_unique(source in catalog_json()) {
        let catalog = load(source.as_bytes()).unwrap();
        let all = uids(&catalog);
        let distinct: HashSet<_> = all.iter().collect();
        prop_assert_eq!(distinct.len(), all.len());
        prop_assert_eq!(all.len(), catalog.tool_count());
    }

    #[test]
    fn uids_are_stable_across_reloads(source in catalog_json()) {
        let first = load(source.as_bytes()).unwrap();
        let second = load(source.as_bytes()).unwrap();
        prop_assert_eq!(uids(&first), uids(&second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn uid_encodes_position(source in catalog_json()) {
        let catalog = load(source.as_bytes()).unwrap();
        for (ci, category) in catalog.categories().iter().enumerate() {
            for (ti, tool) in category.tools.iter().enumerate() {
                prop_assert_eq!(&tool.uid, &format!("{ci}_{ti}"));
                prop_assert_eq!(&tool.category, &category.name);
            }
        }
    }
}
