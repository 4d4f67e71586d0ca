use motormart::{CatalogContext, RenderInstruction, SearchQuery, SortKey, parse_collection};

const FLEET: &str = r#"[
    {"id": "1", "make": "Mazda", "price": 5000, "year": 2015, "dateAdded": "2024-01-02"},
    {"id": "2", "make": "Mazda", "price": 5000, "year": 2015, "dateAdded": "2024-01-02"},
    {"id": "3", "make": "Mini", "price": 3000, "year": 2018},
    {"id": "4", "make": "Mazda", "price": "n/a", "year": 2015, "dateAdded": "not a date"},
    {"id": "5", "make": "Mini", "price": 3000, "year": 2011, "dateAdded": "2023-06-30"}
]"#;

fn loaded() -> CatalogContext {
    let records = parse_collection(FLEET.as_bytes()).expect("fleet parses");
    CatalogContext::default().on_load_complete(records).0
}

#[test]
fn repeated_sort_changes_are_idempotent() {
    for key in SortKey::all() {
        let (ctx, first) = loaded().on_sort_change(Some(key));
        let (ctx, second) = ctx.on_sort_change(Some(key));
        let (_, third) = ctx.on_sort_change(Some(key));
        assert_eq!(first, second, "{key:?}");
        assert_eq!(second, third, "{key:?}");
    }
}

#[test]
fn ties_keep_source_order() {
    let (_, shown) = loaded().on_sort_change(Some(SortKey::Price));
    assert_eq!(shown, RenderInstruction::Listing(vec![3, 2, 4, 0, 1]));

    let (_, shown) = loaded().on_sort_change(Some(SortKey::Year));
    assert_eq!(shown, RenderInstruction::Listing(vec![2, 0, 1, 3, 4]));

    let (_, shown) = loaded().on_sort_change(Some(SortKey::Date));
    assert_eq!(shown, RenderInstruction::Listing(vec![0, 1, 4, 2, 3]));
}

#[test]
fn identical_command_sequences_render_identical_markup() {
    let run = || {
        let (ctx, _) = loaded().on_search_submit(&SearchQuery::default().with_make("ma"));
        let (ctx, shown) = ctx.on_sort_change(Some(SortKey::Date));
        ctx.render_html(&shown)
    };
    assert_eq!(run(), run());
}

#[test]
fn clearing_the_sort_restores_filter_order() {
    let (ctx, _) = loaded().on_search_submit(&SearchQuery::default().with_make("mini"));
    let (ctx, sorted) = ctx.on_sort_change(Some(SortKey::Date));
    assert_eq!(sorted, RenderInstruction::Listing(vec![4, 2]));
    let (_, unsorted) = ctx.on_sort_change(SortKey::parse(""));
    assert_eq!(unsorted, RenderInstruction::Listing(vec![2, 4]));
}

mod properties {
    use super::*;
    use motormart::{Projection, Scalar, SearchForm, VehicleRecord};
    use proptest::prelude::*;

    fn arb_fleet() -> impl Strategy<Value = Vec<VehicleRecord>> {
        proptest::collection::vec(
            (
                "[A-Za-z<>&\"' ]{0,10}",
                proptest::option::of(0u32..50_000),
                proptest::option::of(1990u32..2025),
            ),
            0..16,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (make, price, year))| VehicleRecord {
                    id: format!("p{i}"),
                    make: Some(make),
                    price: price.map(|p| Scalar::Number(f64::from(p))),
                    year: year.map(|y| Scalar::Number(f64::from(y))),
                    ..Default::default()
                })
                .collect()
        })
    }

    proptest! {
        /// Property: a blank search keeps the full collection in order.
        #[test]
        fn blank_search_is_identity(fleet in arb_fleet()) {
            let len = fleet.len();
            let (ctx, _) = CatalogContext::default().on_load_complete(fleet);
            let form = SearchForm {
                make: Some(String::new()),
                model: Some("  ".into()),
                year: Some(String::new()),
                enginesize: Some(String::new()),
            };
            let (_, shown) = ctx.on_search_submit(&SearchQuery::from_form(&form));
            prop_assert_eq!(shown, RenderInstruction::Listing((0..len).collect()));
        }

        /// Property: rendered cards never carry raw markup from record text.
        #[test]
        fn rendered_headings_are_escaped(fleet in arb_fleet()) {
            let (ctx, shown) = CatalogContext::default().on_load_complete(fleet);
            for projection in ctx.render(&shown) {
                if let Projection::Card(card) = projection {
                    prop_assert!(!card.heading.contains('<'));
                    prop_assert!(!card.heading.contains('"'));
                    prop_assert!(!card.heading.contains('\''));
                }
            }
        }
    }
}
