//! Boolean-algebra laws of the combinators, checked row by row.


use std::sync::Arc;
use std::thread;

use rowsel::{
    contains, equals, starts_with, Always, And, ColumnAccessor, Not, Or, Predicate, PredicateExt,
    RowIndex, Spreadsheet,
};
use test_data_gen::{generate_people, selected_rows};

/// A handful of leaves over the generated sheet, each built fresh per call
/// since combinators take ownership.
fn leaves(sheet: &Spreadsheet) -> Vec<Box<dyn Predicate>> {
    vec![
        contains(sheet, "Name", "Smith").unwrap().boxed(),
        equals(sheet, "City", "Boston").unwrap().boxed(),
        starts_with(sheet, "Age", "2").unwrap().boxed(),
        contains(sheet, "City", "ton").unwrap().boxed(),
        Always(true).boxed(),
        Always(false).boxed(),
    ]
}

fn eval(p: &dyn Predicate, sheet: &Spreadsheet, row: RowIndex) -> bool {
    p.matches(sheet, row).expect("row in range")
}

#[test]
fn test_not_negates() {
    let sheet = generate_people(60);
    for (i, p) in leaves(&sheet).into_iter().enumerate() {
        let q = leaves(&sheet).swap_remove(i);
        let not_q = Not::new(q);
        for row in RowIndex::range(sheet.num_rows()) {
            assert_eq!(eval(&not_q, &sheet, row), !eval(p.as_ref(), &sheet, row));
        }
    }
}

#[test]
fn test_double_negation() {
    let sheet = generate_people(60);
    for (i, p) in leaves(&sheet).into_iter().enumerate() {
        let q = leaves(&sheet).swap_remove(i).not().not();
        for row in RowIndex::range(sheet.num_rows()) {
            assert_eq!(eval(&q, &sheet, row), eval(p.as_ref(), &sheet, row));
        }
    }
}

#[test]
fn test_and_or_match_boolean_operators() {
    let sheet = generate_people(60);
    let n = leaves(&sheet).len();
    for i in 0..n {
        for j in 0..n {
            let a = leaves(&sheet).swap_remove(i);
            let b = leaves(&sheet).swap_remove(j);
            let and = And::new(leaves(&sheet).swap_remove(i), leaves(&sheet).swap_remove(j));
            let or = Or::new(leaves(&sheet).swap_remove(i), leaves(&sheet).swap_remove(j));
            let and_rev = And::new(leaves(&sheet).swap_remove(j), leaves(&sheet).swap_remove(i));
            let or_rev = Or::new(leaves(&sheet).swap_remove(j), leaves(&sheet).swap_remove(i));

            for row in RowIndex::range(sheet.num_rows()) {
                let (x, y) = (eval(a.as_ref(), &sheet, row), eval(b.as_ref(), &sheet, row));
                assert_eq!(eval(&and, &sheet, row), x && y);
                assert_eq!(eval(&or, &sheet, row), x || y);
                // Commutative in result.
                assert_eq!(eval(&and_rev, &sheet, row), x && y);
                assert_eq!(eval(&or_rev, &sheet, row), x || y);
            }
        }
    }
}

#[test]
fn test_de_morgan() {
    let sheet = generate_people(60);
    let lhs = And::new(
        contains(&sheet, "Name", "Smith").unwrap(),
        equals(&sheet, "City", "Boston").unwrap(),
    )
    .not();
    let rhs = Or::new(
        contains(&sheet, "Name", "Smith").unwrap().not(),
        equals(&sheet, "City", "Boston").unwrap().not(),
    );
    assert_eq!(
        selected_rows(&lhs, &sheet).unwrap(),
        selected_rows(&rhs, &sheet).unwrap()
    );
}

#[test]
fn test_tree_is_reusable_and_shareable_across_threads() {
    let sheet = Arc::new(generate_people(500));
    let tree: Arc<dyn Predicate> = Arc::new(
        contains(&*sheet, "Name", "Smith")
            .unwrap()
            .and(equals(&*sheet, "City", "Denver").unwrap().not()),
    );
    let expected = selected_rows(&*tree, &*sheet).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sheet = Arc::clone(&sheet);
            let tree = Arc::clone(&tree);
            thread::spawn(move || selected_rows(&*tree, &*sheet).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
    // Evaluating again on this thread gives the same answer.
    assert_eq!(selected_rows(&*tree, &*sheet).unwrap(), expected);
}
