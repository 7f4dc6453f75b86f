use bestpath::{Frontier, Objective};

#[test]
fn minimize_pops_smallest_priority_first() {
    let mut f: Frontier<&str> = Frontier::new(Objective::Minimize);
    f.push("mid", 5);
    f.push("low", 1);
    f.push("high", 9);

    assert_eq!(f.pop(), Some(("low", 1)));
    assert_eq!(f.pop(), Some(("mid", 5)));
    assert_eq!(f.pop(), Some(("high", 9)));
    assert_eq!(f.pop(), None, "drained frontier must pop None");
}

#[test]
fn maximize_pops_largest_priority_first() {
    let mut f: Frontier<&str> = Frontier::new(Objective::Maximize);
    f.push("mid", 5);
    f.push("low", 1);
    f.push("high", 9);

    assert_eq!(f.pop(), Some(("high", 9)));
    assert_eq!(f.pop(), Some(("mid", 5)));
    assert_eq!(f.pop(), Some(("low", 1)));
    assert_eq!(f.pop(), None);
}

#[test]
fn equal_priorities_pop_in_insertion_order() {
    // Reproducibility contract: ties break by insertion order, both ways.
    for objective in [Objective::Minimize, Objective::Maximize] {
        let mut f: Frontier<u32> = Frontier::new(objective);
        for state in 0..16u32 {
            f.push(state, 7);
        }
        for expected in 0..16u32 {
            let (state, priority) = f.pop().expect("entry");
            assert_eq!(priority, 7);
            assert_eq!(
                state, expected,
                "tie-break must follow insertion order ({objective:?})"
            );
        }
    }
}

#[test]
fn duplicate_states_are_kept_as_separate_entries() {
    // No decrease-key: re-prioritizing pushes a duplicate, both pop.
    let mut f: Frontier<&str> = Frontier::new(Objective::Minimize);
    f.push("a", 10);
    f.push("a", 3);

    assert_eq!(f.len(), 2);
    assert_eq!(f.pop(), Some(("a", 3)), "fresher, better entry pops first");
    assert_eq!(f.pop(), Some(("a", 10)), "stale entry remains poppable");
    assert!(f.is_empty());
}

#[test]
fn interleaved_pushes_and_pops_keep_global_order() {
    let mut f: Frontier<u32> = Frontier::new(Objective::Minimize);
    f.push(1, 4);
    f.push(2, 2);
    assert_eq!(f.pop(), Some((2, 2)));

    f.push(3, 1);
    f.push(4, 6);
    assert_eq!(f.pop(), Some((3, 1)));
    assert_eq!(f.pop(), Some((1, 4)));
    assert_eq!(f.pop(), Some((4, 6)));
}
