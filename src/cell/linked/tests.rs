use super::*;

#[test]
fn test_new_and_default() {
    let cell = LinkedCell::new(7);
    assert_eq!(cell.get(), 7);
    assert!(!cell.is_linked());
    assert_eq!(cell.link_count(), 1);

    let cell: LinkedCell<String> = LinkedCell::default();
    assert_eq!(cell.get(), "");
    assert!(!cell.is_linked());
}

#[test]
fn test_linked_to_grows_group() {
    let a = LinkedCell::new(1);
    let b = LinkedCell::linked_to(&a);
    assert_eq!(a.link_count(), 2);

    let c = LinkedCell::linked_to(&b);
    assert_eq!(a.link_count(), 3);
    assert!(c.is_linked_with(&a));

    c.set(4);
    assert_eq!(a.get(), 4);
    assert_eq!(b.get(), 4);
}

#[test]
fn test_link_with_leaves_old_group() {
    let a = LinkedCell::new(1);
    let mut b = LinkedCell::linked_to(&a);
    let c = LinkedCell::new(3);

    b.link_with(&c);
    assert_eq!(a.link_count(), 1);
    assert_eq!(c.link_count(), 2);
    assert_eq!(b.get(), 3);
    assert_eq!(a.get(), 1);
}

#[test]
fn test_link_with_existing_member_is_noop() {
    let a = LinkedCell::new(10);
    let mut b = LinkedCell::linked_to(&a);
    b.link_with(&a);
    assert_eq!(a.link_count(), 2);
    assert_eq!(b.get(), 10);
}

#[test]
fn test_remove_links_on_singleton() {
    let mut a = LinkedCell::new(vec![1, 2]);
    a.remove_links();
    assert!(!a.is_linked());
    assert_eq!(a.get(), vec![1, 2]);
}

#[test]
fn test_replace_take_update() {
    let a = LinkedCell::new(vec![1]);
    let b = LinkedCell::linked_to(&a);

    assert_eq!(b.replace(vec![2]), vec![1]);
    a.update(|v| v.push(3));
    assert_eq!(b.with(Vec::len), 2);
    assert_eq!(b.take(), vec![2, 3]);
    assert!(a.get().is_empty());
}

#[test]
fn test_swap_between_groups() {
    let a = LinkedCell::new('a');
    let a2 = LinkedCell::linked_to(&a);
    let b = LinkedCell::new('b');

    a.swap(&b);
    assert_eq!(a2.get(), 'b');
    assert_eq!(b.get(), 'a');
    assert!(a.is_linked_with(&a2));

    // Same group: nothing to swap, and no double borrow.
    a.swap(&a2);
    assert_eq!(a.get(), 'b');
}

#[test]
fn test_into_inner() {
    let a = LinkedCell::new(String::from("shared"));
    let b = LinkedCell::linked_to(&a);
    assert_eq!(b.into_inner(), "shared");
    assert!(!a.is_linked());
    assert_eq!(a.into_inner(), "shared");
}

#[test]
fn test_equality_is_by_value() {
    let a = LinkedCell::new(5);
    let b = LinkedCell::new(5);
    assert_eq!(a, b);
    assert!(!a.is_linked_with(&b));
}

#[test]
fn test_debug_output() {
    let a = LinkedCell::new(3);
    let _b = LinkedCell::linked_to(&a);
    assert_eq!(format!("{a:?}"), "LinkedCell { value: 3, link_count: 2 }");

    a.update(|_| {
        assert_eq!(
            format!("{a:?}"),
            "LinkedCell { value: <borrowed>, link_count: 2 }"
        );
    });
}

#[test]
fn test_slot_freed_by_last_member() {
    use std::rc::Rc;

    let marker = Rc::new(());
    let a = LinkedCell::new(Rc::clone(&marker));
    let mut b = LinkedCell::linked_to(&a);
    assert_eq!(Rc::strong_count(&marker), 2);

    // Moving `b` away keeps the slot alive through `a`.
    b.link_with(&LinkedCell::new(Rc::new(())));
    assert_eq!(Rc::strong_count(&marker), 2);

    drop(a);
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn test_relink_frees_singleton_slot() {
    use std::rc::Rc;

    let marker = Rc::new(());
    let mut a = LinkedCell::new(Rc::clone(&marker));
    let b = LinkedCell::new(Rc::new(()));
    assert_eq!(Rc::strong_count(&marker), 2);

    a.link_with(&b);
    assert_eq!(Rc::strong_count(&marker), 1);
    assert!(a.is_linked_with(&b));
}

#[test]
fn test_remove_links_keeps_shared_slot_alive() {
    use std::rc::Rc;

    let marker = Rc::new(());
    let a = LinkedCell::new(Rc::clone(&marker));
    let mut b = LinkedCell::linked_to(&a);
    assert_eq!(Rc::strong_count(&marker), 2);

    // `b` gets its own slot holding a clone; the old slot stays with `a`.
    b.remove_links();
    assert_eq!(Rc::strong_count(&marker), 3);

    drop(a);
    assert_eq!(Rc::strong_count(&marker), 2);

    drop(b);
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
#[should_panic(expected = "already mutably borrowed")]
fn test_get_inside_update_panics() {
    let a = LinkedCell::new(1);
    let b = LinkedCell::linked_to(&a);
    a.update(|_| b.get());
}

#[test]
#[should_panic(expected = "already borrowed")]
fn test_swap_inside_with_panics() {
    let a = LinkedCell::new(1);
    let b = LinkedCell::new(2);
    a.with(|_| a.swap(&b));
}
