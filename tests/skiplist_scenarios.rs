use lsm_skiplist::{Config, SkipList, Slice};
use test_log::test;

#[test]
fn skiplist_put_out_of_order() -> lsm_skiplist::Result<()> {
    let mut list = SkipList::new(16)?;

    list.put("b", "2");
    list.put("a", "1");
    list.put("c", "3");

    assert_eq!(3, list.len());
    assert_eq!(Some(&Slice::from("1")), list.get("a"));
    assert_eq!(Some(&Slice::from("2")), list.get("b"));
    assert_eq!(Some(&Slice::from("3")), list.get("c"));

    // Keys are ordered on level 0
    let debug = format!("{list:?}");
    assert!(debug.contains("L0: \"a\" \"b\" \"c\"\n"), "{debug}");

    Ok(())
}

#[test]
fn skiplist_remove_twice() -> lsm_skiplist::Result<()> {
    let mut list = SkipList::new(16)?;

    list.put("b", "2");
    list.put("a", "1");
    list.put("c", "3");

    list.remove("b");
    assert_eq!(2, list.len());
    assert!(!list.contains_key("b"));
    assert!(list.contains_key("a"));
    assert!(list.contains_key("c"));

    let debug = format!("{list:?}");
    assert!(debug.contains("L0: \"a\" \"c\"\n"), "{debug}");

    list.remove("b");
    assert_eq!(2, list.len());
    assert!(list.contains_key("a"));
    assert!(list.contains_key("c"));

    Ok(())
}

#[test]
fn skiplist_overwrite() -> lsm_skiplist::Result<()> {
    let mut list = SkipList::new(16)?;

    list.put("a", "1");
    assert_eq!(1, list.len());

    list.put("a", "X");
    assert_eq!(1, list.len());
    assert_eq!(Some(&Slice::from("X")), list.get("a"));

    Ok(())
}

#[test]
fn skiplist_remove_missing() -> lsm_skiplist::Result<()> {
    let mut list = SkipList::new(16)?;

    list.remove("z");
    assert!(list.is_empty());

    list.put("a", "1");
    list.remove("z");
    assert_eq!(1, list.len());
    assert_eq!(Some(&Slice::from("1")), list.get("a"));

    Ok(())
}

#[test]
fn skiplist_height_bounded() -> lsm_skiplist::Result<()> {
    const MAX_LEVEL: usize = 4;

    let mut list = Config::new(MAX_LEVEL).seed(1).build()?;

    for i in 0..(MAX_LEVEL + 5) {
        list.put(format!("{i}"), "v");
        assert!(list.height() <= MAX_LEVEL);
    }
    assert_eq!(MAX_LEVEL + 5, list.len());

    for i in 0..5_000 {
        list.put(format!("bulk-{i}"), "v");
        assert!(list.height() <= MAX_LEVEL);
    }

    Ok(())
}

#[test]
fn skiplist_height_shrinks() -> lsm_skiplist::Result<()> {
    let mut list = Config::new(8).seed(2).build()?;
    assert_eq!(0, list.height());

    list.put("only", "1");
    assert!(list.height() >= 1);

    list.remove("only");
    assert_eq!(0, list.height());
    assert!(list.is_empty());

    Ok(())
}
