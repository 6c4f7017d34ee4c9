use morph::Morph;
use morph_reflect::{Peek, Poke, ReflectError};
use morph_testhelpers::test;

#[derive(Debug, PartialEq, Morph)]
struct Counter {
    name: String,
    hits: Option<u64>,
    history: Vec<u64>,
}

#[test]
fn poke_assign_leaf() {
    let mut value = 1_u8;
    Poke::new(&mut value).assign(Peek::new(&2_u8))?;
    assert_eq!(value, 2);

    let err = Poke::new(&mut value).assign(Peek::new(&3_i8)).unwrap_err();
    assert_eq!(
        err,
        ReflectError::WrongShape {
            expected: u8::SHAPE,
            actual: i8::SHAPE,
        }
    );
    assert_eq!(value, 2);
}

#[test]
fn poke_assign_refuses_structured_values() {
    let mut counter = Counter::zero();
    let other = Counter::zero();
    let err = Poke::new(&mut counter)
        .assign(Peek::new(&other))
        .unwrap_err();
    assert_eq!(
        err,
        ReflectError::WasNotA {
            expected: "leaf",
            actual: Counter::SHAPE,
        }
    );
}

#[test]
fn poke_struct_fields() {
    let mut counter = Counter::zero();
    let mut poke = Poke::new(&mut counter).into_struct()?;
    assert_eq!(poke.field_count(), 3);

    poke.field_by_name_mut("name")?
        .expect("Counter has a name")
        .assign(Peek::new(&String::from("visits")))?;
    assert!(poke.field_by_name_mut("missing")?.is_none());
    assert!(poke.field_mut(3).is_err());

    assert_eq!(counter.name, "visits");
}

#[test]
fn poke_pointer_allocates_zero_pointee() {
    let mut counter = Counter::zero();
    {
        let mut poke = Poke::new(&mut counter).into_struct()?;
        let hits = poke.field_mut(1)?.into_pointer()?;
        assert!(hits.is_null());
        hits.into_pointee_or_zero().assign(Peek::new(&7_u64))?;
    }
    assert_eq!(counter.hits, Some(7));

    let mut hits = Poke::new(&mut counter.hits).into_pointer()?;
    let pointee = hits.pointee_mut().expect("hits were just set");
    assert_eq!(pointee.shape(), u64::SHAPE);
}

#[test]
fn poke_list_reset() {
    let mut history = vec![1_u64, 2, 3];
    let mut list = Poke::new(&mut history).into_list()?;
    list.reset(2);
    assert_eq!(list.len(), 2);
    list.get_mut(1)
        .expect("list has two items")
        .assign(Peek::new(&9_u64))?;
    assert!(list.get_mut(2).is_none());
    assert_eq!(history, vec![0, 9]);
}

#[test]
fn poke_reborrow_and_peek() {
    let mut value = String::from("before");
    let mut poke = Poke::new(&mut value);
    assert_eq!(poke.as_peek().get::<String>()?, "before");
    poke.reborrow().assign(Peek::new(&String::from("after")))?;
    assert_eq!(poke.as_peek().get::<String>()?, "after");
}
