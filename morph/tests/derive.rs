use morph::{Kind, Morph, Peek, Poke, Reflect, Type, ValueRef};
use morph_testhelpers::test;

#[test]
fn unit_struct() {
    #[derive(Debug, Morph)]
    struct UnitStruct;

    let shape = UnitStruct::SHAPE;
    assert_eq!(format!("{shape}"), "UnitStruct");
    assert_eq!(shape.kind(), Kind::Struct);

    let Type::Struct(ty) = shape.ty else {
        panic!("Expected struct innards");
    };
    assert_eq!(ty.fields.len(), 0);
}

#[test]
fn simple_struct() {
    #[derive(Debug, Morph)]
    struct Blah {
        foo: u32,
        bar: String,
    }

    let shape = Blah::SHAPE;
    assert_eq!(format!("{shape}"), "Blah");

    let Type::Struct(ty) = shape.ty else {
        panic!("Expected struct innards");
    };
    assert_eq!(ty.fields.len(), 2);
    assert_eq!(ty.fields[0].name, "foo");
    assert_eq!(ty.fields[0].shape(), u32::SHAPE);
    assert_eq!(ty.fields[1].name, "bar");
    assert_eq!(ty.fields[1].shape(), String::SHAPE);
}

#[test]
fn struct_with_nested_fields() {
    #[derive(Debug, Morph)]
    struct Role {
        permission: String,
    }

    #[derive(Debug, Morph)]
    pub struct User {
        pub id: i64,
        pub(crate) roles: Option<Vec<Role>>,
        scopes: Vec<Box<Role>>,
    }

    let Type::Struct(ty) = User::SHAPE.ty else {
        panic!("Expected struct innards");
    };
    assert_eq!(
        format!("{}", ty.fields[1].shape()),
        "Option<Vec<Role>>"
    );
    assert_eq!(format!("{}", ty.fields[2].shape()), "Vec<Box<Role>>");
}

#[test]
fn tuple_struct_fields_are_named_by_position() {
    #[derive(Debug, Morph, PartialEq)]
    struct Pair(u8, String);

    let Type::Struct(ty) = Pair::SHAPE.ty else {
        panic!("Expected struct innards");
    };
    let names: Vec<_> = ty.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["0", "1"]);

    let pair = Pair(3, "three".into());
    let peek = Peek::new(&pair).into_struct()?;
    assert_eq!(*peek.field_by_name("1")?.unwrap().get::<String>()?, "three");
}

#[test]
fn raw_identifiers_are_matched_without_prefix() {
    #[derive(Debug, Morph)]
    struct Keyword {
        r#type: String,
    }

    let Type::Struct(ty) = Keyword::SHAPE.ty else {
        panic!("Expected struct innards");
    };
    assert_eq!(ty.fields[0].name, "type");
}

#[test]
fn zero_values_recurse_into_fields() {
    #[derive(Debug, Morph, PartialEq)]
    struct Prop {
        prop: String,
        name: String,
    }

    #[derive(Debug, Morph, PartialEq)]
    struct Scope {
        name: String,
        is_active: i32,
        prop: Option<Prop>,
        boxed: Box<Prop>,
        #[morph(skip)]
        secret: Vec<u8>,
    }

    assert_eq!(
        Scope::zero(),
        Scope {
            name: String::new(),
            is_active: 0,
            prop: None,
            boxed: Box::new(Prop {
                prop: String::new(),
                name: String::new(),
            }),
            secret: Vec::new(),
        }
    );
}

#[test]
fn skipped_fields_are_invisible() {
    #[derive(Debug, Morph)]
    struct Session {
        user: String,
        #[morph(skip)]
        token: String,
        expires: u64,
    }

    let Type::Struct(ty) = Session::SHAPE.ty else {
        panic!("Expected struct innards");
    };
    let names: Vec<_> = ty.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["user", "expires"]);

    let mut session = Session {
        user: "johndoe".into(),
        token: "hunter2".into(),
        expires: 60,
    };

    let peek = Peek::new(&session).into_struct()?;
    assert_eq!(*peek.field(1)?.get::<u64>()?, 60);
    assert!(peek.field_by_name("token")?.is_none());

    let mut poke = Poke::new(&mut session).into_struct()?;
    poke.field_mut(1)?.assign(Peek::new(&120_u64))?;
    assert_eq!(session.expires, 120);
    assert_eq!(session.token, "hunter2");
}

#[test]
fn opaque_types_are_leaves() {
    #[derive(Debug, Morph, Clone, Default, PartialEq)]
    #[morph(opaque)]
    enum Level {
        #[default]
        Low,
        High,
    }

    #[derive(Debug, Morph, Clone, Default, PartialEq)]
    #[morph(opaque)]
    struct Checksum {
        bytes: [u8; 4],
    }

    assert_eq!(Level::SHAPE.kind(), Kind::Primitive);
    assert_eq!(Level::SHAPE.ty.to_string(), "opaque");
    assert_eq!(Level::zero(), Level::Low);
    assert!(matches!(Level::High.reflect(), ValueRef::Scalar(_)));

    assert_eq!(Checksum::SHAPE.kind(), Kind::Primitive);
    assert_eq!(Checksum::zero(), Checksum { bytes: [0; 4] });
}

#[test]
fn derived_values_reflect_as_structs() {
    #[derive(Debug, Morph)]
    struct Point {
        x: i32,
        y: i32,
    }

    let point = Point { x: 1, y: 2 };
    let value: &dyn Reflect = &point;
    assert_eq!(value.shape(), Point::SHAPE);

    let ValueRef::Struct(fields) = value.reflect() else {
        panic!("Expected a struct view");
    };
    assert_eq!(fields.field(1).map(|f| f.shape()), Some(i32::SHAPE));
    assert!(fields.field(2).is_none());
}

#[test]
fn derived_values_know_when_they_are_zero() {
    #[derive(Debug, Morph, Clone, Default, PartialEq)]
    #[morph(opaque)]
    enum Level {
        #[default]
        Low,
        High,
    }

    #[derive(Debug, Morph)]
    struct Session {
        user: String,
        level: Level,
        roles: Option<Vec<String>>,
        #[morph(skip)]
        token: String,
    }

    assert!(Level::Low.is_zero());
    assert!(!Level::High.is_zero());

    let mut session = Session::zero();
    assert!(session.is_zero());

    // skipped fields don't count
    session.token = "hunter2".into();
    assert!(session.is_zero());

    session.roles = Some(Vec::new());
    assert!(!session.is_zero());

    let session = Session {
        user: String::new(),
        level: Level::High,
        roles: None,
        token: String::new(),
    };
    assert!(!session.is_zero());

    #[derive(Debug, Morph)]
    struct Marker;
    assert!(Marker.is_zero());
}
