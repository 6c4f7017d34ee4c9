use morph::Morph;
use morph_reflect::{FieldError, Peek, ReflectError};
use morph_testhelpers::test;
use owo_colors::OwoColorize;

#[derive(Debug, Morph)]
struct Role {
    permission: String,
}

#[derive(Debug, Morph)]
struct User {
    id: i64,
    name: String,
    roles: Option<Vec<Role>>,
}

fn johndoe() -> User {
    User {
        id: 1,
        name: "johndoe".into(),
        roles: Some(vec![
            Role {
                permission: "create".into(),
            },
            Role {
                permission: "read".into(),
            },
        ]),
    }
}

#[test]
fn peek_leaf() {
    let value = 42_u16;
    let peek = Peek::new(&value);
    assert_eq!(peek.shape(), u16::SHAPE);
    assert_eq!(*peek.get::<u16>()?, 42);
    assert_eq!(
        peek.get::<u32>().unwrap_err(),
        ReflectError::WrongShape {
            expected: u32::SHAPE,
            actual: u16::SHAPE,
        }
    );
}

#[test]
fn peek_struct_fields() {
    let user = johndoe();
    let peek = Peek::new(&user);
    eprintln!("peek shape: {}", peek.shape().yellow());

    let peek = peek.into_struct()?;
    assert_eq!(peek.field_count(), 3);
    assert_eq!(*peek.field(0)?.get::<i64>()?, 1);
    assert_eq!(
        peek.field(3).unwrap_err(),
        FieldError::IndexOutOfBounds { index: 3, len: 3 }
    );

    let name = peek.field_by_name("name")?.expect("User has a name");
    assert_eq!(name.get::<String>()?, "johndoe");
    assert!(peek.field_by_name("Name")?.is_none());

    let names: Vec<_> = peek.fields().map(|(field, _)| field.name).collect();
    assert_eq!(names, ["id", "name", "roles"]);
}

#[test]
fn peek_through_pointer_and_list() {
    let user = johndoe();
    let roles = Peek::new(&user)
        .into_struct()?
        .field_by_name("roles")?
        .expect("User has roles");

    let roles = roles.into_pointer()?;
    assert!(!roles.is_null());
    assert!(roles.nullable());

    let list = roles.pointee().expect("roles are set").into_list()?;
    assert_eq!(list.len(), 2);
    assert_eq!(list.item_shape(), Role::SHAPE);
    let permissions = list
        .iter()
        .map(|role| -> eyre::Result<&str> {
            let role = role.into_struct()?;
            let permission = role.field(0)?.get::<String>()?;
            Ok(permission.as_str())
        })
        .collect::<eyre::Result<Vec<_>>>()?;
    assert_eq!(permissions, ["create", "read"]);
    assert!(list.get(2).is_none());
}

#[test]
fn peek_null_pointer() {
    let user = User {
        roles: None,
        ..johndoe()
    };
    let roles = Peek::new(&user.roles).into_pointer()?;
    assert!(roles.is_null());
    assert!(roles.pointee().is_none());
    assert_eq!(format!("{}", roles.pointee_shape()), "Vec<Role>");
}

#[test]
fn peek_narrowing_fails_on_other_kinds() {
    let value = String::from("not a struct");
    let peek = Peek::new(&value);

    let err = peek.into_struct().unwrap_err();
    assert_eq!(
        err,
        ReflectError::WasNotA {
            expected: "struct",
            actual: String::SHAPE,
        }
    );
    assert!(peek.into_list().is_err());
    assert!(peek.into_pointer().is_err());
    assert!(peek.get::<String>().is_ok());
}

#[test]
fn peek_from_dyn() {
    let user = johndoe();
    let value: &dyn morph::Reflect = &user;
    let peek = Peek::from_dyn(value);
    assert_eq!(peek.shape(), User::SHAPE);
    assert_eq!(peek.kind(), morph::Kind::Struct);
}

#[test]
fn peek_is_zero() {
    assert!(!Peek::new(&johndoe()).is_zero());
    assert!(Peek::new(&User::zero()).is_zero());

    let user = User {
        id: 0,
        name: "johndoe".into(),
        roles: None,
    };
    assert!(!Peek::new(&user).is_zero());

    let peek = Peek::new(&user).into_struct()?;
    assert!(peek.field_by_name("id")?.expect("has an id").is_zero());
    assert!(!peek.field_by_name("name")?.expect("has a name").is_zero());
    assert!(peek.field_by_name("roles")?.expect("has roles").is_zero());
}
