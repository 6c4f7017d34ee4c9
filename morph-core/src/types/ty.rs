use super::Shape;

/// The structural kind of a value, independent of its nominal type.
///
/// This is the classification composition dispatches on: everything that is
/// not a struct, a list or a pointer is assigned directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Assigned as a whole (numbers, strings, opaque leaves)
    Primitive,
    /// Nullable or owning reference to another value (`Option<T>`, `Box<T>`)
    Pointer,
    /// Record with named fields
    Struct,
    /// Ordered sequence (`Vec<T>`)
    Slice,
}

/// The structural type of a shape.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Type {
    /// Built-in primitive.
    Primitive(PrimitiveType),
    /// Leaf with no visible structure, assigned as a whole.
    Opaque,
    /// Struct with fields (named, tuple or unit).
    Struct(StructType),
    /// Growable list of items.
    List(ListType),
    /// Pointer to another value, possibly null.
    Pointer(PointerType),
}

impl Type {
    /// Classifies this type. Anything not explicitly structured is a [`Kind::Primitive`].
    pub const fn kind(&self) -> Kind {
        match self {
            Type::Struct(_) => Kind::Struct,
            Type::List(_) => Kind::Slice,
            Type::Pointer(_) => Kind::Pointer,
            Type::Primitive(_) | Type::Opaque => Kind::Primitive,
        }
    }

    /// Returns true if both types are the same primitive, or both opaque.
    ///
    /// Structured types never match here: they are composed member by member
    /// instead of being assigned.
    pub fn same_leaf(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Primitive(a), Type::Primitive(b)) => a == b,
            (Type::Opaque, Type::Opaque) => true,
            _ => false,
        }
    }
}

/// Displays the kind name used in error messages: `string`, `i32`, `struct`,
/// `slice`, `ptr`, ...
impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Primitive(primitive) => f.write_str(primitive.name()),
            Type::Opaque => f.write_str("opaque"),
            Type::Struct(_) => f.write_str("struct"),
            Type::List(_) => f.write_str("slice"),
            Type::Pointer(_) => f.write_str("ptr"),
        }
    }
}

/// Describes built-in primitives (u32, bool, String, etc.)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// Owned UTF-8 string (`String`)
    String,
    /// `()`
    Unit,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `i128`
    I128,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl PrimitiveType {
    /// Kind name of this primitive
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Char => "char",
            PrimitiveType::String => "string",
            PrimitiveType::Unit => "()",
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::I128 => "i128",
            PrimitiveType::Isize => "isize",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::U128 => "u128",
            PrimitiveType::Usize => "usize",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
        }
    }
}

/// Fields of a struct-like type
#[derive(Clone, Copy, Debug)]
pub struct StructType {
    /// all visible fields, in declaration order
    pub fields: &'static [Field],
}

impl StructType {
    /// Index of the field with the given name. Matching is exact and case-sensitive.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

/// Describes a field in a struct or tuple struct
#[derive(Clone, Copy)]
pub struct Field {
    /// key for the struct field (for tuple structs, this is `"0"`, `"1"`, etc.)
    pub name: &'static str,

    /// shape of the inner type
    pub shape: fn() -> &'static Shape,
}

impl Field {
    /// Returns the shape of the field's type
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

impl core::fmt::Debug for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("shape", &format_args!("{}", self.shape()))
            .finish()
    }
}

/// Describes a list of items (`Vec<T>`)
#[derive(Clone, Copy)]
pub struct ListType {
    /// shape of the items in the list
    pub item: fn() -> &'static Shape,
}

impl ListType {
    /// Returns the shape of the items in the list
    pub fn item(&self) -> &'static Shape {
        (self.item)()
    }
}

impl core::fmt::Debug for ListType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListType")
            .field("item", &format_args!("{}", self.item()))
            .finish()
    }
}

/// Describes a pointer to another value (`Option<T>`, `Box<T>`)
#[derive(Clone, Copy)]
pub struct PointerType {
    /// shape of the pointed-to value
    pub pointee: fn() -> &'static Shape,

    /// whether the pointer can be null (`Option<T>` can, `Box<T>` can't)
    pub nullable: bool,
}

impl PointerType {
    /// Returns the shape of the pointed-to value
    pub fn pointee(&self) -> &'static Shape {
        (self.pointee)()
    }
}

impl core::fmt::Debug for PointerType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointerType")
            .field("pointee", &format_args!("{}", self.pointee()))
            .field("nullable", &self.nullable)
            .finish()
    }
}
