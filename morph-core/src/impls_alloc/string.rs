use alloc::string::String;

use crate::{PrimitiveType, Type, macros::impl_leaf};

impl_leaf!(
    String,
    "String",
    Type::Primitive(PrimitiveType::String),
    String::new()
);
