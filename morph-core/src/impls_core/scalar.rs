use crate::macros::impl_primitives;

impl_primitives! {
    bool => Bool, false;
    char => Char, '\0';
    () => Unit, ();
    i8 => I8, 0;
    i16 => I16, 0;
    i32 => I32, 0;
    i64 => I64, 0;
    i128 => I128, 0;
    isize => Isize, 0;
    u8 => U8, 0;
    u16 => U16, 0;
    u32 => U32, 0;
    u64 => U64, 0;
    u128 => U128, 0;
    usize => Usize, 0;
    f32 => F32, 0.0;
    f64 => F64, 0.0;
}
