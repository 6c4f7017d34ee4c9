/// Implements [`crate::Reflect`] and [`crate::Morph`] for a leaf type, which is
/// assigned as a whole.
macro_rules! impl_leaf {
    ($ty:ty, $type_identifier:expr, $type:expr, $zero:expr) => {
        impl crate::Reflect for $ty {
            #[inline]
            fn shape(&self) -> &'static crate::Shape {
                <Self as crate::Morph>::SHAPE
            }

            #[inline]
            fn reflect(&self) -> crate::ValueRef<'_> {
                crate::ValueRef::Scalar(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> crate::ValueMut<'_> {
                crate::ValueMut::Scalar(self)
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == $zero
            }
        }

        impl crate::Morph for $ty {
            const SHAPE: &'static crate::Shape = &const {
                crate::Shape::builder::<$ty>()
                    .type_identifier($type_identifier)
                    .ty($type)
                    .build()
            };

            #[inline]
            fn zero() -> Self {
                $zero
            }
        }
    };
}

/// Implements [`crate::Reflect`] and [`crate::Morph`] for built-in primitives.
///
/// ```ignore
/// impl_primitives! {
///     u32 => U32, 0;
///     bool => Bool, false;
/// }
/// ```
macro_rules! impl_primitives {
    ($($ty:ty => $primitive:ident, $zero:expr;)*) => {
        $(
            crate::macros::impl_leaf!(
                $ty,
                stringify!($ty),
                crate::Type::Primitive(crate::PrimitiveType::$primitive),
                $zero
            );
        )*
    };
}

pub(crate) use impl_leaf;
pub(crate) use impl_primitives;
