use alloc::boxed::Box;

use crate::{Morph, Pointer, PointerType, Reflect, Shape, Type, ValueMut, ValueRef};

impl<T: Morph> Reflect for Box<T> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn reflect(&self) -> ValueRef<'_> {
        ValueRef::Pointer(self)
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Pointer(self)
    }

    // the zero box points at a zero value
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

// A box always points somewhere: it is never null, and never needs allocating.
impl<T: Morph> Pointer for Box<T> {
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self as &mut dyn Reflect)
    }

    fn pointee_or_zero(&mut self) -> &mut dyn Reflect {
        &mut **self
    }
}

impl<T: Morph> Morph for Box<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder::<Self>()
            .type_identifier("Box")
            .type_name(|f| write!(f, "Box<{}>", T::SHAPE))
            .ty(Type::Pointer(PointerType {
                pointee: || T::SHAPE,
                nullable: false,
            }))
            .build()
    };

    fn zero() -> Self {
        Box::new(T::zero())
    }
}
