use crate::{Morph, Pointer, PointerType, Reflect, Shape, Type, ValueMut, ValueRef};

impl<T: Morph> Reflect for Option<T> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn reflect(&self) -> ValueRef<'_> {
        ValueRef::Pointer(self)
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Pointer(self)
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: Morph> Pointer for Option<T> {
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|t| t as &dyn Reflect)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|t| t as &mut dyn Reflect)
    }

    fn pointee_or_zero(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::zero)
    }
}

impl<T: Morph> Morph for Option<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder::<Self>()
            .type_identifier("Option")
            .type_name(|f| write!(f, "Option<{}>", T::SHAPE))
            .ty(Type::Pointer(PointerType {
                pointee: || T::SHAPE,
                nullable: true,
            }))
            .build()
    };

    fn zero() -> Self {
        None
    }
}
