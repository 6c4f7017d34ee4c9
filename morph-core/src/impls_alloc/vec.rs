use alloc::vec::Vec;

use crate::{List, ListType, Morph, Reflect, Shape, Type, ValueMut, ValueRef};

impl<T: Morph> Reflect for Vec<T> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn reflect(&self) -> ValueRef<'_> {
        ValueRef::List(self)
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::List(self)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Morph> List for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|item| item as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice().get_mut(index).map(|item| item as &mut dyn Reflect)
    }

    fn reset(&mut self, len: usize) {
        if len == 0 {
            *self = Vec::new();
        } else {
            *self = (0..len).map(|_| T::zero()).collect();
        }
    }
}

impl<T: Morph> Morph for Vec<T> {
    const SHAPE: &'static Shape = &const {
        Shape::builder::<Self>()
            .type_identifier("Vec")
            .type_name(|f| write!(f, "Vec<{}>", T::SHAPE))
            .ty(Type::List(ListType { item: || T::SHAPE }))
            .build()
    };

    fn zero() -> Self {
        Vec::new()
    }
}
