//! Composing a source value into a destination value of a possibly different
//! type, by structure and field name.

use morph_core::{Kind, Morph, Reflect};
use owo_colors::OwoColorize;

use crate::{FieldError, Peek, Poke, ReflectError};

mod error;
pub use error::*;

/// Composes `src` into `dst`.
///
/// Destination fields with no same-named source field keep their current
/// value. See [`set`] for the rules applied at every level.
pub fn compose<D: Morph, S: Morph>(dst: &mut D, src: &S) -> Result<(), ComposeError> {
    set(Poke::new(dst), Peek::new(src))
}

/// Like [`compose`], for type-erased values.
pub fn compose_dyn(dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), ComposeError> {
    set(Poke::from_dyn(dst), Peek::from_dyn(src))
}

/// Composes `src` into the zero value of `D`, and returns it.
pub fn compose_new<D: Morph, S: Morph>(src: &S) -> Result<D, ComposeError> {
    let mut dst = D::zero();
    compose(&mut dst, src)?;
    Ok(dst)
}

/// Sets `dst` from `src`, recursing into structured values.
///
/// Both sides must be of the same [`Kind`]. Structs, lists and pointers are
/// handed to [`set_struct`], [`set_slice`] and [`set_pointer`]; leaves are
/// assigned directly, provided they are the very same type.
pub fn set(dst: Poke<'_>, src: Peek<'_>) -> Result<(), ComposeError> {
    trace!("set {} <- {}", dst.shape().blue(), src.shape().yellow());

    if dst.kind() != src.kind() {
        return Err(ComposeError::KindMismatch {
            dst: dst.shape(),
            src: src.shape(),
        });
    }

    match src.kind() {
        Kind::Struct => set_struct(dst, src),
        Kind::Slice => set_slice(dst, src),
        Kind::Pointer => set_pointer(dst, src),
        Kind::Primitive => {
            let (dst_shape, src_shape) = (dst.shape(), src.shape());
            // opaque leaves of different types share a kind but not a type
            if !dst_shape.ty.same_leaf(&src_shape.ty) || dst.assign(src).is_err() {
                return Err(ComposeError::KindMismatch {
                    dst: dst_shape,
                    src: src_shape,
                });
            }
            Ok(())
        }
    }
}

/// Sets every field of the `dst` struct from the `src` field of the same name.
///
/// Fields missing from `src` are left untouched, and so is all of `dst` when
/// `src` is the zero value of its type.
pub fn set_struct(dst: Poke<'_>, src: Peek<'_>) -> Result<(), ComposeError> {
    let (dst_shape, src_shape) = (dst.shape(), src.shape());
    if dst.kind() != Kind::Struct || src.kind() != Kind::Struct {
        return Err(ComposeError::NotAStruct {
            dst: dst_shape,
            src: src_shape,
        });
    }

    if src.is_zero() {
        trace!("{} is empty, leaving {} as is", src_shape.yellow(), dst_shape.blue());
        return Ok(());
    }

    let broken = |error: ReflectError| ComposeError::Reflect {
        dst: dst_shape,
        src: src_shape,
        error,
    };
    let mut dst = dst.into_struct().map_err(broken)?;
    let src = src.into_struct().map_err(broken)?;

    let fields = dst.ty().fields;
    for (index, field) in fields.iter().enumerate() {
        let src_field = match src.field_by_name(field.name) {
            Ok(Some(src_field)) => src_field,
            Ok(None) => {
                trace!(
                    "{}::{} has no source counterpart in {}, skipping",
                    dst_shape.blue(),
                    field.name.cyan(),
                    src_shape.yellow()
                );
                continue;
            }
            Err(field_error) => {
                return Err(broken(ReflectError::FieldError {
                    shape: src_shape,
                    field_error,
                }));
            }
        };
        let dst_field = dst.field_mut(index).map_err(|field_error| {
            broken(ReflectError::FieldError {
                shape: dst_shape,
                field_error,
            })
        })?;
        set(dst_field, src_field)?;
    }
    Ok(())
}

/// Replaces the `dst` list with one item per `src` item, each set from the
/// `src` item at the same index.
///
/// The previous items of `dst` are dropped, not merged into. An empty `src`
/// leaves `dst` empty.
pub fn set_slice(dst: Poke<'_>, src: Peek<'_>) -> Result<(), ComposeError> {
    let (dst_shape, src_shape) = (dst.shape(), src.shape());
    if dst.kind() != Kind::Slice || src.kind() != Kind::Slice {
        return Err(ComposeError::NotASlice {
            dst: dst_shape,
            src: src_shape,
        });
    }

    let broken = |error: ReflectError| ComposeError::Reflect {
        dst: dst_shape,
        src: src_shape,
        error,
    };
    let mut dst = dst.into_list().map_err(broken)?;
    let src = src.into_list().map_err(broken)?;

    let len = src.len();
    trace!("resetting {} from {} to {} items", dst_shape.blue(), dst.len(), len);
    dst.reset(len);

    for (index, src_item) in src.iter().enumerate() {
        let dst_item = dst.get_mut(index).ok_or_else(|| {
            broken(ReflectError::FieldError {
                shape: dst_shape,
                field_error: FieldError::IndexOutOfBounds { index, len },
            })
        })?;
        set(dst_item, src_item)?;
    }
    Ok(())
}

/// Sets the pointee of `dst` from the pointee of `src`.
///
/// A null `src` leaves `dst` as it is, null or not. Otherwise a null `dst` is
/// first pointed at a zero value of its pointee type.
pub fn set_pointer(dst: Poke<'_>, src: Peek<'_>) -> Result<(), ComposeError> {
    let (dst_shape, src_shape) = (dst.shape(), src.shape());
    if dst.kind() != Kind::Pointer || src.kind() != Kind::Pointer {
        return Err(ComposeError::NotAPointer {
            dst: dst_shape,
            src: src_shape,
        });
    }

    let broken = |error: ReflectError| ComposeError::Reflect {
        dst: dst_shape,
        src: src_shape,
        error,
    };
    let dst = dst.into_pointer().map_err(broken)?;
    let src = src.into_pointer().map_err(broken)?;

    let Some(src_pointee) = src.pointee() else {
        trace!("{} is null, leaving {} as is", src_shape.yellow(), dst_shape.blue());
        return Ok(());
    };

    if dst.is_null() {
        trace!("allocating a zero {}", dst.pointee_shape().blue());
    }
    set(dst.into_pointee_or_zero(), src_pointee)
}
