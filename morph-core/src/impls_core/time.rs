use core::time::Duration;

use crate::{Type, macros::impl_leaf};

impl_leaf!(Duration, "Duration", Type::Opaque, Duration::ZERO);
