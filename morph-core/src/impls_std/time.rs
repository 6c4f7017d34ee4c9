use std::time::SystemTime;

use crate::{Type, macros::impl_leaf};

impl_leaf!(SystemTime, "SystemTime", Type::Opaque, SystemTime::UNIX_EPOCH);
