use super::FieldTy;

use by_address::ByAddress;
use std::{fmt, sync::Arc};

/// A typed handle binding a remote field name to a type tag.
///
/// Fields are immutable and cheap to clone. Equality and hashing are by
/// identity: two fields created separately are distinct even when they point
/// at the same remote name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Field {
    inner: ByAddress<Arc<FieldDef>>,
}

#[derive(Debug)]
struct FieldDef {
    ty: FieldTy,
    remote_name: String,
}

impl Field {
    pub fn new(ty: FieldTy, remote_name: impl Into<String>) -> Self {
        Self {
            inner: ByAddress(Arc::new(FieldDef {
                ty,
                remote_name: remote_name.into(),
            })),
        }
    }

    pub fn ty(&self) -> FieldTy {
        self.inner.ty
    }

    /// The field name as the remote record store knows it.
    pub fn remote_name(&self) -> &str {
        &self.inner.remote_name
    }

    /// Returns `true` when both handles come from the same definition.
    pub fn ptr_eq(&self, other: &Field) -> bool {
        Arc::ptr_eq(&*self.inner, &*other.inner)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("ty", &self.ty())
            .field("remote_name", &self.remote_name())
            .finish()
    }
}
