//! Opaque annotation handles
//!
//! The host owns its annotation objects. It lends them to this layer through
//! a handle that pairs the object with its schema identity; adapters downcast
//! the payload to their concrete representation.

use super::error::{CapabilityError, CapabilityResult};
use super::kinds::SchemaId;
use std::any::Any;

/// Shared view of a host annotation, used for extraction.
pub struct AnnotationHandle<'a> {
    schema: SchemaId,
    data: &'a dyn Any,
}

impl<'a> AnnotationHandle<'a> {
    pub fn new<T: Any>(schema: impl Into<SchemaId>, data: &'a T) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }

    /// Wrap a payload the host already holds as `dyn Any`.
    pub fn from_any(schema: impl Into<SchemaId>, data: &'a dyn Any) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }

    pub fn schema(&self) -> &SchemaId {
        &self.schema
    }

    /// Attempt to downcast the payload to a specific type.
    pub fn downcast_data<T: 'static>(&self) -> Option<&'a T> {
        self.data.downcast_ref::<T>()
    }

    /// Downcast or fail with [`CapabilityError::InvalidAnnotation`].
    pub fn data<T: 'static>(&self) -> CapabilityResult<&'a T> {
        self.downcast_data::<T>()
            .ok_or_else(|| CapabilityError::InvalidAnnotation {
                schema: self.schema.clone(),
                expected: std::any::type_name::<T>(),
            })
    }
}

impl std::fmt::Debug for AnnotationHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationHandle")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Exclusive view of a host annotation, used for decoration.
///
/// The host serializes writes to any single annotation; holding the only
/// `&mut` for the duration of a call is how that shows up here.
pub struct AnnotationHandleMut<'a> {
    schema: SchemaId,
    data: &'a mut dyn Any,
}

impl<'a> AnnotationHandleMut<'a> {
    pub fn new<T: Any>(schema: impl Into<SchemaId>, data: &'a mut T) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }

    pub fn from_any(schema: impl Into<SchemaId>, data: &'a mut dyn Any) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }

    pub fn schema(&self) -> &SchemaId {
        &self.schema
    }

    pub fn downcast_data_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.data.downcast_mut::<T>()
    }

    /// Mutable downcast or fail with [`CapabilityError::InvalidAnnotation`].
    pub fn data_mut<T: 'static>(&mut self) -> CapabilityResult<&mut T> {
        let schema = &self.schema;
        self.data
            .downcast_mut::<T>()
            .ok_or_else(|| CapabilityError::InvalidAnnotation {
                schema: schema.clone(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Shared reborrow, e.g. to read back what was just written.
    pub fn as_handle(&self) -> AnnotationHandle<'_> {
        AnnotationHandle {
            schema: self.schema.clone(),
            data: &*self.data,
        }
    }
}

impl std::fmt::Debug for AnnotationHandleMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationHandleMut")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Token {
        pos: String,
    }

    #[test]
    fn downcast_to_matching_type() {
        let token = Token { pos: "NN".into() };
        let handle = AnnotationHandle::new("toy", &token);
        assert_eq!(handle.data::<Token>().unwrap().pos, "NN");
        assert_eq!(handle.schema().as_str(), "toy");
    }

    #[test]
    fn downcast_to_wrong_type_is_invalid_annotation() {
        let token = Token { pos: "NN".into() };
        let handle = AnnotationHandle::new("toy", &token);
        let err = handle.data::<String>().unwrap_err();
        assert!(matches!(err, CapabilityError::InvalidAnnotation { .. }));
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn mutable_handle_writes_through() {
        let mut token = Token { pos: "NN".into() };
        {
            let mut handle = AnnotationHandleMut::new("toy", &mut token);
            handle.data_mut::<Token>().unwrap().pos = "VB".into();
            assert_eq!(handle.as_handle().data::<Token>().unwrap().pos, "VB");
        }
        assert_eq!(token.pos, "VB");
    }
}
