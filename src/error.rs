use std::alloc::{Layout, handle_alloc_error};

/// The error type for the fallible allocation methods, such as
/// [`RawBuffer::try_with_capacity`] and [`DynArray::try_reserve`].
///
/// A method that returns this error has not modified the container it was
/// called on.
///
/// [`RawBuffer::try_with_capacity`]: crate::RawBuffer::try_with_capacity
/// [`DynArray::try_reserve`]: crate::DynArray::try_reserve
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The number of requested slots does not fit in `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator could not satisfy the request.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    OutOfMemory {
        /// The layout that was requested from the allocator.
        layout: Layout,
    },
}

impl AllocError {
    /// Reports the error the way the infallible methods do.
    pub(crate) fn handle(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::OutOfMemory { layout } => handle_alloc_error(layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AllocError;
    use std::alloc::Layout;

    #[test]
    fn display() {
        assert_eq!(AllocError::CapacityOverflow.to_string(), "capacity overflow");
        let layout = Layout::array::<u32>(4).unwrap();
        assert_eq!(
            AllocError::OutOfMemory { layout }.to_string(),
            "memory allocation of 16 bytes failed"
        );
    }
}
