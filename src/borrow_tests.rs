/// ```
/// use dynarray::RawBuffer;
/// let a = RawBuffer::<u32>::with_capacity(4);
/// let b = a;
/// assert_eq!(b.capacity(), 4);
/// ```
mod raw_buffer_single_owner {
    /// ```compile_fail
    /// use dynarray::RawBuffer;
    /// let a = RawBuffer::<u32>::with_capacity(4);
    /// let b: RawBuffer<u32> = a.clone(); // Added
    /// ```
    mod clone {}

    /// ```compile_fail
    /// use dynarray::RawBuffer;
    /// let a = RawBuffer::<u32>::with_capacity(4);
    /// let b = a;
    /// assert_eq!(a.capacity(), 4); // Added
    /// ```
    mod use_after_move {}
}

/// ```
/// use dynarray::dynarray;
/// let mut array = dynarray![1, 2, 3];
/// let first = &array[0];
/// assert_eq!(*first, 1);
/// array.push(4);
/// ```
mod reference_invalidated_by_growth {
    /// ```compile_fail
    /// use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// let first = &array[0];
    /// array.push(4);
    /// assert_eq!(*first, 1); // Moved
    /// ```
    mod push {}

    /// ```compile_fail
    /// use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// for item in array.iter() {
    ///     array.insert(0, *item); // Added
    /// }
    /// ```
    mod insert_while_iterating {}

    /// ```compile_fail
    /// use dynarray::dynarray;
    /// let mut array = dynarray![1, 2, 3];
    /// let last = array.last().unwrap();
    /// array.erase(0); // Added
    /// println!("{last}");
    /// ```
    mod erase {}
}
