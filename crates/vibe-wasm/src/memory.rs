//! # Module Memory
//!
//! Buffer allocation exports so a host can place price and quantity arrays
//! inside the module's linear memory before calling
//! [`crate::abi::compute_total`].
//!
//! Every buffer is aligned to 8 bytes, which covers both `f64` and `i32`.

use std::alloc::{self, Layout};
use std::mem;
use std::ptr::{self, NonNull};

/// Alignment of every buffer handed out by [`vibe_alloc`].
pub const BUFFER_ALIGN: usize = 8;

fn buffer_layout(bytes: usize) -> Option<Layout> {
    if bytes == 0 {
        return None;
    }
    Layout::from_size_align(bytes, BUFFER_ALIGN).ok()
}

/// Allocates `bytes` bytes of module memory.
///
/// Returns null for `0` bytes, for sizes that overflow the address space,
/// and when the allocator is out of memory.
#[no_mangle]
pub extern "C" fn vibe_alloc(bytes: usize) -> *mut u8 {
    match buffer_layout(bytes) {
        // SAFETY: layout has a non-zero size.
        Some(layout) => unsafe { alloc::alloc(layout) },
        None => ptr::null_mut(),
    }
}

/// Frees a buffer returned by [`vibe_alloc`]. Null or `0` bytes is a no-op.
///
/// # Safety
/// `ptr` must come from `vibe_alloc(bytes)` with the same `bytes`, and must
/// not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn vibe_dealloc(ptr: *mut u8, bytes: usize) {
    if ptr.is_null() {
        return;
    }
    if let Some(layout) = buffer_layout(bytes) {
        // SAFETY: same layout as the matching vibe_alloc, per the contract.
        unsafe { alloc::dealloc(ptr, layout) }
    }
}

// =============================================================================
// Owned Buffer
// =============================================================================

/// A module buffer that is released on drop.
///
/// Host-side Rust code uses this to mirror the allocate/copy/call/free
/// sequence a JavaScript host performs by hand.
#[derive(Debug)]
pub struct ModuleBuffer {
    ptr: NonNull<u8>,
    bytes: usize,
}

impl ModuleBuffer {
    /// Copies `values` into a fresh module buffer.
    ///
    /// Returns `None` for an empty slice, for element types aligned above
    /// [`BUFFER_ALIGN`], or when allocation fails.
    pub fn copy_from<T: Copy>(values: &[T]) -> Option<Self> {
        if mem::align_of::<T>() > BUFFER_ALIGN {
            return None;
        }

        let bytes = mem::size_of_val(values);
        let ptr = NonNull::new(vibe_alloc(bytes))?;

        // SAFETY: the buffer holds `bytes` bytes and cannot overlap `values`.
        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr().cast::<u8>(), ptr.as_ptr(), bytes);
        }

        Some(ModuleBuffer { ptr, bytes })
    }

    /// Size in bytes.
    pub fn len_bytes(&self) -> usize {
        self.bytes
    }

    /// Typed read pointer to the start of the buffer.
    pub fn as_ptr<T>(&self) -> *const T {
        self.ptr.as_ptr().cast::<T>().cast_const()
    }
}

impl Drop for ModuleBuffer {
    fn drop(&mut self) {
        // SAFETY: allocated by vibe_alloc(self.bytes) in copy_from.
        unsafe { vibe_dealloc(self.ptr.as_ptr(), self.bytes) }
    }
}
