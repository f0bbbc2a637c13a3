// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PageRegion - Low-level locked memory region.
//!
//! Wraps an mmap'd, page-aligned region with mlock/madvise operations.
//! Each syscall is exposed separately for granular testing.

use core::ptr;

use keyward_util::wipe_bytes;

use crate::error::PageError;

#[cfg(test)]
std::thread_local! {
    static LEAK_NEW_REGIONS: core::cell::Cell<bool> = const { core::cell::Cell::new(false) };
}

/// Regions mapped afterwards on this thread keep their mapping after `dispose`.
#[cfg(test)]
pub(crate) fn set_leak_new_regions(leak: bool) {
    LEAK_NEW_REGIONS.with(|flag| flag.set(leak));
}

/// A run of whole pages backing `len` visible bytes.
///
/// The mapping is always at least one page, so zero-length buffers still own a
/// valid (locked) mapping.
#[derive(Debug)]
pub(crate) struct PageRegion {
    ptr: *mut u8,
    capacity: usize,
    len: usize,
    #[cfg(test)]
    leak_on_release: bool,
}

unsafe impl Send for PageRegion {}
unsafe impl Sync for PageRegion {}

impl PageRegion {
    pub(crate) fn page_size() -> usize {
        unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize }
    }

    /// Rounds `len` up to whole pages (minimum one page).
    pub(crate) fn capacity_for(len: usize) -> Result<usize, PageError> {
        let page_size = Self::page_size();
        let pages = len.max(1).div_ceil(page_size);

        pages.checked_mul(page_size).ok_or(PageError::Create)
    }

    /// Maps a zero-filled region for `len` bytes. Does NOT lock.
    pub(crate) fn new(len: usize) -> Result<Self, PageError> {
        let capacity = Self::capacity_for(len)?;

        let ptr = unsafe {
            libc::mmap(
                ptr::null_mut(),
                capacity,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(PageError::Create);
        }

        let mut region = Self {
            ptr: ptr as *mut u8,
            capacity,
            len,
            #[cfg(test)]
            leak_on_release: LEAK_NEW_REGIONS.with(core::cell::Cell::get),
        };

        region.wipe();

        Ok(region)
    }

    /// Locks the region in RAM (prevents swapping to disk).
    pub(crate) fn lock(&self) -> Result<(), PageError> {
        let failed = unsafe { libc::mlock(self.ptr as *const _, self.capacity) } != 0;

        if failed {
            return Err(PageError::Lock);
        }

        Ok(())
    }

    /// Excludes the region from core dumps (Linux only).
    pub(crate) fn advise_dontdump(&self) -> Result<(), PageError> {
        #[cfg(target_os = "linux")]
        {
            let failed = unsafe {
                libc::madvise(self.ptr as *mut _, self.capacity, libc::MADV_DONTDUMP)
            } != 0;

            if failed {
                return Err(PageError::Madvise);
            }
        }

        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    /// Zeroes the whole mapping, including the slack after `len`.
    pub(crate) fn wipe(&mut self) {
        let all = unsafe { core::slice::from_raw_parts_mut(self.ptr, self.capacity) };
        wipe_bytes(all);
    }

    /// Unlocks the region (allows swapping).
    pub(crate) fn munlock(&self) {
        unsafe { libc::munlock(self.ptr as *const _, self.capacity) };
    }

    /// Wipe, unlock, unmap. In that order.
    pub(crate) fn dispose(&mut self) {
        self.wipe();
        self.munlock();

        #[cfg(test)]
        if self.leak_on_release {
            return;
        }

        self.munmap();
    }

    fn munmap(&self) {
        unsafe { libc::munmap(self.ptr as *mut libc::c_void, self.capacity) };
    }

    /// Keeps the mapping alive after `dispose` so tests can read it back.
    #[cfg(test)]
    pub(crate) fn leak_on_release(&mut self) {
        self.leak_on_release = true;
    }

    #[cfg(test)]
    pub(crate) fn raw_parts(&self) -> (*mut u8, usize) {
        (self.ptr, self.capacity)
    }
}

impl Drop for PageRegion {
    fn drop(&mut self) {
        self.dispose();
    }
}
