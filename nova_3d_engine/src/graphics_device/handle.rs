/// Resource handles and views - ownership of opaque hardware resources
///
/// A `ResourceHandle` owns a native resource through a shared reference
/// count and a type-erased deleter. The deleter runs exactly once, when the
/// last handle aliasing the native resource is released or dropped.
///
/// A `ResourceView` only carries the native handle. It never keeps the
/// resource alive and never triggers cleanup.
///
/// Typed resources (buffers, textures, pipelines, ...) pair a handle or view
/// with an immutable descriptor through `TypedHandle<D>` / `TypedView<D>`.

use std::fmt;
use std::sync::Arc;

// ===== NATIVE HANDLE =====

/// Opaque identifier of a hardware resource, as produced by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NativeHandle(pub u64);

/// Type-erased cleanup function invoked with the native handle
pub type Deleter = Arc<dyn Fn(NativeHandle) + Send + Sync>;

/// Shared state of all handles aliasing one native resource.
/// The Arc strong count is the reference count.
struct SharedResource {
    native: NativeHandle,
    deleter: Deleter,
}

impl Drop for SharedResource {
    fn drop(&mut self) {
        (self.deleter)(self.native);
    }
}

// ===== RESOURCE HANDLE =====

/// Owning, reference-counted handle to a native resource
///
/// - `clone()` increments the reference count
/// - moving (or `take()`) transfers ownership and leaves the source empty
/// - `assign()` releases the previous resource unless both sides already
///   alias the same native resource
/// - `release()` on an empty handle is a no-op
#[derive(Default)]
pub struct ResourceHandle {
    shared: Option<Arc<SharedResource>>,
}

impl ResourceHandle {
    /// Take ownership of a native resource
    ///
    /// # Arguments
    ///
    /// * `native` - Backend handle of the resource
    /// * `deleter` - Called once with `native` when the last handle goes away
    pub fn new<F>(native: NativeHandle, deleter: F) -> Self
    where
        F: Fn(NativeHandle) + Send + Sync + 'static,
    {
        Self::with_deleter(native, Arc::new(deleter))
    }

    /// Same as `new()` with an already shared deleter
    pub fn with_deleter(native: NativeHandle, deleter: Deleter) -> Self {
        Self {
            shared: Some(Arc::new(SharedResource { native, deleter })),
        }
    }

    /// Empty handle
    pub fn null() -> Self {
        Self { shared: None }
    }

    /// Native handle, `None` when empty
    pub fn native(&self) -> Option<NativeHandle> {
        self.shared.as_ref().map(|s| s.native)
    }

    /// Whether this handle references a resource
    pub fn is_valid(&self) -> bool {
        self.shared.is_some()
    }

    /// Whether this handle is empty
    pub fn is_null(&self) -> bool {
        self.shared.is_none()
    }

    /// Number of live handles sharing this resource (0 when empty)
    pub fn ref_count(&self) -> usize {
        self.shared.as_ref().map_or(0, Arc::strong_count)
    }

    /// Drop this handle's reference
    ///
    /// Runs the deleter if this was the last reference. Safe to call
    /// repeatedly: the handle is empty afterwards.
    pub fn release(&mut self) {
        self.shared = None;
    }

    /// Make this handle share `rhs`'s resource
    ///
    /// No-op when both handles already alias the same native resource
    /// (including when both are empty).
    pub fn assign(&mut self, rhs: &ResourceHandle) {
        if self.native() == rhs.native() {
            return;
        }
        self.release();
        self.shared = rhs.shared.clone();
    }

    /// Move the resource out, leaving this handle empty
    pub fn take(&mut self) -> ResourceHandle {
        std::mem::take(self)
    }

    /// Non-owning view of this resource
    pub fn view(&self) -> ResourceView {
        ResourceView { native: self.native() }
    }
}

impl Clone for ResourceHandle {
    fn clone(&self) -> Self {
        Self { shared: self.shared.clone() }
    }
}

impl PartialEq for ResourceHandle {
    fn eq(&self, other: &Self) -> bool {
        self.native() == other.native()
    }
}

impl Eq for ResourceHandle {}

impl fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("native", &self.native())
            .field("ref_count", &self.ref_count())
            .finish()
    }
}

// ===== RESOURCE VIEW =====

/// Non-owning alias of a native resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResourceView {
    native: Option<NativeHandle>,
}

impl ResourceView {
    /// Native handle, `None` for a null view
    pub fn native(&self) -> Option<NativeHandle> {
        self.native
    }

    /// Whether this view references a resource
    pub fn is_valid(&self) -> bool {
        self.native.is_some()
    }
}

impl From<&ResourceHandle> for ResourceView {
    fn from(handle: &ResourceHandle) -> Self {
        handle.view()
    }
}

// ===== TYPED HANDLE / VIEW =====

/// Owning handle paired with the immutable descriptor it was created from
#[derive(Clone, Debug)]
pub struct TypedHandle<D> {
    handle: ResourceHandle,
    desc: D,
}

impl<D: Copy> TypedHandle<D> {
    /// Wrap a freshly created native resource
    pub fn new(handle: ResourceHandle, desc: D) -> Self {
        Self { handle, desc }
    }

    /// Creation descriptor
    pub fn desc(&self) -> &D {
        &self.desc
    }

    /// Untyped owning handle
    pub fn handle(&self) -> &ResourceHandle {
        &self.handle
    }

    /// Native handle, `None` when empty
    pub fn native(&self) -> Option<NativeHandle> {
        self.handle.native()
    }

    /// Whether this handle references a resource
    pub fn is_valid(&self) -> bool {
        self.handle.is_valid()
    }

    /// Drop this handle's reference (see `ResourceHandle::release`)
    pub fn release(&mut self) {
        self.handle.release();
    }

    /// Non-owning typed view (descriptor fields are copied)
    pub fn view(&self) -> TypedView<D> {
        TypedView {
            view: self.handle.view(),
            desc: self.desc,
        }
    }
}

impl<D> PartialEq for TypedHandle<D> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<D> Eq for TypedHandle<D> {}

/// Non-owning typed alias carrying the cached descriptor
#[derive(Clone, Copy, Debug)]
pub struct TypedView<D> {
    view: ResourceView,
    desc: D,
}

impl<D: Copy> TypedView<D> {
    /// View of no resource; binding it clears a slot
    pub fn null(desc: D) -> Self {
        Self {
            view: ResourceView::default(),
            desc,
        }
    }

    /// Cached descriptor
    pub fn desc(&self) -> &D {
        &self.desc
    }

    /// Native handle, `None` for a null view
    pub fn native(&self) -> Option<NativeHandle> {
        self.view.native()
    }

    /// Untyped view
    pub fn untyped(&self) -> ResourceView {
        self.view
    }
}

impl<D: Copy> From<&TypedHandle<D>> for TypedView<D> {
    fn from(handle: &TypedHandle<D>) -> Self {
        handle.view()
    }
}

impl<D> PartialEq for TypedView<D> {
    fn eq(&self, other: &Self) -> bool {
        self.view == other.view
    }
}

impl<D> Eq for TypedView<D> {}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
