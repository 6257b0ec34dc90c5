#[cfg(not(loom))]
pub(crate) mod export {
  pub(crate) mod sync {
    pub(crate) use parking_lot::Mutex;
  }
}

#[cfg(loom)]
pub(crate) mod export {
  pub(crate) mod sync {
    use std::fmt::Debug;
    use std::fmt::Formatter;
    use std::fmt::Result;
    use std::sync::PoisonError;

    /// `loom` mutex with the `parking_lot` locking signature.
    pub(crate) struct Mutex<T> {
      inner: loom::sync::Mutex<T>,
    }

    impl<T> Mutex<T> {
      #[inline]
      pub(crate) fn new(value: T) -> Self {
        Self {
          inner: loom::sync::Mutex::new(value),
        }
      }

      #[inline]
      pub(crate) fn lock(&self) -> loom::sync::MutexGuard<'_, T> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
      }
    }

    impl<T> Debug for Mutex<T> {
      fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("Mutex { .. }")
      }
    }
  }
}

#[doc(inline)]
pub(crate) use self::export::*;
